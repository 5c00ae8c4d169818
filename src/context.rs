use crate::systems::{System, SystemId, SystemStore};
use crate::entities::EntityStore;
use crate::error::EcsError;
use std::ops::{Deref, DerefMut};

/// A container for [entities](crate::entities::Entity) and [systems](System).
///
/// Entities, components and interest sets live in the [EntityStore] the coordinator dereferences to.
/// Systems run in registration order, once per [tick](Self::tick), each receiving the render context `C`.
pub struct Coordinator<C> {
	entity_store: EntityStore,
	system_store: SystemStore<C>,
}

impl<C> Coordinator<C> {
	pub fn new() -> Self {
		Self {
			entity_store: EntityStore::new(),
			system_store: SystemStore::new(),
		}
	}

	/// Add a new [system](System) to the end of the execution order.
	///
	/// A system with an empty required set is rejected: the rejection is logged and `None` is returned.
	pub fn register_system<S: 'static + System<C>>(&mut self, system: S) -> Option<SystemId> {
		match self.try_register_system(system) {
			Ok(id) => Some(id),
			Err(err) => {
				log::warn!("{err}");
				None
			},
		}
	}

	/// Like [register_system](Self::register_system), but reports the rejection to the caller.
	pub fn try_register_system<S: 'static + System<C>>(&mut self, system: S) -> Result<SystemId, EcsError> {
		let name = system.name();
		let required = system.required();
		if required.is_empty() {
			return Err(EcsError::EmptyRequiredSet { system: name });
		}

		let reactive = system.reactive();
		let id = self.system_store.add_system(Box::new(system));
		self.entity_store.register_interest(id, name, required, reactive);

		log::info!("registered {name} as {id} (required: {required:?}, reactive: {reactive:?})");
		Ok(id)
	}

	/// Remove a [system](System) and its interest set. Returns *false* if it wasn't registered.
	pub fn unregister_system(&mut self, id: SystemId) -> bool {
		match self.system_store.remove_system(id) {
			None => {
				log::warn!("{}", EcsError::UnknownSystem(id));
				false
			},
			Some(system) => {
				self.entity_store.unregister_interest(id);
				log::info!("unregistered {} ({id})", system.name());
				true
			},
		}
	}

	pub fn system_count(&self) -> usize {
		self.system_store.len()
	}

	/// Registered systems, in execution order.
	pub fn system_ids(&self) -> Vec<SystemId> {
		self.system_store.ids().collect()
	}

	/// Execute all [systems](System), then destroy every entity queued for destruction.
	pub fn tick(&mut self, context: &C) {
		self.system_store.run_systems(&mut self.entity_store, context);
		self.entity_store.flush_destroyed();
	}
}

impl<C> Default for Coordinator<C> {
	fn default() -> Self {
		Self::new()
	}
}

impl<C> Deref for Coordinator<C> {
	type Target = EntityStore;

	#[inline(always)]
	fn deref(&self) -> &Self::Target {
		&self.entity_store
	}
}

impl<C> DerefMut for Coordinator<C> {
	#[inline(always)]
	fn deref_mut(&mut self) -> &mut Self::Target {
		&mut self.entity_store
	}
}
