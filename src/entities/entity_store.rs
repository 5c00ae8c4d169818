use crate::components::{Component, ComponentData, ComponentKind, ComponentSet, ComponentStoreView};
use crate::entities::{Entity, EntityRegistry};
use crate::systems::{ChangeSet, InterestSet, SystemId};
use crate::error::EcsError;
use nohash_hasher::IntSet;
use std::collections::BTreeSet;

/// A container for [entities](Entity), their [components](Component) and the interest set of every
/// registered [System](crate::systems::System).
///
/// All structural changes go through this type, which re-evaluates the changed entity against every
/// system's required set so that an entity is a member of a system's interest set iff it holds all of
/// the system's required components.
pub struct EntityStore {
	registry: EntityRegistry,
	interests: Vec<InterestSet>,
	pending_destruction: IntSet<Entity>,
	change_tick: u64,
}

impl EntityStore {
	pub(crate) fn new() -> Self {
		Self {
			registry: EntityRegistry::new(),
			interests: Vec::new(),
			pending_destruction: IntSet::default(),
			change_tick: 0,
		}
	}

	/// Creates a single [entity](Entity) with no [components](Component) attached.
	pub fn create_entity(&mut self) -> Entity {
		self.registry.create()
	}

	/// Queues an [entity](Entity) for destruction.
	///
	/// The entity stays fully visible until the end of the current (or next) tick, when it is
	/// removed from the registry and from every interest set at once.
	pub fn destroy_entity(&mut self, entity: Entity) {
		if !self.registry.contains(entity) {
			log::warn!("{}", EcsError::UnknownEntity(entity));
			return;
		}
		self.pending_destruction.insert(entity);
	}

	/// True if `entity` has been queued by [destroy_entity](Self::destroy_entity) and not yet removed.
	pub fn is_pending_destruction(&self, entity: Entity) -> bool {
		self.pending_destruction.contains(&entity)
	}

	/// Attaches a [component](Component) to the specified [entity](Entity), replacing any component of the same kind.
	/// The new component starts out dirty.
	///
	/// Returns *false* if the entity does not exist.
	pub fn add_component(&mut self, entity: Entity, component: impl Into<Component>) -> bool {
		let component = component.into();
		match self.registry.get_mut(entity) {
			None => {
				log::warn!("cannot add {} component: {}", component.kind().name(), EcsError::UnknownEntity(entity));
				false
			},
			Some(store) => {
				self.change_tick += 1;
				store.insert(component, self.change_tick);
				self.check_entity(entity);
				true
			},
		}
	}

	/// Detaches the [component](Component) of the given kind, returning it if it was present.
	pub fn remove_component(&mut self, entity: Entity, kind: ComponentKind) -> Option<Component> {
		let removed = self.registry.get_mut(entity)?.remove(kind);
		self.check_entity(entity);
		removed
	}

	/// Gets a read-only view of all [components](Component) bound to an [entity](Entity).
	pub fn get_components(&self, entity: Entity) -> Option<ComponentStoreView<'_>> {
		self.registry.get(entity).map(|store| store.view())
	}

	/// Gets a reference to a [component](Component) bound to a specific [entity](Entity).
	pub fn get<T: ComponentData>(&self, entity: Entity) -> Option<&T> {
		self.registry.get(entity)?.get::<T>()
	}

	/// Gets a mutable reference to a [component](Component) bound to a specific [entity](Entity)
	/// and marks that component as dirty.
	pub fn get_mut<T: ComponentData>(&mut self, entity: Entity) -> Option<&mut T> {
		let store = self.registry.get_mut(entity)?;
		if !store.has(T::KIND) {
			return None;
		}
		self.change_tick += 1;
		store.get_mut::<T>(self.change_tick)
	}

	pub fn contains(&self, entity: Entity) -> bool {
		self.registry.contains(entity)
	}

	pub fn entity_count(&self) -> usize {
		self.registry.len()
	}

	/// All live entities, in creation order.
	pub fn entities(&self) -> Vec<Entity> {
		let mut entities: Vec<_> = self.registry.iter().map(|(entity, _)| entity).collect();
		entities.sort_unstable();
		entities
	}

	/// The entities currently satisfying the required set of the specified system.
	pub fn interest(&self, system: SystemId) -> Option<&BTreeSet<Entity>> {
		self.interest_set(system).map(|interest| &interest.members)
	}

	pub fn is_interested(&self, system: SystemId, entity: Entity) -> bool {
		self.interest(system).map_or(false, |members| members.contains(&entity))
	}

	pub(crate) fn register_interest(
		&mut self, system: SystemId, name: &'static str, required: ComponentSet, reactive: ComponentSet,
	) {
		let members = self
			.registry
			.iter()
			.filter(|(_, store)| store.has_all(required))
			.map(|(entity, _)| entity)
			.collect();

		self.interests.push(InterestSet {
			system,
			name,
			required,
			reactive,
			members,
			last_seen: 0,
		});
	}

	pub(crate) fn unregister_interest(&mut self, system: SystemId) -> bool {
		let before = self.interests.len();
		self.interests.retain(|interest| interest.system != system);
		self.interests.len() != before
	}

	/// Builds the batch of a system for this tick.
	///
	/// A member is selected if one of the system's reactive components changed since the system's last
	/// batch, or if one of its other required components is dirty. Afterwards, the dirty flag of every
	/// reactive component consumed here is lowered if no other reacting system still has to see it.
	pub(crate) fn collect_changes(&mut self, system: SystemId) -> ChangeSet {
		let Self { registry, interests, change_tick, .. } = self;
		let index = match interests.iter().position(|interest| interest.system == system) {
			None => return ChangeSet::default(),
			Some(index) => index,
		};

		let interest = &interests[index];
		let passive = interest.passive();
		let mut changes = ChangeSet::with_capacity(interest.members.len());

		for &entity in &interest.members {
			let store = match registry.get(entity) {
				None => continue,
				Some(store) => store,
			};

			let mut changed = store.dirty().intersection(passive);
			for kind in interest.reactive.iter() {
				if let Some(revision) = store.revision(kind) {
					if interest.is_pending(entity, kind, revision) {
						changed.insert(kind);
					}
				}
			}

			if !changed.is_empty() {
				changes.push(entity, changed);
			}
		}

		log::trace!("{}: {} of {} entities changed", interest.name, changes.len(), interest.members.len());

		let reactive = interest.reactive;
		interests[index].last_seen = *change_tick;

		for (entity, changed) in changes.iter() {
			let store = match registry.get_mut(entity) {
				None => continue,
				Some(store) => store,
			};

			for kind in changed.intersection(reactive).iter() {
				let revision = match store.revision(kind) {
					None => continue,
					Some(revision) => revision,
				};
				if !interests.iter().any(|other| other.is_pending(entity, kind, revision)) {
					store.clear_dirty(kind, revision);
				}
			}
		}

		changes
	}

	/// Removes every entity queued for destruction. Returns the number of entities removed.
	pub(crate) fn flush_destroyed(&mut self) -> usize {
		let mut destroyed = 0;
		for entity in std::mem::take(&mut self.pending_destruction) {
			if self.registry.remove(entity).is_some() {
				destroyed += 1;
			}
			for interest in &mut self.interests {
				interest.members.remove(&entity);
			}
		}

		if destroyed > 0 {
			log::debug!("destroyed {destroyed} entities");
		}
		destroyed
	}

	fn interest_set(&self, system: SystemId) -> Option<&InterestSet> {
		self.interests.iter().find(|interest| interest.system == system)
	}

	fn check_entity(&mut self, entity: Entity) {
		let kinds = self.registry.get(entity).map(|store| store.kinds());
		for interest in &mut self.interests {
			match kinds {
				Some(kinds) if interest.required.is_subset_of(&kinds) => interest.members.insert(entity),
				_ => interest.members.remove(&entity),
			};
		}
	}
}
