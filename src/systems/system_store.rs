use crate::entities::EntityStore;
use crate::systems::{System, SystemId};

struct SystemSlot<C> {
	id: SystemId,
	system: Box<dyn System<C>>,
}

/// The registered systems, in execution order.
pub(crate) struct SystemStore<C> {
	next_id: u32,
	systems: Vec<SystemSlot<C>>,
}

impl<C> SystemStore<C> {
	pub fn new() -> Self {
		Self {
			next_id: 0,
			systems: Vec::new(),
		}
	}

	pub fn add_system(&mut self, system: Box<dyn System<C>>) -> SystemId {
		let id = SystemId(self.next_id);
		self.next_id += 1;
		self.systems.push(SystemSlot { id, system });
		id
	}

	pub fn remove_system(&mut self, id: SystemId) -> Option<Box<dyn System<C>>> {
		let index = self.systems.iter().position(|slot| slot.id == id)?;
		Some(self.systems.remove(index).system)
	}

	pub fn len(&self) -> usize {
		self.systems.len()
	}

	pub fn ids(&self) -> impl Iterator<Item = SystemId> + '_ {
		self.systems.iter().map(|slot| slot.id)
	}

	pub fn run_systems(&mut self, entities: &mut EntityStore, context: &C) {
		for slot in &mut self.systems {
			let changes = entities.collect_changes(slot.id);
			if changes.is_empty() {
				continue;
			}
			slot.system.update(entities, &changes, context);
		}
	}
}
