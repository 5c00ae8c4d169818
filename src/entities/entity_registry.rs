use crate::components::ComponentStore;
use crate::entities::Entity;
use nohash_hasher::IntMap;

/// Issues [entity](Entity) handles and owns the [ComponentStore] of every live entity.
pub struct EntityRegistry {
	next_id: u64,
	stores: IntMap<Entity, ComponentStore>,
}

impl EntityRegistry {
	pub(crate) fn new() -> Self {
		Self {
			next_id: 1,
			stores: IntMap::default(),
		}
	}

	/// Allocates a fresh handle with an empty [ComponentStore].
	pub(crate) fn create(&mut self) -> Entity {
		let entity = Entity { id: self.next_id };
		self.next_id += 1;
		self.stores.insert(entity, ComponentStore::new());
		entity
	}

	pub(crate) fn remove(&mut self, entity: Entity) -> Option<ComponentStore> {
		self.stores.remove(&entity)
	}

	#[inline(always)]
	pub fn get(&self, entity: Entity) -> Option<&ComponentStore> {
		self.stores.get(&entity)
	}

	#[inline(always)]
	pub(crate) fn get_mut(&mut self, entity: Entity) -> Option<&mut ComponentStore> {
		self.stores.get_mut(&entity)
	}

	#[inline(always)]
	pub fn contains(&self, entity: Entity) -> bool {
		self.stores.contains_key(&entity)
	}

	pub fn len(&self) -> usize {
		self.stores.len()
	}

	pub fn is_empty(&self) -> bool {
		self.stores.is_empty()
	}

	/// Iterate all live entities in no particular order.
	pub fn iter(&self) -> impl Iterator<Item = (Entity, &ComponentStore)> + '_ {
		self.stores.iter().map(|(entity, store)| (*entity, store))
	}
}
