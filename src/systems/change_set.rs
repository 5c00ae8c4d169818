use crate::components::ComponentSet;
use crate::entities::Entity;

/// The batch handed to a [System](crate::systems::System) for one tick.
///
/// Lists, in creation order, every member of the system's interest set that had a pending change
/// when the system's turn came, together with the kinds that caused its selection.
#[derive(Clone, Debug, Default)]
pub struct ChangeSet {
	entries: Vec<(Entity, ComponentSet)>,
}

impl ChangeSet {
	pub(crate) fn with_capacity(capacity: usize) -> Self {
		Self { entries: Vec::with_capacity(capacity) }
	}

	pub(crate) fn push(&mut self, entity: Entity, changed: ComponentSet) {
		debug_assert!(self.entries.last().map_or(true, |(last, _)| *last < entity));
		self.entries.push((entity, changed));
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn entities(&self) -> impl ExactSizeIterator<Item = Entity> + '_ {
		self.entries.iter().map(|(entity, _)| *entity)
	}

	pub fn iter(&self) -> impl ExactSizeIterator<Item = (Entity, ComponentSet)> + '_ {
		self.entries.iter().copied()
	}

	pub fn contains(&self, entity: Entity) -> bool {
		self.index_of(entity).is_some()
	}

	/// The kinds that caused `entity` to be selected; empty if it wasn't.
	pub fn changed(&self, entity: Entity) -> ComponentSet {
		self.index_of(entity).map_or(ComponentSet::EMPTY, |i| self.entries[i].1)
	}

	fn index_of(&self, entity: Entity) -> Option<usize> {
		self.entries.binary_search_by_key(&entity, |(e, _)| *e).ok()
	}
}
