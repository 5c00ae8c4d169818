use crate::components::{Component, ComponentData, ComponentKind, ComponentSet};

struct Slot {
	component: Component,
	dirty: bool,
	revision: u64,
}

/// Per-entity storage holding at most one [Component] of each [kind](ComponentKind).
///
/// Every component carries a dirty flag and a revision. Both are set when the component is inserted
/// and whenever a mutable reference to it is handed out; only the [Coordinator](crate::Coordinator)
/// lowers the flag, once every system reacting to the component has seen its latest revision.
#[derive(Default)]
pub struct ComponentStore {
	slots: [Option<Slot>; ComponentKind::COUNT],
	kinds: ComponentSet,
}

impl ComponentStore {
	pub(crate) fn new() -> Self {
		Self::default()
	}

	/// Inserts `component`, replacing and returning any component of the same kind.
	pub(crate) fn insert(&mut self, component: Component, revision: u64) -> Option<Component> {
		let kind = component.kind();
		self.kinds.insert(kind);
		let previous = self.slots[kind.index()].replace(Slot {
			component,
			dirty: true,
			revision,
		});
		previous.map(|slot| slot.component)
	}

	pub(crate) fn remove(&mut self, kind: ComponentKind) -> Option<Component> {
		self.kinds.remove(kind);
		self.slots[kind.index()].take().map(|slot| slot.component)
	}

	pub fn get<T: ComponentData>(&self) -> Option<&T> {
		let slot = self.slots[T::KIND.index()].as_ref()?;
		T::from_component(&slot.component)
	}

	/// Gets a mutable reference to a component, marks it as dirty and stamps it with `revision`.
	pub(crate) fn get_mut<T: ComponentData>(&mut self, revision: u64) -> Option<&mut T> {
		let slot = self.slots[T::KIND.index()].as_mut()?;
		slot.dirty = true;
		slot.revision = revision;
		T::from_component_mut(&mut slot.component)
	}

	#[inline(always)]
	pub fn has(&self, kind: ComponentKind) -> bool {
		self.kinds.contains(kind)
	}

	#[inline(always)]
	pub fn has_all(&self, kinds: ComponentSet) -> bool {
		kinds.is_subset_of(&self.kinds)
	}

	#[inline(always)]
	pub fn kinds(&self) -> ComponentSet {
		self.kinds
	}

	pub fn is_dirty(&self, kind: ComponentKind) -> bool {
		matches!(&self.slots[kind.index()], Some(slot) if slot.dirty)
	}

	/// The kinds whose dirty flag is currently raised.
	pub fn dirty(&self) -> ComponentSet {
		self.slots
			.iter()
			.zip(ComponentKind::ALL)
			.filter_map(|(slot, kind)| slot.as_ref().filter(|s| s.dirty).map(|_| kind))
			.collect()
	}

	/// True if any component is dirty.
	pub fn is_any_dirty(&self) -> bool {
		self.slots.iter().flatten().any(|slot| slot.dirty)
	}

	/// Revision stamped on the component by its last insertion or mutable access.
	#[inline(always)]
	pub fn revision(&self, kind: ComponentKind) -> Option<u64> {
		self.slots[kind.index()].as_ref().map(|slot| slot.revision)
	}

	/// Lowers the dirty flag, unless the component changed after `revision` was observed.
	pub(crate) fn clear_dirty(&mut self, kind: ComponentKind, revision: u64) -> bool {
		match &mut self.slots[kind.index()] {
			Some(slot) if slot.revision == revision => {
				slot.dirty = false;
				true
			},
			_ => false,
		}
	}

	pub fn view(&self) -> ComponentStoreView<'_> {
		ComponentStoreView { store: self }
	}
}

/// A read-only view of an entity's [ComponentStore].
///
/// Structural changes must go through the [EntityStore](crate::entities::EntityStore)
/// so that system interest sets stay consistent.
#[derive(Copy, Clone)]
pub struct ComponentStoreView<'l> {
	store: &'l ComponentStore,
}

impl<'l> ComponentStoreView<'l> {
	pub fn get<T: ComponentData>(&self) -> Option<&'l T> {
		self.store.get::<T>()
	}

	pub fn has(&self, kind: ComponentKind) -> bool {
		self.store.has(kind)
	}

	pub fn has_all(&self, kinds: ComponentSet) -> bool {
		self.store.has_all(kinds)
	}

	pub fn kinds(&self) -> ComponentSet {
		self.store.kinds()
	}

	pub fn is_dirty(&self, kind: ComponentKind) -> bool {
		self.store.is_dirty(kind)
	}

	pub fn dirty(&self) -> ComponentSet {
		self.store.dirty()
	}

	pub fn is_any_dirty(&self) -> bool {
		self.store.is_any_dirty()
	}

	pub fn revision(&self, kind: ComponentKind) -> Option<u64> {
		self.store.revision(kind)
	}
}
