use crate::components::ComponentKind;
use std::fmt;

/// A fixed-size set of [component kinds](ComponentKind).
///
/// Sets can be built in constant context, so a [System](crate::systems::System)'s
/// requirements are known at compile time:
/// ```
/// use flock_ecs::prelude::*;
/// const REQUIRED: ComponentSet = ComponentSet::of(&[ComponentKind::Position, ComponentKind::Boid]);
/// assert!(REQUIRED.contains(ComponentKind::Boid));
/// ```
#[derive(Copy, Clone, Default, Hash, Eq, PartialEq)]
pub struct ComponentSet {
	bits: u32,
}

const _: () = assert!(ComponentKind::COUNT <= u32::BITS as usize);

impl ComponentSet {
	pub const EMPTY: ComponentSet = ComponentSet { bits: 0 };

	/// Create a set containing the specified kinds.
	pub const fn of(kinds: &[ComponentKind]) -> Self {
		let mut bits = 0;
		let mut i = 0;
		while i < kinds.len() {
			bits |= 1 << kinds[i] as u32;
			i += 1;
		}
		Self { bits }
	}

	#[inline(always)]
	pub const fn contains(&self, kind: ComponentKind) -> bool {
		self.bits & (1 << kind as u32) != 0
	}

	#[inline(always)]
	pub const fn is_empty(&self) -> bool {
		self.bits == 0
	}

	#[inline(always)]
	pub const fn len(&self) -> usize {
		self.bits.count_ones() as usize
	}

	pub fn insert(&mut self, kind: ComponentKind) {
		self.bits |= 1 << kind as u32;
	}

	pub fn remove(&mut self, kind: ComponentKind) {
		self.bits &= !(1 << kind as u32);
	}

	#[inline(always)]
	pub const fn union(self, other: ComponentSet) -> ComponentSet {
		ComponentSet { bits: self.bits | other.bits }
	}

	#[inline(always)]
	pub const fn intersection(self, other: ComponentSet) -> ComponentSet {
		ComponentSet { bits: self.bits & other.bits }
	}

	/// True if every kind in `self` is also in `other`.
	#[inline(always)]
	pub const fn is_subset_of(&self, other: &ComponentSet) -> bool {
		self.bits & other.bits == self.bits
	}

	/// Iterate the contained kinds in declaration order.
	pub fn iter(&self) -> impl Iterator<Item = ComponentKind> + '_ {
		ComponentKind::ALL.into_iter().filter(|kind| self.contains(*kind))
	}
}

impl From<&[ComponentKind]> for ComponentSet {
	fn from(kinds: &[ComponentKind]) -> Self {
		Self::of(kinds)
	}
}

impl FromIterator<ComponentKind> for ComponentSet {
	fn from_iter<T: IntoIterator<Item = ComponentKind>>(iter: T) -> Self {
		let mut set = ComponentSet::EMPTY;
		iter.into_iter().for_each(|kind| set.insert(kind));
		set
	}
}

impl fmt::Debug for ComponentSet {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_set().entries(self.iter()).finish()
	}
}
