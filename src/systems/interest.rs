use crate::components::{ComponentKind, ComponentSet};
use crate::entities::Entity;
use crate::systems::SystemId;
use std::collections::BTreeSet;

/// The entities a registered system currently qualifies to process.
pub(crate) struct InterestSet {
	pub system: SystemId,
	pub name: &'static str,
	pub required: ComponentSet,
	pub reactive: ComponentSet,
	pub members: BTreeSet<Entity>,
	/// Change tick at which the system last collected its batch.
	pub last_seen: u64,
}

impl InterestSet {
	/// Required kinds the system does not consume; their raw dirty flag still selects a member.
	#[inline(always)]
	pub fn passive(&self) -> ComponentSet {
		let mut passive = self.required;
		self.reactive.iter().for_each(|kind| passive.remove(kind));
		passive
	}

	/// True if this system consumes `kind` on `entity` and has not yet seen `revision`.
	#[inline(always)]
	pub fn is_pending(&self, entity: Entity, kind: ComponentKind, revision: u64) -> bool {
		self.reactive.contains(kind) && revision > self.last_seen && self.members.contains(&entity)
	}
}
