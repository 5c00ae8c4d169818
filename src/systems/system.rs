use crate::components::ComponentSet;
use crate::entities::EntityStore;
use crate::systems::ChangeSet;
use std::fmt;

/// It provides the logic for modifying the state of [Entities](crate::entities::Entity)
/// and their associated [Components](crate::components::Component).
///
/// `C` is the render context forwarded unmodified from [tick](crate::Coordinator::tick).
pub trait System<C> {
	/// Name used in diagnostics.
	fn name(&self) -> &'static str {
		std::any::type_name::<Self>()
	}

	/// Components an entity must hold to be processed by the [System].
	/// Read once at registration; must not be empty.
	fn required(&self) -> ComponentSet;

	/// Components whose dirty flag this [System] consumes.
	fn reactive(&self) -> ComponentSet {
		ComponentSet::EMPTY
	}

	/// Executes the system on this tick's batch.
	fn update(&mut self, entities: &mut EntityStore, changes: &ChangeSet, context: &C);
}

/// Handle to a registered [System].
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct SystemId(pub(crate) u32);

impl fmt::Display for SystemId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "system #{}", self.0)
	}
}
