//! The flocking simulation, expressed as six [systems](crate::systems::System).
//!
//! [install] registers them in the order they depend on each other:
//! group assignment, colour transition, wobble, steering, boundary wrapping and finally movement.
//! Group assignment must precede steering so repulsion sees group data, and movement must come last
//! so that it integrates the final velocity.

mod boundary;
mod clock;
mod color_transition;
mod config;
mod group_assignment;
mod movement;
mod neighbors;
mod seed;
mod steering;
mod viewport;
mod wobble;

pub use boundary::*;
pub use clock::*;
pub use color_transition::*;
pub use config::*;
pub use group_assignment::*;
pub use movement::*;
pub use neighbors::*;
pub use seed::*;
pub use steering::SteeringBehavior;
pub use viewport::*;
pub use wobble::*;

use crate::components::ComponentKind;
use crate::Coordinator;
use crate::entities::Entity;
use crate::error::EcsError;
use crate::systems::SystemId;

/// Ids of the flocking systems, as returned by [install].
#[derive(Copy, Clone, Debug)]
pub struct FlockSystems {
	pub group_assignment: SystemId,
	pub color_transition: SystemId,
	pub wobble: SystemId,
	pub steering: SystemId,
	pub boundary: SystemId,
	pub movement: SystemId,
}

/// Registers the flocking systems, reading time from the [SystemClock].
pub fn install<C: 'static + ViewportExtent>(
	coordinator: &mut Coordinator<C>, config: &FlockConfig,
) -> Result<FlockSystems, EcsError> {
	install_with_clock(coordinator, config, SystemClock)
}

/// Registers the flocking systems, with the colour and wobble systems reading time from `clock`.
pub fn install_with_clock<C: 'static + ViewportExtent, K: 'static + Clock + Clone>(
	coordinator: &mut Coordinator<C>, config: &FlockConfig, clock: K,
) -> Result<FlockSystems, EcsError> {
	Ok(FlockSystems {
		group_assignment: coordinator.try_register_system(GroupAssignment::new(config))?,
		color_transition: coordinator.try_register_system(ColorTransition::with_clock(config, clock.clone()))?,
		wobble: coordinator.try_register_system(WobbleMotion::with_clock(clock))?,
		steering: coordinator.try_register_system(SteeringBehavior::new(config))?,
		boundary: coordinator.try_register_system(BoundaryWrapping)?,
		movement: coordinator.try_register_system(Movement)?,
	})
}

pub(crate) fn report_missing(system: &'static str, entity: Entity, kind: ComponentKind) {
	log::error!("{}", EcsError::MissingComponent { system, entity, kind });
}
