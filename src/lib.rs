pub mod components;
pub mod entities;
pub mod systems;
pub mod flocking;
pub mod error;
mod context;

pub use context::Coordinator;

pub mod prelude {
	pub use crate::systems::*;
	pub use crate::components::*;
	pub use crate::context::Coordinator;
	pub use crate::error::{ConfigError, EcsError};
	pub use crate::entities::{Entity, EntityStore};
	pub use crate::flocking::{
		install, install_with_clock, spawn_boids, Clock, FlockConfig, FlockSystems, ManualClock, SystemClock,
		Viewport, ViewportExtent,
	};
}

#[cfg(test)]
mod tests;
