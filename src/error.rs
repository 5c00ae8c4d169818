//! Error types.
//!
//! Nothing in here ever escapes [tick](crate::Coordinator::tick): errors raised while
//! systems run are logged and the offending entity is skipped for the current tick.

use crate::components::ComponentKind;
use crate::entities::Entity;
use crate::systems::SystemId;
use thiserror::Error;

/// Misuse of the ECS or a broken invariant detected at runtime.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EcsError {
	/// A system declared no required components and would match every entity.
	#[error("system `{system}` not registered: its required component set is empty")]
	EmptyRequiredSet {
		/// Name of the rejected system.
		system: &'static str,
	},

	/// A system was handed an entity lacking a component implied by its required set.
	#[error("system `{system}`: {entity} is missing its {} component", .kind.name())]
	MissingComponent {
		system: &'static str,
		entity: Entity,
		kind: ComponentKind,
	},

	#[error("{0} does not exist")]
	UnknownEntity(Entity),

	#[error("{0} is not registered")]
	UnknownSystem(SystemId),
}

/// Errors produced while loading or validating a [FlockConfig](crate::flocking::FlockConfig).
#[derive(Error, Debug)]
pub enum ConfigError {
	#[error("failed to parse configuration: {0}")]
	Parse(#[from] serde_json::Error),

	#[error("invalid value {value} for `{name}`: {reason}")]
	InvalidParameter {
		name: &'static str,
		value: f64,
		reason: &'static str,
	},
}
