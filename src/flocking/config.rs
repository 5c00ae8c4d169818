use serde::{Deserialize, Serialize};
use crate::error::ConfigError;
use std::time::Duration;

/// Tunables shared by the flocking systems.
///
/// Missing fields fall back to their defaults when deserialized.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlockConfig {
	/// Radius within which [GroupAssignment](crate::flocking::GroupAssignment) merges neighbours into a group.
	pub group_perception_radius: f32,
	/// Radius within which [SteeringBehavior](crate::flocking::SteeringBehavior) considers neighbours.
	pub flock_perception_radius: f32,
	/// Maximum magnitude of each of the alignment, cohesion and separation forces.
	pub max_force: f32,
	/// Maximum velocity magnitude, in units per tick.
	pub max_speed: f32,
	/// Magnitude of the push away from each neighbour of a different group.
	pub repulsion_strength: f32,
	/// Length of one colour transition, in milliseconds.
	pub color_transition_ms: u64,
	pub color_alpha: f32,
	pub wobble_amplitude: f32,
	pub wobble_frequency_min: f32,
	pub wobble_frequency_max: f32,
}

impl Default for FlockConfig {
	fn default() -> Self {
		Self {
			group_perception_radius: 150.0,
			flock_perception_radius: 100.0,
			max_force: 0.67,
			max_speed: 2.0,
			repulsion_strength: 2.0,
			color_transition_ms: 10_000,
			color_alpha: 1.0,
			wobble_amplitude: 0.5,
			wobble_frequency_min: 0.5,
			wobble_frequency_max: 1.0,
		}
	}
}

impl FlockConfig {
	/// Parses and validates a JSON document.
	pub fn from_json(json: &str) -> Result<Self, ConfigError> {
		let config: FlockConfig = serde_json::from_str(json)?;
		config.validate()?;
		Ok(config)
	}

	pub fn color_transition(&self) -> Duration {
		Duration::from_millis(self.color_transition_ms)
	}

	pub fn validate(&self) -> Result<(), ConfigError> {
		let non_negative = [
			("group_perception_radius", self.group_perception_radius),
			("flock_perception_radius", self.flock_perception_radius),
			("max_force", self.max_force),
			("max_speed", self.max_speed),
			("repulsion_strength", self.repulsion_strength),
			("wobble_amplitude", self.wobble_amplitude),
			("wobble_frequency_min", self.wobble_frequency_min),
			("wobble_frequency_max", self.wobble_frequency_max),
		];

		for (name, value) in non_negative {
			if !value.is_finite() || value < 0.0 {
				return Err(invalid(name, value, "must be finite and non-negative"));
			}
		}

		if !(0.0..=1.0).contains(&self.color_alpha) {
			return Err(invalid("color_alpha", self.color_alpha, "must be within [0, 1]"));
		}
		if self.wobble_frequency_min > self.wobble_frequency_max {
			return Err(invalid(
				"wobble_frequency_min",
				self.wobble_frequency_min,
				"must not exceed wobble_frequency_max",
			));
		}
		if self.color_transition_ms == 0 {
			return Err(ConfigError::InvalidParameter {
				name: "color_transition_ms",
				value: 0.0,
				reason: "must be greater than zero",
			});
		}

		Ok(())
	}
}

fn invalid(name: &'static str, value: f32, reason: &'static str) -> ConfigError {
	ConfigError::InvalidParameter {
		name,
		value: f64::from(value),
		reason,
	}
}
