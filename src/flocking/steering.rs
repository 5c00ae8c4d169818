use crate::components::{ComponentKind, ComponentSet, GroupId, Position, Velocity};
use crate::flocking::neighbors::{neighbors, Located};
use crate::flocking::{report_missing, FlockConfig};
use crate::entities::{Entity, EntityStore};
use crate::systems::{ChangeSet, System};
use nalgebra_glm::{self as glm, Vec2};

/// Applies alignment, cohesion, separation and inter-group repulsion to each boid's velocity.
///
/// Forces are computed from a snapshot of the batch taken before any velocity is written,
/// so the result does not depend on the order boids are visited in.
pub struct SteeringBehavior {
	perception_radius: f32,
	max_force: f32,
	max_speed: f32,
	repulsion_strength: f32,
}

struct Agent {
	entity: Entity,
	position: Position,
	velocity: Vec2,
	group: GroupId,
}

impl Located for Agent {
	#[inline(always)]
	fn entity(&self) -> Entity {
		self.entity
	}

	#[inline(always)]
	fn position(&self) -> &Position {
		&self.position
	}
}

/// Scales `v` down to `max` if it is longer.
#[inline(always)]
pub(crate) fn limit(v: Vec2, max: f32) -> Vec2 {
	let length = glm::length(&v);
	if length > max && length > 0.0 {
		v * (max / length)
	} else {
		v
	}
}

#[inline(always)]
fn is_finite(v: &Vec2) -> bool {
	v.x.is_finite() && v.y.is_finite()
}

impl SteeringBehavior {
	const REQUIRED: ComponentSet = ComponentSet::of(&[
		ComponentKind::Position,
		ComponentKind::Velocity,
		ComponentKind::Boid,
		ComponentKind::Group,
	]);
	const REACTIVE: ComponentSet = ComponentSet::of(&[ComponentKind::Velocity]);

	pub fn new(config: &FlockConfig) -> Self {
		Self {
			perception_radius: config.flock_perception_radius,
			max_force: config.max_force,
			max_speed: config.max_speed,
			repulsion_strength: config.repulsion_strength,
		}
	}

	/// The new velocity of `agent`, or `None` if it has no neighbours.
	fn steer(&self, agent: &Agent, agents: &[Agent]) -> Option<Vec2> {
		let position = agent.position.as_vec();
		let mut alignment = Vec2::zeros();
		let mut cohesion = Vec2::zeros();
		let mut separation = Vec2::zeros();
		let mut repulsion = Vec2::zeros();
		let mut count = 0usize;

		for (neighbor, distance) in neighbors(agent, agents, self.perception_radius) {
			count += 1;
			alignment += neighbor.velocity;
			cohesion += neighbor.position.as_vec();

			// Coincident boids have no direction to push apart along.
			if distance <= 0.0 {
				continue;
			}

			let away = (position - neighbor.position.as_vec()) / distance;
			let push = away / distance;
			if is_finite(&push) {
				separation += push;
			}
			if neighbor.group != agent.group {
				repulsion += away * self.repulsion_strength;
			}
		}

		if count == 0 {
			return None;
		}

		let inv_count = 1.0 / count as f32;
		alignment *= inv_count;
		cohesion = cohesion * inv_count - position;
		separation *= inv_count;

		let steering = limit(alignment, self.max_force)
			+ limit(cohesion, self.max_force)
			+ limit(separation, self.max_force)
			+ repulsion;

		Some(limit(agent.velocity + steering, self.max_speed))
	}

	fn snapshot(entities: &EntityStore, changes: &ChangeSet) -> Vec<Agent> {
		changes
			.entities()
			.filter_map(|entity| {
				let components = entities.get_components(entity)?;
				let (position, velocity, group) = match (
					components.position(),
					components.velocity(),
					components.group(),
				) {
					(Some(p), Some(v), Some(g)) => (p, v, g),
					(p, v, _) => {
						let kind = match (p, v) {
							(None, _) => ComponentKind::Position,
							(_, None) => ComponentKind::Velocity,
							_ => ComponentKind::Group,
						};
						report_missing("SteeringBehavior", entity, kind);
						return None;
					},
				};

				Some(Agent {
					entity,
					position: *position,
					velocity: velocity.as_vec(),
					group: group.id.clone(),
				})
			})
			.collect()
	}

	#[cfg(not(feature = "parallel"))]
	fn steer_all(&self, agents: &[Agent]) -> Vec<(Entity, Vec2)> {
		agents
			.iter()
			.filter_map(|agent| Some((agent.entity, self.steer(agent, agents)?)))
			.collect()
	}

	#[cfg(feature = "parallel")]
	fn steer_all(&self, agents: &[Agent]) -> Vec<(Entity, Vec2)> {
		use rayon::prelude::*;
		agents
			.par_iter()
			.filter_map(|agent| Some((agent.entity, self.steer(agent, agents)?)))
			.collect()
	}
}

impl<C> System<C> for SteeringBehavior {
	fn name(&self) -> &'static str {
		"SteeringBehavior"
	}

	fn required(&self) -> ComponentSet {
		Self::REQUIRED
	}

	fn reactive(&self) -> ComponentSet {
		Self::REACTIVE
	}

	fn update(&mut self, entities: &mut EntityStore, changes: &ChangeSet, _: &C) {
		let agents = Self::snapshot(entities, changes);

		for (entity, velocity) in self.steer_all(&agents) {
			if let Some(current) = entities.get_mut::<Velocity>(entity) {
				*current = Velocity::from(velocity);
			}
		}
	}
}
