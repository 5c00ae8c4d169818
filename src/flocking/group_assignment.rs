use crate::components::{Boid, ComponentKind, ComponentSet, Group, GroupId, Position};
use crate::flocking::neighbors::neighbors;
use crate::flocking::{report_missing, FlockConfig};
use crate::entities::{Entity, EntityStore};
use crate::systems::{ChangeSet, System};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Greedily merges nearby boids into groups.
///
/// Each selected boid without a [Group] gets a fresh id, then every neighbour within the
/// perception radius is relabelled with that id. This is a single pass over the batch in
/// entity order, not a union-find: group ids near cluster boundaries can flip from one
/// tick to the next, and the resulting partition depends on processing order.
pub struct GroupAssignment {
	perception_radius: f32,
	rng: StdRng,
}

impl GroupAssignment {
	const REQUIRED: ComponentSet = ComponentSet::of(&[ComponentKind::Position, ComponentKind::Boid]);
	const REACTIVE: ComponentSet = ComponentSet::of(&[ComponentKind::Group]);

	pub fn new(config: &FlockConfig) -> Self {
		Self::with_rng(config, StdRng::from_entropy())
	}

	pub fn with_rng(config: &FlockConfig, rng: StdRng) -> Self {
		Self {
			perception_radius: config.group_perception_radius,
			rng,
		}
	}

	fn group_of(&mut self, entities: &mut EntityStore, entity: Entity) -> GroupId {
		if let Some(group) = entities.get::<Group>(entity) {
			return group.id.clone();
		}

		let id = GroupId::generate(&mut self.rng);
		entities.add_component(entity, Group::new(id.clone()));
		id
	}
}

impl<C> System<C> for GroupAssignment {
	fn name(&self) -> &'static str {
		"GroupAssignment"
	}

	fn required(&self) -> ComponentSet {
		Self::REQUIRED
	}

	fn reactive(&self) -> ComponentSet {
		Self::REACTIVE
	}

	fn update(&mut self, entities: &mut EntityStore, changes: &ChangeSet, _: &C) {
		let located: Vec<(Entity, Position)> = changes
			.entities()
			.filter_map(|entity| match entities.get::<Position>(entity) {
				Some(position) => Some((entity, *position)),
				None => {
					report_missing("GroupAssignment", entity, ComponentKind::Position);
					None
				},
			})
			.collect();

		for subject in &located {
			debug_assert!(entities.get::<Boid>(subject.0).is_some());
			let id = self.group_of(entities, subject.0);

			let nearby: Vec<Entity> = neighbors(subject, &located, self.perception_radius)
				.map(|(neighbor, _)| neighbor.0)
				.collect();

			for neighbor in nearby {
				match entities.get::<Group>(neighbor).map(|group| group.id == id) {
					Some(true) => {},
					Some(false) => {
						if let Some(group) = entities.get_mut::<Group>(neighbor) {
							group.id = id.clone();
						}
					},
					None => {
						entities.add_component(neighbor, Group::new(id.clone()));
					},
				}
			}
		}
	}
}
