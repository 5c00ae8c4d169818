use crate::components::{ComponentKind, ComponentSet, Position, Velocity};
use crate::entities::EntityStore;
use crate::flocking::report_missing;
use crate::systems::{ChangeSet, System};

/// Integrates velocity into position: `position += velocity`, once per tick.
#[derive(Default)]
pub struct Movement;

impl Movement {
	const REQUIRED: ComponentSet =
		ComponentSet::of(&[ComponentKind::Position, ComponentKind::Velocity, ComponentKind::Boid]);
	const REACTIVE: ComponentSet = ComponentSet::of(&[ComponentKind::Position]);
}

impl<C> System<C> for Movement {
	fn name(&self) -> &'static str {
		"Movement"
	}

	fn required(&self) -> ComponentSet {
		Self::REQUIRED
	}

	fn reactive(&self) -> ComponentSet {
		Self::REACTIVE
	}

	fn update(&mut self, entities: &mut EntityStore, changes: &ChangeSet, _: &C) {
		for entity in changes.entities() {
			let velocity = match entities.get::<Velocity>(entity) {
				Some(velocity) => *velocity,
				None => {
					report_missing("Movement", entity, ComponentKind::Velocity);
					continue;
				},
			};

			match entities.get_mut::<Position>(entity) {
				Some(position) => {
					position.x += velocity.x;
					position.y += velocity.y;
				},
				None => report_missing("Movement", entity, ComponentKind::Position),
			}
		}
	}
}
