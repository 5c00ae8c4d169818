use crate::components::{ComponentKind, ComponentSet, Position};
use crate::flocking::{report_missing, ViewportExtent};
use crate::entities::EntityStore;
use crate::systems::{ChangeSet, System};

/// Wraps boids that left the viewport around to the opposite edge.
///
/// The extent is read from the render context on every tick.
#[derive(Default)]
pub struct BoundaryWrapping;

impl BoundaryWrapping {
	const REQUIRED: ComponentSet =
		ComponentSet::of(&[ComponentKind::Position, ComponentKind::Velocity, ComponentKind::Boid]);
}

/// The wrapped coordinate, or `None` if `value` lies within `[0, extent]`.
#[inline(always)]
pub(crate) fn wrap(value: f32, extent: f32) -> Option<f32> {
	if value < 0.0 {
		Some(extent)
	} else if value > extent {
		Some(0.0)
	} else {
		None
	}
}

impl<C: ViewportExtent> System<C> for BoundaryWrapping {
	fn name(&self) -> &'static str {
		"BoundaryWrapping"
	}

	fn required(&self) -> ComponentSet {
		Self::REQUIRED
	}

	fn update(&mut self, entities: &mut EntityStore, changes: &ChangeSet, context: &C) {
		let (width, height) = (context.width(), context.height());

		for entity in changes.entities() {
			let position = match entities.get::<Position>(entity) {
				Some(position) => *position,
				None => {
					report_missing("BoundaryWrapping", entity, ComponentKind::Position);
					continue;
				},
			};

			let x = wrap(position.x, width);
			let y = wrap(position.y, height);
			if x.is_none() && y.is_none() {
				continue;
			}

			if let Some(position) = entities.get_mut::<Position>(entity) {
				position.x = x.unwrap_or(position.x);
				position.y = y.unwrap_or(position.y);
			}
		}
	}
}
