use crate::components::{ComponentKind, ComponentSet, Position, Wobble};
use crate::flocking::{report_missing, Clock, SystemClock};
use crate::entities::EntityStore;
use crate::systems::{ChangeSet, System};

/// Adds each boid's [Wobble] sinusoid, evaluated at the current time, to its [Position].
pub struct WobbleMotion {
	clock: Box<dyn Clock>,
}

impl WobbleMotion {
	const REQUIRED: ComponentSet =
		ComponentSet::of(&[ComponentKind::Wobble, ComponentKind::Position, ComponentKind::Boid]);

	pub fn new() -> Self {
		Self::with_clock(SystemClock)
	}

	pub fn with_clock(clock: impl Clock + 'static) -> Self {
		Self { clock: Box::new(clock) }
	}
}

impl Default for WobbleMotion {
	fn default() -> Self {
		Self::new()
	}
}

impl<C> System<C> for WobbleMotion {
	fn name(&self) -> &'static str {
		"WobbleMotion"
	}

	fn required(&self) -> ComponentSet {
		Self::REQUIRED
	}

	fn update(&mut self, entities: &mut EntityStore, changes: &ChangeSet, _: &C) {
		let t = self.clock.seconds();

		for entity in changes.entities() {
			let (dx, dy) = match entities.get::<Wobble>(entity) {
				Some(wobble) => wobble.offset_at(t),
				None => {
					report_missing("WobbleMotion", entity, ComponentKind::Wobble);
					continue;
				},
			};

			match entities.get_mut::<Position>(entity) {
				Some(position) => {
					position.x += dx;
					position.y += dy;
				},
				None => report_missing("WobbleMotion", entity, ComponentKind::Position),
			}
		}
	}
}
