use crate::components::{Color, ComponentKind, ComponentSet, Rgba};
use crate::flocking::{Clock, FlockConfig, SystemClock};
use crate::entities::EntityStore;
use crate::systems::{ChangeSet, System};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

/// One timed linear transition between two colours.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorCycle {
	from: Rgba,
	to: Rgba,
	started: Duration,
	duration: Duration,
}

impl ColorCycle {
	pub fn new(from: Rgba, to: Rgba, started: Duration, duration: Duration) -> Self {
		Self { from, to, started, duration }
	}

	pub fn start_color(&self) -> Rgba {
		self.from
	}

	pub fn target_color(&self) -> Rgba {
		self.to
	}

	pub fn started(&self) -> Duration {
		self.started
	}

	/// Fraction of the transition elapsed at `now`, clamped to `[0, 1]`.
	pub fn progress(&self, now: Duration) -> f32 {
		if self.duration.is_zero() {
			return 1.0;
		}
		let elapsed = now.saturating_sub(self.started).as_secs_f64();
		(elapsed / self.duration.as_secs_f64()).min(1.0) as f32
	}

	pub fn sample(&self, now: Duration) -> Rgba {
		self.from.lerp(&self.to, self.progress(now))
	}

	/// Starts the next transition from the current target towards `next`.
	pub fn roll_over(&mut self, next: Rgba, now: Duration) {
		self.from = self.to;
		self.to = next;
		self.started = now;
	}
}

/// Drives one flock-wide colour cycle: every selected boid is painted with the same
/// interpolated colour, and a new random target is picked each time a transition completes.
pub struct ColorTransition {
	cycle: ColorCycle,
	alpha: f32,
	clock: Box<dyn Clock>,
	rng: StdRng,
}

impl ColorTransition {
	const REQUIRED: ComponentSet =
		ComponentSet::of(&[ComponentKind::Position, ComponentKind::Boid, ComponentKind::Group]);

	pub fn new(config: &FlockConfig) -> Self {
		Self::with_clock(config, SystemClock)
	}

	pub fn with_clock(config: &FlockConfig, clock: impl Clock + 'static) -> Self {
		let mut rng = StdRng::from_entropy();
		let alpha = config.color_alpha;
		let from = Rgba::random(&mut rng, alpha);
		let to = Rgba::random(&mut rng, alpha);
		let cycle = ColorCycle::new(from, to, clock.now(), config.color_transition());

		Self {
			cycle,
			alpha,
			clock: Box::new(clock),
			rng,
		}
	}

	pub fn cycle(&self) -> &ColorCycle {
		&self.cycle
	}
}

impl<C> System<C> for ColorTransition {
	fn name(&self) -> &'static str {
		"ColorTransition"
	}

	fn required(&self) -> ComponentSet {
		Self::REQUIRED
	}

	fn update(&mut self, entities: &mut EntityStore, changes: &ChangeSet, _: &C) {
		let now = self.clock.now();
		let progress = self.cycle.progress(now);
		let value = self.cycle.sample(now);

		for entity in changes.entities() {
			match entities.get_mut::<Color>(entity) {
				Some(color) => color.value = value,
				None => {
					entities.add_component(entity, Color::new(value));
				},
			}
		}

		if progress >= 1.0 {
			let next = Rgba::random(&mut self.rng, self.alpha);
			log::debug!("colour transition to {} complete, next target {next}", self.cycle.target_color());
			self.cycle.roll_over(next, now);
		}
	}
}
