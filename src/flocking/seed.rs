use crate::components::{Boid, Position, Velocity, Wobble};
use crate::flocking::{FlockConfig, ViewportExtent};
use crate::entities::{Entity, EntityStore};
use std::f32::consts::TAU;
use rand::Rng;

/// Spawns `count` boids scattered uniformly over the viewport.
///
/// Each boid gets a random [Velocity] with both components in `[-1, 1)`, the [Boid] marker and a
/// [Wobble] with a random frequency from the configured range, the configured amplitude and random
/// phases. Groups and colours are left to the systems.
pub fn spawn_boids(
	entities: &mut EntityStore, count: usize, viewport: &impl ViewportExtent, config: &FlockConfig,
	rng: &mut impl Rng,
) -> Vec<Entity> {
	let frequency_span = config.wobble_frequency_max - config.wobble_frequency_min;

	(0..count)
		.map(|_| {
			let position = Position::new(rng.gen::<f32>() * viewport.width(), rng.gen::<f32>() * viewport.height());
			let velocity = Velocity::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0));
			let wobble = Wobble::new(
				config.wobble_frequency_min + rng.gen::<f32>() * frequency_span,
				config.wobble_amplitude,
				rng.gen::<f32>() * TAU,
				rng.gen::<f32>() * TAU,
			);

			let entity = entities.create_entity();
			entities.add_component(entity, position);
			entities.add_component(entity, velocity);
			entities.add_component(entity, Boid);
			entities.add_component(entity, wobble);
			entity
		})
		.collect()
}
