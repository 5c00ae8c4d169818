//! Runs the flock without a renderer and logs a summary of its state.
//!
//! Usage: `cargo run --example headless -- [boids] [ticks] [config.json]`

use flock_ecs::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;
use std::error::Error;

const VIEWPORT: Viewport = Viewport::new(1280.0, 720.0);

fn main() -> Result<(), Box<dyn Error>> {
	env_logger::init();

	let mut args = std::env::args().skip(1);
	let count: usize = args.next().map(|s| s.parse()).transpose()?.unwrap_or(200);
	let ticks: usize = args.next().map(|s| s.parse()).transpose()?.unwrap_or(600);
	let config = match args.next() {
		Some(path) => FlockConfig::from_json(&std::fs::read_to_string(path)?)?,
		None => FlockConfig::default(),
	};

	let mut ecs = Coordinator::new();
	install(&mut ecs, &config)?;
	let boids = spawn_boids(&mut ecs, count, &VIEWPORT, &config, &mut StdRng::seed_from_u64(0));
	log::info!("spawned {} boids in a {}x{} viewport", boids.len(), VIEWPORT.width, VIEWPORT.height);

	for tick in 1..=ticks {
		ecs.tick(&VIEWPORT);
		if tick % 60 == 0 {
			report(&ecs, &boids, tick);
		}
	}

	Ok(())
}

fn report(ecs: &EntityStore, boids: &[Entity], tick: usize) {
	let mut groups = HashSet::new();
	let mut speed = 0.0;
	let mut color = None;

	for &entity in boids {
		let Some(components) = ecs.get_components(entity) else { continue };
		if let Some(group) = components.group() {
			groups.insert(group.id.clone());
		}
		if let Some(velocity) = components.velocity() {
			speed += velocity.magnitude();
		}
		color = color.or(components.color().map(|c| c.value));
	}

	let color = color.map_or_else(|| "none".to_owned(), |c| c.to_string());
	log::info!(
		"tick {tick}: {} groups, mean speed {:.2}, colour {color}",
		groups.len(),
		speed / boids.len().max(1) as f32,
	);
}
