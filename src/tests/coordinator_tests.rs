use crate::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::cell::RefCell;
use std::rc::Rc;

type Batches = Rc<RefCell<Vec<Vec<Entity>>>>;

/// Records every batch it is handed.
struct Recorder {
	required: ComponentSet,
	reactive: ComponentSet,
	batches: Batches,
}

impl Recorder {
	fn new(required: &[ComponentKind], reactive: &[ComponentKind]) -> (Self, Batches) {
		let batches = Batches::default();
		let recorder = Self {
			required: ComponentSet::from(required),
			reactive: ComponentSet::from(reactive),
			batches: batches.clone(),
		};
		(recorder, batches)
	}
}

impl<C> System<C> for Recorder {
	fn name(&self) -> &'static str {
		"Recorder"
	}

	fn required(&self) -> ComponentSet {
		self.required
	}

	fn reactive(&self) -> ComponentSet {
		self.reactive
	}

	fn update(&mut self, _: &mut EntityStore, changes: &ChangeSet, _: &C) {
		self.batches.borrow_mut().push(changes.entities().collect());
	}
}

/// Nudges the velocity of every entity in its batch.
struct Accelerator;

impl<C> System<C> for Accelerator {
	fn required(&self) -> ComponentSet {
		ComponentSet::of(&[ComponentKind::Velocity])
	}

	fn reactive(&self) -> ComponentSet {
		ComponentSet::of(&[ComponentKind::Velocity])
	}

	fn update(&mut self, entities: &mut EntityStore, changes: &ChangeSet, _: &C) {
		for entity in changes.entities() {
			if let Some(velocity) = entities.get_mut::<Velocity>(entity) {
				velocity.x += 1.0;
			}
		}
	}
}

/// Destroys every entity in its batch.
struct Reaper;

impl<C> System<C> for Reaper {
	fn required(&self) -> ComponentSet {
		ComponentSet::of(&[ComponentKind::Boid])
	}

	fn update(&mut self, entities: &mut EntityStore, changes: &ChangeSet, _: &C) {
		for entity in changes.entities() {
			entities.destroy_entity(entity);
			assert!(entities.contains(entity), "Destroyed entities must stay visible until the tick ends");
		}
	}
}

fn sample_component(kind: ComponentKind, rng: &mut impl Rng) -> Component {
	match kind {
		ComponentKind::Position => Position::new(rng.gen(), rng.gen()).into(),
		ComponentKind::Velocity => Velocity::new(rng.gen(), rng.gen()).into(),
		ComponentKind::Boid => Boid.into(),
		ComponentKind::Group => Group::new(GroupId::generate(rng)).into(),
		ComponentKind::Color => Color::new(Rgba::random(rng, 1.0)).into(),
		ComponentKind::Wobble => Wobble::default().into(),
	}
}

#[test]
pub fn interest_sets_track_required_components() {
	let mut rng = StdRng::seed_from_u64(42);
	let mut ecs = Coordinator::<()>::new();

	let required_sets = [
		ComponentSet::of(&[ComponentKind::Position]),
		ComponentSet::of(&[ComponentKind::Position, ComponentKind::Velocity]),
		ComponentSet::of(&[ComponentKind::Boid, ComponentKind::Group]),
		ComponentSet::of(&[ComponentKind::Wobble]),
	];

	let systems: Vec<(SystemId, ComponentSet)> = required_sets
		.iter()
		.map(|&required| {
			let kinds: Vec<_> = required.iter().collect();
			let (recorder, _) = Recorder::new(&kinds, &[]);
			(ecs.register_system(recorder).expect("system should register"), required)
		})
		.collect();

	let mut live: Vec<Entity> = Vec::new();
	for _ in 0..2000 {
		match rng.gen_range(0..10) {
			0..=1 => live.push(ecs.create_entity()),
			2..=6 if !live.is_empty() => {
				let entity = live[rng.gen_range(0..live.len())];
				let kind = ComponentKind::ALL[rng.gen_range(0..ComponentKind::COUNT)];
				assert!(ecs.add_component(entity, sample_component(kind, &mut rng)));
			},
			7..=8 if !live.is_empty() => {
				let entity = live[rng.gen_range(0..live.len())];
				let kind = ComponentKind::ALL[rng.gen_range(0..ComponentKind::COUNT)];
				ecs.remove_component(entity, kind);
			},
			9 if !live.is_empty() => {
				let entity = live.swap_remove(rng.gen_range(0..live.len()));
				ecs.destroy_entity(entity);
				ecs.tick(&());
			},
			_ => {},
		}

		for &(system, required) in &systems {
			for &entity in &live {
				let components = ecs.get_components(entity).expect("live entity should exist");
				assert_eq!(
					ecs.is_interested(system, entity),
					components.has_all(required),
					"Interest set of {system} out of sync for {entity}"
				);
			}
			let members = ecs.interest(system).expect("system should be registered");
			assert!(members.iter().all(|entity| ecs.contains(*entity)));
		}
	}
}

#[test]
pub fn empty_required_set_is_rejected() {
	let mut ecs = Coordinator::<()>::new();
	let (recorder, _) = Recorder::new(&[], &[]);

	assert_eq!(
		ecs.try_register_system(recorder).err(),
		Some(EcsError::EmptyRequiredSet { system: "Recorder" })
	);
	assert_eq!(ecs.system_count(), 0);

	let (recorder, _) = Recorder::new(&[], &[]);
	assert!(ecs.register_system(recorder).is_none());
}

#[test]
pub fn registration_seeds_existing_entities() {
	let mut ecs = Coordinator::<()>::new();
	let matching = ecs.create_entity();
	ecs.add_component(matching, Position::default());
	ecs.add_component(matching, Boid);
	let other = ecs.create_entity();
	ecs.add_component(other, Boid);

	let (recorder, batches) = Recorder::new(&[ComponentKind::Position, ComponentKind::Boid], &[]);
	let id = ecs.register_system(recorder).expect("system should register");

	assert!(ecs.is_interested(id, matching));
	assert!(!ecs.is_interested(id, other));

	ecs.tick(&());
	assert_eq!(*batches.borrow(), [vec![matching]]);
}

#[test]
pub fn systems_run_in_registration_order() {
	let mut ecs = Coordinator::<()>::new();
	let (first, _) = Recorder::new(&[ComponentKind::Boid], &[]);
	let (second, _) = Recorder::new(&[ComponentKind::Boid], &[]);
	let a = ecs.register_system(first).expect("system should register");
	let b = ecs.register_system(second).expect("system should register");

	assert_eq!(ecs.system_ids(), [a, b]);
	assert!(ecs.unregister_system(a));
	assert!(!ecs.unregister_system(a));
	assert_eq!(ecs.system_ids(), [b]);
	assert!(ecs.interest(a).is_none());
}

#[test]
pub fn destruction_is_deferred_to_end_of_tick() {
	let mut ecs = Coordinator::<()>::new();
	let entity = ecs.create_entity();
	ecs.add_component(entity, Boid);

	let reaper = ecs.register_system(Reaper).expect("system should register");
	let (recorder, batches) = Recorder::new(&[ComponentKind::Boid], &[]);
	let recorder = ecs.register_system(recorder).expect("system should register");

	ecs.tick(&());
	assert_eq!(*batches.borrow(), [vec![entity]], "Later systems still see the doomed entity");
	assert!(!ecs.contains(entity));
	assert!(ecs.get::<Boid>(entity).is_none());
	assert!(!ecs.is_interested(reaper, entity));
	assert!(!ecs.is_interested(recorder, entity));
	assert_eq!(ecs.entity_count(), 0);

	ecs.tick(&());
	assert_eq!(batches.borrow().len(), 1, "Empty batches are not dispatched");
}

#[test]
pub fn repeated_destruction_is_harmless() {
	let mut ecs = Coordinator::<()>::new();
	let entity = ecs.create_entity();
	ecs.destroy_entity(entity);
	ecs.destroy_entity(entity);
	assert!(ecs.is_pending_destruction(entity));

	ecs.tick(&());
	ecs.destroy_entity(entity);
	ecs.tick(&());
	assert!(!ecs.contains(entity));
}

#[test]
pub fn destroying_a_whole_flock() {
	let mut ecs = Coordinator::<()>::new();
	let entities: Vec<Entity> = (0..500).map(|_| ecs.create_entity()).collect();
	for &entity in entities.iter().chain(&entities) {
		ecs.destroy_entity(entity);
	}
	assert!(entities.iter().all(|entity| ecs.is_pending_destruction(*entity)));

	assert_eq!(ecs.flush_destroyed(), 500, "Each queued entity is destroyed once");
	assert_eq!(ecs.entity_count(), 0);
	assert!(!ecs.is_pending_destruction(entities[0]));
	assert_eq!(ecs.flush_destroyed(), 0);
}

#[test]
pub fn reactive_changes_are_consumed_once() {
	let mut ecs = Coordinator::<()>::new();
	let entity = ecs.create_entity();
	ecs.add_component(entity, Position::new(1.0, 1.0));

	let (recorder, batches) = Recorder::new(&[ComponentKind::Position], &[ComponentKind::Position]);
	ecs.register_system(recorder).expect("system should register");

	ecs.tick(&());
	assert!(!ecs.get_components(entity).map_or(true, |c| c.is_dirty(ComponentKind::Position)));

	ecs.tick(&());
	assert_eq!(batches.borrow().len(), 1, "A consumed change must not select the entity again");

	if let Some(position) = ecs.get_mut::<Position>(entity) {
		position.x = 2.0;
	}
	ecs.tick(&());
	assert_eq!(*batches.borrow(), [vec![entity], vec![entity]]);
}

#[test]
pub fn every_reacting_system_sees_a_change() {
	let mut ecs = Coordinator::<()>::new();
	let entity = ecs.create_entity();
	ecs.add_component(entity, Velocity::new(0.0, 0.0));

	let (first, first_batches) = Recorder::new(&[ComponentKind::Velocity], &[ComponentKind::Velocity]);
	let (second, second_batches) = Recorder::new(&[ComponentKind::Velocity], &[ComponentKind::Velocity]);
	ecs.register_system(first).expect("system should register");
	ecs.register_system(second).expect("system should register");

	ecs.tick(&());
	assert_eq!(*first_batches.borrow(), [vec![entity]]);
	assert_eq!(*second_batches.borrow(), [vec![entity]]);
	assert!(!ecs.get_components(entity).map_or(true, |c| c.is_dirty(ComponentKind::Velocity)));

	ecs.tick(&());
	assert_eq!(first_batches.borrow().len(), 1);
	assert_eq!(second_batches.borrow().len(), 1);
}

#[test]
pub fn writes_reach_later_systems_and_the_next_tick() {
	let mut ecs = Coordinator::<()>::new();
	let entity = ecs.create_entity();
	ecs.add_component(entity, Velocity::new(0.0, 0.0));

	let (early, early_batches) = Recorder::new(&[ComponentKind::Velocity], &[ComponentKind::Velocity]);
	let (late, late_batches) = Recorder::new(&[ComponentKind::Velocity], &[ComponentKind::Velocity]);
	ecs.register_system(early).expect("system should register");
	ecs.register_system(Accelerator).expect("system should register");
	ecs.register_system(late).expect("system should register");

	ecs.tick(&());
	ecs.tick(&());

	assert_eq!(*late_batches.borrow(), [vec![entity], vec![entity]]);
	assert_eq!(*early_batches.borrow(), [vec![entity], vec![entity]], "Writes are seen on the next tick");
	assert_eq!(ecs.get::<Velocity>(entity).map(|v| v.x), Some(2.0));
}

#[test]
pub fn passive_flags_select_every_tick() {
	let mut ecs = Coordinator::<()>::new();
	let entity = ecs.create_entity();
	ecs.add_component(entity, Position::default());
	ecs.add_component(entity, Boid);

	let (recorder, batches) =
		Recorder::new(&[ComponentKind::Position, ComponentKind::Boid], &[ComponentKind::Position]);
	let id = ecs.register_system(recorder).expect("system should register");

	for _ in 0..3 {
		ecs.tick(&());
	}
	assert_eq!(batches.borrow().len(), 3);

	let changes = ecs.collect_changes(id);
	assert_eq!(changes.changed(entity), ComponentSet::of(&[ComponentKind::Boid]));
}

#[test]
pub fn unknown_entities_are_reported() {
	let mut ecs = Coordinator::<()>::new();
	let entity = ecs.create_entity();
	ecs.destroy_entity(entity);
	ecs.tick(&());

	assert!(!ecs.add_component(entity, Boid));
	assert!(ecs.get::<Boid>(entity).is_none());
	assert!(ecs.get_mut::<Boid>(entity).is_none());
	assert!(ecs.get_components(entity).is_none());
	assert!(ecs.remove_component(entity, ComponentKind::Boid).is_none());
}

#[test]
pub fn removing_a_component_leaves_the_interest_set() {
	let mut ecs = Coordinator::<()>::new();
	let entity = ecs.create_entity();
	ecs.add_component(entity, Position::default());

	let (recorder, batches) = Recorder::new(&[ComponentKind::Position], &[]);
	let id = ecs.register_system(recorder).expect("system should register");
	assert!(ecs.is_interested(id, entity));

	ecs.remove_component(entity, ComponentKind::Position);
	assert!(!ecs.is_interested(id, entity));

	ecs.tick(&());
	assert!(batches.borrow().is_empty());
}
