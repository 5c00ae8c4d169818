use criterion::*;
use flock_ecs::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

const COUNT: usize = 1000;
const VIEWPORT: Viewport = Viewport::new(1920.0, 1080.0);

fn flock(count: usize) -> (Coordinator<Viewport>, Vec<Entity>) {
    let config = FlockConfig::default();
    let mut ecs = Coordinator::new();
    install(&mut ecs, &config).expect("flock should install");
    let boids = spawn_boids(&mut ecs, count, &VIEWPORT, &config, &mut StdRng::seed_from_u64(0));
    (ecs, boids)
}

fn spawn_entities(c: &mut Criterion) {
    c.bench_function("Spawn boids", |b| {
        b.iter_batched(
            || {
                let mut ecs = Coordinator::<Viewport>::new();
                install(&mut ecs, &FlockConfig::default()).expect("flock should install");
                ecs
            },
            |mut ecs| {
                let mut rng = StdRng::seed_from_u64(0);
                spawn_boids(&mut ecs, COUNT, &VIEWPORT, &FlockConfig::default(), &mut rng)
            },
            BatchSize::PerIteration,
        );
    });
}

fn destroy_entities(c: &mut Criterion) {
    c.bench_function("Destroy boids", |b| {
        b.iter_batched(
            || flock(COUNT),
            |(mut ecs, boids)| {
                for entity in boids {
                    ecs.destroy_entity(entity);
                }
                ecs.tick(&VIEWPORT);
            },
            BatchSize::PerIteration,
        );
    });
}

fn tick_flock(c: &mut Criterion) {
    let mut group = c.benchmark_group("Tick flock");
    for count in [100, 500, COUNT] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            let (mut ecs, _) = flock(count);
            b.iter(|| ecs.tick(black_box(&VIEWPORT)));
        });
    }
    group.finish();
}

criterion_group!(
    benchmarks,
    spawn_entities,
    destroy_entities,
    tick_flock,
);
criterion_main!(benchmarks);
