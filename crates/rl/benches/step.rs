use criterion::{criterion_group, criterion_main, Criterion};
use rl::{Action, EnvConfig, RaceEnv};

fn bench_episode_step(c: &mut Criterion) {
    c.bench_function("race_env_step", |b| {
        let mut env = RaceEnv::new(EnvConfig::default()).unwrap();
        env.reset(None);
        let mut i = 0usize;
        b.iter(|| {
            let action = Action::ALL[i % Action::COUNT];
            i += 1;
            match env.step_action(action) {
                Ok(step) if !step.is_done() => {}
                _ => {
                    env.reset(None);
                }
            }
        });
    });
}

fn bench_reset(c: &mut Criterion) {
    c.bench_function("race_env_reset", |b| {
        let mut env = RaceEnv::new(EnvConfig::default()).unwrap();
        b.iter(|| env.reset(None));
    });
}

criterion_group!(benches, bench_episode_step, bench_reset);
criterion_main!(benches);
