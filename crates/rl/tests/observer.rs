use rl::{Action, EnvConfig, EpisodeObserver, Frame, RaceEnv, Step};

#[derive(Default)]
struct Recorder {
    resets: usize,
    steps: Vec<(u32, usize, f64)>,
    reset_reward: Option<f32>,
}

impl EpisodeObserver for Recorder {
    fn on_reset(&mut self, frame: &Frame<'_>) {
        self.resets += 1;
        assert_eq!(frame.step_count, 0);
        self.reset_reward = Some(frame.reward);
    }

    fn on_step(&mut self, frame: &Frame<'_>, step: &Step) {
        assert_eq!(frame.step_count, step.info.step_count);
        assert_eq!(frame.reward, step.reward);
        self.steps.push((frame.step_count, frame.gates.len(), frame.vehicle.position().x));
    }
}

#[test]
fn observer_sees_every_tick() {
    let mut env = RaceEnv::new(EnvConfig::default()).unwrap();
    let mut rec = Recorder::default();
    env.reset_observed(None, &mut rec);
    for _ in 0..70 {
        env.step_observed(Action::Forward, &mut rec).unwrap();
    }
    assert_eq!(rec.resets, 1);
    assert_eq!(rec.reset_reward, Some(0.0));
    assert_eq!(rec.steps.len(), 70);
    assert_eq!(rec.steps.last().map(|s| s.0), Some(70));
    // The first gate at x = 550 is taken around step 65.
    assert_eq!(rec.steps.last().map(|s| s.1), Some(11));
    assert!(rec.steps.windows(2).all(|w| w[1].2 >= w[0].2));
}

#[test]
fn rejected_step_is_not_observed() {
    let mut env = RaceEnv::new(EnvConfig::default()).unwrap();
    let mut rec = Recorder::default();
    assert!(env.step_observed(Action::Forward, &mut rec).is_err());
    assert!(rec.steps.is_empty());
    env.reset(None);
    env.step_observed(Action::Forward, &mut rec).unwrap();
    assert_eq!(rec.steps.len(), 1);
}

#[test]
fn frame_readings_match_the_observation() {
    let mut env = RaceEnv::new(EnvConfig::default()).unwrap();
    let obs = env.reset(None);
    let frame = env.frame();
    assert_eq!(frame.readings.len(), 5);
    for (r, o) in frame.readings.iter().zip(&obs) {
        assert!((r.distance - f64::from(*o)).abs() < 1e-3);
    }
}
