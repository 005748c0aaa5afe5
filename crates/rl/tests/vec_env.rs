use rl::{Action, EnvConfig, EnvError, Precondition, RaceEnv, VecEnv};

fn make() -> Result<RaceEnv, EnvError> {
    RaceEnv::new(EnvConfig::default())
}

#[test]
fn constructs_identical_instances() {
    let mut envs = VecEnv::new_with(4, make).unwrap();
    assert_eq!(envs.len(), 4);
    let obs = envs.reset(Some(7)).to_vec();
    for o in &obs[1..] {
        assert_eq!(*o, obs[0]);
    }
}

#[test]
fn zero_environments_is_a_config_error() {
    let err = VecEnv::new_with(0, make).err().unwrap();
    assert!(matches!(err, EnvError::InvalidConfig(_)));
}

#[test]
fn action_count_must_match() {
    let mut envs = VecEnv::new_with(2, make).unwrap();
    envs.reset(None);
    let err = envs.step(&[Action::Forward.index()]).unwrap_err();
    assert!(matches!(
        err,
        EnvError::PreconditionViolated(Precondition::ActionCount { expected: 2, got: 1 })
    ));
}

#[test]
fn invalid_action_rejects_the_whole_batch() {
    let mut envs = VecEnv::new_with(2, make).unwrap();
    let start = envs.reset(None).to_vec();
    let err = envs.step(&[Action::Forward.index(), 99]).unwrap_err();
    assert!(matches!(
        err,
        EnvError::PreconditionViolated(Precondition::InvalidAction { index: 99, count: 7 })
    ));
    for env in envs.envs() {
        assert_eq!(env.step_count(), 0);
        assert_eq!(env.vehicle().position(), env.layout().spawn.position);
    }
    assert_eq!(envs.observations(), start.as_slice());
}

#[test]
fn environments_do_not_interact() {
    let mut envs = VecEnv::new_with(2, make).unwrap();
    envs.reset(None);
    for _ in 0..20 {
        envs.step(&[Action::Forward.index(), Action::Brake.index()]).unwrap();
    }
    let moving = envs.envs()[0].vehicle().position();
    let parked = envs.envs()[1].vehicle().position();
    assert!(moving.x > parked.x);
    assert_eq!(parked, envs.envs()[1].layout().spawn.position);
}

#[test]
fn finished_environments_auto_reset() {
    let cfg = EnvConfig {
        max_episode_steps: 3,
        ..EnvConfig::default()
    };
    let mut envs = VecEnv::new_with(2, || RaceEnv::new(cfg.clone())).unwrap();
    let start = envs.reset(None).to_vec();
    let brake = Action::Brake.index();
    for _ in 0..2 {
        let steps = envs.step(&[brake, brake]).unwrap();
        assert!(steps.iter().all(|s| !s.is_done()));
    }
    let steps = envs.step(&[brake, brake]).unwrap();
    assert!(steps.iter().all(|s| s.truncated));
    assert_eq!(envs.episodes(), &[1, 1]);
    assert_eq!(envs.observations(), start.as_slice());
    // The reset happened, so stepping again is allowed.
    assert!(envs.step(&[brake, brake]).is_ok());
}
