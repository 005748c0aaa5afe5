use clap::Parser;
use runtime::app;
use runtime::cli::Args;

fn args(extra: &[&str]) -> Args {
    let mut argv = vec!["race_runtime"];
    argv.extend_from_slice(extra);
    Args::parse_from(argv)
}

#[test]
fn single_env_plays_requested_episodes() {
    let cli = args(&["--episodes", "3", "--max-steps", "50", "--seed", "1"]);
    let summaries = app::run(&cli).unwrap();
    assert_eq!(summaries.len(), 3);
    for s in &summaries {
        assert!(s.steps >= 1 && s.steps <= 50, "episode length {}", s.steps);
        assert!(s.terminated || s.truncated);
    }
}

#[test]
fn same_seed_replays_identically() {
    let a = app::run(&args(&["--episodes", "2", "--max-steps", "200", "--seed", "9"])).unwrap();
    let b = app::run(&args(&["--episodes", "2", "--max-steps", "200", "--seed", "9"])).unwrap();
    assert_eq!(a, b);
}

#[test]
fn vectorized_run_collects_enough_episodes() {
    let summaries =
        app::run(&args(&["--episodes", "5", "--envs", "3", "--max-steps", "40"])).unwrap();
    assert_eq!(summaries.len(), 5);
    assert!(summaries.iter().all(|s| s.steps <= 40));
}

#[test]
fn custom_track_file_is_used() {
    let summaries = app::run(&args(&[
        "--episodes",
        "1",
        "--max-steps",
        "20",
        "--track",
        "../track/tests/data/straight.json",
    ]))
    .unwrap();
    assert_eq!(summaries.len(), 1);
}

#[test]
fn missing_track_file_is_an_error() {
    let err = app::run(&args(&["--track", "no/such/track.json"])).unwrap_err();
    assert!(format!("{err:#}").contains("no/such/track.json"));
}

#[test]
fn watch_requires_a_track() {
    assert!(Args::try_parse_from(["race_runtime", "--watch"]).is_err());
}
