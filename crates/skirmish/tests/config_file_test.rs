//! # Config File Tests
//!
//! TOML files on disk combined with command-line overrides, run end to end.
//!
//! Run with: cargo test --package skirmish --test config_file_test

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use skirmish::{run, Args};
use skirmish_core::{LayoutKind, SpawnMode, TargetingPolicy};

struct TempConfig(PathBuf);

impl TempConfig {
    fn write(name: &str, body: &str) -> Self {
        let path = std::env::temp_dir().join(format!("skirmish_{}_{name}.toml", std::process::id()));
        fs::write(&path, body).expect("write temp config");
        Self(path)
    }

    fn arg(&self) -> &str {
        self.0.to_str().expect("utf-8 temp path")
    }
}

impl Drop for TempConfig {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.0);
    }
}

#[test]
fn file_values_are_loaded() {
    let file = TempConfig::write(
        "load",
        r#"
            population = 80
            ticks = 30
            seed = 3
            layout = "aos"
            policy = "first_in_range"
            spawn = "all_alive"
            arena_half_extent = 15.0
        "#,
    );

    let config = Args::try_parse_from(["skirmish", "--config", file.arg()])
        .unwrap()
        .resolve()
        .unwrap();

    assert_eq!(config.population, 80);
    assert_eq!(config.layout, LayoutKind::Aos);
    assert_eq!(config.policy, TargetingPolicy::FirstInRange);
    assert_eq!(config.spawn, SpawnMode::AllAlive);
    assert!((config.arena_half_extent - 15.0).abs() < f32::EPSILON);
}

#[test]
fn flags_win_over_file() {
    let file = TempConfig::write("override", "population = 80\nlayout = \"aos\"\n");

    let config = Args::try_parse_from([
        "skirmish",
        "--config",
        file.arg(),
        "--population",
        "40",
        "--layout",
        "soa",
    ])
    .unwrap()
    .resolve()
    .unwrap();

    assert_eq!(config.population, 40);
    assert_eq!(config.layout, LayoutKind::Soa);
}

#[test]
fn unknown_key_is_rejected() {
    let file = TempConfig::write("unknown", "populaton = 80\n");
    let err = Args::try_parse_from(["skirmish", "--config", file.arg()])
        .unwrap()
        .resolve()
        .unwrap_err();
    assert!(err.to_string().starts_with("malformed config"));
}

#[test]
fn file_driven_run_completes() {
    let file = TempConfig::write(
        "run",
        "population = 150\nticks = 900\nspawn = \"all_alive\"\narena_half_extent = 10.0\n",
    );
    let config = Args::try_parse_from(["skirmish", "-c", file.arg(), "-l", "hot_cold"])
        .unwrap()
        .resolve()
        .unwrap();

    let summary = run(config).unwrap();

    assert_eq!(summary.stats.total_ticks, 900);
    assert!(summary.stats.kills > 0);
    assert_eq!(summary.footprint.layout, LayoutKind::HotCold);
    assert_eq!(summary.footprint.population, 150);
    assert!(summary.tally.widest <= 10.0);
}
