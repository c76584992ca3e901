//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;
use skirmish_core::{LayoutKind, SimConfig, SimResult, SpawnMode, TargetingPolicy};
use tracing::debug;

/// Fixed-population arena skirmish for comparing memory layouts
#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// TOML file with the base configuration
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Number of actors
    #[arg(short = 'n', long)]
    pub population: Option<usize>,

    /// Ticks to run
    #[arg(short, long)]
    pub ticks: Option<u64>,

    /// RNG seed
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Storage layout: aos, hot_cold or soa
    #[arg(short, long)]
    pub layout: Option<LayoutKind>,

    /// Targeting policy: nearest or first_in_range
    #[arg(short, long)]
    pub policy: Option<TargetingPolicy>,

    /// Start every actor alive
    #[arg(long)]
    pub all_alive: bool,

    /// Enable verbose logging (every kill and respawn)
    #[arg(short, long)]
    pub verbose: bool,

    /// Print the per-column memory footprint after the run
    #[arg(short, long)]
    pub report: bool,
}

impl Args {
    /// Loads the config file, or the defaults, and applies every flag on top.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read or parsed, or if the merged
    /// configuration does not validate.
    pub fn resolve(&self) -> SimResult<SimConfig> {
        let mut config = match &self.config {
            Some(path) => {
                debug!(path = %path.display(), "loading config");
                SimConfig::from_path(path)?
            }
            None => SimConfig::default(),
        };

        if let Some(population) = self.population {
            config.population = population;
        }
        if let Some(ticks) = self.ticks {
            config.ticks = ticks;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(layout) = self.layout {
            config.layout = layout;
        }
        if let Some(policy) = self.policy {
            config.policy = policy;
        }
        if self.all_alive {
            config.spawn = SpawnMode::AllAlive;
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_flags_gives_defaults() {
        let args = Args::try_parse_from(["skirmish"]).unwrap();
        assert_eq!(args.resolve().unwrap(), SimConfig::default());
    }

    #[test]
    fn test_flags_override_defaults() {
        let args = Args::try_parse_from([
            "skirmish",
            "-n",
            "64",
            "--ticks",
            "10",
            "--seed",
            "7",
            "--layout",
            "hot-cold",
            "--policy",
            "early-exit",
            "--all-alive",
        ])
        .unwrap();

        let config = args.resolve().unwrap();
        assert_eq!(config.population, 64);
        assert_eq!(config.ticks, 10);
        assert_eq!(config.seed, 7);
        assert_eq!(config.layout, LayoutKind::HotCold);
        assert_eq!(config.policy, TargetingPolicy::FirstInRange);
        assert_eq!(config.spawn, SpawnMode::AllAlive);
    }

    #[test]
    fn test_unknown_layout_is_a_parse_error() {
        assert!(Args::try_parse_from(["skirmish", "--layout", "columnar"]).is_err());
    }

    #[test]
    fn test_invalid_override_fails_validation() {
        let args = Args::try_parse_from(["skirmish", "--population", "0"]).unwrap();
        assert!(args.resolve().is_err());
    }

    #[test]
    fn test_missing_config_file_is_reported() {
        let args = Args {
            config: Some(PathBuf::from("/nonexistent/skirmish.toml")),
            ..Args::default()
        };
        let err = args.resolve().unwrap_err();
        assert!(err.to_string().contains("/nonexistent/skirmish.toml"));
    }
}
