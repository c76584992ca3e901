//! # Simulation Configuration
//!
//! Every tunable of a run. Loaded once at startup, from TOML or from
//! [`SimConfig::default`]; never touched by the tick loop.
//!
//! ```toml
//! population = 5000
//! ticks = 1200
//! seed = 42
//! policy = "first_in_range"
//! spawn = "all_alive"
//! layout = "hot_cold"
//! ```

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

use crate::actor::ActorId;
use crate::error::{SimError, SimResult};
use crate::layout::LayoutKind;

/// How an actor chooses a new target.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetingPolicy {
    /// Scan every candidate and take the globally nearest one.
    #[default]
    Nearest,
    /// Stop scanning as soon as the best candidate so far is in range.
    ///
    /// Picks the same target as [`TargetingPolicy::Nearest`] only when
    /// a single candidate is in range.
    FirstInRange,
}

impl TargetingPolicy {
    /// Short name used on the command line and in benchmark ids.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Nearest => "nearest",
            Self::FirstInRange => "first_in_range",
        }
    }
}

impl fmt::Display for TargetingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TargetingPolicy {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "nearest" => Ok(Self::Nearest),
            "first_in_range" | "first-in-range" | "early_exit" | "early-exit" => {
                Ok(Self::FirstInRange)
            }
            other => Err(SimError::InvalidConfig(format!(
                "unknown targeting policy `{other}` (expected nearest or first_in_range)"
            ))),
        }
    }
}

/// Which actors start alive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpawnMode {
    /// Every actor starts alive.
    AllAlive,
    /// One in ten actors starts alive; the rest wait out a random respawn.
    #[default]
    Mixed,
}

/// Configuration for a simulation run.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimConfig {
    /// Number of actors.
    pub population: usize,
    /// Ticks executed by [`Simulation::run`](crate::Simulation::run).
    pub ticks: u64,
    /// Seed for every random draw of the run.
    pub seed: u64,
    /// The arena spans `[-arena_half_extent, arena_half_extent]` on both axes.
    pub arena_half_extent: f32,
    /// Maximum distance at which a target is acquired and kept.
    pub target_range: f32,
    /// Seconds between two hits of the same attacker.
    pub attack_cooldown: f32,
    /// Seconds a killed actor stays dead.
    pub respawn_delay: f32,
    /// Health on spawn and respawn.
    pub spawn_health: u16,
    /// Nominal tick length in seconds.
    pub base_dt: f32,
    /// Largest absolute deviation from `base_dt` drawn per tick.
    pub dt_jitter: f32,
    /// Target acquisition strategy.
    pub policy: TargetingPolicy,
    /// Initial alive/dead split.
    pub spawn: SpawnMode,
    /// Storage layout used by front-ends that pick one at runtime.
    pub layout: LayoutKind,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            population: 1_000,
            ticks: 600,
            seed: 0x5EED,
            arena_half_extent: 200.0,
            target_range: 5.0,
            attack_cooldown: 1.0,
            respawn_delay: 10.0,
            spawn_health: 10,
            base_dt: 1.0 / 60.0,
            dt_jitter: 0.001,
            policy: TargetingPolicy::Nearest,
            spawn: SpawnMode::Mixed,
            layout: LayoutKind::Soa,
        }
    }
}

impl SimConfig {
    /// Parses and validates a TOML document. Missing keys take their default.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::ConfigParse`] for malformed TOML or unknown keys
    /// and [`SimError::InvalidConfig`] for out-of-range values.
    pub fn from_toml_str(source: &str) -> SimResult<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::ConfigRead`] if the file cannot be read, otherwise
    /// as [`SimConfig::from_toml_str`].
    pub fn from_path(path: impl AsRef<Path>) -> SimResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| SimError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    /// Checks every value against the ranges the tick loop relies on.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidConfig`] naming the first bad field.
    pub fn validate(&self) -> SimResult<()> {
        fn positive(name: &str, value: f32) -> SimResult<()> {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(SimError::InvalidConfig(format!(
                    "{name} must be a positive number, got {value}"
                )))
            }
        }

        if self.population == 0 {
            return Err(SimError::InvalidConfig(
                "population must be at least 1".to_owned(),
            ));
        }
        if self.population >= ActorId::MAX_POPULATION {
            return Err(SimError::InvalidConfig(format!(
                "population {} exceeds the addressable maximum {}",
                self.population,
                ActorId::MAX_POPULATION - 1
            )));
        }
        positive("arena_half_extent", self.arena_half_extent)?;
        positive("target_range", self.target_range)?;
        positive("attack_cooldown", self.attack_cooldown)?;
        positive("respawn_delay", self.respawn_delay)?;
        positive("base_dt", self.base_dt)?;
        if self.arena_half_extent < 1.0 {
            return Err(SimError::InvalidConfig(format!(
                "arena_half_extent must be at least 1, got {}",
                self.arena_half_extent
            )));
        }
        if !(self.dt_jitter.is_finite() && self.dt_jitter >= 0.0 && self.dt_jitter < self.base_dt)
        {
            return Err(SimError::InvalidConfig(format!(
                "dt_jitter must lie in [0, base_dt), got {} with base_dt {}",
                self.dt_jitter, self.base_dt
            )));
        }
        if self.spawn_health == 0 {
            return Err(SimError::InvalidConfig(
                "spawn_health must be at least 1".to_owned(),
            ));
        }
        Ok(())
    }
}
