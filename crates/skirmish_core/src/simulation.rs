//! # Simulation Driver
//!
//! Owns a population, its configuration and the run's RNG, and advances
//! them one tick at a time.
//!
//! ```text
//! Tick N:
//! ┌───────────────────────────────────────────────┐
//! │ 0. draw dt = base_dt ± jitter                 │
//! │ 1. movement   (alive actors, reflective walls)│
//! │ 2. targeting  (drop stale, acquire nearest)   │
//! │ 3. damage     (cooldown, hit, kill)           │
//! │ 4. respawn    (countdown, revive)             │
//! │ 5. render     (visibility, draw calls)        │
//! └───────────────────────────────────────────────┘
//! ```

use std::time::Instant;

use rand::Rng;
use tracing::info;

use crate::actor::ActorState;
use crate::config::SimConfig;
use crate::error::{SimError, SimResult};
use crate::invariants::{check_invariants, InvariantViolation};
use crate::layout::Population;
use crate::phases::{self, RenderSink};
use crate::spawn::{populate, seeded_rng, SimRng};

/// What happened during one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TickReport {
    /// Index of the tick, starting at 0.
    pub tick: u64,
    /// Seconds simulated by this tick.
    pub dt: f32,
    /// Targets acquired.
    pub acquisitions: usize,
    /// Actors killed.
    pub kills: usize,
    /// Actors revived.
    pub respawns: usize,
    /// Actors drawn (alive at the end of the tick).
    pub drawn: usize,
}

/// Totals over every tick executed so far.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SimulationStats {
    /// Ticks executed.
    pub total_ticks: u64,
    /// Seconds simulated.
    pub simulated_seconds: f64,
    /// Targets acquired.
    pub acquisitions: u64,
    /// Kills.
    pub kills: u64,
    /// Respawns.
    pub respawns: u64,
    /// Draw calls issued to the render sink.
    pub draw_calls: u64,
    /// Fastest tick measured by [`Simulation::run`], in microseconds.
    pub min_tick_us: u64,
    /// Slowest tick measured by [`Simulation::run`], in microseconds.
    pub max_tick_us: u64,
    /// Wall time spent in ticks measured by [`Simulation::run`], in microseconds.
    pub total_tick_us: u64,
    /// Ticks measured by [`Simulation::run`].
    pub timed_ticks: u64,
}

impl SimulationStats {
    /// Mean measured tick time in microseconds.
    #[must_use]
    pub fn avg_tick_us(&self) -> u64 {
        if self.timed_ticks == 0 {
            0
        } else {
            self.total_tick_us / self.timed_ticks
        }
    }

    fn record(&mut self, report: &TickReport) {
        self.total_ticks += 1;
        self.simulated_seconds += f64::from(report.dt);
        self.acquisitions += report.acquisitions as u64;
        self.kills += report.kills as u64;
        self.respawns += report.respawns as u64;
        self.draw_calls += report.drawn as u64;
    }

    fn record_timing(&mut self, micros: u64) {
        self.min_tick_us = if self.timed_ticks == 0 {
            micros
        } else {
            self.min_tick_us.min(micros)
        };
        self.max_tick_us = self.max_tick_us.max(micros);
        self.total_tick_us += micros;
        self.timed_ticks += 1;
    }
}

/// A population advancing under one configuration.
pub struct Simulation<P: Population> {
    population: P,
    config: SimConfig,
    rng: SimRng,
    tick: u64,
    stats: SimulationStats,
}

impl<P: Population> Simulation<P> {
    /// Seeds a fresh population from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidConfig`] if the configuration does not
    /// validate.
    pub fn new(config: SimConfig) -> SimResult<Self> {
        config.validate()?;
        let mut rng = seeded_rng(config.seed);
        let population = P::from_actors(populate(&config, &mut rng));
        Ok(Self::assemble(population, config, rng))
    }

    /// Runs a hand-built population. The RNG is seeded from `config.seed`.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidConfig`] if the configuration does not
    /// validate, [`SimError::PopulationMismatch`] if `actors` is not
    /// `config.population` long and [`SimError::InvalidPopulation`] if the
    /// actors break an invariant (a target out of range, a self target, a
    /// dead actor with a target or a position outside the arena).
    pub fn from_actors(config: SimConfig, actors: Vec<ActorState>) -> SimResult<Self> {
        config.validate()?;
        if actors.len() != config.population {
            return Err(SimError::PopulationMismatch {
                expected: config.population,
                actual: actors.len(),
            });
        }

        let population = P::from_actors(actors);
        check_invariants(&population, config.arena_half_extent)?;
        let rng = seeded_rng(config.seed);
        Ok(Self::assemble(population, config, rng))
    }

    fn assemble(population: P, config: SimConfig, rng: SimRng) -> Self {
        info!(
            layout = P::KIND.name(),
            population = population.len(),
            policy = config.policy.name(),
            seed = config.seed,
            "simulation ready"
        );
        Self {
            population,
            config,
            rng,
            tick: 0,
            stats: SimulationStats::default(),
        }
    }

    /// The population.
    #[must_use]
    pub fn population(&self) -> &P {
        &self.population
    }

    /// The configuration.
    #[must_use]
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Number of ticks executed so far.
    #[must_use]
    pub fn current_tick(&self) -> u64 {
        self.tick
    }

    /// Totals so far.
    #[must_use]
    pub fn stats(&self) -> &SimulationStats {
        &self.stats
    }

    /// Copies out every actor, in slot order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<ActorState> {
        self.population.snapshot()
    }

    /// Checks the population invariants.
    ///
    /// # Errors
    ///
    /// Returns the first violation found.
    pub fn verify(&self) -> Result<(), InvariantViolation> {
        check_invariants(&self.population, self.config.arena_half_extent)
    }

    /// Draws the next tick length: `base_dt` plus uniform jitter.
    pub fn next_delta(&mut self) -> f32 {
        let jitter = self.config.dt_jitter;
        if jitter > 0.0 {
            self.config.base_dt + self.rng.gen_range(-jitter..=jitter)
        } else {
            self.config.base_dt
        }
    }

    /// Advances one tick with a jittered dt.
    pub fn tick<S: RenderSink + ?Sized>(&mut self, sink: &mut S) -> TickReport {
        let dt = self.next_delta();
        self.step(dt, sink)
    }

    /// Advances one tick of exactly `dt` seconds.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if the tick leaves a population invariant broken.
    pub fn step<S: RenderSink + ?Sized>(&mut self, dt: f32, sink: &mut S) -> TickReport {
        let config = &self.config;
        let population = &mut self.population;

        phases::movement(population, config.arena_half_extent, dt);
        let acquisitions = phases::targeting(population, config.target_range, config.policy);
        let kills = phases::damage(population, config.attack_cooldown, config.respawn_delay, dt);
        let respawns = phases::respawn(population, config, &mut self.rng, dt);
        let drawn = phases::render(population, sink);

        debug_assert_eq!(self.verify(), Ok(()), "tick {} broke an invariant", self.tick);

        let report = TickReport {
            tick: self.tick,
            dt,
            acquisitions,
            kills,
            respawns,
            drawn,
        };
        self.tick += 1;
        self.stats.record(&report);
        report
    }

    /// Runs `config.ticks` ticks, timing each one.
    pub fn run<S: RenderSink + ?Sized>(&mut self, sink: &mut S) -> SimulationStats {
        let ticks = self.config.ticks;
        info!(ticks, "run started");

        for _ in 0..ticks {
            let start = Instant::now();
            self.tick(sink);
            let micros = u64::try_from(start.elapsed().as_micros()).unwrap_or(u64::MAX);
            self.stats.record_timing(micros);
        }

        info!(
            ticks = self.stats.total_ticks,
            kills = self.stats.kills,
            respawns = self.stats.respawns,
            alive = self.population.alive_count(),
            avg_tick_us = self.stats.avg_tick_us(),
            "run finished"
        );
        self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor::ActorId;
    use crate::config::SpawnMode;
    use crate::layout::{AosPopulation, SoaPopulation};
    use crate::phases::test_util::{corpse, fighter};
    use crate::phases::NullRenderer;

    fn small_config() -> SimConfig {
        SimConfig {
            population: 200,
            ticks: 120,
            seed: 99,
            ..SimConfig::default()
        }
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = SimConfig {
            population: 0,
            ..SimConfig::default()
        };
        assert!(Simulation::<SoaPopulation>::new(config).is_err());
    }

    #[test]
    fn test_tick_counter_and_stats() {
        let mut sim = Simulation::<SoaPopulation>::new(small_config()).unwrap();
        for expected in 0..5 {
            let report = sim.tick(&mut NullRenderer);
            assert_eq!(report.tick, expected);
        }
        assert_eq!(sim.current_tick(), 5);
        assert_eq!(sim.stats().total_ticks, 5);
        assert!(sim.stats().simulated_seconds > 0.0);
    }

    #[test]
    fn test_dt_stays_within_jitter() {
        let mut sim = Simulation::<SoaPopulation>::new(small_config()).unwrap();
        let config = sim.config().clone();
        for _ in 0..1_000 {
            let dt = sim.next_delta();
            assert!((dt - config.base_dt).abs() <= config.dt_jitter + f32::EPSILON);
        }
    }

    #[test]
    fn test_zero_jitter_gives_fixed_dt() {
        let config = SimConfig {
            dt_jitter: 0.0,
            ..small_config()
        };
        let mut sim = Simulation::<SoaPopulation>::new(config).unwrap();
        let base_dt = sim.config().base_dt;
        for _ in 0..10 {
            assert!((sim.next_delta() - base_dt).abs() < f32::EPSILON);
        }
    }

    #[test]
    fn test_run_executes_configured_ticks() {
        let mut sim = Simulation::<AosPopulation>::new(small_config()).unwrap();
        let stats = sim.run(&mut NullRenderer);
        assert_eq!(stats.total_ticks, 120);
        assert_eq!(stats.timed_ticks, 120);
        assert!(stats.min_tick_us <= stats.max_tick_us);
        assert!(sim.verify().is_ok());
    }

    #[test]
    fn test_duel_to_the_death() {
        let config = SimConfig {
            population: 2,
            spawn: SpawnMode::AllAlive,
            ..SimConfig::default()
        };
        // Attacker is ready, victim still has a long cooldown.
        let attacker = fighter(0, 0.0, 0.0, 10);
        let mut victim = fighter(1, 3.0, 0.0, 1);
        victim.vitals.set_cooldown(50.0);
        let mut sim = Simulation::<SoaPopulation>::from_actors(config, vec![attacker, victim]).unwrap();

        let report = sim.step(1.0 / 60.0, &mut NullRenderer);

        assert_eq!(report.acquisitions, 2);
        assert_eq!(report.kills, 1);
        assert_eq!(report.drawn, 1);
        let population = sim.population();
        assert_eq!(population.record(ActorId::new(0)).xp, 1);
        assert!(population.target(ActorId::new(0)).is_none());
        assert!(!population.vitals(ActorId::new(1)).is_alive());
        assert!(!population.vitals(ActorId::new(1)).is_visible());
    }

    #[test]
    fn test_hand_built_dangling_target_is_rejected() {
        let config = SimConfig {
            population: 1,
            ..SimConfig::default()
        };
        let mut stray = fighter(0, 0.0, 0.0, 5);
        stray.target.set(ActorId::new(9));

        let err = Simulation::<SoaPopulation>::from_actors(config, vec![stray])
            .err()
            .unwrap();
        assert!(matches!(
            err,
            SimError::InvalidPopulation(InvariantViolation::DanglingTarget { len: 1, .. })
        ));
    }

    #[test]
    fn test_hand_built_self_target_and_stray_position_are_rejected() {
        let config = SimConfig {
            population: 1,
            ..SimConfig::default()
        };
        let mut vain = fighter(0, 0.0, 0.0, 5);
        vain.target.set(ActorId::new(0));
        assert!(matches!(
            Simulation::<AosPopulation>::from_actors(config.clone(), vec![vain]),
            Err(SimError::InvalidPopulation(InvariantViolation::SelfTarget(_)))
        ));

        let outside = fighter(0, 250.0, 0.0, 5);
        assert!(matches!(
            Simulation::<AosPopulation>::from_actors(config, vec![outside]),
            Err(SimError::InvalidPopulation(InvariantViolation::OutOfBounds { .. }))
        ));
    }

    #[test]
    fn test_hand_built_size_must_match_config() {
        let config = SimConfig {
            population: 1_000,
            ..SimConfig::default()
        };
        let err = Simulation::<SoaPopulation>::from_actors(config, vec![fighter(0, 0.0, 0.0, 5)])
            .err()
            .unwrap();
        assert!(matches!(
            err,
            SimError::PopulationMismatch {
                expected: 1_000,
                actual: 1
            }
        ));
        assert_eq!(err.to_string(), "config expects 1000 actors but 1 were given");
    }

    #[test]
    fn test_respawn_happens_within_tick() {
        let config = SimConfig {
            population: 1,
            ..SimConfig::default()
        };
        let mut sim =
            Simulation::<SoaPopulation>::from_actors(config, vec![corpse(0, 0.001)]).unwrap();

        let mut drawn = 0;
        let report = sim.step(0.01, &mut |_x: f32, _y: f32| drawn += 1);

        assert_eq!(report.respawns, 1);
        assert_eq!(drawn, 1);
        assert!(sim.population().vitals(ActorId::new(0)).is_visible());
    }
}
