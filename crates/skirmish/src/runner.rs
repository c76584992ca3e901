//! # Run Driver
//!
//! Picks the population type named by [`SimConfig::layout`], runs the
//! configured ticks and collects what the front-end prints.

use std::fmt;
use std::time::{Duration, Instant};

use skirmish_core::{
    AosPopulation, HotColdPopulation, LayoutKind, LayoutReport, Population, RenderSink,
    SimConfig, SimResult, Simulation, SimulationStats, SoaPopulation,
};
use tracing::info;

/// Render sink that counts draw calls and tracks the widest coordinate drawn.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TallyRenderer {
    /// Draw calls received.
    pub draws: u64,
    /// Largest `|x|` or `|y|` drawn.
    pub widest: f32,
}

impl RenderSink for TallyRenderer {
    fn draw(&mut self, x: f32, y: f32) {
        self.draws += 1;
        self.widest = self.widest.max(x.abs()).max(y.abs());
    }
}

/// Outcome of one run.
#[derive(Clone, Debug)]
pub struct RunSummary {
    /// Configuration the run used.
    pub config: SimConfig,
    /// Totals from the simulation.
    pub stats: SimulationStats,
    /// Actors alive after the last tick.
    pub final_alive: usize,
    /// What the render sink saw.
    pub tally: TallyRenderer,
    /// Wall time of the whole run.
    pub elapsed: Duration,
    /// Memory footprint of the population.
    pub footprint: LayoutReport,
}

/// Runs `config.ticks` ticks on the layout chosen by `config.layout`.
///
/// # Errors
///
/// Returns an error if the configuration does not validate.
pub fn run(config: SimConfig) -> SimResult<RunSummary> {
    match config.layout {
        LayoutKind::Aos => run_with::<AosPopulation>(config),
        LayoutKind::HotCold => run_with::<HotColdPopulation>(config),
        LayoutKind::Soa => run_with::<SoaPopulation>(config),
    }
}

fn run_with<P: Population>(config: SimConfig) -> SimResult<RunSummary> {
    let mut sim = Simulation::<P>::new(config)?;
    let mut tally = TallyRenderer::default();

    let start = Instant::now();
    let stats = sim.run(&mut tally);
    let elapsed = start.elapsed();

    let population = sim.population();
    info!(
        layout = P::KIND.name(),
        elapsed_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
        "summary ready"
    );

    Ok(RunSummary {
        final_alive: population.alive_count(),
        footprint: population.layout_report(),
        config: sim.config().clone(),
        stats,
        tally,
        elapsed,
    })
}

impl RunSummary {
    /// Simulated seconds per wall-clock second.
    #[must_use]
    pub fn realtime_factor(&self) -> f64 {
        let wall = self.elapsed.as_secs_f64();
        if wall > 0.0 {
            self.stats.simulated_seconds / wall
        } else {
            0.0
        }
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let config = &self.config;
        let stats = &self.stats;

        writeln!(f, "┌─ CONFIGURATION ──────────────────────────────────────┐")?;
        writeln!(f, "│ Layout:             {}", config.layout)?;
        writeln!(f, "│ Population:         {} actors", config.population)?;
        writeln!(f, "│ Policy:             {}", config.policy)?;
        writeln!(f, "│ Seed:               {:#x}", config.seed)?;
        writeln!(
            f,
            "│ Arena:              [-{0}, {0}] x [-{0}, {0}]",
            config.arena_half_extent
        )?;
        writeln!(f, "└──────────────────────────────────────────────────────┘")?;
        writeln!(f)?;
        writeln!(f, "┌─ RESULTS ────────────────────────────────────────────┐")?;
        writeln!(f, "│ Ticks:              {}", stats.total_ticks)?;
        writeln!(f, "│ Simulated Time:     {:.2} s", stats.simulated_seconds)?;
        writeln!(f, "│ Acquisitions:       {}", stats.acquisitions)?;
        writeln!(f, "│ Kills:              {}", stats.kills)?;
        writeln!(f, "│ Respawns:           {}", stats.respawns)?;
        writeln!(f, "│ Final Alive:        {}", self.final_alive)?;
        writeln!(f, "│ Draw Calls:         {}", stats.draw_calls)?;
        writeln!(f, "│ Widest Draw:        {:.2}", self.tally.widest)?;
        writeln!(f, "└──────────────────────────────────────────────────────┘")?;
        writeln!(f)?;
        writeln!(f, "┌─ TICK PERFORMANCE ───────────────────────────────────┐")?;
        writeln!(f, "│ Min Tick Time:      {} μs", stats.min_tick_us)?;
        writeln!(f, "│ Max Tick Time:      {} μs", stats.max_tick_us)?;
        writeln!(f, "│ Avg Tick Time:      {} μs", stats.avg_tick_us())?;
        writeln!(f, "│ Wall Time:          {:.3} s", self.elapsed.as_secs_f64())?;
        writeln!(f, "│ Realtime Factor:    {:.1}x", self.realtime_factor())?;
        writeln!(f, "└──────────────────────────────────────────────────────┘")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn short(layout: LayoutKind) -> SimConfig {
        SimConfig {
            population: 120,
            ticks: 90,
            layout,
            ..SimConfig::default()
        }
    }

    #[test]
    fn test_tally_counts_and_tracks_extent() {
        let mut tally = TallyRenderer::default();
        tally.draw(1.0, -3.5);
        tally.draw(-2.0, 0.0);
        assert_eq!(tally.draws, 2);
        assert!((tally.widest - 3.5).abs() < f32::EPSILON);
    }

    #[test]
    fn test_run_uses_requested_layout() {
        for layout in LayoutKind::ALL {
            let summary = run(short(layout)).unwrap();
            assert_eq!(summary.footprint.layout, layout);
            assert_eq!(summary.stats.total_ticks, 90);
            assert_eq!(summary.tally.draws, summary.stats.draw_calls);
            assert!(summary.tally.widest <= summary.config.arena_half_extent);
        }
    }

    #[test]
    fn test_layouts_agree_on_outcome() {
        let soa = run(short(LayoutKind::Soa)).unwrap();
        for layout in [LayoutKind::Aos, LayoutKind::HotCold] {
            let other = run(short(layout)).unwrap();
            assert_eq!(other.stats.kills, soa.stats.kills);
            assert_eq!(other.stats.respawns, soa.stats.respawns);
            assert_eq!(other.final_alive, soa.final_alive);
        }
    }

    #[test]
    fn test_summary_mentions_totals() {
        let summary = run(short(LayoutKind::Aos)).unwrap();
        let text = summary.to_string();
        assert!(text.contains("Layout:             aos"));
        assert!(text.contains("Ticks:              90"));
        assert!(text.contains(&format!("Final Alive:        {}", summary.final_alive)));
    }
}
