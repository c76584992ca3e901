//! # Storage Layouts
//!
//! Every layout stores the same per-actor state and exposes it through
//! [`Population`]. The phases only ever talk to the trait, so swapping the
//! layout changes memory traffic and nothing else.
//!
//! ```text
//! Aos:     [V P Vel T Rec][V P Vel T Rec][V P Vel T Rec] ...
//! HotCold: [V P Vel T][V P Vel T][V P Vel T] ...   [Rec][Rec][Rec] ...
//! Soa:     [V V V ...] [P P P ...] [Vel Vel ...] [T T T ...] [Rec Rec ...]
//! ```

mod aos;
mod hot_cold;
mod soa;

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::actor::{ActorId, ActorState};
use crate::component::{Position, Record, Target, Velocity, Vitals};
use crate::error::SimError;

pub use aos::AosPopulation;
pub use hot_cold::HotColdPopulation;
pub use soa::SoaPopulation;

/// Which storage strategy a population uses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutKind {
    /// One record per actor holding every field.
    Aos,
    /// Hot fields packed per actor, cold records in a side array.
    HotCold,
    /// One dense column per component.
    #[default]
    Soa,
}

impl LayoutKind {
    /// Every layout, in report order.
    pub const ALL: [Self; 3] = [Self::Aos, Self::HotCold, Self::Soa];

    /// Short name used on the command line and in benchmark ids.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aos => "aos",
            Self::HotCold => "hot_cold",
            Self::Soa => "soa",
        }
    }
}

impl fmt::Display for LayoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LayoutKind {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "aos" => Ok(Self::Aos),
            "hot_cold" | "hot-cold" => Ok(Self::HotCold),
            "soa" => Ok(Self::Soa),
            other => Err(SimError::InvalidConfig(format!(
                "unknown layout `{other}` (expected aos, hot_cold or soa)"
            ))),
        }
    }
}

/// Storage access used by every tick phase.
///
/// Accessors panic on out-of-range IDs; IDs handed out by [`ActorId::all`]
/// for `len()` are always valid.
pub trait Population {
    /// Layout implemented by this type.
    const KIND: LayoutKind;

    /// Builds the layout from canonical actor state, preserving order.
    fn from_actors(actors: Vec<ActorState>) -> Self
    where
        Self: Sized;

    /// Number of actors.
    fn len(&self) -> usize;

    /// Returns true if the population holds no actors.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Health and timer of `id`.
    fn vitals(&self, id: ActorId) -> &Vitals;
    /// Mutable health and timer of `id`.
    fn vitals_mut(&mut self, id: ActorId) -> &mut Vitals;

    /// Position of `id`.
    fn position(&self, id: ActorId) -> &Position;
    /// Mutable position of `id`.
    fn position_mut(&mut self, id: ActorId) -> &mut Position;

    /// Velocity of `id`.
    fn velocity(&self, id: ActorId) -> &Velocity;
    /// Mutable velocity of `id`.
    fn velocity_mut(&mut self, id: ActorId) -> &mut Velocity;

    /// Target of `id`.
    fn target(&self, id: ActorId) -> &Target;
    /// Mutable target of `id`.
    fn target_mut(&mut self, id: ActorId) -> &mut Target;

    /// Cold record of `id`.
    fn record(&self, id: ActorId) -> &Record;
    /// Mutable cold record of `id`.
    fn record_mut(&mut self, id: ActorId) -> &mut Record;

    /// Inline memory footprint, column by column.
    fn layout_report(&self) -> LayoutReport;

    /// Copies out the state of `id`.
    fn actor(&self, id: ActorId) -> ActorState {
        ActorState {
            vitals: *self.vitals(id),
            position: *self.position(id),
            velocity: *self.velocity(id),
            target: *self.target(id),
            record: self.record(id).clone(),
        }
    }

    /// Copies out every actor, in slot order.
    fn snapshot(&self) -> Vec<ActorState> {
        ActorId::all(self.len()).map(|id| self.actor(id)).collect()
    }

    /// Number of actors with health left.
    fn alive_count(&self) -> usize {
        ActorId::all(self.len())
            .filter(|&id| self.vitals(id).is_alive())
            .count()
    }
}

/// Memory used by one column of a layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColumnFootprint {
    /// Column name.
    pub name: &'static str,
    /// Bytes per element.
    pub element_bytes: usize,
    /// Bytes for the whole column.
    pub total_bytes: usize,
}

impl ColumnFootprint {
    /// Footprint of a column of `len` elements of type `T`.
    #[must_use]
    pub const fn of<T>(name: &'static str, len: usize) -> Self {
        let element_bytes = std::mem::size_of::<T>();
        Self {
            name,
            element_bytes,
            total_bytes: element_bytes * len,
        }
    }
}

/// Inline memory footprint of a population.
///
/// Heap data owned by cold records (names) is not counted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LayoutReport {
    /// Layout measured.
    pub layout: LayoutKind,
    /// Number of actors.
    pub population: usize,
    /// Columns, in storage order.
    pub columns: Vec<ColumnFootprint>,
}

impl LayoutReport {
    /// Sum of all column sizes.
    #[must_use]
    pub fn total_bytes(&self) -> usize {
        self.columns.iter().map(|c| c.total_bytes).sum()
    }
}

impl fmt::Display for LayoutReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "layout {} ({} actors)", self.layout, self.population)?;
        for column in &self.columns {
            writeln!(
                f,
                "  {:<10} {:>4} B/actor {:>12} B",
                column.name, column.element_bytes, column.total_bytes
            )?;
        }
        write!(f, "  {:<10} {:>27} B", "total", self.total_bytes())
    }
}
