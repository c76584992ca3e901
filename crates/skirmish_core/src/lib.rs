//! # SKIRMISH Core
//!
//! A fixed population of actors fighting in a bounded arena, used as a
//! workload for comparing memory layouts.
//!
//! ## Architecture Rules
//!
//! 1. **One ruleset** - The tick phases are written once against [`Population`]
//! 2. **Many layouts** - [`AosPopulation`], [`HotColdPopulation`] and
//!    [`SoaPopulation`] store the same state differently
//! 3. **Index relations** - Targets are [`ActorId`]s, never references
//! 4. **Explicit randomness** - The RNG is owned by the [`Simulation`] and
//!    passed to every call that needs it
//!
//! ## Tick Order
//!
//! ```text
//! movement -> targeting -> damage -> respawn -> render
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use skirmish_core::{NullRenderer, SimConfig, Simulation, SoaPopulation};
//!
//! let mut sim = Simulation::<SoaPopulation>::new(SimConfig::default())?;
//! let stats = sim.run(&mut NullRenderer);
//! println!("{} kills", stats.kills);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod actor;
pub mod component;
pub mod config;
pub mod error;
pub mod invariants;
pub mod layout;
pub mod phases;
pub mod simulation;
pub mod spawn;
mod storage;

pub use actor::{ActorId, ActorState};
pub use component::{Component, Position, Record, Target, Velocity, Vitals};
pub use config::{SimConfig, SpawnMode, TargetingPolicy};
pub use error::{SimError, SimResult};
pub use invariants::{check_invariants, InvariantViolation};
pub use layout::{
    AosPopulation, ColumnFootprint, HotColdPopulation, LayoutKind, LayoutReport, Population,
    SoaPopulation,
};
pub use phases::{NullRenderer, RenderSink};
pub use simulation::{Simulation, SimulationStats, TickReport};
pub use spawn::{seeded_rng, SimRng};
pub use storage::ComponentStorage;
