//! # SKIRMISH Runner
//!
//! Front-end for [`skirmish_core`]: argument parsing, log setup and a run
//! driver that picks the storage layout at runtime.
//!
//! ```text
//! TOML file ──┐
//!             ├─> SimConfig ─> run() ─> RunSummary ─> stdout
//! CLI flags ──┘
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod cli;
pub mod logging;
pub mod runner;

pub use cli::Args;
pub use runner::{run, RunSummary, TallyRenderer};
