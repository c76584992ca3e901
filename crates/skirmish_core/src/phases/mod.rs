//! # Tick Phases
//!
//! Each phase is a free function over any [`Population`](crate::Population),
//! so a single implementation serves every layout. A tick runs them in
//! this order:
//!
//! 1. [`movement`] - integrate velocity, reflect off the arena walls
//! 2. [`targeting`] - drop stale targets, acquire the nearest one in range
//! 3. [`damage`] - hit targets whose attacker is off cooldown
//! 4. [`respawn`] - revive actors whose respawn timer has run out
//! 5. [`render`] - refresh visibility and hand visible actors to a sink
//!
//! Every phase walks actors in slot order. Later actors observe the writes
//! of earlier ones within the same phase.

mod damage;
mod movement;
mod render;
mod respawn;
mod targeting;

pub use damage::damage;
pub use movement::movement;
pub use render::{render, NullRenderer, RenderSink};
pub use respawn::respawn;
pub use targeting::targeting;
