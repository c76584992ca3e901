//! # Population Invariants
//!
//! Properties that hold after every complete tick:
//!
//! - every position lies inside the arena
//! - a dead actor has no target
//! - no actor targets itself
//! - every target names an actor of the population
//!
//! `alive ⇔ health > 0` needs no check: alive is derived from health.

use thiserror::Error;

use crate::actor::ActorId;
use crate::component::Position;
use crate::layout::Population;

/// The first broken invariant found by [`check_invariants`].
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum InvariantViolation {
    /// An actor stands outside the arena.
    #[error("actor {actor} at ({}, {}) is outside the arena", .position.x, .position.y)]
    OutOfBounds {
        /// Offending actor.
        actor: ActorId,
        /// Where it stands.
        position: Position,
    },

    /// A dead actor still holds a target.
    #[error("dead actor {actor} still targets {target}")]
    DeadWithTarget {
        /// Offending actor.
        actor: ActorId,
        /// Its leftover target.
        target: ActorId,
    },

    /// An actor targets itself.
    #[error("actor {0} targets itself")]
    SelfTarget(ActorId),

    /// A target index lies past the end of the population.
    #[error("actor {actor} targets {target} but the population has {len} actors")]
    DanglingTarget {
        /// Offending actor.
        actor: ActorId,
        /// Out-of-range target.
        target: ActorId,
        /// Population size.
        len: usize,
    },
}

/// Checks every actor, in slot order, against the population invariants.
///
/// # Errors
///
/// Returns the first violation found.
pub fn check_invariants<P: Population>(
    population: &P,
    half_extent: f32,
) -> Result<(), InvariantViolation> {
    let len = population.len();

    for actor in ActorId::all(len) {
        let position = *population.position(actor);
        if !position.within(half_extent) {
            return Err(InvariantViolation::OutOfBounds { actor, position });
        }

        let Some(target) = population.target(actor).get() else {
            continue;
        };
        if target == actor {
            return Err(InvariantViolation::SelfTarget(actor));
        }
        if target.index() >= len {
            return Err(InvariantViolation::DanglingTarget { actor, target, len });
        }
        if !population.vitals(actor).is_alive() {
            return Err(InvariantViolation::DeadWithTarget { actor, target });
        }
    }

    Ok(())
}
