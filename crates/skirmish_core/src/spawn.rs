//! # Seeding
//!
//! Builds the starting population and draws respawn positions. The RNG is
//! always passed in; nothing here holds random state of its own.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::actor::ActorState;
use crate::component::{Position, Record, Target, Velocity, Vitals};
use crate::config::{SimConfig, SpawnMode};

/// RNG used for every random draw of a run.
pub type SimRng = ChaCha8Rng;

/// Velocity components are whole numbers in `[-VELOCITY_STEPS, VELOCITY_STEPS]`
/// scaled by `VELOCITY_SCALE`.
const VELOCITY_STEPS: i32 = 200;
const VELOCITY_SCALE: f32 = 0.01;

/// Initial respawn timers are `1..=RESPAWN_STEPS` multiples of `RESPAWN_SCALE`.
const RESPAWN_STEPS: u32 = 100;
const RESPAWN_SCALE: f32 = 0.1;

/// One actor in `ALIVE_ODDS` starts alive under [`SpawnMode::Mixed`].
const ALIVE_ODDS: u32 = 10;

/// Create a deterministic RNG from a seed.
#[must_use]
pub fn seeded_rng(seed: u64) -> SimRng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Largest whole coordinate that fits in the arena.
#[allow(clippy::cast_possible_truncation)]
fn spawn_extent(half_extent: f32) -> i32 {
    half_extent.floor() as i32
}

/// Draws a spawn point on the whole-number grid of the arena.
#[allow(clippy::cast_precision_loss)]
pub fn random_position<R: Rng + ?Sized>(rng: &mut R, half_extent: f32) -> Position {
    let extent = spawn_extent(half_extent);
    let x = rng.gen_range(-extent..=extent) as f32;
    let y = rng.gen_range(-extent..=extent) as f32;
    Position::new(x, y)
}

#[allow(clippy::cast_precision_loss)]
fn random_velocity<R: Rng + ?Sized>(rng: &mut R) -> Velocity {
    let x = rng.gen_range(-VELOCITY_STEPS..=VELOCITY_STEPS) as f32 * VELOCITY_SCALE;
    let y = rng.gen_range(-VELOCITY_STEPS..=VELOCITY_STEPS) as f32 * VELOCITY_SCALE;
    Velocity::new(x, y)
}

#[allow(clippy::cast_precision_loss)]
fn random_respawn<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    rng.gen_range(1..=RESPAWN_STEPS) as f32 * RESPAWN_SCALE
}

/// Builds the starting population described by `config`.
///
/// Draw order per actor is fixed (alive roll, position, velocity, respawn
/// timer) so a seed always produces the same population.
pub fn populate<R: Rng + ?Sized>(config: &SimConfig, rng: &mut R) -> Vec<ActorState> {
    (0..config.population)
        .map(|index| {
            let alive = match config.spawn {
                SpawnMode::AllAlive => true,
                SpawnMode::Mixed => rng.gen_range(0..ALIVE_ODDS) == 0,
            };
            let position = random_position(rng, config.arena_half_extent);
            let velocity = random_velocity(rng);
            let vitals = if alive {
                Vitals::alive(config.spawn_health, config.attack_cooldown)
            } else {
                Vitals::dead(random_respawn(rng))
            };
            ActorState {
                vitals,
                position,
                velocity,
                target: Target::NONE,
                record: Record::for_index(index),
            }
        })
        .collect()
}
