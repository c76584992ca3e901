use rand::Rng;
use tracing::debug;

use crate::actor::ActorId;
use crate::config::SimConfig;
use crate::layout::Population;
use crate::spawn::random_position;

/// Counts down dead actors and revives those whose timer has run out.
///
/// A revived actor gets `spawn_health`, a fresh attack cooldown, no target and
/// a random spawn point. Velocity and experience carry over. Returns the
/// number of actors revived.
pub fn respawn<P: Population, R: Rng + ?Sized>(
    population: &mut P,
    config: &SimConfig,
    rng: &mut R,
    dt: f32,
) -> usize {
    let mut revived = 0;

    for id in ActorId::all(population.len()) {
        let vitals = population.vitals_mut(id);
        if vitals.is_alive() {
            continue;
        }
        vitals.progress_respawn(dt);
        if !vitals.can_respawn() {
            continue;
        }

        vitals.revive(config.spawn_health, config.attack_cooldown);
        population.target_mut(id).clear();
        let spawn_point = random_position(rng, config.arena_half_extent);
        *population.position_mut(id) = spawn_point;
        revived += 1;

        debug!(
            "{} has respawned at {} {}.",
            population.record(id).name,
            spawn_point.x,
            spawn_point.y,
        );
    }

    revived
}
