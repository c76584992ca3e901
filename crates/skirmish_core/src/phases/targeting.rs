use crate::actor::ActorId;
use crate::component::Position;
use crate::config::TargetingPolicy;
use crate::layout::Population;

/// Scans for the closest alive actor other than `seeker`.
///
/// Ties go to the lowest slot. Under [`TargetingPolicy::FirstInRange`] the
/// scan stops once the best candidate so far is within range.
fn find_target<P: Population>(
    population: &P,
    seeker: ActorId,
    here: Position,
    range_squared: f32,
    policy: TargetingPolicy,
) -> Option<ActorId> {
    let mut closest: Option<(ActorId, f32)> = None;

    for other in ActorId::all(population.len()) {
        if other == seeker || !population.vitals(other).is_alive() {
            continue;
        }

        let dist = here.distance_squared(*population.position(other));
        if closest.map_or(true, |(_, best)| dist < best) {
            closest = Some((other, dist));
        }

        if policy == TargetingPolicy::FirstInRange
            && closest.is_some_and(|(_, best)| best <= range_squared)
        {
            break;
        }
    }

    closest
        .filter(|&(_, best)| best <= range_squared)
        .map(|(id, _)| id)
}

/// Drops dead or out-of-range targets and acquires new ones.
///
/// O(n²) per tick. Returns the number of targets acquired.
pub fn targeting<P: Population>(
    population: &mut P,
    target_range: f32,
    policy: TargetingPolicy,
) -> usize {
    let range_squared = target_range * target_range;
    let mut acquired = 0;

    for id in ActorId::all(population.len()) {
        if !population.vitals(id).is_alive() {
            continue;
        }

        let here = *population.position(id);

        if let Some(current) = population.target(id).get() {
            let keep = population.vitals(current).is_alive()
                && here.distance_squared(*population.position(current)) <= range_squared;
            if !keep {
                population.target_mut(id).clear();
            }
        }

        if population.target(id).is_none() {
            if let Some(found) = find_target(population, id, here, range_squared, policy) {
                debug_assert_ne!(found, id, "actor acquired itself");
                population.target_mut(id).set(found);
                acquired += 1;
            }
        }
    }

    acquired
}
