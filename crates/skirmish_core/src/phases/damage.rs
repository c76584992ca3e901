use tracing::debug;

use crate::actor::ActorId;
use crate::layout::Population;

/// Damage dealt per hit.
const HIT_DAMAGE: u16 = 1;

/// Experience awarded per kill.
const KILL_XP: u32 = 1;

/// Lets every engaged attacker hit its target once its cooldown elapses.
///
/// On a kill the attacker gains experience and drops its target, and the
/// victim dies with `respawn_delay` on its clock and no target of its own.
/// Returns the number of kills.
pub fn damage<P: Population>(
    population: &mut P,
    attack_cooldown: f32,
    respawn_delay: f32,
    dt: f32,
) -> usize {
    let mut kills = 0;

    for id in ActorId::all(population.len()) {
        if !population.vitals(id).is_alive() {
            continue;
        }
        let Some(victim) = population.target(id).get() else {
            continue;
        };
        debug_assert_ne!(victim, id, "actor targets itself");

        let attacker = population.vitals_mut(id);
        attacker.progress_cooldown(dt);
        if !attacker.cooldown_done() || !population.vitals(victim).is_alive() {
            continue;
        }

        population.vitals_mut(id).set_cooldown(attack_cooldown);
        if !population.vitals_mut(victim).apply_damage(HIT_DAMAGE) {
            continue;
        }

        population.vitals_mut(victim).kill(respawn_delay);
        population.target_mut(victim).clear();
        population.target_mut(id).clear();
        population.record_mut(id).xp += KILL_XP;
        kills += 1;

        debug!(
            "{} has killed {}. {} gets {} xp and now has {} xp total.",
            population.record(id).name,
            population.record(victim).name,
            population.record(id).name,
            KILL_XP,
            population.record(id).xp,
        );
    }

    kills
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{HotColdPopulation, SoaPopulation};
    use crate::phases::test_util::fighter;

    fn engaged(attacker_cooldown: f32, victim_health: u16) -> SoaPopulation {
        let mut attacker = fighter(0, 0.0, 0.0, 10);
        attacker.vitals.set_cooldown(attacker_cooldown);
        attacker.target.set(ActorId::new(1));
        let mut victim = fighter(1, 1.0, 0.0, victim_health);
        victim.vitals.set_cooldown(5.0);
        victim.target.set(ActorId::new(0));
        SoaPopulation::from_actors(vec![attacker, victim])
    }

    #[test]
    fn test_killing_blow() {
        let mut population = engaged(0.0, 1);
        let attacker = ActorId::new(0);
        let victim = ActorId::new(1);

        let kills = damage(&mut population, 1.0, 10.0, 1.0 / 60.0);

        assert_eq!(kills, 1);
        assert_eq!(population.vitals(victim).health, 0);
        assert!(!population.vitals(victim).is_alive());
        assert!((population.vitals(victim).respawn_timer() - 10.0).abs() < f32::EPSILON);
        assert!(population.target(victim).is_none());
        assert_eq!(population.record(attacker).xp, 1);
        assert!(population.target(attacker).is_none());
        assert!((population.vitals(attacker).cooldown() - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_hit_without_kill_keeps_target() {
        let mut population = engaged(0.0, 3);

        assert_eq!(damage(&mut population, 1.0, 10.0, 0.1), 0);

        assert_eq!(population.vitals(ActorId::new(1)).health, 2);
        assert_eq!(population.target(ActorId::new(0)).get(), Some(ActorId::new(1)));
        assert_eq!(population.record(ActorId::new(0)).xp, 0);
    }

    #[test]
    fn test_cooldown_gates_attacks() {
        let mut population = engaged(0.5, 3);

        damage(&mut population, 1.0, 10.0, 0.25);
        assert_eq!(population.vitals(ActorId::new(1)).health, 3);
        assert!((population.vitals(ActorId::new(0)).cooldown() - 0.25).abs() < f32::EPSILON);

        damage(&mut population, 1.0, 10.0, 0.25);
        assert_eq!(population.vitals(ActorId::new(1)).health, 2);
    }

    #[test]
    fn test_targetless_cooldown_is_frozen() {
        let mut idle = fighter(0, 0.0, 0.0, 10);
        idle.vitals.set_cooldown(0.5);
        let mut population = HotColdPopulation::from_actors(vec![idle]);

        damage(&mut population, 1.0, 10.0, 0.25);

        assert!((population.vitals(ActorId::new(0)).cooldown() - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn test_dead_target_is_not_hit() {
        let mut population = engaged(0.0, 1);
        // Someone else got there first.
        population.vitals_mut(ActorId::new(1)).kill(10.0);
        population.target_mut(ActorId::new(1)).clear();

        assert_eq!(damage(&mut population, 1.0, 10.0, 0.1), 0);
        assert_eq!(population.record(ActorId::new(0)).xp, 0);
    }

    #[test]
    fn test_victim_killed_earlier_in_phase_does_not_strike_back() {
        // Both ready, both on one health: slot 0 swings first.
        let mut population = engaged(0.0, 1);
        population.vitals_mut(ActorId::new(0)).health = 1;
        population.vitals_mut(ActorId::new(1)).set_cooldown(0.0);

        assert_eq!(damage(&mut population, 1.0, 10.0, 0.1), 1);
        assert!(population.vitals(ActorId::new(0)).is_alive());
    }
}
