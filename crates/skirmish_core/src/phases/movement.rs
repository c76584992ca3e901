use crate::actor::ActorId;
use crate::layout::Population;

/// Folds one coordinate back into `[-bound, bound]`, mirroring the overshoot
/// and flipping the matching velocity component.
#[inline]
fn reflect(coord: &mut f32, vel: &mut f32, bound: f32) {
    if *coord < -bound {
        // e.g. -205 with bound 200 -> -195
        *coord = -bound + (-bound - *coord);
        *vel = -*vel;
    } else if *coord > bound {
        // e.g. 205 with bound 200 -> 195
        *coord = bound - (*coord - bound);
        *vel = -*vel;
    }
    // A step longer than the whole arena would reflect past the far wall.
    *coord = coord.clamp(-bound, bound);
}

/// Advances every alive actor by `velocity * dt` inside a reflective arena.
///
/// Dead actors keep their position until they respawn.
pub fn movement<P: Population>(population: &mut P, half_extent: f32, dt: f32) {
    for id in ActorId::all(population.len()) {
        if !population.vitals(id).is_alive() {
            continue;
        }

        let mut pos = *population.position(id);
        let mut vel = *population.velocity(id);

        pos.x += vel.x * dt;
        pos.y += vel.y * dt;
        reflect(&mut pos.x, &mut vel.x, half_extent);
        reflect(&mut pos.y, &mut vel.y, half_extent);

        *population.position_mut(id) = pos;
        *population.velocity_mut(id) = vel;
    }
}
