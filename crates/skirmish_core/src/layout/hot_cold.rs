//! Hot/cold split: per-actor packed rows for the fields the tick loop
//! touches, with names and experience moved to a side array.

use bytemuck::{Pod, Zeroable};

use crate::actor::{ActorId, ActorState};
use crate::component::{Position, Record, Target, Velocity, Vitals};

use super::{ColumnFootprint, LayoutKind, LayoutReport, Population};

/// Every field read by movement, targeting, damage and respawn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
#[repr(C)]
struct HotRow {
    vitals: Vitals,
    position: Position,
    velocity: Velocity,
    target: Target,
}

/// Packed hot rows plus a parallel array of cold records.
#[derive(Clone, Debug, Default)]
pub struct HotColdPopulation {
    hot: Box<[HotRow]>,
    cold: Box<[Record]>,
}

impl Population for HotColdPopulation {
    const KIND: LayoutKind = LayoutKind::HotCold;

    fn from_actors(actors: Vec<ActorState>) -> Self {
        let mut hot = Vec::with_capacity(actors.len());
        let mut cold = Vec::with_capacity(actors.len());
        for actor in actors {
            hot.push(HotRow {
                vitals: actor.vitals,
                position: actor.position,
                velocity: actor.velocity,
                target: actor.target,
            });
            cold.push(actor.record);
        }
        Self {
            hot: hot.into_boxed_slice(),
            cold: cold.into_boxed_slice(),
        }
    }

    #[inline]
    fn len(&self) -> usize {
        self.hot.len()
    }

    #[inline]
    fn vitals(&self, id: ActorId) -> &Vitals {
        &self.hot[id.index()].vitals
    }

    #[inline]
    fn vitals_mut(&mut self, id: ActorId) -> &mut Vitals {
        &mut self.hot[id.index()].vitals
    }

    #[inline]
    fn position(&self, id: ActorId) -> &Position {
        &self.hot[id.index()].position
    }

    #[inline]
    fn position_mut(&mut self, id: ActorId) -> &mut Position {
        &mut self.hot[id.index()].position
    }

    #[inline]
    fn velocity(&self, id: ActorId) -> &Velocity {
        &self.hot[id.index()].velocity
    }

    #[inline]
    fn velocity_mut(&mut self, id: ActorId) -> &mut Velocity {
        &mut self.hot[id.index()].velocity
    }

    #[inline]
    fn target(&self, id: ActorId) -> &Target {
        &self.hot[id.index()].target
    }

    #[inline]
    fn target_mut(&mut self, id: ActorId) -> &mut Target {
        &mut self.hot[id.index()].target
    }

    #[inline]
    fn record(&self, id: ActorId) -> &Record {
        &self.cold[id.index()]
    }

    #[inline]
    fn record_mut(&mut self, id: ActorId) -> &mut Record {
        &mut self.cold[id.index()]
    }

    fn layout_report(&self) -> LayoutReport {
        LayoutReport {
            layout: Self::KIND,
            population: self.len(),
            columns: vec![
                ColumnFootprint::of::<HotRow>("hot", self.len()),
                ColumnFootprint::of::<Record>("record", self.cold.len()),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hot_row_is_packed() {
        assert_eq!(std::mem::size_of::<HotRow>(), 28);
    }
}
