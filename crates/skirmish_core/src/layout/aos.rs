//! Array of structs: every actor is one contiguous record.

use crate::actor::{ActorId, ActorState};
use crate::component::{Position, Record, Target, Velocity, Vitals};

use super::{ColumnFootprint, LayoutKind, LayoutReport, Population};

/// One [`ActorState`] per slot, cold record inline with the hot fields.
#[derive(Clone, Debug, Default)]
pub struct AosPopulation {
    actors: Box<[ActorState]>,
}

impl Population for AosPopulation {
    const KIND: LayoutKind = LayoutKind::Aos;

    fn from_actors(actors: Vec<ActorState>) -> Self {
        Self {
            actors: actors.into_boxed_slice(),
        }
    }

    #[inline]
    fn len(&self) -> usize {
        self.actors.len()
    }

    #[inline]
    fn vitals(&self, id: ActorId) -> &Vitals {
        &self.actors[id.index()].vitals
    }

    #[inline]
    fn vitals_mut(&mut self, id: ActorId) -> &mut Vitals {
        &mut self.actors[id.index()].vitals
    }

    #[inline]
    fn position(&self, id: ActorId) -> &Position {
        &self.actors[id.index()].position
    }

    #[inline]
    fn position_mut(&mut self, id: ActorId) -> &mut Position {
        &mut self.actors[id.index()].position
    }

    #[inline]
    fn velocity(&self, id: ActorId) -> &Velocity {
        &self.actors[id.index()].velocity
    }

    #[inline]
    fn velocity_mut(&mut self, id: ActorId) -> &mut Velocity {
        &mut self.actors[id.index()].velocity
    }

    #[inline]
    fn target(&self, id: ActorId) -> &Target {
        &self.actors[id.index()].target
    }

    #[inline]
    fn target_mut(&mut self, id: ActorId) -> &mut Target {
        &mut self.actors[id.index()].target
    }

    #[inline]
    fn record(&self, id: ActorId) -> &Record {
        &self.actors[id.index()].record
    }

    #[inline]
    fn record_mut(&mut self, id: ActorId) -> &mut Record {
        &mut self.actors[id.index()].record
    }

    fn layout_report(&self) -> LayoutReport {
        LayoutReport {
            layout: Self::KIND,
            population: self.len(),
            columns: vec![ColumnFootprint::of::<ActorState>("actor", self.len())],
        }
    }

    fn actor(&self, id: ActorId) -> ActorState {
        self.actors[id.index()].clone()
    }
}
