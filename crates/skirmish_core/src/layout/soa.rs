//! Struct of arrays: one dense [`ComponentStorage`] per component.

use crate::actor::{ActorId, ActorState};
use crate::component::{Component, Position, Record, Target, Velocity, Vitals};
use crate::storage::ComponentStorage;

use super::{ColumnFootprint, LayoutKind, LayoutReport, Population};

/// Column-per-component population.
///
/// Movement only streams `positions` and `velocities`; targeting streams
/// `vitals` and `positions`. Cold records never enter the cache unless an
/// actor scores a kill.
#[derive(Clone, Debug)]
pub struct SoaPopulation {
    /// Health and state timer column.
    pub vitals: ComponentStorage<Vitals>,
    /// Position column.
    pub positions: ComponentStorage<Position>,
    /// Velocity column.
    pub velocities: ComponentStorage<Velocity>,
    /// Target column.
    pub targets: ComponentStorage<Target>,
    records: Box<[Record]>,
}

impl SoaPopulation {
    fn column<C: Component>(storage: &ComponentStorage<C>) -> ColumnFootprint {
        ColumnFootprint {
            name: C::NAME,
            element_bytes: ComponentStorage::<C>::element_bytes(),
            total_bytes: storage.as_bytes().len(),
        }
    }
}

impl Population for SoaPopulation {
    const KIND: LayoutKind = LayoutKind::Soa;

    fn from_actors(actors: Vec<ActorState>) -> Self {
        let vitals = actors.iter().map(|a| a.vitals).collect();
        let positions = actors.iter().map(|a| a.position).collect();
        let velocities = actors.iter().map(|a| a.velocity).collect();
        let targets = actors.iter().map(|a| a.target).collect();
        let records = actors.into_iter().map(|a| a.record).collect();
        Self {
            vitals,
            positions,
            velocities,
            targets,
            records,
        }
    }

    #[inline]
    fn len(&self) -> usize {
        self.vitals.len()
    }

    #[inline]
    fn vitals(&self, id: ActorId) -> &Vitals {
        &self.vitals[id]
    }

    #[inline]
    fn vitals_mut(&mut self, id: ActorId) -> &mut Vitals {
        &mut self.vitals[id]
    }

    #[inline]
    fn position(&self, id: ActorId) -> &Position {
        &self.positions[id]
    }

    #[inline]
    fn position_mut(&mut self, id: ActorId) -> &mut Position {
        &mut self.positions[id]
    }

    #[inline]
    fn velocity(&self, id: ActorId) -> &Velocity {
        &self.velocities[id]
    }

    #[inline]
    fn velocity_mut(&mut self, id: ActorId) -> &mut Velocity {
        &mut self.velocities[id]
    }

    #[inline]
    fn target(&self, id: ActorId) -> &Target {
        &self.targets[id]
    }

    #[inline]
    fn target_mut(&mut self, id: ActorId) -> &mut Target {
        &mut self.targets[id]
    }

    #[inline]
    fn record(&self, id: ActorId) -> &Record {
        &self.records[id.index()]
    }

    #[inline]
    fn record_mut(&mut self, id: ActorId) -> &mut Record {
        &mut self.records[id.index()]
    }

    fn layout_report(&self) -> LayoutReport {
        LayoutReport {
            layout: Self::KIND,
            population: self.len(),
            columns: vec![
                Self::column(&self.vitals),
                Self::column(&self.positions),
                Self::column(&self.velocities),
                Self::column(&self.targets),
                ColumnFootprint::of::<Record>("record", self.records.len()),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[allow(clippy::cast_precision_loss)]
    fn test_columns_stay_parallel() {
        let actors: Vec<_> = (0..8)
            .map(|i| ActorState {
                vitals: Vitals::alive(3, 0.5),
                position: Position::new(i as f32, 0.0),
                record: Record::for_index(i),
                ..ActorState::default()
            })
            .collect();
        let population = SoaPopulation::from_actors(actors);

        assert_eq!(population.positions.len(), 8);
        assert_eq!(population.targets.len(), 8);
        assert!((population.position(ActorId::new(5)).x - 5.0).abs() < f32::EPSILON);
        assert_eq!(population.record(ActorId::new(5)).name, "Entity #5");
    }
}
