// Timing points - tempo and meter markers kept sorted by time
//
// Hosts build mutations with the factory functions below and submit them
// through `mutation::commit_mutation`.

pub mod point;
pub mod reducers;

pub use point::{TimingPoint, TimingPointChanges};

use crate::mutation::entity::EntityId;
use crate::mutation::trait_def::{Mutation, MutationKind, ReducerGroup};

/// Reducers for every timing point mutation kind
pub const REDUCERS: ReducerGroup = &[
    (MutationKind::InsertTimingPoint, reducers::reduce_insert),
    (MutationKind::UpdateTimingPoint, reducers::reduce_update),
    (MutationKind::DeleteTimingPoint, reducers::reduce_delete),
];

/// Build a mutation that adds `entity` at its sorted position
pub fn insert_timing_point(entity: TimingPoint) -> Mutation {
    Mutation::InsertTimingPoint { entity }
}

/// Build a mutation that changes the fields present in `changes`
pub fn update_timing_point(uuid: EntityId, changes: TimingPointChanges) -> Mutation {
    Mutation::UpdateTimingPoint {
        uuid,
        entity: changes,
    }
}

/// Build a mutation that removes the timing point with id `uuid`
pub fn delete_timing_point(uuid: EntityId) -> Mutation {
    Mutation::DeleteTimingPoint { uuid }
}
