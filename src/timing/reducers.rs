// Timing point reducers
//
// Each reducer splices `EditorState::timing_points` in place and returns the
// mutation that undoes it. Positions are always derived from `time`: a point
// goes in front of the first point with a strictly greater time, so points
// sharing a time keep the order in which they arrived.

use crate::mutation::entity::EntityId;
use crate::mutation::state::EditorState;
use crate::mutation::trait_def::{Mutation, MutationError, MutationKind, MutationResult};
use crate::timing::point::{TimingPoint, TimingPointChanges};
use crate::timing::{delete_timing_point, insert_timing_point, update_timing_point};

/// Index of the first point strictly later than `time`, or the end
fn insertion_index(points: &[TimingPoint], time: f64) -> usize {
    points
        .iter()
        .position(|it| time < it.time)
        .unwrap_or(points.len())
}

/// Insert `entity` at its sorted position
///
/// Returns a delete of the same id. Times must be finite: a NaN time never
/// compares greater than anything, so it breaks the ordering of later inserts.
///
/// # Errors
/// `DuplicateEntity` if the id is already present and
/// `EditorOptions::enforce_unique_ids` is set.
pub fn insert(state: &mut EditorState, entity: TimingPoint) -> MutationResult<Mutation> {
    if state.options.enforce_unique_ids && state.position_of(entity.uuid).is_some() {
        return Err(MutationError::DuplicateEntity(entity.uuid));
    }

    let uuid = entity.uuid;
    let index = insertion_index(&state.timing_points, entity.time);
    state.timing_points.insert(index, entity);

    Ok(delete_timing_point(uuid))
}

/// Merge `changes` into the point with id `uuid` and move it to the position
/// its (possibly new) time dictates
///
/// The returned update carries the previous values of exactly the keys
/// present in `changes`.
///
/// # Errors
/// `EntityNotFound` if no point has this id.
pub fn update(
    state: &mut EditorState,
    uuid: EntityId,
    changes: TimingPointChanges,
) -> MutationResult<Mutation> {
    let old_index = state
        .position_of(uuid)
        .ok_or(MutationError::EntityNotFound(uuid))?;
    let mut point = state.timing_points.remove(old_index);

    let revert = changes.capture_from(&point);
    changes.apply_to(&mut point);

    let index = insertion_index(&state.timing_points, point.time);
    state.timing_points.insert(index, point);

    Ok(update_timing_point(uuid, revert))
}

/// Remove the point with id `uuid`
///
/// Returns an insert carrying the removed point.
///
/// # Errors
/// `EntityNotFound` if no point has this id.
pub fn delete(state: &mut EditorState, uuid: EntityId) -> MutationResult<Mutation> {
    let index = state
        .position_of(uuid)
        .ok_or(MutationError::EntityNotFound(uuid))?;
    let entity = state.timing_points.remove(index);

    Ok(insert_timing_point(entity))
}

pub(crate) fn reduce_insert(
    state: &mut EditorState,
    mutation: Mutation,
) -> MutationResult<Mutation> {
    match mutation {
        Mutation::InsertTimingPoint { entity } => insert(state, entity),
        other => Err(mismatch(MutationKind::InsertTimingPoint, &other)),
    }
}

pub(crate) fn reduce_update(
    state: &mut EditorState,
    mutation: Mutation,
) -> MutationResult<Mutation> {
    match mutation {
        Mutation::UpdateTimingPoint { uuid, entity } => update(state, uuid, entity),
        other => Err(mismatch(MutationKind::UpdateTimingPoint, &other)),
    }
}

pub(crate) fn reduce_delete(
    state: &mut EditorState,
    mutation: Mutation,
) -> MutationResult<Mutation> {
    match mutation {
        Mutation::DeleteTimingPoint { uuid } => delete(state, uuid),
        other => Err(mismatch(MutationKind::DeleteTimingPoint, &other)),
    }
}

fn mismatch(expected: MutationKind, found: &Mutation) -> MutationError {
    MutationError::ReducerMismatch {
        expected,
        found: found.kind(),
    }
}
