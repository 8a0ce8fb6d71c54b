// Mutation values, tags, reducer signature and errors

use crate::mutation::entity::EntityId;
use crate::mutation::state::EditorState;
use crate::timing::point::{TimingPoint, TimingPointChanges};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Result type for mutation operations
pub type MutationResult<T> = Result<T, MutationError>;

/// Errors that can occur while applying a mutation
///
/// The collection is left untouched whenever one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MutationError {
    /// The update/delete target does not exist
    #[error("Entity not found: {0}")]
    EntityNotFound(EntityId),

    /// An insert would create a second entity with the same id
    #[error("Entity already exists: {0}")]
    DuplicateEntity(EntityId),

    /// A reducer was registered under a kind it does not handle
    #[error("Reducer for {expected} received a {found} mutation")]
    ReducerMismatch {
        expected: MutationKind,
        found: MutationKind,
    },
}

/// Tag of a mutation, the key of the reducer registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MutationKind {
    InsertTimingPoint,
    UpdateTimingPoint,
    DeleteTimingPoint,
}

impl MutationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MutationKind::InsertTimingPoint => "insertTimingPoint",
            MutationKind::UpdateTimingPoint => "updateTimingPoint",
            MutationKind::DeleteTimingPoint => "deleteTimingPoint",
        }
    }
}

impl fmt::Display for MutationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single requested change to the editor state
///
/// Every reducer returns another `Mutation`: its exact inverse. Submitting the
/// inverse through the same dispatcher undoes the change.
///
/// On the wire the variant is carried in a `"type"` field:
/// `{"type":"deleteTimingPoint","uuid":"..."}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Mutation {
    /// Add a timing point at its sorted position
    InsertTimingPoint { entity: TimingPoint },

    /// Change some fields of an existing timing point
    UpdateTimingPoint {
        uuid: EntityId,
        entity: TimingPointChanges,
    },

    /// Remove a timing point
    DeleteTimingPoint { uuid: EntityId },
}

impl Mutation {
    pub fn kind(&self) -> MutationKind {
        match self {
            Mutation::InsertTimingPoint { .. } => MutationKind::InsertTimingPoint,
            Mutation::UpdateTimingPoint { .. } => MutationKind::UpdateTimingPoint,
            Mutation::DeleteTimingPoint { .. } => MutationKind::DeleteTimingPoint,
        }
    }

    /// Get a human-readable description of the mutation
    ///
    /// Used for UI display (e.g., "Undo: Insert timing point at 10.000")
    pub fn description(&self) -> String {
        match self {
            Mutation::InsertTimingPoint { entity } => {
                format!("Insert timing point at {:.3}", entity.time)
            }
            Mutation::UpdateTimingPoint { entity, .. } => {
                let mut fields = Vec::new();
                if entity.time.is_some() {
                    fields.push("time");
                }
                if entity.bpm.is_some() {
                    fields.push("BPM");
                }
                if entity.signature.is_some() {
                    fields.push("signature");
                }
                if fields.is_empty() {
                    "Touch timing point".to_string()
                } else {
                    format!("Change timing point {}", fields.join(", "))
                }
            }
            Mutation::DeleteTimingPoint { .. } => "Delete timing point".to_string(),
        }
    }
}

impl fmt::Display for Mutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mutation::InsertTimingPoint { entity } => {
                write!(f, "{} {} {}", self.kind(), entity.uuid, entity)
            }
            Mutation::UpdateTimingPoint { uuid, .. } | Mutation::DeleteTimingPoint { uuid } => {
                write!(f, "{} {}", self.kind(), uuid)
            }
        }
    }
}

/// Applies one kind of mutation and returns its inverse
///
/// Reducers mutate `state` in place. On error they must leave it unchanged.
pub type Reducer = fn(&mut EditorState, Mutation) -> MutationResult<Mutation>;

/// The reducers contributed by one entity module
pub type ReducerGroup = &'static [(MutationKind, Reducer)];
