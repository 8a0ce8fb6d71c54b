// Mutation engine - apply a change, get back the change that undoes it
//
// Architecture:
// - Mutation: tagged value describing one change (see trait_def)
// - Reducer: fn(&mut EditorState, Mutation) -> inverse Mutation
// - MutationRegistry: MutationKind -> Reducer table, merged from the
//   ReducerGroup each entity module exports
// - commit_mutation: dispatch through the standard registry
//
// The engine keeps no history. Hosts push the returned inverses onto their
// own undo stack and submit them through commit_mutation to undo.

pub mod entity;
pub mod registry;
pub mod state;
pub mod trait_def;

pub use entity::{EntityId, HasId};
pub use registry::{MutationRegistry, commit_mutation, standard_registry};
pub use state::{EditorOptions, EditorState};
pub use trait_def::{Mutation, MutationError, MutationKind, MutationResult, Reducer, ReducerGroup};
