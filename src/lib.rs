// Timing Edit - Library exports for tests, benchmarks and hosts

pub mod mutation;
pub mod timing;

// Re-export commonly used types for convenience
pub use mutation::{
    EditorOptions, EditorState, EntityId, Mutation, MutationError, MutationKind,
    MutationRegistry, MutationResult, commit_mutation,
};
pub use timing::{
    TimingPoint, TimingPointChanges, delete_timing_point, insert_timing_point,
    update_timing_point,
};
