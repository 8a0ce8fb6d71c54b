// MutationRegistry - maps mutation kinds to reducers and dispatches

use crate::mutation::state::EditorState;
use crate::mutation::trait_def::{Mutation, MutationKind, MutationResult, Reducer, ReducerGroup};
use std::collections::HashMap;
use std::sync::OnceLock;

/// Every reducer group shipped with the crate
const BUILTIN_GROUPS: &[ReducerGroup] = &[crate::timing::REDUCERS];

/// Lookup table from mutation kind to the reducer that applies it
///
/// Entity modules contribute their reducers as a [`ReducerGroup`]; the
/// registry merges the groups into one flat table so the dispatcher never
/// needs to know which module owns which kind.
///
/// A kind with no registered reducer is not an error: [`commit`](Self::commit)
/// reports it as unhandled by returning `Ok(None)` and leaves the state alone.
#[derive(Debug, Clone)]
pub struct MutationRegistry {
    reducers: HashMap<MutationKind, Reducer>,
}

impl MutationRegistry {
    /// Create a registry with no reducers
    pub fn new() -> Self {
        Self {
            reducers: HashMap::new(),
        }
    }

    /// Create a registry holding every built-in reducer group
    pub fn standard() -> Self {
        BUILTIN_GROUPS
            .iter()
            .fold(Self::new(), |registry, &group| registry.with_group(group))
    }

    /// Merge a reducer group into the registry
    ///
    /// Later registrations for the same kind replace earlier ones.
    pub fn with_group(mut self, group: ReducerGroup) -> Self {
        for &(kind, reducer) in group {
            self.register(kind, reducer);
        }
        self
    }

    /// Register a single reducer, returning the one it replaced
    pub fn register(&mut self, kind: MutationKind, reducer: Reducer) -> Option<Reducer> {
        self.reducers.insert(kind, reducer)
    }

    pub fn reducer_for(&self, kind: MutationKind) -> Option<Reducer> {
        self.reducers.get(&kind).copied()
    }

    pub fn handles(&self, kind: MutationKind) -> bool {
        self.reducers.contains_key(&kind)
    }

    /// Apply a mutation and return its inverse
    ///
    /// Returns `Ok(None)` if no reducer is registered for the mutation's kind.
    ///
    /// # Errors
    /// Propagates the reducer's error unchanged. The state is not modified
    /// when an error is returned.
    pub fn commit(
        &self,
        state: &mut EditorState,
        mutation: Mutation,
    ) -> MutationResult<Option<Mutation>> {
        let kind = mutation.kind();
        let Some(reducer) = self.reducer_for(kind) else {
            tracing::debug!(%kind, "no reducer registered, mutation ignored");
            return Ok(None);
        };

        tracing::debug!(%mutation, "committing mutation");
        match reducer(state, mutation) {
            Ok(inverse) => {
                tracing::debug!(%inverse, "mutation committed");
                Ok(Some(inverse))
            }
            Err(err) => {
                tracing::warn!(%kind, error = %err, "mutation rejected");
                Err(err)
            }
        }
    }
}

impl Default for MutationRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

/// The process-wide registry used by [`commit_mutation`]
///
/// Built once on first use and never modified afterwards.
pub fn standard_registry() -> &'static MutationRegistry {
    static REGISTRY: OnceLock<MutationRegistry> = OnceLock::new();
    REGISTRY.get_or_init(MutationRegistry::standard)
}

/// Apply a mutation through the standard registry
///
/// This is the single entry point for both doing and undoing: to undo, commit
/// the mutation returned by the earlier call.
///
/// # Example
/// ```
/// use timing_edit::mutation::{EditorState, commit_mutation};
/// use timing_edit::timing::{TimingPoint, insert_timing_point};
///
/// let mut state = EditorState::new();
/// let point = TimingPoint::new(10.0).with_bpm(120.0);
///
/// let undo = commit_mutation(&mut state, insert_timing_point(point))
///     .unwrap()
///     .unwrap();
/// assert_eq!(state.len(), 1);
///
/// commit_mutation(&mut state, undo).unwrap();
/// assert!(state.is_empty());
/// ```
pub fn commit_mutation(
    state: &mut EditorState,
    mutation: Mutation,
) -> MutationResult<Option<Mutation>> {
    standard_registry().commit(state, mutation)
}
