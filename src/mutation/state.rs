// EditorState - the host-owned collections that mutations modify
//
// The host creates one EditorState per editing session and hands it to the
// dispatcher by mutable reference. Reducers splice the collections in place;
// nothing in this crate keeps a reference to the state between calls.

use crate::mutation::entity::{EntityId, HasId};
use crate::timing::point::TimingPoint;
use serde::{Deserialize, Serialize};

/// Options that change how reducers treat questionable input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorOptions {
    /// Reject inserts whose id is already present in the collection
    ///
    /// When disabled, unique ids become a caller precondition and duplicate
    /// inserts are accepted as-is.
    pub enforce_unique_ids: bool,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            enforce_unique_ids: true,
        }
    }
}

/// State of the editor that can be modified by mutations
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditorState {
    /// Timing points, sorted by ascending `time`
    ///
    /// Public so hosts can read and render it directly. Hosts that push into
    /// it themselves are responsible for keeping it sorted.
    pub timing_points: Vec<TimingPoint>,

    pub options: EditorOptions,
}

impl EditorState {
    /// Create an empty state with default options
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: EditorOptions) -> Self {
        Self {
            timing_points: Vec::new(),
            options,
        }
    }

    pub fn timing_points(&self) -> &[TimingPoint] {
        &self.timing_points
    }

    /// Get a timing point by id
    pub fn timing_point(&self, id: EntityId) -> Option<&TimingPoint> {
        self.timing_points.iter().find(|point| point.id() == id)
    }

    /// Index of the timing point with the given id
    ///
    /// `Some(0)` is a valid answer: only `None` means "not present".
    pub fn position_of(&self, id: EntityId) -> Option<usize> {
        self.timing_points.iter().position(|point| point.id() == id)
    }

    pub fn len(&self) -> usize {
        self.timing_points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timing_points.is_empty()
    }

    /// Check the ordering invariant of the timing point collection
    pub fn is_sorted_by_time(&self) -> bool {
        self.timing_points
            .windows(2)
            .all(|pair| pair[0].time <= pair[1].time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options_enforce_unique_ids() {
        assert!(EditorOptions::default().enforce_unique_ids);
        assert!(EditorState::new().options.enforce_unique_ids);
    }

    #[test]
    fn test_options_from_partial_json() {
        let options: EditorOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, EditorOptions::default());

        let options: EditorOptions =
            serde_json::from_str(r#"{"enforce_unique_ids":false}"#).unwrap();
        assert!(!options.enforce_unique_ids);
    }

    #[test]
    fn test_lookup_first_slot() {
        let mut state = EditorState::new();
        let first = TimingPoint::new(0.0);
        let second = TimingPoint::new(1.0);
        state.timing_points.push(first.clone());
        state.timing_points.push(second.clone());

        assert_eq!(state.position_of(first.uuid), Some(0));
        assert_eq!(state.position_of(second.uuid), Some(1));
        assert_eq!(state.position_of(EntityId::new()), None);
        assert_eq!(state.timing_point(first.uuid), Some(&first));
    }

    #[test]
    fn test_is_sorted_by_time() {
        let mut state = EditorState::new();
        assert!(state.is_sorted_by_time());

        state.timing_points.push(TimingPoint::new(1.0));
        state.timing_points.push(TimingPoint::new(1.0));
        state.timing_points.push(TimingPoint::new(2.0));
        assert!(state.is_sorted_by_time());

        state.timing_points.push(TimingPoint::new(0.5));
        assert!(!state.is_sorted_by_time());
    }
}
