// Timing point - a tempo/meter marker on the timeline
// The collection of timing points is kept sorted by `time`

use crate::mutation::entity::{EntityId, HasId};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A timing point (BPM and/or time signature change at a position)
///
/// `bpm` and `signature` are both optional: a point may change only the
/// tempo, only the meter, or neither (a plain marker).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimingPoint {
    /// Stable identity, never mutated by updates
    pub uuid: EntityId,

    /// Position on the timeline, the sort key of the collection
    pub time: f64,

    /// Tempo in beats per minute
    #[serde(default)]
    pub bpm: Option<f64>,

    /// Beats per bar
    #[serde(default)]
    pub signature: Option<u32>,
}

impl TimingPoint {
    /// Creates a timing point with a fresh id and no tempo or meter
    pub fn new(time: f64) -> Self {
        Self {
            uuid: EntityId::new(),
            time,
            bpm: None,
            signature: None,
        }
    }

    pub fn with_id(mut self, uuid: EntityId) -> Self {
        self.uuid = uuid;
        self
    }

    pub fn with_bpm(mut self, bpm: f64) -> Self {
        self.bpm = Some(bpm);
        self
    }

    pub fn with_signature(mut self, signature: u32) -> Self {
        self.signature = Some(signature);
        self
    }
}

impl HasId for TimingPoint {
    fn id(&self) -> EntityId {
        self.uuid
    }
}

impl fmt::Display for TimingPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{:.3}", self.time)?;
        if let Some(bpm) = self.bpm {
            write!(f, " {:.1} BPM", bpm)?;
        }
        if let Some(signature) = self.signature {
            write!(f, " {} beats/bar", signature)?;
        }
        Ok(())
    }
}

/// Partial set of field changes for a timing point
///
/// Outer `None` means "key absent, leave the field alone". For the nullable
/// fields, `Some(None)` means "clear the field". `uuid` is not part of the
/// change set: identity never changes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimingPointChanges {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<f64>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "present"
    )]
    pub bpm: Option<Option<f64>>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "present"
    )]
    pub signature: Option<Option<u32>>,
}

impl TimingPointChanges {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn time(mut self, time: f64) -> Self {
        self.time = Some(time);
        self
    }

    pub fn bpm(mut self, bpm: Option<f64>) -> Self {
        self.bpm = Some(bpm);
        self
    }

    pub fn signature(mut self, signature: Option<u32>) -> Self {
        self.signature = Some(signature);
        self
    }

    /// True if no key is present
    pub fn is_empty(&self) -> bool {
        self.time.is_none() && self.bpm.is_none() && self.signature.is_none()
    }

    /// Overwrite the fields of `point` for every key present in this set
    pub fn apply_to(&self, point: &mut TimingPoint) {
        if let Some(time) = self.time {
            point.time = time;
        }
        if let Some(bpm) = self.bpm {
            point.bpm = bpm;
        }
        if let Some(signature) = self.signature {
            point.signature = signature;
        }
    }

    /// Snapshot the current values of `point` for exactly the keys present
    /// in this set
    ///
    /// Applying the snapshot after `apply_to` restores the point.
    pub fn capture_from(&self, point: &TimingPoint) -> Self {
        Self {
            time: self.time.map(|_| point.time),
            bpm: self.bpm.map(|_| point.bpm),
            signature: self.signature.map(|_| point.signature),
        }
    }
}

/// Distinguishes an explicit `null` from an absent key
fn present<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}
