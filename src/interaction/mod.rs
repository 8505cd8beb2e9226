pub mod drag;
pub mod pan;
pub mod selection;

pub use drag::{DragPhase, DragSession, DropOutcome, MoveProposal, drag_eligible};
pub use pan::PanSession;
pub use selection::{RangeSelection, SelectedRange};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::{ItemId, ResourceId};
use crate::error::{BoardError, BoardResult};

/// Pixel-space tuning for gesture recognition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GestureTuning {
    /// Minimum pointer travel before a release creates a range.
    pub creation_threshold_px: f64,
    /// Scroll speed multiplier while panning.
    pub pan_gain: f64,
}

impl Default for GestureTuning {
    fn default() -> Self {
        Self {
            creation_threshold_px: 20.0,
            pan_gain: 1.5,
        }
    }
}

impl GestureTuning {
    pub(crate) fn validate(self) -> BoardResult<Self> {
        if !self.creation_threshold_px.is_finite() || self.creation_threshold_px < 0.0 {
            return Err(BoardError::InvalidData(
                "creation threshold must be finite and >= 0".to_owned(),
            ));
        }
        if !self.pan_gain.is_finite() || self.pan_gain <= 0.0 {
            return Err(BoardError::InvalidData(
                "pan gain must be finite and > 0".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Engine-emitted description of a desired state change.
///
/// The host applies intents to its own store; the engine never mutates
/// the item collection, which bounds mutation to at most one per
/// completed gesture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BoardIntent {
    /// Propose a new item covering `[start, end)` on a resource.
    RangeSelected {
        resource: ResourceId,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
    /// Cross-resource move awaiting confirmation.
    MoveRequested(MoveProposal),
    /// Apply a reassignment. Gestures emit `None` time bounds; a host
    /// applying an in-place time edit fills them in itself.
    MoveCommitted {
        item: ItemId,
        target: ResourceId,
        new_start: Option<DateTime<Utc>>,
        new_end: Option<DateTime<Utc>>,
    },
}
