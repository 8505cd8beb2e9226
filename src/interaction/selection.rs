use chrono::{DateTime, Utc};

use crate::core::{ResourceId, TimeGrid};
use crate::error::BoardResult;

/// Range-selection gesture: `Idle -> Selecting -> Idle`.
///
/// Offsets are pixels relative to the grid origin, clamped at 0 so a
/// drag that leaves the left edge anchors at the first instant. The
/// caller guarantees the press preconditions: primary button, over row
/// body rather than an existing bar, pan modifier not held.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RangeSelection {
    active: Option<ActiveSelection>,
}

#[derive(Debug, Clone, PartialEq)]
struct ActiveSelection {
    resource: ResourceId,
    anchor_px: f64,
    current_px: f64,
}

/// Completed selection in time coordinates, `start <= end`.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedRange {
    pub resource: ResourceId,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl RangeSelection {
    pub fn begin(&mut self, resource: ResourceId, offset_px: f64) {
        let anchor = offset_px.max(0.0);
        self.active = Some(ActiveSelection {
            resource,
            anchor_px: anchor,
            current_px: anchor,
        });
    }

    pub fn update(&mut self, offset_px: f64) {
        if let Some(active) = &mut self.active {
            active.current_px = offset_px.max(0.0);
        }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Current `(left, width)` of the rubber band, for rendering.
    #[must_use]
    pub fn live_span(&self) -> Option<(f64, f64)> {
        self.active.as_ref().map(|active| {
            let left = active.anchor_px.min(active.current_px);
            (left, (active.anchor_px - active.current_px).abs())
        })
    }

    /// Ends the gesture, always returning to idle.
    ///
    /// Returns the selected range when the pointer travelled further than
    /// `threshold_px`; a shorter release is an accidental click and
    /// selects nothing.
    pub fn finish(
        &mut self,
        grid: &TimeGrid,
        threshold_px: f64,
    ) -> BoardResult<Option<SelectedRange>> {
        let Some(active) = self.active.take() else {
            return Ok(None);
        };

        let left = active.anchor_px.min(active.current_px);
        let right = active.anchor_px.max(active.current_px);
        if right - left <= threshold_px {
            return Ok(None);
        }

        let start = grid.offset_to_instant(left)?;
        let end = grid.offset_to_instant(right)?;
        Ok(Some(SelectedRange {
            resource: active.resource,
            start,
            end,
        }))
    }
}
