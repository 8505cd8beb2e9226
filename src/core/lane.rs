use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{CapacityClass, Interval};
use crate::error::{BoardError, BoardResult};

/// Vertical sizing controls for rows and the bars inside them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LaneMetrics {
    /// Height of an exclusive row and the floor for pooled rows.
    pub row_height_std: f64,
    pub item_height: f64,
    /// Vertical gap between stacked lanes.
    pub lane_gap: f64,
    /// Padding above the first and below the last lane of a pooled row.
    pub vertical_padding: f64,
    /// Offset of lane 0 from the row top.
    pub item_top_inset: f64,
}

impl Default for LaneMetrics {
    fn default() -> Self {
        Self {
            row_height_std: 50.0,
            item_height: 38.0,
            lane_gap: 6.0,
            vertical_padding: 12.0,
            item_top_inset: 5.0,
        }
    }
}

impl LaneMetrics {
    pub(crate) fn validate(self) -> BoardResult<Self> {
        let fields = [
            self.row_height_std,
            self.item_height,
            self.lane_gap,
            self.vertical_padding,
            self.item_top_inset,
        ];
        if fields.iter().any(|value| !value.is_finite() || *value < 0.0) {
            return Err(BoardError::InvalidData(
                "lane metrics must be finite and >= 0".to_owned(),
            ));
        }
        if self.row_height_std <= 0.0 || self.item_height <= 0.0 {
            return Err(BoardError::InvalidData(
                "row and item heights must be > 0".to_owned(),
            ));
        }
        Ok(self)
    }

    /// Vertical offset of a bar within its row.
    #[must_use]
    pub fn lane_top(self, lane: usize) -> f64 {
        self.item_top_inset + lane as f64 * (self.item_height + self.lane_gap)
    }

    fn pooled_height(self, lane_count: usize) -> f64 {
        let lanes = lane_count.max(1) as f64;
        let dynamic = 2.0 * self.vertical_padding + lanes * (self.item_height + self.lane_gap);
        dynamic.max(self.row_height_std)
    }
}

/// Lane placement for one item, by its position in the packed row's
/// input slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaneAssignment {
    pub item: usize,
    pub lane: usize,
}

/// Lane placement result for one row.
///
/// `assignments` is ordered by start time for pooled rows and by input
/// order for exclusive rows. `lane_count` is the number of lanes the
/// row's height accounts for, never below 1.
#[derive(Debug, Clone, PartialEq)]
pub struct PackedRow {
    pub height: f64,
    pub lane_count: usize,
    pub assignments: Vec<LaneAssignment>,
}

/// Packs one row of intervals into non-overlapping lanes.
///
/// Exclusive rows place everything on lane 0 at standard height; the
/// packer does not resolve conflicts there, overlapping input stacks in
/// place. Pooled rows use greedy interval coloring: items sorted by
/// start (stable on ties), each placed into the first lane whose last
/// occupant has ended, a new lane otherwise. The greedy order makes the
/// lane count equal the maximum number of simultaneously overlapping
/// items, which is the minimum possible.
#[must_use]
pub fn pack_row(spans: &[Interval], capacity: CapacityClass, metrics: LaneMetrics) -> PackedRow {
    match capacity {
        CapacityClass::Exclusive => PackedRow {
            height: metrics.row_height_std,
            lane_count: 1,
            assignments: (0..spans.len())
                .map(|item| LaneAssignment { item, lane: 0 })
                .collect(),
        },
        CapacityClass::Pooled => pack_pooled(spans, metrics),
    }
}

fn pack_pooled(spans: &[Interval], metrics: LaneMetrics) -> PackedRow {
    let mut ordered: Vec<(usize, Interval)> = spans.iter().copied().enumerate().collect();
    ordered.sort_by_key(|(_, span)| span.start);

    // Most recent placement end per lane, in lane index order.
    let mut lane_ends: SmallVec<[DateTime<Utc>; 4]> = SmallVec::new();
    let mut assignments = Vec::with_capacity(ordered.len());

    for (item, span) in ordered {
        let lane = match lane_ends.iter().position(|&end| end <= span.start) {
            Some(lane) => {
                lane_ends[lane] = span.end;
                lane
            }
            None => {
                lane_ends.push(span.end);
                lane_ends.len() - 1
            }
        };
        assignments.push(LaneAssignment { item, lane });
    }

    PackedRow {
        height: metrics.pooled_height(lane_ends.len()),
        lane_count: lane_ends.len().max(1),
        assignments,
    }
}
