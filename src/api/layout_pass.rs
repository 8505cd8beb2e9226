use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{
    CapacityClass, GridScale, GroupId, ItemId, RowKey, ScheduleItem, TimeGrid, build_rows,
    day_utilization,
};
use crate::error::BoardResult;

use super::{BoardEngine, BoardEngineConfig};

/// Pixel rectangle and lane placement for one item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemGeometry {
    pub item: ItemId,
    pub lane: usize,
    pub left: f64,
    pub width: f64,
    /// Offset from the row top.
    pub top: f64,
    pub height: f64,
    /// Bar starts before the visible window.
    pub cropped_left: bool,
    /// Bar ends past the visible window.
    pub cropped_right: bool,
}

/// One laid-out row in display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowSlot {
    pub key: RowKey,
    pub group: GroupId,
    pub capacity: CapacityClass,
    /// Offset from the grid body top.
    pub top: f64,
    pub height: f64,
    pub lane_count: usize,
    pub items: Vec<ItemGeometry>,
}

/// Per-column header statistic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnStat {
    pub start: DateTime<Utc>,
    /// Day-scale occupancy percentage; `None` on the hour scale.
    pub utilization_percent: Option<f64>,
}

/// Complete layout result for one snapshot and view window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardLayout {
    pub rows: Vec<RowSlot>,
    pub columns: Vec<ColumnStat>,
    pub content_width: f64,
    pub content_height: f64,
}

impl BoardEngine {
    /// Runs the full layout pipeline over the current snapshot.
    ///
    /// Pure with respect to its inputs: identical snapshot, view window
    /// and buffer-row visibility produce an identical layout, so lane
    /// placements hold still while a gesture is in flight.
    pub fn layout(&mut self) -> BoardResult<BoardLayout> {
        let grid = self.config.grid()?;
        let rows = build_rows(
            &self.snapshot.groups,
            &self.snapshot.resources,
            &self.snapshot.items,
            self.pooled_rows_visible(),
        );

        let mut slots = Vec::with_capacity(rows.len());
        let mut cursor = 0.0;
        for row in &rows {
            let packed = self
                .cache
                .pack(row, &self.snapshot.items, self.config.lane_metrics);
            let items = packed
                .assignments
                .iter()
                .map(|assignment| {
                    let item = &self.snapshot.items[row.items[assignment.item]];
                    item_geometry(item, assignment.lane, &grid, &self.config)
                })
                .collect();
            slots.push(RowSlot {
                key: row.key.clone(),
                group: row.group.clone(),
                capacity: row.capacity,
                top: cursor,
                height: packed.height,
                lane_count: packed.lane_count,
                items,
            });
            cursor += packed.height;
        }
        self.cache.retain_rows(&rows);

        let columns = (0..self.config.columns)
            .map(|index| {
                let window = grid.column_interval(index);
                let utilization = match self.config.scale {
                    GridScale::Day => Some(day_utilization(
                        &self.snapshot.resources,
                        &self.snapshot.items,
                        window,
                    )),
                    GridScale::Hour => None,
                };
                ColumnStat {
                    start: window.start,
                    utilization_percent: utilization,
                }
            })
            .collect();

        debug!(
            rows = slots.len(),
            columns = self.config.columns,
            "layout pass"
        );

        Ok(BoardLayout {
            rows: slots,
            columns,
            content_width: grid.content_width(),
            content_height: cursor,
        })
    }
}

fn item_geometry(
    item: &ScheduleItem,
    lane: usize,
    grid: &TimeGrid,
    config: &BoardEngineConfig,
) -> ItemGeometry {
    let metrics = config.lane_metrics;
    let left = grid.instant_to_offset(item.interval.start);
    let right = grid.instant_to_offset(item.interval.end);
    // Inverted intervals flow through as degenerate geometry rather than
    // an error; the width floor keeps them visible.
    let width = (right - left).max(config.min_item_width_px);

    ItemGeometry {
        item: item.id.clone(),
        lane,
        left,
        width,
        top: metrics.lane_top(lane),
        height: metrics.item_height,
        cropped_left: left < 0.0,
        cropped_right: left + width > grid.content_width(),
    }
}
