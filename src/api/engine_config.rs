use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::{GridScale, LaneMetrics, TimeGrid};
use crate::error::{BoardError, BoardResult};
use crate::interaction::GestureTuning;

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load board
/// setup without inventing their own ad-hoc format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoardEngineConfig {
    pub scale: GridScale,
    /// Axis origin; normalized to the start of its day by the grid.
    pub origin: DateTime<Utc>,
    pub columns: u32,
    #[serde(default = "default_cell_width_day")]
    pub cell_width_day_px: f64,
    #[serde(default = "default_cell_width_hour")]
    pub cell_width_hour_px: f64,
    /// Floor for rendered bar width, keeping degenerate intervals visible.
    #[serde(default = "default_min_item_width")]
    pub min_item_width_px: f64,
    #[serde(default)]
    pub lane_metrics: LaneMetrics,
    #[serde(default)]
    pub gesture_tuning: GestureTuning,
}

impl BoardEngineConfig {
    /// Creates a config showing `columns` cells from `origin` at `scale`.
    #[must_use]
    pub fn new(scale: GridScale, origin: DateTime<Utc>, columns: u32) -> Self {
        Self {
            scale,
            origin,
            columns,
            cell_width_day_px: default_cell_width_day(),
            cell_width_hour_px: default_cell_width_hour(),
            min_item_width_px: default_min_item_width(),
            lane_metrics: LaneMetrics::default(),
            gesture_tuning: GestureTuning::default(),
        }
    }

    /// Sets per-scale cell widths.
    #[must_use]
    pub fn with_cell_widths(mut self, day_px: f64, hour_px: f64) -> Self {
        self.cell_width_day_px = day_px;
        self.cell_width_hour_px = hour_px;
        self
    }

    /// Sets vertical row/lane sizing.
    #[must_use]
    pub fn with_lane_metrics(mut self, metrics: LaneMetrics) -> Self {
        self.lane_metrics = metrics;
        self
    }

    /// Sets gesture recognition tuning.
    #[must_use]
    pub fn with_gesture_tuning(mut self, tuning: GestureTuning) -> Self {
        self.gesture_tuning = tuning;
        self
    }

    /// Sets the minimum rendered bar width.
    #[must_use]
    pub fn with_min_item_width(mut self, width_px: f64) -> Self {
        self.min_item_width_px = width_px;
        self
    }

    /// Active cell width for the configured scale.
    #[must_use]
    pub fn cell_width_px(self) -> f64 {
        match self.scale {
            GridScale::Day => self.cell_width_day_px,
            GridScale::Hour => self.cell_width_hour_px,
        }
    }

    pub(super) fn validate(self) -> BoardResult<Self> {
        if self.columns == 0 {
            return Err(BoardError::InvalidData(
                "board needs at least one column".to_owned(),
            ));
        }
        for width in [self.cell_width_day_px, self.cell_width_hour_px] {
            if !width.is_finite() || width <= 0.0 {
                return Err(BoardError::InvalidData(
                    "cell widths must be finite and > 0".to_owned(),
                ));
            }
        }
        if !self.min_item_width_px.is_finite() || self.min_item_width_px < 0.0 {
            return Err(BoardError::InvalidData(
                "minimum item width must be finite and >= 0".to_owned(),
            ));
        }
        self.lane_metrics.validate()?;
        self.gesture_tuning.validate()?;
        Ok(self)
    }

    pub(super) fn grid(self) -> BoardResult<TimeGrid> {
        TimeGrid::new(self.scale, self.origin, self.cell_width_px(), self.columns)
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(self) -> BoardResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| BoardError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> BoardResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| BoardError::InvalidData(format!("failed to parse config: {e}")))
    }
}

fn default_cell_width_day() -> f64 {
    140.0
}

fn default_cell_width_hour() -> f64 {
    60.0
}

fn default_min_item_width() -> f64 {
    4.0
}
