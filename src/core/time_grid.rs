use chrono::{DateTime, Duration, NaiveTime, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::core::Interval;
use crate::error::{BoardError, BoardResult};

const SECONDS_PER_DAY: f64 = 86_400.0;
const MINUTES_PER_DAY: f64 = 1_440.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GridScale {
    /// One column per calendar day.
    Day,
    /// One column per hour.
    Hour,
}

/// Horizontal axis model mapping instants to pixel offsets and back.
///
/// The origin is normalized to the start of the day containing the
/// supplied instant, for both scales. Mapping is exact to the minute:
/// the forward path keeps full fractional precision, the inverse path
/// rounds to the nearest minute. Sub-minute detail is dropped once,
/// never amplified.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeGrid {
    scale: GridScale,
    origin: DateTime<Utc>,
    cell_width_px: f64,
    columns: u32,
}

impl TimeGrid {
    pub fn new(
        scale: GridScale,
        origin: DateTime<Utc>,
        cell_width_px: f64,
        columns: u32,
    ) -> BoardResult<Self> {
        if !cell_width_px.is_finite() || cell_width_px <= 0.0 {
            return Err(BoardError::InvalidData(
                "cell width must be finite and > 0".to_owned(),
            ));
        }
        if columns == 0 {
            return Err(BoardError::InvalidData(
                "grid needs at least one column".to_owned(),
            ));
        }

        Ok(Self {
            scale,
            origin: origin.date_naive().and_time(NaiveTime::MIN).and_utc(),
            cell_width_px,
            columns,
        })
    }

    #[must_use]
    pub fn scale(self) -> GridScale {
        self.scale
    }

    /// Origin of the axis, normalized to the start of its day.
    #[must_use]
    pub fn origin(self) -> DateTime<Utc> {
        self.origin
    }

    #[must_use]
    pub fn cell_width_px(self) -> f64 {
        self.cell_width_px
    }

    #[must_use]
    pub fn columns(self) -> u32 {
        self.columns
    }

    #[must_use]
    pub fn content_width(self) -> f64 {
        f64::from(self.columns) * self.cell_width_px
    }

    /// Pixel offset of an instant relative to the axis origin.
    ///
    /// Instants before the origin map to negative offsets.
    #[must_use]
    pub fn instant_to_offset(self, instant: DateTime<Utc>) -> f64 {
        match self.scale {
            GridScale::Day => {
                let days = instant
                    .date_naive()
                    .signed_duration_since(self.origin.date_naive())
                    .num_days() as f64;
                let day_fraction =
                    f64::from(instant.time().num_seconds_from_midnight()) / SECONDS_PER_DAY;
                (days + day_fraction) * self.cell_width_px
            }
            GridScale::Hour => {
                let minutes = (instant - self.origin).num_minutes() as f64;
                minutes / 60.0 * self.cell_width_px
            }
        }
    }

    /// Instant at a pixel offset, to minute precision.
    pub fn offset_to_instant(self, offset_px: f64) -> BoardResult<DateTime<Utc>> {
        if !offset_px.is_finite() {
            return Err(BoardError::InvalidData("offset must be finite".to_owned()));
        }

        let units = offset_px / self.cell_width_px;
        let whole = units.floor();
        let remainder = units - whole;

        match self.scale {
            GridScale::Day => {
                let minutes = (remainder * MINUTES_PER_DAY).round() as i64;
                Ok(self.origin + Duration::days(whole as i64) + Duration::minutes(minutes))
            }
            GridScale::Hour => {
                let minutes = (remainder * 60.0).round() as i64;
                Ok(self.origin + Duration::hours(whole as i64) + Duration::minutes(minutes))
            }
        }
    }

    /// Start instant of column `index`.
    #[must_use]
    pub fn column_start(self, index: u32) -> DateTime<Utc> {
        match self.scale {
            GridScale::Day => self.origin + Duration::days(i64::from(index)),
            GridScale::Hour => self.origin + Duration::hours(i64::from(index)),
        }
    }

    /// Half-open time window covered by column `index`.
    #[must_use]
    pub fn column_interval(self, index: u32) -> Interval {
        let start = self.column_start(index);
        let end = match self.scale {
            GridScale::Day => start + Duration::days(1),
            GridScale::Hour => start + Duration::hours(1),
        };
        Interval::new(start, end)
    }
}
