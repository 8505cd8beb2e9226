mod engine_config;
mod interaction_controller;
mod layout_pass;

pub use engine_config::BoardEngineConfig;
pub use layout_pass::{BoardLayout, ColumnStat, ItemGeometry, RowSlot};

use chrono::{DateTime, Utc};

use crate::core::{BoardSnapshot, GridScale, LayoutCache, TimeGrid};
use crate::error::BoardResult;
use crate::interaction::{DragSession, PanSession, RangeSelection};

/// Host-facing engine facade.
///
/// Owns the current input snapshot, the view window configuration, the
/// per-row layout cache and the three gesture state machines. Data
/// mutation stays with the host: the engine reads the snapshot and emits
/// intents. Aside from in-flight gesture state it is stateless between
/// gestures.
#[derive(Debug)]
pub struct BoardEngine {
    config: BoardEngineConfig,
    snapshot: BoardSnapshot,
    cache: LayoutCache,
    selection: RangeSelection,
    pan: PanSession,
    drag: DragSession,
    pooled_rows_forced: bool,
}

impl BoardEngine {
    pub fn new(config: BoardEngineConfig) -> BoardResult<Self> {
        let config = config.validate()?;
        Ok(Self {
            config,
            snapshot: BoardSnapshot::default(),
            cache: LayoutCache::new(),
            selection: RangeSelection::default(),
            pan: PanSession::default(),
            drag: DragSession::default(),
            pooled_rows_forced: false,
        })
    }

    #[must_use]
    pub fn config(&self) -> BoardEngineConfig {
        self.config
    }

    #[must_use]
    pub fn snapshot(&self) -> &BoardSnapshot {
        &self.snapshot
    }

    /// Replaces the input snapshot. The layout cache keeps rows whose
    /// content is unchanged.
    pub fn set_snapshot(&mut self, snapshot: BoardSnapshot) {
        self.snapshot = snapshot;
    }

    /// Moves the view window without touching gesture state.
    pub fn set_view_window(
        &mut self,
        scale: GridScale,
        origin: DateTime<Utc>,
        columns: u32,
    ) -> BoardResult<()> {
        let mut next = self.config;
        next.scale = scale;
        next.origin = origin;
        next.columns = columns;
        self.config = next.validate()?;
        Ok(())
    }

    /// Host override pinning pooled buffer rows visible independent of
    /// drag state.
    pub fn set_pooled_rows_forced(&mut self, forced: bool) {
        self.pooled_rows_forced = forced;
    }

    /// True when pooled buffer rows render this pass: host override or an
    /// in-flight drag.
    #[must_use]
    pub fn pooled_rows_visible(&self) -> bool {
        self.pooled_rows_forced || self.drag.forces_pooled_visible()
    }

    /// The active time grid for the configured view window.
    pub fn grid(&self) -> BoardResult<TimeGrid> {
        self.config.grid()
    }
}
