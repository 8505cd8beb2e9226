pub mod interval;
pub mod lane;
pub mod row_model;
pub mod time_grid;
pub mod types;
pub mod utilization;

pub use interval::Interval;
pub use lane::{LaneAssignment, LaneMetrics, PackedRow, pack_row};
pub use row_model::{
    LayoutCache, RowKey, RowSpec, UNSPECIFIED_CATEGORY, UNSPECIFIED_ORIGIN, build_rows,
};
pub use time_grid::{GridScale, TimeGrid};
pub use types::{
    BoardSnapshot, CapacityClass, Group, GroupId, ItemId, ItemKind, ItemStatus, OperationalState,
    Resource, ResourceId, ScheduleItem,
};
pub use utilization::day_utilization;
