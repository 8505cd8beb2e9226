use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::Interval;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GroupId(String);

impl GroupId {
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceId(String);

impl ResourceId {
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(String);

impl ItemId {
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Structural capacity of a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CapacityClass {
    /// One physical unit; at most one item is expected at a time.
    /// Overlapping items stack at lane 0 as a data-quality signal.
    Exclusive,
    /// Unbounded buffer or queue; concurrent items fan into lanes.
    Pooled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OperationalState {
    Available,
    Maintenance,
    /// Held in reserve; excluded from utilization statistics.
    Backup,
}

/// Closed set of schedule item categories.
///
/// Consumption sites match exhaustively, so adding a category is a
/// compile-checked change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    /// Booking assigned to a resource.
    Booking,
    /// Booking without a resource; rendered in a pending queue row.
    PendingBooking,
    Maintenance,
    /// Temporary sales hold.
    TempHold,
    /// Internal-use block.
    InternalBlock,
    /// Operational lock.
    OpsLock,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemStatus {
    Confirmed,
    PickedUp,
    Returned,
    Completed,
    Active,
    InProgress,
}

impl ItemStatus {
    /// Terminal items are history; they can no longer be dragged.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Returned | Self::Completed)
    }
}

/// One time-stamped entry on the board.
///
/// Items are created and owned by the host store; the engine reads and
/// positions them and hands identifiers back in intents. `metadata` is
/// opaque presentation payload the engine never interprets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleItem {
    pub id: ItemId,
    pub kind: ItemKind,
    pub group: GroupId,
    /// `None` means unassigned: the item resides in a pending queue.
    pub resource: Option<ResourceId>,
    pub interval: Interval,
    pub status: ItemStatus,
    /// Pinned to its resource; the host rejects cross-resource moves.
    pub locked: bool,
    /// Requested model/category; part of the pending-queue key.
    pub category_label: Option<String>,
    /// Pickup location; part of the pending-queue key.
    pub origin_label: Option<String>,
    /// Dropoff location.
    pub destination_label: Option<String>,
    #[serde(default)]
    pub metadata: IndexMap<String, String>,
}

impl ScheduleItem {
    #[must_use]
    pub fn new(id: impl Into<String>, kind: ItemKind, group: GroupId, interval: Interval) -> Self {
        Self {
            id: ItemId::new(id),
            kind,
            group,
            resource: None,
            interval,
            status: ItemStatus::Confirmed,
            locked: false,
            category_label: None,
            origin_label: None,
            destination_label: None,
            metadata: IndexMap::new(),
        }
    }

    #[must_use]
    pub fn with_resource(mut self, resource: ResourceId) -> Self {
        self.resource = Some(resource);
        self
    }

    #[must_use]
    pub fn with_status(mut self, status: ItemStatus) -> Self {
        self.status = status;
        self
    }

    #[must_use]
    pub fn with_locked(mut self, locked: bool) -> Self {
        self.locked = locked;
        self
    }

    #[must_use]
    pub fn with_category_label(mut self, label: impl Into<String>) -> Self {
        self.category_label = Some(label.into());
        self
    }

    /// Sets pickup and dropoff labels.
    #[must_use]
    pub fn with_route(mut self, origin: impl Into<String>, destination: impl Into<String>) -> Self {
        self.origin_label = Some(origin.into());
        self.destination_label = Some(destination.into());
        self
    }

    #[must_use]
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn is_assigned(&self) -> bool {
        self.resource.is_some()
    }

    /// One-way trips have distinct origin and destination labels.
    #[must_use]
    pub fn is_one_way(&self) -> bool {
        match (&self.origin_label, &self.destination_label) {
            (Some(origin), Some(destination)) => origin != destination,
            _ => false,
        }
    }
}

/// A schedulable unit: one board row when Exclusive, a buffer row when
/// Pooled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub id: ResourceId,
    pub group: GroupId,
    pub label: String,
    pub capacity: CapacityClass,
    pub state: OperationalState,
}

impl Resource {
    #[must_use]
    pub fn exclusive(id: impl Into<String>, group: GroupId) -> Self {
        Self {
            id: ResourceId::new(id),
            group,
            label: String::new(),
            capacity: CapacityClass::Exclusive,
            state: OperationalState::Available,
        }
    }

    #[must_use]
    pub fn pooled(id: impl Into<String>, group: GroupId) -> Self {
        Self {
            id: ResourceId::new(id),
            group,
            label: String::new(),
            capacity: CapacityClass::Pooled,
            state: OperationalState::Available,
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    #[must_use]
    pub fn with_state(mut self, state: OperationalState) -> Self {
        self.state = state;
        self
    }
}

/// Ordered section of resources; purely a grouping concept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub id: GroupId,
    pub label: String,
}

impl Group {
    #[must_use]
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: GroupId::new(id),
            label: label.into(),
        }
    }
}

/// The value the host supplies each layout pass.
///
/// Group and resource order is display order. The engine never mutates a
/// snapshot; changes happen by the host applying emitted intents and
/// supplying a new snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub groups: Vec<Group>,
    pub resources: Vec<Resource>,
    pub items: Vec<ScheduleItem>,
}

impl BoardSnapshot {
    #[must_use]
    pub fn new(groups: Vec<Group>, resources: Vec<Resource>, items: Vec<ScheduleItem>) -> Self {
        Self {
            groups,
            resources,
            items,
        }
    }
}
