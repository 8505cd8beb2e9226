use std::collections::HashMap;
use std::collections::HashSet;
use std::hash::{DefaultHasher, Hash, Hasher};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{
    CapacityClass, Group, GroupId, Interval, LaneMetrics, PackedRow, Resource, ResourceId,
    ScheduleItem, pack_row,
};

/// Queue-key fallbacks for items missing a category or origin label.
pub const UNSPECIFIED_CATEGORY: &str = "uncategorized";
pub const UNSPECIFIED_ORIGIN: &str = "unspecified";

/// Identity of a layout row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RowKey {
    /// Row bound to one resource.
    Resource(ResourceId),
    /// Synthesized pending-demand queue within a group.
    Queue {
        group: GroupId,
        category: String,
        origin: String,
    },
}

/// One row to lay out: a capacity class plus the indices of its items in
/// the snapshot item slice. Recomputed every pass, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct RowSpec {
    pub key: RowKey,
    pub group: GroupId,
    pub capacity: CapacityClass,
    pub items: Vec<usize>,
}

/// Produces the ordered row list for one snapshot.
///
/// Group order and resource order within a group are preserved. Queue
/// rows for a group's unassigned demand precede its resource rows, one
/// per distinct (category, origin) key in first-seen item order. Pooled
/// resource rows appear only when they hold items or when
/// `pooled_force_visible` is set; the flag is an input, visibility
/// policy belongs to the caller. Items whose group or resource reference
/// does not resolve are excluded.
#[must_use]
pub fn build_rows(
    groups: &[Group],
    resources: &[Resource],
    items: &[ScheduleItem],
    pooled_force_visible: bool,
) -> Vec<RowSpec> {
    let known_resources: HashSet<&ResourceId> =
        resources.iter().map(|resource| &resource.id).collect();
    let known_groups: HashSet<&GroupId> = groups.iter().map(|group| &group.id).collect();

    let mut by_resource: HashMap<&ResourceId, Vec<usize>> = HashMap::new();
    let mut queues: HashMap<&GroupId, IndexMap<(String, String), Vec<usize>>> = HashMap::new();

    for (index, item) in items.iter().enumerate() {
        match &item.resource {
            Some(resource) if known_resources.contains(resource) => {
                by_resource.entry(resource).or_default().push(index);
            }
            Some(_) => {} // dangling resource reference; item excluded
            None => {
                if known_groups.contains(&item.group) {
                    let key = (
                        item.category_label
                            .clone()
                            .unwrap_or_else(|| UNSPECIFIED_CATEGORY.to_owned()),
                        item.origin_label
                            .clone()
                            .unwrap_or_else(|| UNSPECIFIED_ORIGIN.to_owned()),
                    );
                    queues
                        .entry(&item.group)
                        .or_default()
                        .entry(key)
                        .or_default()
                        .push(index);
                }
            }
        }
    }

    let mut rows = Vec::new();
    for group in groups {
        if let Some(buckets) = queues.remove(&group.id) {
            for ((category, origin), bucket) in buckets {
                rows.push(RowSpec {
                    key: RowKey::Queue {
                        group: group.id.clone(),
                        category,
                        origin,
                    },
                    group: group.id.clone(),
                    capacity: CapacityClass::Pooled,
                    items: bucket,
                });
            }
        }

        for resource in resources.iter().filter(|resource| resource.group == group.id) {
            let assigned = by_resource.remove(&resource.id).unwrap_or_default();
            let visible = match resource.capacity {
                CapacityClass::Exclusive => true,
                CapacityClass::Pooled => !assigned.is_empty() || pooled_force_visible,
            };
            if visible {
                rows.push(RowSpec {
                    key: RowKey::Resource(resource.id.clone()),
                    group: group.id.clone(),
                    capacity: resource.capacity,
                    items: assigned,
                });
            }
        }
    }
    rows
}

/// Memoizes packed rows on row content.
///
/// The fingerprint covers capacity, metrics and each item's identity and
/// interval in row order, so a change elsewhere in the snapshot reuses
/// the cached placement. Lane assignments are row-relative, which keeps
/// cached entries valid when item positions in the snapshot shift.
#[derive(Debug, Default)]
pub struct LayoutCache {
    entries: HashMap<RowKey, CacheEntry>,
}

#[derive(Debug)]
struct CacheEntry {
    fingerprint: u64,
    packed: PackedRow,
}

impl LayoutCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Packs a row, reusing the cached result when the row's content is
    /// unchanged.
    pub fn pack(
        &mut self,
        row: &RowSpec,
        items: &[ScheduleItem],
        metrics: LaneMetrics,
    ) -> PackedRow {
        let fingerprint = fingerprint_row(row, items, metrics);
        if let Some(entry) = self.entries.get(&row.key) {
            if entry.fingerprint == fingerprint {
                return entry.packed.clone();
            }
        }

        let spans: Vec<Interval> = row.items.iter().map(|&index| items[index].interval).collect();
        let packed = pack_row(&spans, row.capacity, metrics);
        self.entries.insert(
            row.key.clone(),
            CacheEntry {
                fingerprint,
                packed: packed.clone(),
            },
        );
        packed
    }

    /// Drops cached entries for rows absent from the current model.
    pub fn retain_rows(&mut self, live: &[RowSpec]) {
        let keys: HashSet<&RowKey> = live.iter().map(|row| &row.key).collect();
        self.entries.retain(|key, _| keys.contains(key));
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn fingerprint_row(row: &RowSpec, items: &[ScheduleItem], metrics: LaneMetrics) -> u64 {
    let mut hasher = DefaultHasher::new();
    row.capacity.hash(&mut hasher);
    for field in [
        metrics.row_height_std,
        metrics.item_height,
        metrics.lane_gap,
        metrics.vertical_padding,
        metrics.item_top_inset,
    ] {
        field.to_bits().hash(&mut hasher);
    }
    for &index in &row.items {
        let item = &items[index];
        item.id.hash(&mut hasher);
        item.interval.hash(&mut hasher);
    }
    hasher.finish()
}
