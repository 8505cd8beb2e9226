use crate::core::{CapacityClass, Interval, ItemKind, OperationalState, Resource, ScheduleItem};

/// Percentage of eligible resources occupied during `window`, rounded to
/// two decimals.
///
/// Eligible resources are Exclusive and not in backup state. A resource
/// counts as occupied when at least one assigned booking overlaps the
/// half-open window. Zero eligible resources yield `0.0`.
#[must_use]
pub fn day_utilization(resources: &[Resource], items: &[ScheduleItem], window: Interval) -> f64 {
    let eligible: Vec<&Resource> = resources
        .iter()
        .filter(|resource| {
            resource.capacity == CapacityClass::Exclusive
                && resource.state != OperationalState::Backup
        })
        .collect();
    if eligible.is_empty() {
        return 0.0;
    }

    let occupied = eligible
        .iter()
        .filter(|resource| {
            items.iter().any(|item| {
                item.kind == ItemKind::Booking
                    && item.resource.as_ref() == Some(&resource.id)
                    && item.interval.overlaps(window)
            })
        })
        .count();

    let percent = occupied as f64 / eligible.len() as f64 * 100.0;
    (percent * 100.0).round() / 100.0
}
