use approx::assert_abs_diff_eq;
use chrono::{Duration, TimeZone, Utc};
use planboard_rs::core::{
    GroupId, Interval, ItemKind, OperationalState, Resource, ResourceId, ScheduleItem,
    day_utilization,
};

fn day_window(day: u32) -> Interval {
    let start = Utc.with_ymd_and_hms(2024, 3, day, 0, 0, 0).unwrap();
    Interval::new(start, start + Duration::days(1))
}

fn booking(id: &str, resource: &str, start_day: u32, end_day: u32) -> ScheduleItem {
    let interval = Interval::new(
        Utc.with_ymd_and_hms(2024, 3, start_day, 10, 0, 0).unwrap(),
        Utc.with_ymd_and_hms(2024, 3, end_day, 10, 0, 0).unwrap(),
    );
    ScheduleItem::new(id, ItemKind::Booking, GroupId::new("g"), interval)
        .with_resource(ResourceId::new(resource))
}

#[test]
fn zero_eligible_resources_yield_zero_not_nan() {
    let percent = day_utilization(&[], &[], day_window(1));
    assert_abs_diff_eq!(percent, 0.0);
}

#[test]
fn backup_resources_are_not_eligible() {
    let group = GroupId::new("g");
    let resources = vec![
        Resource::exclusive("v1", group.clone()),
        Resource::exclusive("v2", group.clone()).with_state(OperationalState::Backup),
    ];
    let items = vec![booking("b1", "v1", 1, 3)];

    // One of one eligible resource occupied; the backup does not dilute.
    let percent = day_utilization(&resources, &items, day_window(2));
    assert_abs_diff_eq!(percent, 100.0);
}

#[test]
fn pooled_resources_are_not_eligible() {
    let group = GroupId::new("g");
    let resources = vec![
        Resource::exclusive("v1", group.clone()),
        Resource::pooled("buffer", group.clone()),
    ];
    let items = vec![booking("b1", "v1", 1, 3)];

    let percent = day_utilization(&resources, &items, day_window(2));
    assert_abs_diff_eq!(percent, 100.0);
}

#[test]
fn only_bookings_occupy() {
    let group = GroupId::new("g");
    let resources = vec![Resource::exclusive("v1", group.clone())];
    let maintenance = ScheduleItem::new(
        "m1",
        ItemKind::Maintenance,
        group,
        Interval::new(
            Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2024, 3, 4, 18, 0, 0).unwrap(),
        ),
    )
    .with_resource(ResourceId::new("v1"));

    let percent = day_utilization(&resources, &[maintenance], day_window(2));
    assert_abs_diff_eq!(percent, 0.0);
}

#[test]
fn day_window_is_half_open() {
    let group = GroupId::new("g");
    let resources = vec![Resource::exclusive("v1", group.clone())];
    // Ends exactly at midnight of March 3rd; does not occupy the 3rd.
    let item = ScheduleItem::new(
        "b1",
        ItemKind::Booking,
        group,
        Interval::new(
            Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2024, 3, 3, 0, 0, 0).unwrap(),
        ),
    )
    .with_resource(ResourceId::new("v1"));

    assert_abs_diff_eq!(day_utilization(&resources, &[item.clone()], day_window(2)), 100.0);
    assert_abs_diff_eq!(day_utilization(&resources, &[item], day_window(3)), 0.0);
}

#[test]
fn result_is_rounded_to_two_decimals() {
    let group = GroupId::new("g");
    let resources = vec![
        Resource::exclusive("v1", group.clone()),
        Resource::exclusive("v2", group.clone()),
        Resource::exclusive("v3", group.clone()),
    ];
    let items = vec![booking("b1", "v1", 1, 3)];

    let percent = day_utilization(&resources, &items, day_window(2));
    assert_abs_diff_eq!(percent, 33.33);
}

#[test]
fn unassigned_bookings_do_not_occupy() {
    let group = GroupId::new("g");
    let resources = vec![Resource::exclusive("v1", group.clone())];
    let pending = ScheduleItem::new(
        "p1",
        ItemKind::PendingBooking,
        group,
        Interval::new(
            Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2024, 3, 5, 10, 0, 0).unwrap(),
        ),
    );

    let percent = day_utilization(&resources, &[pending], day_window(2));
    assert_abs_diff_eq!(percent, 0.0);
}
