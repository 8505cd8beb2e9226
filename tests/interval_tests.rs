use chrono::{TimeZone, Utc};
use planboard_rs::core::Interval;

fn interval(start_hour: u32, end_hour: u32) -> Interval {
    Interval::new(
        Utc.with_ymd_and_hms(2024, 3, 1, start_hour, 0, 0).unwrap(),
        Utc.with_ymd_and_hms(2024, 3, 1, end_hour, 0, 0).unwrap(),
    )
}

#[test]
fn overlap_is_symmetric() {
    let a = interval(8, 12);
    let b = interval(10, 14);

    assert!(a.overlaps(b));
    assert!(b.overlaps(a));
}

#[test]
fn non_degenerate_interval_overlaps_itself() {
    let a = interval(8, 12);
    assert!(a.overlaps(a));
}

#[test]
fn touching_endpoints_do_not_overlap() {
    let a = interval(8, 12);
    let b = interval(12, 16);

    assert!(!a.overlaps(b));
    assert!(!b.overlaps(a));
}

#[test]
fn disjoint_intervals_do_not_overlap() {
    let a = interval(8, 10);
    let b = interval(11, 13);

    assert!(!a.overlaps(b));
}

#[test]
fn containment_counts_as_overlap() {
    let outer = interval(8, 18);
    let inner = interval(10, 12);

    assert!(outer.overlaps(inner));
    assert!(inner.overlaps(outer));
}

#[test]
fn contains_is_half_open() {
    let a = interval(8, 12);

    assert!(a.contains(Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap()));
    assert!(a.contains(Utc.with_ymd_and_hms(2024, 3, 1, 11, 59, 0).unwrap()));
    assert!(!a.contains(Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()));
}
