use approx::assert_abs_diff_eq;
use chrono::{Duration, TimeZone, Utc};
use planboard_rs::core::{CapacityClass, Interval, LaneMetrics, pack_row};

fn day(offset: i64, hour: u32, minute: u32) -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, hour, minute, 0).unwrap() + Duration::days(offset)
}

fn span(start: (i64, u32, u32), end: (i64, u32, u32)) -> Interval {
    Interval::new(day(start.0, start.1, start.2), day(end.0, end.1, end.2))
}

#[test]
fn exclusive_rows_place_everything_on_lane_zero() {
    let metrics = LaneMetrics::default();
    let spans = vec![
        span((0, 10, 0), (2, 10, 0)),
        span((1, 9, 0), (1, 18, 0)), // overlaps the first; stacks in place
    ];

    let packed = pack_row(&spans, CapacityClass::Exclusive, metrics);

    assert_eq!(packed.lane_count, 1);
    assert!(packed.assignments.iter().all(|a| a.lane == 0));
    assert_abs_diff_eq!(packed.height, metrics.row_height_std);
}

#[test]
fn three_mutually_overlapping_items_need_three_lanes() {
    let metrics = LaneMetrics::default();
    let spans = vec![
        span((0, 10, 0), (2, 10, 0)),
        span((1, 9, 0), (1, 18, 0)),
        span((1, 12, 0), (3, 12, 0)),
    ];

    let packed = pack_row(&spans, CapacityClass::Pooled, metrics);

    assert_eq!(packed.lane_count, 3);
    let lane_of = |item: usize| {
        packed
            .assignments
            .iter()
            .find(|a| a.item == item)
            .expect("assigned")
            .lane
    };
    assert_eq!(lane_of(0), 0);
    assert_eq!(lane_of(1), 1);
    assert_eq!(lane_of(2), 2);

    let expected_height =
        2.0 * metrics.vertical_padding + 3.0 * (metrics.item_height + metrics.lane_gap);
    assert_abs_diff_eq!(packed.height, expected_height);
}

#[test]
fn lane_frees_up_once_its_last_item_ends() {
    let metrics = LaneMetrics::default();
    let spans = vec![
        span((0, 8, 0), (0, 12, 0)),
        span((0, 9, 0), (0, 11, 0)),
        // Starts exactly when the first ends; half-open, reuses lane 0.
        span((0, 12, 0), (0, 15, 0)),
    ];

    let packed = pack_row(&spans, CapacityClass::Pooled, metrics);

    assert_eq!(packed.lane_count, 2);
    let lane_of = |item: usize| packed.assignments.iter().find(|a| a.item == item).unwrap().lane;
    assert_eq!(lane_of(0), 0);
    assert_eq!(lane_of(1), 1);
    assert_eq!(lane_of(2), 0);
}

#[test]
fn no_two_items_in_one_lane_overlap() {
    let metrics = LaneMetrics::default();
    let spans: Vec<Interval> = (0..20)
        .map(|i| {
            let start = day(0, 0, 0) + Duration::hours(i * 3);
            Interval::new(start, start + Duration::hours(7))
        })
        .collect();

    let packed = pack_row(&spans, CapacityClass::Pooled, metrics);

    for a in &packed.assignments {
        for b in &packed.assignments {
            if a.item != b.item && a.lane == b.lane {
                assert!(
                    !spans[a.item].overlaps(spans[b.item]),
                    "items {} and {} overlap in lane {}",
                    a.item,
                    b.item,
                    a.lane
                );
            }
        }
    }
}

#[test]
fn lane_count_equals_maximum_simultaneous_overlap() {
    let metrics = LaneMetrics::default();
    let spans: Vec<Interval> = (0..12)
        .map(|i| {
            let start = day(0, 0, 0) + Duration::hours(i * 2);
            Interval::new(start, start + Duration::hours(5))
        })
        .collect();

    let packed = pack_row(&spans, CapacityClass::Pooled, metrics);

    // Clique number: for each item's start, count the spans covering it.
    let clique = spans
        .iter()
        .map(|probe| {
            spans
                .iter()
                .filter(|other| other.start <= probe.start && probe.start < other.end)
                .count()
        })
        .max()
        .expect("non-empty");

    assert_eq!(packed.lane_count, clique);
}

#[test]
fn single_lane_pooled_row_floors_at_standard_height() {
    let metrics = LaneMetrics {
        row_height_std: 120.0,
        ..LaneMetrics::default()
    };
    let spans = vec![span((0, 8, 0), (0, 10, 0))];

    let packed = pack_row(&spans, CapacityClass::Pooled, metrics);

    assert_eq!(packed.lane_count, 1);
    assert_abs_diff_eq!(packed.height, 120.0);
}

#[test]
fn empty_pooled_row_keeps_single_lane_geometry() {
    let metrics = LaneMetrics::default();

    let packed = pack_row(&[], CapacityClass::Pooled, metrics);

    assert_eq!(packed.lane_count, 1);
    assert!(packed.assignments.is_empty());
    assert!(packed.height >= metrics.row_height_std);
}

#[test]
fn equal_starts_are_assigned_in_input_order() {
    let metrics = LaneMetrics::default();
    let spans = vec![
        span((0, 8, 0), (0, 12, 0)),
        span((0, 8, 0), (0, 10, 0)),
        span((0, 8, 0), (0, 9, 0)),
    ];

    let packed = pack_row(&spans, CapacityClass::Pooled, metrics);

    // Stable sort keeps input order on ties, so lanes follow input order.
    let lane_of = |item: usize| packed.assignments.iter().find(|a| a.item == item).unwrap().lane;
    assert_eq!(lane_of(0), 0);
    assert_eq!(lane_of(1), 1);
    assert_eq!(lane_of(2), 2);
}
