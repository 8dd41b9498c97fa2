//! Tests for merging busy ranges.

use meeting_query::{merge_ranges, TimeRange};

fn range(start: u32, end: u32) -> TimeRange {
    TimeRange::from_start_end(start, end, false).unwrap()
}

#[test]
fn empty_input_merges_to_nothing() {
    assert!(merge_ranges(Vec::new()).is_empty());
}

#[test]
fn single_range_is_unchanged() {
    assert_eq!(merge_ranges(vec![range(100, 200)]), vec![range(100, 200)]);
}

#[test]
fn identical_ranges_merge_to_one() {
    assert_eq!(
        merge_ranges(vec![range(100, 200), range(100, 200)]),
        vec![range(100, 200)]
    );
}

#[test]
fn overlapping_ranges_merge() {
    assert_eq!(
        merge_ranges(vec![range(100, 200), range(150, 250)]),
        vec![range(100, 250)]
    );
}

#[test]
fn nested_range_is_absorbed() {
    assert_eq!(
        merge_ranges(vec![range(150, 160), range(100, 300)]),
        vec![range(100, 300)]
    );
}

#[test]
fn adjacent_ranges_stay_separate() {
    assert_eq!(
        merge_ranges(vec![range(100, 200), range(200, 300)]),
        vec![range(100, 200), range(200, 300)]
    );
}

#[test]
fn unsorted_input_comes_out_sorted() {
    assert_eq!(
        merge_ranges(vec![range(900, 950), range(100, 200), range(500, 600)]),
        vec![range(100, 200), range(500, 600), range(900, 950)]
    );
}

#[test]
fn merged_range_is_compared_again_with_later_ranges() {
    // [0,10) + [5,15) = [0,15), which then overlaps [12,20).
    assert_eq!(
        merge_ranges(vec![range(12, 20), range(5, 15), range(0, 10)]),
        vec![range(0, 20)]
    );
}

#[test]
fn chain_of_overlaps_collapses() {
    let ranges = (0..10).map(|i| range(i * 10, i * 10 + 15)).collect::<Vec<_>>();
    assert_eq!(merge_ranges(ranges), vec![range(0, 105)]);
}

#[test]
fn separate_groups_merge_independently() {
    // The first group's result must precede the second group even though it
    // is produced by a merge.
    assert_eq!(
        merge_ranges(vec![range(0, 10), range(5, 15), range(20, 30), range(25, 35)]),
        vec![range(0, 15), range(20, 35)]
    );
}

#[test]
fn merging_is_idempotent() {
    let once = merge_ranges(vec![
        range(0, 10),
        range(5, 15),
        range(40, 50),
        range(50, 60),
        range(45, 46),
    ]);
    let twice = merge_ranges(once.clone());
    assert_eq!(once, twice);
}

#[test]
fn merged_ranges_end_exclusively_even_from_inclusive_input() {
    let inclusive = TimeRange::from_start_end(1000, TimeRange::END_OF_DAY, true).unwrap();
    let merged = merge_ranges(vec![inclusive, range(900, 1100)]);
    assert_eq!(merged, vec![range(900, 1440)]);
}
