//! Tests for free-range extraction around merged busy ranges.

use meeting_query::{free_ranges, TimeRange};

fn range(start: u32, end: u32) -> TimeRange {
    TimeRange::from_start_end(start, end, false).unwrap()
}

fn until_end_of_day(start: u32) -> TimeRange {
    TimeRange::from_start_end(start, TimeRange::END_OF_DAY, true).unwrap()
}

#[test]
fn nothing_blocked_whole_day_is_free() {
    assert_eq!(free_ranges(&[], 60), vec![TimeRange::WHOLE_DAY]);
}

#[test]
fn single_busy_range_produces_two_free_ranges() {
    let slots = free_ranges(&[range(600, 660)], 30);
    assert_eq!(slots, vec![range(0, 600), until_end_of_day(660)]);
    assert_eq!(slots[1].end(), 1440);
}

#[test]
fn short_gaps_are_dropped() {
    // Gaps: [0,100) = 100, [120,200) = 80, [300,END] = 1140
    let blocked = [range(100, 120), range(200, 300)];
    assert_eq!(
        free_ranges(&blocked, 90),
        vec![range(0, 100), until_end_of_day(300)]
    );
}

#[test]
fn gap_exactly_duration_is_kept() {
    let blocked = [range(0, 100), range(130, 1440)];
    assert_eq!(free_ranges(&blocked, 30), vec![range(100, 130)]);
    assert!(free_ranges(&blocked, 31).is_empty());
}

#[test]
fn busy_from_start_of_day_leaves_no_leading_gap() {
    let slots = free_ranges(&[range(0, 60)], 0);
    assert_eq!(slots, vec![until_end_of_day(60)]);
}

#[test]
fn whole_day_blocked_leaves_nothing() {
    assert!(free_ranges(&[TimeRange::WHOLE_DAY], 0).is_empty());
}

#[test]
fn multiple_gaps_between_busy_ranges() {
    let blocked = [range(540, 600), range(720, 780), range(900, 960)];
    let slots = free_ranges(&blocked, 60);

    assert_eq!(slots.len(), 4, "should find 4 free ranges around 3 busy ranges");
    assert_eq!(slots[0].duration(), 540);
    assert_eq!(slots[1].duration(), 120);
    assert_eq!(slots[2].duration(), 120);
    assert_eq!(slots[3].duration(), 480);
}

#[test]
fn free_units_plus_busy_units_cover_the_day() {
    let blocked = [range(30, 90), range(100, 101), range(1000, 1200)];
    let free = free_ranges(&blocked, 0);
    let busy_units: u32 = blocked.iter().map(TimeRange::duration).sum();
    let free_units: u32 = free.iter().map(TimeRange::duration).sum();
    assert_eq!(busy_units + free_units, TimeRange::WHOLE_DAY.duration());
}

#[test]
fn busy_starting_after_the_day_still_leaves_trailing_range() {
    for late_start in [1440, 1441, 1450] {
        let blocked = [range(600, 660), range(late_start, late_start + 10)];
        assert_eq!(
            free_ranges(&blocked, 30),
            vec![range(0, 600), until_end_of_day(660)],
            "busy range at {} must not extend the day",
            late_start
        );
    }
}

#[test]
fn empty_busy_range_after_the_day_is_ignored() {
    let slots = free_ranges(&[range(1441, 1441)], 0);
    assert_eq!(slots, vec![TimeRange::WHOLE_DAY]);
}
