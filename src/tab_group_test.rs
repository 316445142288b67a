use super::*;
use crate::tab::TabRange;
use crate::widget::HeadlessTabStrip;
use proptest::prelude::*;

fn feed_tabs() -> Vec<TabRange> {
    vec![
        TabRange::new("Gallery", 0, 2),
        TabRange::new("D", 3, 5),
        TabRange::new("G", 6, 7),
        TabRange::new("OTHER", 100, 100),
    ]
}

fn strategy_from(ranges: Vec<TabRange>) -> impl FnMut(usize) -> TabRange {
    move |position| ranges[position].clone()
}

#[test]
fn populate_creates_exactly_tab_count_tabs_in_order() {
    let mut strip = HeadlessTabStrip::new();
    let mut strategy = strategy_from(feed_tabs());

    let handles = populate(&mut strip, 4, &mut strategy);

    assert_eq!(handles.len(), 4);
    assert_eq!(strip.tab_count(), 4);
    let titles: Vec<&str> = strip.tabs().iter().map(|t| t.title()).collect();
    assert_eq!(titles, vec!["Gallery", "D", "G", "OTHER"]);
    assert_eq!(strip.tabs()[2].position(), 2);
}

#[test]
fn populate_is_idempotent_with_unchanged_input() {
    let mut strip = HeadlessTabStrip::new();
    let mut strategy = strategy_from(feed_tabs());

    let first = populate(&mut strip, 4, &mut strategy);
    let second = populate(&mut strip, 4, &mut strategy);

    assert_eq!(first, second);
    assert_eq!(strip.tab_count(), 4);
    assert_eq!(strip.removal_count(), 2);
}

#[test]
fn populate_invokes_strategy_once_per_tab() {
    let mut strip = HeadlessTabStrip::new();
    let mut calls = Vec::new();
    let mut strategy = |position: usize| {
        calls.push(position);
        TabRange::new("t", 0, 0)
    };

    populate(&mut strip, 3, &mut strategy);
    assert_eq!(calls, vec![0, 1, 2]);
}

#[test]
fn populate_does_not_select_any_tab() {
    let mut strip = HeadlessTabStrip::new();
    populate(&mut strip, 4, &mut strategy_from(feed_tabs()));
    assert_eq!(strip.selected_tab_position(), None);
}

#[test]
fn lookup_finds_tab_whose_range_contains_tag() {
    let mut strip = HeadlessTabStrip::new();
    populate(&mut strip, 4, &mut strategy_from(feed_tabs()));

    assert_eq!(tab_for_view_type(&strip, 0), Some(0));
    assert_eq!(tab_for_view_type(&strip, 1), Some(0));
    assert_eq!(tab_for_view_type(&strip, 4), Some(1));
    assert_eq!(tab_for_view_type(&strip, 7), Some(2));
    assert_eq!(tab_for_view_type(&strip, 100), Some(3));
}

#[test]
fn lookup_of_unknown_tag_is_none() {
    let mut strip = HeadlessTabStrip::new();
    populate(&mut strip, 4, &mut strategy_from(feed_tabs()));

    assert_eq!(tab_for_view_type(&strip, 8), None);
    assert_eq!(tab_for_view_type(&strip, 101), None);
}

#[test]
fn overlapping_ranges_resolve_to_first_tab() {
    let mut strip = HeadlessTabStrip::new();
    let ranges = vec![TabRange::new("wide", 0, 10), TabRange::new("narrow", 4, 5)];
    populate(&mut strip, 2, &mut strategy_from(ranges));

    assert_eq!(tab_for_view_type(&strip, 4), Some(0));
}

proptest! {
    /// 返されたタブは必ずそのタグを含み、それより前のタブは含まない
    #[test]
    fn prop_lookup_returns_first_containing_tab(
        bounds in prop::collection::vec((-20i32..20, 0i32..10), 1..8),
        view_type in -25i32..35,
    ) {
        let ranges: Vec<TabRange> = bounds
            .iter()
            .enumerate()
            .map(|(i, (start, width))| TabRange::new(format!("T{i}"), *start, start + width))
            .collect();
        let count = ranges.len();
        let mut strip = HeadlessTabStrip::new();
        populate(&mut strip, count, &mut strategy_from(ranges.clone()));

        match tab_for_view_type(&strip, view_type) {
            Some(position) => {
                prop_assert!(ranges[position].view_types().contains(view_type));
                for earlier in &ranges[..position] {
                    prop_assert!(!earlier.view_types().contains(view_type));
                }
            }
            None => {
                for range in &ranges {
                    prop_assert!(!range.view_types().contains(view_type));
                }
            }
        }
    }
}
