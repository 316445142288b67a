//! ライブラリ API を通した同期シナリオ

use proptest::prelude::*;
use tabsync::host::{Action, Host};
use tabsync::layout::LinearLayout;
use tabsync::locator::find_first_visible_item_position;
use tabsync::preset::Preset;
use tabsync::tab::TabRange;
use tabsync::tab_group::tab_for_view_type;
use tabsync::widget::{HeadlessList, HeadlessTabStrip, Item, ItemList, ListDispatch, TabStrip};
use tabsync::{Mediator, MediatorConfig, Widgets};

fn host(preset: Preset) -> Host<LinearLayout> {
    let feed = preset.feed();
    let mut host = Host::from_feed(&feed, LinearLayout::new(feed.viewport_height)).unwrap();
    host.attach().unwrap();
    host.settle();
    host
}

fn action_strategy() -> impl Strategy<Value = Action> {
    prop_oneof![
        (-500i32..500).prop_map(Action::Drag),
        (-1500i32..1500).prop_map(Action::Fling),
        (0usize..4).prop_map(Action::Tap),
    ]
}

proptest! {
    /// 手動スクロール中は、基準線上のアイテムを含むタブが選択されている
    #[test]
    fn prop_selected_tab_tracks_anchored_item(
        preset in prop_oneof![Just(Preset::NoOffset), Just(Preset::WithOffset)],
        actions in prop::collection::vec(action_strategy(), 1..12),
    ) {
        let mut host = host(preset);
        for action in actions {
            host.apply(action).unwrap();
            let snapshot = host.snapshot();
            if snapshot.tab_click_scroll {
                continue;
            }
            let Some(tag) = snapshot.anchored_view_type else { continue };
            if let Some(expected) = tab_for_view_type(host.tabs(), tag) {
                prop_assert_eq!(snapshot.selected_tab, Some(expected));
                prop_assert_eq!(snapshot.indicator, Some(expected));
            }
        }
    }

    /// どのタブをタップしてもその範囲のアイテムが基準線に来る
    #[test]
    fn prop_tap_converges_on_tab_range(drag in 0i32..1500, tab in 0usize..4) {
        let mut host = host(Preset::NoOffset);
        host.apply(Action::Drag(drag)).unwrap();
        host.apply(Action::Tap(tab)).unwrap();

        let snapshot = host.snapshot();
        let range = host.tabs().tab_at(tab).unwrap().tag();
        prop_assert!(range.contains(snapshot.anchored_view_type.unwrap()));
        prop_assert!(!host.mediator().has_pending_retry());
    }
}

#[test]
fn closure_strategy_drives_tab_titles_and_ranges() {
    let items: Vec<Item> = (0..30).map(|i| Item::new(i / 10, 100)).collect();
    let mut list = HeadlessList::with_items(LinearLayout::new(400), items);
    list.layout_pass();
    list.drain();
    let mut tabs = HeadlessTabStrip::new();

    let strategy = |position: usize| {
        let tag = position as i32;
        TabRange::new(format!("Section {}", position + 1), tag, tag)
    };
    let mut mediator = Mediator::new(MediatorConfig::new(3), strategy);

    mediator
        .attach(&mut Widgets::new(&mut list, &mut tabs))
        .unwrap();
    assert_eq!(tabs.tab_count(), 3);
    assert_eq!(tabs.tab_at(2).map(|t| t.title()), Some("Section 3"));

    list.begin_drag();
    list.drag_by(1050);
    list.release();
    for dispatch in list.drain() {
        mediator.on_list_dispatch(&mut Widgets::new(&mut list, &mut tabs), dispatch);
    }

    assert_eq!(find_first_visible_item_position(list.layout(), 0), 10);
    assert_eq!(mediator.selected_tab_position(), Some(1));
    assert_eq!(tabs.indicator_position(), Some(1));
}

#[test]
fn frame_callbacks_are_only_delivered_after_layout_pass() {
    let mut host = host(Preset::NoOffset);
    host.tabs_mut().tap(3);
    host.pump();

    assert!(host.mediator().has_pending_retry());
    assert!(host.list().pending_frame_callbacks() > 0);

    host.list_mut().layout_pass();
    let frames = host
        .list_mut()
        .drain()
        .into_iter()
        .filter(|d| matches!(d, ListDispatch::Frame(_)))
        .count();
    assert_eq!(frames, 1);
}
