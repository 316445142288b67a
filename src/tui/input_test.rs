use super::*;
use tabsync::host::Host;
use tabsync::layout::LinearLayout;
use tabsync::preset::{Preset, OTHER};

fn app() -> DemoApp<LinearLayout> {
    let feed = Preset::NoOffset.feed();
    let host = Host::from_feed(&feed, LinearLayout::new(feed.viewport_height)).unwrap();
    DemoApp::new("no-offset".to_string(), host).unwrap()
}

#[test]
fn test_number_keys_tap_existing_tabs_only() {
    let app = app();
    assert_eq!(
        app.input_for(KeyCode::Char('4')),
        Some(Input::Apply(Action::Tap(3)))
    );
    assert_eq!(app.input_for(KeyCode::Char('5')), None);
}

#[test]
fn test_arrow_keys_move_between_neighbour_tabs() {
    let mut app = app();
    assert_eq!(app.input_for(KeyCode::Left), None);
    assert_eq!(
        app.input_for(KeyCode::Right),
        Some(Input::Apply(Action::Tap(1)))
    );

    app.handle_key(KeyCode::Char('4'));
    assert_eq!(app.input_for(KeyCode::Right), None);
    assert_eq!(
        app.input_for(KeyCode::Left),
        Some(Input::Apply(Action::Tap(2)))
    );
}

#[test]
fn test_scroll_keys() {
    let app = app();
    assert_eq!(
        app.input_for(KeyCode::Down),
        Some(Input::Apply(Action::Drag(DRAG_STEP)))
    );
    assert_eq!(
        app.input_for(KeyCode::PageUp),
        Some(Input::Apply(Action::Fling(-600)))
    );
}

#[test]
fn test_append_repeats_last_view_type() {
    let mut app = app();
    assert_eq!(
        app.input_for(KeyCode::Char('r')),
        Some(Input::Apply(Action::Append(OTHER)))
    );
    app.handle_key(KeyCode::Char('r'));
    assert_eq!(app.host.list().items().len(), 29);
    assert_eq!(app.last_action, Some(Action::Append(OTHER)));
}

#[test]
fn test_d_toggles_attachment() {
    let mut app = app();
    app.handle_key(KeyCode::Char('d'));
    assert!(!app.host.mediator().is_attached());
    assert_eq!(
        app.input_for(KeyCode::Char('d')),
        Some(Input::Apply(Action::Attach))
    );
    app.handle_key(KeyCode::Char('d'));
    assert!(app.host.mediator().is_attached());
    assert!(app.message.is_none());
}

#[test]
fn test_down_drags_list() {
    let mut app = app();
    app.handle_key(KeyCode::Down);
    assert_eq!(app.host.snapshot().scroll_offset, DRAG_STEP);
}

#[test]
fn test_quit_keys() {
    let mut app = app();
    assert_eq!(app.input_for(KeyCode::Esc), Some(Input::Quit));
    app.handle_key(KeyCode::Char('q'));
    assert!(app.should_quit);
}
