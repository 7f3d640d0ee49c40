mod common;

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::Rect;
use starfolio::github::Repo;
use starfolio::ui::input::{handle_key, handle_mouse};
use starfolio::ui::layout::{layout_regions, nav_tabs};
use starfolio::ui::nav::Page;
use starfolio::ui::repos::RepoListState;
use std::time::{Duration, Instant};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    }
}

fn click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

#[tokio::test]
async fn starts_on_configured_page() {
    let mut config = common::offline_config();
    config.ui.start_page = Page::Gallery;
    let app = common::test_app(&config, 100, 30);
    assert_eq!(app.active_page(), Page::Gallery);
}

#[tokio::test]
async fn number_keys_select_pages() {
    let mut app = common::test_app(&common::offline_config(), 100, 30);
    handle_key(&mut app, key(KeyCode::Char('6')));
    assert_eq!(app.active_page(), Page::Blog);
    handle_key(&mut app, key(KeyCode::Char('2')));
    assert_eq!(app.active_page(), Page::Portfolio);
    // Out of range digits are ignored.
    handle_key(&mut app, key(KeyCode::Char('0')));
    handle_key(&mut app, key(KeyCode::Char('9')));
    assert_eq!(app.active_page(), Page::Portfolio);
}

#[tokio::test]
async fn arrows_and_tab_cycle_pages() {
    let mut app = common::test_app(&common::offline_config(), 100, 30);
    handle_key(&mut app, key(KeyCode::Left));
    assert_eq!(app.active_page(), Page::Blog);
    handle_key(&mut app, key(KeyCode::Tab));
    assert_eq!(app.active_page(), Page::Home);
    handle_key(&mut app, key(KeyCode::Right));
    assert_eq!(app.active_page(), Page::Portfolio);
    handle_key(&mut app, key(KeyCode::BackTab));
    assert_eq!(app.active_page(), Page::Home);
}

#[tokio::test]
async fn key_release_is_ignored() {
    let mut app = common::test_app(&common::offline_config(), 100, 30);
    let mut release = key(KeyCode::Char('3'));
    release.kind = KeyEventKind::Release;
    handle_key(&mut app, release);
    assert_eq!(app.active_page(), Page::Home);
}

#[tokio::test]
async fn quit_keys() {
    for event in [
        key(KeyCode::Char('q')),
        key(KeyCode::Esc),
        KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
    ] {
        let mut app = common::test_app(&common::offline_config(), 100, 30);
        assert!(!app.should_quit());
        handle_key(&mut app, event);
        assert!(app.should_quit());
    }
}

#[tokio::test]
async fn clicking_a_tab_selects_it() {
    let mut app = common::test_app(&common::offline_config(), 100, 30);
    let (header, _, _) = layout_regions(Rect::new(0, 0, 100, 30));

    for (page, rect) in nav_tabs(header) {
        handle_mouse(&mut app, click(rect.x + 1, rect.y));
        assert_eq!(app.active_page(), page);
        for other in Page::ALL.into_iter().filter(|p| *p != page) {
            assert!(!app.is_active(other));
        }
    }
}

#[tokio::test]
async fn clicks_outside_tabs_do_nothing() {
    let mut app = common::test_app(&common::offline_config(), 100, 30);
    handle_mouse(&mut app, click(0, 0));
    handle_mouse(&mut app, click(50, 15));
    let mut right_click = click(25, 1);
    right_click.kind = MouseEventKind::Down(MouseButton::Right);
    handle_mouse(&mut app, right_click);
    assert_eq!(app.active_page(), Page::Home);
}

#[tokio::test]
async fn page_change_restarts_fade() {
    let mut config = common::offline_config();
    config.ui.transition_ms = 10_000;
    let mut app = common::test_app(&config, 100, 30);
    assert_eq!(app.transition_progress(Instant::now()), 1.0);

    app.select_page(Page::Projects);
    let now = Instant::now();
    assert!(app.transition_progress(now) < 0.5);
    assert_eq!(app.transition_progress(now + Duration::from_secs(11)), 1.0);
}

#[tokio::test]
async fn reselecting_keeps_settled_fade() {
    let mut config = common::offline_config();
    config.ui.transition_ms = 10_000;
    let mut app = common::test_app(&config, 100, 30);
    app.select_page(Page::Home);
    assert_eq!(app.transition_progress(Instant::now()), 1.0);
}

#[tokio::test]
async fn repo_results_flow_into_state() {
    let mut app = common::test_app(&common::offline_config(), 100, 30);
    assert_eq!(app.repos(), &RepoListState::Idle);

    app.begin_fetch();
    assert!(app.repos().is_loading());

    let repo = Repo {
        name: "starfolio".into(),
        description: Some("Terminal portfolio".into()),
        html_url: "https://github.com/u/starfolio".into(),
    };
    app.on_repos(Some(vec![repo.clone()]));
    assert_eq!(app.repos().repos(), &[repo]);
}

#[tokio::test]
async fn failed_fetch_renders_as_empty() {
    let mut app = common::test_app(&common::offline_config(), 100, 30);
    app.begin_fetch();
    app.on_repos(None);
    assert_eq!(app.repos(), &RepoListState::Failed);
    assert!(app.repos().repos().is_empty());
}

#[tokio::test]
async fn teardown_cancels_once() {
    let mut app = common::test_app(&common::offline_config(), 100, 30);
    assert!(app.teardown());
    assert!(!app.teardown());
}
