use std::sync::{Arc, Mutex};

use starfolio::ui::mvi::Reducer;
use starfolio::ui::nav::{
    NavIntent, NavReducer, NavigationState, Navigator, Page, PageChange,
};

#[test]
fn select_sets_active_page() {
    let state = NavReducer::reduce(NavigationState::default(), NavIntent::Select(Page::Gallery));
    assert_eq!(state.active, Page::Gallery);
}

#[test]
fn select_is_idempotent() {
    let state = NavigationState::new(Page::Blog);
    let again = NavReducer::reduce(state.clone(), NavIntent::Select(Page::Blog));
    assert_eq!(again, state);
}

#[test]
fn next_and_previous_wrap_around() {
    let state = NavReducer::reduce(NavigationState::new(Page::Blog), NavIntent::Next);
    assert_eq!(state.active, Page::Home);
    let state = NavReducer::reduce(state, NavIntent::Previous);
    assert_eq!(state.active, Page::Blog);
}

#[test]
fn last_select_wins_and_exactly_one_page_is_active() {
    // A fixed pseudo-random walk over the page set.
    let mut seed: u32 = 0x2545_f491;
    let mut nav = Navigator::default();
    for _ in 0..200 {
        seed ^= seed << 13;
        seed ^= seed >> 17;
        seed ^= seed << 5;
        let page = Page::ALL[seed as usize % Page::ALL.len()];

        nav.select(page);
        assert_eq!(nav.active(), page);
        let active: Vec<Page> = Page::ALL
            .into_iter()
            .filter(|p| nav.is_active(*p))
            .collect();
        assert_eq!(active, vec![page]);
    }
}

#[test]
fn portfolio_then_blog() {
    let mut nav = Navigator::default();
    nav.select(Page::Portfolio);
    nav.select(Page::Blog);
    assert_eq!(nav.active(), Page::Blog);
    assert!(!nav.is_active(Page::Portfolio));
}

#[test]
fn observers_are_notified_synchronously_in_order() {
    let log: Arc<Mutex<Vec<(u8, PageChange)>>> = Arc::new(Mutex::new(Vec::new()));
    let mut nav = Navigator::new(Page::Home);

    let first = Arc::clone(&log);
    nav.observe(move |change| first.lock().unwrap().push((1, change)));
    let second = Arc::clone(&log);
    nav.observe(move |change| second.lock().unwrap().push((2, change)));

    let change = nav.select(Page::Projects);
    let expected = PageChange {
        from: Page::Home,
        to: Page::Projects,
    };
    assert_eq!(change, expected);
    assert_eq!(*log.lock().unwrap(), vec![(1, expected), (2, expected)]);
}

#[test]
fn reselect_notifies_without_change() {
    let changes = Arc::new(Mutex::new(Vec::new()));
    let mut nav = Navigator::new(Page::Articles);
    let sink = Arc::clone(&changes);
    nav.observe(move |change| sink.lock().unwrap().push(change));

    let change = nav.select(Page::Articles);
    assert!(!change.is_change());
    assert_eq!(nav.active(), Page::Articles);
    assert_eq!(changes.lock().unwrap().len(), 1);
}

#[test]
fn dispatch_next_reports_change() {
    let mut nav = Navigator::new(Page::Home);
    let change = nav.dispatch(NavIntent::Next);
    assert!(change.is_change());
    assert_eq!(change.to, Page::Portfolio);
    assert_eq!(nav.state().active, Page::Portfolio);
}
