use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::Mutex;
use ratatui::layout::Rect;

use crate::animation::{PageTransition, Starfield, TypewriterHandle};
use crate::config::{Config, Profile};
use crate::github::Repo;
use crate::ui::mvi::Reducer;
use crate::ui::nav::{NavIntent, Navigator, Page, PageChange};
use crate::ui::repos::{RepoIntent, RepoListState, RepoReducer};

const STARFIELD_SEED: u64 = 0x5eed_57a2;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// All state of one portfolio view.
pub struct App {
    should_quit: bool,
    size: Option<(u16, u16)>,
    profile: Profile,
    navigator: Navigator,
    /// Written by the navigator observer, read by the renderer.
    transition: Arc<Mutex<PageTransition>>,
    /// Hero greeting animation (resource, managed outside MVI).
    typewriter: TypewriterHandle,
    repos: RepoListState,
    starfield: Starfield,
    started: Instant,
}

impl App {
    pub fn new(config: &Config, typewriter: TypewriterHandle, now: Instant) -> Self {
        let transition = Arc::new(Mutex::new(PageTransition::settled(now)));
        let mut navigator = Navigator::new(config.ui.start_page);

        navigator.observe(|change: PageChange| {
            tracing::debug!(from = %change.from, to = %change.to, "page selected");
        });

        let fade = Arc::clone(&transition);
        let fade_duration = Duration::from_millis(config.ui.transition_ms);
        navigator.observe(move |change: PageChange| {
            if change.is_change() {
                *fade.lock() = PageTransition::start(Instant::now(), fade_duration);
            }
        });

        Self {
            should_quit: false,
            size: None,
            profile: config.profile.clone(),
            navigator,
            transition,
            typewriter,
            repos: RepoListState::default(),
            starfield: Starfield::new(config.ui.star_count, STARFIELD_SEED),
            started: now,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = Some((cols, rows));
    }

    /// Last known terminal area.
    pub fn area(&self) -> Option<Rect> {
        self.size.map(|(cols, rows)| Rect::new(0, 0, cols, rows))
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn active_page(&self) -> Page {
        self.navigator.active()
    }

    pub fn is_active(&self, page: Page) -> bool {
        self.navigator.is_active(page)
    }

    pub fn select_page(&mut self, page: Page) {
        self.navigator.select(page);
    }

    pub fn next_page(&mut self) {
        self.navigator.dispatch(NavIntent::Next);
    }

    pub fn prev_page(&mut self) {
        self.navigator.dispatch(NavIntent::Previous);
    }

    /// Fade-in progress of the active page, `0.0..=1.0`.
    pub fn transition_progress(&self, now: Instant) -> f32 {
        self.transition.lock().progress(now)
    }

    /// Text currently shown by the greeting typewriter.
    pub fn greeting(&self) -> String {
        self.typewriter.frame().displayed
    }

    pub fn starfield(&self) -> &Starfield {
        &self.starfield
    }

    pub fn elapsed(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.started)
    }

    pub fn repos(&self) -> &RepoListState {
        &self.repos
    }

    pub fn begin_fetch(&mut self) {
        dispatch_mvi!(self, repos, RepoReducer, RepoIntent::FetchStarted);
    }

    pub fn on_repos(&mut self, repos: Option<Vec<Repo>>) {
        let intent = match repos {
            Some(repos) => RepoIntent::Loaded(repos),
            None => RepoIntent::FetchFailed,
        };
        dispatch_mvi!(self, repos, RepoReducer, intent);
    }

    /// Release the view's scheduled work. Returns `true` the first time.
    pub fn teardown(&mut self) -> bool {
        self.typewriter.cancel()
    }
}
