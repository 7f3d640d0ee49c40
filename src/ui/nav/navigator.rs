use crate::ui::mvi::Reducer;
use crate::ui::nav::{NavIntent, NavReducer, NavigationState, Page};

/// Notification delivered to observers after every navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageChange {
    pub from: Page,
    pub to: Page,
}

impl PageChange {
    /// False when the already active page was selected again.
    pub fn is_change(&self) -> bool {
        self.from != self.to
    }
}

type Observer = Box<dyn FnMut(PageChange) + Send>;

/// Owns the navigation state and fans out changes to observers.
pub struct Navigator {
    state: NavigationState,
    observers: Vec<Observer>,
}

impl Navigator {
    pub fn new(initial: Page) -> Self {
        Self {
            state: NavigationState::new(initial),
            observers: Vec::new(),
        }
    }

    pub fn active(&self) -> Page {
        self.state.active
    }

    pub fn is_active(&self, page: Page) -> bool {
        self.state.is_active(page)
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    /// Register an observer. Observers run synchronously, in registration
    /// order, inside [`dispatch`](Self::dispatch).
    pub fn observe<F>(&mut self, observer: F)
    where
        F: FnMut(PageChange) + Send + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    pub fn select(&mut self, page: Page) -> PageChange {
        self.dispatch(NavIntent::Select(page))
    }

    pub fn dispatch(&mut self, intent: NavIntent) -> PageChange {
        let from = self.state.active;
        self.state = NavReducer::reduce(std::mem::take(&mut self.state), intent);
        let change = PageChange {
            from,
            to: self.state.active,
        };
        for observer in &mut self.observers {
            observer(change);
        }
        change
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(Page::default())
    }
}
