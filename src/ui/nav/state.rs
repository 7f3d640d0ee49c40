use crate::ui::mvi::UiState;
use crate::ui::nav::Page;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct NavigationState {
    pub active: Page,
}

impl UiState for NavigationState {}

impl NavigationState {
    pub fn new(active: Page) -> Self {
        Self { active }
    }

    pub fn is_active(&self, page: Page) -> bool {
        self.active == page
    }
}
