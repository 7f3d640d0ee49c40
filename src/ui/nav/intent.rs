use crate::ui::mvi::Intent;
use crate::ui::nav::Page;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIntent {
    /// Make `page` the active section. Re-selecting the active page leaves
    /// the state unchanged; observers are still notified.
    Select(Page),
    Next,
    Previous,
}

impl Intent for NavIntent {}
