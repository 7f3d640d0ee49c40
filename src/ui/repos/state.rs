use crate::github::Repo;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum RepoListState {
    /// Fetch disabled or not started.
    #[default]
    Idle,
    Loading,
    Loaded(Vec<Repo>),
    /// The fetch failed. Rendered like an empty list.
    Failed,
}

impl UiState for RepoListState {}

impl RepoListState {
    /// Repositories to render as cards.
    pub fn repos(&self) -> &[Repo] {
        match self {
            Self::Loaded(repos) => repos,
            _ => &[],
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}
