use crate::ui::mvi::Reducer;
use crate::ui::repos::intent::RepoIntent;
use crate::ui::repos::state::RepoListState;

pub struct RepoReducer;

impl Reducer for RepoReducer {
    type State = RepoListState;
    type Intent = RepoIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            RepoIntent::FetchStarted => RepoListState::Loading,
            // A late result never overwrites one already shown.
            RepoIntent::Loaded(repos) => match state {
                RepoListState::Loading | RepoListState::Idle => RepoListState::Loaded(repos),
                other => other,
            },
            RepoIntent::FetchFailed => match state {
                RepoListState::Loading => RepoListState::Failed,
                other => other,
            },
        }
    }
}
