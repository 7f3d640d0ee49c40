use crate::ui::mvi::Reducer;
use crate::ui::nav::intent::NavIntent;
use crate::ui::nav::state::NavigationState;

pub struct NavReducer;

impl Reducer for NavReducer {
    type State = NavigationState;
    type Intent = NavIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let active = match intent {
            NavIntent::Select(page) => page,
            NavIntent::Next => state.active.next(),
            NavIntent::Previous => state.active.prev(),
        };
        NavigationState { active }
    }
}
