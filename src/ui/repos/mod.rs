mod intent;
mod reducer;
mod state;

pub use intent::RepoIntent;
pub use reducer::RepoReducer;
pub use state::RepoListState;
