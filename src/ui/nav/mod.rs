mod intent;
mod navigator;
mod page;
mod reducer;
mod state;

pub use intent::NavIntent;
pub use navigator::{Navigator, PageChange};
pub use page::{Page, UnknownPage};
pub use reducer::NavReducer;
pub use state::NavigationState;
