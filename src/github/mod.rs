//! Public repository listing from the GitHub REST API.
//!
//! The fetch is best effort: a single request at startup, no pagination, no
//! retry. Failures are logged and the Projects page shows an empty list.

mod client;
mod types;

pub use client::{FetchError, RepoClient};
pub use types::Repo;
