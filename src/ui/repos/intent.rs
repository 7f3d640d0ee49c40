use crate::github::Repo;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum RepoIntent {
    FetchStarted,
    Loaded(Vec<Repo>),
    FetchFailed,
}

impl Intent for RepoIntent {}
