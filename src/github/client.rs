use std::time::Duration;

use reqwest::header::{ACCEPT, USER_AGENT};
use reqwest::Client;
use thiserror::Error;

use crate::config::GithubConfig;
use crate::github::types::Repo;

const AGENT: &str = concat!("starfolio/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("Failed to decode repository list from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Read-only client for a user's public repositories.
#[derive(Clone)]
pub struct RepoClient {
    client: Client,
    api_base: String,
}

impl RepoClient {
    pub fn new(config: &GithubConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self {
            client,
            api_base: config.api_base.trim_end_matches('/').to_string(),
        })
    }

    pub fn repos_url(&self, user: &str) -> String {
        format!("{}/users/{}/repos", self.api_base, user)
    }

    /// Fetch the public repositories of `user`, one page, in API order.
    pub async fn list_repos(&self, user: &str) -> Result<Vec<Repo>, FetchError> {
        let url = self.repos_url(user);
        let response = self
            .client
            .get(&url)
            .header(USER_AGENT, AGENT)
            .header(ACCEPT, "application/vnd.github+json")
            .send()
            .await
            .map_err(|source| FetchError::Request {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url,
                status: status.as_u16(),
            });
        }

        response
            .json::<Vec<Repo>>()
            .await
            .map_err(|source| FetchError::Decode { url, source })
    }
}
