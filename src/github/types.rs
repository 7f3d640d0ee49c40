use serde::{Deserialize, Serialize};

const NO_DESCRIPTION: &str = "No description available.";

/// The subset of a GitHub repository object shown on a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repo {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub html_url: String,
}

impl Repo {
    pub fn description_or_default(&self) -> &str {
        match self.description.as_deref() {
            Some(text) if !text.trim().is_empty() => text,
            _ => NO_DESCRIPTION,
        }
    }
}
