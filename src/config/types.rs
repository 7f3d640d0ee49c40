use serde::{Deserialize, Serialize};

use crate::ui::nav::Page;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub profile: Profile,
    #[serde(default)]
    pub typewriter: TypewriterConfig,
    #[serde(default)]
    pub github: GithubConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Content of the hero section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    /// Text cycled by the typewriter above the name.
    #[serde(default = "default_greeting")]
    pub greeting: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub cv_url: Option<String>,
    #[serde(default)]
    pub socials: Vec<SocialLink>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
}

/// Typewriter delays, in milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypewriterConfig {
    #[serde(default = "default_type_interval")]
    pub type_interval_ms: u64,
    #[serde(default = "default_delete_interval")]
    pub delete_interval_ms: u64,
    #[serde(default = "default_hold_full")]
    pub hold_full_ms: u64,
    #[serde(default = "default_hold_empty")]
    pub hold_empty_ms: u64,
}

/// Repository listing on the Projects page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GithubConfig {
    #[serde(default = "default_github_user")]
    pub user: String,
    #[serde(default = "default_api_base")]
    pub api_base: String,
    #[serde(default = "default_github_timeout")]
    pub timeout_seconds: u64,
    /// Skip the fetch entirely (offline use).
    #[serde(default = "default_true")]
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    #[serde(default = "default_star_count")]
    pub star_count: usize,
    #[serde(default)]
    pub start_page: Page,
    /// Length of the fade when switching pages.
    #[serde(default = "default_transition")]
    pub transition_ms: u64,
}

fn default_greeting() -> String {
    "Hey there,".to_string()
}

fn default_type_interval() -> u64 {
    100
}

fn default_delete_interval() -> u64 {
    100
}

fn default_hold_full() -> u64 {
    1000
}

fn default_hold_empty() -> u64 {
    500
}

fn default_github_user() -> String {
    "Dev-MihirParmar".to_string()
}

fn default_api_base() -> String {
    "https://api.github.com".to_string()
}

fn default_github_timeout() -> u64 {
    10
}

fn default_true() -> bool {
    true
}

fn default_tick_rate() -> u64 {
    50
}

fn default_star_count() -> usize {
    120
}

fn default_transition() -> u64 {
    500
}

impl Default for Profile {
    fn default() -> Self {
        let social = |label: &str, url: &str| SocialLink {
            label: label.to_string(),
            url: url.to_string(),
        };
        Self {
            name: "Mihir Parmar".to_string(),
            greeting: default_greeting(),
            tagline: "A Coder, Circuit Designer, Writer, Hobbyist, Electronics Enthusiast, \
                      JEE Aspirant or whatever you like to call it"
                .to_string(),
            cv_url: None,
            socials: vec![
                social("GitHub", "https://github.com/Dev-MihirParmar"),
                social("LinkedIn", "https://www.linkedin.com/in/dev-mihirparmar/"),
                social("X", "https://x.com/dev_mihirparmar"),
                social("Instagram", "https://www.instagram.com/dev.mihirparmar/"),
                social("Medium", "https://dev-mihirparmar.medium.com/"),
            ],
        }
    }
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            type_interval_ms: default_type_interval(),
            delete_interval_ms: default_delete_interval(),
            hold_full_ms: default_hold_full(),
            hold_empty_ms: default_hold_empty(),
        }
    }
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            user: default_github_user(),
            api_base: default_api_base(),
            timeout_seconds: default_github_timeout(),
            enabled: true,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            star_count: default_star_count(),
            start_page: Page::default(),
            transition_ms: default_transition(),
        }
    }
}
