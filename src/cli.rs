use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;
use crate::ui::nav::Page;

/// Animated terminal portfolio.
#[derive(Debug, Parser)]
#[command(name = "starfolio", version, about)]
pub struct Cli {
    /// Path to the config file (default: <config dir>/starfolio/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Page shown at startup: Home, Portfolio, Projects, Gallery, Articles or Blog
    #[arg(long, value_name = "PAGE")]
    pub page: Option<Page>,

    /// GitHub user whose public repositories are listed on the Projects page
    #[arg(long, value_name = "USER")]
    pub github_user: Option<String>,

    /// Do not fetch repositories
    #[arg(long)]
    pub no_fetch: bool,

    /// Log file (default: <data dir>/starfolio/starfolio.log)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::config_path)
    }

    /// Overlay command-line flags on the loaded config.
    pub fn apply(&self, config: &mut Config) {
        if let Some(page) = self.page {
            config.ui.start_page = page;
        }
        if let Some(user) = &self.github_user {
            config.github.user = user.clone();
        }
        if self.no_fetch {
            config.github.enabled = false;
        }
    }
}
