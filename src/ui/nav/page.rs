use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One navigation section. The set is closed: every value is a valid page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Page {
    #[default]
    Home,
    Portfolio,
    Projects,
    Gallery,
    Articles,
    Blog,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown page '{0}' (expected one of: Home, Portfolio, Projects, Gallery, Articles, Blog)")]
pub struct UnknownPage(pub String);

impl Page {
    /// Navigation order.
    pub const ALL: [Page; 6] = [
        Page::Home,
        Page::Portfolio,
        Page::Projects,
        Page::Gallery,
        Page::Articles,
        Page::Blog,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Portfolio => "Portfolio",
            Page::Projects => "Projects",
            Page::Gallery => "Gallery",
            Page::Articles => "Articles",
            Page::Blog => "Blog",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// Page at `index` in navigation order.
    pub fn from_index(index: usize) -> Option<Page> {
        Self::ALL.get(index).copied()
    }

    pub fn next(self) -> Page {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Page {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for Page {
    type Err = UnknownPage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|page| page.title().eq_ignore_ascii_case(needle))
            .ok_or_else(|| UnknownPage(s.to_string()))
    }
}

impl TryFrom<String> for Page {
    type Error = UnknownPage;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Page> for String {
    fn from(page: Page) -> Self {
        page.title().to_string()
    }
}
