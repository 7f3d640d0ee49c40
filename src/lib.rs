pub mod animation;
pub mod cli;
pub mod config;
pub mod github;
pub mod logging;
pub mod shutdown;
pub mod ui;
