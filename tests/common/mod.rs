//! Shared test utilities.

#![allow(dead_code)]

pub mod mock_github;

use std::path::PathBuf;
use std::time::Instant;

use starfolio::animation::{TypewriterTask, TypewriterTiming};
use starfolio::config::Config;
use starfolio::ui::app::App;
use tempfile::TempDir;

/// Config that never touches the network.
pub fn offline_config() -> Config {
    let mut config = Config::default();
    config.github.enabled = false;
    config.ui.star_count = 16;
    config
}

/// Build an `App` sized to `cols` x `rows`. Must run inside a tokio runtime.
pub fn test_app(config: &Config, cols: u16, rows: u16) -> App {
    let typewriter = TypewriterTask::spawn(
        config.profile.greeting.clone(),
        TypewriterTiming::from(&config.typewriter),
    );
    let mut app = App::new(config, typewriter, Instant::now());
    app.on_resize(cols, rows);
    app
}

/// Write `content` to a config.toml inside a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.toml");
    std::fs::write(&path, content).expect("Failed to write config");
    (temp_dir, path)
}
