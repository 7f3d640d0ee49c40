use crate::animation::{TypewriterTask, TypewriterTiming};
use crate::config::{Config, GithubConfig};
use crate::github::RepoClient;
use crate::shutdown::ShutdownHandle;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, handle_mouse};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc;
use std::time::{Duration, Instant};
use tokio::runtime::Handle;

/// Run the portfolio view until the user quits or a signal arrives.
///
/// The UI loop is synchronous; animation and network work run on `runtime`.
pub fn run(config: &Config, runtime: &Handle, shutdown: ShutdownHandle) -> io::Result<()> {
    let _enter = runtime.enter();
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    let events = EventHandler::new(tick_rate, shutdown.clone());

    let typewriter = TypewriterTask::spawn(
        config.profile.greeting.clone(),
        TypewriterTiming::from(&config.typewriter),
    );
    let mut app = App::new(config, typewriter, Instant::now());
    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.on_resize(cols, rows);
    }

    if config.github.enabled {
        app.begin_fetch();
        spawn_repo_fetch(&config.github, events.sender(), shutdown.clone());
    }

    tracing::info!(page = %app.active_page(), "portfolio started");

    loop {
        terminal.draw(|frame| draw(frame, &app, Instant::now()))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Mouse(mouse)) => handle_mouse(&mut app, mouse),
            Ok(AppEvent::Resize(cols, rows)) => app.on_resize(cols, rows),
            Ok(AppEvent::Repos(repos)) => app.on_repos(repos),
            Ok(AppEvent::Shutdown) => app.request_quit(),
            Ok(AppEvent::Tick) => {}
            Err(mpsc::RecvTimeoutError::Timeout) => {}
            Err(mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    app.teardown();
    shutdown.signal();
    guard.restore();
    tracing::info!("portfolio closed");
    Ok(())
}

/// Fetch the repository list once in the background and post the result.
fn spawn_repo_fetch(
    config: &GithubConfig,
    events: mpsc::Sender<AppEvent>,
    shutdown: ShutdownHandle,
) {
    let user = config.user.clone();
    let client = match RepoClient::new(config) {
        Ok(client) => client,
        Err(err) => {
            tracing::error!("Error fetching repositories: {err}");
            let _ = events.send(AppEvent::Repos(None));
            return;
        }
    };

    tokio::spawn(async move {
        let result = tokio::select! {
            _ = shutdown.wait() => return,
            result = client.list_repos(&user) => result,
        };
        let repos = match result {
            Ok(repos) => {
                tracing::info!(user = %user, count = repos.len(), "repositories loaded");
                Some(repos)
            }
            Err(err) => {
                tracing::error!("Error fetching repositories: {err}");
                None
            }
        };
        let _ = events.send(AppEvent::Repos(repos));
    });
}
