mod app;
mod cli;
mod effects;
mod input;
mod logging;
mod models;
mod store;
mod theme;
mod ui;
mod wheel;

use std::io::{self, stdout};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    ExecutableCommand,
    event::{self, Event},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, SetTitle, disable_raw_mode, enable_raw_mode},
};
use log::{error, info};
use ratatui::prelude::*;

use app::App;
use cli::CliConfig;
use store::{KeyValueStore, MemoryStore, Persistence, SqliteStore};

/// Roughly 30 frames per second while idle or spinning
const FRAME_INTERVAL: Duration = Duration::from_millis(33);

fn main() {
    if let Err(err) = try_main() {
        eprintln!("wheel-tui: {:#}", err);
        std::process::exit(1);
    }
}

fn try_main() -> Result<()> {
    let config = cli::parse_args()?;
    if let Some(path) = config.log_path() {
        logging::init(&path)?;
    }
    info!("Starting wheel-tui v{}", cli::VERSION);

    let store = open_store(&config)?;
    let mut app = App::new(
        Persistence::new(store),
        &config,
        chrono::Local::now().date_naive(),
    );

    // Setup terminal
    install_panic_hook();
    enable_raw_mode()?;
    let guard = TerminalGuard::new(restore_terminal);
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    // Run the app
    let result = run(&mut terminal, &mut app);
    app.shutdown();

    // Restore terminal
    drop(guard);

    if let Err(err) = &result {
        error!("Event loop failed: {}", err);
    }
    result.context("terminal I/O failed")
}

fn open_store(config: &CliConfig) -> Result<Box<dyn KeyValueStore>> {
    let Some(data_dir) = &config.data_dir else {
        info!("Ephemeral session, nothing will be saved");
        return Ok(Box::new(MemoryStore::new()));
    };
    let store = SqliteStore::open(data_dir)
        .with_context(|| format!("failed to open the store in {}", data_dir.display()))?;
    Ok(Box::new(store))
}

/// Puts the terminal back when dropped, including while unwinding
struct TerminalGuard {
    restore: fn() -> io::Result<()>,
}

impl TerminalGuard {
    fn new(restore: fn() -> io::Result<()>) -> Self {
        Self { restore }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(err) = (self.restore)() {
            error!("Failed to restore terminal: {}", err);
        }
    }
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Leave raw mode before the panic message is printed
fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        default_hook(info);
    }));
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|frame| ui::render(frame, app, Instant::now()))?;

        if let Some(title) = app.take_pending_title() {
            stdout().execute(SetTitle(title))?;
        }

        // Handle input
        if event::poll(FRAME_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                input::handle_key(app, key, Instant::now());
            }
        }

        app.tick(Instant::now());
        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::store::StoreKey;

    #[test]
    fn test_ephemeral_session_leaves_disk_alone() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("state");
        let config = crate::cli::parse_args_from(&["--ephemeral", "--data-dir", dir.to_str().unwrap()])
            .unwrap();
        assert_eq!(config.log_path(), None);

        let mut store = open_store(&config).unwrap();
        store.set(StoreKey::HeaderText, "Standup").unwrap();
        assert_eq!(
            store.get(StoreKey::HeaderText).unwrap().as_deref(),
            Some("Standup")
        );
        assert!(!dir.exists());
    }

    #[test]
    fn test_persistent_session_opens_database() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("state");
        let config = crate::cli::parse_args_from(&["--data-dir", dir.to_str().unwrap()]).unwrap();

        let mut store = open_store(&config).unwrap();
        store.set(StoreKey::HeaderText, "Standup").unwrap();
        assert!(dir.join("wheel.db").exists());
    }

    static RESTORES: AtomicUsize = AtomicUsize::new(0);

    fn counting_restore() -> io::Result<()> {
        RESTORES.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    #[test]
    fn test_terminal_guard_restores_on_panic() {
        let result = std::panic::catch_unwind(|| {
            let _guard = TerminalGuard::new(counting_restore);
            panic!("event loop blew up");
        });
        assert!(result.is_err());
        assert_eq!(RESTORES.load(Ordering::SeqCst), 1);
    }
}
