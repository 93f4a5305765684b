//! TrialDeck TUI entry point.

use crossterm::{
    event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use trialdeck_store::SessionStore;
use trialdeck_tui::config::TuiConfig;
use trialdeck_tui::error::TuiError;
use trialdeck_tui::forms::FormOutcome;
use trialdeck_tui::keys::{map_key, Action};
use trialdeck_tui::nav::Page;
use trialdeck_tui::persistence::{self, PersistedState};
use trialdeck_tui::state::{App, InputMode};
use trialdeck_tui::views::render_view;

fn main() -> Result<(), TuiError> {
    let config = TuiConfig::load()?;
    init_logging(&config)?;

    let mut app = App::new(config, SessionStore::seeded());
    if let Ok(Some(state)) = persistence::load(&app.config.persistence_path) {
        app.active_page = state.active_page;
    }
    tracing::info!(page = app.active_page.title(), "dashboard session started");

    let mut terminal = setup_terminal()?;
    let _guard = TerminalGuard {};

    let tick_rate = Duration::from_millis(app.config.refresh_interval_ms);
    let mut quit = false;
    while !quit {
        terminal.draw(|f| render_view(f, &app))?;
        if event::poll(tick_rate)? {
            if let CrosstermEvent::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    quit = handle_key(&mut app, key);
                }
            }
        }
    }

    let persisted = PersistedState {
        active_page: app.active_page,
    };
    let _ = persistence::save(&app.config.persistence_path, &persisted);

    Ok(())
}

fn init_logging(config: &TuiConfig) -> Result<(), TuiError> {
    if let Some(parent) = config.log_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_path)?;
    let filter = EnvFilter::try_from_env("TRIALDECK_LOG")
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>, TuiError> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = execute!(stdout, LeaveAlternateScreen);
    }
}

/// Route a key press; returns true when the app should quit.
fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    // An open form captures everything.
    if let Some(form) = app.form.as_mut() {
        match form.handle_key(key) {
            FormOutcome::Cancelled => app.form = None,
            FormOutcome::Submitted => app.submit_form(),
            FormOutcome::Continue => {}
        }
        return false;
    }

    // Search mode feeds the active page's query.
    if app.mode == InputMode::Search {
        use crossterm::event::KeyCode;
        match key.code {
            KeyCode::Esc | KeyCode::Enter => app.mode = InputMode::Normal,
            KeyCode::Backspace => app.pop_search_char(),
            KeyCode::Char(c) => app.push_search_char(c),
            _ => {}
        }
        return false;
    }

    match map_key(key) {
        Some(action) => handle_action(app, action),
        None => false,
    }
}

fn handle_action(app: &mut App, action: Action) -> bool {
    match action {
        Action::Quit => return true,
        Action::NextPage => app.active_page = app.active_page.next(),
        Action::PrevPage => app.active_page = app.active_page.previous(),
        Action::SwitchPage(index) => {
            if let Some(page) = Page::from_index(index) {
                app.active_page = page;
            }
        }
        Action::MoveDown => app.select_next(),
        Action::MoveUp => app.select_previous(),
        Action::OpenSearch => app.start_search(),
        Action::NewItem => app.open_form(),
        Action::Configure => app.open_configure_form(),
        Action::ToggleAgent => {
            if app.active_page == Page::Agents {
                app.toggle_selected_agent();
            }
        }
        Action::StopAgent => {
            if app.active_page == Page::Agents {
                app.stop_selected_agent();
            }
        }
        Action::SyncAll => {
            if app.active_page == Page::Agents {
                app.sync_all_agents();
            }
        }
        Action::ResetSession => app.reset_session(),
        Action::Cancel => app.clear_search(),
        Action::Confirm => {}
    }
    false
}
