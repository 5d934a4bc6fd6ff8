//! Terminal shim and entry point.
//!
//! This module provides the thin integration layer between the regbrowse
//! library and the terminal. It owns the raw-mode alternate screen, the
//! async runtime, and the channels to the background fetch worker, and it
//! translates key events into library events.
//!
//! # Event Loop
//!
//! ```text
//! ┌─────────────────────────┐
//! │   Main Task             │
//! │  ┌──────────────────┐   │
//! │  │  AppState        │   │  ← UI state, event handling
//! │  └──────────────────┘   │
//! │          │              │
//! │          │ channels     │
//! │          ▼              │
//! │  ┌──────────────────┐   │
//! │  │  Fetch Worker    │   │  ← HTTP requests
//! │  │  (tokio task)    │   │  ← one in flight at a time
//! │  └──────────────────┘   │
//! └─────────────────────────┘
//! ```
//!
//! Two event sources are multiplexed with `select!`: terminal input from
//! crossterm's `EventStream` and fetch responses from the worker channel.
//! Every handled event may re-render and may emit actions; actions execute
//! here, against the real network, storage, and terminal.
//!
//! # Keybindings
//!
//! In normal mode:
//! - `j`/`k` or arrow keys: move the card cursor
//! - `/`: search mode, `f`: filter mode
//! - `Enter`: open details, `Esc`: close details
//! - `Space`: toggle bookmark
//! - `m`: load more, `r`: reset filters, `q`: quit
//!
//! In search mode: type to edit, `Enter` submits, `Esc` goes back.
//!
//! In filter mode: `Tab`/`Shift+Tab` cycle fields, `h`/`l` or arrows cycle
//! select options, digits and `-` edit date bounds, `r` clears all fields.

use clap::Parser;
use crossterm::event::{Event as TermEvent, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::{cursor, execute, terminal};
use futures_util::StreamExt;
use tokio::sync::mpsc;
use url::Url;

use regbrowse::app::handler::handle_event;
use regbrowse::app::{Action, AppState, Event, InputMode};
use regbrowse::domain::error::{RegbrowseError, Result};
use regbrowse::domain::BookmarkSet;
use regbrowse::fetch::{DocumentClient, FetchRequest};
use regbrowse::storage::{BookmarkStore, JsonBookmarkStore};
use regbrowse::{fetch, infrastructure, observability, ui, Config};

/// Browse, filter, and bookmark Federal Register documents from the terminal.
#[derive(Debug, Parser)]
#[command(name = "regbrowse", version, about)]
struct Cli {
    /// Built-in theme name (catppuccin-mocha, catppuccin-latte).
    #[arg(long)]
    theme: Option<String>,

    /// Path to a custom TOML theme file (takes precedence over --theme).
    #[arg(long)]
    theme_file: Option<String>,

    /// Tracing level for the log file (trace, debug, info, warn, error).
    #[arg(long)]
    trace_level: Option<String>,

    /// Directory for bookmarks and logs (defaults to the XDG data dir).
    #[arg(long)]
    data_dir: Option<std::path::PathBuf>,

    /// Document API endpoint (defaults to the public Federal Register API).
    #[arg(long)]
    api_url: Option<String>,
}

impl Cli {
    fn into_config(self) -> Config {
        let defaults = Config::default();
        Config {
            api_base_url: self.api_url.unwrap_or(defaults.api_base_url),
            data_dir: self.data_dir.unwrap_or(defaults.data_dir),
            theme_name: self.theme,
            theme_file: self.theme_file,
            trace_level: self.trace_level,
        }
    }
}

/// Event-loop state wrapping the library `AppState` with terminal-side
/// concerns: the storage port, the fetch request channel, and the current
/// terminal size.
struct Runner {
    app: AppState,
    store: JsonBookmarkStore,
    request_tx: mpsc::UnboundedSender<FetchRequest>,
    rows: usize,
    cols: usize,
    quit: bool,
}

impl Runner {
    /// Processes one library event: handle, execute actions, re-render.
    fn process(&mut self, event: &Event) {
        match handle_event(&mut self.app, event) {
            Ok((should_render, actions)) => {
                for action in actions {
                    self.execute_action(action);
                }
                if should_render && !self.quit {
                    ui::render(&self.app, self.rows, self.cols);
                }
            }
            Err(e) => {
                tracing::debug!(error = %e, "error handling event");
            }
        }
    }

    /// Executes an action returned from event handling.
    ///
    /// - `PostFetch`: forwards the request to the fetch worker
    /// - `PersistBookmarks`: writes through the storage port; failures are
    ///   logged and never surfaced (storage is best-effort by design)
    /// - `Quit`: ends the event loop
    fn execute_action(&mut self, action: Action) {
        match action {
            Action::PostFetch(request) => {
                tracing::debug!(page = request.page, "posting fetch request");
                if self.request_tx.send(request).is_err() {
                    tracing::debug!("fetch worker gone, request dropped");
                }
            }
            Action::PersistBookmarks { ids } => {
                if let Err(e) = self.store.save(&ids) {
                    tracing::debug!(error = %e, "failed to persist bookmarks");
                }
            }
            Action::Quit => {
                tracing::debug!("quit requested");
                self.quit = true;
            }
        }
    }

    /// Maps a terminal key event to a library event.
    ///
    /// Returns `None` for keys with no meaning in the current mode.
    fn map_key_event(&self, key: &KeyEvent) -> Option<Event> {
        if key.kind != KeyEventKind::Press {
            return None;
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(Event::Quit);
        }

        // The detail panel captures input while open.
        if self.app.selected_document.is_some() {
            return match key.code {
                KeyCode::Esc | KeyCode::Enter => Some(Event::CloseDetails),
                KeyCode::Char(' ') => Some(Event::ToggleBookmark),
                KeyCode::Char('q') => Some(Event::Quit),
                _ => None,
            };
        }

        match self.app.input_mode {
            InputMode::Normal => match key.code {
                KeyCode::Char('q') => Some(Event::Quit),
                KeyCode::Char('/') => Some(Event::SearchMode),
                KeyCode::Char('f') => Some(Event::FilterMode),
                KeyCode::Down | KeyCode::Char('j') => Some(Event::KeyDown),
                KeyCode::Up | KeyCode::Char('k') => Some(Event::KeyUp),
                KeyCode::Enter => Some(Event::ViewDetails),
                KeyCode::Char(' ') => Some(Event::ToggleBookmark),
                KeyCode::Char('m') => Some(Event::LoadMore),
                KeyCode::Char('r') => Some(Event::ResetFilters),
                _ => None,
            },
            InputMode::Search => match key.code {
                KeyCode::Esc => Some(Event::ExitInput),
                KeyCode::Enter => Some(Event::SubmitSearch),
                KeyCode::Backspace => Some(Event::Backspace),
                KeyCode::Char(c) => Some(Event::Char(c)),
                _ => None,
            },
            InputMode::Filter(field) => match key.code {
                KeyCode::Esc | KeyCode::Enter => Some(Event::ExitInput),
                KeyCode::Tab => Some(Event::NextFilterField),
                KeyCode::BackTab => Some(Event::PrevFilterField),
                KeyCode::Left => Some(Event::FilterOptionPrev),
                KeyCode::Right => Some(Event::FilterOptionNext),
                KeyCode::Backspace => Some(Event::Backspace),
                KeyCode::Char('h') if field.is_select() => Some(Event::FilterOptionPrev),
                KeyCode::Char('l') if field.is_select() => Some(Event::FilterOptionNext),
                KeyCode::Char('r') => Some(Event::ResetFilters),
                KeyCode::Char(c) if c.is_ascii_digit() || c == '-' => Some(Event::Char(c)),
                _ => None,
            },
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = Cli::parse().into_config();
    observability::init_tracing(&config);

    tracing::debug!(api = %config.api_base_url, data_dir = ?config.data_dir, "starting regbrowse");

    // Bookmarks load before the terminal is taken over; failures degrade to
    // an empty set without troubling the user.
    let store = JsonBookmarkStore::new(infrastructure::bookmarks_path(&config.data_dir));
    let stored_ids = store.load().unwrap_or_else(|e| {
        tracing::debug!(error = %e, "bookmark load failed, starting empty");
        Vec::new()
    });
    let bookmarks = BookmarkSet::from_ids(stored_ids);

    let app = regbrowse::initialize(&config, bookmarks);

    let base_url = Url::parse(&config.api_base_url)
        .map_err(|e| RegbrowseError::Config(format!("invalid api url: {e}")))?;
    let client = DocumentClient::new(base_url)?;

    let (request_tx, request_rx) = mpsc::unbounded_channel();
    let (response_tx, response_rx) = mpsc::unbounded_channel();
    let worker = fetch::worker::spawn(client, request_rx, response_tx);

    let (cols, rows) = terminal::size()?;
    let mut runner = Runner {
        app,
        store,
        request_tx,
        rows: rows as usize,
        cols: cols as usize,
        quit: false,
    };

    terminal::enable_raw_mode()?;
    execute!(std::io::stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;

    let result = run(&mut runner, response_rx).await;

    // Always restore the terminal, even when the loop errored.
    let _ = execute!(std::io::stdout(), cursor::Show, terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    worker.abort();
    result
}

/// Drives the event loop until quit or both event sources close.
async fn run(
    runner: &mut Runner,
    mut response_rx: mpsc::UnboundedReceiver<fetch::FetchResponse>,
) -> Result<()> {
    // Initial unfiltered load of page 1.
    runner.app.loading = true;
    runner.execute_action(Action::PostFetch(FetchRequest {
        keyword: String::new(),
        page: 1,
        replace: true,
    }));

    ui::render(&runner.app, runner.rows, runner.cols);

    let mut term_events = EventStream::new();

    while !runner.quit {
        tokio::select! {
            maybe_term = term_events.next() => {
                match maybe_term {
                    Some(Ok(TermEvent::Key(key))) => {
                        if let Some(event) = runner.map_key_event(&key) {
                            runner.process(&event);
                        }
                    }
                    Some(Ok(TermEvent::Resize(new_cols, new_rows))) => {
                        runner.cols = new_cols as usize;
                        runner.rows = new_rows as usize;
                        ui::render(&runner.app, runner.rows, runner.cols);
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        tracing::debug!(error = %e, "terminal event error");
                    }
                    None => break,
                }
            }
            maybe_response = response_rx.recv() => {
                match maybe_response {
                    Some(response) => {
                        runner.process(&Event::FetchCompleted(response));
                    }
                    None => {
                        tracing::debug!("fetch worker channel closed");
                        break;
                    }
                }
            }
        }
    }

    Ok(())
}
