use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use catalog_core::{update, AppState, Msg};
use catalog_logging::{catalog_info, catalog_warn};
use chrono::Local;
use crossterm::cursor;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::Terminal;

use super::config::{self, AppConfig};
use super::effects::EffectRunner;
use super::{input, logging, ui};

pub fn run_app() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let loaded = config::load_config(&cwd);
    let config = match &loaded {
        Ok(config) => config.clone(),
        Err(_) => AppConfig::default(),
    };
    logging::initialize(config.log_destination, config.level_filter());
    if let Err(err) = loaded {
        catalog_warn!("Ignoring configuration, using defaults: {}", err);
    }
    catalog_info!(
        "Starting catalog view base_url={} page_size={}",
        config.base_url,
        config.page_size
    );

    let runner = EffectRunner::new(config.fetch_settings()).context("starting fetch engine")?;
    let mut view = CatalogView::new(AppState::with_settings(config.view_settings()));

    let session = TerminalSession::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let mut events = TerminalEvents;
    let result = view.run(&mut terminal, &runner, &mut events);
    drop(session);
    catalog_info!("Catalog view closed");
    result
}

/// Raw mode and the alternate screen, left again when dropped.
struct TerminalSession;

impl TerminalSession {
    fn enter() -> anyhow::Result<Self> {
        enable_raw_mode().context("enabling raw mode")?;
        let session = TerminalSession;
        crossterm::execute!(io::stdout(), EnterAlternateScreen).context("entering alternate screen")?;
        Ok(session)
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if let Err(err) = disable_raw_mode() {
            catalog_warn!("Failed to disable raw mode: {}", err);
        }
        if let Err(err) = restore_screen(&mut io::stdout()) {
            catalog_warn!("Failed to restore terminal screen: {}", err);
        }
    }
}

fn restore_screen(out: &mut impl io::Write) -> io::Result<()> {
    crossterm::execute!(out, LeaveAlternateScreen, cursor::Show)
}

pub trait EventSource {
    fn poll(&mut self, timeout: Duration) -> io::Result<Option<Event>>;
}

struct TerminalEvents;

impl EventSource for TerminalEvents {
    fn poll(&mut self, timeout: Duration) -> io::Result<Option<Event>> {
        if event::poll(timeout)? {
            Ok(Some(event::read()?))
        } else {
            Ok(None)
        }
    }
}

/// Owns the view state and applies messages to it one at a time.
pub struct CatalogView {
    state: AppState,
    status_line: String,
    last_status: Option<String>,
    needs_draw: bool,
}

impl CatalogView {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            status_line: String::from("Ready"),
            last_status: None,
            needs_draw: true,
        }
    }

    pub fn run<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        runner: &EffectRunner,
        events: &mut dyn EventSource,
    ) -> anyhow::Result<()> {
        let mut quit = self.dispatch(Msg::ViewOpened, runner);
        while !quit {
            for msg in runner.poll() {
                quit |= self.dispatch(msg, runner);
            }
            if self.needs_draw {
                let view = self.state.view();
                terminal.draw(|frame| ui::render::render(frame, &view, &self.status_line))?;
                self.needs_draw = false;
            }
            match events.poll(ui::constants::INPUT_POLL_INTERVAL)? {
                Some(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    if let Some(msg) = input::map_key(key, &self.state.view()) {
                        quit |= self.dispatch(msg, runner);
                    }
                }
                Some(Event::Resize(..)) => self.needs_draw = true,
                _ => quit |= self.dispatch(Msg::Tick, runner),
            }
        }
        Ok(())
    }

    /// Applies one message and runs its effects; returns `true` on quit.
    pub fn dispatch(&mut self, msg: Msg, runner: &EffectRunner) -> bool {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        if state.consume_dirty() {
            self.needs_draw = true;
            let status = state.status().map(str::to_owned);
            if status != self.last_status {
                if let Some(text) = &status {
                    self.status_line = format!("[{}] {}", Local::now().format("%H:%M:%S"), text);
                }
                self.last_status = status;
            }
        }
        self.state = state;
        runner.run(effects)
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }
}
