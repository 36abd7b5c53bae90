//! Blotter application state and event handling.

use adapter_trades::{FeedClient, FeedError};
use blotter_core::series::{premium_series, strike_series, TimeSeries};
use blotter_core::types::trade::partition_valid;
use blotter_core::types::{FxOption, TradeEnvelope};
use blotter_core::view::{SortKey, ViewState};
use crossterm::event::KeyCode;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};
use tokio::sync::mpsc;
use tracing::{error, warn};

use crate::screens;

/// Outcome of the one-shot feed fetch delivered to the event loop.
pub type FeedResult = Result<Vec<TradeEnvelope>, FeedError>;

/// Available screens in the TUI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Sortable, filterable trade table
    Blotter,
    /// Premium payment amounts over the visible rows
    PremiumChart,
    /// Strike rates over the visible rows
    StrikeChart,
}

impl Screen {
    /// Get screen title
    pub fn title(&self) -> &'static str {
        match self {
            Self::Blotter => "Trade Blotter",
            Self::PremiumChart => "Premium Payments",
            Self::StrikeChart => "Strike Rates",
        }
    }

    /// Next screen in the Tab cycle
    pub fn next(&self) -> Screen {
        match self {
            Self::Blotter => Self::PremiumChart,
            Self::PremiumChart => Self::StrikeChart,
            Self::StrikeChart => Self::Blotter,
        }
    }

    /// Previous screen in the Tab cycle
    pub fn previous(&self) -> Screen {
        match self {
            Self::Blotter => Self::StrikeChart,
            Self::PremiumChart => Self::Blotter,
            Self::StrikeChart => Self::PremiumChart,
        }
    }
}

/// Input focus of the blotter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Keys drive navigation, sorting, and screen switching
    Normal,
    /// Keys edit the filter text
    Filter,
    /// The details popup is open
    Details,
}

/// Feed load progress
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    /// The fetch is still in flight
    Loading,
    /// Records arrived and the blotter is interactive
    Ready,
    /// The fetch failed; holds the feed error message
    Failed(String),
}

/// Spawn the one-shot feed fetch and hand back the receiving end.
///
/// The fetch runs concurrently with the event loop; the loop drains the
/// channel with `try_recv` on every tick so the terminal stays responsive
/// while the feed answers.
pub fn spawn_feed_fetch(client: FeedClient) -> mpsc::Receiver<FeedResult> {
    let (tx, rx) = mpsc::channel(1);
    tokio::spawn(async move {
        let outcome = client.get_trades().await;
        // Receiver is gone when the user quit before the feed answered.
        let _ = tx.send(outcome).await;
    });
    rx
}

/// Rendering state snapshot
pub(crate) struct RenderState {
    pub(crate) screen: Screen,
    pub(crate) load: LoadState,
    pub(crate) input_mode: InputMode,
    /// Visible rows in display order
    pub(crate) rows: Vec<FxOption>,
    /// Valid records loaded from the feed
    pub(crate) total: usize,
    /// Records dropped as malformed
    pub(crate) skipped: usize,
    pub(crate) view: ViewState,
    pub(crate) selected: usize,
    pub(crate) chart_cursor: usize,
    pub(crate) premium: TimeSeries,
    pub(crate) strike: TimeSeries,
    /// Record shown in the details popup, when open
    pub(crate) details: Option<FxOption>,
}

/// Blotter application state
pub struct BlotterApp {
    /// Current screen
    screen: Screen,
    /// Input focus
    input_mode: InputMode,
    /// Feed load progress
    load: LoadState,
    /// Valid records from the feed, in feed order
    trades: Vec<FxOption>,
    /// Count of malformed records dropped on load
    skipped: usize,
    /// Sort and filter parameters
    view: ViewState,
    /// Selected row index into the visible rows
    selected: usize,
    /// Chart cursor index into the visible rows
    chart_cursor: usize,
    /// Exit flag
    should_quit: bool,
    /// Feed fetch outcome channel
    feed_rx: mpsc::Receiver<FeedResult>,
}

impl BlotterApp {
    /// Create a new blotter waiting on a feed fetch.
    pub fn new(feed_rx: mpsc::Receiver<FeedResult>) -> Self {
        Self {
            screen: Screen::Blotter,
            input_mode: InputMode::Normal,
            load: LoadState::Loading,
            trades: Vec::new(),
            skipped: 0,
            view: ViewState::default(),
            selected: 0,
            chart_cursor: 0,
            should_quit: false,
            feed_rx,
        }
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Drain the feed channel without blocking the event loop.
    ///
    /// Valid records become the blotter book; malformed records are
    /// dropped, logged, and counted. A feed failure moves the blotter to
    /// the error screen.
    pub fn poll_feed(&mut self) {
        match self.feed_rx.try_recv() {
            Ok(Ok(records)) => {
                let (valid, defects) = partition_valid(&records);
                for (index, defect) in &defects {
                    warn!("skipping trade record {}: {}", index, defect);
                }
                self.skipped = defects.len();
                self.trades = valid;
                self.load = LoadState::Ready;
                self.clamp_selection();
            }
            Ok(Err(err)) => {
                error!("trade feed fetch failed: {}", err);
                self.load = LoadState::Failed(err.to_string());
            }
            Err(_) => {}
        }
    }

    /// Handle keyboard input
    pub fn handle_key(&mut self, key: KeyCode) {
        match self.input_mode {
            InputMode::Normal => self.handle_normal_key(key),
            InputMode::Filter => self.handle_filter_key(key),
            InputMode::Details => self.handle_details_key(key),
        }
    }

    fn handle_normal_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => self.screen = self.screen.next(),
            KeyCode::BackTab => self.screen = self.screen.previous(),
            KeyCode::Char('/') => {
                if self.load == LoadState::Ready {
                    self.input_mode = InputMode::Filter;
                }
            }
            KeyCode::Char(c @ '1'..='6') => {
                let index = c as usize - '1' as usize;
                self.view.toggle_sort(SortKey::ALL[index]);
            }
            KeyCode::Up | KeyCode::Char('k') => {
                if self.screen == Screen::Blotter && self.selected > 0 {
                    self.selected -= 1;
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.screen == Screen::Blotter
                    && self.selected < self.visible().len().saturating_sub(1)
                {
                    self.selected += 1;
                }
            }
            KeyCode::Left | KeyCode::Char('h') => {
                if self.screen != Screen::Blotter && self.chart_cursor > 0 {
                    self.chart_cursor -= 1;
                }
            }
            KeyCode::Right | KeyCode::Char('l') => {
                if self.screen != Screen::Blotter
                    && self.chart_cursor < self.visible().len().saturating_sub(1)
                {
                    self.chart_cursor += 1;
                }
            }
            KeyCode::Enter => {
                if self.screen == Screen::Blotter
                    && self.load == LoadState::Ready
                    && !self.visible().is_empty()
                {
                    self.input_mode = InputMode::Details;
                }
            }
            _ => {}
        }
    }

    fn handle_filter_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Enter | KeyCode::Esc => self.input_mode = InputMode::Normal,
            KeyCode::Backspace => {
                self.view.filter.pop();
            }
            KeyCode::Char(c) => self.view.filter.push(c),
            _ => {}
        }
        self.clamp_selection();
    }

    fn handle_details_key(&mut self, key: KeyCode) {
        if matches!(key, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q')) {
            self.input_mode = InputMode::Normal;
        }
    }

    /// Visible rows under the current view, in display order.
    fn visible(&self) -> Vec<&FxOption> {
        self.view.apply(&self.trades)
    }

    /// Keep row selection and chart cursor inside the visible rows.
    fn clamp_selection(&mut self) {
        let last = self.visible().len().saturating_sub(1);
        self.selected = self.selected.min(last);
        self.chart_cursor = self.chart_cursor.min(last);
    }

    /// Get a snapshot of the render state
    pub(crate) fn render_state(&self) -> RenderState {
        let rows: Vec<FxOption> = self.visible().into_iter().cloned().collect();
        let refs: Vec<&FxOption> = rows.iter().collect();
        let premium = premium_series(&refs);
        let strike = strike_series(&refs);

        let last = rows.len().saturating_sub(1);
        let selected = self.selected.min(last);
        let details = if self.input_mode == InputMode::Details {
            rows.get(selected).cloned()
        } else {
            None
        };

        RenderState {
            screen: self.screen,
            load: self.load.clone(),
            input_mode: self.input_mode,
            total: self.trades.len(),
            skipped: self.skipped,
            view: self.view.clone(),
            selected,
            chart_cursor: self.chart_cursor.min(last),
            premium,
            strike,
            details,
            rows,
        }
    }

    /// Draw the current screen
    pub(crate) fn draw(frame: &mut Frame, state: &RenderState) {
        let area = frame.size();

        // Create main layout
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Content
                Constraint::Length(3), // Footer
            ])
            .split(area);

        Self::draw_header(frame, chunks[0], state.screen);

        match &state.load {
            LoadState::Loading => screens::draw_loading(frame, chunks[1]),
            LoadState::Failed(message) => screens::draw_error(frame, chunks[1], message),
            LoadState::Ready => match state.screen {
                Screen::Blotter => screens::draw_blotter(frame, chunks[1], state),
                Screen::PremiumChart => screens::draw_premium_chart(frame, chunks[1], state),
                Screen::StrikeChart => screens::draw_strike_chart(frame, chunks[1], state),
            },
        }

        Self::draw_footer(frame, chunks[2], state);

        // The popup overlays whatever screen is behind it
        if let Some(option) = &state.details {
            screens::draw_details(frame, area, option);
        }
    }

    /// Draw header
    fn draw_header(frame: &mut Frame, area: Rect, screen: Screen) {
        let title = format!(" FX Options Blotter - {} ", screen.title());
        let header = Paragraph::new(title)
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(header, area);
    }

    /// Draw footer with keybindings
    fn draw_footer(frame: &mut Frame, area: Rect, state: &RenderState) {
        let footer_text = match (state.input_mode, state.screen) {
            (InputMode::Filter, _) => " typing filters the rows | [Enter/Esc]Done [Backspace]Delete ",
            (InputMode::Details, _) => " [Esc]Close details ",
            (InputMode::Normal, Screen::Blotter) => {
                " [Tab]Screen [1-6]Sort [/]Filter [Up/Down]Row [Enter]Details [q]Quit "
            }
            (InputMode::Normal, _) => " [Tab]Screen [1-6]Sort [Left/Right]Cursor [q]Quit ",
        };
        let footer = Paragraph::new(footer_text)
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(footer, area);
    }
}
