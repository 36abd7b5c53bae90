//! # FX Blotter TUI
//!
//! Terminal blotter for FX option trades served by the trade feed.
//!
//! Uses ratatui for rendering and crossterm for terminal handling.
//!
//! ## Screens
//! - **Blotter**: Sortable, filterable trade table with a details popup
//! - **PremiumChart**: Premium payment amounts across the visible rows
//! - **StrikeChart**: Strike rates across the visible rows
//!
//! ## Keys
//! - `Tab` / `Shift-Tab` cycle screens, `q` or `Esc` quits
//! - `1`-`6` sort by column, pressing the active column flips the order
//! - `/` edits the filter, `Enter` opens row details
//! - `Up`/`Down` move the row selection, `Left`/`Right` the chart cursor

pub mod app;
pub mod config;
pub mod screens;
pub mod tui;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::app::{spawn_feed_fetch, BlotterApp, LoadState, Screen};
    pub use crate::config::BlotterConfig;
    pub use crate::tui::Tui;
    pub use adapter_trades::FeedClient;
}
