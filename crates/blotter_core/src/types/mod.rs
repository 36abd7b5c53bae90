//! Trade record and error types.
//!
//! This module provides:
//! - `trade`: The nested wire shape delivered by the trade feed and the
//!   validated flat [`FxOption`] record extracted from it
//! - `error`: Structured error types for malformed trade records
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`TradeEnvelope`], [`FxOption`], [`BuySell`] from `trade`
//! - [`MalformedTrade`] from `error`

pub mod error;
pub mod trade;

// Re-export commonly used types at module level
pub use error::MalformedTrade;
pub use trade::{BuySell, FxOption, TradeEnvelope};
