//! # blotter_core: Data Model and View Pipeline for the FX Blotter
//!
//! ## Kernel Layer Role
//!
//! blotter_core serves as the kernel of the 3-layer blotter architecture,
//! providing:
//! - Wire-shape trade records and validated FX options (`types::trade`)
//! - Malformed-record error types (`types::error`)
//! - Sort key, sort order, and filter state (`view`)
//! - Chart series derived from the visible rows (`series`)
//!
//! ## Zero I/O Principle
//!
//! The kernel performs no network or terminal I/O and never depends on the
//! adapter or service crates, with minimal external dependencies:
//! - serde / serde_json: Wire model for the trade feed
//! - thiserror: Structured error types
//!
//! Every sort, filter, and series rule is therefore testable without a
//! running trade feed or a terminal.
//!
//! ## Usage Examples
//!
//! ```rust
//! use blotter_core::types::{BuySell, FxOption};
//! use blotter_core::view::ViewState;
//!
//! let trades = vec![FxOption {
//!     buy_sell: BuySell::Buy,
//!     underlying_instrument_name: "EURUSD".to_string(),
//!     base_currency: "EUR".to_string(),
//!     premium_payment_date: "2024-07-15".to_string(),
//!     premium_payment_amount: 5_000.0,
//!     strike_rate: 1.0850,
//! }];
//!
//! // Default view: sorted by instrument name ascending, no filter.
//! let view = ViewState::default();
//! let visible = view.apply(&trades);
//! assert_eq!(visible.len(), 1);
//! assert_eq!(visible[0].underlying_instrument_name, "EURUSD");
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod series;
pub mod types;
pub mod view;

#[cfg(test)]
mod tests {
    #[test]
    fn it_works() {
        assert_eq!(2 + 2, 4);
    }
}
