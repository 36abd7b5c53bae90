//! # adapter_trades: Trade Feed Adapter for the FX Blotter
//!
//! ## Adapter Layer Role
//!
//! adapter_trades is the input boundary of the 3-layer blotter
//! architecture, providing:
//! - An async HTTP client for the trade feed (`client`)
//! - Typed feed errors separating transport, status, and decode failures
//!   (`error`)
//!
//! The adapter fetches raw [`blotter_core::types::TradeEnvelope`] batches
//! and leaves per-record validation to the kernel, so a single bad record
//! never fails a whole fetch.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod client;
pub mod error;

pub use client::FeedClient;
pub use error::FeedError;
