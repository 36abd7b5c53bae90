//! Error types for structured error handling.
//!
//! This module provides:
//! - `MalformedTrade`: Errors from validating a wire trade record

use thiserror::Error;

/// Malformed trade record errors.
///
/// A wire record always deserializes, whatever shape it arrives in; this
/// error is produced when the validated `fxOption` payload cannot be
/// extracted from it.
///
/// # Variants
/// - `MissingField`: A level of the nested wire shape, or a leaf field, is absent
/// - `InvalidBuySell`: The `buySell` field holds an unrecognised value
///
/// # Examples
/// ```
/// use blotter_core::types::MalformedTrade;
///
/// let err = MalformedTrade::MissingField("tradeMessage.trade.product");
/// assert_eq!(
///     format!("{}", err),
///     "missing field `tradeMessage.trade.product`"
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedTrade {
    /// A level of the nested wire shape, or a leaf field, is absent.
    ///
    /// Carries the dotted path of the first missing segment, e.g.
    /// `tradeMessage.trade.product.fxOption.strikeRate`.
    #[error("missing field `{0}`")]
    MissingField(&'static str),

    /// The `buySell` field holds a value other than `Buy` or `Sell`.
    #[error("unrecognised buySell value `{0}`")]
    InvalidBuySell(String),
}

impl MalformedTrade {
    /// Check if the error is due to a missing field or path segment.
    pub fn is_missing_field(&self) -> bool {
        matches!(self, MalformedTrade::MissingField(_))
    }
}
