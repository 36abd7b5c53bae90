//! Sort and filter state for the blotter table.
//!
//! This module provides:
//! - `SortKey`: The sortable columns of the trade table
//! - `SortOrder`: Ascending or descending direction
//! - `ViewState`: The immutable view parameters and the pure
//!   sort-then-filter pipeline applied to the loaded records
//!
//! The pipeline never mutates the loaded records; every call to
//! [`ViewState::apply`] derives a fresh row set, so the view can be
//! recomputed on each frame from the same source data.

use std::cmp::Ordering;

use crate::types::trade::FxOption;

/// Sortable columns of the trade table.
///
/// Numeric columns compare numerically (`2.0` sorts before `10.0`);
/// string columns compare by ordinal string order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Side of the trade.
    BuySell,
    /// Currency-pair instrument name.
    UnderlyingInstrumentName,
    /// Base currency code.
    BaseCurrency,
    /// Premium payment date string.
    PremiumPaymentDate,
    /// Premium payment amount.
    PremiumPaymentAmount,
    /// Strike rate.
    StrikeRate,
}

impl SortKey {
    /// All sortable columns in table display order.
    pub const ALL: [SortKey; 6] = [
        SortKey::BuySell,
        SortKey::UnderlyingInstrumentName,
        SortKey::BaseCurrency,
        SortKey::PremiumPaymentDate,
        SortKey::PremiumPaymentAmount,
        SortKey::StrikeRate,
    ];

    /// Returns the column header label.
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::BuySell => "Buy/Sell",
            SortKey::UnderlyingInstrumentName => "Underlying Instrument",
            SortKey::BaseCurrency => "Base Currency",
            SortKey::PremiumPaymentDate => "Premium Payment Date",
            SortKey::PremiumPaymentAmount => "Premium Payment Amount",
            SortKey::StrikeRate => "Strike Rate",
        }
    }

    /// Compares two records on this column, ascending.
    ///
    /// Floating-point columns use `f64::total_cmp`, so every pair of values
    /// has a defined order and sorting never panics.
    pub fn compare(&self, a: &FxOption, b: &FxOption) -> Ordering {
        match self {
            SortKey::BuySell => a.buy_sell.as_str().cmp(b.buy_sell.as_str()),
            SortKey::UnderlyingInstrumentName => a
                .underlying_instrument_name
                .cmp(&b.underlying_instrument_name),
            SortKey::BaseCurrency => a.base_currency.cmp(&b.base_currency),
            SortKey::PremiumPaymentDate => a.premium_payment_date.cmp(&b.premium_payment_date),
            SortKey::PremiumPaymentAmount => a
                .premium_payment_amount
                .total_cmp(&b.premium_payment_amount),
            SortKey::StrikeRate => a.strike_rate.total_cmp(&b.strike_rate),
        }
    }
}

/// Direction of a column sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Smallest value first.
    Asc,
    /// Largest value first.
    Desc,
}

impl SortOrder {
    /// Returns the opposite direction.
    pub fn flipped(&self) -> SortOrder {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }

    /// Returns the header arrow shown next to the sorted column.
    pub fn arrow(&self) -> &'static str {
        match self {
            SortOrder::Asc => "↑",
            SortOrder::Desc => "↓",
        }
    }
}

/// View parameters of the trade table.
///
/// Holds the active sort column, sort direction, and filter text. The
/// loaded records are never reordered in place; [`ViewState::apply`]
/// derives the visible rows from them on demand.
///
/// # Examples
///
/// ```
/// use blotter_core::view::{SortKey, SortOrder, ViewState};
///
/// let mut view = ViewState::default();
/// assert_eq!(view.sort_key, SortKey::UnderlyingInstrumentName);
/// assert_eq!(view.sort_order, SortOrder::Asc);
///
/// // Selecting the active column flips the direction.
/// view.toggle_sort(SortKey::UnderlyingInstrumentName);
/// assert_eq!(view.sort_order, SortOrder::Desc);
///
/// // Selecting another column restarts ascending.
/// view.toggle_sort(SortKey::StrikeRate);
/// assert_eq!(view.sort_key, SortKey::StrikeRate);
/// assert_eq!(view.sort_order, SortOrder::Asc);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    /// Active sort column.
    pub sort_key: SortKey,
    /// Active sort direction.
    pub sort_order: SortOrder,
    /// Case-insensitive filter text, empty for no filter.
    pub filter: String,
}

impl Default for ViewState {
    /// Instrument name ascending with no filter.
    fn default() -> Self {
        ViewState {
            sort_key: SortKey::UnderlyingInstrumentName,
            sort_order: SortOrder::Asc,
            filter: String::new(),
        }
    }
}

impl ViewState {
    /// Selects a sort column.
    ///
    /// Selecting the active column flips the direction; selecting a new
    /// column makes it active and restarts ascending.
    pub fn toggle_sort(&mut self, key: SortKey) {
        if self.sort_key == key {
            self.sort_order = self.sort_order.flipped();
        } else {
            self.sort_key = key;
            self.sort_order = SortOrder::Asc;
        }
    }

    /// Checks whether a record matches the filter text.
    ///
    /// The match is a case-insensitive substring test against the
    /// instrument name or the base currency. An empty filter matches
    /// every record.
    pub fn matches(&self, option: &FxOption) -> bool {
        let needle = self.filter.to_lowercase();
        option
            .underlying_instrument_name
            .to_lowercase()
            .contains(&needle)
            || option.base_currency.to_lowercase().contains(&needle)
    }

    /// Derives the visible rows: sort first, then filter.
    ///
    /// The sort is stable, so records with equal keys keep their feed
    /// order, and filtering afterwards preserves the sorted order of the
    /// surviving rows.
    pub fn apply<'a>(&self, options: &'a [FxOption]) -> Vec<&'a FxOption> {
        let mut rows: Vec<&FxOption> = options.iter().collect();
        rows.sort_by(|a, b| {
            let ordering = self.sort_key.compare(a, b);
            match self.sort_order {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            }
        });
        rows.retain(|option| self.matches(option));
        rows
    }
}
