//! Trade record types for the blotter feed.
//!
//! The feed delivers an array of nested wire records
//! (`tradeMessage.trade.product.fxOption`). Every level of the nest is
//! optional so that a malformed record still deserializes; extraction into
//! the flat, fully-typed [`FxOption`] happens through
//! [`TradeEnvelope::fx_option`] and reports the first defect it finds.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::MalformedTrade;

/// Side of an FX option trade.
///
/// # Examples
///
/// ```
/// use blotter_core::types::BuySell;
///
/// assert_eq!(BuySell::Buy.as_str(), "Buy");
/// assert_eq!("sell".parse::<BuySell>().unwrap(), BuySell::Sell);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BuySell {
    /// We bought the option.
    Buy,
    /// We sold the option.
    Sell,
}

impl BuySell {
    /// Returns the wire spelling of the side.
    pub fn as_str(&self) -> &'static str {
        match self {
            BuySell::Buy => "Buy",
            BuySell::Sell => "Sell",
        }
    }
}

impl FromStr for BuySell {
    type Err = MalformedTrade;

    /// Parses a wire `buySell` value (case-insensitive).
    ///
    /// # Examples
    ///
    /// ```
    /// use blotter_core::types::BuySell;
    ///
    /// let buy: BuySell = "Buy".parse().unwrap();
    /// assert_eq!(buy, BuySell::Buy);
    ///
    /// // Unknown side returns error
    /// let result: Result<BuySell, _> = "Hold".parse();
    /// assert!(result.is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, MalformedTrade> {
        match s.to_uppercase().as_str() {
            "BUY" => Ok(BuySell::Buy),
            "SELL" => Ok(BuySell::Sell),
            _ => Err(MalformedTrade::InvalidBuySell(s.to_string())),
        }
    }
}

impl fmt::Display for BuySell {
    /// Formats as the wire spelling.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A validated FX option record, flattened from the wire shape.
///
/// Field order follows the wire payload so the details view serializes in
/// the order a feed consumer expects.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FxOption {
    /// Side of the trade.
    pub buy_sell: BuySell,
    /// Currency-pair instrument name, e.g. `EURUSD`.
    pub underlying_instrument_name: String,
    /// Base currency code of the pair, e.g. `EUR`.
    pub base_currency: String,
    /// Premium payment date as delivered by the feed (`YYYY-MM-DD`).
    pub premium_payment_date: String,
    /// Premium payment amount in base-currency units.
    pub premium_payment_amount: f64,
    /// Strike rate of the option.
    pub strike_rate: f64,
}

impl FxOption {
    /// Pretty-printed JSON rendering of the record for the details view.
    pub fn pretty_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

/// Wire envelope for one trade record.
///
/// The feed nests the payload as `tradeMessage.trade.product.fxOption`.
/// Every level is an `Option` so a record with missing levels still
/// deserializes; call [`TradeEnvelope::fx_option`] to extract and validate
/// the payload.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeEnvelope {
    /// Outermost wire level.
    pub trade_message: Option<TradeMessage>,
}

/// Wire level `tradeMessage`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TradeMessage {
    /// Wire level `tradeMessage.trade`.
    pub trade: Option<Trade>,
}

/// Wire level `tradeMessage.trade`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Trade {
    /// Wire level `tradeMessage.trade.product`.
    pub product: Option<Product>,
}

/// Wire level `tradeMessage.trade.product`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Wire level `tradeMessage.trade.product.fxOption`.
    pub fx_option: Option<RawFxOption>,
}

/// Unvalidated `fxOption` payload as it arrives on the wire.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawFxOption {
    /// Side of the trade, expected `Buy` or `Sell`.
    pub buy_sell: Option<String>,
    /// Currency-pair instrument name.
    pub underlying_instrument_name: Option<String>,
    /// Base currency code of the pair.
    pub base_currency: Option<String>,
    /// Premium payment date string.
    pub premium_payment_date: Option<String>,
    /// Premium payment amount.
    pub premium_payment_amount: Option<f64>,
    /// Strike rate.
    pub strike_rate: Option<f64>,
}

impl TradeEnvelope {
    /// Extracts and validates the `fxOption` payload.
    ///
    /// Fails with the dotted path of the first missing wire level or leaf
    /// field, or with [`MalformedTrade::InvalidBuySell`] when the side does
    /// not parse.
    ///
    /// # Examples
    ///
    /// ```
    /// use blotter_core::types::{BuySell, TradeEnvelope};
    ///
    /// let record = r#"{
    ///     "tradeMessage": { "trade": { "product": { "fxOption": {
    ///         "buySell": "Buy",
    ///         "underlyingInstrumentName": "EURUSD",
    ///         "baseCurrency": "EUR",
    ///         "premiumPaymentDate": "2024-07-15",
    ///         "premiumPaymentAmount": 5000.0,
    ///         "strikeRate": 1.0850
    ///     } } } }
    /// }"#;
    ///
    /// let envelope: TradeEnvelope = serde_json::from_str(record).unwrap();
    /// let option = envelope.fx_option().unwrap();
    /// assert_eq!(option.buy_sell, BuySell::Buy);
    /// assert_eq!(option.underlying_instrument_name, "EURUSD");
    /// ```
    pub fn fx_option(&self) -> Result<FxOption, MalformedTrade> {
        let message = self
            .trade_message
            .as_ref()
            .ok_or(MalformedTrade::MissingField("tradeMessage"))?;
        let trade = message
            .trade
            .as_ref()
            .ok_or(MalformedTrade::MissingField("tradeMessage.trade"))?;
        let product = trade
            .product
            .as_ref()
            .ok_or(MalformedTrade::MissingField("tradeMessage.trade.product"))?;
        let raw = product
            .fx_option
            .as_ref()
            .ok_or(MalformedTrade::MissingField(
                "tradeMessage.trade.product.fxOption",
            ))?;
        raw.validate()
    }
}

impl RawFxOption {
    fn validate(&self) -> Result<FxOption, MalformedTrade> {
        let buy_sell = self
            .buy_sell
            .as_deref()
            .ok_or(MalformedTrade::MissingField(
                "tradeMessage.trade.product.fxOption.buySell",
            ))?
            .parse()?;
        let underlying_instrument_name = self
            .underlying_instrument_name
            .clone()
            .ok_or(MalformedTrade::MissingField(
                "tradeMessage.trade.product.fxOption.underlyingInstrumentName",
            ))?;
        let base_currency = self
            .base_currency
            .clone()
            .ok_or(MalformedTrade::MissingField(
                "tradeMessage.trade.product.fxOption.baseCurrency",
            ))?;
        let premium_payment_date = self
            .premium_payment_date
            .clone()
            .ok_or(MalformedTrade::MissingField(
                "tradeMessage.trade.product.fxOption.premiumPaymentDate",
            ))?;
        let premium_payment_amount =
            self.premium_payment_amount
                .ok_or(MalformedTrade::MissingField(
                    "tradeMessage.trade.product.fxOption.premiumPaymentAmount",
                ))?;
        let strike_rate = self.strike_rate.ok_or(MalformedTrade::MissingField(
            "tradeMessage.trade.product.fxOption.strikeRate",
        ))?;

        Ok(FxOption {
            buy_sell,
            underlying_instrument_name,
            base_currency,
            premium_payment_date,
            premium_payment_amount,
            strike_rate,
        })
    }
}

/// Splits a batch of wire records into validated options and the defects
/// of the records that failed validation, each defect paired with the
/// batch position of its record.
///
/// Output order follows input order on both sides, so the blotter shows
/// valid records in feed order and logs defects in feed order.
///
/// # Examples
///
/// ```
/// use blotter_core::types::trade::partition_valid;
/// use blotter_core::types::TradeEnvelope;
///
/// let records: Vec<TradeEnvelope> = serde_json::from_str(
///     r#"[
///         { "tradeMessage": { "trade": { "product": { "fxOption": {
///             "buySell": "Sell",
///             "underlyingInstrumentName": "AUDUSD",
///             "baseCurrency": "AUD",
///             "premiumPaymentDate": "2024-08-01",
///             "premiumPaymentAmount": 1200.0,
///             "strikeRate": 0.6650
///         } } } } },
///         { "tradeMessage": null }
///     ]"#,
/// )
/// .unwrap();
///
/// let (valid, defects) = partition_valid(&records);
/// assert_eq!(valid.len(), 1);
/// assert_eq!(defects.len(), 1);
/// ```
pub fn partition_valid(records: &[TradeEnvelope]) -> (Vec<FxOption>, Vec<(usize, MalformedTrade)>) {
    let mut valid = Vec::with_capacity(records.len());
    let mut defects = Vec::new();
    for (index, record) in records.iter().enumerate() {
        match record.fx_option() {
            Ok(option) => valid.push(option),
            Err(defect) => defects.push((index, defect)),
        }
    }
    (valid, defects)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_record() -> &'static str {
        r#"{
            "tradeMessage": { "trade": { "product": { "fxOption": {
                "buySell": "Buy",
                "underlyingInstrumentName": "EURUSD",
                "baseCurrency": "EUR",
                "premiumPaymentDate": "2024-07-15",
                "premiumPaymentAmount": 5000.0,
                "strikeRate": 1.0850
            } } } }
        }"#
    }

    #[test]
    fn test_buy_sell_as_str() {
        assert_eq!(BuySell::Buy.as_str(), "Buy");
        assert_eq!(BuySell::Sell.as_str(), "Sell");
    }

    #[test]
    fn test_buy_sell_from_str() {
        assert_eq!("Buy".parse::<BuySell>().unwrap(), BuySell::Buy);
        assert_eq!("Sell".parse::<BuySell>().unwrap(), BuySell::Sell);
    }

    #[test]
    fn test_buy_sell_from_str_case_insensitive() {
        assert_eq!("buy".parse::<BuySell>().unwrap(), BuySell::Buy);
        assert_eq!("SELL".parse::<BuySell>().unwrap(), BuySell::Sell);
    }

    #[test]
    fn test_buy_sell_from_str_unknown() {
        let result = "Hold".parse::<BuySell>();
        match result {
            Err(MalformedTrade::InvalidBuySell(value)) => assert_eq!(value, "Hold"),
            other => panic!("Expected InvalidBuySell, got {:?}", other),
        }
    }

    #[test]
    fn test_buy_sell_display() {
        assert_eq!(format!("{}", BuySell::Buy), "Buy");
        assert_eq!(format!("{}", BuySell::Sell), "Sell");
    }

    #[test]
    fn test_full_record_extracts() {
        let envelope: TradeEnvelope = serde_json::from_str(full_record()).unwrap();
        let option = envelope.fx_option().unwrap();
        assert_eq!(option.buy_sell, BuySell::Buy);
        assert_eq!(option.underlying_instrument_name, "EURUSD");
        assert_eq!(option.base_currency, "EUR");
        assert_eq!(option.premium_payment_date, "2024-07-15");
        assert!((option.premium_payment_amount - 5000.0).abs() < 1e-12);
        assert!((option.strike_rate - 1.0850).abs() < 1e-12);
    }

    #[test]
    fn test_empty_record_reports_outermost_level() {
        let envelope: TradeEnvelope = serde_json::from_str("{}").unwrap();
        assert_eq!(
            envelope.fx_option(),
            Err(MalformedTrade::MissingField("tradeMessage"))
        );
    }

    #[test]
    fn test_null_level_reports_that_level() {
        let envelope: TradeEnvelope =
            serde_json::from_str(r#"{ "tradeMessage": { "trade": null } }"#).unwrap();
        assert_eq!(
            envelope.fx_option(),
            Err(MalformedTrade::MissingField("tradeMessage.trade"))
        );
    }

    #[test]
    fn test_missing_product_reports_product() {
        let envelope: TradeEnvelope =
            serde_json::from_str(r#"{ "tradeMessage": { "trade": {} } }"#).unwrap();
        assert_eq!(
            envelope.fx_option(),
            Err(MalformedTrade::MissingField("tradeMessage.trade.product"))
        );
    }

    #[test]
    fn test_missing_fx_option_reports_fx_option() {
        let envelope: TradeEnvelope =
            serde_json::from_str(r#"{ "tradeMessage": { "trade": { "product": {} } } }"#).unwrap();
        assert_eq!(
            envelope.fx_option(),
            Err(MalformedTrade::MissingField(
                "tradeMessage.trade.product.fxOption"
            ))
        );
    }

    #[test]
    fn test_missing_leaf_field_reports_dotted_path() {
        let record = r#"{
            "tradeMessage": { "trade": { "product": { "fxOption": {
                "buySell": "Buy",
                "underlyingInstrumentName": "EURUSD",
                "baseCurrency": "EUR",
                "premiumPaymentDate": "2024-07-15",
                "premiumPaymentAmount": 5000.0
            } } } }
        }"#;
        let envelope: TradeEnvelope = serde_json::from_str(record).unwrap();
        assert_eq!(
            envelope.fx_option(),
            Err(MalformedTrade::MissingField(
                "tradeMessage.trade.product.fxOption.strikeRate"
            ))
        );
    }

    #[test]
    fn test_invalid_buy_sell_reports_value() {
        let record = r#"{
            "tradeMessage": { "trade": { "product": { "fxOption": {
                "buySell": "Hold",
                "underlyingInstrumentName": "EURUSD",
                "baseCurrency": "EUR",
                "premiumPaymentDate": "2024-07-15",
                "premiumPaymentAmount": 5000.0,
                "strikeRate": 1.0850
            } } } }
        }"#;
        let envelope: TradeEnvelope = serde_json::from_str(record).unwrap();
        assert_eq!(
            envelope.fx_option(),
            Err(MalformedTrade::InvalidBuySell("Hold".to_string()))
        );
    }

    #[test]
    fn test_unknown_wire_fields_are_ignored() {
        let record = r#"{
            "tradeMessage": {
                "header": { "messageId": "M-1" },
                "trade": { "tradeDate": "2024-07-01", "product": { "fxOption": {
                    "buySell": "Sell",
                    "underlyingInstrumentName": "GBPJPY",
                    "baseCurrency": "GBP",
                    "premiumPaymentDate": "2024-09-30",
                    "premiumPaymentAmount": 750.5,
                    "strikeRate": 185.25,
                    "expiryDate": "2024-12-31"
                } } }
            }
        }"#;
        let envelope: TradeEnvelope = serde_json::from_str(record).unwrap();
        let option = envelope.fx_option().unwrap();
        assert_eq!(option.buy_sell, BuySell::Sell);
        assert_eq!(option.underlying_instrument_name, "GBPJPY");
    }

    #[test]
    fn test_partition_valid_keeps_feed_order() {
        let records: Vec<TradeEnvelope> = vec![
            serde_json::from_str(full_record()).unwrap(),
            serde_json::from_str(r#"{ "tradeMessage": {} }"#).unwrap(),
            serde_json::from_str(
                r#"{
                    "tradeMessage": { "trade": { "product": { "fxOption": {
                        "buySell": "Sell",
                        "underlyingInstrumentName": "AUDUSD",
                        "baseCurrency": "AUD",
                        "premiumPaymentDate": "2024-08-01",
                        "premiumPaymentAmount": 1200.0,
                        "strikeRate": 0.6650
                    } } } }
                }"#,
            )
            .unwrap(),
        ];

        let (valid, defects) = partition_valid(&records);
        assert_eq!(valid.len(), 2);
        assert_eq!(valid[0].underlying_instrument_name, "EURUSD");
        assert_eq!(valid[1].underlying_instrument_name, "AUDUSD");
        assert_eq!(
            defects,
            vec![(1, MalformedTrade::MissingField("tradeMessage.trade"))]
        );
    }

    #[test]
    fn test_pretty_json_uses_wire_field_names() {
        let envelope: TradeEnvelope = serde_json::from_str(full_record()).unwrap();
        let option = envelope.fx_option().unwrap();
        let dump = option.pretty_json();
        assert!(dump.contains("\"buySell\": \"Buy\""));
        assert!(dump.contains("\"underlyingInstrumentName\": \"EURUSD\""));
        assert!(dump.contains("\"baseCurrency\": \"EUR\""));
        assert!(dump.contains("\"premiumPaymentDate\": \"2024-07-15\""));
        assert!(dump.contains("\"premiumPaymentAmount\": 5000.0"));
        assert!(dump.contains("\"strikeRate\": 1.085"));
    }
}
