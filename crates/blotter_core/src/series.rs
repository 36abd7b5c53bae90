//! Chart series derived from the visible trade rows.
//!
//! The blotter plots premium payment amounts and strike rates over the
//! visible rows. The feed delivers dates as strings and the blotter never
//! parses them, so the x axis is the display position of each row; the
//! date strings are kept alongside the values for axis labels and the
//! cursor readout.

use crate::types::trade::FxOption;

/// A charted series over the visible rows.
///
/// `dates[i]` and `values[i]` describe the row at display position `i`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimeSeries {
    /// Premium payment date of each row, in display order.
    pub dates: Vec<String>,
    /// Charted value of each row, in display order.
    pub values: Vec<f64>,
}

impl TimeSeries {
    /// Number of points in the series.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when the series has no points.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Convert to chart data format, x being the display position.
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.values
            .iter()
            .enumerate()
            .map(|(i, v)| (i as f64, *v))
            .collect()
    }

    /// Get min/max display positions for X axis bounds.
    ///
    /// A series of zero or one points still spans a unit interval so the
    /// chart always has a drawable domain.
    pub fn x_bounds(&self) -> [f64; 2] {
        let last = self.values.len().saturating_sub(1).max(1);
        [0.0, last as f64]
    }

    /// Get padded min/max values for Y axis bounds.
    ///
    /// An empty series spans `[0, 1]`; a flat series is padded around its
    /// level so the line never sits on the chart border.
    pub fn y_bounds(&self) -> [f64; 2] {
        if self.values.is_empty() {
            return [0.0, 1.0];
        }
        let min = self.values.iter().copied().fold(f64::MAX, f64::min);
        let max = self.values.iter().copied().fold(f64::MIN, f64::max);
        let span = max - min;
        let pad = if span > 0.0 {
            span * 0.1
        } else {
            (max.abs() * 0.1).max(1.0)
        };
        [min - pad, max + pad]
    }

    /// Date labels for the X axis: first, middle, and last point.
    pub fn date_labels(&self) -> Vec<String> {
        match self.dates.len() {
            0 => Vec::new(),
            1 => vec![self.dates[0].clone()],
            2 => vec![self.dates[0].clone(), self.dates[1].clone()],
            n => vec![
                self.dates[0].clone(),
                self.dates[n / 2].clone(),
                self.dates[n - 1].clone(),
            ],
        }
    }

    /// Date and value of the point at a display position, if present.
    pub fn at(&self, index: usize) -> Option<(&str, f64)> {
        let date = self.dates.get(index)?;
        let value = self.values.get(index)?;
        Some((date.as_str(), *value))
    }
}

/// Premium payment amounts of the visible rows, in display order.
pub fn premium_series(rows: &[&FxOption]) -> TimeSeries {
    TimeSeries {
        dates: rows
            .iter()
            .map(|r| r.premium_payment_date.clone())
            .collect(),
        values: rows.iter().map(|r| r.premium_payment_amount).collect(),
    }
}

/// Strike rates of the visible rows, in display order.
pub fn strike_series(rows: &[&FxOption]) -> TimeSeries {
    TimeSeries {
        dates: rows
            .iter()
            .map(|r| r.premium_payment_date.clone())
            .collect(),
        values: rows.iter().map(|r| r.strike_rate).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::trade::BuySell;
    use approx::assert_relative_eq;

    fn option(date: &str, amount: f64, strike: f64) -> FxOption {
        FxOption {
            buy_sell: BuySell::Buy,
            underlying_instrument_name: "EURUSD".to_string(),
            base_currency: "EUR".to_string(),
            premium_payment_date: date.to_string(),
            premium_payment_amount: amount,
            strike_rate: strike,
        }
    }

    fn sample_rows() -> Vec<FxOption> {
        vec![
            option("2024-07-01", 5000.0, 1.0850),
            option("2024-08-01", 1200.0, 1.0900),
            option("2024-09-01", 750.5, 1.1000),
        ]
    }

    #[test]
    fn test_premium_series_follows_display_order() {
        let rows = sample_rows();
        let refs: Vec<&FxOption> = rows.iter().collect();
        let series = premium_series(&refs);
        assert_eq!(series.values, vec![5000.0, 1200.0, 750.5]);
        assert_eq!(
            series.dates,
            vec!["2024-07-01", "2024-08-01", "2024-09-01"]
        );
    }

    #[test]
    fn test_strike_series_follows_display_order() {
        let rows = sample_rows();
        let refs: Vec<&FxOption> = rows.iter().collect();
        let series = strike_series(&refs);
        assert_eq!(series.values, vec![1.0850, 1.0900, 1.1000]);
    }

    #[test]
    fn test_points_use_display_positions() {
        let rows = sample_rows();
        let refs: Vec<&FxOption> = rows.iter().collect();
        let points = premium_series(&refs).points();
        assert_eq!(points.len(), 3);
        assert_relative_eq!(points[0].0, 0.0);
        assert_relative_eq!(points[2].0, 2.0);
        assert_relative_eq!(points[2].1, 750.5);
    }

    #[test]
    fn test_x_bounds_span_the_rows() {
        let rows = sample_rows();
        let refs: Vec<&FxOption> = rows.iter().collect();
        assert_eq!(premium_series(&refs).x_bounds(), [0.0, 2.0]);
    }

    #[test]
    fn test_x_bounds_of_single_point_are_drawable() {
        let series = TimeSeries {
            dates: vec!["2024-07-01".to_string()],
            values: vec![5000.0],
        };
        assert_eq!(series.x_bounds(), [0.0, 1.0]);
    }

    #[test]
    fn test_y_bounds_pad_the_range() {
        let series = TimeSeries {
            dates: Vec::new(),
            values: vec![100.0, 200.0],
        };
        let [lo, hi] = series.y_bounds();
        assert_relative_eq!(lo, 90.0);
        assert_relative_eq!(hi, 210.0);
    }

    #[test]
    fn test_y_bounds_of_flat_series_keep_line_off_border() {
        let series = TimeSeries {
            dates: Vec::new(),
            values: vec![1.0850, 1.0850],
        };
        let [lo, hi] = series.y_bounds();
        assert!(lo < 1.0850);
        assert!(hi > 1.0850);
    }

    #[test]
    fn test_y_bounds_of_empty_series_default() {
        assert_eq!(TimeSeries::default().y_bounds(), [0.0, 1.0]);
    }

    #[test]
    fn test_date_labels_first_middle_last() {
        let series = TimeSeries {
            dates: vec![
                "2024-07-01".to_string(),
                "2024-08-01".to_string(),
                "2024-09-01".to_string(),
                "2024-10-01".to_string(),
                "2024-11-01".to_string(),
            ],
            values: vec![1.0; 5],
        };
        assert_eq!(
            series.date_labels(),
            vec!["2024-07-01", "2024-09-01", "2024-11-01"]
        );
    }

    #[test]
    fn test_date_labels_short_series() {
        assert!(TimeSeries::default().date_labels().is_empty());

        let one = TimeSeries {
            dates: vec!["2024-07-01".to_string()],
            values: vec![1.0],
        };
        assert_eq!(one.date_labels(), vec!["2024-07-01"]);
    }

    #[test]
    fn test_at_reads_back_points() {
        let rows = sample_rows();
        let refs: Vec<&FxOption> = rows.iter().collect();
        let series = strike_series(&refs);
        assert_eq!(series.at(1), Some(("2024-08-01", 1.0900)));
        assert_eq!(series.at(3), None);
    }

    #[test]
    fn test_len_and_is_empty() {
        assert!(TimeSeries::default().is_empty());
        let rows = sample_rows();
        let refs: Vec<&FxOption> = rows.iter().collect();
        assert_eq!(premium_series(&refs).len(), 3);
    }
}
