//! Number formatting for metric values shown on slides

use serde::{Deserialize, Serialize};

/// Unit a metric value is displayed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricUnit {
    Currency,
    Percentage,
    /// Generating capacity, megawatts
    Capacity,
    /// Gas reserves, trillion cubic feet
    Reserves,
    Plain,
}

/// `$1.5M`, `$250.0K`, `$12.0`
pub fn format_currency(amount: f64, precision: usize) -> String {
    if amount >= 1_000_000.0 {
        format!("${:.*}M", precision, amount / 1_000_000.0)
    } else if amount >= 1_000.0 {
        format!("${:.*}K", precision, amount / 1_000.0)
    } else {
        format!("${:.*}", precision, amount)
    }
}

pub fn format_percentage(value: f64, precision: usize) -> String {
    format!("{:.*}%", precision, value)
}

pub fn format_capacity(megawatts: f64) -> String {
    format!("{} MW", megawatts)
}

pub fn format_reserves(tcf: f64) -> String {
    format!("{} TCF", tcf)
}

/// Format a value in the given unit with the default precision of 1
pub fn format_metric(value: f64, unit: MetricUnit) -> String {
    match unit {
        MetricUnit::Currency => format_currency(value, 1),
        MetricUnit::Percentage => format_percentage(value, 1),
        MetricUnit::Capacity => format_capacity(value),
        MetricUnit::Reserves => format_reserves(value),
        MetricUnit::Plain => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_scales() {
        assert_eq!(format_currency(1_500_000.0, 1), "$1.5M");
        assert_eq!(format_currency(250_000.0, 1), "$250.0K");
        assert_eq!(format_currency(12.0, 1), "$12.0");
        assert_eq!(format_currency(2_345_678.0, 2), "$2.35M");
    }

    #[test]
    fn test_other_units() {
        assert_eq!(format_percentage(18.26, 1), "18.3%");
        assert_eq!(format_capacity(400.0), "400 MW");
        assert_eq!(format_reserves(2.5), "2.5 TCF");
        assert_eq!(format_metric(3.0, MetricUnit::Plain), "3");
    }
}
