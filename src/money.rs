//! Money helpers shared by billing, normalization and export.

/// Tax rate applied to every bill subtotal.
pub const TAX_RATE: f64 = 0.05;

/// Currency symbol prefixed to every formatted amount.
pub const CURRENCY_SYMBOL: &str = "₹";

/// Round to 2 decimal places, halves rounding away from zero.
///
/// Applied when totals are computed, not when they are displayed, so
/// serialized and displayed values always agree.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Format an amount for display: fixed symbol, always 2 decimals.
pub fn format_currency(value: f64) -> String {
    format!("{}{:.2}", CURRENCY_SYMBOL, value)
}
