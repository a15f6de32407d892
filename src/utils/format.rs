//! Display formatting helpers
//!
//! Presentation-only helpers for callers that render results. The
//! calculation contract itself returns raw numbers.

/// Format a cost amount with a currency symbol
///
/// Small amounts keep enough precision to stay meaningful; large amounts
/// collapse to K/M suffixes.
pub fn format_cost(amount: f64, symbol: &str) -> String {
    if amount >= 1_000_000.0 {
        format!("{}{:.2}M", symbol, amount / 1_000_000.0)
    } else if amount >= 1_000.0 {
        format!("{}{:.2}K", symbol, amount / 1_000.0)
    } else if amount >= 1.0 {
        format!("{}{:.2}", symbol, amount)
    } else if amount >= 0.01 {
        format!("{}{:.4}", symbol, amount)
    } else {
        format!("{}{:.6}", symbol, amount)
    }
}

/// Format a token or unit count with K/M suffixes
pub fn format_count(value: f64) -> String {
    if value >= 1_000_000.0 {
        format!("{:.1}M", value / 1_000_000.0)
    } else if value >= 1_000.0 {
        format!("{:.1}K", value / 1_000.0)
    } else {
        format!("{:.0}", value)
    }
}
