//! Currency formatting utilities
//!
//! Message text always shows monetary amounts with two decimal places and
//! comma-grouped thousands, prefixed with the taka sign where the template
//! calls for it.

/// Taka currency sign used in customer-facing messages
pub const TAKA_SIGN: &str = "৳";

/// Format an amount with two decimal places and thousands grouping
/// (e.g. 1234.5 -> "1,234.50")
pub fn format_amount(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}{}.{:02}", sign, group_thousands(whole), frac)
}

/// Format an amount with the taka sign prefix (e.g. 40.0 -> "৳40.00")
pub fn format_taka(amount: f64) -> String {
    format!("{}{}", TAKA_SIGN, format_amount(amount))
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
