//! Display formatting for prices.

/// Fixed currency glyph the storefront renders prices with.
pub const CURRENCY_GLYPH: &str = "৳";

/// Render an amount as a display string: glyph prefix, thousands-grouped
/// integer part, two decimals only when the amount is fractional.
/// Non-finite and negative amounts render as zero.
pub fn format_money(amount: f64) -> String {
    let amount = if amount.is_finite() { amount.max(0.0) } else { 0.0 };

    let cents = (amount * 100.0).round() as u64;
    let whole = group_thousands(cents / 100);
    let frac = cents % 100;

    if frac == 0 {
        format!("{CURRENCY_GLYPH}{whole}")
    } else {
        format!("{CURRENCY_GLYPH}{whole}.{frac:02}")
    }
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
