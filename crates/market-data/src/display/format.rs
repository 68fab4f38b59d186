//! Number formatting for widget text.

/// Symbol prefix for common quote currencies; others fall back to the code.
fn currency_prefix(currency: &str) -> String {
    match currency.to_ascii_lowercase().as_str() {
        "usd" => "$".to_string(),
        "eur" => "€".to_string(),
        "gbp" => "£".to_string(),
        "jpy" => "¥".to_string(),
        other => format!("{} ", other.to_ascii_uppercase()),
    }
}

/// Insert `,` between groups of three digits.
fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Format a price as currency with two decimals, e.g. `$61,234.50`.
///
/// Non-finite values render as zero.
pub fn format_currency(value: f64, currency: &str) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    let fixed = format!("{:.2}", value.abs());
    let (whole, frac) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    // "-0.00" would read as a loss
    let sign = if value < 0.0 && fixed != "0.00" { "-" } else { "" };

    format!(
        "{}{}{}.{}",
        sign,
        currency_prefix(currency),
        group_thousands(whole),
        frac
    )
}

/// Fixed-point percentage, e.g. `-3.2%` for `(-3.2, 1)`.
pub fn format_percent(value: f64, precision: usize) -> String {
    format!("{:.*}%", precision, value)
}
