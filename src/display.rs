//! Presentation helpers. Rounding happens here and nowhere in the engine.

/// Round to two decimals
pub fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Format as pesos with Argentine separators: `$ 1.234.567,89`
pub fn format_ars(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let fraction = cents % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}$ {grouped},{fraction:02}")
}

/// Format a percentage-point rate with a decimal comma: `5,19%`
pub fn format_pct(rate: f64) -> String {
    format!("{:.2}%", rate).replace('.', ",")
}
