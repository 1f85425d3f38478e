//! Display formatting — the currency-formatting service of the report layer.
//!
//! Every formatter returns a finished display string; raw NaN or infinity
//! never reaches the caller. Option-valued composites render "N/A".

/// Sentinel for degenerate statistics.
pub const NOT_AVAILABLE: &str = "N/A";

/// `1234.5` → `"$1,234.50"`, `-1234.5` → `"-$1,234.50"`.
pub fn currency(amount: f64) -> String {
    if !amount.is_finite() {
        return NOT_AVAILABLE.to_string();
    }
    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{sign}${}", grouped_two_decimals(amount.abs()))
}

/// Currency with an explicit `+` on gains: `"+$150.00"`.
pub fn signed_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return NOT_AVAILABLE.to_string();
    }
    let sign = if amount < 0.0 { "-" } else { "+" };
    format!("{sign}${}", grouped_two_decimals(amount.abs()))
}

/// Fraction → percent with one decimal: `0.667` → `"66.7%"`.
pub fn percent(fraction: f64) -> String {
    if !fraction.is_finite() {
        return NOT_AVAILABLE.to_string();
    }
    format!("{:.1}%", fraction * 100.0)
}

/// Signed R multiple: `2.5` → `"+2.50R"`, `-1.0` → `"-1.00R"`.
pub fn r_multiple(r: f64) -> String {
    if !r.is_finite() {
        return NOT_AVAILABLE.to_string();
    }
    format!("{r:+.2}R")
}

/// Two-decimal ratio; `None` renders the sentinel.
pub fn ratio(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{v:.2}"),
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// Profit factor: `"∞"` when gross loss is zero with profit, else two
/// decimals.
pub fn profit_factor(pf: f64) -> String {
    if pf.is_nan() {
        return NOT_AVAILABLE.to_string();
    }
    if pf.is_infinite() {
        return "∞".to_string();
    }
    format!("{pf:.2}")
}

/// Absolute amount with thousands separators and two decimals.
fn grouped_two_decimals(abs_amount: f64) -> String {
    let cents = (abs_amount * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let frac = cents % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, c) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("{grouped}.{frac:02}")
}
