//! Exchange-rate records, currency-code resolution, and conversion helpers.
//!
//! All stored monetary values are denominated in the reference currency;
//! conversion into the active display currency happens at presentation time
//! only. Helpers that cannot resolve a code degrade to an identity conversion
//! instead of failing, so the planner keeps rendering with stale or missing
//! rates.

use serde::{Deserialize, Serialize};

/// The single currency every stored amount is denominated in.
pub const REFERENCE_CURRENCY: &str = "EUR";

/// One known non-reference currency and its rate against the reference
/// currency, expressed as units of this currency per 1 reference unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeRate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    pub name: String,
    pub symbol: String,
    pub rate: f64,
}

impl ExchangeRate {
    pub fn new(
        name: impl Into<String>,
        symbol: impl Into<String>,
        code: impl Into<String>,
        rate: f64,
    ) -> Self {
        Self {
            code: Some(code.into()),
            name: name.into(),
            symbol: symbol.into(),
            rate,
        }
    }

    /// Resolves the currency code for this entry: the explicit `code` field
    /// wins; otherwise the parenthesized substring of `name` is used, so a
    /// label like `"Dollar (USD)"` still resolves. Entries with no resolvable
    /// code cannot become the active display currency.
    pub fn resolved_code(&self) -> Option<&str> {
        if let Some(code) = self.code.as_deref() {
            if !code.is_empty() {
                return Some(code);
            }
        }
        code_from_name(&self.name)
    }
}

fn code_from_name(name: &str) -> Option<&str> {
    let start = name.find('(')?;
    let rest = &name[start + 1..];
    let end = rest.find(')')?;
    let code = rest[..end].trim();
    if code.is_empty() {
        None
    } else {
        Some(code)
    }
}

fn find_rate<'a>(rates: &'a [ExchangeRate], code: &str) -> Option<&'a ExchangeRate> {
    rates.iter().find(|entry| entry.resolved_code() == Some(code))
}

/// Rate for a currency code: 1 for the reference currency regardless of the
/// table contents, otherwise the matching entry's rate.
pub fn rate_for(rates: &[ExchangeRate], code: &str) -> Option<f64> {
    if code == REFERENCE_CURRENCY {
        return Some(1.0);
    }
    find_rate(rates, code).map(|entry| entry.rate)
}

/// Display symbol for a code; falls back to the code itself, never fails.
pub fn symbol_for(rates: &[ExchangeRate], code: &str) -> String {
    find_rate(rates, code)
        .map(|entry| entry.symbol.clone())
        .unwrap_or_else(|| code.to_string())
}

/// Converts a display-currency amount into the reference currency. Missing or
/// zero rates degrade to the identity conversion; an unresolvable code here is
/// a programming error upstream, not a reason to halt.
pub fn to_reference(rates: &[ExchangeRate], amount: f64, from: &str) -> f64 {
    match rate_for(rates, from) {
        Some(rate) if rate != 0.0 => amount / rate,
        _ => amount,
    }
}

/// Converts a reference-currency amount into a display currency, with the same
/// identity fallback as [`to_reference`].
pub fn from_reference(rates: &[ExchangeRate], amount: f64, to: &str) -> f64 {
    match rate_for(rates, to) {
        Some(rate) => amount * rate,
        None => amount,
    }
}

/// Renders an amount with exactly two decimals and comma grouping.
pub fn format_amount(value: f64) -> String {
    let body = format!("{:.2}", value.abs());
    let (int_part, frac_part) = match body.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part),
        None => (body.as_str(), "00"),
    };
    let grouped = group_digits(int_part, ',');
    let sign = if value < 0.0 && body != "0.00" { "-" } else { "" };
    format!("{}{}.{}", sign, grouped, frac_part)
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::new();
    let mut count = 0;
    for ch in digits.chars().rev() {
        if count != 0 && count % 3 == 0 {
            grouped.insert(0, separator);
        }
        grouped.insert(0, ch);
        count += 1;
    }
    grouped
}
