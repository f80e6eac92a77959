//! Money, date and number rendering shared by every template.
//!
//! Output follows en-US conventions: `$1,234.50`, `Jan 5, 2024`.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("Unsupported currency code '{0}'")]
    UnsupportedCurrency(String),
    #[error("Unrecognised date '{0}'")]
    InvalidDate(String),
}

/// How a currency is written in front of the amount.
enum CurrencyMark {
    /// A narrow symbol attached to the digits, e.g. `$1.00`.
    Symbol(&'static str),
    /// The ISO code separated by a space, e.g. `CHF 1.00`.
    Code,
}

fn currency_mark(code: &str) -> Option<CurrencyMark> {
    use CurrencyMark::{Code, Symbol};
    let mark = match code {
        "USD" => Symbol("$"),
        "EUR" => Symbol("€"),
        "GBP" => Symbol("£"),
        "JPY" => Symbol("¥"),
        "CNY" => Symbol("CN¥"),
        "INR" => Symbol("₹"),
        "KRW" => Symbol("₩"),
        "ILS" => Symbol("₪"),
        "VND" => Symbol("₫"),
        "CAD" => Symbol("CA$"),
        "AUD" => Symbol("A$"),
        "NZD" => Symbol("NZ$"),
        "HKD" => Symbol("HK$"),
        "MXN" => Symbol("MX$"),
        "TWD" => Symbol("NT$"),
        "BRL" => Symbol("R$"),
        "CHF" | "SEK" | "NOK" | "DKK" | "PLN" | "CZK" | "HUF" | "RON" | "BGN" | "ISK" | "TRY"
        | "RUB" | "UAH" | "ZAR" | "SGD" | "THB" | "IDR" | "MYR" | "PHP" | "PKR" | "AED"
        | "SAR" | "QAR" | "EGP" | "NGN" | "KES" | "ARS" | "CLP" | "COP" | "PEN" => Code,
        _ => return None,
    };
    Some(mark)
}

/// Formats `amount` in `currency_code` with thousands grouping and two decimals.
///
/// Negative amounts are written `-$12.00`.
pub fn format_currency(amount: Decimal, currency_code: &str) -> Result<String, FormatError> {
    let code = currency_code.trim().to_ascii_uppercase();
    let mark = currency_mark(&code)
        .ok_or_else(|| FormatError::UnsupportedCurrency(currency_code.to_string()))?;

    let rounded = round_cents(amount);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let fixed = format!("{:.2}", rounded.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let grouped = group_thousands(whole);

    Ok(match mark {
        CurrencyMark::Symbol(symbol) => format!("{}{}{}.{}", sign, symbol, grouped, cents),
        CurrencyMark::Code => format!("{}{} {}.{}", sign, code, grouped, cents),
    })
}

/// Render-time wrapper around [`format_currency`] that never fails.
///
/// Falls back to the bare number (`1234.50`) when the currency is not supported.
pub fn format_amount(amount: Decimal, currency_code: &str) -> String {
    match format_currency(amount, currency_code) {
        Ok(formatted) => formatted,
        Err(e) => {
            log::warn!("{}; rendering plain amount", e);
            format!("{:.2}", round_cents(amount))
        }
    }
}

fn round_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

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

/// Parses the calendar date at the start of `input`.
///
/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps and `YYYY-MM-DDTHH:MM:SS[.fff]`.
/// Timestamps keep the date as written, without converting time zones.
pub fn parse_date(input: &str) -> Result<NaiveDate, FormatError> {
    let s = input.trim();
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(s) {
        return Ok(timestamp.date_naive());
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|dt| dt.date())
        .map_err(|_| FormatError::InvalidDate(input.to_string()))
}

/// `Mon D, YYYY`. Input that is not a recognised date is returned unchanged.
pub fn format_date(input: &str) -> String {
    match parse_date(input) {
        Ok(date) => date.format("%b %-d, %Y").to_string(),
        Err(e) => {
            log::warn!("{}; printing it as given", e);
            input.to_string()
        }
    }
}

/// A quantity or percentage without trailing zeros: `2`, `1.5`, `7.25`.
pub fn format_number(value: Decimal) -> String {
    value.normalize().to_string()
}
