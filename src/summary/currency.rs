//! Display formatting for money, rates, dates and percentages.

use chrono::{Datelike, NaiveDate};
use rust_decimal::{Decimal, RoundingStrategy};

/// Formats an amount as US dollars with thousands separators.
///
/// Rounds half away from zero to cents. Negative amounts keep their sign.
///
/// ```
/// use pay_package_engine::summary::format_currency;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(format_currency(Decimal::from(37700)), "$37,700.00");
/// assert_eq!(format_currency(Decimal::from_str("-598.085").unwrap()), "-$598.09");
/// ```
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let digits = format!("{:.2}", rounded.abs());

    let (whole, cents) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{}${}.{}", if negative { "-" } else { "" }, grouped, cents)
}

/// Formats an hourly rate, e.g. `$40.00/hr`.
pub fn format_rate(rate: Decimal) -> String {
    format!("{}/hr", format_currency(rate))
}

/// Formats a calendar date as `M/D/YYYY`.
pub fn format_date(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.month(), date.day(), date.year())
}

/// Formats a percentage to one decimal place. `None` renders as `0.0%`.
pub fn format_percentage(percentage: Option<Decimal>) -> String {
    let value = percentage
        .unwrap_or(Decimal::ZERO)
        .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.1}%", value)
}

/// Formats an hour count without trailing zeros.
pub(crate) fn format_hours(hours: Decimal) -> String {
    hours.normalize().to_string()
}
