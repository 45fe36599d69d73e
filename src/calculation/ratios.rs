//! Rate and percentage helpers used when presenting a pay package.

use rust_decimal::{Decimal, RoundingStrategy};

/// Converts a weekly amount into an hourly equivalent.
///
/// Returns zero when `hours_per_week` is zero or negative.
///
/// ```
/// use pay_package_engine::calculation::hourly_rate_from_weekly;
/// use rust_decimal::Decimal;
///
/// assert_eq!(hourly_rate_from_weekly(Decimal::from(2900), Decimal::from(40)), Decimal::new(725, 1));
/// assert_eq!(hourly_rate_from_weekly(Decimal::from(2900), Decimal::ZERO), Decimal::ZERO);
/// ```
pub fn hourly_rate_from_weekly(weekly_amount: Decimal, hours_per_week: Decimal) -> Decimal {
    if hours_per_week <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    weekly_amount
        .checked_div(hours_per_week)
        .unwrap_or(Decimal::ZERO)
}

/// `value` as a percentage of `total`, rounded half away from zero to one
/// decimal place. `None` when `total` is zero.
///
/// ```
/// use pay_package_engine::calculation::percentage_of;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let pct = percentage_of(Decimal::from(425), Decimal::from(4800)).unwrap();
/// assert_eq!(pct, Decimal::from_str("8.9").unwrap());
/// assert!(percentage_of(Decimal::ONE, Decimal::ZERO).is_none());
/// ```
pub fn percentage_of(value: Decimal, total: Decimal) -> Option<Decimal> {
    if total.is_zero() {
        return None;
    }
    let ratio = value.checked_div(total)?;
    Some(
        ratio
            .saturating_mul(Decimal::ONE_HUNDRED)
            .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero),
    )
}
