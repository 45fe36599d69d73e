//! Contract duration resolution.
//!
//! Turns an assignment's start and end dates into the whole number of contract
//! weeks used for contract totals. When either date is missing or cannot be
//! parsed the contract is assumed to run [`DEFAULT_CONTRACT_WEEKS`] weeks.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

use crate::models::{AuditStep, AuditWarning};

/// Contract length assumed when the dates cannot be resolved.
pub const DEFAULT_CONTRACT_WEEKS: u32 = 13;

/// Days and whole weeks between two contract dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContractDuration {
    /// Absolute number of days between the dates.
    pub days: i64,
    /// `days / 7`, rounded up.
    pub weeks: u32,
}

const MILLIS_PER_DAY: i64 = 86_400_000;

/// Computes the duration between two instants.
///
/// Any part of a day counts as a whole day, so the day count is the ceiling of
/// the absolute difference measured in milliseconds.
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use pay_package_engine::calculation::contract_duration_between;
///
/// let start = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
/// let end = Utc.with_ymd_and_hms(2023, 1, 1, 12, 0, 0).unwrap();
///
/// let duration = contract_duration_between(start, end);
/// assert_eq!(duration.days, 1);
/// assert_eq!(duration.weeks, 1);
/// ```
pub fn contract_duration_between(start: DateTime<Utc>, end: DateTime<Utc>) -> ContractDuration {
    let millis = end.signed_duration_since(start).num_milliseconds().abs();
    let days = millis / MILLIS_PER_DAY + i64::from(millis % MILLIS_PER_DAY != 0);
    let weeks = u32::try_from((days + 6) / 7).unwrap_or(u32::MAX);
    ContractDuration { days, weeks }
}

/// Computes the duration between two dates, or `None` if either is missing.
///
/// The order of the dates does not matter: a reversed pair yields the same
/// duration as the ordered pair. Identical dates give a zero-week contract.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use pay_package_engine::calculation::contract_duration;
///
/// let start = NaiveDate::from_ymd_opt(2023, 6, 15);
/// let end = NaiveDate::from_ymd_opt(2023, 9, 10);
///
/// let duration = contract_duration(start, end).unwrap();
/// assert_eq!(duration.days, 87);
/// assert_eq!(duration.weeks, 13);
/// ```
pub fn contract_duration(
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> Option<ContractDuration> {
    Some(contract_duration_between(midnight(start?), midnight(end?)))
}

fn midnight(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

/// Resolves the number of contract weeks, falling back to 13.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use pay_package_engine::calculation::resolve_contract_weeks;
///
/// assert_eq!(resolve_contract_weeks(None, None), 13);
///
/// let day = NaiveDate::from_ymd_opt(2023, 1, 1);
/// assert_eq!(resolve_contract_weeks(day, day), 0);
/// ```
pub fn resolve_contract_weeks(start: Option<NaiveDate>, end: Option<NaiveDate>) -> u32 {
    contract_duration(start, end)
        .map(|d| d.weeks)
        .unwrap_or(DEFAULT_CONTRACT_WEEKS)
}

/// Parses a contract instant from text.
///
/// Accepts plain calendar dates (`2023-06-15`, read as midnight UTC) and
/// ISO-8601 date-times, with or without an offset. Date-times without an
/// offset are taken as UTC.
pub fn parse_contract_instant(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Some(midnight(date));
    }
    if let Ok(date_time) = DateTime::parse_from_rfc3339(text) {
        return Some(date_time.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|dt| dt.and_utc())
}

/// Parses a contract date from text: the UTC calendar date of
/// [`parse_contract_instant`].
pub fn parse_contract_date(text: &str) -> Option<NaiveDate> {
    parse_contract_instant(text).map(|instant| instant.date_naive())
}

/// [`resolve_contract_weeks`] over raw text; unparsable text counts as missing.
///
/// Date-times keep their time of day, so a contract starting and ending on the
/// same calendar day several hours apart runs one week.
///
/// ```
/// use pay_package_engine::calculation::resolve_contract_weeks_from_str;
///
/// assert_eq!(resolve_contract_weeks_from_str(Some("not-a-date"), Some("2023-01-01")), 13);
/// assert_eq!(resolve_contract_weeks_from_str(Some("2023-06-15"), Some("2023-09-10")), 13);
/// ```
pub fn resolve_contract_weeks_from_str(start: Option<&str>, end: Option<&str>) -> u32 {
    match (
        start.and_then(parse_contract_instant),
        end.and_then(parse_contract_instant),
    ) {
        (Some(start), Some(end)) => contract_duration_between(start, end).weeks,
        _ => DEFAULT_CONTRACT_WEEKS,
    }
}

/// The resolved contract term with its audit record.
#[derive(Debug, Clone)]
pub struct ContractTermResult {
    /// Weeks used for contract totals.
    pub weeks: u32,
    /// The computed duration, when both dates resolved.
    pub duration: Option<ContractDuration>,
    /// True if the 13-week fallback was used.
    pub default_applied: bool,
    /// The audit step recording this resolution.
    pub audit_step: AuditStep,
    /// Conditions worth flagging (defaulted or reversed dates).
    pub warnings: Vec<AuditWarning>,
}

/// Resolves the contract term for a calculation, recording how it was reached.
pub fn resolve_contract_term(
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    step_number: u32,
) -> ContractTermResult {
    let duration = contract_duration(start, end);
    let mut warnings = Vec::new();

    let (weeks, reasoning) = match duration {
        Some(d) => (
            d.weeks,
            format!("ceil({} days / 7) = {} weeks", d.days, d.weeks),
        ),
        None => {
            warnings.push(AuditWarning::new(
                "DEFAULT_CONTRACT_WEEKS",
                format!(
                    "Start or end date missing; contract assumed to run {} weeks",
                    DEFAULT_CONTRACT_WEEKS
                ),
                "low",
            ));
            (
                DEFAULT_CONTRACT_WEEKS,
                format!(
                    "Dates unavailable - default of {} weeks applied",
                    DEFAULT_CONTRACT_WEEKS
                ),
            )
        }
    };

    if let (Some(s), Some(e)) = (start, end) {
        if e < s {
            warnings.push(AuditWarning::new(
                "REVERSED_CONTRACT_DATES",
                format!("End date {} is before start date {}", e, s),
                "medium",
            ));
        }
    }

    let audit_step = AuditStep {
        step_number,
        rule_id: "contract_duration".to_string(),
        rule_name: "Contract Duration".to_string(),
        formula: "weeks = ceil(ceil(|end - start| days) / 7), default 13".to_string(),
        input: serde_json::json!({
            "start_date": start.map(|d| d.to_string()),
            "end_date": end.map(|d| d.to_string()),
        }),
        output: serde_json::json!({
            "days": duration.map(|d| d.days),
            "weeks": weeks,
            "default_applied": duration.is_none(),
        }),
        reasoning,
    };

    ContractTermResult {
        weeks,
        duration,
        default_applied: duration.is_none(),
        audit_step,
        warnings,
    }
}
