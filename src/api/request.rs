//! Request types for the Pay Package Engine API.
//!
//! Pay package bodies are parsed leniently: numbers may arrive as JSON
//! numbers or numeric strings, and anything else (missing, `null`, blank,
//! non-numeric) becomes zero. Dates that do not parse become absent. This is
//! the only place coercion happens; the calculator sees typed values only.

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::calculation::parse_contract_date;
use crate::models::PayPackageInput;

/// Coerces a JSON value to a decimal, falling back to zero.
pub(crate) fn decimal_from_value(value: &Value) -> Decimal {
    let text = match value {
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.trim().to_string(),
        _ => return Decimal::ZERO,
    };
    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .unwrap_or(Decimal::ZERO)
}

fn lenient_decimal<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().map_or(Decimal::ZERO, decimal_from_value))
}

fn lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => parse_contract_date(&s),
        _ => None,
    })
}

fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => s,
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    })
}

fn lenient_optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s),
        _ => None,
    })
}

fn lenient_id<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_u64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

/// Request body describing a pay package's inputs.
///
/// Used by the preview endpoint and by create, replace and merge-update.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayPackageRequest {
    /// Provider name.
    #[serde(default, deserialize_with = "lenient_text")]
    pub provider_name: String,
    /// Specialty.
    #[serde(default, deserialize_with = "lenient_text")]
    pub specialty: String,
    /// Facility.
    #[serde(default, deserialize_with = "lenient_text")]
    pub facility: String,
    /// Location.
    #[serde(default, deserialize_with = "lenient_text")]
    pub location: String,
    /// Contract start date.
    #[serde(default, deserialize_with = "lenient_date")]
    pub start_date: Option<NaiveDate>,
    /// Contract end date.
    #[serde(default, deserialize_with = "lenient_date")]
    pub end_date: Option<NaiveDate>,
    /// Hours per week.
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub hours_per_week: Decimal,
    /// Bill rate.
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub bill_rate: Decimal,
    /// Regular hourly pay rate.
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub regular_pay_rate: Decimal,
    /// Flat weekly overtime amount.
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub overtime_pay_rate: Decimal,
    /// Weekly taxable stipend.
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub taxable_stipend: Decimal,
    /// Weekly non-taxable stipend.
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub non_taxable_stipend: Decimal,
    /// Weekly meals stipend.
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub meals_stipend: Decimal,
    /// Weekly travel stipend.
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub travel_stipend: Decimal,
    /// Employer taxes, percentage points.
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub employer_taxes: Decimal,
    /// Workers' comp, percentage points.
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub workers_comp: Decimal,
    /// Weekly health insurance.
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub health_insurance: Decimal,
    /// Weekly professional liability.
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub professional_liability: Decimal,
    /// Weekly housing cost.
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub housing: Decimal,
    /// Weekly travel cost.
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub travel: Decimal,
    /// Weekly bonus cost.
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub bonus: Decimal,
    /// Other weekly costs.
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub other_costs: Decimal,
    /// Free-text notes.
    #[serde(default, deserialize_with = "lenient_optional_text")]
    pub notes: Option<String>,
}

impl From<PayPackageRequest> for PayPackageInput {
    fn from(req: PayPackageRequest) -> Self {
        PayPackageInput {
            provider_name: req.provider_name,
            specialty: req.specialty,
            facility: req.facility,
            location: req.location,
            start_date: req.start_date,
            end_date: req.end_date,
            hours_per_week: req.hours_per_week,
            bill_rate: req.bill_rate,
            regular_pay_rate: req.regular_pay_rate,
            overtime_pay_rate: req.overtime_pay_rate,
            taxable_stipend: req.taxable_stipend,
            non_taxable_stipend: req.non_taxable_stipend,
            meals_stipend: req.meals_stipend,
            travel_stipend: req.travel_stipend,
            employer_taxes: req.employer_taxes,
            workers_comp: req.workers_comp,
            health_insurance: req.health_insurance,
            professional_liability: req.professional_liability,
            housing: req.housing,
            travel: req.travel,
            bonus: req.bonus,
            other_costs: req.other_costs,
            notes: req.notes,
        }
    }
}

/// Request body for `POST /api/pay-packages/email`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendEmailRequest {
    /// The package to send.
    #[serde(default, deserialize_with = "lenient_id")]
    pub pay_package_id: Option<u64>,
    /// Recipient address.
    #[serde(default)]
    pub email: Option<String>,
}

/// Request body for `POST /api/pay-packages/sms`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendSmsRequest {
    /// The package to send.
    #[serde(default, deserialize_with = "lenient_id")]
    pub pay_package_id: Option<u64>,
    /// Recipient phone number.
    #[serde(default)]
    pub phone_number: Option<String>,
}

/// Request body for `PATCH /api/reminders/:id/complete`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteReminderRequest {
    /// The new completion state.
    pub is_completed: bool,
}

/// Query string for `GET /api/reminders`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderListQuery {
    /// Include completed reminders.
    #[serde(default)]
    pub include_completed: bool,
}

/// Query string for `GET /api/reminders/upcoming`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpcomingQuery {
    /// Look-ahead window in days.
    #[serde(default)]
    pub days: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_numbers_and_numeric_strings() {
        let req: PayPackageRequest = serde_json::from_value(json!({
            "hoursPerWeek": 36,
            "billRate": "85.50",
            "employerTaxes": 7.65,
            "workersComp": " 2 "
        }))
        .unwrap();

        assert_eq!(req.hours_per_week, dec("36"));
        assert_eq!(req.bill_rate, dec("85.50"));
        assert_eq!(req.employer_taxes, dec("7.65"));
        assert_eq!(req.workers_comp, dec("2"));
    }

    #[test]
    fn test_anomalous_numbers_become_zero() {
        let req: PayPackageRequest = serde_json::from_value(json!({
            "hoursPerWeek": null,
            "billRate": "abc",
            "regularPayRate": "",
            "bonus": true,
            "housing": [1, 2]
        }))
        .unwrap();

        assert_eq!(req.hours_per_week, Decimal::ZERO);
        assert_eq!(req.bill_rate, Decimal::ZERO);
        assert_eq!(req.regular_pay_rate, Decimal::ZERO);
        assert_eq!(req.bonus, Decimal::ZERO);
        assert_eq!(req.housing, Decimal::ZERO);
        assert_eq!(req.travel, Decimal::ZERO);
    }

    #[test]
    fn test_negative_numbers_pass_through() {
        let req: PayPackageRequest =
            serde_json::from_value(json!({ "otherCosts": -150 })).unwrap();
        assert_eq!(req.other_costs, dec("-150"));
    }

    #[test]
    fn test_dates() {
        let req: PayPackageRequest = serde_json::from_value(json!({
            "startDate": "2023-06-15",
            "endDate": "not-a-date"
        }))
        .unwrap();

        assert_eq!(req.start_date, NaiveDate::from_ymd_opt(2023, 6, 15));
        assert_eq!(req.end_date, None);
    }

    #[test]
    fn test_datetime_strings_reduce_to_dates() {
        let req: PayPackageRequest = serde_json::from_value(json!({
            "startDate": "2023-06-15T00:00:00.000Z"
        }))
        .unwrap();
        assert_eq!(req.start_date, NaiveDate::from_ymd_opt(2023, 6, 15));
    }

    #[test]
    fn test_blank_notes_are_absent() {
        let req: PayPackageRequest = serde_json::from_value(json!({ "notes": "  " })).unwrap();
        assert!(req.notes.is_none());
    }

    #[test]
    fn test_into_input() {
        let req: PayPackageRequest = serde_json::from_value(json!({
            "providerName": "Sarah Johnson",
            "regularPayRate": 40,
            "notes": "ICU"
        }))
        .unwrap();
        let input: PayPackageInput = req.into();

        assert_eq!(input.provider_name, "Sarah Johnson");
        assert_eq!(input.regular_pay_rate, dec("40"));
        assert_eq!(input.notes.as_deref(), Some("ICU"));
    }

    #[test]
    fn test_send_email_request_accepts_string_id() {
        let req: SendEmailRequest =
            serde_json::from_value(json!({ "payPackageId": "3", "email": "a@b.com" })).unwrap();
        assert_eq!(req.pay_package_id, Some(3));

        let req: SendEmailRequest = serde_json::from_value(json!({})).unwrap();
        assert!(req.pay_package_id.is_none());
        assert!(req.email.is_none());
    }
}
