//! Pay package models.
//!
//! A pay package moves through three shapes: the caller-supplied
//! [`PayPackageInput`], the calculator's [`PayPackageResult`] (input plus the
//! seven derived figures), and the stored [`PayPackage`] record that adds an
//! identity, creation timestamp and delivery flags.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The raw inputs of a pay package.
///
/// Every numeric field is a [`Decimal`]. Fields the caller did not supply are
/// zero; that coercion happens at the request boundary, not here.
///
/// `overtime_pay_rate` is a flat weekly amount, not an hourly rate. It is added
/// to weekly gross as-is.
///
/// # Example
///
/// ```
/// use pay_package_engine::models::PayPackageInput;
/// use rust_decimal::Decimal;
///
/// let input = PayPackageInput {
///     provider_name: "Sarah Johnson".to_string(),
///     hours_per_week: Decimal::from(36),
///     regular_pay_rate: Decimal::from(40),
///     ..PayPackageInput::default()
/// };
/// assert_eq!(input.bill_rate, Decimal::ZERO);
/// assert!(input.start_date.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayPackageInput {
    /// The provider (clinician) the package is for.
    #[serde(default)]
    pub provider_name: String,
    /// The provider's specialty (e.g. "nursing").
    #[serde(default)]
    pub specialty: String,
    /// The facility the provider is placed at.
    #[serde(default)]
    pub facility: String,
    /// City/state of the facility.
    #[serde(default)]
    pub location: String,
    /// First day of the assignment.
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    /// Last day of the assignment.
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    /// Scheduled hours per week.
    #[serde(default)]
    pub hours_per_week: Decimal,
    /// Hourly rate billed to the facility.
    #[serde(default)]
    pub bill_rate: Decimal,
    /// Hourly regular pay rate.
    #[serde(default)]
    pub regular_pay_rate: Decimal,
    /// Flat weekly overtime amount (not multiplied by hours).
    #[serde(default)]
    pub overtime_pay_rate: Decimal,
    /// Weekly taxable stipend.
    #[serde(default)]
    pub taxable_stipend: Decimal,
    /// Weekly non-taxable (housing) stipend.
    #[serde(default)]
    pub non_taxable_stipend: Decimal,
    /// Weekly meals stipend.
    #[serde(default)]
    pub meals_stipend: Decimal,
    /// Weekly travel stipend.
    #[serde(default)]
    pub travel_stipend: Decimal,
    /// Employer payroll taxes, in percentage points (7.65 = 7.65%).
    #[serde(default)]
    pub employer_taxes: Decimal,
    /// Workers' compensation, in percentage points of regular pay.
    #[serde(default)]
    pub workers_comp: Decimal,
    /// Flat weekly health insurance cost.
    #[serde(default)]
    pub health_insurance: Decimal,
    /// Flat weekly professional liability cost.
    #[serde(default)]
    pub professional_liability: Decimal,
    /// Flat weekly housing cost borne by the agency.
    #[serde(default)]
    pub housing: Decimal,
    /// Flat weekly travel cost borne by the agency.
    #[serde(default)]
    pub travel: Decimal,
    /// Flat weekly bonus cost.
    #[serde(default)]
    pub bonus: Decimal,
    /// Any other flat weekly cost.
    #[serde(default)]
    pub other_costs: Decimal,
    /// Free-text notes; not used in calculation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl PayPackageInput {
    /// Checks the fields a stored package must carry.
    ///
    /// The calculator accepts anything; this is the gate applied before a
    /// package is persisted. Descriptive fields must be non-blank and both
    /// assignment dates must be present.
    pub fn validate_for_storage(&self) -> EngineResult<()> {
        let descriptive = [
            ("providerName", &self.provider_name),
            ("specialty", &self.specialty),
            ("facility", &self.facility),
            ("location", &self.location),
        ];
        for (field, value) in descriptive {
            if value.trim().is_empty() {
                return Err(EngineError::InvalidPayPackage {
                    field: field.to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }

        if self.start_date.is_none() {
            return Err(EngineError::InvalidPayPackage {
                field: "startDate".to_string(),
                message: "must be a valid date (YYYY-MM-DD)".to_string(),
            });
        }
        if self.end_date.is_none() {
            return Err(EngineError::InvalidPayPackage {
                field: "endDate".to_string(),
                message: "must be a valid date (YYYY-MM-DD)".to_string(),
            });
        }

        Ok(())
    }
}

/// A fully calculated pay package: the input plus its seven derived figures.
///
/// All derived figures may be negative. A negative margin or net pay is a
/// meaningful result, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayPackageResult {
    /// The inputs this result was calculated from.
    #[serde(flatten)]
    pub input: PayPackageInput,
    /// Provider's weekly compensation before withholding.
    pub weekly_gross: Decimal,
    /// Weekly gross over the whole contract.
    pub contract_total: Decimal,
    /// Weekly amount billed to the facility.
    pub weekly_agency_revenue: Decimal,
    /// Weekly revenue over the whole contract.
    pub total_agency_revenue: Decimal,
    /// Agency's all-in weekly cost of the provider.
    pub weekly_agency_costs: Decimal,
    /// Weekly revenue minus weekly costs.
    pub weekly_agency_margin: Decimal,
    /// Estimated weekly take-home pay.
    pub weekly_net_pay: Decimal,
}

/// A pay package as held by storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayPackage {
    /// Storage-assigned identity.
    pub id: u64,
    /// When the package was first stored.
    pub created_at: DateTime<Utc>,
    /// Whether the package has been emailed successfully.
    pub email_sent: bool,
    /// Whether the package has been texted successfully.
    pub sms_sent: bool,
    /// The calculated content.
    #[serde(flatten)]
    pub result: PayPackageResult,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> PayPackageInput {
        PayPackageInput {
            provider_name: "Sarah Johnson".to_string(),
            specialty: "nursing".to_string(),
            facility: "Memorial Hospital".to_string(),
            location: "Denver, CO".to_string(),
            start_date: NaiveDate::from_ymd_opt(2023, 6, 15),
            end_date: NaiveDate::from_ymd_opt(2023, 9, 10),
            ..PayPackageInput::default()
        }
    }

    #[test]
    fn test_default_input_is_all_zero() {
        let input = PayPackageInput::default();
        assert_eq!(input.hours_per_week, Decimal::ZERO);
        assert_eq!(input.other_costs, Decimal::ZERO);
        assert!(input.notes.is_none());
    }

    #[test]
    fn test_valid_input_passes_storage_validation() {
        assert!(valid_input().validate_for_storage().is_ok());
    }

    #[test]
    fn test_blank_provider_name_is_rejected() {
        let mut input = valid_input();
        input.provider_name = "   ".to_string();

        match input.validate_for_storage() {
            Err(EngineError::InvalidPayPackage { field, .. }) => {
                assert_eq!(field, "providerName");
            }
            other => panic!("Expected InvalidPayPackage, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_end_date_is_rejected() {
        let mut input = valid_input();
        input.end_date = None;

        match input.validate_for_storage() {
            Err(EngineError::InvalidPayPackage { field, .. }) => assert_eq!(field, "endDate"),
            other => panic!("Expected InvalidPayPackage, got {:?}", other),
        }
    }

    #[test]
    fn test_input_serializes_with_camel_case_names() {
        let json = serde_json::to_value(valid_input()).unwrap();
        assert_eq!(json["providerName"], "Sarah Johnson");
        assert_eq!(json["startDate"], "2023-06-15");
        assert!(json.get("hoursPerWeek").is_some());
        assert!(json.get("notes").is_none());
    }

    #[test]
    fn test_stored_package_flattens_result_and_input() {
        let package = PayPackage {
            id: 1,
            created_at: Utc::now(),
            email_sent: false,
            sms_sent: true,
            result: PayPackageResult {
                input: valid_input(),
                weekly_gross: Decimal::from(2900),
                contract_total: Decimal::from(37700),
                weekly_agency_revenue: Decimal::from(3060),
                total_agency_revenue: Decimal::from(39780),
                weekly_agency_costs: Decimal::new(3658085, 3),
                weekly_agency_margin: Decimal::new(-598085, 3),
                weekly_net_pay: Decimal::new(2500315, 3),
            },
        };

        let json = serde_json::to_value(&package).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["smsSent"], true);
        assert_eq!(json["providerName"], "Sarah Johnson");
        assert_eq!(json["weeklyAgencyMargin"], "-598.085");

        let back: PayPackage = serde_json::from_value(json).unwrap();
        assert_eq!(back, package);
    }
}
