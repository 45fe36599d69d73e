//! Agency revenue calculation.
//!
//! Revenue is what the agency bills the facility: bill rate × hours, per week
//! and over the contract.

use rust_decimal::Decimal;

use crate::models::{AuditStep, PayPackageInput};

/// Agency revenue figures and the audit step that produced them.
#[derive(Debug, Clone)]
pub struct AgencyRevenueResult {
    /// Bill rate × hours per week.
    pub weekly_revenue: Decimal,
    /// Weekly revenue × contract weeks.
    pub total_revenue: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates weekly and total agency revenue.
///
/// # Examples
///
/// ```
/// use pay_package_engine::calculation::calculate_agency_revenue;
/// use pay_package_engine::models::PayPackageInput;
/// use rust_decimal::Decimal;
///
/// let input = PayPackageInput {
///     bill_rate: Decimal::from(85),
///     hours_per_week: Decimal::from(36),
///     ..PayPackageInput::default()
/// };
///
/// let result = calculate_agency_revenue(&input, 13, 1);
/// assert_eq!(result.weekly_revenue, Decimal::from(3060));
/// assert_eq!(result.total_revenue, Decimal::from(39780));
/// ```
pub fn calculate_agency_revenue(
    input: &PayPackageInput,
    contract_weeks: u32,
    step_number: u32,
) -> AgencyRevenueResult {
    let weekly_revenue = input.bill_rate.saturating_mul(input.hours_per_week);
    let total_revenue = weekly_revenue.saturating_mul(Decimal::from(contract_weeks));

    let audit_step = AuditStep {
        step_number,
        rule_id: "agency_revenue".to_string(),
        rule_name: "Agency Revenue".to_string(),
        formula: "bill_rate x hours; weekly x contract_weeks".to_string(),
        input: serde_json::json!({
            "bill_rate": input.bill_rate.normalize().to_string(),
            "hours_per_week": input.hours_per_week.normalize().to_string(),
            "contract_weeks": contract_weeks
        }),
        output: serde_json::json!({
            "weekly_revenue": weekly_revenue.normalize().to_string(),
            "total_revenue": total_revenue.normalize().to_string()
        }),
        reasoning: format!(
            "${} x {} hours = ${} weekly; x {} weeks = ${}",
            input.bill_rate.normalize(),
            input.hours_per_week.normalize(),
            weekly_revenue.normalize(),
            contract_weeks,
            total_revenue.normalize()
        ),
    };

    AgencyRevenueResult {
        weekly_revenue,
        total_revenue,
        audit_step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_revenue_is_bill_rate_times_hours() {
        let input = PayPackageInput {
            bill_rate: dec("120"),
            hours_per_week: dec("40"),
            ..PayPackageInput::default()
        };
        let result = calculate_agency_revenue(&input, 8, 2);

        assert_eq!(result.weekly_revenue, dec("4800"));
        assert_eq!(result.total_revenue, dec("38400"));
        assert_eq!(result.audit_step.step_number, 2);
        assert!(result.audit_step.reasoning.contains("$120 x 40 hours = $4800"));
    }

    #[test]
    fn test_zero_hours_gives_zero_revenue() {
        let input = PayPackageInput {
            bill_rate: dec("95"),
            ..PayPackageInput::default()
        };
        let result = calculate_agency_revenue(&input, 13, 1);

        assert_eq!(result.weekly_revenue, Decimal::ZERO);
        assert_eq!(result.total_revenue, Decimal::ZERO);
    }
}
