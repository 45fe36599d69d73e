//! Agency margin calculation.

use rust_decimal::Decimal;

use crate::models::AuditStep;

use super::percentage_of;

/// Weekly margin and its audit step.
#[derive(Debug, Clone)]
pub struct AgencyMarginResult {
    /// Weekly revenue minus weekly costs. Negative when the placement loses
    /// money.
    pub weekly_margin: Decimal,
    /// Margin as a share of weekly revenue, when revenue is non-zero.
    pub margin_percentage: Option<Decimal>,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the agency's weekly margin.
///
/// A negative margin is returned as-is.
///
/// ```
/// use pay_package_engine::calculation::calculate_agency_margin;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let result = calculate_agency_margin(
///     Decimal::from(3060),
///     Decimal::from_str("3658.085").unwrap(),
///     1,
/// );
/// assert_eq!(result.weekly_margin, Decimal::from_str("-598.085").unwrap());
/// ```
pub fn calculate_agency_margin(
    weekly_revenue: Decimal,
    weekly_costs: Decimal,
    step_number: u32,
) -> AgencyMarginResult {
    let weekly_margin = weekly_revenue.saturating_sub(weekly_costs);
    let margin_percentage = percentage_of(weekly_margin, weekly_revenue);

    let audit_step = AuditStep {
        step_number,
        rule_id: "agency_margin".to_string(),
        rule_name: "Agency Margin".to_string(),
        formula: "weekly_revenue - weekly_costs".to_string(),
        input: serde_json::json!({
            "weekly_revenue": weekly_revenue.normalize().to_string(),
            "weekly_costs": weekly_costs.normalize().to_string()
        }),
        output: serde_json::json!({
            "weekly_margin": weekly_margin.normalize().to_string(),
            "margin_percentage": margin_percentage.map(|p| p.to_string())
        }),
        reasoning: format!(
            "${} - ${} = ${}",
            weekly_revenue.normalize(),
            weekly_costs.normalize(),
            weekly_margin.normalize()
        ),
    };

    AgencyMarginResult {
        weekly_margin,
        margin_percentage,
        audit_step,
    }
}
