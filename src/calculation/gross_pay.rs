//! Weekly gross pay calculation.
//!
//! Weekly gross is regular pay plus the flat overtime amount plus every
//! stipend. The overtime field is named like an hourly rate but is treated as
//! a flat weekly amount; stored packages depend on that.

use rust_decimal::Decimal;

use crate::models::{AuditStep, PayPackageInput};

use super::saturating_sum;

/// Gross pay figures and the audit step that produced them.
#[derive(Debug, Clone)]
pub struct GrossPayResult {
    /// Regular pay rate × hours per week.
    pub regular_pay: Decimal,
    /// Regular pay + taxable stipend.
    pub taxable_pay: Decimal,
    /// Non-taxable + meals + travel stipends.
    pub non_taxable_stipends: Decimal,
    /// Total weekly compensation.
    pub weekly_gross: Decimal,
    /// Weekly gross × contract weeks.
    pub contract_total: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates weekly gross pay and its contract total.
///
/// # Examples
///
/// ```
/// use pay_package_engine::calculation::calculate_gross_pay;
/// use pay_package_engine::models::PayPackageInput;
/// use rust_decimal::Decimal;
///
/// let input = PayPackageInput {
///     regular_pay_rate: Decimal::from(40),
///     hours_per_week: Decimal::from(36),
///     overtime_pay_rate: Decimal::from(60),
///     taxable_stipend: Decimal::from(250),
///     non_taxable_stipend: Decimal::from(800),
///     meals_stipend: Decimal::from(350),
///     ..PayPackageInput::default()
/// };
///
/// let result = calculate_gross_pay(&input, 13, 1);
/// assert_eq!(result.regular_pay, Decimal::from(1440));
/// assert_eq!(result.weekly_gross, Decimal::from(2900));
/// assert_eq!(result.contract_total, Decimal::from(37700));
/// ```
pub fn calculate_gross_pay(
    input: &PayPackageInput,
    contract_weeks: u32,
    step_number: u32,
) -> GrossPayResult {
    let regular_pay = input.regular_pay_rate.saturating_mul(input.hours_per_week);
    let taxable_pay = regular_pay.saturating_add(input.taxable_stipend);
    let non_taxable_stipends = saturating_sum([
        input.non_taxable_stipend,
        input.meals_stipend,
        input.travel_stipend,
    ]);
    let weekly_gross = saturating_sum([
        regular_pay,
        input.overtime_pay_rate,
        input.taxable_stipend,
        input.non_taxable_stipend,
        input.meals_stipend,
        input.travel_stipend,
    ]);
    let contract_total = weekly_gross.saturating_mul(Decimal::from(contract_weeks));

    let audit_step = AuditStep {
        step_number,
        rule_id: "weekly_gross".to_string(),
        rule_name: "Weekly Gross Pay".to_string(),
        formula: "regular_rate x hours + overtime + taxable + non_taxable + meals + travel"
            .to_string(),
        input: serde_json::json!({
            "regular_pay_rate": input.regular_pay_rate.normalize().to_string(),
            "hours_per_week": input.hours_per_week.normalize().to_string(),
            "overtime_pay_rate": input.overtime_pay_rate.normalize().to_string(),
            "taxable_stipend": input.taxable_stipend.normalize().to_string(),
            "non_taxable_stipend": input.non_taxable_stipend.normalize().to_string(),
            "meals_stipend": input.meals_stipend.normalize().to_string(),
            "travel_stipend": input.travel_stipend.normalize().to_string(),
            "contract_weeks": contract_weeks
        }),
        output: serde_json::json!({
            "regular_pay": regular_pay.normalize().to_string(),
            "taxable_pay": taxable_pay.normalize().to_string(),
            "weekly_gross": weekly_gross.normalize().to_string(),
            "contract_total": contract_total.normalize().to_string()
        }),
        reasoning: format!(
            "${} x {} = ${} regular; ${} + ${} overtime + ${} stipends = ${} weekly; x {} weeks = ${}",
            input.regular_pay_rate.normalize(),
            input.hours_per_week.normalize(),
            regular_pay.normalize(),
            regular_pay.normalize(),
            input.overtime_pay_rate.normalize(),
            input
                .taxable_stipend
                .saturating_add(non_taxable_stipends)
                .normalize(),
            weekly_gross.normalize(),
            contract_weeks,
            contract_total.normalize()
        ),
    };

    GrossPayResult {
        regular_pay,
        taxable_pay,
        non_taxable_stipends,
        weekly_gross,
        contract_total,
        audit_step,
    }
}
