//! Agency cost calculation.
//!
//! The agency's all-in weekly cost of a provider is their gross pay plus
//! employer-side burdens plus any additional flat costs. Employer taxes apply
//! to taxable pay; workers' comp applies to regular pay only. Both are given in
//! percentage points and divided by 100 where they are applied.

use rust_decimal::Decimal;

use crate::models::{AuditStep, PayPackageInput};

use super::{GrossPayResult, saturating_sum};

/// Agency cost figures and the audit step that produced them.
#[derive(Debug, Clone)]
pub struct AgencyCostResult {
    /// Taxable pay × employer tax percentage.
    pub employer_tax_amount: Decimal,
    /// Regular pay × workers' comp percentage.
    pub workers_comp_amount: Decimal,
    /// Housing + travel + bonus + other costs.
    pub additional_costs: Decimal,
    /// All-in weekly cost.
    pub weekly_costs: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Applies a percentage-points figure to a base amount.
pub(crate) fn apply_percentage(base: Decimal, percentage_points: Decimal) -> Decimal {
    base.saturating_mul(percentage_points / Decimal::ONE_HUNDRED)
}

/// Calculates the agency's weekly cost for a provider.
///
/// # Examples
///
/// ```
/// use pay_package_engine::calculation::{calculate_agency_costs, calculate_gross_pay};
/// use pay_package_engine::models::PayPackageInput;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let input = PayPackageInput {
///     regular_pay_rate: Decimal::from(40),
///     hours_per_week: Decimal::from(36),
///     workers_comp: Decimal::from(2),
///     health_insurance: Decimal::from(350),
///     ..PayPackageInput::default()
/// };
///
/// let gross = calculate_gross_pay(&input, 13, 1);
/// let costs = calculate_agency_costs(&input, &gross, 2);
/// assert_eq!(costs.workers_comp_amount, Decimal::from_str("28.8").unwrap());
/// assert_eq!(costs.weekly_costs, Decimal::from_str("1818.8").unwrap());
/// ```
pub fn calculate_agency_costs(
    input: &PayPackageInput,
    gross: &GrossPayResult,
    step_number: u32,
) -> AgencyCostResult {
    let employer_tax_amount = apply_percentage(gross.taxable_pay, input.employer_taxes);
    let workers_comp_amount = apply_percentage(gross.regular_pay, input.workers_comp);
    let additional_costs =
        saturating_sum([input.housing, input.travel, input.bonus, input.other_costs]);

    let weekly_costs = saturating_sum([
        gross.weekly_gross,
        employer_tax_amount,
        workers_comp_amount,
        input.health_insurance,
        input.professional_liability,
        additional_costs,
    ]);

    let audit_step = AuditStep {
        step_number,
        rule_id: "agency_costs".to_string(),
        rule_name: "Agency Costs".to_string(),
        formula: "gross + taxable_pay x employer_taxes% + regular_pay x workers_comp% \
                  + health + liability + housing + travel + bonus + other"
            .to_string(),
        input: serde_json::json!({
            "weekly_gross": gross.weekly_gross.normalize().to_string(),
            "taxable_pay": gross.taxable_pay.normalize().to_string(),
            "regular_pay": gross.regular_pay.normalize().to_string(),
            "employer_taxes": input.employer_taxes.normalize().to_string(),
            "workers_comp": input.workers_comp.normalize().to_string(),
            "health_insurance": input.health_insurance.normalize().to_string(),
            "professional_liability": input.professional_liability.normalize().to_string(),
            "housing": input.housing.normalize().to_string(),
            "travel": input.travel.normalize().to_string(),
            "bonus": input.bonus.normalize().to_string(),
            "other_costs": input.other_costs.normalize().to_string()
        }),
        output: serde_json::json!({
            "employer_tax_amount": employer_tax_amount.normalize().to_string(),
            "workers_comp_amount": workers_comp_amount.normalize().to_string(),
            "additional_costs": additional_costs.normalize().to_string(),
            "weekly_costs": weekly_costs.normalize().to_string()
        }),
        reasoning: format!(
            "${} gross + ${} employer tax ({}% of ${}) + ${} workers comp ({}% of ${}) \
             + ${} insurance/liability + ${} additional = ${}",
            gross.weekly_gross.normalize(),
            employer_tax_amount.normalize(),
            input.employer_taxes.normalize(),
            gross.taxable_pay.normalize(),
            workers_comp_amount.normalize(),
            input.workers_comp.normalize(),
            gross.regular_pay.normalize(),
            input
                .health_insurance
                .saturating_add(input.professional_liability)
                .normalize(),
            additional_costs.normalize(),
            weekly_costs.normalize()
        ),
    };

    AgencyCostResult {
        employer_tax_amount,
        workers_comp_amount,
        additional_costs,
        weekly_costs,
        audit_step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::calculate_gross_pay;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn reference_input() -> PayPackageInput {
        PayPackageInput {
            regular_pay_rate: dec("40"),
            hours_per_week: dec("36"),
            overtime_pay_rate: dec("60"),
            taxable_stipend: dec("250"),
            non_taxable_stipend: dec("800"),
            meals_stipend: dec("350"),
            employer_taxes: dec("7.65"),
            workers_comp: dec("2"),
            health_insurance: dec("350"),
            professional_liability: dec("100"),
            other_costs: dec("150"),
            ..PayPackageInput::default()
        }
    }

    #[test]
    fn test_reference_costs() {
        let input = reference_input();
        let gross = calculate_gross_pay(&input, 13, 1);
        let costs = calculate_agency_costs(&input, &gross, 2);

        assert_eq!(costs.employer_tax_amount, dec("129.285"));
        assert_eq!(costs.workers_comp_amount, dec("28.8"));
        assert_eq!(costs.additional_costs, dec("150"));
        assert_eq!(costs.weekly_costs, dec("3658.085"));
    }

    #[test]
    fn test_employer_tax_uses_taxable_pay_and_workers_comp_uses_regular_pay() {
        let input = PayPackageInput {
            regular_pay_rate: dec("10"),
            hours_per_week: dec("10"),
            taxable_stipend: dec("100"),
            employer_taxes: dec("10"),
            workers_comp: dec("10"),
            ..PayPackageInput::default()
        };
        let gross = calculate_gross_pay(&input, 13, 1);
        let costs = calculate_agency_costs(&input, &gross, 2);

        assert_eq!(costs.employer_tax_amount, dec("20"));
        assert_eq!(costs.workers_comp_amount, dec("10"));
    }

    #[test]
    fn test_additional_costs_are_flat() {
        let input = PayPackageInput {
            housing: dec("300"),
            travel: dec("200"),
            bonus: dec("500"),
            other_costs: dec("25.50"),
            ..PayPackageInput::default()
        };
        let gross = calculate_gross_pay(&input, 13, 1);
        let costs = calculate_agency_costs(&input, &gross, 2);

        assert_eq!(costs.additional_costs, dec("1025.50"));
        assert_eq!(costs.weekly_costs, dec("1025.50"));
    }

    #[test]
    fn test_apply_percentage_divides_by_100() {
        assert_eq!(apply_percentage(dec("1000"), dec("7.65")), dec("76.5"));
        assert_eq!(apply_percentage(dec("1000"), Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn test_audit_reasoning_lists_components() {
        let input = reference_input();
        let gross = calculate_gross_pay(&input, 13, 1);
        let costs = calculate_agency_costs(&input, &gross, 2);

        assert_eq!(costs.audit_step.rule_id, "agency_costs");
        assert!(costs.audit_step.reasoning.contains("$129.285 employer tax"));
        assert!(costs.audit_step.reasoning.contains("= $3658.085"));
    }
}
