//! The full pay package calculation.
//!
//! Runs each rule in order and collects the audit steps:
//!
//! 1. Contract duration
//! 2. Weekly gross and contract total
//! 3. Agency revenue
//! 4. Agency costs
//! 5. Agency margin
//! 6. Estimated net pay

use rust_decimal::Decimal;
use tracing::debug;

use crate::models::{
    AuditTrace, AuditWarning, PayBreakdown, PayPackageCalculation, PayPackageInput,
    PayPackageResult,
};

use super::{
    calculate_agency_costs, calculate_agency_margin, calculate_agency_revenue,
    calculate_gross_pay, calculate_net_pay, resolve_contract_term,
};

/// Calculates a pay package.
///
/// Never fails. Absent numeric inputs are zero, so an empty input yields a
/// record whose derived figures are all zero.
///
/// # Examples
///
/// ```
/// use pay_package_engine::calculation::calculate;
/// use pay_package_engine::models::PayPackageInput;
/// use rust_decimal::Decimal;
///
/// let result = calculate(&PayPackageInput::default());
/// assert_eq!(result.weekly_gross, Decimal::ZERO);
/// assert_eq!(result.weekly_net_pay, Decimal::ZERO);
/// ```
pub fn calculate(input: &PayPackageInput) -> PayPackageResult {
    calculate_with_breakdown(input).result
}

/// Calculates a pay package and returns the intermediate figures and the
/// audit trace alongside the result.
pub fn calculate_with_breakdown(input: &PayPackageInput) -> PayPackageCalculation {
    let mut trace = AuditTrace::default();

    let term = resolve_contract_term(input.start_date, input.end_date, 1);
    trace.steps.push(term.audit_step);
    trace.warnings.extend(term.warnings);

    let gross = calculate_gross_pay(input, term.weeks, 2);
    trace.steps.push(gross.audit_step.clone());

    let revenue = calculate_agency_revenue(input, term.weeks, 3);
    trace.steps.push(revenue.audit_step);

    let costs = calculate_agency_costs(input, &gross, 4);
    trace.steps.push(costs.audit_step);

    let margin = calculate_agency_margin(revenue.weekly_revenue, costs.weekly_costs, 5);
    trace.steps.push(margin.audit_step);
    if margin.weekly_margin < Decimal::ZERO {
        trace.warnings.push(AuditWarning::new(
            "NEGATIVE_MARGIN",
            format!(
                "Weekly agency margin is negative (${})",
                margin.weekly_margin.normalize()
            ),
            "high",
        ));
    }

    let net = calculate_net_pay(gross.weekly_gross, gross.taxable_pay, 6);
    trace.steps.push(net.audit_step);
    if net.weekly_net_pay < Decimal::ZERO {
        trace.warnings.push(AuditWarning::new(
            "NEGATIVE_NET_PAY",
            format!(
                "Estimated weekly net pay is negative (${})",
                net.weekly_net_pay.normalize()
            ),
            "medium",
        ));
    }

    debug!(
        contract_weeks = term.weeks,
        weekly_gross = %gross.weekly_gross,
        weekly_margin = %margin.weekly_margin,
        warnings = trace.warnings.len(),
        "pay package calculated"
    );

    let result = PayPackageResult {
        input: input.clone(),
        weekly_gross: gross.weekly_gross,
        contract_total: gross.contract_total,
        weekly_agency_revenue: revenue.weekly_revenue,
        total_agency_revenue: revenue.total_revenue,
        weekly_agency_costs: costs.weekly_costs,
        weekly_agency_margin: margin.weekly_margin,
        weekly_net_pay: net.weekly_net_pay,
    };

    let breakdown = PayBreakdown {
        contract_weeks: term.weeks,
        contract_days: term.duration.map(|d| d.days),
        default_weeks_applied: term.default_applied,
        regular_pay: gross.regular_pay,
        taxable_pay: gross.taxable_pay,
        non_taxable_stipends: gross.non_taxable_stipends,
        employer_tax_amount: costs.employer_tax_amount,
        workers_comp_amount: costs.workers_comp_amount,
        additional_costs: costs.additional_costs,
        deductions: net.deductions,
        margin_percentage: margin.margin_percentage,
    };

    PayPackageCalculation {
        result,
        breakdown,
        audit_trace: trace,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(s: &str) -> Option<NaiveDate> {
        Some(NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap())
    }

    fn reference_input() -> PayPackageInput {
        PayPackageInput {
            provider_name: "Sarah Johnson".to_string(),
            specialty: "ICU RN".to_string(),
            facility: "Mercy General".to_string(),
            location: "Sacramento, CA".to_string(),
            start_date: date("2024-01-01"),
            end_date: date("2024-03-28"),
            hours_per_week: dec("36"),
            bill_rate: dec("85"),
            regular_pay_rate: dec("40"),
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
    fn test_reference_package() {
        let result = calculate(&reference_input());

        assert_eq!(result.weekly_gross, dec("2900"));
        assert_eq!(result.contract_total, dec("37700"));
        assert_eq!(result.weekly_agency_revenue, dec("3060"));
        assert_eq!(result.total_agency_revenue, dec("39780"));
        assert_eq!(result.weekly_agency_costs, dec("3658.085"));
        assert_eq!(result.weekly_agency_margin, dec("-598.085"));
        assert_eq!(result.weekly_net_pay, dec("2500.315"));
    }

    #[test]
    fn test_breakdown_and_trace() {
        let calc = calculate_with_breakdown(&reference_input());

        assert_eq!(calc.breakdown.contract_weeks, 13);
        assert_eq!(calc.breakdown.contract_days, Some(87));
        assert!(!calc.breakdown.default_weeks_applied);
        assert_eq!(calc.breakdown.taxable_pay, dec("1690"));
        assert_eq!(calc.breakdown.deductions.total, dec("399.685"));
        assert_eq!(calc.breakdown.margin_percentage, Some(dec("-19.5")));

        let rules: Vec<&str> = calc
            .audit_trace
            .steps
            .iter()
            .map(|s| s.rule_id.as_str())
            .collect();
        assert_eq!(
            rules,
            vec![
                "contract_duration",
                "weekly_gross",
                "agency_revenue",
                "agency_costs",
                "agency_margin",
                "net_pay"
            ]
        );
        let numbers: Vec<u32> = calc.audit_trace.steps.iter().map(|s| s.step_number).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5, 6]);
        assert!(calc.audit_trace.has_warning("NEGATIVE_MARGIN"));
        assert!(!calc.audit_trace.has_warning("NEGATIVE_NET_PAY"));
    }

    #[test]
    fn test_calculate_matches_breakdown_result() {
        let input = reference_input();
        assert_eq!(calculate(&input), calculate_with_breakdown(&input).result);
    }

    #[test]
    fn test_empty_input_is_all_zero() {
        let calc = calculate_with_breakdown(&PayPackageInput::default());
        let result = &calc.result;

        for value in [
            result.weekly_gross,
            result.contract_total,
            result.weekly_agency_revenue,
            result.total_agency_revenue,
            result.weekly_agency_costs,
            result.weekly_agency_margin,
            result.weekly_net_pay,
        ] {
            assert_eq!(value, Decimal::ZERO);
        }
        assert!(calc.breakdown.default_weeks_applied);
        assert!(calc.audit_trace.has_warning("DEFAULT_CONTRACT_WEEKS"));
        assert!(!calc.audit_trace.has_warning("NEGATIVE_MARGIN"));
    }

    #[test]
    fn test_missing_dates_use_thirteen_weeks() {
        let input = PayPackageInput {
            start_date: None,
            ..reference_input()
        };
        let result = calculate(&input);
        assert_eq!(result.contract_total, dec("37700"));
    }

    #[test]
    fn test_input_is_echoed() {
        let input = reference_input();
        let result = calculate(&input);
        assert_eq!(result.input, input);
    }

    #[test]
    fn test_negative_inputs_propagate() {
        let input = PayPackageInput {
            regular_pay_rate: dec("-10"),
            hours_per_week: dec("10"),
            ..PayPackageInput::default()
        };
        let calc = calculate_with_breakdown(&input);

        assert_eq!(calc.result.weekly_gross, dec("-100"));
        assert_eq!(calc.result.weekly_net_pay, dec("-76.35"));
        assert!(calc.audit_trace.has_warning("NEGATIVE_NET_PAY"));
    }

    #[test]
    fn test_idempotent() {
        let input = reference_input();
        let first = calculate(&input);
        let second = calculate(&input);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }
}
