//! Property-based tests for the pay package calculator.

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;
use rust_decimal::Decimal;

use pay_package_engine::calculation::{calculate, calculate_with_breakdown, contract_duration};
use pay_package_engine::models::PayPackageInput;

/// Amounts in cents up to $100,000.00.
fn money() -> impl Strategy<Value = Decimal> {
    (0i64..10_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

fn percent() -> impl Strategy<Value = Decimal> {
    (0i64..2_000).prop_map(|hundredths| Decimal::new(hundredths, 2))
}

fn date() -> impl Strategy<Value = Option<NaiveDate>> {
    prop::option::of((0i64..3_000).prop_map(|offset| {
        NaiveDate::from_ymd_opt(2020, 1, 1).unwrap() + Duration::days(offset)
    }))
}

prop_compose! {
    fn package_input()(
        rates in (money(), money(), money(), (0i64..8_000).prop_map(|h| Decimal::new(h, 2))),
        stipends in (money(), money(), money(), money()),
        burdens in (percent(), percent(), money(), money()),
        costs in (money(), money(), money(), money()),
        dates in (date(), date()),
    ) -> PayPackageInput {
        let (bill_rate, regular_pay_rate, overtime_pay_rate, hours_per_week) = rates;
        let (taxable_stipend, non_taxable_stipend, meals_stipend, travel_stipend) = stipends;
        let (employer_taxes, workers_comp, health_insurance, professional_liability) = burdens;
        let (housing, travel, bonus, other_costs) = costs;
        PayPackageInput {
            provider_name: "Property Provider".to_string(),
            start_date: dates.0,
            end_date: dates.1,
            hours_per_week,
            bill_rate,
            regular_pay_rate,
            overtime_pay_rate,
            taxable_stipend,
            non_taxable_stipend,
            meals_stipend,
            travel_stipend,
            employer_taxes,
            workers_comp,
            health_insurance,
            professional_liability,
            housing,
            travel,
            bonus,
            other_costs,
            ..PayPackageInput::default()
        }
    }
}

proptest! {
    #[test]
    fn test_weekly_gross_is_pay_plus_stipends(input in package_input()) {
        let result = calculate(&input);
        let expected = input.regular_pay_rate * input.hours_per_week
            + input.overtime_pay_rate
            + input.taxable_stipend
            + input.non_taxable_stipend
            + input.meals_stipend
            + input.travel_stipend;
        prop_assert_eq!(result.weekly_gross, expected);
    }

    #[test]
    fn test_margin_is_revenue_minus_costs(input in package_input()) {
        let result = calculate(&input);
        prop_assert_eq!(
            result.weekly_agency_margin,
            result.weekly_agency_revenue - result.weekly_agency_costs
        );
        prop_assert_eq!(result.weekly_agency_revenue, input.bill_rate * input.hours_per_week);
    }

    #[test]
    fn test_contract_totals_use_resolved_weeks(input in package_input()) {
        let calc = calculate_with_breakdown(&input);
        let weeks = contract_duration(input.start_date, input.end_date)
            .map_or(13, |d| d.weeks);

        prop_assert_eq!(calc.breakdown.contract_weeks, weeks);
        prop_assert_eq!(
            calc.result.contract_total,
            calc.result.weekly_gross * Decimal::from(weeks)
        );
        prop_assert_eq!(
            calc.result.total_agency_revenue,
            calc.result.weekly_agency_revenue * Decimal::from(weeks)
        );
    }

    #[test]
    fn test_net_pay_withholds_from_taxable_pay_only(input in package_input()) {
        let calc = calculate_with_breakdown(&input);
        let taxable = input.regular_pay_rate * input.hours_per_week + input.taxable_stipend;

        prop_assert_eq!(calc.breakdown.taxable_pay, taxable);
        prop_assert_eq!(calc.breakdown.deductions.total, taxable * Decimal::new(2365, 4));
        prop_assert_eq!(
            calc.result.weekly_net_pay,
            calc.result.weekly_gross - calc.breakdown.deductions.total
        );
    }

    #[test]
    fn test_calculation_is_idempotent(input in package_input()) {
        let first = calculate(&input);
        let second = calculate(&first.input);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn test_result_carries_input_unchanged(input in package_input()) {
        let result = calculate(&input);
        prop_assert_eq!(result.input, input);
    }

    #[test]
    fn test_extreme_values_never_panic(
        values in prop::collection::vec((any::<i64>(), 0u32..10), 8),
    ) {
        let d: Vec<Decimal> = values.iter().map(|(m, s)| Decimal::new(*m, *s)).collect();
        let input = PayPackageInput {
            hours_per_week: d[0],
            bill_rate: d[1],
            regular_pay_rate: d[2],
            overtime_pay_rate: d[3],
            taxable_stipend: d[4],
            employer_taxes: d[5],
            workers_comp: d[6],
            other_costs: d[7],
            ..PayPackageInput::default()
        };

        let calc = calculate_with_breakdown(&input);
        prop_assert_eq!(calc.audit_trace.steps.len(), 6);
    }
}
