//! Demonstration pay packages.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::calculation::calculate;
use crate::models::{PayPackageInput, PayPackageResult};

fn whole(n: i64) -> Decimal {
    Decimal::from(n)
}

/// Three calculated packages, oldest first, used to seed a fresh store.
pub fn sample_packages() -> Vec<PayPackageResult> {
    let employer_taxes = Decimal::new(765, 2);

    let inputs = [
        PayPackageInput {
            provider_name: "Sarah Johnson".to_string(),
            specialty: "nursing".to_string(),
            facility: "Memorial Hospital".to_string(),
            location: "Denver, CO".to_string(),
            start_date: NaiveDate::from_ymd_opt(2023, 6, 15),
            end_date: NaiveDate::from_ymd_opt(2023, 9, 10),
            hours_per_week: whole(36),
            bill_rate: whole(85),
            regular_pay_rate: whole(40),
            overtime_pay_rate: whole(60),
            taxable_stipend: whole(250),
            non_taxable_stipend: whole(800),
            meals_stipend: whole(350),
            employer_taxes,
            workers_comp: whole(2),
            health_insurance: whole(350),
            professional_liability: whole(100),
            other_costs: whole(150),
            notes: Some("Excellent candidate with ICU experience".to_string()),
            ..PayPackageInput::default()
        },
        PayPackageInput {
            provider_name: "Michael Chen".to_string(),
            specialty: "physician".to_string(),
            facility: "City General".to_string(),
            location: "Chicago, IL".to_string(),
            start_date: NaiveDate::from_ymd_opt(2023, 6, 10),
            end_date: NaiveDate::from_ymd_opt(2023, 8, 5),
            hours_per_week: whole(40),
            bill_rate: whole(120),
            regular_pay_rate: whole(65),
            overtime_pay_rate: Decimal::new(975, 1),
            taxable_stipend: whole(300),
            non_taxable_stipend: whole(950),
            meals_stipend: whole(400),
            travel_stipend: whole(200),
            employer_taxes,
            workers_comp: whole(2),
            health_insurance: whole(350),
            professional_liability: whole(150),
            bonus: whole(500),
            notes: Some("Experienced surgeon, needs housing close to hospital".to_string()),
            ..PayPackageInput::default()
        },
        PayPackageInput {
            provider_name: "Emily Rodriguez".to_string(),
            specialty: "therapy".to_string(),
            facility: "St. Mary's".to_string(),
            location: "Miami, FL".to_string(),
            start_date: NaiveDate::from_ymd_opt(2023, 6, 5),
            end_date: NaiveDate::from_ymd_opt(2023, 9, 1),
            hours_per_week: whole(36),
            bill_rate: whole(95),
            regular_pay_rate: whole(50),
            overtime_pay_rate: whole(75),
            taxable_stipend: whole(200),
            non_taxable_stipend: whole(850),
            meals_stipend: whole(300),
            employer_taxes,
            workers_comp: whole(2),
            health_insurance: whole(350),
            professional_liability: whole(100),
            housing: whole(300),
            travel: whole(200),
            notes: Some("Physical therapist with pediatric experience".to_string()),
            ..PayPackageInput::default()
        },
    ];

    inputs.iter().map(calculate).collect()
}
