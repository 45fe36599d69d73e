//! Human-readable renderings of a calculated pay package.
//!
//! These are projections of an already-calculated [`PayPackageResult`]: the
//! derived figures are shown exactly as stored and never recalculated. A
//! negative margin or net pay renders as negative currency.
//!
//! # Example
//!
//! ```
//! use pay_package_engine::calculation::calculate;
//! use pay_package_engine::models::PayPackageInput;
//! use pay_package_engine::summary::format_for_sms;
//!
//! let input = PayPackageInput {
//!     provider_name: "Sarah Johnson".to_string(),
//!     ..PayPackageInput::default()
//! };
//! let sms = format_for_sms(&calculate(&input));
//! assert!(sms.contains("Provider: Sarah Johnson"));
//! ```

mod currency;
mod email;
mod sms;

pub use currency::{format_currency, format_date, format_percentage, format_rate};

use chrono::NaiveDate;

use crate::calculation::{hourly_rate_from_weekly, percentage_of, resolve_contract_weeks};
use crate::config::AgencyProfile;
use crate::models::PayPackageResult;

/// Renders pay packages on behalf of an agency.
#[derive(Debug, Clone, Default)]
pub struct SummaryFormatter {
    agency: AgencyProfile,
}

impl SummaryFormatter {
    /// Creates a formatter for the given agency.
    pub fn new(agency: AgencyProfile) -> Self {
        Self { agency }
    }

    /// The agency this formatter renders for.
    pub fn agency(&self) -> &AgencyProfile {
        &self.agency
    }

    /// HTML email body sent to the provider.
    pub fn email_html(&self, package: &PayPackageResult) -> String {
        email::render(&self.agency, package)
    }

    /// Email subject line.
    pub fn email_subject(&self, package: &PayPackageResult) -> String {
        format!(
            "Pay Package for {} at {}",
            package.input.provider_name, package.input.facility
        )
    }

    /// Plain-text SMS body sent to the provider.
    pub fn sms_text(&self, package: &PayPackageResult) -> String {
        sms::render(&self.agency, package)
    }

    /// Internal plain-text view for recruiters, including the agency side of
    /// the package.
    pub fn agency_summary(&self, package: &PayPackageResult) -> String {
        let input = &package.input;
        let margin_percentage =
            percentage_of(package.weekly_agency_margin, package.weekly_agency_revenue);
        let weeks = resolve_contract_weeks(input.start_date, input.end_date);

        let mut lines = vec![
            format!("{} Pay Package", self.agency.name),
            format!(
                "{} - {} at {} ({})",
                input.provider_name, input.specialty, input.facility, input.location
            ),
        ];
        match period_text(input.start_date, input.end_date, " to ") {
            Some(period) => lines.push(format!("Contract: {} ({} weeks)", period, weeks)),
            None => lines.push(format!("Contract: {} weeks (dates not set)", weeks)),
        }
        lines.extend([
            format!("Bill Rate: {}", format_rate(input.bill_rate)),
            format!("Weekly Gross: {}", format_currency(package.weekly_gross)),
            format!(
                "Effective Hourly Gross: {}",
                format_rate(hourly_rate_from_weekly(
                    package.weekly_gross,
                    input.hours_per_week
                ))
            ),
            format!("Contract Total: {}", format_currency(package.contract_total)),
            format!(
                "Weekly Revenue: {}",
                format_currency(package.weekly_agency_revenue)
            ),
            format!(
                "Total Revenue: {}",
                format_currency(package.total_agency_revenue)
            ),
            format!(
                "Weekly Costs: {}",
                format_currency(package.weekly_agency_costs)
            ),
            format!(
                "Weekly Margin: {} ({})",
                format_currency(package.weekly_agency_margin),
                format_percentage(margin_percentage)
            ),
            format!("Weekly Net Pay: {}", format_currency(package.weekly_net_pay)),
        ]);
        if let Some(notes) = input.notes.as_deref().filter(|n| !n.trim().is_empty()) {
            lines.push(format!("Notes: {}", notes));
        }

        lines.join("\n")
    }
}

/// Renders a pay package as an HTML email body using the default agency.
pub fn format_for_email(package: &PayPackageResult) -> String {
    SummaryFormatter::default().email_html(package)
}

/// Renders a pay package as an SMS body using the default agency.
pub fn format_for_sms(package: &PayPackageResult) -> String {
    SummaryFormatter::default().sms_text(package)
}

/// `start{separator}end`, or `None` unless both dates are set.
fn period_text(
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    separator: &str,
) -> Option<String> {
    match (start, end) {
        (Some(s), Some(e)) => Some(format!("{}{}{}", format_date(s), separator, format_date(e))),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::calculate;
    use crate::models::PayPackageInput;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn reference_package() -> PayPackageResult {
        calculate(&PayPackageInput {
            provider_name: "Sarah Johnson".to_string(),
            specialty: "ICU RN".to_string(),
            facility: "Mercy General".to_string(),
            location: "Sacramento, CA".to_string(),
            start_date: NaiveDate::from_ymd_opt(2023, 6, 15),
            end_date: NaiveDate::from_ymd_opt(2023, 9, 10),
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
        })
    }

    #[test]
    fn test_sms_text() {
        let sms = format_for_sms(&reference_package());
        let expected = "\
Pay Package Summary from Adelphi Healthcare:
- Provider: Sarah Johnson
- Facility: Mercy General (Sacramento, CA)
- Period: 6/15/2023 - 9/10/2023
- Weekly Gross: $2,900.00
- Est. Weekly Net: $2,500.32
- Total Contract: $37,700.00

For complete details, please log in to your account or contact your recruiter.";
        assert_eq!(sms, expected);
    }

    #[test]
    fn test_sms_omits_period_without_dates() {
        let mut package = reference_package();
        package.input.end_date = None;
        let sms = format_for_sms(&package);
        assert!(!sms.contains("Period:"));
    }

    #[test]
    fn test_email_contains_figures() {
        let html = format_for_email(&reference_package());

        assert!(html.contains("<p>Hello Sarah Johnson,</p>"));
        assert!(html.contains("6/15/2023 to 9/10/2023"));
        assert!(html.contains("$40.00/hr"));
        assert!(html.contains("Regular Pay (36 hours):"));
        assert!(html.contains("$1,440.00"));
        assert!(html.contains("$2,900.00"));
        assert!(html.contains("$2,500.32"));
        assert!(html.contains("$37,700.00"));
        assert!(html.contains("123 Healthcare Avenue"));
        assert!(!html.contains("<h2>Notes</h2>"));
    }

    #[test]
    fn test_email_escapes_user_text() {
        let mut package = reference_package();
        package.input.provider_name = "<script>alert(1)</script>".to_string();
        package.input.notes = Some("Housing & parking".to_string());

        let html = format_for_email(&package);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("Housing &amp; parking"));
    }

    #[test]
    fn test_email_uses_stored_figures() {
        let mut package = reference_package();
        package.weekly_gross = dec("1234.5");
        let html = format_for_email(&package);
        assert!(html.contains("$1,234.50"));
    }

    #[test]
    fn test_email_shows_negative_pay_with_leading_minus() {
        let mut package = reference_package();
        package.weekly_gross = dec("-10");
        package.weekly_net_pay = dec("-76.35");
        let html = format_for_email(&package);
        assert!(html.contains("-$10.00"));
        assert!(html.contains("-$76.35"));
        assert!(!html.contains("$-"));
    }

    #[test]
    fn test_sms_shows_negative_pay_with_leading_minus() {
        let mut package = reference_package();
        package.weekly_gross = dec("-10");
        package.weekly_net_pay = dec("-76.35");
        let sms = format_for_sms(&package);
        assert!(sms.contains("- Weekly Gross: -$10.00"));
        assert!(sms.contains("- Est. Weekly Net: -$76.35"));
    }

    #[test]
    fn test_agency_summary_shows_negative_margin() {
        let summary = SummaryFormatter::default().agency_summary(&reference_package());

        assert!(summary.contains("Weekly Revenue: $3,060.00"));
        assert!(summary.contains("Weekly Costs: $3,658.09"));
        assert!(summary.contains("Weekly Margin: -$598.09 (-19.5%)"));
        assert!(summary.contains("Effective Hourly Gross: $80.56/hr"));
        assert!(summary.contains("Contract: 6/15/2023 to 9/10/2023 (13 weeks)"));
    }

    #[test]
    fn test_agency_summary_without_dates_uses_default_weeks() {
        let mut package = reference_package();
        package.input.start_date = None;
        let summary = SummaryFormatter::default().agency_summary(&package);
        assert!(summary.contains("Contract: 13 weeks (dates not set)"));
    }

    #[test]
    fn test_email_subject() {
        let subject = SummaryFormatter::default().email_subject(&reference_package());
        assert_eq!(subject, "Pay Package for Sarah Johnson at Mercy General");
    }

    #[test]
    fn test_custom_agency_profile() {
        let formatter = SummaryFormatter::new(AgencyProfile {
            name: "Northwind Staffing".to_string(),
            short_name: "Northwind".to_string(),
            address: "1 Harbor Rd".to_string(),
            phone: "(555) 010-2000".to_string(),
            email: "hello@northwind.test".to_string(),
        });
        let package = reference_package();

        assert!(formatter.sms_text(&package).starts_with("Pay Package Summary from Northwind:"));
        assert!(formatter.email_html(&package).contains("hello@northwind.test"));
    }
}
