//! Plain-text SMS body for a pay package.

use crate::config::AgencyProfile;
use crate::models::PayPackageResult;

use super::currency::format_currency;
use super::period_text;

pub(super) fn render(agency: &AgencyProfile, package: &PayPackageResult) -> String {
    let input = &package.input;
    let mut lines = vec![
        format!("Pay Package Summary from {}:", agency.short_name),
        format!("- Provider: {}", input.provider_name),
        format!("- Facility: {} ({})", input.facility, input.location),
    ];

    if let Some(period) = period_text(input.start_date, input.end_date, " - ") {
        lines.push(format!("- Period: {}", period));
    }

    lines.push(format!(
        "- Weekly Gross: {}",
        format_currency(package.weekly_gross)
    ));
    lines.push(format!(
        "- Est. Weekly Net: {}",
        format_currency(package.weekly_net_pay)
    ));
    lines.push(format!(
        "- Total Contract: {}",
        format_currency(package.contract_total)
    ));
    lines.push(String::new());
    lines.push(
        "For complete details, please log in to your account or contact your recruiter."
            .to_string(),
    );

    lines.join("\n")
}
