//! HTML email body for a pay package.

use tera::escape_html;

use crate::config::AgencyProfile;
use crate::models::PayPackageResult;

use super::currency::{format_currency, format_hours, format_rate};
use super::period_text;

const STYLE: &str = "\
body { font-family: Arial, sans-serif; line-height: 1.6; color: #333; }
.container { max-width: 600px; margin: 0 auto; padding: 20px; }
h1 { color: #0073b6; }
h2 { color: #4caf50; margin-top: 20px; }
.footer { margin-top: 30px; padding-top: 10px; border-top: 1px solid #eee; font-size: 12px; color: #777; }
.highlight { background-color: #f8f9fa; padding: 15px; border-radius: 5px; margin: 15px 0; }
table { width: 100%; border-collapse: collapse; }
table td, table th { padding: 8px; text-align: left; border-bottom: 1px solid #ddd; }
.amount { text-align: right; font-weight: bold; }";

fn row(html: &mut String, label: &str, value: &str) {
    html.push_str(&format!(
        "<tr><td>{}</td><td>{}</td></tr>\n",
        label, value
    ));
}

fn amount_row(html: &mut String, label: &str, value: &str) {
    html.push_str(&format!(
        "<tr><td>{}</td><td class=\"amount\">{}</td></tr>\n",
        label, value
    ));
}

pub(super) fn render(agency: &AgencyProfile, package: &PayPackageResult) -> String {
    let input = &package.input;
    let regular_pay = input.regular_pay_rate.saturating_mul(input.hours_per_week);
    let provider = escape_html(&input.provider_name);
    let agency_name = escape_html(&agency.name);
    let hours = format_hours(input.hours_per_week);

    let mut html = String::new();
    html.push_str("<html>\n<head>\n<style>\n");
    html.push_str(STYLE);
    html.push_str("\n</style>\n</head>\n<body>\n<div class=\"container\">\n");
    html.push_str("<h1>Healthcare Pay Package Details</h1>\n");
    html.push_str(&format!("<p>Hello {},</p>\n", provider));
    html.push_str(&format!(
        "<p>Here are the details of your pay package with {}:</p>\n",
        agency_name
    ));

    html.push_str("<div class=\"highlight\">\n<h2>Assignment Information</h2>\n<table>\n");
    row(&mut html, "Provider:", &provider);
    row(&mut html, "Specialty:", &escape_html(&input.specialty));
    row(&mut html, "Facility:", &escape_html(&input.facility));
    row(&mut html, "Location:", &escape_html(&input.location));
    if let Some(period) = period_text(input.start_date, input.end_date, " to ") {
        row(&mut html, "Assignment Period:", &period);
    }
    row(&mut html, "Hours Per Week:", &hours);
    html.push_str("</table>\n</div>\n");

    html.push_str("<h2>Weekly Pay Breakdown</h2>\n<table>\n");
    amount_row(&mut html, "Regular Pay Rate:", &format_rate(input.regular_pay_rate));
    amount_row(
        &mut html,
        &format!("Regular Pay ({} hours):", hours),
        &format_currency(regular_pay),
    );
    amount_row(&mut html, "Overtime Pay:", &format_currency(input.overtime_pay_rate));
    amount_row(&mut html, "Taxable Stipend:", &format_currency(input.taxable_stipend));
    amount_row(
        &mut html,
        "Non-Taxable Stipend:",
        &format_currency(input.non_taxable_stipend),
    );
    amount_row(&mut html, "Meals Stipend:", &format_currency(input.meals_stipend));
    amount_row(&mut html, "Travel Stipend:", &format_currency(input.travel_stipend));
    amount_row(
        &mut html,
        "<strong>Total Weekly Gross:</strong>",
        &format_currency(package.weekly_gross),
    );
    html.push_str("</table>\n");

    html.push_str("<h2>Estimated Take-Home Pay</h2>\n<table>\n");
    amount_row(
        &mut html,
        "Weekly Net Pay (after taxes):",
        &format_currency(package.weekly_net_pay),
    );
    amount_row(
        &mut html,
        "Total Contract Value:",
        &format_currency(package.contract_total),
    );
    html.push_str("</table>\n");

    if let Some(notes) = input.notes.as_deref().filter(|n| !n.trim().is_empty()) {
        html.push_str("<h2>Notes</h2>\n");
        html.push_str(&format!("<p>{}</p>\n", escape_html(notes)));
    }

    html.push_str(&format!(
        "<p>If you have any questions about this pay package, please contact your {} representative.</p>\n",
        escape_html(&agency.short_name)
    ));
    html.push_str("<div class=\"footer\">\n");
    html.push_str(&format!("<p>{}</p>\n", agency_name));
    html.push_str(&format!(
        "<p>{} | {} | {}</p>\n",
        escape_html(&agency.address),
        escape_html(&agency.phone),
        escape_html(&agency.email)
    ));
    html.push_str("</div>\n</div>\n</body>\n</html>\n");

    html
}
