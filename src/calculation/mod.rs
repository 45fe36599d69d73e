//! Calculation logic for the Pay Package Engine.
//!
//! Each rule lives in its own module and returns its figures together with
//! an [`AuditStep`](crate::models::AuditStep): contract duration, weekly
//! gross pay, agency revenue, agency costs, agency margin and estimated net
//! pay. [`calculate_with_breakdown`] runs them in order.

mod agency_cost;
mod agency_revenue;
mod duration;
mod gross_pay;
mod margin;
mod net_pay;
mod pay_package;
mod ratios;

pub use agency_cost::{AgencyCostResult, calculate_agency_costs};
pub use agency_revenue::{AgencyRevenueResult, calculate_agency_revenue};
pub use duration::{
    ContractDuration, ContractTermResult, DEFAULT_CONTRACT_WEEKS, contract_duration,
    contract_duration_between, parse_contract_date, parse_contract_instant,
    resolve_contract_term, resolve_contract_weeks, resolve_contract_weeks_from_str,
};
pub use gross_pay::{GrossPayResult, calculate_gross_pay};
pub use margin::{AgencyMarginResult, calculate_agency_margin};
pub use net_pay::{NetPayResult, WithholdingRates, calculate_net_pay};
pub use pay_package::{calculate, calculate_with_breakdown};
pub use ratios::{hourly_rate_from_weekly, percentage_of};

use rust_decimal::Decimal;

/// Sums amounts, saturating at the `Decimal` bounds instead of panicking.
pub(crate) fn saturating_sum(items: impl IntoIterator<Item = Decimal>) -> Decimal {
    items
        .into_iter()
        .fold(Decimal::ZERO, |acc, item| acc.saturating_add(item))
}
