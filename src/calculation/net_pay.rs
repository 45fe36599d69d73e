//! Estimated net pay calculation.
//!
//! Net pay uses a fixed synthetic withholding model applied to taxable pay:
//! 12% federal income tax, 6.2% social security, 1.45% medicare and 4% state
//! income tax. Non-taxable stipends pass through untouched.

use rust_decimal::Decimal;

use crate::models::{AuditStep, Deductions};

use super::saturating_sum;

/// The withholding rates applied to taxable pay, as fractions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WithholdingRates {
    /// Federal income tax.
    pub federal_income_tax: Decimal,
    /// Social security.
    pub social_security: Decimal,
    /// Medicare.
    pub medicare: Decimal,
    /// State income tax.
    pub state_income_tax: Decimal,
}

impl WithholdingRates {
    /// The standard estimate: 12% + 6.2% + 1.45% + 4%.
    pub fn standard() -> Self {
        Self {
            federal_income_tax: Decimal::new(12, 2),
            social_security: Decimal::new(62, 3),
            medicare: Decimal::new(145, 4),
            state_income_tax: Decimal::new(4, 2),
        }
    }

    /// Computes each withholding line for a taxable amount.
    pub fn deductions(&self, taxable_pay: Decimal) -> Deductions {
        let federal_income_tax = taxable_pay.saturating_mul(self.federal_income_tax);
        let social_security = taxable_pay.saturating_mul(self.social_security);
        let medicare = taxable_pay.saturating_mul(self.medicare);
        let state_income_tax = taxable_pay.saturating_mul(self.state_income_tax);
        let total = saturating_sum([
            federal_income_tax,
            social_security,
            medicare,
            state_income_tax,
        ]);

        Deductions {
            federal_income_tax,
            social_security,
            medicare,
            state_income_tax,
            total,
        }
    }
}

/// Net pay figures and the audit step that produced them.
#[derive(Debug, Clone)]
pub struct NetPayResult {
    /// Itemised withholding.
    pub deductions: Deductions,
    /// Weekly gross minus total withholding.
    pub weekly_net_pay: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Estimates weekly take-home pay.
///
/// # Examples
///
/// ```
/// use pay_package_engine::calculation::calculate_net_pay;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let result = calculate_net_pay(Decimal::from(2900), Decimal::from(1690), 1);
/// assert_eq!(result.deductions.total, Decimal::from_str("399.685").unwrap());
/// assert_eq!(result.weekly_net_pay, Decimal::from_str("2500.315").unwrap());
/// ```
pub fn calculate_net_pay(
    weekly_gross: Decimal,
    taxable_pay: Decimal,
    step_number: u32,
) -> NetPayResult {
    let deductions = WithholdingRates::standard().deductions(taxable_pay);
    let weekly_net_pay = weekly_gross.saturating_sub(deductions.total);

    let audit_step = AuditStep {
        step_number,
        rule_id: "net_pay".to_string(),
        rule_name: "Estimated Net Pay".to_string(),
        formula: "gross - taxable_pay x (0.12 + 0.062 + 0.0145 + 0.04)".to_string(),
        input: serde_json::json!({
            "weekly_gross": weekly_gross.normalize().to_string(),
            "taxable_pay": taxable_pay.normalize().to_string()
        }),
        output: serde_json::json!({
            "federal_income_tax": deductions.federal_income_tax.normalize().to_string(),
            "social_security": deductions.social_security.normalize().to_string(),
            "medicare": deductions.medicare.normalize().to_string(),
            "state_income_tax": deductions.state_income_tax.normalize().to_string(),
            "total_deductions": deductions.total.normalize().to_string(),
            "weekly_net_pay": weekly_net_pay.normalize().to_string()
        }),
        reasoning: format!(
            "${} - ${} withholding on ${} taxable = ${}",
            weekly_gross.normalize(),
            deductions.total.normalize(),
            taxable_pay.normalize(),
            weekly_net_pay.normalize()
        ),
    };

    NetPayResult {
        deductions,
        weekly_net_pay,
        audit_step,
    }
}
