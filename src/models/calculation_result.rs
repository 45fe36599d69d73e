//! Calculation detail models.
//!
//! [`PayPackageCalculation`] is what the preview endpoint returns: the
//! [`PayPackageResult`] itself, the intermediate [`PayBreakdown`] figures, and an
//! [`AuditTrace`] recording each rule that produced them.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::PayPackageResult;

/// The synthetic weekly withholding applied to taxable pay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deductions {
    /// Federal income tax (12%).
    pub federal_income_tax: Decimal,
    /// Social security (6.2%).
    pub social_security: Decimal,
    /// Medicare (1.45%).
    pub medicare: Decimal,
    /// State income tax (4%).
    pub state_income_tax: Decimal,
    /// Sum of the four lines above.
    pub total: Decimal,
}

/// Intermediate figures derived on the way to a [`PayPackageResult`].
///
/// These are never stored; they exist so a caller can show how the result was
/// reached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayBreakdown {
    /// Whole contract weeks used for contract totals.
    pub contract_weeks: u32,
    /// Calendar days between the dates, when both resolved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract_days: Option<i64>,
    /// True when the 13-week fallback was used.
    pub default_weeks_applied: bool,
    /// Regular pay rate × hours per week.
    pub regular_pay: Decimal,
    /// Regular pay + taxable stipend.
    pub taxable_pay: Decimal,
    /// Non-taxable + meals + travel stipends.
    pub non_taxable_stipends: Decimal,
    /// Employer tax share of taxable pay.
    pub employer_tax_amount: Decimal,
    /// Workers' comp share of regular pay.
    pub workers_comp_amount: Decimal,
    /// Housing + travel + bonus + other costs.
    pub additional_costs: Decimal,
    /// Itemised withholding.
    pub deductions: Deductions,
    /// Margin as a percentage of weekly revenue (one decimal place), when
    /// revenue is non-zero.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_percentage: Option<Decimal>,
}

/// A single step in the audit trace recording a calculation decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// Stable identifier of the rule that was applied.
    pub rule_id: String,
    /// Human-readable name of the rule.
    pub rule_name: String,
    /// The formula the rule evaluates.
    pub formula: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation with the actual numbers.
    pub reasoning: String,
}

/// A notable condition found during calculation that is not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level ("low", "medium", "high").
    pub severity: String,
}

impl AuditWarning {
    /// Creates a warning.
    pub fn new(code: &str, message: impl Into<String>, severity: &str) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            severity: severity.to_string(),
        }
    }
}

/// The complete audit trace for a calculation.
///
/// # Example
///
/// ```
/// use pay_package_engine::models::AuditTrace;
///
/// let trace = AuditTrace::default();
/// assert!(trace.steps.is_empty());
/// assert!(trace.warnings.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
}

impl AuditTrace {
    /// Returns true if a warning with the given code was recorded.
    pub fn has_warning(&self, code: &str) -> bool {
        self.warnings.iter().any(|w| w.code == code)
    }
}

/// A result together with how it was derived.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPackageCalculation {
    /// The calculated pay package.
    pub result: PayPackageResult,
    /// Intermediate figures.
    pub breakdown: PayBreakdown,
    /// The rule-by-rule trace.
    pub audit_trace: AuditTrace,
}
