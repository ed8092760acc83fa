//! Plan report assembly — every calculator's output for one profile in one
//! serializable value.
//!
//! One call per run: fresh report out, profile untouched.

use crate::{
    budget::{self, BudgetSummary},
    config::PlanConfig,
    investment::{self, InvestmentProjection},
    payoff::{self, PayoffPlan, Strategy},
    profile::FinancialProfile,
    tax::{self, TaxEstimate},
    types::Money,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanReport {
    pub report_id:    String,
    pub generated_at: DateTime<Utc>,
    pub tax:          TaxEstimate,
    pub budget:       BudgetSummary,
    pub payoff:       PayoffPlan,
    pub investment:   Option<InvestmentProjection>,
}

/// Run every calculator over the profile and assemble the results.
/// The budget is measured against take-home income, not gross.
pub fn build_report(
    profile: &FinancialProfile,
    config: &PlanConfig,
    strategy: Strategy,
    extra_monthly_payment: Money,
) -> PlanReport {
    let tax = tax::estimate(
        profile.annual_income,
        profile.filing_status,
        profile.zip_code.as_deref(),
        &config.tax,
    );
    let budget = budget::summarize(&profile.budget, tax.monthly_take_home, &config.health);
    let payoff = payoff::simulate(&profile.debts, extra_monthly_payment, strategy);
    let investment = profile.investment.as_ref().map(investment::project);

    PlanReport {
        report_id: Uuid::new_v4().to_string(),
        generated_at: Utc::now(),
        tax,
        budget,
        payoff,
        investment,
    }
}
