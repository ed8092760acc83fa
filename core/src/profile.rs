//! The financial profile — the single injected state object.
//!
//! RULE: No ambient global state. The caller builds (or loads) one
//! FinancialProfile and passes it by reference; every calculator returns a
//! fresh value and leaves the profile untouched.

use crate::{
    budget::BudgetEntry,
    error::PlanResult,
    investment::ProjectionInput,
    payoff::Debt,
    tax::FilingStatus,
    types::Money,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FinancialProfile {
    pub annual_income: Money,
    pub filing_status: FilingStatus,
    #[serde(default)]
    pub zip_code: Option<String>,
    #[serde(default)]
    pub debts: Vec<Debt>,
    #[serde(default)]
    pub budget: Vec<BudgetEntry>,
    #[serde(default)]
    pub investment: Option<ProjectionInput>,
}

impl FinancialProfile {
    /// Load a profile from a JSON file.
    pub fn load(path: &str) -> PlanResult<Self> {
        log::debug!("loading profile from {path}");
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}
