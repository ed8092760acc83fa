//! The budget planner — monthly category totals and a weighted health score.
//!
//! The score is an additive blend of component scores in [0, 1], each
//! weighted per HealthFormulaWeights, scaled to [0, 100] and mapped to a
//! band through the configured thresholds. Zero income scores zero rather
//! than dividing by it.

use crate::{config::HealthConfig, types::Money};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CategoryKind {
    Essential,
    Discretionary,
    Savings,
}

/// One budget line as entered by the user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BudgetEntry {
    pub category:       String,
    pub monthly_amount: Money,
    pub kind:           CategoryKind,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum HealthBand {
    Excellent,
    Good,
    Fair,
    AtRisk,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetHealth {
    /// 0–100.
    pub score: f64,
    pub band:  HealthBand,
    pub savings_component: f64,
    pub essential_component: f64,
    pub discretionary_component: f64,
    pub surplus_component: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetSummary {
    pub monthly_income:      Money,
    /// Essential plus discretionary spend; savings allocations are not
    /// expenses.
    pub total_expenses:      Money,
    pub essential_spend:     Money,
    pub discretionary_spend: Money,
    pub savings_allocated:   Money,
    /// Income minus every allocation, savings included. Negative when the
    /// budget overspends.
    pub surplus:             Money,
    /// Savings allocation plus positive surplus, over income.
    pub savings_rate:        f64,
    pub health:              BudgetHealth,
}

/// Summarize one month of budget lines against a monthly income.
pub fn summarize(
    entries: &[BudgetEntry],
    monthly_income: Money,
    config: &HealthConfig,
) -> BudgetSummary {
    let mut essential = 0.0;
    let mut discretionary = 0.0;
    let mut savings = 0.0;
    for entry in entries {
        match entry.kind {
            CategoryKind::Essential     => essential += entry.monthly_amount,
            CategoryKind::Discretionary => discretionary += entry.monthly_amount,
            CategoryKind::Savings       => savings += entry.monthly_amount,
        }
    }

    let surplus = monthly_income - essential - discretionary - savings;
    let savings_rate = if monthly_income > 0.0 {
        (savings + surplus.max(0.0)) / monthly_income
    } else {
        0.0
    };

    let health = score(
        monthly_income,
        essential,
        discretionary,
        surplus,
        savings_rate,
        config,
    );

    BudgetSummary {
        monthly_income,
        total_expenses: essential + discretionary,
        essential_spend: essential,
        discretionary_spend: discretionary,
        savings_allocated: savings,
        surplus,
        savings_rate,
        health,
    }
}

fn score(
    income: Money,
    essential: Money,
    discretionary: Money,
    surplus: Money,
    savings_rate: f64,
    config: &HealthConfig,
) -> BudgetHealth {
    let w = &config.weights;

    if income <= 0.0 {
        return BudgetHealth {
            score: 0.0,
            band:  HealthBand::AtRisk,
            savings_component: 0.0,
            essential_component: 0.0,
            discretionary_component: 0.0,
            surplus_component: 0.0,
        };
    }

    let savings_component = (savings_rate / w.target_savings_rate).clamp(0.0, 1.0);
    let essential_component = ratio_component(essential / income, w.essential_cap);
    let discretionary_component = ratio_component(discretionary / income, w.discretionary_cap);
    let surplus_component = if surplus >= 0.0 {
        1.0
    } else {
        (1.0 + surplus / income).max(0.0)
    };

    let weight_sum =
        w.savings_weight + w.essential_weight + w.discretionary_weight + w.surplus_weight;
    let blended = w.savings_weight * savings_component
        + w.essential_weight * essential_component
        + w.discretionary_weight * discretionary_component
        + w.surplus_weight * surplus_component;
    let score = (100.0 * blended / weight_sum).clamp(0.0, 100.0);

    let t = &config.thresholds;
    let band = if score >= t.excellent {
        HealthBand::Excellent
    } else if score >= t.good {
        HealthBand::Good
    } else if score >= t.fair {
        HealthBand::Fair
    } else {
        HealthBand::AtRisk
    };

    BudgetHealth {
        score,
        band,
        savings_component,
        essential_component,
        discretionary_component,
        surplus_component,
    }
}

/// Full marks at or under the cap; points fall off linearly past it and
/// hit zero at double the cap.
fn ratio_component(ratio: f64, cap: f64) -> f64 {
    if ratio <= cap {
        1.0
    } else if cap > 0.0 {
        (1.0 - (ratio - cap) / cap).max(0.0)
    } else {
        0.0
    }
}
