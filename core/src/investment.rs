//! The investment projector — month-stepped compound growth with monthly
//! contributions.
//!
//! Growth compounds at annual_return_pct / 100 / 12 each month; the
//! contribution lands after that month's growth. One trace point is
//! emitted per completed year.

use crate::types::Money;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectionInput {
    pub initial_balance:      Money,
    pub monthly_contribution: Money,
    /// Annual return as a percentage (6.0 = 6% per year).
    pub annual_return_pct:    f64,
    pub years:                u32,
}

/// End-of-year trace point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YearPoint {
    pub year:        u32,
    pub balance:     Money,
    /// Everything put in so far, initial balance included.
    pub contributed: Money,
    pub growth:      Money,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvestmentProjection {
    pub final_balance:     Money,
    pub total_contributed: Money,
    pub total_growth:      Money,
    pub yearly:            Vec<YearPoint>,
}

/// Project a balance forward. Zero years returns the initial state; zero
/// rate degenerates to plain accumulation.
pub fn project(input: &ProjectionInput) -> InvestmentProjection {
    let monthly_rate = input.annual_return_pct / 100.0 / 12.0;
    let mut balance = input.initial_balance;
    let mut contributed = input.initial_balance;
    let mut yearly = Vec::with_capacity(input.years as usize);

    for year in 1..=input.years {
        for _ in 0..12 {
            balance += balance * monthly_rate;
            balance += input.monthly_contribution;
            contributed += input.monthly_contribution;
        }
        yearly.push(YearPoint {
            year,
            balance,
            contributed,
            growth: balance - contributed,
        });
        log::debug!("year={year} balance={balance:.2} contributed={contributed:.2}");
    }

    InvestmentProjection {
        final_balance: balance,
        total_contributed: contributed,
        total_growth: balance - contributed,
        yearly,
    }
}
