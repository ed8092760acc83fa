//! The debt payoff simulator — month-by-month amortization under a
//! prioritization strategy.
//!
//! PER-MONTH STEP ORDER (fixed, documented, never reordered):
//!   1. Increment the month counter.
//!   2. Accrue monthly interest on every open debt.
//!   3. Pay the minimum on every open debt. The extra payment goes to the
//!      single highest-priority open debt — never split, never cascaded.
//!   4. Reduce each balance by the principal portion, floored at zero.
//!   5. Retire debts that reached zero before the next month begins.
//!
//! RULES:
//!   - The caller's debt list is never mutated; simulation runs on a
//!     working copy.
//!   - Priority order affects the extra payment only. Minimums are paid on
//!     every open debt every month regardless of rank.
//!   - The loop stops at MAX_PAYOFF_MONTHS even if balances remain, and the
//!     plan says so explicitly in its outcome.

use crate::{
    error::PlanError,
    types::{Money, Month},
};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Hard cap on simulated months ("50 years"). A non-convergence guard,
/// not a financial rule.
pub const MAX_PAYOFF_MONTHS: Month = 600;

/// One debt as entered by the user. Held in memory for the duration of a
/// simulation call; never mutated in place.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Debt {
    pub name:        String,
    pub balance:     Money,
    /// Annual interest rate as a percentage (24.0 = 24% APR).
    pub annual_rate: f64,
    pub min_payment: Money,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Highest interest rate first.
    Avalanche,
    /// Smallest balance first.
    Snowball,
}

impl Strategy {
    pub fn label(self) -> &'static str {
        match self {
            Strategy::Avalanche => "avalanche",
            Strategy::Snowball  => "snowball",
        }
    }
}

impl FromStr for Strategy {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "avalanche" => Ok(Strategy::Avalanche),
            "snowball"  => Ok(Strategy::Snowball),
            other => Err(PlanError::UnknownStrategy { name: other.to_string() }),
        }
    }
}

/// Timeline entries, tagged for serialization as `"event": "paid_off"`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum PayoffEvent {
    PaidOff { month: Month, debt_name: String },
}

/// A debt still open when the month cap was hit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RemainingDebt {
    pub name:    String,
    pub balance: Money,
}

/// How the simulation ended.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum PayoffOutcome {
    /// Every debt reached zero.
    PaidOff,
    /// MAX_PAYOFF_MONTHS elapsed with balances still open. The remaining
    /// debts never appear in the timeline.
    CappedOut { remaining: Vec<RemainingDebt> },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayoffPlan {
    pub strategy:       Strategy,
    pub total_months:   Month,
    pub total_paid:     Money,
    pub total_interest: Money,
    /// Informational echo of the extra payment (0 when none) — not derived
    /// from interest saved against a baseline.
    pub monthly_savings: Money,
    pub outcome:        PayoffOutcome,
    pub timeline:       Vec<PayoffEvent>,
}

/// Simulate paying off `debts` with `extra_monthly_payment` on top of
/// minimums, prioritized by `strategy`.
///
/// Total over well-formed input: no validation happens here, and malformed
/// input (negative balances, NaN rates) produces nonsensical but
/// non-crashing output. Callers validate upstream.
pub fn simulate(debts: &[Debt], extra_monthly_payment: Money, strategy: Strategy) -> PayoffPlan {
    let mut open: Vec<Debt> = debts.to_vec();

    // Priority for the extra payment. Both sorts are stable: ties keep
    // input order.
    match strategy {
        Strategy::Avalanche => open.sort_by(|a, b| {
            b.annual_rate
                .partial_cmp(&a.annual_rate)
                .unwrap_or(std::cmp::Ordering::Equal)
        }),
        Strategy::Snowball => open.sort_by(|a, b| {
            a.balance
                .partial_cmp(&b.balance)
                .unwrap_or(std::cmp::Ordering::Equal)
        }),
    }

    let mut month: Month = 0;
    let mut total_paid: Money = 0.0;
    let mut total_interest: Money = 0.0;
    let mut timeline: Vec<PayoffEvent> = Vec::new();

    while !open.is_empty() && month < MAX_PAYOFF_MONTHS {
        month += 1;

        for (rank, debt) in open.iter_mut().enumerate() {
            let interest = debt.balance * (debt.annual_rate / 100.0) / 12.0;
            total_interest += interest;

            let mut payment = debt.min_payment;
            if rank == 0 {
                payment += extra_monthly_payment;
            }
            // The last payment on a debt covers exactly balance + interest;
            // the balance floor uses the uncapped payment so a cleared debt
            // lands on exactly zero.
            let applied = payment.min(debt.balance + interest);

            debt.balance = (debt.balance - (payment - interest)).max(0.0);
            total_paid += applied;
        }

        // Retire cleared debts before the next month begins.
        open.retain(|debt| {
            if debt.balance <= 0.0 {
                log::debug!("month={month} paid off '{}'", debt.name);
                timeline.push(PayoffEvent::PaidOff {
                    month,
                    debt_name: debt.name.clone(),
                });
                false
            } else {
                true
            }
        });
    }

    let outcome = if open.is_empty() {
        PayoffOutcome::PaidOff
    } else {
        log::warn!(
            "payoff did not converge within {MAX_PAYOFF_MONTHS} months; {} debts remain open",
            open.len()
        );
        PayoffOutcome::CappedOut {
            remaining: open
                .iter()
                .map(|d| RemainingDebt {
                    name:    d.name.clone(),
                    balance: d.balance,
                })
                .collect(),
        }
    };

    PayoffPlan {
        strategy,
        total_months: month,
        total_paid,
        total_interest,
        monthly_savings: if extra_monthly_payment > 0.0 {
            extra_monthly_payment
        } else {
            0.0
        },
        outcome,
        timeline,
    }
}
