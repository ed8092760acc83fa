//! The tax estimator — one canonical progressive-tax module.
//!
//! Federal tax walks the bracket table for the filing status. State tax is
//! a flat rate resolved from the zip code through geo. FICA is the employee
//! side only: Social Security up to the wage base, Medicare uncapped.
//! All tables live in TaxConfig so a data-dir override replaces them
//! without touching this module.

use crate::{config::TaxConfig, geo, types::Money};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FilingStatus {
    Single,
    MarriedJoint,
    MarriedSeparate,
    HeadOfHousehold,
}

/// One marginal band. Tables are ascending; the top bracket is open-ended.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TaxBracket {
    /// Marginal rate as a fraction (0.22 = 22%).
    pub rate:  f64,
    /// Upper bound of the band; None for the open-ended top band.
    pub up_to: Option<Money>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxEstimate {
    pub gross_income:   Money,
    pub taxable_income: Money,
    pub federal_tax:    Money,
    pub state_tax:      Money,
    pub fica_tax:       Money,
    pub total_tax:      Money,
    /// Total tax over gross income, as a fraction.
    pub effective_rate: f64,
    /// Federal bracket rate at the top taxed dollar, as a fraction.
    pub marginal_rate:  f64,
    pub monthly_take_home: Money,
}

/// Estimate a year of taxes for one gross income.
/// Total over well-formed input; callers validate upstream.
pub fn estimate(
    gross_income: Money,
    status: FilingStatus,
    zip_code: Option<&str>,
    config: &TaxConfig,
) -> TaxEstimate {
    let deduction = config.standard_deduction(status);
    let taxable = (gross_income - deduction).max(0.0);

    let (federal, marginal) = bracket_walk(taxable, config.brackets(status));

    let state_rate = zip_code
        .and_then(geo::state_for_zip)
        .and_then(|state| config.state_rates.get(state).copied())
        .unwrap_or(config.default_state_rate);
    let state_tax = taxable * state_rate;

    let fica = fica_tax(gross_income, config);

    let total = federal + state_tax + fica;
    let effective = if gross_income > 0.0 { total / gross_income } else { 0.0 };

    TaxEstimate {
        gross_income,
        taxable_income: taxable,
        federal_tax: federal,
        state_tax,
        fica_tax: fica,
        total_tax: total,
        effective_rate: effective,
        marginal_rate: marginal,
        monthly_take_home: (gross_income - total) / 12.0,
    }
}

/// Walk the bracket table, taxing the slice of income inside each band.
/// Returns (tax, marginal rate at the top taxed dollar).
fn bracket_walk(taxable: Money, brackets: &[TaxBracket]) -> (Money, f64) {
    let mut tax = 0.0;
    let mut lower = 0.0;
    let mut marginal = 0.0;
    for bracket in brackets {
        if taxable <= lower {
            break;
        }
        let upper = bracket.up_to.unwrap_or(f64::INFINITY);
        tax += (taxable.min(upper) - lower) * bracket.rate;
        marginal = bracket.rate;
        lower = upper;
    }
    (tax, marginal)
}

fn fica_tax(gross: Money, config: &TaxConfig) -> Money {
    let social_security =
        gross.min(config.social_security_wage_base) * config.social_security_rate;
    let medicare = gross * config.medicare_rate;
    social_security + medicare
}
