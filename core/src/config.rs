//! Plan configuration — tax tables and health-score parameters.
//!
//! Embedded defaults carry the shipped 2024 tables so the library works
//! with no data directory at all. load() reads JSON overrides from a data
//! directory, one file per concern.

use crate::tax::{FilingStatus, TaxBracket};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxConfig {
    /// Marginal bands per filing status, ascending.
    pub brackets: HashMap<FilingStatus, Vec<TaxBracket>>,
    pub standard_deductions: HashMap<FilingStatus, f64>,
    /// Flat state income-tax rate by two-letter state code.
    pub state_rates: HashMap<String, f64>,
    /// Applied when the state is unknown or missing from state_rates.
    pub default_state_rate: f64,
    pub social_security_rate: f64,
    pub social_security_wage_base: f64,
    pub medicare_rate: f64,
}

impl TaxConfig {
    pub fn brackets(&self, status: FilingStatus) -> &[TaxBracket] {
        self.brackets.get(&status).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn standard_deduction(&self, status: FilingStatus) -> f64 {
        self.standard_deductions.get(&status).copied().unwrap_or(0.0)
    }
}

impl Default for TaxConfig {
    /// 2024 federal tables.
    fn default() -> Self {
        fn bands(bounds: &[(f64, f64)]) -> Vec<TaxBracket> {
            let mut out: Vec<TaxBracket> = bounds
                .iter()
                .map(|&(rate, up_to)| TaxBracket { rate, up_to: Some(up_to) })
                .collect();
            out.push(TaxBracket { rate: 0.37, up_to: None });
            out
        }

        let mut brackets = HashMap::new();
        brackets.insert(
            FilingStatus::Single,
            bands(&[
                (0.10, 11_600.0),
                (0.12, 47_150.0),
                (0.22, 100_525.0),
                (0.24, 191_950.0),
                (0.32, 243_725.0),
                (0.35, 609_350.0),
            ]),
        );
        brackets.insert(
            FilingStatus::MarriedJoint,
            bands(&[
                (0.10, 23_200.0),
                (0.12, 94_300.0),
                (0.22, 201_050.0),
                (0.24, 383_900.0),
                (0.32, 487_450.0),
                (0.35, 731_200.0),
            ]),
        );
        brackets.insert(
            FilingStatus::MarriedSeparate,
            bands(&[
                (0.10, 11_600.0),
                (0.12, 47_150.0),
                (0.22, 100_525.0),
                (0.24, 191_950.0),
                (0.32, 243_725.0),
                (0.35, 365_600.0),
            ]),
        );
        brackets.insert(
            FilingStatus::HeadOfHousehold,
            bands(&[
                (0.10, 16_550.0),
                (0.12, 63_100.0),
                (0.22, 100_500.0),
                (0.24, 191_950.0),
                (0.32, 243_700.0),
                (0.35, 609_350.0),
            ]),
        );

        let mut standard_deductions = HashMap::new();
        standard_deductions.insert(FilingStatus::Single, 14_600.0);
        standard_deductions.insert(FilingStatus::MarriedJoint, 29_200.0);
        standard_deductions.insert(FilingStatus::MarriedSeparate, 14_600.0);
        standard_deductions.insert(FilingStatus::HeadOfHousehold, 21_900.0);

        let mut state_rates = HashMap::new();
        for state in ["AK", "FL", "NV", "NH", "SD", "TN", "TX", "WA", "WY"] {
            state_rates.insert(state.to_string(), 0.0);
        }
        for (state, rate) in [
            ("AZ", 0.025),
            ("CO", 0.044),
            ("GA", 0.0549),
            ("ID", 0.058),
            ("IL", 0.0495),
            ("IN", 0.0305),
            ("KY", 0.04),
            ("MA", 0.05),
            ("MI", 0.0425),
            ("NC", 0.045),
            ("PA", 0.0307),
            ("UT", 0.0465),
        ] {
            state_rates.insert(state.to_string(), rate);
        }

        Self {
            brackets,
            standard_deductions,
            state_rates,
            default_state_rate: 0.05,
            social_security_rate: 0.062,
            social_security_wage_base: 168_600.0,
            medicare_rate: 0.0145,
        }
    }
}

// ── Budget health scoring ──────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthFormulaWeights {
    pub savings_weight: f64,
    pub essential_weight: f64,
    pub discretionary_weight: f64,
    pub surplus_weight: f64,
    /// Savings rate that earns a full savings component.
    pub target_savings_rate: f64,
    /// Essential spend over income above this ratio starts losing points.
    pub essential_cap: f64,
    /// Discretionary spend over income above this ratio starts losing points.
    pub discretionary_cap: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthThresholds {
    pub excellent: f64,
    pub good: f64,
    pub fair: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthConfig {
    pub weights: HealthFormulaWeights,
    pub thresholds: HealthThresholds,
}

impl Default for HealthConfig {
    fn default() -> Self {
        Self {
            weights: HealthFormulaWeights {
                savings_weight: 0.35,
                essential_weight: 0.25,
                discretionary_weight: 0.15,
                surplus_weight: 0.25,
                target_savings_rate: 0.20,
                essential_cap: 0.50,
                discretionary_cap: 0.30,
            },
            thresholds: HealthThresholds {
                excellent: 80.0,
                good: 60.0,
                fair: 40.0,
            },
        }
    }
}

// ── Top-level config ───────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlanConfig {
    pub tax: TaxConfig,
    pub health: HealthConfig,
}

impl PlanConfig {
    /// Load from the data/ directory. Callers that want the shipped tables
    /// use PlanConfig::default().
    pub fn load(data_dir: &str) -> anyhow::Result<Self> {
        let tax_path = format!("{data_dir}/tax/federal_brackets.json");
        let tax_content = std::fs::read_to_string(&tax_path)
            .map_err(|e| anyhow::anyhow!("Cannot read {tax_path}: {e}"))?;
        let tax: TaxConfig = serde_json::from_str(&tax_content)?;

        let health_path = format!("{data_dir}/budget/health_weights.json");
        let health_content = std::fs::read_to_string(&health_path)
            .map_err(|e| anyhow::anyhow!("Cannot read {health_path}: {e}"))?;
        let health: HealthConfig = serde_json::from_str(&health_content)?;

        Ok(Self { tax, health })
    }
}
