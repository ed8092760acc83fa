//! Profile round-trip and report assembly tests.

use finplan_core::{
    budget::{BudgetEntry, CategoryKind},
    config::PlanConfig,
    investment::ProjectionInput,
    payoff::{Debt, PayoffOutcome, Strategy},
    profile::FinancialProfile,
    report::build_report,
    tax::FilingStatus,
};

// ── Helpers ──────────────────────────────────────────────────────────────────

fn full_profile() -> FinancialProfile {
    FinancialProfile {
        annual_income: 85_000.0,
        filing_status: FilingStatus::Single,
        zip_code: Some("73301".to_string()),
        debts: vec![
            Debt {
                name: "Credit Card".to_string(),
                balance: 4_800.0,
                annual_rate: 22.9,
                min_payment: 120.0,
            },
            Debt {
                name: "Car Loan".to_string(),
                balance: 14_500.0,
                annual_rate: 6.4,
                min_payment: 310.0,
            },
        ],
        budget: vec![
            BudgetEntry {
                category: "Rent".to_string(),
                monthly_amount: 1_650.0,
                kind: CategoryKind::Essential,
            },
            BudgetEntry {
                category: "Index Fund".to_string(),
                monthly_amount: 600.0,
                kind: CategoryKind::Savings,
            },
        ],
        investment: Some(ProjectionInput {
            initial_balance: 12_000.0,
            monthly_contribution: 600.0,
            annual_return_pct: 7.0,
            years: 25,
        }),
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────

/// A profile survives a JSON round trip unchanged.
#[test]
fn profile_round_trips_through_json() {
    let profile = full_profile();

    let json = serde_json::to_string(&profile).expect("serialize");
    let back: FinancialProfile = serde_json::from_str(&json).expect("deserialize");

    assert_eq!(back, profile);
}

/// Optional profile sections default when absent from the JSON.
#[test]
fn sparse_profile_fills_defaults() {
    let json = r#"{ "annual_income": 52000.0, "filing_status": "married_joint" }"#;
    let profile: FinancialProfile = serde_json::from_str(json).expect("deserialize");

    assert_eq!(profile.zip_code, None);
    assert!(profile.debts.is_empty());
    assert!(profile.budget.is_empty());
    assert!(profile.investment.is_none());
}

/// One report covers every calculator, measured against take-home income.
#[test]
fn report_covers_every_section() {
    let profile = full_profile();
    let report = build_report(&profile, &PlanConfig::default(), Strategy::Avalanche, 200.0);

    assert_eq!(report.report_id.len(), 36, "uuid v4 string");
    assert!(report.tax.total_tax > 0.0);
    assert_eq!(report.budget.monthly_income, report.tax.monthly_take_home);
    assert_eq!(report.payoff.outcome, PayoffOutcome::PaidOff);
    assert_eq!(report.payoff.timeline.len(), 2);
    assert!(report.investment.is_some());
}

/// A non-converging debt is surfaced in the report, not swallowed.
#[test]
fn capped_payoff_surfaces_in_report() {
    let mut profile = full_profile();
    profile.debts = vec![Debt {
        name: "Trap".to_string(),
        balance: 10_000.0,
        annual_rate: 30.0,
        min_payment: 100.0,
    }];

    let report = build_report(&profile, &PlanConfig::default(), Strategy::Snowball, 0.0);

    assert!(
        matches!(report.payoff.outcome, PayoffOutcome::CappedOut { .. }),
        "expected CappedOut, got {:?}",
        report.payoff.outcome
    );
    assert!(report.payoff.timeline.is_empty());
}

/// Timeline entries serialize with the paid_off event tag.
#[test]
fn report_json_tags_timeline_events() {
    let profile = full_profile();
    let report = build_report(&profile, &PlanConfig::default(), Strategy::Snowball, 150.0);

    let json = serde_json::to_string(&report).expect("serialize");
    assert!(
        json.contains(r#""event":"paid_off""#),
        "timeline tag missing from {json}"
    );
    assert!(json.contains(r#""strategy":"snowball""#));
}

/// The shipped data directory parses into the same tables as the embedded
/// defaults.
#[test]
fn shipped_data_dir_matches_defaults() {
    let loaded = PlanConfig::load("../data").expect("load shipped data dir");
    let defaults = PlanConfig::default();

    assert_eq!(loaded.tax.default_state_rate, defaults.tax.default_state_rate);
    assert_eq!(
        loaded.tax.social_security_wage_base,
        defaults.tax.social_security_wage_base
    );
    assert_eq!(
        loaded.tax.brackets(FilingStatus::Single),
        defaults.tax.brackets(FilingStatus::Single)
    );
    assert_eq!(
        loaded.health.thresholds.excellent,
        defaults.health.thresholds.excellent
    );
}
