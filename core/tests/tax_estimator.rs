//! Tax estimator tests against the shipped 2024 tables.

use finplan_core::{
    config::TaxConfig,
    geo,
    tax::{estimate, FilingStatus},
};

// ── Helpers ──────────────────────────────────────────────────────────────────

fn config() -> TaxConfig {
    TaxConfig::default()
}

// ── Tests ────────────────────────────────────────────────────────────────────

/// Income below the standard deduction owes no income tax; FICA still
/// applies to every gross dollar.
#[test]
fn income_below_deduction_owes_only_fica() {
    let est = estimate(10_000.0, FilingStatus::Single, None, &config());

    assert_eq!(est.taxable_income, 0.0);
    assert_eq!(est.federal_tax, 0.0);
    assert_eq!(est.state_tax, 0.0);
    assert_eq!(est.marginal_rate, 0.0);

    let expected_fica = 10_000.0 * (0.062 + 0.0145);
    assert!(
        (est.fica_tax - expected_fica).abs() < 1e-9,
        "fica {:.2}, expected {:.2}",
        est.fica_tax,
        expected_fica
    );
    assert!((est.total_tax - expected_fica).abs() < 1e-9);
}

/// A hand-computed bracket walk: $60k single, 2024 tables.
/// Taxable 45,400 = 10% × 11,600 + 12% × 33,800 → $5,216 federal.
#[test]
fn federal_tax_matches_hand_computed_walk() {
    let est = estimate(60_000.0, FilingStatus::Single, None, &config());

    assert!((est.taxable_income - 45_400.0).abs() < 1e-9);
    assert!(
        (est.federal_tax - 5_216.0).abs() < 1e-6,
        "federal {:.2}",
        est.federal_tax
    );
    assert_eq!(est.marginal_rate, 0.12);

    // No zip: the default state rate applies to taxable income.
    assert!((est.state_tax - 45_400.0 * 0.05).abs() < 1e-6);
}

/// Married-joint doubles the low bands: $100k joint stays in the 12% band.
#[test]
fn married_joint_uses_its_own_bands() {
    let est = estimate(100_000.0, FilingStatus::MarriedJoint, None, &config());

    // Taxable 70,800 = 10% × 23,200 + 12% × 47,600 → 8,032.
    assert!((est.federal_tax - 8_032.0).abs() < 1e-6, "federal {:.2}", est.federal_tax);
    assert_eq!(est.marginal_rate, 0.12);
}

/// At an exact bracket boundary the marginal rate is still the lower band;
/// one taxable dollar more moves it up.
#[test]
fn bracket_boundary_is_inclusive() {
    // 14,600 deduction + 11,600 → taxable lands exactly on the 10% top.
    let at_boundary = estimate(26_200.0, FilingStatus::Single, None, &config());
    assert!((at_boundary.federal_tax - 1_160.0).abs() < 1e-9);
    assert_eq!(at_boundary.marginal_rate, 0.10);

    let past_boundary = estimate(26_300.0, FilingStatus::Single, None, &config());
    assert!((past_boundary.federal_tax - 1_172.0).abs() < 1e-9);
    assert_eq!(past_boundary.marginal_rate, 0.12);
}

/// A zip in a no-income-tax state zeroes the state line.
#[test]
fn no_income_tax_state_pays_no_state_tax() {
    let florida = estimate(90_000.0, FilingStatus::Single, Some("33139"), &config());
    assert_eq!(florida.state_tax, 0.0);

    let texas = estimate(90_000.0, FilingStatus::Single, Some("78701"), &config());
    assert_eq!(texas.state_tax, 0.0);

    // Same income with no zip pays the default rate.
    let unknown = estimate(90_000.0, FilingStatus::Single, None, &config());
    assert!(unknown.state_tax > 0.0);
}

/// Social Security stops at the wage base; Medicare never does.
#[test]
fn social_security_caps_at_wage_base() {
    let est = estimate(500_000.0, FilingStatus::Single, None, &config());

    let expected = 168_600.0 * 0.062 + 500_000.0 * 0.0145;
    assert!(
        (est.fica_tax - expected).abs() < 1e-6,
        "fica {:.2}, expected {:.2}",
        est.fica_tax,
        expected
    );
}

/// Zero income produces a zero estimate, not NaN rates.
#[test]
fn zero_income_is_total() {
    let est = estimate(0.0, FilingStatus::HeadOfHousehold, None, &config());

    assert_eq!(est.total_tax, 0.0);
    assert_eq!(est.effective_rate, 0.0);
    assert_eq!(est.monthly_take_home, 0.0);
}

/// Every filing status ships a complete seven-band table.
#[test]
fn shipped_tables_cover_every_status() {
    let config = config();
    for status in [
        FilingStatus::Single,
        FilingStatus::MarriedJoint,
        FilingStatus::MarriedSeparate,
        FilingStatus::HeadOfHousehold,
    ] {
        assert_eq!(config.brackets(status).len(), 7, "{status:?}");
        assert!(config.standard_deduction(status) > 0.0, "{status:?}");
        assert!(
            config.brackets(status).last().unwrap().up_to.is_none(),
            "{status:?} top band must be open-ended"
        );
    }
}

/// The canonical zip table resolves well-known prefixes and rejects junk.
#[test]
fn zip_lookup_resolves_states() {
    assert_eq!(geo::state_for_zip("90210"), Some("CA"));
    assert_eq!(geo::state_for_zip("10001"), Some("NY"));
    assert_eq!(geo::state_for_zip("60601"), Some("IL"));
    assert_eq!(geo::state_for_zip("02139"), Some("MA"));
    assert_eq!(geo::state_for_zip("99501"), Some("AK"));

    assert_eq!(geo::state_for_zip("12"), None);
    assert_eq!(geo::state_for_zip("ABCDE"), None);
    assert_eq!(geo::state_for_zip(""), None);
}
