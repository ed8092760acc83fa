//! plan-runner: headless planning runner for finplan.
//!
//! Usage:
//!   plan-runner --profile profile.json --strategy avalanche --extra 200
//!   plan-runner --profile profile.json --compare
//!   plan-runner --profile profile.json --json

use anyhow::Result;
use finplan_core::{
    config::PlanConfig,
    payoff::{self, PayoffEvent, PayoffOutcome, Strategy},
    profile::FinancialProfile,
    report::{self, PlanReport},
};
use std::env;

#[derive(serde::Serialize)]
struct StrategyComparison {
    avalanche_months:   u32,
    avalanche_interest: f64,
    snowball_months:    u32,
    snowball_interest:  f64,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let profile_path = parse_str_arg(&args, "--profile").unwrap_or_else(|| "profile.json".into());
    let strategy: Strategy = parse_str_arg(&args, "--strategy")
        .as_deref()
        .unwrap_or("avalanche")
        .parse()?;
    let extra = parse_arg(&args, "--extra", 0.0f64);
    let data_dir = parse_str_arg(&args, "--data-dir");
    let compare = args.iter().any(|a| a == "--compare");
    let json = args.iter().any(|a| a == "--json");

    let config = match &data_dir {
        Some(dir) => PlanConfig::load(dir)?,
        None => PlanConfig::default(),
    };
    let profile = FinancialProfile::load(&profile_path)?;

    if !json {
        println!("finplan — plan-runner");
        println!("  profile:   {profile_path}");
        println!("  strategy:  {}", strategy.label());
        println!("  extra:     ${extra:.2}/month");
        println!(
            "  data_dir:  {}",
            data_dir.as_deref().unwrap_or("(built-in defaults)")
        );
        println!();
    }

    let plan_report = report::build_report(&profile, &config, strategy, extra);

    if let PayoffOutcome::CappedOut { remaining } = &plan_report.payoff.outcome {
        log::warn!(
            "payoff plan did not converge; {} debts still open",
            remaining.len()
        );
    }

    if json {
        if compare {
            let comparison = compare_strategies(&profile, extra);
            println!("{}", serde_json::to_string_pretty(&comparison)?);
        } else {
            println!("{}", serde_json::to_string_pretty(&plan_report)?);
        }
        return Ok(());
    }

    print_summary(&plan_report);

    if compare {
        let c = compare_strategies(&profile, extra);
        println!();
        println!("=== STRATEGY COMPARISON ===");
        println!(
            "  avalanche: {} months, ${:.2} interest",
            c.avalanche_months, c.avalanche_interest
        );
        println!(
            "  snowball:  {} months, ${:.2} interest",
            c.snowball_months, c.snowball_interest
        );
    }

    Ok(())
}

fn compare_strategies(profile: &FinancialProfile, extra: f64) -> StrategyComparison {
    let avalanche = payoff::simulate(&profile.debts, extra, Strategy::Avalanche);
    let snowball = payoff::simulate(&profile.debts, extra, Strategy::Snowball);
    StrategyComparison {
        avalanche_months:   avalanche.total_months,
        avalanche_interest: avalanche.total_interest,
        snowball_months:    snowball.total_months,
        snowball_interest:  snowball.total_interest,
    }
}

fn print_summary(report: &PlanReport) {
    let tax = &report.tax;
    println!("=== TAX ESTIMATE ===");
    println!("  gross income:    ${:.2}", tax.gross_income);
    println!("  taxable income:  ${:.2}", tax.taxable_income);
    println!("  federal tax:     ${:.2}", tax.federal_tax);
    println!("  state tax:       ${:.2}", tax.state_tax);
    println!("  fica tax:        ${:.2}", tax.fica_tax);
    println!("  total tax:       ${:.2}", tax.total_tax);
    println!("  effective rate:  {:.1}%", tax.effective_rate * 100.0);
    println!("  marginal rate:   {:.0}%", tax.marginal_rate * 100.0);
    println!("  take-home/month: ${:.2}", tax.monthly_take_home);

    let budget = &report.budget;
    println!();
    println!("=== BUDGET ===");
    println!("  monthly income:  ${:.2}", budget.monthly_income);
    println!("  expenses:        ${:.2}", budget.total_expenses);
    println!("  savings:         ${:.2}", budget.savings_allocated);
    println!("  surplus:         ${:.2}", budget.surplus);
    println!("  savings rate:    {:.1}%", budget.savings_rate * 100.0);
    println!(
        "  health score:    {:.0}/100 ({:?})",
        budget.health.score, budget.health.band
    );

    let payoff = &report.payoff;
    println!();
    println!("=== PAYOFF PLAN ===");
    println!("  strategy:        {}", payoff.strategy.label());
    println!("  months:          {}", payoff.total_months);
    println!("  total paid:      ${:.2}", payoff.total_paid);
    println!("  total interest:  ${:.2}", payoff.total_interest);
    for event in &payoff.timeline {
        let PayoffEvent::PaidOff { month, debt_name } = event;
        println!("    month {month:>3}: {debt_name} paid off");
    }
    if let PayoffOutcome::CappedOut { remaining } = &payoff.outcome {
        println!("  WARNING: did not converge within {} months", payoff.total_months);
        for debt in remaining {
            println!("    still open: {} (${:.2})", debt.name, debt.balance);
        }
    }

    if let Some(investment) = &report.investment {
        println!();
        println!("=== INVESTMENT PROJECTION ===");
        println!("  final balance:   ${:.2}", investment.final_balance);
        println!("  contributed:     ${:.2}", investment.total_contributed);
        println!("  growth:          ${:.2}", investment.total_growth);
        if let Some(last) = investment.yearly.last() {
            println!("  horizon:         {} years", last.year);
        }
    }
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}

fn parse_str_arg(args: &[String], flag: &str) -> Option<String> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].clone())
}
