//! Decision Engine CLI
//!
//! Command-line interface for the financial and career calculators. Each
//! subcommand builds an input record, runs one service function, and prints
//! the result record.

use anyhow::Context;
use clap::{CommandFactory, Parser, Subcommand};
use decision_engine::services::career::{compare_job_offers, JobOfferComparisonInput};
use decision_engine::services::financial::{
    compute_investment_vs_prepayment, retirement_corpus_calculator, InvestmentVsPrepaymentInput,
    RetirementCorpusInput,
};
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "decision_engine", about = "Decision Support Platform CLI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
#[command(rename_all = "snake_case")]
enum Command {
    /// Compare investing a lump sum against prepaying debt
    InvestVsPrepay {
        /// Outstanding debt amount
        debt_amount: f64,
        /// Annual debt interest rate as a decimal fraction (0.08 = 8%)
        debt_interest_rate: f64,
        /// Lump sum available to invest
        investment_amount: f64,
        /// Expected annual return as a decimal fraction
        expected_return_rate: f64,
        /// Decision horizon in years
        time_horizon_years: i32,
    },
    /// Compute required retirement corpus and monthly SIP
    Retirement {
        /// Current age in years
        current_age: i32,
        /// Planned retirement age in years
        retirement_age: i32,
        /// Corpus accumulated so far
        current_corpus: f64,
        /// Desired monthly expense in today's money
        target_monthly_expense: f64,
        /// Annual inflation rate as a decimal fraction
        inflation_rate: f64,
        /// Annual return before retirement as a decimal fraction
        pre_retirement_return: f64,
        /// Annual yield after retirement as a decimal fraction
        post_retirement_return: f64,
    },
    /// Compare job offers from a JSON file
    JobCompare {
        /// Path to JSON file with offers, criteria_weights, and criteria_scores
        json_file: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Command::InvestVsPrepay {
            debt_amount,
            debt_interest_rate,
            investment_amount,
            expected_return_rate,
            time_horizon_years,
        } => {
            let input = InvestmentVsPrepaymentInput {
                debt_amount,
                debt_interest_rate,
                investment_amount,
                expected_return_rate,
                time_horizon_years,
                risk_tolerance: None,
                volatility: None,
            };
            let result = compute_investment_vs_prepayment(&input);

            println!("Invest vs Prepay ({} years):", time_horizon_years);
            println!(
                "  Future value if invested: ${:.2}",
                result.future_value_investment
            );
            println!("  Debt grows to:            ${:.2}", result.future_value_debt);
            println!("  Recommendation:           {}", result.recommendation.as_str());
        }
        Command::Retirement {
            current_age,
            retirement_age,
            current_corpus,
            target_monthly_expense,
            inflation_rate,
            pre_retirement_return,
            post_retirement_return,
        } => {
            let input = RetirementCorpusInput {
                current_age,
                retirement_age,
                current_corpus,
                target_monthly_expense,
                inflation_rate,
                pre_retirement_return,
                post_retirement_return,
            };
            let result = retirement_corpus_calculator(&input);

            println!(
                "Retirement plan (age {} to {}):",
                current_age, retirement_age
            );
            println!("  Required corpus: ${:.2}", result.required_corpus);
            println!("  Monthly SIP:     ${:.2}", result.monthly_sip);
        }
        Command::JobCompare { json_file } => {
            let contents = fs::read_to_string(&json_file)
                .with_context(|| format!("failed to read {}", json_file.display()))?;
            let input: JobOfferComparisonInput = serde_json::from_str(&contents)
                .with_context(|| format!("invalid job comparison input in {}", json_file.display()))?;
            let result = compare_job_offers(&input)?;

            println!("Job offer comparison ({} offers):", input.offers.len());
            for (offer, score) in input.offers.iter().zip(&result.weighted_scores) {
                println!("  {:<20} {:.4}", offer.label, score);
            }
            println!("  Best offer: {}", result.best_offer);
        }
    }

    Ok(())
}
