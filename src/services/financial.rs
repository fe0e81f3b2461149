//! Financial planning calculators
//!
//! Two decision-support computations built on the formula library:
//! - Invest a lump sum vs. prepay an equal-priority debt
//! - Retirement corpus requirement and the monthly SIP needed to reach it
//!
//! Every function is a single stateless transformation from an input record
//! to a result record; no state is held across calls.

use crate::formulas;
use log::debug;
use serde::{Deserialize, Serialize};

/// Inputs for the invest-vs-prepay decision
///
/// All rates are annual decimal fractions (0.08 = 8%).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvestmentVsPrepaymentInput {
    /// Outstanding debt amount
    pub debt_amount: f64,

    /// Annual interest rate accruing on the debt
    pub debt_interest_rate: f64,

    /// Lump sum available to invest or prepay
    pub investment_amount: f64,

    /// Expected annual return if invested
    pub expected_return_rate: f64,

    /// Decision horizon in years
    pub time_horizon_years: i32,

    /// Reserved: qualitative risk tolerance, not used by the decision yet
    #[serde(default)]
    pub risk_tolerance: Option<String>,

    /// Reserved: return volatility, not used by the decision yet
    #[serde(default)]
    pub volatility: Option<f64>,
}

/// Recommended action from the invest-vs-prepay comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recommendation {
    /// Invest the lump sum
    Invest,
    /// Pay down the debt
    #[serde(rename = "Prepay Debt")]
    PrepayDebt,
}

impl Recommendation {
    /// Display string for console and report output
    pub fn as_str(&self) -> &'static str {
        match self {
            Recommendation::Invest => "Invest",
            Recommendation::PrepayDebt => "Prepay Debt",
        }
    }
}

/// Result of the invest-vs-prepay comparison
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvestmentVsPrepaymentResult {
    /// Future value of the lump sum if invested at the expected return
    pub future_value_investment: f64,

    /// Future value of the debt if left to accrue at its interest rate
    pub future_value_debt: f64,

    /// Recommended action
    pub recommendation: Recommendation,
}

/// Compare investing a lump sum against prepaying debt over the same horizon.
///
/// Recommends investing only when the invested future value strictly exceeds
/// the accrued debt; a tie favors prepayment (the certain outcome).
pub fn compute_investment_vs_prepayment(
    params: &InvestmentVsPrepaymentInput,
) -> InvestmentVsPrepaymentResult {
    let fv_invest = formulas::future_value(
        params.investment_amount,
        params.expected_return_rate,
        params.time_horizon_years,
    );
    let fv_debt = formulas::future_value(
        params.debt_amount,
        params.debt_interest_rate,
        params.time_horizon_years,
    );

    let recommendation = if fv_invest > fv_debt {
        Recommendation::Invest
    } else {
        Recommendation::PrepayDebt
    };

    debug!(
        "invest_vs_prepay: fv_invest={:.2} fv_debt={:.2} -> {}",
        fv_invest,
        fv_debt,
        recommendation.as_str()
    );

    InvestmentVsPrepaymentResult {
        future_value_investment: fv_invest,
        future_value_debt: fv_debt,
        recommendation,
    }
}

/// Inputs for the retirement corpus calculation
///
/// All rates are annual decimal fractions (0.06 = 6%).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetirementCorpusInput {
    /// Current age in whole years
    pub current_age: i32,

    /// Planned retirement age in whole years
    pub retirement_age: i32,

    /// Corpus accumulated so far
    pub current_corpus: f64,

    /// Desired monthly expense in today's money
    pub target_monthly_expense: f64,

    /// Annual inflation applied to the target expense
    pub inflation_rate: f64,

    /// Annual return earned on savings before retirement
    pub pre_retirement_return: f64,

    /// Annual yield the corpus earns after retirement
    pub post_retirement_return: f64,
}

/// Result of the retirement corpus calculation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetirementCorpusResult {
    /// Corpus required at retirement to fund the inflated expense
    pub required_corpus: f64,

    /// Monthly contribution needed to close the gap by retirement
    pub monthly_sip: f64,
}

/// Compute the corpus required at retirement and the monthly SIP to reach it.
///
/// The required corpus is a perpetuity-style approximation: one year of
/// inflation-adjusted expenses divided by the post-retirement yield, not a
/// true annuity-depletion model. A corpus surplus clamps the gap at zero
/// rather than reporting a negative savings need.
///
/// Degenerate horizons are computed, not rejected: retiring this year makes
/// the SIP a lump sum equal to the gap, and a retirement age below the
/// current age produces a (nonsensical) discounted projection. A zero
/// pre-retirement return with a positive horizon yields NaN from the annuity
/// division; the rate is expected to be positive in that case.
pub fn retirement_corpus_calculator(params: &RetirementCorpusInput) -> RetirementCorpusResult {
    let years_to_retire = params.retirement_age - params.current_age;

    let fv_current = formulas::future_value(
        params.current_corpus,
        params.pre_retirement_return,
        years_to_retire,
    );
    let inflated_expense = formulas::future_value(
        params.target_monthly_expense,
        params.inflation_rate,
        years_to_retire,
    );

    let required_corpus = inflated_expense * 12.0 / params.post_retirement_return;
    let gap = (required_corpus - fv_current).max(0.0);

    // SIP from the future-value-of-annuity equation, monthly compounding
    let months = years_to_retire * 12;
    let monthly_sip = if months == 0 {
        gap
    } else {
        let monthly_rate = params.pre_retirement_return / 12.0;
        gap * monthly_rate / ((1.0 + monthly_rate).powi(months) - 1.0)
    };

    debug!(
        "retirement: years={} fv_current={:.2} required={:.2} gap={:.2} sip={:.2}",
        years_to_retire, fv_current, required_corpus, gap, monthly_sip
    );

    RetirementCorpusResult {
        required_corpus,
        monthly_sip,
    }
}
