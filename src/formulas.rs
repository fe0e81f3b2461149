//! Core financial formula library
//!
//! Pure, stateless functions over floating-point scalars and slices:
//! - Time value of money (future value, present value, NPV)
//! - Loan amortization (EMI)
//! - Multi-criteria scoring (weighted score, expected utility)
//!
//! All rates are decimal fractions per period (0.08 = 8%), not percentages.

use thiserror::Error;

/// Errors raised by formula functions on invalid usage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormulaError {
    /// Paired input slices must have equal length
    #[error("length mismatch: expected {expected} entries, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}

/// Future value of a present amount compounded at `rate` per period.
///
/// `periods` is signed: a negative horizon discounts instead of compounding,
/// which callers may rely on (e.g. retirement ages entered in either order).
pub fn future_value(present_value: f64, rate: f64, periods: i32) -> f64 {
    present_value * (1.0 + rate).powi(periods)
}

/// Present value of a future amount discounted at `rate` per period.
pub fn present_value(future_value: f64, rate: f64, periods: i32) -> f64 {
    future_value / (1.0 + rate).powi(periods)
}

/// Equated monthly installment for an amortizing loan.
///
/// A zero annual rate falls back to flat division of the principal, which
/// is both the correct limit and avoids a zero denominator in the compound
/// formula.
pub fn emi(principal: f64, annual_rate: f64, months: u32) -> f64 {
    let monthly_rate = annual_rate / 12.0;
    if monthly_rate == 0.0 {
        return principal / months as f64;
    }
    let growth = (1.0 + monthly_rate).powi(months as i32);
    principal * monthly_rate * growth / (growth - 1.0)
}

/// Net present value of a cashflow series at `rate` per period.
///
/// The first cashflow is discounted by one full period (end-of-period
/// convention), not treated as occurring at time zero.
pub fn npv(cashflows: &[f64], rate: f64) -> f64 {
    cashflows
        .iter()
        .enumerate()
        .map(|(i, &cf)| cf / (1.0 + rate).powi(i as i32 + 1))
        .sum()
}

/// Weight-normalized dot product of `scores` and `weights`.
///
/// Returns 0.0 when the total weight is zero (guards the normalization
/// divide). Mismatched lengths are a usage error.
pub fn weighted_score(scores: &[f64], weights: &[f64]) -> Result<f64, FormulaError> {
    if scores.len() != weights.len() {
        return Err(FormulaError::LengthMismatch {
            expected: weights.len(),
            actual: scores.len(),
        });
    }

    let total_weight: f64 = weights.iter().sum();
    if total_weight == 0.0 {
        return Ok(0.0);
    }

    let dot: f64 = scores.iter().zip(weights).map(|(s, w)| s * w).sum();
    Ok(dot / total_weight)
}

/// Expected utility of `values` under `probabilities` with a power utility
/// exponent.
///
/// `risk_aversion = 1.0` reduces to the probability-weighted mean. A negative
/// value raised to a fractional exponent is NaN in real arithmetic; callers
/// must keep values non-negative when the exponent is non-integer.
pub fn expected_utility(
    values: &[f64],
    probabilities: &[f64],
    risk_aversion: f64,
) -> Result<f64, FormulaError> {
    if values.len() != probabilities.len() {
        return Err(FormulaError::LengthMismatch {
            expected: probabilities.len(),
            actual: values.len(),
        });
    }

    Ok(values
        .iter()
        .zip(probabilities)
        .map(|(v, p)| p * v.powf(risk_aversion))
        .sum())
}
