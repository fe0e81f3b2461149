//! Decision Engine - Decision-support calculators over simple financial inputs
//!
//! This library provides:
//! - A core formula library (future/present value, EMI, NPV, weighted scoring,
//!   expected utility)
//! - Invest-vs-prepay and retirement corpus/SIP calculators
//! - Weighted job-offer comparison
//!
//! Every computation is a pure, single-pass transformation from an immutable
//! input record to a result record; there is no persistent state.

pub mod formulas;
pub mod services;

// Re-export commonly used types
pub use formulas::FormulaError;
pub use services::career::{compare_job_offers, CareerError, JobOffer, JobOfferComparisonInput};
pub use services::financial::{
    compute_investment_vs_prepayment, retirement_corpus_calculator, InvestmentVsPrepaymentInput,
    RetirementCorpusInput,
};
