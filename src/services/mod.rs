//! Decision-support services built on the formula library

pub mod career;
pub mod financial;

pub use career::{compare_job_offers, JobOffer, JobOfferComparisonInput, JobOfferComparisonResult};
pub use financial::{
    compute_investment_vs_prepayment, retirement_corpus_calculator, InvestmentVsPrepaymentInput,
    InvestmentVsPrepaymentResult, RetirementCorpusInput, RetirementCorpusResult,
};
