//! Credit risk engine
//!
//! Deterministic creditworthiness assessment: four financial attributes in,
//! a risk score, risk level and recommended credit-limit range out.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod types;
pub mod limits;
pub mod scoring;

pub use error::{Error, Result};
pub use types::*;
pub use limits::credit_limit;
pub use scoring::{RiskEngine, RuleBasedStrategy, ScoringStrategy};
