//! Core types for risk engine

use crate::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Applicant financial attributes as received from a caller.
///
/// Every field is mandatory, but absence is representable so that the
/// engine itself can reject incomplete input. Only a missing key is
/// absent: an explicit JSON `null` is present and reads as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RiskInput {
    /// Bureau credit score, nominally 300-900
    #[serde(default, deserialize_with = "null_as_zero")]
    pub credit_score: Option<f64>,

    /// Monthly income
    #[serde(default, deserialize_with = "null_as_zero")]
    pub monthly_income: Option<f64>,

    /// Current account balance (reserved, not scored)
    #[serde(default, deserialize_with = "null_as_zero")]
    pub account_balance: Option<f64>,

    /// Existing monthly EMI obligations
    #[serde(default, deserialize_with = "null_as_zero")]
    pub total_emi: Option<f64>,
}

/// Called only for keys that are present, so `null` becomes `Some(0.0)`
/// while a missing key stays `None` through `#[serde(default)]`.
fn null_as_zero<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Option<f64>, D::Error> {
    Ok(Some(Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0)))
}

impl RiskInput {
    /// Build a complete input
    pub fn new(credit_score: f64, monthly_income: f64, account_balance: f64, total_emi: f64) -> Self {
        Self {
            credit_score: Some(credit_score),
            monthly_income: Some(monthly_income),
            account_balance: Some(account_balance),
            total_emi: Some(total_emi),
        }
    }

    /// Check that all four fields are present.
    ///
    /// Values are not range-checked: zero or negative income and
    /// out-of-band credit scores are accepted as-is.
    pub fn validate(&self) -> Result<FinancialProfile> {
        match (
            self.credit_score,
            self.monthly_income,
            self.account_balance,
            self.total_emi,
        ) {
            (Some(credit_score), Some(monthly_income), Some(account_balance), Some(total_emi)) => {
                Ok(FinancialProfile {
                    credit_score,
                    monthly_income,
                    account_balance,
                    total_emi,
                })
            }
            _ => Err(Error::MissingFields),
        }
    }
}

/// A complete, validated set of financial attributes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FinancialProfile {
    /// Bureau credit score
    pub credit_score: f64,
    /// Monthly income
    pub monthly_income: f64,
    /// Account balance. Carried for future rules; no current effect.
    pub account_balance: f64,
    /// Existing monthly EMI obligations
    pub total_emi: f64,
}

impl FinancialProfile {
    /// EMI to income ratio. Non-finite when income is zero.
    pub fn emi_ratio(&self) -> f64 {
        self.total_emi / self.monthly_income
    }
}

/// Risk level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    /// score < 0.3
    Low,
    /// 0.3 <= score < 0.6
    Medium,
    /// score >= 0.6
    High,
}

impl RiskLevel {
    /// Lower bound of the MEDIUM band
    pub const MEDIUM_THRESHOLD: f64 = 0.3;
    /// Lower bound of the HIGH band
    pub const HIGH_THRESHOLD: f64 = 0.6;

    /// Bucket a (rounded) risk score
    pub fn from_score(score: f64) -> Self {
        if score < Self::MEDIUM_THRESHOLD {
            RiskLevel::Low
        } else if score < Self::HIGH_THRESHOLD {
            RiskLevel::Medium
        } else {
            RiskLevel::High
        }
    }

    /// Wire label
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::High => "HIGH",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Recommended credit-limit range.
///
/// Both bounds are already floored. They stay floating point so very large
/// incomes keep the min/max ratio instead of saturating.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CreditLimit {
    /// Lower bound
    #[serde(serialize_with = "serialize_whole")]
    pub min: f64,
    /// Upper bound
    #[serde(serialize_with = "serialize_whole")]
    pub max: f64,
}

/// Whole numbers inside the i64 range go out as JSON integers; anything
/// larger keeps its float form (e.g. `5e19`).
fn serialize_whole<S: Serializer>(value: &f64, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    if value.fract() == 0.0 && *value >= i64::MIN as f64 && *value < i64::MAX as f64 {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

/// Risk assessment result
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// Risk score in [0, 1], two decimal places
    pub risk_score: f64,

    /// Risk level
    pub risk_level: RiskLevel,

    /// Recommended credit limit
    pub credit_limit: CreditLimit,
}
