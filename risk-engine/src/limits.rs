//! Credit limit derivation

use crate::{CreditLimit, FinancialProfile};
use serde::{Deserialize, Serialize};

/// Income multipliers used to size the credit line
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LimitConfig {
    /// Credit score that must be exceeded (strictly) for the premium multiplier
    pub premium_score_threshold: f64,

    /// Income multiplier above the threshold
    pub premium_multiplier: f64,

    /// Income multiplier at or below the threshold
    pub standard_multiplier: f64,

    /// Share of the maximum offered as the lower bound
    pub min_fraction: f64,
}

impl Default for LimitConfig {
    fn default() -> Self {
        Self {
            premium_score_threshold: 700.0,
            premium_multiplier: 5.0,
            standard_multiplier: 3.0,
            min_fraction: 0.4,
        }
    }
}

impl LimitConfig {
    /// Maximum eligible credit before flooring
    pub fn max_eligible(&self, profile: &FinancialProfile) -> f64 {
        let multiplier = if profile.credit_score > self.premium_score_threshold {
            self.premium_multiplier
        } else {
            self.standard_multiplier
        };
        profile.monthly_income * multiplier
    }

    /// Floored credit-limit range.
    ///
    /// Negative income yields a negative range. Products beyond the
    /// integer range are kept as floats, not clamped.
    pub fn credit_limit(&self, profile: &FinancialProfile) -> CreditLimit {
        let max_credit = self.max_eligible(profile);
        CreditLimit {
            min: (max_credit * self.min_fraction).floor(),
            max: max_credit.floor(),
        }
    }
}

/// Credit limit with the default multipliers
pub fn credit_limit(profile: &FinancialProfile) -> CreditLimit {
    LimitConfig::default().credit_limit(profile)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(credit_score: f64, monthly_income: f64) -> FinancialProfile {
        FinancialProfile {
            credit_score,
            monthly_income,
            account_balance: 0.0,
            total_emi: 0.0,
        }
    }

    #[test]
    fn test_premium_multiplier() {
        let limit = credit_limit(&profile(800.0, 5000.0));
        assert_eq!(limit, CreditLimit { min: 10_000.0, max: 25_000.0 });
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let limit = credit_limit(&profile(700.0, 4000.0));
        assert_eq!(limit, CreditLimit { min: 4_800.0, max: 12_000.0 });

        let limit = credit_limit(&profile(700.5, 4000.0));
        assert_eq!(limit.max, 20_000.0);
    }

    #[test]
    fn test_fractional_income_floors() {
        let limit = credit_limit(&profile(600.0, 1000.7));
        // 3002.1 and 1200.84
        assert_eq!(limit, CreditLimit { min: 1_200.0, max: 3_002.0 });
    }

    #[test]
    fn test_zero_and_negative_income() {
        assert_eq!(credit_limit(&profile(700.0, 0.0)), CreditLimit { min: 0.0, max: 0.0 });
        assert_eq!(
            credit_limit(&profile(600.0, -1000.0)),
            CreditLimit { min: -1_200.0, max: -3_000.0 }
        );
    }

    #[test]
    fn test_large_income_keeps_ratio() {
        let limit = credit_limit(&profile(800.0, 1e19));
        assert_eq!(limit, CreditLimit { min: 2e19, max: 5e19 });

        let json = serde_json::to_string(&limit).unwrap();
        assert_eq!(json, r#"{"min":2e19,"max":5e19}"#);
    }

    #[test]
    fn test_whole_limits_serialize_as_integers() {
        let json = serde_json::to_string(&credit_limit(&profile(800.0, 5000.0))).unwrap();
        assert_eq!(json, r#"{"min":10000,"max":25000}"#);

        let json = serde_json::to_string(&credit_limit(&profile(600.0, -1000.0))).unwrap();
        assert_eq!(json, r#"{"min":-1200,"max":-3000}"#);
    }
}
