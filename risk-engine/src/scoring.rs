//! Risk scoring engine

use crate::limits::LimitConfig;
use crate::{FinancialProfile, Result, RiskAssessment, RiskInput, RiskLevel};
use std::sync::Arc;
use tracing::debug;

/// A way of turning a validated profile into an assessment.
///
/// The rule set below is one implementation; a model-backed scorer can be
/// swapped in behind [`RiskEngine`] without changes to callers.
pub trait ScoringStrategy: Send + Sync {
    /// Short identifier used in logs
    fn name(&self) -> &str;

    /// Score a complete profile. Never fails.
    fn compute(&self, profile: &FinancialProfile) -> RiskAssessment;
}

/// Provisional rule-based scorer
#[derive(Debug, Clone, Default)]
pub struct RuleBasedStrategy {
    limits: LimitConfig,
}

impl RuleBasedStrategy {
    /// Starting score before adjustments
    pub const BASELINE: f64 = 0.5;
    /// Credit score above which risk is reduced
    pub const STRONG_CREDIT: f64 = 750.0;
    /// Credit score below which risk is increased
    pub const WEAK_CREDIT: f64 = 650.0;
    /// EMI/income ratio above which risk is increased
    pub const EMI_RATIO_LIMIT: f64 = 0.4;

    /// Create new rule-based scorer
    pub fn new() -> Self {
        Self::default()
    }

    /// Use custom credit-limit multipliers
    pub fn with_limits(limits: LimitConfig) -> Self {
        Self { limits }
    }

    /// Clamped, unrounded score
    pub fn raw_score(&self, profile: &FinancialProfile) -> f64 {
        let mut score = Self::BASELINE;

        if profile.credit_score > Self::STRONG_CREDIT {
            score -= 0.15;
        } else if profile.credit_score < Self::WEAK_CREDIT {
            score += 0.20;
        }

        // Zero income gives an infinite or NaN ratio; only a finite ratio
        // can count as high debt.
        let emi_ratio = profile.emi_ratio();
        if emi_ratio.is_finite() && emi_ratio > Self::EMI_RATIO_LIMIT {
            score += 0.20;
        } else {
            score -= 0.10;
        }

        score.clamp(0.0, 1.0)
    }
}

impl ScoringStrategy for RuleBasedStrategy {
    fn name(&self) -> &str {
        "rule-based"
    }

    fn compute(&self, profile: &FinancialProfile) -> RiskAssessment {
        let risk_score = round_to_cents(self.raw_score(profile));

        RiskAssessment {
            risk_score,
            risk_level: RiskLevel::from_score(risk_score),
            credit_limit: self.limits.credit_limit(profile),
        }
    }
}

/// Round half-up to two decimal places
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Entry point: validate, then score with the configured strategy
#[derive(Clone)]
pub struct RiskEngine {
    strategy: Arc<dyn ScoringStrategy>,
}

impl RiskEngine {
    /// Engine backed by the rule-based scorer
    pub fn new() -> Self {
        Self::with_strategy(Arc::new(RuleBasedStrategy::new()))
    }

    /// Engine backed by a custom scorer
    pub fn with_strategy(strategy: Arc<dyn ScoringStrategy>) -> Self {
        Self { strategy }
    }

    /// Name of the active strategy
    pub fn strategy_name(&self) -> &str {
        self.strategy.name()
    }

    /// Assess an applicant.
    ///
    /// Fails only with [`crate::Error::MissingFields`], before any scoring.
    pub fn assess(&self, input: &RiskInput) -> Result<RiskAssessment> {
        let profile = input.validate()?;
        let assessment = self.strategy.compute(&profile);

        debug!(
            strategy = self.strategy.name(),
            risk_score = assessment.risk_score,
            risk_level = %assessment.risk_level,
            "risk assessed"
        );

        Ok(assessment)
    }
}

impl Default for RiskEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RiskEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RiskEngine")
            .field("strategy", &self.strategy.name())
            .finish()
    }
}
