//! Scoring configuration
//!
//! Every constant the similarity pipeline uses lives here. All fields have
//! defaults, so a partial JSON document only overrides what it names.

use serde::{Deserialize, Serialize};

/// Tunable constants for the similarity pipeline
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScoringConfig {
    /// Weights combining the three component metrics
    pub metrics: MetricWeights,
    /// Strength-based per-specialty weighting for the cosine metric
    pub strength: StrengthWeighting,
    /// Age proximity penalty
    pub age: AgePolicy,
    /// Bonus for candidates sharing the query rider's profile
    pub profile_bonus: f64,
    /// Physical score given to candidates excluded from the physical comparison
    pub neutral_physical_score: f64,
    /// Physical score given to comparable candidates when every physical
    /// distance is zero
    pub physical_zero_spread_score: f64,
    /// Match reason extraction thresholds
    pub reasons: ReasonPolicy,
    /// Result count used when the caller does not pass one
    pub default_max_results: usize,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            metrics: MetricWeights::default(),
            strength: StrengthWeighting::default(),
            age: AgePolicy::default(),
            profile_bonus: 0.03,
            neutral_physical_score: 0.5,
            physical_zero_spread_score: 0.0,
            reasons: ReasonPolicy::default(),
            default_max_results: 10,
        }
    }
}

impl ScoringConfig {
    /// Parse a (possibly partial) configuration from JSON
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let mut config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate_and_normalize()?;
        Ok(config)
    }

    /// Validate the configuration
    /// - Checks that metric weights are non-negative with a positive total
    /// - Checks that penalties, tolerances and bonuses are non-negative
    /// - Checks that strength weights are positive
    /// - Checks that fallback physical scores lie in `[0, 1]`
    /// - Checks that at least one match reason can be cited
    /// - Normalizes metric weights to sum to 1.0 if they don't
    ///
    /// NaN fails every check it reaches.
    pub fn validate_and_normalize(&mut self) -> Result<(), ConfigError> {
        for (name, weight) in self.metrics.named() {
            if weight.is_nan() || weight < 0.0 {
                return Err(ConfigError::NegativeWeight(name));
            }
        }

        let weight_sum = self.metrics.total();
        if weight_sum.is_nan() || weight_sum <= 0.0 {
            return Err(ConfigError::ZeroTotalWeight);
        }

        for (name, value) in [
            ("age.tolerance_years", self.age.tolerance_years),
            ("age.penalty_per_year", self.age.penalty_per_year),
            ("profile_bonus", self.profile_bonus),
        ] {
            if value.is_nan() || value < 0.0 {
                return Err(ConfigError::NegativeValue(name));
            }
        }

        for (name, weight) in self.strength.named_weights() {
            if weight.is_nan() || weight <= 0.0 {
                return Err(ConfigError::NonPositiveWeight(name));
            }
        }
        if self.strength.medium_threshold > self.strength.strong_threshold {
            return Err(ConfigError::ThresholdOrder);
        }

        for (name, score) in [
            ("neutral_physical_score", self.neutral_physical_score),
            ("physical_zero_spread_score", self.physical_zero_spread_score),
        ] {
            if !(0.0..=1.0).contains(&score) {
                return Err(ConfigError::OutOfUnitRange(name));
            }
        }

        if self.reasons.max_reasons == 0 {
            return Err(ConfigError::NoReasons);
        }

        if (weight_sum - 1.0).abs() > 0.001 {
            self.metrics.cosine /= weight_sum;
            self.metrics.euclidean /= weight_sum;
            self.metrics.physical /= weight_sum;
        }

        Ok(())
    }
}

/// Weights combining cosine, inverse Euclidean and physical similarity
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MetricWeights {
    pub cosine: f64,
    pub euclidean: f64,
    pub physical: f64,
}

impl Default for MetricWeights {
    fn default() -> Self {
        Self {
            cosine: 0.60,
            euclidean: 0.25,
            physical: 0.15,
        }
    }
}

impl MetricWeights {
    pub fn total(&self) -> f64 {
        self.cosine + self.euclidean + self.physical
    }

    fn named(&self) -> [(&'static str, f64); 3] {
        [
            ("cosine", self.cosine),
            ("euclidean", self.euclidean),
            ("physical", self.physical),
        ]
    }
}

/// Weight tiers derived from the query rider's raw specialty values
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StrengthWeighting {
    /// Values strictly above this are strong
    pub strong_threshold: f64,
    /// Values strictly above this (and not strong) are medium
    pub medium_threshold: f64,
    pub strong_weight: f64,
    pub medium_weight: f64,
    pub weak_weight: f64,
}

impl StrengthWeighting {
    fn named_weights(&self) -> [(&'static str, f64); 3] {
        [
            ("strength.strong_weight", self.strong_weight),
            ("strength.medium_weight", self.medium_weight),
            ("strength.weak_weight", self.weak_weight),
        ]
    }
}

impl Default for StrengthWeighting {
    fn default() -> Self {
        Self {
            strong_threshold: 70.0,
            medium_threshold: 50.0,
            strong_weight: 2.0,
            medium_weight: 1.5,
            weak_weight: 0.8,
        }
    }
}

/// Age proximity penalty: none within the tolerance, else per-year
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AgePolicy {
    pub tolerance_years: f64,
    pub penalty_per_year: f64,
}

impl Default for AgePolicy {
    fn default() -> Self {
        Self {
            tolerance_years: 7.0,
            penalty_per_year: 0.01,
        }
    }
}

impl AgePolicy {
    /// Penalty for an age gap; the whole gap is charged once it exceeds the tolerance
    pub fn penalty(&self, query_age: f64, candidate_age: f64) -> f64 {
        let gap = (candidate_age - query_age).abs();
        if gap <= self.tolerance_years {
            0.0
        } else {
            self.penalty_per_year * gap
        }
    }
}

/// Thresholds for citing a specialty as a match reason
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ReasonPolicy {
    /// Raw values must differ by strictly less than this
    pub max_gap: f64,
    /// The query rider's raw value must be strictly above this
    pub min_strength: f64,
    pub max_reasons: usize,
}

impl Default for ReasonPolicy {
    fn default() -> Self {
        Self {
            max_gap: 10.0,
            min_strength: 60.0,
            max_reasons: 3,
        }
    }
}

/// Errors that can occur during config validation
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("Metric weight '{0}' is negative")]
    NegativeWeight(&'static str),

    #[error("Total metric weight cannot be zero")]
    ZeroTotalWeight,

    #[error("'{0}' cannot be negative")]
    NegativeValue(&'static str),

    #[error("Strength weight '{0}' must be positive")]
    NonPositiveWeight(&'static str),

    #[error("Medium strength threshold is above the strong threshold")]
    ThresholdOrder,

    #[error("'{0}' must lie in [0, 1]")]
    OutOfUnitRange(&'static str),

    #[error("'reasons.max_reasons' must be at least 1")]
    NoReasons,

    #[error("Invalid config document: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ScoringConfig::default();
        assert_eq!(config.metrics.cosine, 0.60);
        assert_eq!(config.metrics.euclidean, 0.25);
        assert_eq!(config.metrics.physical, 0.15);
        assert_eq!(config.profile_bonus, 0.03);
        assert_eq!(config.default_max_results, 10);
        assert!((config.metrics.total() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_age_penalty() {
        let age = AgePolicy::default();
        assert_eq!(age.penalty(25.0, 32.0), 0.0);
        assert_eq!(age.penalty(32.0, 25.0), 0.0);
        assert!((age.penalty(25.0, 33.0) - 0.08).abs() < 1e-12);
        assert!((age.penalty(40.0, 20.0) - 0.20).abs() < 1e-12);
    }

    #[test]
    fn test_metric_normalization() {
        let mut config = ScoringConfig::default();
        config.metrics = MetricWeights {
            cosine: 2.0,
            euclidean: 1.0,
            physical: 1.0,
        };
        config.validate_and_normalize().unwrap();
        assert!((config.metrics.total() - 1.0).abs() < 1e-9);
        assert!((config.metrics.cosine - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_negative_weight_error() {
        let mut config = ScoringConfig::default();
        config.metrics.physical = -0.1;
        assert_eq!(
            config.validate_and_normalize(),
            Err(ConfigError::NegativeWeight("physical"))
        );
    }

    #[test]
    fn test_nan_weight_error() {
        let mut config = ScoringConfig::default();
        config.metrics.cosine = f64::NAN;
        assert_eq!(
            config.validate_and_normalize(),
            Err(ConfigError::NegativeWeight("cosine"))
        );
    }

    #[test]
    fn test_non_positive_strength_weight_error() {
        let mut config = ScoringConfig::default();
        config.strength.strong_weight = -2.0;
        assert_eq!(
            config.validate_and_normalize(),
            Err(ConfigError::NonPositiveWeight("strength.strong_weight"))
        );

        let mut config = ScoringConfig::default();
        config.strength.weak_weight = 0.0;
        assert_eq!(
            config.validate_and_normalize(),
            Err(ConfigError::NonPositiveWeight("strength.weak_weight"))
        );
    }

    #[test]
    fn test_threshold_order_error() {
        let mut config = ScoringConfig::default();
        config.strength.medium_threshold = 80.0;
        assert_eq!(config.validate_and_normalize(), Err(ConfigError::ThresholdOrder));
    }

    #[test]
    fn test_physical_scores_outside_unit_range_error() {
        let mut config = ScoringConfig::default();
        config.neutral_physical_score = 3.0;
        assert_eq!(
            config.validate_and_normalize(),
            Err(ConfigError::OutOfUnitRange("neutral_physical_score"))
        );

        let mut config = ScoringConfig::default();
        config.physical_zero_spread_score = -0.5;
        assert_eq!(
            config.validate_and_normalize(),
            Err(ConfigError::OutOfUnitRange("physical_zero_spread_score"))
        );
    }

    #[test]
    fn test_zero_max_reasons_error() {
        let mut config = ScoringConfig::default();
        config.reasons.max_reasons = 0;
        assert_eq!(config.validate_and_normalize(), Err(ConfigError::NoReasons));
    }

    #[test]
    fn test_invalid_age_tolerance_error() {
        let mut config = ScoringConfig::default();
        config.age.tolerance_years = -1.0;
        assert_eq!(
            config.validate_and_normalize(),
            Err(ConfigError::NegativeValue("age.tolerance_years"))
        );

        let mut config = ScoringConfig::default();
        config.age.tolerance_years = f64::NAN;
        assert_eq!(
            config.validate_and_normalize(),
            Err(ConfigError::NegativeValue("age.tolerance_years"))
        );
    }

    #[test]
    fn test_negative_penalty_and_bonus_error() {
        let mut config = ScoringConfig::default();
        config.age.penalty_per_year = -0.01;
        assert_eq!(
            config.validate_and_normalize(),
            Err(ConfigError::NegativeValue("age.penalty_per_year"))
        );

        let mut config = ScoringConfig::default();
        config.profile_bonus = -0.03;
        assert_eq!(
            config.validate_and_normalize(),
            Err(ConfigError::NegativeValue("profile_bonus"))
        );
    }

    #[test]
    fn test_json_out_of_range_values_rejected() {
        let json = r#"{"neutral_physical_score": 3.0, "reasons": {"max_reasons": 0}, "strength": {"strong_weight": -2.0}}"#;
        assert!(ScoringConfig::from_json(json).is_err());

        assert_eq!(
            ScoringConfig::from_json(r#"{"reasons": {"max_reasons": 0}}"#),
            Err(ConfigError::NoReasons)
        );
    }

    #[test]
    fn test_zero_total_weight_error() {
        let mut config = ScoringConfig::default();
        config.metrics = MetricWeights {
            cosine: 0.0,
            euclidean: 0.0,
            physical: 0.0,
        };
        assert_eq!(config.validate_and_normalize(), Err(ConfigError::ZeroTotalWeight));
    }

    #[test]
    fn test_partial_json() {
        let config = ScoringConfig::from_json(r#"{"profile_bonus": 0.05, "age": {"tolerance_years": 5}}"#)
            .unwrap();
        assert_eq!(config.profile_bonus, 0.05);
        assert_eq!(config.age.tolerance_years, 5.0);
        assert_eq!(config.age.penalty_per_year, 0.01);
        assert_eq!(config.metrics, MetricWeights::default());
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            ScoringConfig::from_json("{not json"),
            Err(ConfigError::Parse(_))
        ));
    }
}
