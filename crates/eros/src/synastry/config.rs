use crate::error::{EngineError, Result};
use serde::{Deserialize, Serialize};

const WEIGHT_TOLERANCE: f64 = 1e-6;

/// Contribution of each breakdown component to the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringWeights {
    #[serde(alias = "elementalWeight")]
    pub elemental: f64,
    #[serde(alias = "sunMoonWeight")]
    pub sun_moon: f64,
    #[serde(alias = "venusWeight")]
    pub venus: f64,
    #[serde(alias = "marsWeight")]
    pub mars: f64,
    #[serde(alias = "ascendantWeight")]
    pub ascendant: f64,
}

impl ScoringWeights {
    pub fn sum(&self) -> f64 {
        self.elemental + self.sun_moon + self.venus + self.mars + self.ascendant
    }

    fn named(&self) -> [(&'static str, f64); 5] {
        [
            ("elemental", self.elemental),
            ("sun_moon", self.sun_moon),
            ("venus", self.venus),
            ("mars", self.mars),
            ("ascendant", self.ascendant),
        ]
    }

    /// Every weight must be finite and non-negative and the five must sum
    /// to 1.0.
    pub fn validate(&self) -> Result<()> {
        for (name, weight) in self.named() {
            if !weight.is_finite() || weight < 0.0 {
                return Err(EngineError::invalid_configuration(format!(
                    "weight {} must be a non-negative number, got {}",
                    name, weight
                )));
            }
        }
        let sum = self.sum();
        if (sum - 1.0).abs() > WEIGHT_TOLERANCE {
            return Err(EngineError::invalid_configuration(format!(
                "scoring weights must sum to 1.0, got {}",
                sum
            )));
        }
        Ok(())
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            elemental: 0.20,
            sun_moon: 0.25,
            venus: 0.25,
            mars: 0.15,
            ascendant: 0.15,
        }
    }
}

/// Sub-score awarded to a diagnostic pair depending on how its cross-chart
/// aspect is tagged.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AspectScores {
    pub harmonious: f64,
    pub challenging: f64,
    pub none: f64,
}

impl AspectScores {
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("harmonious", self.harmonious),
            ("challenging", self.challenging),
            ("none", self.none),
        ] {
            if !value.is_finite() || !(0.0..=100.0).contains(&value) {
                return Err(EngineError::invalid_configuration(format!(
                    "aspect score {} must lie in [0, 100], got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

impl Default for AspectScores {
    fn default() -> Self {
        Self {
            harmonious: 90.0,
            challenging: 40.0,
            none: 65.0,
        }
    }
}

/// Validated scoring configuration.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ScoringConfig {
    weights: ScoringWeights,
    aspect_scores: AspectScores,
}

impl ScoringConfig {
    pub fn new(weights: ScoringWeights, aspect_scores: AspectScores) -> Result<Self> {
        weights.validate()?;
        aspect_scores.validate()?;
        Ok(Self {
            weights,
            aspect_scores,
        })
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    pub fn aspect_scores(&self) -> &AspectScores {
        &self.aspect_scores
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_sum_to_one() {
        assert!(ScoringWeights::default().validate().is_ok());
        assert!(AspectScores::default().validate().is_ok());
    }

    #[test]
    fn test_weights_accepted() {
        let weights = ScoringWeights {
            elemental: 0.3,
            sun_moon: 0.25,
            venus: 0.2,
            mars: 0.15,
            ascendant: 0.1,
        };
        assert!(ScoringConfig::new(weights, AspectScores::default()).is_ok());
    }

    #[test]
    fn test_weights_short_of_one_rejected() {
        let weights = ScoringWeights {
            elemental: 0.3,
            sun_moon: 0.25,
            venus: 0.2,
            mars: 0.15,
            ascendant: 0.05,
        };
        let err = ScoringConfig::new(weights, AspectScores::default()).unwrap_err();
        assert!(matches!(err, EngineError::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_negative_weight_rejected() {
        let weights = ScoringWeights {
            elemental: 1.2,
            sun_moon: -0.2,
            venus: 0.0,
            mars: 0.0,
            ascendant: 0.0,
        };
        assert!(weights.validate().is_err());
    }

    #[test]
    fn test_aspect_scores_bounded() {
        let scores = AspectScores {
            harmonious: 120.0,
            challenging: 40.0,
            none: 60.0,
        };
        assert!(ScoringConfig::new(ScoringWeights::default(), scores).is_err());
    }
}
