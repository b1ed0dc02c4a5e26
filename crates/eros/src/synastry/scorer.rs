use crate::aspects::{angular_separation, AspectDetector};
use crate::chart::{Body, NatalChart, PlanetPlacement};
use crate::error::{EngineError, Result};
use crate::synastry::config::ScoringConfig;
use crate::synastry::narrative::tag_for;
use crate::synastry::types::{
    CompatibilityScore, Harmony, RankedMatch, ScoreBreakdown, SynastryAspect,
};
use crate::zodiac::sign_compatibility;

/// Same-body pairs compared across the two charts, in tag order.
pub const DIAGNOSTIC_BODIES: [Body; 5] = [
    Body::Sun,
    Body::Moon,
    Body::Venus,
    Body::Mars,
    Body::Ascendant,
];

/// Compares two natal charts.
#[derive(Debug, Clone, Default)]
pub struct SynastryScorer {
    detector: AspectDetector,
    config: ScoringConfig,
}

impl SynastryScorer {
    pub fn new(detector: AspectDetector, config: ScoringConfig) -> Self {
        Self { detector, config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Score `chart_a` against `chart_b`.
    ///
    /// Fails with `IncompatibleCharts` when either chart is missing a body or
    /// house, which can only happen for charts that were deserialized rather
    /// than built.
    pub fn score(&self, chart_a: &NatalChart, chart_b: &NatalChart) -> Result<CompatibilityScore> {
        chart_a.ensure_complete()?;
        chart_b.ensure_complete()?;

        let profiles = (chart_a.elemental_profile()?, chart_b.elemental_profile()?);
        let elemental_harmony = elemental_harmony(chart_a, chart_b)?;

        let mut synastry_aspects = Vec::with_capacity(DIAGNOSTIC_BODIES.len());
        for body in DIAGNOSTIC_BODIES {
            let a = require(chart_a, body)?;
            let b = require(chart_b, body)?;
            synastry_aspects.push(self.cross_aspect(a, b));
        }

        let value_of = |body: Body| -> f64 {
            let harmony = synastry_aspects
                .iter()
                .find(|a| a.body_a == body)
                .map(|a| a.harmony)
                .unwrap_or(Harmony::Neutral);
            self.harmony_value(harmony)
        };

        let breakdown = ScoreBreakdown {
            elemental_harmony,
            sun_moon_aspect: (value_of(Body::Sun) + value_of(Body::Moon)) / 2.0,
            venus_aspect: value_of(Body::Venus),
            mars_aspect: value_of(Body::Mars),
            ascendant_compatibility: value_of(Body::Ascendant),
        };
        let overall = self.overall(&breakdown);

        let mut strengths = Vec::new();
        let mut challenges = Vec::new();
        for aspect in &synastry_aspects {
            let Some(text) = tag_for(aspect.body_a, aspect.body_b, aspect.harmony) else {
                continue;
            };
            match aspect.harmony {
                Harmony::Harmonious => strengths.push(text.to_string()),
                Harmony::Challenging => challenges.push(text.to_string()),
                Harmony::Neutral => {}
            }
        }

        log::debug!(
            "synastry overall {} (elemental {:.1}, sun/moon {:.1}, venus {:.1}, mars {:.1}, asc {:.1})",
            overall,
            breakdown.elemental_harmony,
            breakdown.sun_moon_aspect,
            breakdown.venus_aspect,
            breakdown.mars_aspect,
            breakdown.ascendant_compatibility
        );

        Ok(CompatibilityScore {
            overall,
            breakdown,
            strengths,
            challenges,
            synastry_aspects,
            profiles,
        })
    }

    /// Score `subject` against every candidate and order the results by
    /// descending overall score. Candidates with equal scores keep their
    /// input order.
    pub fn rank<K: Clone>(
        &self,
        subject: &NatalChart,
        candidates: &[(K, NatalChart)],
    ) -> Result<Vec<RankedMatch<K>>> {
        let mut ranked = candidates
            .iter()
            .map(|(key, chart)| {
                Ok(RankedMatch {
                    key: key.clone(),
                    score: self.score(subject, chart)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        ranked.sort_by(|x, y| y.score.overall.cmp(&x.score.overall));
        Ok(ranked)
    }

    fn cross_aspect(&self, a: &PlanetPlacement, b: &PlanetPlacement) -> SynastryAspect {
        let found = self.detector.classify(a.longitude, b.longitude);
        let kind = found.map(|f| f.kind);
        SynastryAspect {
            body_a: a.body,
            body_b: b.body,
            separation: found
                .map(|f| f.separation)
                .unwrap_or_else(|| angular_separation(a.longitude, b.longitude)),
            kind,
            orb: found.map(|f| f.orb),
            harmony: Harmony::of(kind),
        }
    }

    fn harmony_value(&self, harmony: Harmony) -> f64 {
        let scores = self.config.aspect_scores();
        match harmony {
            Harmony::Harmonious => scores.harmonious,
            Harmony::Challenging => scores.challenging,
            Harmony::Neutral => scores.none,
        }
    }

    fn overall(&self, breakdown: &ScoreBreakdown) -> u8 {
        let w = self.config.weights();
        let total = breakdown.elemental_harmony * w.elemental
            + breakdown.sun_moon_aspect * w.sun_moon
            + breakdown.venus_aspect * w.venus
            + breakdown.mars_aspect * w.mars
            + breakdown.ascendant_compatibility * w.ascendant;
        total.round().clamp(0.0, 100.0) as u8
    }
}

fn require(chart: &NatalChart, body: Body) -> Result<&PlanetPlacement> {
    chart.placement(body).ok_or_else(|| {
        EngineError::incompatible_charts(format!("chart has no {} placement", body))
    })
}

/// Mean sign compatibility of the ten planets, body by body.
fn elemental_harmony(chart_a: &NatalChart, chart_b: &NatalChart) -> Result<f64> {
    let mut sum = 0.0;
    for body in Body::PLANETS {
        let a = require(chart_a, body)?;
        let b = require(chart_b, body)?;
        sum += sign_compatibility(a.sign, b.sign) as f64;
    }
    Ok(sum / Body::PLANETS.len() as f64)
}
