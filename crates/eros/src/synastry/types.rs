use crate::aspects::AspectKind;
use crate::chart::Body;
use crate::elements::ElementalProfile;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Harmony {
    Harmonious,
    Challenging,
    Neutral,
}

impl Harmony {
    pub fn of(kind: Option<AspectKind>) -> Self {
        match kind {
            Some(kind) if kind.is_harmonious() => Harmony::Harmonious,
            Some(_) => Harmony::Challenging,
            None => Harmony::Neutral,
        }
    }
}

/// Relationship between a body of the first chart and a body of the second.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SynastryAspect {
    /// Body taken from the first chart
    pub body_a: Body,
    /// Body taken from the second chart
    pub body_b: Body,
    pub separation: f64,
    /// `None` when the separation matches no aspect
    pub kind: Option<AspectKind>,
    pub orb: Option<f64>,
    pub harmony: Harmony,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub elemental_harmony: f64,
    pub sun_moon_aspect: f64,
    pub venus_aspect: f64,
    pub mars_aspect: f64,
    pub ascendant_compatibility: f64,
}

/// Coarse reading of an overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompatibilityBand {
    /// 80 and above
    Deep,
    /// 60 to 79
    Promising,
    /// Below 60
    Learning,
}

impl CompatibilityBand {
    pub fn of(overall: u8) -> Self {
        if overall >= 80 {
            CompatibilityBand::Deep
        } else if overall >= 60 {
            CompatibilityBand::Promising
        } else {
            CompatibilityBand::Learning
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompatibilityScore {
    /// Weighted total in [0, 100]
    pub overall: u8,
    pub breakdown: ScoreBreakdown,
    pub strengths: Vec<String>,
    pub challenges: Vec<String>,
    pub synastry_aspects: Vec<SynastryAspect>,
    /// Element distributions of the two charts, first chart first
    pub profiles: (ElementalProfile, ElementalProfile),
}

impl CompatibilityScore {
    pub fn band(&self) -> CompatibilityBand {
        CompatibilityBand::of(self.overall)
    }

    pub fn aspect_between(&self, body: Body) -> Option<&SynastryAspect> {
        self.synastry_aspects
            .iter()
            .find(|a| a.body_a == body && a.body_b == body)
    }
}

/// A scored candidate, as returned by ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedMatch<K> {
    pub key: K,
    pub score: CompatibilityScore,
}
