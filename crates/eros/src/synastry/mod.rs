pub mod config;
pub mod narrative;
pub mod scorer;
pub mod types;

pub use config::{AspectScores, ScoringConfig, ScoringWeights};
pub use scorer::{SynastryScorer, DIAGNOSTIC_BODIES};
pub use types::{
    CompatibilityBand, CompatibilityScore, Harmony, RankedMatch, ScoreBreakdown, SynastryAspect,
};
