//! Natal chart and synastry engine.
//!
//! Positions come from an external [`provider::PositionProvider`]; this crate
//! validates them into a [`NatalChart`], classifies aspects, profiles element
//! balance and scores pairs of charts for compatibility. Every operation is a
//! pure function of its inputs.

pub mod aspects;
pub mod chart;
pub mod elements;
pub mod error;
pub mod provider;
pub mod synastry;
pub mod zodiac;

pub use aspects::{Aspect, AspectDetector, AspectKind, AspectMatch, OrbTable};
pub use chart::{Body, ChartBuilder, HouseCusp, NatalChart, PlanetPlacement};
pub use elements::{ElementalProfile, ElementalProfiler};
pub use error::{ChartDefect, EngineError, Result};
pub use provider::{BirthData, GeoLocation, PositionProvider, ResolvedPositions};
pub use synastry::{
    AspectScores, CompatibilityScore, ScoringConfig, ScoringWeights, SynastryScorer,
};
pub use zodiac::{sign_compatibility, Element, Modality, Sign};
