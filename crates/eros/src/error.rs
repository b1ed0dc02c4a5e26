//! Error taxonomy for the chart and synastry engine.
//!
//! Every failure is terminal for its input: it points at a defect upstream
//! (bad provider data, bad configuration, a chart that skipped validation)
//! rather than a transient condition.

use crate::chart::Body;
use thiserror::Error;

/// Structural violations detected while assembling a natal chart.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChartDefect {
    #[error("expected {expected} placements, got {found}")]
    PlacementCount { expected: usize, found: usize },
    #[error("body {0} appears more than once")]
    DuplicateBody(Body),
    #[error("body {0} is missing")]
    MissingBody(Body),
    #[error("expected 12 house cusps, got {found}")]
    HouseCount { found: usize },
    #[error("house {0} appears more than once")]
    DuplicateHouse(u8),
    #[error("house {0} is missing")]
    MissingHouse(u8),
    #[error("house number {0} is outside 1..=12")]
    HouseOutOfRange(u8),
    #[error("{body} is placed in house {house}, outside 1..=12")]
    PlacementHouseOutOfRange { body: Body, house: u8 },
    #[error("{subject} longitude {longitude} is outside [0, 360)")]
    LongitudeOutOfRange { subject: String, longitude: f64 },
    #[error("{subject} is labelled {labelled} but longitude {longitude} lies in {actual}")]
    SignMismatch {
        subject: String,
        labelled: String,
        actual: String,
        longitude: f64,
    },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },
    #[error("malformed chart: {0}")]
    MalformedChart(#[from] ChartDefect),
    #[error("invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },
    #[error("incompatible charts: {reason}")]
    IncompatibleCharts { reason: String },
}

impl EngineError {
    pub(crate) fn invalid_input(reason: impl Into<String>) -> Self {
        EngineError::InvalidInput { reason: reason.into() }
    }

    pub(crate) fn invalid_configuration(reason: impl Into<String>) -> Self {
        EngineError::InvalidConfiguration { reason: reason.into() }
    }

    pub(crate) fn incompatible_charts(reason: impl Into<String>) -> Self {
        EngineError::IncompatibleCharts { reason: reason.into() }
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
