//! Seam to the external ephemeris source.
//!
//! The engine never computes positions itself. A [`PositionProvider`] turns a
//! birth instant and place into raw placements and cusps, and
//! [`resolve_chart`] hands them to the [`ChartBuilder`].

use crate::chart::{ChartBuilder, HouseCusp, NatalChart, PlanetPlacement};
use crate::error::EngineError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Geographic location coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirthData {
    pub instant: DateTime<Utc>,
    pub location: GeoLocation,
}

/// Raw provider response: one placement per body plus the house cusps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedPositions {
    pub placements: Vec<PlanetPlacement>,
    pub houses: Vec<HouseCusp>,
}

impl ResolvedPositions {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

#[async_trait]
pub trait PositionProvider: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    async fn resolve(&self, birth: &BirthData) -> Result<ResolvedPositions, Self::Error>;
}

#[derive(Error, Debug)]
pub enum ResolveError<E: std::error::Error + 'static> {
    #[error("position provider failed: {0}")]
    Provider(#[source] E),
    #[error(transparent)]
    Chart(#[from] EngineError),
}

/// Fetch positions for a birth record and build the chart.
///
/// Only the provider call awaits; chart construction is synchronous.
pub async fn resolve_chart<P>(
    provider: &P,
    builder: &ChartBuilder,
    birth: &BirthData,
) -> Result<NatalChart, ResolveError<P::Error>>
where
    P: PositionProvider + ?Sized,
{
    let positions = provider
        .resolve(birth)
        .await
        .map_err(ResolveError::Provider)?;
    log::debug!(
        "provider returned {} placements and {} cusps for {}",
        positions.placements.len(),
        positions.houses.len(),
        birth.instant
    );
    Ok(builder.build(positions.placements, positions.houses)?)
}
