use crate::aspects::Aspect;
use crate::elements::{ElementalProfile, ElementalProfiler};
use crate::error::{EngineError, Result};
use crate::zodiac::Sign;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Chart points tracked by the engine. The ascendant is carried as a point
/// alongside the ten planets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
    #[serde(alias = "asc")]
    Ascendant,
}

impl Body {
    pub const ALL: [Body; 11] = [
        Body::Sun,
        Body::Moon,
        Body::Mercury,
        Body::Venus,
        Body::Mars,
        Body::Jupiter,
        Body::Saturn,
        Body::Uranus,
        Body::Neptune,
        Body::Pluto,
        Body::Ascendant,
    ];

    /// Ten planetary bodies; everything except the ascendant.
    pub const PLANETS: [Body; 10] = [
        Body::Sun,
        Body::Moon,
        Body::Mercury,
        Body::Venus,
        Body::Mars,
        Body::Jupiter,
        Body::Saturn,
        Body::Uranus,
        Body::Neptune,
        Body::Pluto,
    ];

    /// Bodies whose mutual aspects are computed inside a single chart.
    pub const CLASSICAL: [Body; 7] = [
        Body::Sun,
        Body::Moon,
        Body::Mercury,
        Body::Venus,
        Body::Mars,
        Body::Jupiter,
        Body::Saturn,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Body::Sun => "sun",
            Body::Moon => "moon",
            Body::Mercury => "mercury",
            Body::Venus => "venus",
            Body::Mars => "mars",
            Body::Jupiter => "jupiter",
            Body::Saturn => "saturn",
            Body::Uranus => "uranus",
            Body::Neptune => "neptune",
            Body::Pluto => "pluto",
            Body::Ascendant => "ascendant",
        }
    }

    /// Generational planets: uranus, neptune, pluto.
    pub fn is_outer(self) -> bool {
        matches!(self, Body::Uranus | Body::Neptune | Body::Pluto)
    }

    pub fn is_classical(self) -> bool {
        Body::CLASSICAL.contains(&self)
    }

    pub(crate) fn slot(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Body {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        let lower = s.trim().to_lowercase();
        if lower == "asc" {
            return Ok(Body::Ascendant);
        }
        Body::ALL
            .iter()
            .copied()
            .find(|body| body.name() == lower)
            .ok_or_else(|| EngineError::invalid_input(format!("unknown body: {}", s)))
    }
}

/// Position of one body as reported by the position provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanetPlacement {
    pub body: Body,
    pub sign: Sign,
    /// Ecliptic longitude in degrees [0, 360)
    pub longitude: f64,
    /// House number 1..=12
    pub house: u8,
    #[serde(default, alias = "isRetrograde")]
    pub retrograde: bool,
}

impl PlanetPlacement {
    /// Placement whose sign is derived from the longitude.
    pub fn at(body: Body, longitude: f64, house: u8) -> Self {
        Self {
            body,
            sign: Sign::from_longitude(longitude),
            longitude,
            house,
            retrograde: false,
        }
    }

    pub fn with_retrograde(mut self, retrograde: bool) -> Self {
        self.retrograde = retrograde;
        self
    }

    /// Degrees past the start of the sign, in [0, 30).
    pub fn degree_in_sign(&self) -> f64 {
        self.longitude - (self.sign.index() as f64 * 30.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseCusp {
    /// House number 1..=12
    pub house: u8,
    pub sign: Sign,
    pub longitude: f64,
}

impl HouseCusp {
    pub fn at(house: u8, longitude: f64) -> Self {
        Self {
            house,
            sign: Sign::from_longitude(longitude),
            longitude,
        }
    }
}

/// A validated natal chart.
///
/// Only [`ChartBuilder`](crate::chart::ChartBuilder) constructs charts in
/// memory. Charts can also come back from storage through serde, which skips
/// validation; [`NatalChart::ensure_complete`] re-checks the shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NatalChart {
    placements: Vec<PlanetPlacement>,
    houses: Vec<HouseCusp>,
    aspects: Vec<Aspect>,
}

impl NatalChart {
    pub(crate) fn from_parts(
        placements: Vec<PlanetPlacement>,
        houses: Vec<HouseCusp>,
        aspects: Vec<Aspect>,
    ) -> Self {
        Self {
            placements,
            houses,
            aspects,
        }
    }

    /// All eleven placements in body order.
    pub fn placements(&self) -> &[PlanetPlacement] {
        &self.placements
    }

    /// Placements of the ten planets, ascendant excluded.
    pub fn planets(&self) -> impl Iterator<Item = &PlanetPlacement> + '_ {
        self.placements
            .iter()
            .filter(|p| p.body != Body::Ascendant)
    }

    pub fn placement(&self, body: Body) -> Option<&PlanetPlacement> {
        self.placements.iter().find(|p| p.body == body)
    }

    /// Twelve cusps in house order.
    pub fn houses(&self) -> &[HouseCusp] {
        &self.houses
    }

    pub fn house(&self, number: u8) -> Option<&HouseCusp> {
        self.houses.iter().find(|h| h.house == number)
    }

    pub fn aspects(&self) -> &[Aspect] {
        &self.aspects
    }

    pub fn aspects_of(&self, body: Body) -> impl Iterator<Item = &Aspect> + '_ {
        self.aspects.iter().filter(move |a| a.involves(body))
    }

    pub fn sun_sign(&self) -> Option<Sign> {
        self.placement(Body::Sun).map(|p| p.sign)
    }

    pub fn moon_sign(&self) -> Option<Sign> {
        self.placement(Body::Moon).map(|p| p.sign)
    }

    pub fn rising_sign(&self) -> Option<Sign> {
        self.placement(Body::Ascendant).map(|p| p.sign)
    }

    /// Elemental distribution over the ten planets.
    pub fn elemental_profile(&self) -> Result<ElementalProfile> {
        ElementalProfiler::profile_signs(self.planets().map(|p| p.sign))
    }

    /// Check that every body and house is present, for charts that did not
    /// come out of the builder.
    pub fn ensure_complete(&self) -> Result<()> {
        if self.placements.len() != Body::ALL.len() {
            return Err(EngineError::incompatible_charts(format!(
                "chart carries {} placements instead of {}",
                self.placements.len(),
                Body::ALL.len()
            )));
        }
        for body in Body::ALL {
            if self.placement(body).is_none() {
                return Err(EngineError::incompatible_charts(format!(
                    "chart has no {} placement",
                    body
                )));
            }
        }
        for number in 1..=12u8 {
            if self.house(number).is_none() {
                return Err(EngineError::incompatible_charts(format!(
                    "chart has no cusp for house {}",
                    number
                )));
            }
        }
        Ok(())
    }
}
