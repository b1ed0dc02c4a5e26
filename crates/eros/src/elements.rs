//! Elemental distribution of a set of placements.

use crate::chart::{Body, NatalChart, PlanetPlacement};
use crate::error::{EngineError, Result};
use crate::zodiac::{Element, Sign};
use serde::{Deserialize, Serialize};

/// Percentage of placements per element.
///
/// Each share is rounded on its own, so the four values may add up to 99 or
/// 101.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ElementalProfile {
    pub fire: u8,
    pub earth: u8,
    pub air: u8,
    pub water: u8,
}

impl ElementalProfile {
    pub fn get(&self, element: Element) -> u8 {
        match element {
            Element::Fire => self.fire,
            Element::Earth => self.earth,
            Element::Air => self.air,
            Element::Water => self.water,
        }
    }

    pub fn total(&self) -> u32 {
        Element::ALL.iter().map(|&e| self.get(e) as u32).sum()
    }

    /// Element with the largest share; ties go to the earlier element in
    /// fire, earth, air, water order.
    pub fn dominant(&self) -> Element {
        let mut best = Element::Fire;
        for element in Element::ALL {
            if self.get(element) > self.get(best) {
                best = element;
            }
        }
        best
    }

    fn from_shares(shares: [f64; 4], total: f64) -> Self {
        let pct = |share: f64| ((share / total) * 100.0).round() as u8;
        Self {
            fire: pct(shares[0]),
            earth: pct(shares[1]),
            air: pct(shares[2]),
            water: pct(shares[3]),
        }
    }
}

/// Per-body weights for the weighted element reading shown on profiles.
const BODY_WEIGHTS: [(Body, f64); 11] = [
    (Body::Sun, 0.25),
    (Body::Moon, 0.20),
    (Body::Mercury, 0.10),
    (Body::Venus, 0.10),
    (Body::Mars, 0.10),
    (Body::Jupiter, 0.08),
    (Body::Saturn, 0.07),
    (Body::Uranus, 0.03),
    (Body::Neptune, 0.03),
    (Body::Pluto, 0.02),
    (Body::Ascendant, 0.02),
];

fn element_slot(element: Element) -> usize {
    match element {
        Element::Fire => 0,
        Element::Earth => 1,
        Element::Air => 2,
        Element::Water => 3,
    }
}

pub struct ElementalProfiler;

impl ElementalProfiler {
    /// Count placements per element. Fails on an empty slice.
    pub fn profile(placements: &[PlanetPlacement]) -> Result<ElementalProfile> {
        Self::profile_signs(placements.iter().map(|p| p.sign))
    }

    pub fn profile_signs<I>(signs: I) -> Result<ElementalProfile>
    where
        I: IntoIterator<Item = Sign>,
    {
        let mut counts = [0.0f64; 4];
        let mut total = 0usize;
        for sign in signs {
            counts[element_slot(sign.element())] += 1.0;
            total += 1;
        }
        if total == 0 {
            return Err(EngineError::invalid_input(
                "cannot profile an empty set of placements",
            ));
        }
        Ok(ElementalProfile::from_shares(counts, total as f64))
    }

    /// Weighted element reading across all eleven chart points.
    ///
    /// Bodies missing from the chart simply contribute nothing; a chart with
    /// no placements at all is rejected.
    pub fn energies(chart: &NatalChart) -> Result<ElementalProfile> {
        let mut shares = [0.0f64; 4];
        let mut total = 0.0;
        for (body, weight) in BODY_WEIGHTS {
            if let Some(placement) = chart.placement(body) {
                shares[element_slot(placement.sign.element())] += weight;
                total += weight;
            }
        }
        if total <= 0.0 {
            return Err(EngineError::invalid_input(
                "chart has no placements to weigh",
            ));
        }
        Ok(ElementalProfile::from_shares(shares, total))
    }
}
