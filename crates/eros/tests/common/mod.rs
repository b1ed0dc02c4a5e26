#![allow(dead_code)]

use eros::{Body, ChartBuilder, HouseCusp, NatalChart, PlanetPlacement};

/// Longitudes in `Body::ALL` order: sun, moon, mercury, venus, mars, jupiter,
/// saturn, uranus, neptune, pluto, ascendant.
pub const BASE: [f64; 11] = [
    15.0, 130.0, 25.0, 100.0, 250.0, 300.0, 170.0, 280.0, 290.0, 230.0, 45.0,
];

/// Equal houses starting at the ascendant.
pub fn equal_houses(ascendant: f64) -> Vec<HouseCusp> {
    (1..=12u8)
        .map(|n| HouseCusp::at(n, (ascendant + (n as f64 - 1.0) * 30.0).rem_euclid(360.0)))
        .collect()
}

pub fn placements(longitudes: [f64; 11]) -> Vec<PlanetPlacement> {
    let ascendant = longitudes[10];
    Body::ALL
        .iter()
        .zip(longitudes)
        .map(|(&body, lon)| {
            let house = ((lon - ascendant).rem_euclid(360.0) / 30.0) as u8 + 1;
            PlanetPlacement::at(body, lon, house.min(12))
        })
        .collect()
}

pub fn chart(longitudes: [f64; 11]) -> NatalChart {
    ChartBuilder::default()
        .build(placements(longitudes), equal_houses(longitudes[10]))
        .expect("fixture chart should build")
}

/// `BASE` with one body moved.
pub fn base_with(body: Body, longitude: f64) -> [f64; 11] {
    let mut longitudes = BASE;
    longitudes[Body::ALL.iter().position(|b| *b == body).unwrap()] = longitude;
    longitudes
}

/// Small deterministic generator so property-style tests are repeatable.
pub struct Lcg(u64);

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Self(seed)
    }

    /// Uniform value in [0, 360).
    pub fn longitude(&mut self) -> f64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        ((self.0 >> 11) as f64 / (1u64 << 53) as f64) * 360.0
    }

    pub fn longitudes(&mut self) -> [f64; 11] {
        let mut out = [0.0; 11];
        for slot in out.iter_mut() {
            *slot = self.longitude();
        }
        out
    }
}
