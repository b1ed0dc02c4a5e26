use crate::aspects::{Aspect, AspectDetector};
use crate::chart::types::{Body, HouseCusp, NatalChart, PlanetPlacement};
use crate::error::{ChartDefect, Result};
use crate::zodiac::Sign;

/// Assembles provider output into a validated [`NatalChart`].
#[derive(Debug, Clone, Default)]
pub struct ChartBuilder {
    detector: AspectDetector,
}

impl ChartBuilder {
    pub fn new(detector: AspectDetector) -> Self {
        Self { detector }
    }

    pub fn detector(&self) -> &AspectDetector {
        &self.detector
    }

    /// Validate eleven placements and twelve cusps, then derive the
    /// intra-chart aspects among the classical bodies.
    ///
    /// Nothing is repaired: any structural problem in the input is reported
    /// as `MalformedChart`.
    pub fn build(
        &self,
        placements: Vec<PlanetPlacement>,
        houses: Vec<HouseCusp>,
    ) -> Result<NatalChart> {
        let placements = validate_placements(placements)?;
        let houses = validate_houses(houses)?;
        let aspects = self.compute_aspects(&placements);

        log::debug!(
            "built chart: sun {}, moon {}, rising {}, {} aspects",
            placements[Body::Sun.slot()].sign,
            placements[Body::Moon.slot()].sign,
            placements[Body::Ascendant.slot()].sign,
            aspects.len()
        );

        Ok(NatalChart::from_parts(placements, houses, aspects))
    }

    /// Aspects between every pair of classical bodies. Expects placements in
    /// body order.
    fn compute_aspects(&self, placements: &[PlanetPlacement]) -> Vec<Aspect> {
        let classical = &Body::CLASSICAL;
        let mut aspects = Vec::new();
        for i in 0..classical.len() {
            for j in (i + 1)..classical.len() {
                let p1 = &placements[classical[i].slot()];
                let p2 = &placements[classical[j].slot()];

                if let Some(found) = self.detector.classify(p1.longitude, p2.longitude) {
                    log::trace!(
                        "{} {} {} (orb {:.2})",
                        p1.body,
                        found.kind,
                        p2.body,
                        found.orb
                    );
                    aspects.extend(Aspect::new(p1.body, p2.body, found));
                }
            }
        }
        aspects
    }
}

fn check_longitude(subject: impl FnOnce() -> String, longitude: f64) -> Result<()> {
    if longitude.is_finite() && (0.0..360.0).contains(&longitude) {
        Ok(())
    } else {
        Err(ChartDefect::LongitudeOutOfRange {
            subject: subject(),
            longitude,
        }
        .into())
    }
}

fn check_sign(subject: impl FnOnce() -> String, labelled: Sign, longitude: f64) -> Result<()> {
    let actual = Sign::from_longitude(longitude);
    if actual == labelled {
        Ok(())
    } else {
        Err(ChartDefect::SignMismatch {
            subject: subject(),
            labelled: labelled.to_string(),
            actual: actual.to_string(),
            longitude,
        }
        .into())
    }
}

/// Returns the placements sorted into body order.
fn validate_placements(placements: Vec<PlanetPlacement>) -> Result<Vec<PlanetPlacement>> {
    if placements.len() != Body::ALL.len() {
        return Err(ChartDefect::PlacementCount {
            expected: Body::ALL.len(),
            found: placements.len(),
        }
        .into());
    }

    let mut slots: [Option<PlanetPlacement>; 11] = Default::default();
    for placement in placements {
        check_longitude(|| placement.body.to_string(), placement.longitude)?;
        check_sign(|| placement.body.to_string(), placement.sign, placement.longitude)?;
        if !(1..=12).contains(&placement.house) {
            return Err(ChartDefect::PlacementHouseOutOfRange {
                body: placement.body,
                house: placement.house,
            }
            .into());
        }

        let slot = &mut slots[placement.body.slot()];
        if slot.is_some() {
            return Err(ChartDefect::DuplicateBody(placement.body).into());
        }
        *slot = Some(placement);
    }

    // With exactly eleven entries and no duplicates every slot is filled, but
    // report the gap rather than assume it.
    let mut ordered = Vec::with_capacity(Body::ALL.len());
    for (body, slot) in Body::ALL.iter().zip(slots) {
        ordered.push(slot.ok_or(ChartDefect::MissingBody(*body))?);
    }
    Ok(ordered)
}

/// Returns the cusps sorted by house number.
fn validate_houses(houses: Vec<HouseCusp>) -> Result<Vec<HouseCusp>> {
    if houses.len() != 12 {
        return Err(ChartDefect::HouseCount {
            found: houses.len(),
        }
        .into());
    }

    let mut slots: [Option<HouseCusp>; 12] = Default::default();
    for cusp in houses {
        if !(1..=12).contains(&cusp.house) {
            return Err(ChartDefect::HouseOutOfRange(cusp.house).into());
        }
        check_longitude(|| format!("house {}", cusp.house), cusp.longitude)?;
        check_sign(|| format!("house {}", cusp.house), cusp.sign, cusp.longitude)?;

        let slot = &mut slots[(cusp.house - 1) as usize];
        if slot.is_some() {
            return Err(ChartDefect::DuplicateHouse(cusp.house).into());
        }
        *slot = Some(cusp);
    }

    let mut ordered = Vec::with_capacity(12);
    for (number, slot) in (1..=12u8).zip(slots) {
        ordered.push(slot.ok_or(ChartDefect::MissingHouse(number))?);
    }
    Ok(ordered)
}
