use crate::aspects::types::{AspectKind, AspectMatch, OrbTable};
use crate::zodiac::normalize_degrees;

/// Angular separation between two longitudes, always in [0, 180].
pub fn angular_separation(lon1: f64, lon2: f64) -> f64 {
    let raw_diff = (normalize_degrees(lon1) - normalize_degrees(lon2)).abs();
    raw_diff.min(360.0 - raw_diff)
}

/// Classifies the angle between two longitudes against an orb table.
#[derive(Debug, Clone, Default)]
pub struct AspectDetector {
    orbs: OrbTable,
}

impl AspectDetector {
    pub fn new(orbs: OrbTable) -> Self {
        Self { orbs }
    }

    pub fn orbs(&self) -> &OrbTable {
        &self.orbs
    }

    /// Classify the aspect formed by two longitudes.
    ///
    /// Kinds are tried in [`AspectKind::ALL`] order and the first one whose
    /// deviation from its exact angle is within orb is returned. Symmetric in
    /// its arguments.
    pub fn classify(&self, lon1: f64, lon2: f64) -> Option<AspectMatch> {
        let separation = angular_separation(lon1, lon2);
        if !separation.is_finite() {
            return None;
        }

        for kind in AspectKind::ALL {
            let orb = (separation - kind.exact_angle()).abs();
            if orb <= self.orbs.orb(kind) {
                return Some(AspectMatch {
                    kind,
                    separation,
                    orb,
                });
            }
        }

        None
    }
}
