use crate::chart::Body;
use crate::error::{EngineError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Major aspect kinds, declared in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectKind {
    Conjunction,
    Sextile,
    Square,
    Trine,
    Opposition,
}

impl AspectKind {
    /// Classification order: the first kind within orb wins.
    pub const ALL: [AspectKind; 5] = [
        AspectKind::Conjunction,
        AspectKind::Sextile,
        AspectKind::Square,
        AspectKind::Trine,
        AspectKind::Opposition,
    ];

    /// Exact angle for this aspect (0, 60, 90, 120, 180)
    pub fn exact_angle(self) -> f64 {
        match self {
            AspectKind::Conjunction => 0.0,
            AspectKind::Sextile => 60.0,
            AspectKind::Square => 90.0,
            AspectKind::Trine => 120.0,
            AspectKind::Opposition => 180.0,
        }
    }

    pub fn is_harmonious(self) -> bool {
        matches!(
            self,
            AspectKind::Conjunction | AspectKind::Sextile | AspectKind::Trine
        )
    }

    pub fn name(self) -> &'static str {
        match self {
            AspectKind::Conjunction => "conjunction",
            AspectKind::Sextile => "sextile",
            AspectKind::Square => "square",
            AspectKind::Trine => "trine",
            AspectKind::Opposition => "opposition",
        }
    }

    fn slot(self) -> usize {
        self as usize
    }
}

impl fmt::Display for AspectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of classifying two longitudes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AspectMatch {
    pub kind: AspectKind,
    /// Angular separation in [0, 180]
    pub separation: f64,
    /// Deviation from the exact angle
    pub orb: f64,
}

/// Aspect between two bodies of the same chart.
///
/// The pair is unordered; `a` always precedes `b` in body order so the same
/// two placements produce the same value whichever way round they are fed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aspect {
    pub a: Body,
    pub b: Body,
    pub kind: AspectKind,
    pub separation: f64,
    pub orb: f64,
}

impl Aspect {
    /// Returns `None` when both sides name the same body.
    pub fn new(first: Body, second: Body, found: AspectMatch) -> Option<Self> {
        if first == second {
            return None;
        }
        let (a, b) = if first < second {
            (first, second)
        } else {
            (second, first)
        };
        Some(Self {
            a,
            b,
            kind: found.kind,
            separation: found.separation,
            orb: found.orb,
        })
    }

    pub fn involves(&self, body: Body) -> bool {
        self.a == body || self.b == body
    }

    /// Within 0.1 degrees of the exact angle
    pub fn is_exact(&self) -> bool {
        self.orb < 0.1
    }
}

/// Maximum orb per aspect kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OrbTable {
    orbs: [f64; 5],
}

impl OrbTable {
    /// Build a table that must name every aspect kind exactly once.
    pub fn new(entries: &[(AspectKind, f64)]) -> Result<Self> {
        let mut orbs: [Option<f64>; 5] = [None; 5];
        for &(kind, orb) in entries {
            if !orb.is_finite() || orb < 0.0 {
                return Err(EngineError::invalid_configuration(format!(
                    "orb for {} must be a non-negative number, got {}",
                    kind, orb
                )));
            }
            if orbs[kind.slot()].replace(orb).is_some() {
                return Err(EngineError::invalid_configuration(format!(
                    "orb for {} is configured more than once",
                    kind
                )));
            }
        }

        let mut table = [0.0; 5];
        for kind in AspectKind::ALL {
            table[kind.slot()] = orbs[kind.slot()].ok_or_else(|| {
                EngineError::invalid_configuration(format!("missing orb for {}", kind))
            })?;
        }
        Ok(Self { orbs: table })
    }

    pub fn orb(&self, kind: AspectKind) -> f64 {
        self.orbs[kind.slot()]
    }

    pub fn entries(&self) -> impl Iterator<Item = (AspectKind, f64)> + '_ {
        AspectKind::ALL.iter().map(move |&kind| (kind, self.orb(kind)))
    }

    pub fn max_orb(&self) -> f64 {
        self.orbs.iter().copied().fold(0.0, f64::max)
    }
}

impl Default for OrbTable {
    fn default() -> Self {
        Self {
            orbs: [8.0, 6.0, 8.0, 8.0, 8.0],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_orbs() {
        let table = OrbTable::default();
        assert_eq!(table.orb(AspectKind::Conjunction), 8.0);
        assert_eq!(table.orb(AspectKind::Sextile), 6.0);
        assert_eq!(table.orb(AspectKind::Opposition), 8.0);
        assert_eq!(table.max_orb(), 8.0);
    }

    #[test]
    fn test_orb_table_requires_every_kind() {
        let err = OrbTable::new(&[
            (AspectKind::Conjunction, 8.0),
            (AspectKind::Sextile, 6.0),
            (AspectKind::Square, 8.0),
            (AspectKind::Trine, 8.0),
        ])
        .unwrap_err();
        assert!(matches!(err, EngineError::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_orb_table_rejects_duplicates_and_negatives() {
        let mut entries: Vec<_> = OrbTable::default().entries().collect();
        entries.push((AspectKind::Trine, 5.0));
        assert!(OrbTable::new(&entries).is_err());

        let mut entries: Vec<_> = OrbTable::default().entries().collect();
        entries[0].1 = -1.0;
        assert!(OrbTable::new(&entries).is_err());
    }

    #[test]
    fn test_aspect_pair_is_canonical() {
        let found = AspectMatch {
            kind: AspectKind::Trine,
            separation: 120.0,
            orb: 0.0,
        };
        let forward = Aspect::new(Body::Sun, Body::Moon, found).unwrap();
        let backward = Aspect::new(Body::Moon, Body::Sun, found).unwrap();
        assert_eq!(forward, backward);
        assert_eq!(forward.a, Body::Sun);
        assert!(Aspect::new(Body::Sun, Body::Sun, found).is_none());
    }

    #[test]
    fn test_is_exact_below_a_tenth_of_a_degree() {
        let with_orb = |orb: f64| AspectMatch {
            kind: AspectKind::Square,
            separation: 90.0 + orb,
            orb,
        };
        let tight = Aspect::new(Body::Mars, Body::Saturn, with_orb(0.05)).unwrap();
        assert!(tight.is_exact());
        let loose = Aspect::new(Body::Mars, Body::Saturn, with_orb(0.1)).unwrap();
        assert!(!loose.is_exact());
    }
}
