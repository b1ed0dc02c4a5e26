//! Zodiac lookup tables.
//!
//! Signs map 1:1 onto an element, a modality and a ruling body. The tables
//! are `const` data; nothing here can be mutated at runtime.

use crate::chart::Body;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

impl Element {
    pub const ALL: [Element; 4] = [Element::Fire, Element::Earth, Element::Air, Element::Water];

    pub fn name(self) -> &'static str {
        match self {
            Element::Fire => "fire",
            Element::Earth => "earth",
            Element::Air => "air",
            Element::Water => "water",
        }
    }

    /// Fire feeds air and earth holds water; every other distinct pairing is
    /// treated as tension.
    pub fn is_complementary(self, other: Element) -> bool {
        matches!(
            (self, other),
            (Element::Fire, Element::Air)
                | (Element::Air, Element::Fire)
                | (Element::Earth, Element::Water)
                | (Element::Water, Element::Earth)
        )
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modality {
    Cardinal,
    Fixed,
    Mutable,
}

impl fmt::Display for Modality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Modality::Cardinal => "cardinal",
            Modality::Fixed => "fixed",
            Modality::Mutable => "mutable",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

struct SignMeta {
    name: &'static str,
    glyph: &'static str,
    element: Element,
    modality: Modality,
    ruler: Body,
    modern_ruler: Body,
}

const SIGNS: [SignMeta; 12] = [
    SignMeta { name: "aries", glyph: "♈", element: Element::Fire, modality: Modality::Cardinal, ruler: Body::Mars, modern_ruler: Body::Mars },
    SignMeta { name: "taurus", glyph: "♉", element: Element::Earth, modality: Modality::Fixed, ruler: Body::Venus, modern_ruler: Body::Venus },
    SignMeta { name: "gemini", glyph: "♊", element: Element::Air, modality: Modality::Mutable, ruler: Body::Mercury, modern_ruler: Body::Mercury },
    SignMeta { name: "cancer", glyph: "♋", element: Element::Water, modality: Modality::Cardinal, ruler: Body::Moon, modern_ruler: Body::Moon },
    SignMeta { name: "leo", glyph: "♌", element: Element::Fire, modality: Modality::Fixed, ruler: Body::Sun, modern_ruler: Body::Sun },
    SignMeta { name: "virgo", glyph: "♍", element: Element::Earth, modality: Modality::Mutable, ruler: Body::Mercury, modern_ruler: Body::Mercury },
    SignMeta { name: "libra", glyph: "♎", element: Element::Air, modality: Modality::Cardinal, ruler: Body::Venus, modern_ruler: Body::Venus },
    SignMeta { name: "scorpio", glyph: "♏", element: Element::Water, modality: Modality::Fixed, ruler: Body::Mars, modern_ruler: Body::Pluto },
    SignMeta { name: "sagittarius", glyph: "♐", element: Element::Fire, modality: Modality::Mutable, ruler: Body::Jupiter, modern_ruler: Body::Jupiter },
    SignMeta { name: "capricorn", glyph: "♑", element: Element::Earth, modality: Modality::Cardinal, ruler: Body::Saturn, modern_ruler: Body::Saturn },
    SignMeta { name: "aquarius", glyph: "♒", element: Element::Air, modality: Modality::Fixed, ruler: Body::Saturn, modern_ruler: Body::Uranus },
    SignMeta { name: "pisces", glyph: "♓", element: Element::Water, modality: Modality::Mutable, ruler: Body::Jupiter, modern_ruler: Body::Neptune },
];

impl Sign {
    pub const ALL: [Sign; 12] = [
        Sign::Aries,
        Sign::Taurus,
        Sign::Gemini,
        Sign::Cancer,
        Sign::Leo,
        Sign::Virgo,
        Sign::Libra,
        Sign::Scorpio,
        Sign::Sagittarius,
        Sign::Capricorn,
        Sign::Aquarius,
        Sign::Pisces,
    ];

    /// Zero-based ordinal, Aries = 0.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Sign> {
        Sign::ALL.get(index).copied()
    }

    /// Sign containing an ecliptic longitude. Any real is accepted and
    /// wrapped into [0, 360) first.
    pub fn from_longitude(longitude: f64) -> Sign {
        let lon = normalize_degrees(longitude);
        let idx = ((lon / 30.0).floor() as usize) % 12;
        Sign::ALL[idx]
    }

    fn meta(self) -> &'static SignMeta {
        &SIGNS[self.index()]
    }

    pub fn name(self) -> &'static str {
        self.meta().name
    }

    pub fn glyph(self) -> &'static str {
        self.meta().glyph
    }

    pub fn element(self) -> Element {
        self.meta().element
    }

    pub fn modality(self) -> Modality {
        self.meta().modality
    }

    /// Ruling body; `modern` swaps in the outer-planet rulers of Scorpio,
    /// Aquarius and Pisces.
    pub fn ruler(self, modern: bool) -> Body {
        if modern {
            self.meta().modern_ruler
        } else {
            self.meta().ruler
        }
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSign(pub String);

impl fmt::Display for UnknownSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown zodiac sign: {}", self.0)
    }
}

impl std::error::Error for UnknownSign {}

impl FromStr for Sign {
    type Err = UnknownSign;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Sign::ALL
            .iter()
            .copied()
            .find(|sign| sign.name() == lower)
            .ok_or_else(|| UnknownSign(s.to_string()))
    }
}

/// Normalize degrees to [0, 360).
pub fn normalize_degrees(value: f64) -> f64 {
    let normalized = value.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if normalized >= 360.0 {
        0.0
    } else {
        normalized
    }
}

/// Sign-level compatibility primitive used by synastry scoring.
///
/// Identical signs score 100, complementary elements (fire/air, earth/water)
/// score 80 and every other pairing scores 50.
///
/// Two different signs of the same element (Aries/Leo) fall in the last
/// group and score 50. Only an exact sign match earns 100.
pub fn sign_compatibility(a: Sign, b: Sign) -> u8 {
    if a == b {
        100
    } else if a.element().is_complementary(b.element()) {
        80
    } else {
        50
    }
}
