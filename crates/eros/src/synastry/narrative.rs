//! Fixed strength/challenge phrasing for the diagnostic synastry pairs.

use crate::chart::Body;
use crate::synastry::types::Harmony;

/// Tag text for a diagnostic body pair. Neutral pairs and pairs outside the
/// diagnostic set have no tag.
pub fn tag_for(body_a: Body, body_b: Body, harmony: Harmony) -> Option<&'static str> {
    use Body::*;
    use Harmony::*;

    let text = match ((body_a, body_b), harmony) {
        (_, Neutral) => return None,

        ((Sun, Sun), Harmonious) => "Shared sense of purpose",
        ((Sun, Sun), Challenging) => "Competing wills and life directions",

        ((Moon, Moon), Harmonious) => "Emotional rhythms in tune",
        ((Moon, Moon), Challenging) => "Different emotional needs",

        ((Venus, Venus), Harmonious) => "Aligned tastes in love and affection",
        ((Venus, Venus), Challenging) => "Mismatched ways of showing affection",

        ((Mars, Mars), Harmonious) => "Energies that drive each other forward",
        ((Mars, Mars), Challenging) => "Friction when asserting desires",

        ((Ascendant, Ascendant), Harmonious) => "Natural ease on first meeting",
        ((Ascendant, Ascendant), Challenging) => "Clashing first impressions",

        _ => return None,
    };
    Some(text)
}
