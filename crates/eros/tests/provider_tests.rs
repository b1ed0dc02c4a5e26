mod common;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use common::{equal_houses, placements, BASE};
use eros::provider::{resolve_chart, ResolveError};
use eros::{
    BirthData, Body, ChartBuilder, ChartDefect, EngineError, GeoLocation, PositionProvider,
    ResolvedPositions, Sign,
};
use thiserror::Error;

#[derive(Debug, Error)]
#[error("ephemeris offline")]
struct Offline;

enum FakeProvider {
    Fixed(ResolvedPositions),
    Down,
}

#[async_trait]
impl PositionProvider for FakeProvider {
    type Error = Offline;

    async fn resolve(&self, _birth: &BirthData) -> Result<ResolvedPositions, Offline> {
        match self {
            FakeProvider::Fixed(positions) => Ok(positions.clone()),
            FakeProvider::Down => Err(Offline),
        }
    }
}

fn birth() -> BirthData {
    BirthData {
        instant: Utc.with_ymd_and_hms(1990, 4, 5, 14, 30, 0).unwrap(),
        location: GeoLocation {
            lat: 48.8566,
            lon: 2.3522,
        },
    }
}

#[tokio::test]
async fn test_resolves_chart_from_provider() {
    let provider = FakeProvider::Fixed(ResolvedPositions {
        placements: placements(BASE),
        houses: equal_houses(BASE[10]),
    });
    let chart = resolve_chart(&provider, &ChartBuilder::default(), &birth())
        .await
        .unwrap();

    assert_eq!(chart.sun_sign(), Some(Sign::Aries));
    assert_eq!(chart.rising_sign(), Some(Sign::Taurus));
    assert_eq!(chart.houses().len(), 12);
}

#[tokio::test]
async fn test_provider_failure_is_reported() {
    let err = resolve_chart(&FakeProvider::Down, &ChartBuilder::default(), &birth())
        .await
        .unwrap_err();
    assert!(matches!(err, ResolveError::Provider(Offline)));
    assert!(err.to_string().contains("ephemeris offline"));
}

#[tokio::test]
async fn test_malformed_response_is_a_chart_error() {
    let mut short = placements(BASE);
    short.retain(|p| p.body != Body::Pluto);
    let provider = FakeProvider::Fixed(ResolvedPositions {
        placements: short,
        houses: equal_houses(BASE[10]),
    });
    let err = resolve_chart(&provider, &ChartBuilder::default(), &birth())
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ResolveError::Chart(EngineError::MalformedChart(ChartDefect::PlacementCount { .. }))
    ));
}

#[test]
fn test_positions_parse_from_json() {
    let text = r#"{
        "placements": [
            {"body": "sun", "sign": "aries", "longitude": 15.0, "house": 12},
            {"body": "asc", "sign": "taurus", "longitude": 45.0, "house": 1, "isRetrograde": false}
        ],
        "houses": [
            {"house": 1, "sign": "taurus", "longitude": 45.0}
        ]
    }"#;
    let positions = ResolvedPositions::from_json(text).unwrap();
    assert_eq!(positions.placements.len(), 2);
    assert_eq!(positions.placements[1].body, Body::Ascendant);
    assert!(!positions.placements[0].retrograde);
    assert_eq!(positions.houses[0].sign, Sign::Taurus);
}
