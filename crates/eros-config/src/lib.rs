use eros::{
    AspectDetector, AspectKind, AspectScores, ChartBuilder, EngineError, OrbTable, ScoringConfig,
    ScoringWeights, SynastryScorer,
};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

/// Environment variable naming an explicit engine config file.
pub const CONFIG_ENV: &str = "EROS_CONFIG";

const SEARCH_PATHS: [&str; 2] = ["configs/eros.toml", "../../configs/eros.toml"];

/// Validated engine settings. Hands out engine components built from them.
#[derive(Debug, Clone, Copy, Default)]
pub struct EngineConfig {
    pub orbs: OrbTable,
    pub scoring: ScoringConfig,
}

impl EngineConfig {
    pub fn detector(&self) -> AspectDetector {
        AspectDetector::new(self.orbs)
    }

    pub fn chart_builder(&self) -> ChartBuilder {
        ChartBuilder::new(self.detector())
    }

    pub fn scorer(&self) -> SynastryScorer {
        SynastryScorer::new(self.detector(), self.scoring)
    }
}

#[derive(Debug, Clone, Deserialize)]
struct OrbsToml {
    conjunction: Option<f64>,
    sextile: Option<f64>,
    square: Option<f64>,
    trine: Option<f64>,
    opposition: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
struct WeightsToml {
    #[serde(alias = "elementalWeight")]
    elemental: Option<f64>,
    #[serde(alias = "sunMoonWeight")]
    sun_moon: Option<f64>,
    #[serde(alias = "venusWeight")]
    venus: Option<f64>,
    #[serde(alias = "marsWeight")]
    mars: Option<f64>,
    #[serde(alias = "ascendantWeight")]
    ascendant: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
struct AspectScoresToml {
    harmonious: Option<f64>,
    challenging: Option<f64>,
    none: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ScoringToml {
    #[serde(default)]
    weights: Option<WeightsToml>,
    #[serde(default)]
    aspect_scores: Option<AspectScoresToml>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct RootConfigToml {
    #[serde(default)]
    orbs: Option<OrbsToml>,
    #[serde(default)]
    scoring: Option<ScoringToml>,
}

fn required(section: &str, key: &str, value: Option<f64>) -> Result<f64, EngineError> {
    value.ok_or_else(|| EngineError::InvalidConfiguration {
        reason: format!("[{}] is missing `{}`", section, key),
    })
}

impl OrbsToml {
    fn into_table(self) -> Result<OrbTable, EngineError> {
        let mut entries = Vec::with_capacity(AspectKind::ALL.len());
        for (kind, value) in [
            (AspectKind::Conjunction, self.conjunction),
            (AspectKind::Sextile, self.sextile),
            (AspectKind::Square, self.square),
            (AspectKind::Trine, self.trine),
            (AspectKind::Opposition, self.opposition),
        ] {
            entries.push((kind, required("orbs", kind.name(), value)?));
        }
        OrbTable::new(&entries)
    }
}

impl WeightsToml {
    fn into_weights(self) -> Result<ScoringWeights, EngineError> {
        const SECTION: &str = "scoring.weights";
        Ok(ScoringWeights {
            elemental: required(SECTION, "elemental", self.elemental)?,
            sun_moon: required(SECTION, "sun_moon", self.sun_moon)?,
            venus: required(SECTION, "venus", self.venus)?,
            mars: required(SECTION, "mars", self.mars)?,
            ascendant: required(SECTION, "ascendant", self.ascendant)?,
        })
    }
}

impl AspectScoresToml {
    fn into_scores(self) -> Result<AspectScores, EngineError> {
        const SECTION: &str = "scoring.aspect_scores";
        Ok(AspectScores {
            harmonious: required(SECTION, "harmonious", self.harmonious)?,
            challenging: required(SECTION, "challenging", self.challenging)?,
            none: required(SECTION, "none", self.none)?,
        })
    }
}

/// Read the engine config text.
///
/// `EROS_CONFIG` wins when set and must point at a readable file. Otherwise
/// the common relative `configs/eros.toml` locations are tried; `Ok(None)`
/// means no file was found.
pub fn read_engine_toml_text() -> anyhow::Result<Option<String>> {
    if let Ok(path) = std::env::var(CONFIG_ENV) {
        let path = PathBuf::from(path);
        let text = fs::read_to_string(&path).map_err(|e| {
            anyhow::anyhow!("Could not read {} from {}: {e}", CONFIG_ENV, path.display())
        })?;
        log::info!("Loaded engine config from {}", path.display());
        return Ok(Some(text));
    }
    for p in &SEARCH_PATHS {
        if let Ok(text) = fs::read_to_string(p) {
            log::info!("Loaded engine config from {}", p);
            return Ok(Some(text));
        }
    }
    Ok(None)
}

/// Parse and validate engine config text. Absent sections keep the engine
/// defaults; a present section must be complete.
pub fn parse_engine_config(text: &str) -> anyhow::Result<EngineConfig> {
    let root: RootConfigToml = toml::from_str(text)
        .map_err(|e| anyhow::anyhow!("Failed to parse eros.toml: {e}"))?;

    let orbs = match root.orbs {
        Some(orbs) => orbs
            .into_table()
            .map_err(|e| anyhow::Error::new(e).context("invalid [orbs] section"))?,
        None => OrbTable::default(),
    };

    let scoring = root.scoring.unwrap_or_default();
    let weights = match scoring.weights {
        Some(weights) => weights
            .into_weights()
            .map_err(|e| anyhow::Error::new(e).context("invalid [scoring.weights] section"))?,
        None => ScoringWeights::default(),
    };
    let aspect_scores = match scoring.aspect_scores {
        Some(scores) => scores.into_scores().map_err(|e| {
            anyhow::Error::new(e).context("invalid [scoring.aspect_scores] section")
        })?,
        None => AspectScores::default(),
    };
    let scoring = ScoringConfig::new(weights, aspect_scores)
        .map_err(|e| anyhow::Error::new(e).context("invalid [scoring] section"))?;

    Ok(EngineConfig { orbs, scoring })
}

/// Load the engine config from disk, falling back to defaults when no file
/// is found.
pub fn load_engine_config() -> anyhow::Result<EngineConfig> {
    match read_engine_toml_text()? {
        Some(text) => parse_engine_config(&text),
        None => {
            log::warn!(
                "No engine config found ({} unset, tried {:?}); using defaults",
                CONFIG_ENV,
                SEARCH_PATHS
            );
            Ok(EngineConfig::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine_error(err: &anyhow::Error) -> &EngineError {
        err.downcast_ref::<EngineError>()
            .expect("error should carry an EngineError")
    }

    #[test]
    fn test_empty_text_uses_defaults() {
        let config = parse_engine_config("").unwrap();
        assert_eq!(config.orbs, OrbTable::default());
        assert_eq!(config.scoring.weights(), &ScoringWeights::default());
        assert_eq!(config.scoring.aspect_scores(), &AspectScores::default());
    }

    #[test]
    fn test_full_config() {
        let text = r#"
            [orbs]
            conjunction = 10.0
            sextile = 4.0
            square = 7.0
            trine = 7.0
            opposition = 9.0

            [scoring.weights]
            elemental = 0.3
            sun_moon = 0.25
            venus = 0.2
            mars = 0.15
            ascendant = 0.1

            [scoring.aspect_scores]
            harmonious = 100.0
            challenging = 30.0
            none = 60.0
        "#;
        let config = parse_engine_config(text).unwrap();
        assert_eq!(config.orbs.orb(AspectKind::Conjunction), 10.0);
        assert_eq!(config.orbs.orb(AspectKind::Sextile), 4.0);
        assert_eq!(config.scoring.weights().elemental, 0.3);
        assert_eq!(config.scoring.aspect_scores().challenging, 30.0);

        let detector = config.detector();
        let found = detector.classify(0.0, 9.5).unwrap();
        assert_eq!(found.kind, AspectKind::Conjunction);
        assert!(config.scorer().config().weights().venus == 0.2);
    }

    #[test]
    fn test_camel_case_weight_names() {
        let text = r#"
            [scoring.weights]
            elementalWeight = 0.2
            sunMoonWeight = 0.25
            venusWeight = 0.25
            marsWeight = 0.15
            ascendantWeight = 0.15
        "#;
        let config = parse_engine_config(text).unwrap();
        assert_eq!(config.scoring.weights(), &ScoringWeights::default());
    }

    #[test]
    fn test_missing_orb_is_invalid_configuration() {
        let text = r#"
            [orbs]
            conjunction = 8.0
            sextile = 6.0
            square = 8.0
            trine = 8.0
        "#;
        let err = parse_engine_config(text).unwrap_err();
        assert!(matches!(
            engine_error(&err),
            EngineError::InvalidConfiguration { .. }
        ));
        assert!(format!("{err:#}").contains("opposition"));
    }

    #[test]
    fn test_weights_off_by_five_percent_rejected() {
        let text = r#"
            [scoring.weights]
            elemental = 0.3
            sun_moon = 0.25
            venus = 0.2
            mars = 0.15
            ascendant = 0.05
        "#;
        let err = parse_engine_config(text).unwrap_err();
        assert!(matches!(
            engine_error(&err),
            EngineError::InvalidConfiguration { .. }
        ));
    }

    #[test]
    fn test_negative_orb_rejected() {
        let text = r#"
            [orbs]
            conjunction = -1.0
            sextile = 6.0
            square = 8.0
            trine = 8.0
            opposition = 8.0
        "#;
        assert!(parse_engine_config(text).is_err());
    }

    // One test covers every discovery case since they share the process
    // environment.
    #[test]
    fn test_config_discovery() {
        let dir = tempfile::tempdir().unwrap();

        std::env::set_var(CONFIG_ENV, dir.path().join("missing.toml"));
        assert!(read_engine_toml_text().is_err());
        assert!(load_engine_config().is_err());

        let path = dir.path().join("eros.toml");
        fs::write(
            &path,
            "[scoring.weights]\nelemental = 0.3\nsun_moon = 0.25\nvenus = 0.2\nmars = 0.15\nascendant = 0.1\n",
        )
        .unwrap();
        std::env::set_var(CONFIG_ENV, &path);
        let config = load_engine_config().unwrap();
        assert_eq!(config.scoring.weights().elemental, 0.3);
        assert_eq!(config.orbs, OrbTable::default());

        std::env::remove_var(CONFIG_ENV);
        // Falls back to the workspace sample, or to defaults when none is found.
        let config = load_engine_config().unwrap();
        assert_eq!(config.scoring.weights(), &ScoringWeights::default());
    }

    #[test]
    fn test_bad_toml_is_an_error() {
        assert!(parse_engine_config("[orbs\nconjunction = ").is_err());
    }
}
