//! config.rs — Scorer configuration (TOML).
//!
//! The only tunable is the path to the optional classifier artifact; rule
//! weights and cut points are fixed by policy. A missing config file means
//! defaults, not an error. Precedence for the artifact path:
//! `ROAD_SCORER_MODEL_PATH` env var → config file → none (rule mode).

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::{env, fs};
use tracing::warn;

pub const DEFAULT_CONFIG_PATH: &str = "config/scorer.toml";
pub const ENV_CONFIG_PATH: &str = "ROAD_SCORER_CONFIG_PATH";
pub const ENV_MODEL_PATH: &str = "ROAD_SCORER_MODEL_PATH";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScorerConfig {
    /// Path to a persisted classifier artifact; `None` keeps rule mode.
    #[serde(default)]
    pub model_path: Option<PathBuf>,
}

impl ScorerConfig {
    /// Load from a TOML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let data = fs::read_to_string(path.as_ref())?;
        let cfg: ScorerConfig = toml::from_str(&data)?;
        Ok(cfg)
    }

    /// Resolve configuration from the environment: config path override,
    /// then model path override. A missing file yields defaults silently;
    /// an unreadable/unparseable file yields defaults with a warning.
    pub fn from_env() -> Self {
        let path = env::var(ENV_CONFIG_PATH)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH));

        let mut cfg = if path.exists() {
            match Self::load_from_file(&path) {
                Ok(cfg) => cfg,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "scorer config unreadable; using defaults");
                    Self::default()
                }
            }
        } else {
            Self::default()
        };

        if let Ok(model) = env::var(ENV_MODEL_PATH) {
            if !model.trim().is_empty() {
                cfg.model_path = Some(PathBuf::from(model));
            }
        }
        cfg
    }
}
