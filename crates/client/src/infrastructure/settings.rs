//! Environment-driven configuration.

use std::path::PathBuf;

use thiserror::Error;

use aikata_domain::GeoPosition;

use super::http::DEFAULT_API_BASE_URL;

/// Default directory holding the bundled prefecture backgrounds.
pub const DEFAULT_BACKGROUNDS_DIR: &str = "assets/backgrounds";

#[derive(Debug, Clone, Error)]
pub enum SettingsError {
    #[error("Invalid {name}: {reason}")]
    InvalidVar { name: &'static str, reason: String },

    #[error("COMPANION_LAT and COMPANION_LON must be set together")]
    PartialPosition,
}

/// Runtime configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Companion backend base URL (`API_BASE_URL`).
    pub api_base_url: String,
    /// Street View Static API key (`GOOGLE_API_KEY`); optional.
    pub google_api_key: Option<String>,
    /// Directory holding bundled backgrounds (`BACKGROUNDS_DIR`).
    pub backgrounds_dir: PathBuf,
    /// Fixed viewer position (`COMPANION_LAT` / `COMPANION_LON`); optional.
    pub position: Option<GeoPosition>,
}

impl Settings {
    /// Load settings from the environment, reading `.env` first if present.
    pub fn from_env() -> Result<Self, SettingsError> {
        // A missing .env file is fine; real env vars still apply.
        let _ = dotenvy::dotenv();

        let api_base_url =
            std::env::var("API_BASE_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());
        let google_api_key = std::env::var("GOOGLE_API_KEY")
            .ok()
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty());
        let backgrounds_dir = std::env::var("BACKGROUNDS_DIR")
            .unwrap_or_else(|_| DEFAULT_BACKGROUNDS_DIR.to_string())
            .into();
        let position = Self::position_from_env()?;

        Ok(Self {
            api_base_url,
            google_api_key,
            backgrounds_dir,
            position,
        })
    }

    fn position_from_env() -> Result<Option<GeoPosition>, SettingsError> {
        let lat = std::env::var("COMPANION_LAT").ok();
        let lon = std::env::var("COMPANION_LON").ok();
        match (lat, lon) {
            (None, None) => Ok(None),
            (Some(lat), Some(lon)) => {
                let lat = parse_coordinate("COMPANION_LAT", &lat)?;
                let lon = parse_coordinate("COMPANION_LON", &lon)?;
                GeoPosition::try_new(lat, lon)
                    .map(Some)
                    .map_err(|e| SettingsError::InvalidVar {
                        name: "COMPANION_LAT/COMPANION_LON",
                        reason: e.to_string(),
                    })
            }
            _ => Err(SettingsError::PartialPosition),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            google_api_key: None,
            backgrounds_dir: PathBuf::from(DEFAULT_BACKGROUNDS_DIR),
            position: None,
        }
    }
}

fn parse_coordinate(name: &'static str, raw: &str) -> Result<f64, SettingsError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|e| SettingsError::InvalidVar {
            name,
            reason: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.api_base_url, "http://localhost:5000");
        assert_eq!(settings.google_api_key, None);
        assert_eq!(settings.position, None);
    }

    #[test]
    fn test_coordinate_parsing() {
        assert_eq!(
            parse_coordinate("COMPANION_LAT", " 35.6895 ").expect("valid"),
            35.6895
        );
        assert!(parse_coordinate("COMPANION_LAT", "north").is_err());
    }
}
