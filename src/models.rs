//! Data models and structures
//!
//! Defines the core data structures for uploaded photos, edited portraits,
//! and application configuration.

use serde::{Deserialize, Serialize};

/// A photo loaded from disk, paired with its encoded transmission form.
///
/// Created once on load and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct UploadedImage {
    pub path: std::path::PathBuf,
    pub mime_type: String,
    pub data_uri: String,
}

/// Output of one successful edit cycle.
///
/// Only ever built from a response that carried both an image part and a
/// text part; there is no partial form.
#[derive(Debug, Clone, PartialEq)]
pub struct EditedPortrait {
    /// Self-contained `data:<mime>;base64,<payload>` string, non-empty.
    pub image: String,
    pub title: String,
    pub description: String,
}

/// `{title, description}` pair parsed out of the model's analysis text.
#[derive(Debug, Clone, PartialEq)]
pub struct CareerAnalysis {
    pub title: String,
    pub description: String,
}

/// JSON sidecar written next to each saved image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditRecord {
    pub source: String,
    pub career: Option<String>,
    pub title: String,
    pub description: String,
    pub image_file: String,
    pub created_at: String,
}

// Configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub image_model: String,
}

const DEFAULT_IMAGE_MODEL: &str = "gemini-2.5-flash-image";

impl Config {
    pub fn from_env() -> crate::Result<Self> {
        dotenvy::dotenv().ok();

        Self::from_values(
            std::env::var("GEMINI_API_KEY").ok(),
            std::env::var("GEMINI_IMAGE_MODEL").ok(),
        )
    }

    /// Build a config from explicit values.
    ///
    /// This is the seam tests use so they never have to mutate the process
    /// environment. A missing or blank API key fails here, at construction,
    /// not at call time.
    pub fn from_values(
        gemini_api_key: Option<String>,
        image_model: Option<String>,
    ) -> crate::Result<Self> {
        let gemini_api_key = match gemini_api_key {
            Some(key) if !key.trim().is_empty() => key,
            _ => {
                return Err(crate::Error::MissingCredential(
                    "GEMINI_API_KEY not set".to_string(),
                ))
            }
        };

        Ok(Self {
            gemini_api_key,
            image_model: image_model.unwrap_or_else(|| DEFAULT_IMAGE_MODEL.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_requires_api_key() {
        let err = Config::from_values(None, None).unwrap_err();
        assert!(matches!(err, crate::Error::MissingCredential(_)));
    }

    #[test]
    fn test_config_rejects_blank_api_key() {
        let err = Config::from_values(Some("   ".to_string()), None).unwrap_err();
        assert!(matches!(err, crate::Error::MissingCredential(_)));
    }

    #[test]
    fn test_config_defaults_image_model() {
        let config = Config::from_values(Some("key".to_string()), None).unwrap();
        assert_eq!(config.image_model, DEFAULT_IMAGE_MODEL);
    }

    #[test]
    fn test_config_honors_explicit_model() {
        let config =
            Config::from_values(Some("key".to_string()), Some("custom-model".to_string())).unwrap();
        assert_eq!(config.image_model, "custom-model");
    }

    #[test]
    fn test_edit_record_round_trips() {
        let record = EditRecord {
            source: "photos/me.jpg".to_string(),
            career: Some("Chef".to_string()),
            title: "Chef".to_string(),
            description: "Added an apron.".to_string(),
            image_file: "me_1234.png".to_string(),
            created_at: "2026-02-07T12:00:00".to_string(),
        };

        let json = serde_json::to_string(&record).unwrap();
        let parsed: EditRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.career.as_deref(), Some("Chef"));
        assert_eq!(parsed.image_file, "me_1234.png");
    }
}
