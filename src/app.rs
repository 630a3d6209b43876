//! Application orchestration for one portrait edit cycle.

use crate::ai::{GeminiPortraitClient, PortraitEditService};
use crate::data_uri;
use crate::models::{Config, EditRecord, EditedPortrait, UploadedImage};
use crate::{Error, Result};
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use uuid::Uuid;

/// Result of one completed run: the parsed portrait plus where it was saved.
#[derive(Debug)]
pub struct EditOutcome {
    pub portrait: EditedPortrait,
    pub image_path: PathBuf,
    pub record_path: PathBuf,
}

/// Coordinates photo loading, the edit call, and output persistence.
pub struct App {
    editor: Box<dyn PortraitEditService>,
    output_dir: PathBuf,
}

impl App {
    /// Build an app with an injected edit service.
    ///
    /// This is primarily useful for integration tests and local harnesses
    /// that need to inject mocks.
    pub fn with_editor(editor: Box<dyn PortraitEditService>, output_dir: PathBuf) -> Self {
        Self { editor, output_dir }
    }

    /// Construct an app from environment configuration (`Config::from_env`).
    ///
    /// Fails fast when the API key is missing; nothing reads the environment
    /// after this point.
    pub fn new(output_dir: PathBuf) -> Result<Self> {
        let config = Config::from_env()?;

        fs::create_dir_all(&output_dir)?;
        info!("Output directory: {}", output_dir.display());

        let editor = Box::new(GeminiPortraitClient::new(
            config.gemini_api_key,
            config.image_model,
        ));

        Ok(Self::with_editor(editor, output_dir))
    }

    /// Run one edit cycle: load the photo, call the editor, save the result.
    pub async fn run(&self, image_path: &Path, career: Option<&str>) -> Result<EditOutcome> {
        let source = load_image(image_path)?;
        info!(
            "Loaded {} ({}, {} chars encoded)",
            source.path.display(),
            source.mime_type,
            source.data_uri.len()
        );

        match career {
            Some(career) => info!("Editing toward career: {}", career),
            None => info!("No career given; the model will choose one"),
        }

        let portrait = self.editor.edit_portrait(&source, career).await?;
        info!("Edit complete: {}", portrait.title);

        self.save_outcome(&source, career, portrait)
    }

    fn save_outcome(
        &self,
        source: &UploadedImage,
        career: Option<&str>,
        portrait: EditedPortrait,
    ) -> Result<EditOutcome> {
        let (mime_type, bytes) = data_uri::decode(&portrait.image)?;

        // The probe is informational only; whatever the model returned gets
        // saved verbatim.
        match image::load_from_memory(&bytes) {
            Ok(decoded) => info!(
                "Edited image is {}x{} ({}, {} bytes)",
                decoded.width(),
                decoded.height(),
                mime_type,
                bytes.len()
            ),
            Err(e) => warn!("Could not probe edited image ({}): {}", mime_type, e),
        }

        let stem = source
            .path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("portrait");
        let base = format!("{}_{}", stem, Uuid::new_v4());

        let image_path = self
            .output_dir
            .join(format!("{}.{}", base, data_uri::extension_for(&mime_type)));
        fs::write(&image_path, &bytes)?;
        info!("Saved edited image to {}", image_path.display());

        let image_file = image_path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| Error::Generic("Invalid output image path".to_string()))?
            .to_string();

        let record = EditRecord {
            source: source.path.display().to_string(),
            career: career.map(|c| c.to_string()),
            title: portrait.title.clone(),
            description: portrait.description.clone(),
            image_file,
            created_at: Local::now().format("%Y-%m-%dT%H:%M:%S").to_string(),
        };

        let record_path = self.output_dir.join(format!("{}.json", base));
        fs::write(&record_path, serde_json::to_string_pretty(&record)?)?;
        info!("Saved edit record to {}", record_path.display());

        Ok(EditOutcome {
            portrait,
            image_path,
            record_path,
        })
    }
}

/// Load a photo from disk into its encoded transmission form.
fn load_image(path: &Path) -> Result<UploadedImage> {
    let bytes = fs::read(path)?;
    if bytes.is_empty() {
        return Err(Error::Decode(format!(
            "{} is empty, nothing to edit",
            path.display()
        )));
    }

    let mime_type = crate::ai::mime::detect_image_mime(&bytes);
    Ok(UploadedImage {
        path: path.to_path_buf(),
        mime_type: mime_type.to_string(),
        data_uri: data_uri::encode(mime_type, &bytes),
    })
}
