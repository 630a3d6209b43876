//! AI service integration for portrait editing
//!
//! Provides the service seam for sending a photo plus a career instruction to
//! a generative image model and getting back the edited portrait.

pub mod gemini;
pub mod mime;
pub mod mock;

pub use gemini::GeminiPortraitClient;
pub use mock::MockPortraitEditClient;

use crate::models::{EditedPortrait, UploadedImage};
use crate::Result;
use async_trait::async_trait;

#[async_trait]
pub trait PortraitEditService: Send + Sync {
    async fn edit_portrait(
        &self,
        source: &UploadedImage,
        career: Option<&str>,
    ) -> Result<EditedPortrait>;
}
