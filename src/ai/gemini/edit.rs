//! Portrait editing via Gemini's `generateContent` endpoint.
//!
//! Two halves: request composition (the photo plus one of two instruction
//! templates, selected by whether a career was named) and response
//! interpretation (extract exactly one image and one text, classify the
//! failure when either is missing, parse the text into title/description).

use super::client::GeminiHttpClient;
use super::types::{
    Candidate, Content, GenerateContentResponse, InlineData, Part, FINISH_REASON_SAFETY,
    FINISH_REASON_STOP,
};
use crate::ai::PortraitEditService;
use crate::analysis::parse_analysis_text;
use crate::models::{EditedPortrait, UploadedImage};
use crate::{data_uri, prompts, Error, Result};
use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;

#[derive(Debug, Serialize)]
pub struct EditRequest {
    pub contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    pub generation_config: EditGenerationConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditGenerationConfig {
    pub response_modalities: Vec<String>,
}

/// Build the outbound edit request: the photo first, then the instruction.
///
/// The image part carries the data-URI payload with its `data:...,` prefix
/// stripped and the detected mime type unchanged. The instruction is the
/// named-career template when `career` is given, otherwise the choose-a-career
/// template; both demand that the reply contain an image and a text.
pub fn build_edit_request(source: &UploadedImage, career: Option<&str>) -> EditRequest {
    let instruction = match career {
        Some(career) => prompts::render(prompts::EDIT_NAMED_CAREER, &[("career", career)]),
        None => prompts::EDIT_AUTO_CAREER.to_string(),
    };

    EditRequest {
        contents: vec![Content {
            role: Some("user".to_string()),
            parts: vec![
                Part::InlineData {
                    inline_data: InlineData {
                        mime_type: source.mime_type.clone(),
                        data: data_uri::payload(&source.data_uri).to_string(),
                    },
                },
                Part::Text { text: instruction },
            ],
        }],
        generation_config: EditGenerationConfig {
            response_modalities: vec!["IMAGE".to_string(), "TEXT".to_string()],
        },
    }
}

/// Interpret a `generateContent` response into an [`EditedPortrait`].
///
/// Only the first candidate is consumed. The last image part and the last
/// text part win when a candidate carries several of either kind. A response
/// missing either is classified into one of the failure variants; safety
/// signals take precedence over generic incompleteness.
pub fn interpret_response(
    response: GenerateContentResponse,
    career: Option<&str>,
) -> Result<EditedPortrait> {
    let Some(candidate) = response.candidates.into_iter().next() else {
        let message = response
            .prompt_feedback
            .and_then(|feedback| feedback.block_reason_message.or(feedback.block_reason))
            .map(|reason| format!("Request was blocked: {}", reason))
            .unwrap_or_else(|| "Request was blocked by a safety filter".to_string());
        return Err(Error::BlockedRequest(message));
    };

    let mut image = None;
    let mut text = None;
    if let Some(content) = &candidate.content {
        for part in &content.parts {
            match part {
                Part::InlineData { inline_data } => {
                    image = Some(data_uri::encode_b64(
                        &inline_data.mime_type,
                        &inline_data.data,
                    ));
                }
                Part::Text { text: t } => text = Some(t.clone()),
            }
        }
    }

    match (image, text) {
        (Some(image), Some(text)) => {
            let analysis = parse_analysis_text(&text, career);
            Ok(EditedPortrait {
                image,
                title: analysis.title,
                description: analysis.description,
            })
        }
        (image, text) => Err(classify_missing_parts(
            &candidate,
            image.is_some(),
            text.is_some(),
        )),
    }
}

/// Classify why a candidate lacks an image and/or a text part.
///
/// Order is fixed: safety finish reason, then blocked safety rating, then any
/// other non-STOP finish reason, then plain incompleteness.
fn classify_missing_parts(candidate: &Candidate, has_image: bool, has_text: bool) -> Error {
    if candidate.finish_reason.as_deref() == Some(FINISH_REASON_SAFETY) {
        return Error::SafetyBlocked("Generation was stopped by a safety filter".to_string());
    }

    if let Some(rating) = candidate
        .safety_ratings
        .iter()
        .find(|rating| rating.blocked == Some(true))
    {
        return Error::SafetyBlocked(format!(
            "Content was blocked for category {}",
            rating.category
        ));
    }

    if let Some(reason) = candidate
        .finish_reason
        .as_deref()
        .filter(|reason| *reason != FINISH_REASON_STOP)
    {
        return Error::AbnormalStop(format!("Generation ended with reason {}", reason));
    }

    let message = match (has_image, has_text) {
        (true, false) => "Response contained an image but no description text",
        (false, true) => "Response contained description text but no image",
        _ => "Response contained neither an image nor description text",
    };
    Error::IncompletePayload(message.to_string())
}

pub struct GeminiPortraitClient {
    http: GeminiHttpClient,
}

impl GeminiPortraitClient {
    pub fn new(api_key: String, model: String) -> Self {
        Self::new_with_client(api_key, model, reqwest::Client::new())
    }

    pub fn new_with_client(api_key: String, model: String, client: reqwest::Client) -> Self {
        Self {
            // Image editing is slow; allow a generous per-request timeout.
            http: GeminiHttpClient::new_with_client(
                api_key,
                model,
                Duration::from_secs(120),
                client,
            ),
        }
    }

    #[cfg(test)]
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.http = self.http.with_base_url(base_url);
        self
    }
}

#[async_trait]
impl PortraitEditService for GeminiPortraitClient {
    async fn edit_portrait(
        &self,
        source: &UploadedImage,
        career: Option<&str>,
    ) -> Result<EditedPortrait> {
        let request = build_edit_request(source, career);

        tracing::debug!(
            "Sending edit request to {} (career: {})",
            self.http.model(),
            career.unwrap_or("<auto>")
        );

        let response: GenerateContentResponse = self.http.generate_content(&request).await?;
        interpret_response(response, career)
    }
}
