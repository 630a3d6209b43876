//! careershot - edits a portrait photo toward a career with Gemini
//!
//! Sends a photo plus a career instruction to Gemini's image-editing model
//! and turns the reply into an edited portrait with a parsed
//! `{title, description}` rationale.

pub mod ai;
pub mod analysis;
pub mod app;
pub mod data_uri;
pub mod error;
pub mod models;
pub mod prompts;

pub use error::{Error, Result};
