pub mod client;
pub mod edit;
pub mod types;

pub use edit::GeminiPortraitClient;
