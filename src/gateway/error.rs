use thiserror::Error;

/// Message shown when the user asks to convert blank input
pub const EMPTY_INPUT_MESSAGE: &str = "Please enter some text to convert.";
/// Message shown for any upstream failure; the real cause only goes to the log
pub const CONVERSION_FAILED_MESSAGE: &str =
    "Failed to convert text. Please check your connection or try again.";

/// Failures reported by a [`TextGenerator`](super::TextGenerator)
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("GEMINI_API_KEY environment variable is not set")]
    MissingApiKey,

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Gemini API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Failed to parse response JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Failures surfaced to the user by a conversion
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("{}", EMPTY_INPUT_MESSAGE)]
    EmptyInput,

    #[error("{}", CONVERSION_FAILED_MESSAGE)]
    Gateway(#[source] GenerateError),
}
