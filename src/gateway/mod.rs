//! Conversion gateway.
//!
//! Turns a `(text, direction)` pair into a request for an external text
//! generation model and hands back the converted text. The model does all the
//! transliteration work; this module only builds the prompt, fixes the sampling
//! options and hides upstream failures behind a single user-facing error.

pub mod error;
pub mod gemini;
pub mod prompt;

use tracing::{debug, error};

pub use error::{CONVERSION_FAILED_MESSAGE, ConvertError, EMPTY_INPUT_MESSAGE, GenerateError};
pub use gemini::{DEFAULT_MODEL, GeminiClient};
pub use prompt::{CONVERSION_TEMPERATURE, SYSTEM_INSTRUCTION, build_prompt};

use crate::models::ConversionDirection;

/// One call to the upstream generation service
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub system_instruction: String,
    pub prompt: String,
    pub temperature: f32,
    /// Ask the model to skip extended reasoning
    pub disable_thinking: bool,
}

/// Opaque text generation service (allows mocking in tests)
pub trait TextGenerator: Send + Sync {
    /// Returns the primary text payload of the response, if any
    fn generate(&self, request: &GenerationRequest) -> Result<Option<String>, GenerateError>;
}

pub struct ConversionGateway {
    generator: Box<dyn TextGenerator>,
}

impl ConversionGateway {
    pub fn new(generator: impl TextGenerator + 'static) -> Self {
        Self { generator: Box::new(generator) }
    }

    /// Convert `text` in `direction`.
    ///
    /// Blank input returns an empty string without contacting the service.
    ///
    /// # Errors
    /// Returns [`ConvertError::Gateway`] on any transport or service failure. The
    /// upstream reason is logged and kept as the error source, never in the message.
    pub fn convert(
        &self,
        text: &str,
        direction: ConversionDirection,
    ) -> Result<String, ConvertError> {
        if text.trim().is_empty() {
            return Ok(String::new());
        }

        let request = GenerationRequest {
            system_instruction: SYSTEM_INSTRUCTION.to_string(),
            prompt: build_prompt(text, direction),
            temperature: CONVERSION_TEMPERATURE,
            disable_thinking: true,
        };

        match self.generator.generate(&request) {
            Ok(response) => {
                let converted = response.map(|t| t.trim().to_string()).unwrap_or_default();
                debug!(
                    %direction,
                    input_chars = text.chars().count(),
                    output_chars = converted.chars().count(),
                    "conversion finished"
                );
                Ok(converted)
            }
            Err(e) => {
                error!(%direction, error = %e, "Conversion failed");
                Err(ConvertError::Gateway(e))
            }
        }
    }
}
