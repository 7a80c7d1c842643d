//! Uni-Bijoy - Convert Bengali text between Unicode and the legacy Bijoy 52 encoding
//!
//! The conversion itself is delegated to a hosted language model (Gemini). This
//! library provides:
//!
//! - A conversion gateway that builds the direction-specific prompt and calls the model
//! - A pure controller (`reduce`) holding the input, output, direction and recent history
//! - A dispatcher running conversions off the UI thread
//! - A terminal UI and a one-shot `convert` command
//!
//! # Example
//!
//! ```no_run
//! use uni_bijoy::{ConversionDirection, ConversionGateway, GeminiClient};
//!
//! let client = GeminiClient::from_env(None)?;
//! let gateway = ConversionGateway::new(client);
//! let bijoy = gateway.convert("আমার সোনার বাংলা", ConversionDirection::UnicodeToBijoy)?;
//! println!("{bijoy}");
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod clipboard;
pub mod controller;
pub mod gateway;
pub mod models;
pub mod tui;
pub mod utils;

// Re-export commonly used types
pub use clipboard::copy_to_clipboard;
pub use controller::{AppState, Dispatcher, Effect, Message, reduce};
pub use gateway::{ConversionGateway, ConvertError, GeminiClient, GenerateError, TextGenerator};
pub use models::{ConversionDirection, ConversionHistoryItem};
