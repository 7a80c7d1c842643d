//! Data models for conversions.
//!
//! - [`ConversionDirection`] - Which encoding is on the input side
//! - [`ConversionHistoryItem`] - A finished conversion, stored as truncated previews
//! - [`HistoryList`] - Bounded most-recent-first list of history items

pub mod direction;
pub mod history;

pub use direction::ConversionDirection;
pub use history::{ConversionHistoryItem, HISTORY_CAPACITY, HistoryList, PREVIEW_CHARS, preview};
