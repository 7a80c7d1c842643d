use chrono::{DateTime, Utc};

use crate::gateway::EMPTY_INPUT_MESSAGE;
use crate::models::{ConversionDirection, ConversionHistoryItem, HistoryList};

/// Fallback when a failed conversion carries no message
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred.";

/// Coarse UI phase, derived from the state record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Error,
    Success,
}

/// A conversion the controller wants performed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionRequest {
    pub id: u64,
    pub text: String,
    pub direction: ConversionDirection,
}

/// Side effects requested by [`reduce`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Convert(ConversionRequest),
}

/// Everything that can change the state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    InsertChar(char),
    InsertText(String),
    DeleteChar,
    SetInput(String),
    Swap,
    Clear,
    Convert,
    ConversionSucceeded { request: ConversionRequest, text: String, completed_at: DateTime<Utc> },
    ConversionFailed { request: ConversionRequest, message: String },
}

/// The whole UI state as one record
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    input: String,
    output: String,
    direction: ConversionDirection,
    loading: bool,
    error: Option<String>,
    succeeded: bool,
    history: HistoryList,
    next_request_id: u64,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn direction(&self) -> ConversionDirection {
        self.direction
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn history(&self) -> &HistoryList {
        &self.history
    }

    pub fn phase(&self) -> Phase {
        if self.loading {
            Phase::Loading
        } else if self.error.is_some() {
            Phase::Error
        } else if self.succeeded {
            Phase::Success
        } else {
            Phase::Idle
        }
    }

    pub fn input_label(&self) -> &'static str {
        self.direction.input_label()
    }

    pub fn output_label(&self) -> &'static str {
        self.direction.output_label()
    }

    pub fn input_placeholder(&self) -> &'static str {
        self.direction.input_placeholder()
    }

    pub fn output_placeholder(&self) -> &'static str {
        self.direction.output_placeholder()
    }

    /// Builder used by callers that start from existing text
    pub fn with_input(mut self, input: impl Into<String>) -> Self {
        self.input = input.into();
        self
    }

    pub fn with_direction(mut self, direction: ConversionDirection) -> Self {
        self.direction = direction;
        self
    }
}

/// Apply `message` to `state`, returning the next state and any effect to run
pub fn reduce(state: &AppState, message: Message) -> (AppState, Option<Effect>) {
    let mut next = state.clone();

    let effect = match message {
        Message::InsertChar(c) => {
            next.input.push(c);
            None
        }
        Message::InsertText(text) => {
            next.input.push_str(&text);
            None
        }
        Message::DeleteChar => {
            next.input.pop();
            None
        }
        Message::SetInput(text) => {
            next.input = text;
            None
        }
        Message::Swap => {
            next.direction = state.direction.opposite();
            std::mem::swap(&mut next.input, &mut next.output);
            next.error = None;
            None
        }
        Message::Clear => {
            next.input.clear();
            next.output.clear();
            next.error = None;
            next.succeeded = false;
            None
        }
        Message::Convert => {
            if state.input.trim().is_empty() {
                next.error = Some(EMPTY_INPUT_MESSAGE.to_string());
                None
            } else {
                next.next_request_id += 1;
                next.loading = true;
                next.error = None;
                Some(Effect::Convert(ConversionRequest {
                    id: next.next_request_id,
                    text: state.input.clone(),
                    direction: state.direction,
                }))
            }
        }
        Message::ConversionSucceeded { request, text, completed_at } => {
            next.history.prepend(ConversionHistoryItem::new(
                &request.text,
                &text,
                request.direction,
                completed_at,
            ));
            next.output = text;
            next.error = None;
            next.loading = false;
            next.succeeded = true;
            None
        }
        Message::ConversionFailed { message, .. } => {
            let message = if message.trim().is_empty() {
                UNEXPECTED_ERROR_MESSAGE.to_string()
            } else {
                message
            };
            next.error = Some(message);
            next.loading = false;
            None
        }
    };

    (next, effect)
}
