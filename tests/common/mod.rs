//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use uni_bijoy::gateway::{GenerateError, GenerationRequest, TextGenerator};

/// Scripted reply for one generate call
pub enum Reply {
    Text(&'static str),
    Empty,
    Fail,
}

/// Generator replaying scripted replies in order and recording every request
#[derive(Clone, Default)]
pub struct ScriptedGenerator {
    replies: Arc<Mutex<VecDeque<Reply>>>,
    requests: Arc<Mutex<Vec<GenerationRequest>>>,
}

impl ScriptedGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, reply: Reply) -> Self {
        self.replies.lock().unwrap().push_back(reply);
        self
    }

    /// Requests seen so far
    pub fn requests(&self) -> Vec<GenerationRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

impl TextGenerator for ScriptedGenerator {
    fn generate(&self, request: &GenerationRequest) -> Result<Option<String>, GenerateError> {
        self.requests.lock().unwrap().push(request.clone());
        match self.replies.lock().unwrap().pop_front() {
            Some(Reply::Text(text)) => Ok(Some(text.to_string())),
            Some(Reply::Empty) | None => Ok(None),
            Some(Reply::Fail) => {
                Err(GenerateError::Api { status: 503, message: "model overloaded".to_string() })
            }
        }
    }
}
