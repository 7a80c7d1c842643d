//! Application controller.
//!
//! All UI state lives in one [`AppState`] record. [`reduce`] is a pure function
//! from `(state, message)` to `(state, effect)`; the only effect is a conversion
//! request, which the [`Dispatcher`] runs on a worker thread and answers with
//! a `ConversionSucceeded` or `ConversionFailed` message.

pub mod dispatcher;
pub mod state;

pub use dispatcher::Dispatcher;
pub use state::{
    AppState, ConversionRequest, Effect, Message, Phase, UNEXPECTED_ERROR_MESSAGE, reduce,
};
