use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

use chrono::Utc;
use tracing::{info, warn};

use super::state::{ConversionRequest, Effect, Message};
use crate::gateway::ConversionGateway;

/// Runs effects off the UI thread and queues the resulting messages.
///
/// Every conversion gets its own short-lived worker; nothing is cancelled, so
/// when requests overlap the last one to finish is the last message queued.
pub struct Dispatcher {
    gateway: Arc<ConversionGateway>,
    tx: Sender<Message>,
    rx: Receiver<Message>,
}

impl Dispatcher {
    pub fn new(gateway: ConversionGateway) -> Self {
        let (tx, rx) = mpsc::channel();
        Self { gateway: Arc::new(gateway), tx, rx }
    }

    pub fn dispatch(&self, effect: Effect) {
        match effect {
            Effect::Convert(request) => self.spawn_conversion(request),
        }
    }

    fn spawn_conversion(&self, request: ConversionRequest) {
        info!(id = request.id, direction = %request.direction, "conversion requested");

        let gateway = Arc::clone(&self.gateway);
        let tx = self.tx.clone();
        let job = request.clone();

        let spawned = thread::Builder::new()
            .name(format!("uni-bijoy-convert-{}", request.id))
            .spawn(move || {
                let message = run_conversion(&gateway, job);
                // Receiver gone means the UI already quit
                let _ = tx.send(message);
            });

        if let Err(e) = spawned {
            warn!(id = request.id, error = %e, "failed to spawn conversion worker");
            let _ = self.tx.send(Message::ConversionFailed {
                request,
                message: crate::gateway::CONVERSION_FAILED_MESSAGE.to_string(),
            });
        }
    }

    /// Next finished message, if any, without blocking
    pub fn try_recv(&self) -> Option<Message> {
        self.rx.try_recv().ok()
    }

    /// Wait up to `timeout` for the next finished message
    pub fn recv_timeout(&self, timeout: Duration) -> Option<Message> {
        self.rx.recv_timeout(timeout).ok()
    }
}

fn run_conversion(gateway: &ConversionGateway, request: ConversionRequest) -> Message {
    match gateway.convert(&request.text, request.direction) {
        Ok(text) => {
            info!(id = request.id, "conversion succeeded");
            Message::ConversionSucceeded { request, text, completed_at: Utc::now() }
        }
        Err(e) => Message::ConversionFailed { request, message: e.to_string() },
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::gateway::{
        CONVERSION_FAILED_MESSAGE, GenerateError, GenerationRequest, TextGenerator,
    };
    use crate::models::ConversionDirection;

    struct Echo {
        calls: Arc<AtomicUsize>,
    }

    impl TextGenerator for Echo {
        fn generate(&self, request: &GenerationRequest) -> Result<Option<String>, GenerateError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let text = request.prompt.rsplit("\n\n").next().unwrap_or_default();
            Ok(Some(format!("<{}>", text)))
        }
    }

    struct Broken;

    impl TextGenerator for Broken {
        fn generate(&self, _request: &GenerationRequest) -> Result<Option<String>, GenerateError> {
            Err(GenerateError::MissingApiKey)
        }
    }

    fn request(id: u64, text: &str) -> ConversionRequest {
        ConversionRequest {
            id,
            text: text.to_string(),
            direction: ConversionDirection::UnicodeToBijoy,
        }
    }

    #[test]
    fn test_dispatch_delivers_success() {
        let calls = Arc::new(AtomicUsize::new(0));
        let dispatcher = Dispatcher::new(ConversionGateway::new(Echo { calls: calls.clone() }));

        dispatcher.dispatch(Effect::Convert(request(1, "আমি")));
        let message = dispatcher.recv_timeout(Duration::from_secs(5)).expect("no message");

        match message {
            Message::ConversionSucceeded { request, text, .. } => {
                assert_eq!(request.id, 1);
                assert_eq!(text, "<আমি>");
            }
            other => panic!("unexpected message: {:?}", other),
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_dispatch_delivers_generic_failure() {
        let dispatcher = Dispatcher::new(ConversionGateway::new(Broken));

        dispatcher.dispatch(Effect::Convert(request(7, "আমি")));
        let message = dispatcher.recv_timeout(Duration::from_secs(5)).expect("no message");

        match message {
            Message::ConversionFailed { request, message } => {
                assert_eq!(request.id, 7);
                assert_eq!(message, CONVERSION_FAILED_MESSAGE);
            }
            other => panic!("unexpected message: {:?}", other),
        }
    }

    #[test]
    fn test_try_recv_empty() {
        let dispatcher = Dispatcher::new(ConversionGateway::new(Broken));
        assert!(dispatcher.try_recv().is_none());
    }

    #[test]
    fn test_overlapping_requests_all_resolve() {
        let calls = Arc::new(AtomicUsize::new(0));
        let dispatcher = Dispatcher::new(ConversionGateway::new(Echo { calls: calls.clone() }));

        dispatcher.dispatch(Effect::Convert(request(1, "one")));
        dispatcher.dispatch(Effect::Convert(request(2, "two")));

        let mut ids = vec![];
        for _ in 0..2 {
            match dispatcher.recv_timeout(Duration::from_secs(5)) {
                Some(Message::ConversionSucceeded { request, .. }) => ids.push(request.id),
                other => panic!("unexpected message: {:?}", other),
            }
        }
        ids.sort();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }
}
