use async_trait::async_trait;
use rocket::local::asynchronous::Client;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use transparency_checker::core::{BackendError, CompletionRequest, InferenceBackend};
use transparency_checker::{build_rocket, TransparencyAnalyzer};

/// In-process backend that answers every call with the same scripted reply
pub struct ScriptedBackend {
    reply: Result<String, BackendError>,
    calls: AtomicUsize,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl ScriptedBackend {
    pub fn replying(text: &str) -> Arc<Self> {
        Self::with_reply(Ok(text.to_string()))
    }

    pub fn failing(err: BackendError) -> Arc<Self> {
        Self::with_reply(Err(err))
    }

    fn with_reply(reply: Result<String, BackendError>) -> Arc<Self> {
        Arc::new(Self {
            reply,
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<CompletionRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl InferenceBackend for ScriptedBackend {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, BackendError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request.clone());
        self.reply.clone()
    }
}

pub async fn client_with(backend: Arc<dyn InferenceBackend>) -> Client {
    Client::tracked(build_rocket(TransparencyAnalyzer::new(backend)))
        .await
        .expect("valid rocket instance")
}
