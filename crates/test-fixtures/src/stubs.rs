use std::collections::VecDeque;
use std::sync::Mutex;

use beacon_core::errors::{EmbeddingError, FetchError, GenerationError, SearchError};
use beacon_core::models::{QueryParams, TableDocument};
use beacon_core::traits::{
    EmbeddingProvider, HybridSearch, ModelTier, SearchRequest, StatisticsFetcher, TextGenerator,
};

/// Generator stub that replays a queue of scripted replies, recording every
/// prompt it sees. When the queue is empty the default reply is returned.
pub struct ScriptedGenerator {
    replies: Mutex<VecDeque<Result<String, GenerationError>>>,
    default_reply: String,
    pub prompts: Mutex<Vec<(String, ModelTier)>>,
}

impl ScriptedGenerator {
    pub fn new(default_reply: impl Into<String>) -> Self {
        Self {
            replies: Mutex::new(VecDeque::new()),
            default_reply: default_reply.into(),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn push_reply(&self, reply: impl Into<String>) {
        self.replies
            .lock()
            .unwrap()
            .push_back(Ok(reply.into()));
    }

    pub fn push_error(&self, error: GenerationError) {
        self.replies.lock().unwrap().push_back(Err(error));
    }

    pub fn prompt_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

impl TextGenerator for ScriptedGenerator {
    fn generate(&self, prompt: &str, tier: ModelTier) -> Result<String, GenerationError> {
        self.prompts
            .lock()
            .unwrap()
            .push((prompt.to_string(), tier));
        match self.replies.lock().unwrap().pop_front() {
            Some(reply) => reply,
            None => Ok(self.default_reply.clone()),
        }
    }
}

/// Search stub replaying a queue of scripted result batches, recording the
/// requests. An empty queue yields empty results.
pub struct ScriptedSearch {
    batches: Mutex<VecDeque<Result<Vec<TableDocument>, SearchError>>>,
    pub requests: Mutex<Vec<SearchRequest>>,
}

impl ScriptedSearch {
    pub fn new() -> Self {
        Self {
            batches: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn push_batch(&self, batch: Vec<TableDocument>) {
        self.batches.lock().unwrap().push_back(Ok(batch));
    }

    pub fn push_error(&self, error: SearchError) {
        self.batches.lock().unwrap().push_back(Err(error));
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

impl Default for ScriptedSearch {
    fn default() -> Self {
        Self::new()
    }
}

impl HybridSearch for ScriptedSearch {
    fn search(&self, request: &SearchRequest) -> Result<Vec<TableDocument>, SearchError> {
        self.requests.lock().unwrap().push(request.clone());
        match self.batches.lock().unwrap().pop_front() {
            Some(batch) => batch,
            None => Ok(Vec::new()),
        }
    }
}

/// Embedder returning a constant vector of the configured dimensionality.
pub struct StubEmbedder {
    pub dims: usize,
}

impl StubEmbedder {
    pub fn new(dims: usize) -> Self {
        Self { dims }
    }
}

impl EmbeddingProvider for StubEmbedder {
    fn embed(&self, _text: &str) -> Result<Vec<f32>, EmbeddingError> {
        Ok(vec![0.0; self.dims])
    }

    fn dimensions(&self) -> usize {
        self.dims
    }
}

/// Fetcher replaying scripted outcomes, recording the params of each
/// attempt. An empty queue yields an empty row set.
pub struct ScriptedFetcher {
    outcomes: Mutex<VecDeque<Result<Vec<serde_json::Value>, FetchError>>>,
    pub attempts: Mutex<Vec<QueryParams>>,
}

impl ScriptedFetcher {
    pub fn new() -> Self {
        Self {
            outcomes: Mutex::new(VecDeque::new()),
            attempts: Mutex::new(Vec::new()),
        }
    }

    pub fn push_rows(&self, rows: Vec<serde_json::Value>) {
        self.outcomes.lock().unwrap().push_back(Ok(rows));
    }

    pub fn push_error(&self, error: FetchError) {
        self.outcomes.lock().unwrap().push_back(Err(error));
    }

    pub fn attempt_count(&self) -> usize {
        self.attempts.lock().unwrap().len()
    }
}

impl Default for ScriptedFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl StatisticsFetcher for ScriptedFetcher {
    fn fetch(&self, params: &QueryParams) -> Result<Vec<serde_json::Value>, FetchError> {
        self.attempts.lock().unwrap().push(params.clone());
        match self.outcomes.lock().unwrap().pop_front() {
            Some(outcome) => outcome,
            None => Ok(Vec::new()),
        }
    }
}
