//! Scripted test doubles for the domain ports

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::json;

use penman::{
    DomainError, GenerationResult, InferenceClient, ObjectStore, Prompt, SamplingConfig,
};

/// One scripted inference reply
pub enum Reply {
    Text(&'static str),
    /// Response without a `generation` field
    Missing,
    /// Transport-level failure
    Fail(&'static str),
}

/// Inference client that replays scripted replies and records its calls
pub struct ScriptedInference {
    replies: Mutex<VecDeque<Reply>>,
    calls: Mutex<Vec<(Prompt, SamplingConfig)>>,
}

impl ScriptedInference {
    pub fn new(replies: Vec<Reply>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<(Prompt, SamplingConfig)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl InferenceClient for ScriptedInference {
    async fn generate(
        &self,
        prompt: &Prompt,
        sampling: &SamplingConfig,
    ) -> Result<GenerationResult, DomainError> {
        self.calls.lock().unwrap().push((prompt.clone(), *sampling));
        let reply = self.replies.lock().unwrap().pop_front();
        match reply {
            Some(Reply::Text(text)) => Ok(GenerationResult::new(
                text,
                json!({ "generation": text, "stop_reason": "stop" }),
            )),
            Some(Reply::Missing) => Ok(GenerationResult::empty(json!({ "stop_reason": "length" }))),
            Some(Reply::Fail(reason)) => Err(DomainError::Inference(reason.to_string())),
            None => Err(DomainError::Inference("no scripted reply left".to_string())),
        }
    }

    fn model_id(&self) -> &str {
        "scripted-model"
    }
}

/// A single recorded write
#[derive(Debug, Clone)]
pub struct StoredObject {
    pub key: String,
    pub body: Vec<u8>,
    pub content_type: String,
}

impl StoredObject {
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Object store that keeps writes in memory; can fail the n-th write
pub struct RecordingStore {
    objects: Mutex<Vec<StoredObject>>,
    attempts: Mutex<usize>,
    fail_on_attempt: Option<usize>,
}

impl RecordingStore {
    pub fn new() -> Self {
        Self {
            objects: Mutex::new(Vec::new()),
            attempts: Mutex::new(0),
            fail_on_attempt: None,
        }
    }

    /// Fail the write with this 1-based index
    pub fn failing_on(attempt: usize) -> Self {
        Self {
            fail_on_attempt: Some(attempt),
            ..Self::new()
        }
    }

    pub fn objects(&self) -> Vec<StoredObject> {
        self.objects.lock().unwrap().clone()
    }

    pub fn attempts(&self) -> usize {
        *self.attempts.lock().unwrap()
    }
}

#[async_trait]
impl ObjectStore for RecordingStore {
    async fn put(
        &self,
        key: &str,
        body: Vec<u8>,
        content_type: &str,
    ) -> Result<(), DomainError> {
        let attempt = {
            let mut attempts = self.attempts.lock().unwrap();
            *attempts += 1;
            *attempts
        };
        if self.fail_on_attempt == Some(attempt) {
            return Err(DomainError::Storage(format!("access denied for {}", key)));
        }
        self.objects.lock().unwrap().push(StoredObject {
            key: key.to_string(),
            body,
            content_type: content_type.to_string(),
        });
        Ok(())
    }

    fn locate(&self, key: &str) -> String {
        format!("s3://test-bucket/{}", key)
    }
}
