//! Generation Pipeline (Use Case)
//!
//! validate -> build prompt -> generate -> (summarize) -> persist -> respond
//!
//! Every stage returns a `Result`; the first failure short-circuits the run
//! and is mapped to a status code in [`GenerationPipeline::handle`].

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde_json::json;
use uuid::Uuid;

use penman::domain::services::{build_prompt_for, build_summary_prompt, validate};
use penman::{
    Artifact, ArtifactMetadata, ContentKind, DomainError, InferenceClient, ObjectStore,
    ResponseStyle, StorageKey, StorageLocation, TriggerEvent, TriggerResponse, ValidationRules,
};

use super::ArtifactStore;
use crate::models::{ErrorResponse, GenerationResponse};

/// Result of a run that did not fail
#[derive(Debug, Clone, PartialEq)]
pub enum PipelineOutcome {
    /// Content (and metadata, for kinds that write it) is durable
    Stored {
        location: StorageLocation,
        metadata: Option<ArtifactMetadata>,
    },
    /// The model returned no text; nothing was written
    NoContent,
}

/// Request-to-artifact pipeline shared by every content kind
pub struct GenerationPipeline {
    inference: Arc<dyn InferenceClient>,
    store: ArtifactStore,
}

impl GenerationPipeline {
    pub fn new(inference: Arc<dyn InferenceClient>, objects: Arc<dyn ObjectStore>) -> Self {
        Self {
            inference,
            store: ArtifactStore::new(objects),
        }
    }

    /// Run the pipeline for an event and map the outcome to a response
    pub async fn handle(&self, kind: ContentKind, event: &TriggerEvent) -> TriggerResponse {
        match self.run(kind, event, Utc::now()).await {
            Ok(outcome) => respond(kind, &outcome),
            Err(e) => {
                match &e {
                    DomainError::Validation(v) => {
                        tracing::warn!("Rejected {} request: {}", kind, v)
                    }
                    other => tracing::error!("{} generation failed: {}", kind, other),
                }
                respond_error(kind, &e)
            }
        }
    }

    /// Run the pipeline with an explicit invocation time
    pub async fn run(
        &self,
        kind: ContentKind,
        event: &TriggerEvent,
        now: DateTime<Utc>,
    ) -> Result<PipelineOutcome, DomainError> {
        let request = validate(event, &ValidationRules::for_kind(kind))?;

        let prompt = build_prompt_for(kind, &request);
        let generated = self
            .inference
            .generate(&prompt, &kind.generation_sampling())
            .await?;

        if generated.is_empty() {
            tracing::warn!("No {} was generated for topic {:?}", kind, request.topic);
            return Ok(PipelineOutcome::NoContent);
        }

        let summary = match kind.summary_sampling() {
            Some(sampling) => {
                let result = self
                    .inference
                    .generate(&build_summary_prompt(&generated.text), &sampling)
                    .await?;
                if result.is_empty() {
                    tracing::warn!("Summary for topic {:?} came back empty", request.topic);
                    None
                } else {
                    Some(result.text.trim().to_string())
                }
            }
            None => None,
        };

        let key = StorageKey::generate(kind.storage_prefix(), now, Uuid::new_v4());
        let metadata = kind.writes_metadata().then(|| ArtifactMetadata {
            topic: request.topic.clone(),
            content_kind: kind,
            generated_at: now,
            length: request.length,
            keywords: request.keywords.clone(),
            summary,
            storage_key: key.clone(),
            model_id: self.inference.model_id().to_string(),
        });

        let mut artifact = Artifact::new(key, generated.text);
        if let Some(metadata) = &metadata {
            artifact = artifact.with_metadata(metadata.clone());
        }

        let location = self.store.persist(&artifact).await?;
        tracing::info!("✅ {} for {:?} saved to {}", kind, request.topic, location.link);

        Ok(PipelineOutcome::Stored { location, metadata })
    }
}

fn respond(kind: ContentKind, outcome: &PipelineOutcome) -> TriggerResponse {
    let label = kind.label();
    match (kind.response_style(), outcome) {
        (ResponseStyle::PlainMessage, PipelineOutcome::Stored { .. }) => TriggerResponse::json(
            200,
            json!(format!("{} generation completed successfully.", label)),
        ),
        (ResponseStyle::PlainMessage, PipelineOutcome::NoContent) => TriggerResponse::json(
            200,
            json!(format!("{} generation failed: the model returned no text.", label)),
        ),
        (ResponseStyle::Structured, PipelineOutcome::Stored { location, metadata }) => structured(
            200,
            GenerationResponse {
                message: format!("{} generated and saved successfully.", label),
                s3_link: Some(location.link.clone()),
                metadata: metadata.clone(),
            },
        ),
        (ResponseStyle::Structured, PipelineOutcome::NoContent) => structured(
            200,
            GenerationResponse {
                message: format!("{} generation failed: the model returned no text.", label),
                s3_link: None,
                metadata: None,
            },
        ),
    }
}

fn respond_error(kind: ContentKind, error: &DomainError) -> TriggerResponse {
    let status = error.status_code();
    let message = match error {
        DomainError::Validation(v) => format!("Invalid input data: {}", v),
        _ => format!(
            "An error occurred during {} generation.",
            kind.label().to_lowercase()
        ),
    };

    match kind.response_style() {
        ResponseStyle::PlainMessage => TriggerResponse::json(status, json!(message)),
        ResponseStyle::Structured => structured(
            status,
            ErrorResponse {
                message,
                error: error.code().to_string(),
            },
        ),
    }
}

fn structured<T: serde::Serialize>(status: u16, body: T) -> TriggerResponse {
    match serde_json::to_value(body) {
        Ok(value) => TriggerResponse::json(status, value),
        Err(e) => {
            tracing::error!("Failed to encode response body: {}", e);
            TriggerResponse::json(500, json!({ "message": "Failed to encode response." }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::Value;

    use crate::application::testing::{RecordingStore, Reply, ScriptedInference};

    struct Harness {
        inference: Arc<ScriptedInference>,
        objects: Arc<RecordingStore>,
        pipeline: GenerationPipeline,
    }

    fn harness(replies: Vec<Reply>, objects: RecordingStore) -> Harness {
        let inference = Arc::new(ScriptedInference::new(replies));
        let objects = Arc::new(objects);
        let pipeline = GenerationPipeline::new(inference.clone(), objects.clone());
        Harness {
            inference,
            objects,
            pipeline,
        }
    }

    fn event(payload: Value) -> TriggerEvent {
        TriggerEvent::with_payload(&payload)
    }

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 18, 9, 5, 7).unwrap()
    }

    #[tokio::test]
    async fn test_perseverance_quote_is_stored() {
        let h = harness(vec![Reply::Text("Keep going.")], RecordingStore::new());

        let response = h
            .pipeline
            .handle(ContentKind::Quote, &event(json!({ "topic": "perseverance" })))
            .await;

        assert_eq!(response.status_code, 200);
        assert_eq!(
            response.body_json().unwrap(),
            json!("Quote generation completed successfully.")
        );

        let calls = h.inference.calls();
        assert_eq!(calls.len(), 1);
        assert!(calls[0].0.contains("perseverance"));
        assert_eq!(calls[0].1, ContentKind::Quote.generation_sampling());

        let written = h.objects.objects();
        assert_eq!(written.len(), 1);
        assert_eq!(written[0].text(), "Keep going.");
        assert!(written[0].key.starts_with("quote-output/"));
    }

    #[tokio::test]
    async fn test_missing_topic_is_400_without_side_effects() {
        let h = harness(vec![Reply::Text("unused")], RecordingStore::new());

        let response = h.pipeline.handle(ContentKind::Quote, &event(json!({}))).await;

        assert_eq!(response.status_code, 400);
        let body = response.body_json().unwrap();
        assert!(body.as_str().unwrap().contains("missing_field"));
        assert!(h.inference.calls().is_empty());
        assert_eq!(h.objects.attempts(), 0);
    }

    #[tokio::test]
    async fn test_missing_body_is_400_without_side_effects() {
        let h = harness(vec![Reply::Text("unused")], RecordingStore::new());

        let response = h
            .pipeline
            .handle(ContentKind::SummarizedBlog, &TriggerEvent::default())
            .await;

        assert_eq!(response.status_code, 400);
        let body = response.body_json().unwrap();
        assert_eq!(body["error"], "missing_body");
        assert!(h.inference.calls().is_empty());
        assert_eq!(h.objects.attempts(), 0);
    }

    #[tokio::test]
    async fn test_short_topic_rejected_for_summarized_blog() {
        let h = harness(vec![], RecordingStore::new());

        let response = h
            .pipeline
            .handle(ContentKind::SummarizedBlog, &event(json!({ "topic": "AI" })))
            .await;

        assert_eq!(response.status_code, 400);
        assert_eq!(response.body_json().unwrap()["error"], "field_too_short");
    }

    #[tokio::test]
    async fn test_transport_failure_is_500_without_storage() {
        let h = harness(vec![Reply::Fail("connection reset")], RecordingStore::new());

        let response = h
            .pipeline
            .handle(ContentKind::Blog, &event(json!({ "topic": "resilience" })))
            .await;

        assert_eq!(response.status_code, 500);
        assert_eq!(
            response.body_json().unwrap(),
            json!("An error occurred during blog generation.")
        );
        assert_eq!(h.objects.attempts(), 0);
    }

    #[tokio::test]
    async fn test_empty_generation_skips_storage_and_summary() {
        let h = harness(vec![Reply::Missing], RecordingStore::new());

        let outcome = h
            .pipeline
            .run(
                ContentKind::SummarizedBlog,
                &event(json!({ "topic": "resilience" })),
                fixed_now(),
            )
            .await
            .unwrap();

        assert_eq!(outcome, PipelineOutcome::NoContent);
        assert_eq!(h.inference.calls().len(), 1);
        assert_eq!(h.objects.attempts(), 0);
    }

    #[tokio::test]
    async fn test_empty_generation_response() {
        let h = harness(vec![Reply::Missing], RecordingStore::new());

        let response = h
            .pipeline
            .handle(ContentKind::SummarizedBlog, &event(json!({ "topic": "resilience" })))
            .await;

        assert_eq!(response.status_code, 200);
        let body = response.body_json().unwrap();
        assert!(body["message"].as_str().unwrap().contains("generation failed"));
        assert!(body["s3_link"].is_null());
    }

    #[tokio::test]
    async fn test_summarized_blog_writes_content_and_metadata() {
        let h = harness(
            vec![
                Reply::Text("Tidepools are tiny oceans."),
                Reply::Text(" A short summary. "),
            ],
            RecordingStore::new(),
        );
        let payload = json!({
            "topic": "tidepools",
            "length": 300,
            "keywords": ["anemone", "barnacle"]
        });

        let outcome = h
            .pipeline
            .run(ContentKind::SummarizedBlog, &event(payload), fixed_now())
            .await
            .unwrap();

        let calls = h.inference.calls();
        assert_eq!(calls.len(), 2);
        assert!(calls[0].0.contains("Write a 300 words blog"));
        assert!(calls[0].0.contains("anemone, barnacle"));
        assert!(calls[1].0.contains("Summarize the following blog post"));
        assert!(calls[1].0.contains("Tidepools are tiny oceans."));
        assert_eq!(
            Some(calls[1].1),
            ContentKind::SummarizedBlog.summary_sampling()
        );

        let written = h.objects.objects();
        assert_eq!(written.len(), 2);
        assert!(written[0].key.starts_with("blog-output/20261018_090507_000000-"));
        assert_eq!(written[0].text(), "Tidepools are tiny oceans.");
        assert!(written[1].key.starts_with(written[0].key.trim_end_matches(".txt")));

        let PipelineOutcome::Stored { location, metadata } = outcome else {
            panic!("expected a stored outcome");
        };
        let metadata = metadata.unwrap();
        assert_eq!(metadata.topic, "tidepools");
        assert_eq!(metadata.length, 300);
        assert_eq!(metadata.keywords, vec!["anemone", "barnacle"]);
        assert_eq!(metadata.summary.as_deref(), Some("A short summary."));
        assert_eq!(metadata.generated_at, fixed_now());
        assert_eq!(metadata.storage_key.as_str(), written[0].key);
        assert_eq!(metadata.model_id, "scripted-model");
        assert_eq!(location.content_key, written[0].key);
        assert_eq!(location.metadata_key.as_deref(), Some(written[1].key.as_str()));
    }

    #[tokio::test]
    async fn test_structured_success_body() {
        let h = harness(
            vec![Reply::Text("A post."), Reply::Text("Summary.")],
            RecordingStore::new(),
        );

        let response = h
            .pipeline
            .handle(
                ContentKind::SummarizedBlog,
                &event(json!({ "topic": "tidepools" })),
            )
            .await;

        assert_eq!(response.status_code, 200);
        let body = response.body_json().unwrap();
        assert_eq!(body["message"], "Blog generated and saved successfully.");
        assert!(body["s3_link"]
            .as_str()
            .unwrap()
            .starts_with("s3://test-bucket/blog-output/"));
        assert_eq!(body["metadata"]["summary"], "Summary.");
        assert_eq!(body["metadata"]["content_kind"], "summarized-blog");
    }

    #[tokio::test]
    async fn test_empty_summary_still_stores() {
        let h = harness(
            vec![Reply::Text("A post."), Reply::Missing],
            RecordingStore::new(),
        );

        let outcome = h
            .pipeline
            .run(
                ContentKind::SummarizedBlog,
                &event(json!({ "topic": "tidepools" })),
                fixed_now(),
            )
            .await
            .unwrap();

        let PipelineOutcome::Stored { metadata, .. } = outcome else {
            panic!("expected a stored outcome");
        };
        assert!(metadata.unwrap().summary.is_none());
        assert_eq!(h.objects.objects().len(), 2);
    }

    #[tokio::test]
    async fn test_summary_failure_is_500_without_storage() {
        let h = harness(
            vec![Reply::Text("A post."), Reply::Fail("throttled")],
            RecordingStore::new(),
        );

        let response = h
            .pipeline
            .handle(
                ContentKind::SummarizedBlog,
                &event(json!({ "topic": "tidepools" })),
            )
            .await;

        assert_eq!(response.status_code, 500);
        assert_eq!(response.body_json().unwrap()["error"], "inference_error");
        assert_eq!(h.objects.attempts(), 0);
    }

    #[tokio::test]
    async fn test_storage_failure_is_500() {
        let h = harness(vec![Reply::Text("Keep going.")], RecordingStore::failing_on(1));

        let response = h
            .pipeline
            .handle(ContentKind::Quote, &event(json!({ "topic": "grit" })))
            .await;

        assert_eq!(response.status_code, 500);
        assert_eq!(
            response.body_json().unwrap(),
            json!("An error occurred during quote generation.")
        );
    }

    #[tokio::test]
    async fn test_metadata_failure_is_500() {
        let h = harness(
            vec![Reply::Text("A post."), Reply::Text("Summary.")],
            RecordingStore::failing_on(2),
        );

        let response = h
            .pipeline
            .handle(
                ContentKind::SummarizedBlog,
                &event(json!({ "topic": "tidepools" })),
            )
            .await;

        assert_eq!(response.status_code, 500);
        assert_eq!(response.body_json().unwrap()["error"], "storage_error");
        assert_eq!(h.objects.objects().len(), 1);
    }

    #[tokio::test]
    async fn test_blog_kind_writes_no_metadata() {
        let h = harness(vec![Reply::Text("A post.")], RecordingStore::new());

        let outcome = h
            .pipeline
            .run(ContentKind::Blog, &event(json!({ "topic": "AI" })), fixed_now())
            .await
            .unwrap();

        assert!(matches!(
            outcome,
            PipelineOutcome::Stored { metadata: None, .. }
        ));
        assert_eq!(h.inference.calls().len(), 1);
        assert_eq!(h.objects.objects().len(), 1);
    }
}
