//! Bedrock Runtime Inference Client
//!
//! Calls `invoke_model` with the Llama-style body
//! `{prompt, max_gen_len, temperature, top_p}` and reads `generation` back.

use async_trait::async_trait;
use reqwest::{Method, Url};
use serde::Serialize;
use serde_json::Value;

use penman::{DomainError, GenerationResult, InferenceClient, Prompt, SamplingConfig};

use super::aws::sigv4::encode_component;
use super::aws::AwsTransport;

const SERVICE: &str = "bedrock";

#[derive(Debug, Serialize)]
struct InvokeRequest<'a> {
    prompt: &'a str,
    max_gen_len: u32,
    temperature: f32,
    top_p: f32,
}

/// Bedrock Runtime implementation of InferenceClient
pub struct BedrockInferenceClient {
    transport: AwsTransport,
    endpoint: String,
    model_id: String,
}

impl BedrockInferenceClient {
    pub fn new(
        transport: AwsTransport,
        endpoint: impl Into<String>,
        model_id: impl Into<String>,
    ) -> Self {
        Self {
            transport,
            endpoint: endpoint.into(),
            model_id: model_id.into(),
        }
    }

    fn invoke_url(&self) -> Result<Url, DomainError> {
        let raw = format!(
            "{}/model/{}/invoke",
            self.endpoint.trim_end_matches('/'),
            encode_component(&self.model_id)
        );
        Url::parse(&raw).map_err(|e| DomainError::Internal(format!("Invalid Bedrock URL {raw}: {e}")))
    }
}

/// Pull the generated text out of a response body
///
/// A missing or non-string `generation` field is an empty result; a body
/// that is not JSON at all is an error.
fn extract_generation(raw: &str) -> Result<GenerationResult, DomainError> {
    let value: Value = serde_json::from_str(raw)
        .map_err(|e| DomainError::Inference(format!("Malformed model response: {e}")))?;

    let text = value
        .get("generation")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    Ok(GenerationResult::new(text, value))
}

#[async_trait]
impl InferenceClient for BedrockInferenceClient {
    async fn generate(
        &self,
        prompt: &Prompt,
        sampling: &SamplingConfig,
    ) -> Result<GenerationResult, DomainError> {
        let request = InvokeRequest {
            prompt: prompt.as_str(),
            max_gen_len: sampling.max_output_tokens,
            temperature: sampling.temperature,
            top_p: sampling.top_p,
        };
        let body = serde_json::to_vec(&request)
            .map_err(|e| DomainError::Internal(format!("Failed to serialize request: {e}")))?;
        let url = self.invoke_url()?;

        let response = self
            .transport
            .send(Method::POST, &url, SERVICE, "application/json", &body)
            .await
            .map_err(|e| {
                tracing::error!("Bedrock call to {} failed: {}", self.model_id, e);
                DomainError::Inference(e.to_string())
            })?;

        if !response.status.is_success() {
            tracing::error!(
                "Bedrock returned {} for {}: {}",
                response.status,
                self.model_id,
                response.body
            );
            return Err(DomainError::Inference(format!(
                "Bedrock returned {}: {}",
                response.status, response.body
            )));
        }

        let result = extract_generation(&response.body)?;
        if result.is_empty() {
            tracing::warn!("Bedrock response for {} carried no generation", self.model_id);
        }

        Ok(result)
    }

    fn model_id(&self) -> &str {
        &self.model_id
    }
}
