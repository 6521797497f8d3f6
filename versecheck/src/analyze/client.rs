use async_trait::async_trait;
use itertools::Itertools;
use lazy_static::lazy_static;
use mockall::automock;
use serde_json::Value;
use tracing::debug;
use url::Url;

use super::error::TransportError;
use crate::models::prelude::{metric_display, AnalysisRequest, ResponseEnvelope};

/// The analysis endpoint, seen from the submission pipeline. Mocked in tests
/// so the pipeline can run without a network.
#[automock]
#[async_trait]
pub trait AnalysisBackend: Send + Sync {
    /// Performs one request/response exchange. Single-shot: no retry happens
    /// here, a re-run is a fresh independent exchange.
    async fn send(&self, request: &AnalysisRequest) -> Result<ResponseEnvelope, TransportError>;
}

pub struct HttpAnalysisClient {
    endpoint: Url,
    http: reqwest::Client,
}

impl HttpAnalysisClient {
    pub fn new(endpoint: Url) -> Self {
        Self {
            endpoint,
            http: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl AnalysisBackend for HttpAnalysisClient {
    async fn send(&self, request: &AnalysisRequest) -> Result<ResponseEnvelope, TransportError> {
        debug!(
            "submitting {} bytes of lyrics to {}",
            request.lyrics.len(),
            self.endpoint
        );

        let response = self
            .http
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await?;

        // The backend reports application errors inside the envelope, with
        // whatever HTTP status it likes. The body decides, not the status.
        let body = response.text().await?;
        decode_envelope(&body)
    }
}

lazy_static! {
    static ref ENVELOPE_VALIDATOR: jsonschema::Validator = {
        let schema = schemars::schema_for!(ResponseEnvelope);
        let schema_json = serde_json::to_value(&schema).expect("envelope schema to serialize");
        jsonschema::validator_for(&schema_json).expect("envelope schema to be valid")
    };
}

/// Decodes a response body into an envelope, treating any shape mismatch as
/// a transport-level failure: non-JSON bodies, schema violations, and metric
/// values that are not numbers or text all land in `UnexpectedShape`.
pub fn decode_envelope(body: &str) -> Result<ResponseEnvelope, TransportError> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| TransportError::UnexpectedShape(format!("body is not JSON: {}", e)))?;

    if let Err(_first_error) = ENVELOPE_VALIDATOR.validate(&value) {
        let messages = ENVELOPE_VALIDATOR
            .iter_errors(&value)
            .map(|e| e.to_string())
            .join("; ");
        return Err(TransportError::UnexpectedShape(messages));
    }

    let envelope: ResponseEnvelope =
        serde_json::from_value(value).map_err(|e| TransportError::UnexpectedShape(e.to_string()))?;

    if let ResponseEnvelope::Success { analysis } = &envelope {
        if let Some(metrics) = &analysis.metrics {
            for (name, metric) in metrics {
                if metric_display(metric).is_none() {
                    return Err(TransportError::UnexpectedShape(format!(
                        "metric '{}' is not a number or text",
                        name
                    )));
                }
            }
        }
    }

    Ok(envelope)
}
