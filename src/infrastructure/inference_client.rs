// HTTP client for the chart digitization model, with failover
use crate::application::chart_inference::{ChartInference, InferenceError};
use crate::domain::chart::{ChartPrediction, ChartRequest};
use crate::infrastructure::config::InferenceSettings;
use crate::infrastructure::endpoint_pool::EndpointPool;
use anyhow::Context;
use async_trait::async_trait;
use std::time::Duration;

#[derive(Debug)]
pub struct HttpInferenceClient {
    client: reqwest::Client,
    pool: EndpointPool,
    max_attempts: usize,
}

impl HttpInferenceClient {
    pub fn new(settings: &InferenceSettings) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .context("Failed to build inference HTTP client")?;

        Ok(Self {
            client,
            pool: EndpointPool::new(settings.endpoints.clone()),
            max_attempts: settings.max_attempts.max(1),
        })
    }

    async fn request_once(
        &self,
        endpoint: &str,
        request: &ChartRequest,
    ) -> Result<ChartPrediction, InferenceError> {
        let response = self
            .client
            .post(endpoint)
            .json(request)
            .send()
            .await
            .map_err(|source| InferenceError::Transport {
                endpoint: endpoint.to_string(),
                source,
            })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_else(|e| {
                tracing::warn!("Failed to read error body from {}: {}", endpoint, e);
                format!("<unreadable body: {}>", e)
            });
            return Err(InferenceError::Status {
                endpoint: endpoint.to_string(),
                status,
                body,
            });
        }

        response
            .json::<ChartPrediction>()
            .await
            .map_err(|source| InferenceError::Decode {
                endpoint: endpoint.to_string(),
                source,
            })
    }
}

#[async_trait]
impl ChartInference for HttpInferenceClient {
    async fn analyze(&self, request: &ChartRequest) -> Result<ChartPrediction, InferenceError> {
        if self.pool.is_empty() {
            return Err(InferenceError::NoEndpoints);
        }

        let mut attempts = 0;
        let mut last_error = None;
        for endpoint in self.pool.rotation().take(self.max_attempts) {
            attempts += 1;
            match self.request_once(endpoint, request).await {
                Ok(prediction) => {
                    tracing::debug!("Inference served by {} after {} attempt(s)", endpoint, attempts);
                    return Ok(prediction);
                }
                Err(e) => {
                    tracing::warn!("Inference attempt {} failed: {}", attempts, e);
                    last_error = Some(e);
                }
            }
        }

        match last_error {
            Some(last) => Err(InferenceError::Exhausted {
                attempts,
                last: Box::new(last),
            }),
            None => Err(InferenceError::NoEndpoints),
        }
    }
}
