// Port to the external chart digitization model
use crate::domain::chart::{ChartPrediction, ChartRequest};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("no inference endpoints configured")]
    NoEndpoints,

    #[error("request to {endpoint} failed: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{endpoint} answered with status {status}: {body}")]
    Status {
        endpoint: String,
        status: u16,
        body: String,
    },

    #[error("could not decode response from {endpoint}: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("all {attempts} inference attempts failed, last error: {last}")]
    Exhausted {
        attempts: usize,
        #[source]
        last: Box<InferenceError>,
    },
}

#[async_trait]
pub trait ChartInference: Send + Sync {
    /// Ask the model for a pre-annotation of one chart image
    async fn analyze(&self, request: &ChartRequest) -> Result<ChartPrediction, InferenceError>;
}
