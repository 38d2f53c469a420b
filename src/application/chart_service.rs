// Chart service - Use case for model pre-annotation
use crate::application::chart_inference::{ChartInference, InferenceError};
use crate::domain::chart::{ChartAnalysis, ChartRequest};
use std::sync::Arc;

#[derive(Clone)]
pub struct ChartService {
    inference: Arc<dyn ChartInference>,
}

impl ChartService {
    pub fn new(inference: Arc<dyn ChartInference>) -> Self {
        Self { inference }
    }

    pub async fn analyze(&self, request: &ChartRequest) -> Result<ChartAnalysis, InferenceError> {
        let prediction = self.inference.analyze(request).await?;

        if !prediction.is_reliable() {
            tracing::info!(
                "Model flagged its answer as unreliable: {}",
                prediction.warning.as_deref().unwrap_or_default()
            );
        }

        Ok(ChartAnalysis::from(prediction))
    }
}
