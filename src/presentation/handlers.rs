// HTTP request handlers
use crate::application::digitize::{digitize, DigitizedChart};
use crate::domain::annotation::AnnotatedPoint;
use crate::domain::chart::{ChartAnalysis, ChartRequest};
use crate::domain::natural_sort::natural_sort;
use crate::infrastructure::http_response::ApiError;
use crate::presentation::app_state::AppState;
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Body posted by the annotation tool; other fields (legends, colors)
/// are ignored.
#[derive(Debug, Deserialize)]
pub struct ImageData {
    pub operations: Vec<AnnotatedPoint>,
}

#[derive(Debug, Deserialize)]
pub struct SortRequest {
    pub files: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct SortResponse {
    pub sorted_files: Vec<String>,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Convert annotated points into values per series and X tick
pub async fn process_data(Json(image): Json<ImageData>) -> Result<Json<DigitizedChart>, ApiError> {
    let chart = digitize(&image.operations)?;
    tracing::info!(
        "Digitized {} points into {} series",
        image.operations.len(),
        chart.len()
    );
    Ok(Json(chart))
}

/// Order file names naturally ("2" before "10")
pub async fn sort_files(Json(request): Json<SortRequest>) -> Json<SortResponse> {
    Json(SortResponse {
        sorted_files: natural_sort(request.files),
    })
}

/// Forward a chart image to the digitization model
pub async fn process_chart(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ChartRequest>,
) -> Result<Json<ChartAnalysis>, ApiError> {
    let analysis = state.chart_service.analyze(&request).await?;
    Ok(Json(analysis))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::chart_inference::{ChartInference, InferenceError};
    use crate::application::chart_service::ChartService;
    use crate::domain::chart::ChartPrediction;
    use async_trait::async_trait;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use serde_json::json;

    struct StaticInference(ChartPrediction);

    #[async_trait]
    impl ChartInference for StaticInference {
        async fn analyze(&self, _request: &ChartRequest) -> Result<ChartPrediction, InferenceError> {
            Ok(self.0.clone())
        }
    }

    fn image(operations: serde_json::Value) -> Json<ImageData> {
        Json(serde_json::from_value(json!({ "operations": operations, "legends": [] })).unwrap())
    }

    #[tokio::test]
    async fn test_process_data() {
        let body = image(json!([
            {"x": 0, "y": 100, "label": "Ymin=0", "axis": "left", "color": "#ff00ff"},
            {"x": 0, "y": 0, "label": "Ymax=10", "axis": "left", "color": "#00ff00"},
            {"x": 5, "y": 120, "label": "X=A", "axis": "left"},
            {"x": 15, "y": 120, "label": "X=B", "axis": "left"},
            {"x": 4, "y": 50, "label": "S", "axis": "left", "color": "#123456"}
        ]));

        let Json(chart) = process_data(body).await.unwrap();
        assert_eq!(serde_json::to_value(&chart).unwrap(), json!({"S": {"A": "5.000"}}));
    }

    #[tokio::test]
    async fn test_process_data_rejects_bad_input() {
        let body = image(json!([
            {"x": 4, "y": 50, "label": "S"}
        ]));

        let err = process_data(body).await.unwrap_err();
        assert_eq!(err.body().error, "no_x_axis");
        assert_eq!(err.into_response().status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_sort_files() {
        let Json(response) = sort_files(Json(SortRequest {
            files: vec!["p10.png".to_string(), "p9.png".to_string()],
        }))
        .await;
        assert_eq!(response.sorted_files, vec!["p9.png", "p10.png"]);
    }

    #[tokio::test]
    async fn test_process_chart() {
        let state = Arc::new(AppState {
            chart_service: ChartService::new(Arc::new(StaticInference(ChartPrediction {
                data: json!({"S": {"A": 2}}),
                axis: vec!["A".to_string()],
                warning: None,
            }))),
        });
        let request = ChartRequest {
            image_dir: "fig.png".to_string(),
            prompt: "p".to_string(),
            threshold: 0.1,
        };

        let Json(analysis) = process_chart(State(state), Json(request)).await.unwrap();
        assert_eq!(
            serde_json::to_value(&analysis).unwrap(),
            json!({"data": {"S": {"A": 2}}, "axis": ["A"]})
        );
    }
}
