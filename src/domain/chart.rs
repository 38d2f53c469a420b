// Chart pre-annotation requests and model predictions
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// What the annotation tool sends to get a model pre-annotation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartRequest {
    pub image_dir: String,
    pub prompt: String,
    // The tool spells this field "threthold"
    #[serde(rename = "threthold", alias = "threshold")]
    pub threshold: f64,
}

/// Raw answer from the digitization model
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChartPrediction {
    pub data: Value,
    #[serde(default)]
    pub axis: Vec<String>,
    #[serde(default)]
    pub warning: Option<String>,
}

impl ChartPrediction {
    pub fn is_reliable(&self) -> bool {
        self.warning
            .as_deref()
            .map(|w| w.trim().is_empty())
            .unwrap_or(true)
    }
}

/// Pre-annotation returned to the tool; `data` is null when the model
/// flagged its own answer as unreliable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartAnalysis {
    pub data: Option<Value>,
    pub axis: Vec<String>,
}

impl From<ChartPrediction> for ChartAnalysis {
    fn from(prediction: ChartPrediction) -> Self {
        if prediction.is_reliable() {
            Self {
                data: Some(prediction.data),
                axis: prediction.axis,
            }
        } else {
            Self {
                data: None,
                axis: prediction.axis,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_accepts_both_spellings() {
        let a: ChartRequest =
            serde_json::from_value(json!({"image_dir": "a.png", "prompt": "p", "threthold": 0.1}))
                .unwrap();
        let b: ChartRequest =
            serde_json::from_value(json!({"image_dir": "a.png", "prompt": "p", "threshold": 0.1}))
                .unwrap();
        assert_eq!(a, b);
        assert_eq!(serde_json::to_value(&a).unwrap()["threthold"], json!(0.1));
    }

    #[test]
    fn test_warning_drops_data() {
        let prediction: ChartPrediction = serde_json::from_value(json!({
            "data": {"S": {"A": 1}},
            "axis": ["A", "B"],
            "warning": "low confidence"
        }))
        .unwrap();
        let analysis = ChartAnalysis::from(prediction);
        assert_eq!(analysis.data, None);
        assert_eq!(analysis.axis, vec!["A", "B"]);
    }

    #[test]
    fn test_blank_warning_is_reliable() {
        let prediction: ChartPrediction =
            serde_json::from_value(json!({"data": [1, 2], "warning": "  "})).unwrap();
        assert!(prediction.is_reliable());
        assert_eq!(ChartAnalysis::from(prediction).data, Some(json!([1, 2])));
    }
}
