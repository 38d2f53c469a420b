// Conversion errors raised while turning annotations into values
use std::fmt;
use std::num::ParseFloatError;
use thiserror::Error;

/// Which end of an axis a calibration point pins down
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Min,
    Max,
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bound::Min => f.write_str("Ymin"),
            Bound::Max => f.write_str("Ymax"),
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum DigitizeError {
    #[error("invalid calibration value in label '{label}': {source}")]
    Parse {
        label: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("calibration value in label '{label}' is not a finite number")]
    NonFiniteCalibration { label: String },

    #[error("axis '{axis}' has no {bound} calibration point")]
    MissingCalibration { axis: String, bound: Bound },

    #[error("axis '{axis}' has Ymin and Ymax at the same pixel y ({pixel_y})")]
    DegenerateCalibration { axis: String, pixel_y: f64 },

    #[error("no X-axis ticks defined")]
    NoXAxisDefined,
}

impl DigitizeError {
    /// Stable machine-readable name used in error responses
    pub fn kind(&self) -> &'static str {
        match self {
            DigitizeError::Parse { .. } | DigitizeError::NonFiniteCalibration { .. } => {
                "parse_error"
            }
            DigitizeError::MissingCalibration { .. } => "missing_calibration",
            DigitizeError::DegenerateCalibration { .. } => "degenerate_calibration",
            DigitizeError::NoXAxisDefined => "no_x_axis",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_axis() {
        let err = DigitizeError::MissingCalibration {
            axis: "right".to_string(),
            bound: Bound::Max,
        };
        assert_eq!(err.to_string(), "axis 'right' has no Ymax calibration point");
        assert_eq!(err.kind(), "missing_calibration");
    }

    #[test]
    fn test_parse_error_keeps_its_source() {
        let source = "ten".parse::<f64>().unwrap_err();
        let err = DigitizeError::Parse {
            label: "Ymax=ten".to_string(),
            source: source.clone(),
        };
        let chained = std::error::Error::source(&err).map(|e| e.to_string());
        assert_eq!(chained, Some(source.to_string()));
        assert_eq!(err.kind(), "parse_error");

        let err = DigitizeError::NonFiniteCalibration {
            label: "Ymax=inf".to_string(),
        };
        assert_eq!(err.kind(), "parse_error");
        assert!(std::error::Error::source(&err).is_none());
    }
}
