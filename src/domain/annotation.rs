// Annotated points as clicked in the annotation tool
use super::error::DigitizeError;
use serde::Deserialize;

/// Axis used when a point does not name one
pub const DEFAULT_AXIS: &str = "left";

const ORIGIN_LABEL: &str = "Origin";
const YMIN_PREFIX: &str = "Ymin=";
const YMAX_PREFIX: &str = "Ymax=";
const XTICK_PREFIX: &str = "X=";

/// A point on the chart image with the tag the user gave it
#[derive(Debug, Clone, Deserialize)]
pub struct AnnotatedPoint {
    pub x: f64,
    pub y: f64,
    pub label: String,
    #[serde(default)]
    pub axis: Option<String>,
}

impl AnnotatedPoint {
    pub fn axis(&self) -> &str {
        self.axis.as_deref().unwrap_or(DEFAULT_AXIS)
    }

    pub fn pixel(&self) -> PixelPoint {
        PixelPoint::new(self.x, self.y)
    }

    pub fn kind(&self) -> Result<PointKind, DigitizeError> {
        PointKind::parse(&self.label)
    }
}

#[cfg(test)]
impl AnnotatedPoint {
    pub fn new(x: f64, y: f64, label: impl Into<String>) -> Self {
        Self {
            x,
            y,
            label: label.into(),
            axis: None,
        }
    }

    pub fn on_axis(mut self, axis: impl Into<String>) -> Self {
        self.axis = Some(axis.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Value written after `Ymin=` / `Ymax=`, in the units the user typed.
///
/// `Ymin=5%` parses to `5.0` with `percent` set; scaling to a fraction
/// happens once, when the axis calibration is built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalibrationValue {
    pub value: f64,
    pub percent: bool,
}

impl CalibrationValue {
    fn parse(label: &str, raw: &str) -> Result<Self, DigitizeError> {
        let percent = raw.contains('%');
        let digits = raw.replace('%', "");
        let value: f64 = digits.trim().parse().map_err(|source| DigitizeError::Parse {
            label: label.to_string(),
            source,
        })?;

        if !value.is_finite() {
            return Err(DigitizeError::NonFiniteCalibration {
                label: label.to_string(),
            });
        }

        Ok(Self { value, percent })
    }
}

/// What a label means, decided once when the point is classified
#[derive(Debug, Clone, PartialEq)]
pub enum PointKind {
    /// Pixel origin of the axis; calibrates value 0
    Origin,
    YMin(CalibrationValue),
    YMax(CalibrationValue),
    XTick(String),
    Series(String),
}

impl PointKind {
    pub fn parse(label: &str) -> Result<Self, DigitizeError> {
        if let Some(raw) = label.strip_prefix(YMIN_PREFIX) {
            Ok(PointKind::YMin(CalibrationValue::parse(label, raw)?))
        } else if let Some(raw) = label.strip_prefix(YMAX_PREFIX) {
            Ok(PointKind::YMax(CalibrationValue::parse(label, raw)?))
        } else if let Some(tick) = label.strip_prefix(XTICK_PREFIX) {
            Ok(PointKind::XTick(tick.to_string()))
        } else if label == ORIGIN_LABEL {
            Ok(PointKind::Origin)
        } else {
            Ok(PointKind::Series(label.to_string()))
        }
    }
}
