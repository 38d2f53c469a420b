// Per-axis two-point linear calibration from pixel y to value
use super::annotation::{CalibrationValue, PixelPoint};
use super::error::{Bound, DigitizeError};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisScale {
    Linear,
    /// Values are fractions; 1.0 is 100%
    Percent,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalibrationPoint {
    pub value: CalibrationValue,
    pub pixel: PixelPoint,
}

impl CalibrationPoint {
    pub fn new(value: CalibrationValue, pixel: PixelPoint) -> Self {
        Self { value, pixel }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisCalibration {
    pub ymin_value: f64,
    pub ymin_pixel_y: f64,
    pub ymax_value: f64,
    pub ymax_pixel_y: f64,
    pub scale: AxisScale,
}

impl AxisCalibration {
    pub fn new(
        axis: &str,
        min: &CalibrationPoint,
        max: &CalibrationPoint,
    ) -> Result<Self, DigitizeError> {
        if min.pixel.y == max.pixel.y {
            return Err(DigitizeError::DegenerateCalibration {
                axis: axis.to_string(),
                pixel_y: min.pixel.y,
            });
        }

        let (scale, divisor) = if min.value.percent || max.value.percent {
            (AxisScale::Percent, 100.0)
        } else {
            (AxisScale::Linear, 1.0)
        };

        Ok(Self {
            ymin_value: min.value.value / divisor,
            ymin_pixel_y: min.pixel.y,
            ymax_value: max.value.value / divisor,
            ymax_pixel_y: max.pixel.y,
            scale,
        })
    }

    /// Value at pixel row `pixel_y`. Not clamped, so points outside the
    /// calibrated range extrapolate.
    pub fn value_at(&self, pixel_y: f64) -> f64 {
        self.ymin_value
            + (self.ymin_pixel_y - pixel_y) / (self.ymin_pixel_y - self.ymax_pixel_y)
                * (self.ymax_value - self.ymin_value)
    }
}

/// Calibration points collected per axis during classification
#[derive(Debug, Clone, Default)]
pub struct CalibrationTable {
    origins: HashMap<String, PixelPoint>,
    y_min: HashMap<String, CalibrationPoint>,
    y_max: HashMap<String, CalibrationPoint>,
}

impl CalibrationTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_origin(&mut self, axis: &str, pixel: PixelPoint) {
        if self.origins.insert(axis.to_string(), pixel).is_some() {
            tracing::warn!("Axis {} has more than one Origin point; using the last", axis);
        }
    }

    pub fn set(&mut self, bound: Bound, axis: &str, point: CalibrationPoint) {
        let points = match bound {
            Bound::Min => &mut self.y_min,
            Bound::Max => &mut self.y_max,
        };
        if points.insert(axis.to_string(), point).is_some() {
            tracing::warn!("Axis {} has more than one {} point; using the last", axis, bound);
        }
    }

    /// An explicit `Ymin=` wins over `Origin`, which stands for value 0.
    fn min_point(&self, axis: &str) -> Option<CalibrationPoint> {
        self.y_min.get(axis).copied().or_else(|| {
            self.origins.get(axis).map(|pixel| {
                CalibrationPoint::new(
                    CalibrationValue {
                        value: 0.0,
                        percent: false,
                    },
                    *pixel,
                )
            })
        })
    }

    pub fn for_axis(&self, axis: &str) -> Result<AxisCalibration, DigitizeError> {
        let min = self
            .min_point(axis)
            .ok_or_else(|| DigitizeError::MissingCalibration {
                axis: axis.to_string(),
                bound: Bound::Min,
            })?;
        let max = self
            .y_max
            .get(axis)
            .ok_or_else(|| DigitizeError::MissingCalibration {
                axis: axis.to_string(),
                bound: Bound::Max,
            })?;

        AxisCalibration::new(axis, &min, max)
    }
}
