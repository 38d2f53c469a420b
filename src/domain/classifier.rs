// Splits annotated points into calibration, tick and series points
use super::annotation::{AnnotatedPoint, PixelPoint, PointKind};
use super::calibration::{CalibrationPoint, CalibrationTable};
use super::error::{Bound, DigitizeError};
use super::ticks::{TickSet, XTick};

/// A data point of one series, read against the axis it was placed on
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPoint {
    pub axis: String,
    pub label: String,
    pub pixel: PixelPoint,
}

#[derive(Debug, Clone)]
pub struct ClassifiedPoints {
    pub ticks: TickSet,
    pub calibration: CalibrationTable,
    /// Series data points in input order
    pub series: Vec<SeriesPoint>,
}

impl ClassifiedPoints {
    /// Axes carrying at least one series point, in first-seen order
    pub fn data_axes(&self) -> Vec<&str> {
        let mut axes: Vec<&str> = Vec::new();
        for point in &self.series {
            if !axes.contains(&point.axis.as_str()) {
                axes.push(&point.axis);
            }
        }
        axes
    }
}

pub fn classify(points: &[AnnotatedPoint]) -> Result<ClassifiedPoints, DigitizeError> {
    let mut classified = ClassifiedPoints {
        ticks: TickSet::new(),
        calibration: CalibrationTable::new(),
        series: Vec::new(),
    };

    for point in points {
        let axis = point.axis();
        match point.kind()? {
            PointKind::Origin => classified.calibration.set_origin(axis, point.pixel()),
            PointKind::YMin(value) => classified.calibration.set(
                Bound::Min,
                axis,
                CalibrationPoint::new(value, point.pixel()),
            ),
            PointKind::YMax(value) => classified.calibration.set(
                Bound::Max,
                axis,
                CalibrationPoint::new(value, point.pixel()),
            ),
            PointKind::XTick(label) => {
                classified.ticks.insert(XTick::new(label, point.pixel()));
            }
            PointKind::Series(label) => classified.series.push(SeriesPoint {
                axis: axis.to_string(),
                label,
                pixel: point.pixel(),
            }),
        }
    }

    Ok(classified)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_mixed_points() {
        let points = vec![
            AnnotatedPoint::new(0.0, 100.0, "Ymin=0"),
            AnnotatedPoint::new(0.0, 0.0, "Ymax=10"),
            AnnotatedPoint::new(5.0, 110.0, "X=A"),
            AnnotatedPoint::new(4.0, 50.0, "S"),
            AnnotatedPoint::new(15.0, 110.0, "X=B"),
            AnnotatedPoint::new(6.0, 30.0, "Share").on_axis("right"),
            AnnotatedPoint::new(14.0, 40.0, "S"),
            AnnotatedPoint::new(0.0, 90.0, "Ymin=0%").on_axis("right"),
            AnnotatedPoint::new(0.0, 10.0, "Ymax=100%").on_axis("right"),
        ];
        let classified = classify(&points).unwrap();

        assert_eq!(classified.ticks.len(), 2);
        let series: Vec<(&str, &str, f64)> = classified
            .series
            .iter()
            .map(|p| (p.axis.as_str(), p.label.as_str(), p.pixel.x))
            .collect();
        assert_eq!(
            series,
            vec![("left", "S", 4.0), ("right", "Share", 6.0), ("left", "S", 14.0)]
        );
        assert_eq!(classified.data_axes(), vec!["left", "right"]);

        assert!(classified.calibration.for_axis("left").is_ok());
        assert!(classified.calibration.for_axis("right").is_ok());
    }

    #[test]
    fn test_same_label_on_two_axes_keeps_both_axes() {
        let points = vec![
            AnnotatedPoint::new(1.0, 1.0, "S").on_axis("right"),
            AnnotatedPoint::new(2.0, 2.0, "S"),
        ];
        let classified = classify(&points).unwrap();
        assert_eq!(classified.series.len(), 2);
        assert_eq!(classified.data_axes(), vec!["right", "left"]);
    }

    #[test]
    fn test_parse_error_propagates() {
        let points = vec![
            AnnotatedPoint::new(4.0, 50.0, "S"),
            AnnotatedPoint::new(0.0, 0.0, "Ymax=ten"),
        ];
        let err = classify(&points).unwrap_err();
        assert_eq!(err.kind(), "parse_error");
    }
}
