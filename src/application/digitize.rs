// Conversion use case - annotated points to values per series and tick
use crate::domain::annotation::AnnotatedPoint;
use crate::domain::calibration::AxisCalibration;
use crate::domain::classifier::classify;
use crate::domain::error::DigitizeError;
use crate::domain::format::format_value;
use indexmap::IndexMap;
use std::collections::HashMap;

/// Formatted values keyed by tick label, in the order ticks were first hit
pub type SeriesValues = IndexMap<String, String>;

/// Series label to its values, in the order series were first annotated
pub type DigitizedChart = IndexMap<String, SeriesValues>;

/// Reads every series point off its axis and snaps it to the nearest
/// X tick.
///
/// Fails on the first problem found; axes are calibrated in the order
/// their data first appears. Points are assembled in input order, so
/// when two points of a series land on the same tick the later one
/// wins, whichever axis it was read against.
pub fn digitize(points: &[AnnotatedPoint]) -> Result<DigitizedChart, DigitizeError> {
    let classified = classify(points)?;

    let mut chart = DigitizedChart::new();
    if classified.series.is_empty() {
        return Ok(chart);
    }
    if classified.ticks.is_empty() {
        return Err(DigitizeError::NoXAxisDefined);
    }

    let mut axes: HashMap<&str, AxisCalibration> = HashMap::new();
    for axis in classified.data_axes() {
        axes.insert(axis, classified.calibration.for_axis(axis)?);
    }

    tracing::debug!(
        "Classified {} points: {} ticks, {} series points on {} axes",
        points.len(),
        classified.ticks.len(),
        classified.series.len(),
        axes.len()
    );

    for point in &classified.series {
        let axis = match axes.get(point.axis.as_str()) {
            Some(axis) => *axis,
            None => classified.calibration.for_axis(&point.axis)?,
        };
        let tick = classified.ticks.nearest(point.pixel.x)?;
        let value = format_value(axis.value_at(point.pixel.y), axis.scale);

        let values = chart.entry(point.label.clone()).or_default();
        if let Some(previous) = values.insert(tick.label.clone(), value) {
            tracing::debug!(
                "Series {} has several points at tick {}; dropping {}",
                point.label,
                tick.label,
                previous
            );
        }
    }

    Ok(chart)
}
