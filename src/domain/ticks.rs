// X-axis ticks and nearest-tick lookup
use super::annotation::PixelPoint;
use super::error::DigitizeError;

#[derive(Debug, Clone, PartialEq)]
pub struct XTick {
    pub label: String,
    pub pixel: PixelPoint,
}

impl XTick {
    pub fn new(label: String, pixel: PixelPoint) -> Self {
        Self { label, pixel }
    }
}

/// Ticks in the order they were annotated, one per label
#[derive(Debug, Clone, Default)]
pub struct TickSet {
    ticks: Vec<XTick>,
}

impl TickSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a tick unless one with the same label is already known.
    pub fn insert(&mut self, tick: XTick) -> bool {
        if self.ticks.iter().any(|t| t.label == tick.label) {
            tracing::debug!("Ignoring repeated X tick {}", tick.label);
            return false;
        }
        self.ticks.push(tick);
        true
    }

    pub fn len(&self) -> usize {
        self.ticks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ticks.is_empty()
    }

    /// Tick whose pixel x is closest to `pixel_x`; the earliest wins a tie.
    pub fn nearest(&self, pixel_x: f64) -> Result<&XTick, DigitizeError> {
        let mut best: Option<(&XTick, f64)> = None;
        for tick in &self.ticks {
            let distance = (tick.pixel.x - pixel_x).abs();
            match best {
                Some((_, best_distance)) if distance >= best_distance => {}
                _ => best = Some((tick, distance)),
            }
        }
        best.map(|(tick, _)| tick).ok_or(DigitizeError::NoXAxisDefined)
    }
}
