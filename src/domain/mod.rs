// Domain layer - Annotation classification, calibration and formatting
pub mod annotation;
pub mod calibration;
pub mod chart;
pub mod classifier;
pub mod error;
pub mod format;
pub mod natural_sort;
pub mod ticks;
