// Application layer - Use cases
pub mod chart_inference;
pub mod chart_service;
pub mod digitize;
