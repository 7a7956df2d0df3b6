//! Shared data models for the Pictag classification SDK.
//!
//! This crate provides Serde-serializable types for:
//! - Classification endpoint responses
//! - Parsed prediction groups handed back to callers
//! - Image dimensions recorded alongside a prediction

pub mod dims;
pub mod prediction;

// Re-export common types
pub use dims::ImageDims;
pub use prediction::{ClassPrediction, ClassifyResponse, PredictionGroup, PredictionKind};
