//! Prediction types returned by the classification endpoint.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::dims::ImageDims;

/// Kind of prediction a model endpoint produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PredictionKind {
    Classification,
}

/// A single class label with its confidence score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassPrediction {
    /// Class label assigned by the model
    #[serde(rename = "class")]
    pub class_name: String,
    /// Model confidence (0.0 to 1.0)
    pub confidence: f64,
}

/// Wire shape of a classification endpoint response.
///
/// The endpoint owns this schema and may add fields at any time; anything
/// not modeled here stays available on [`PredictionGroup::raw`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClassifyResponse {
    /// Per-class predictions, highest confidence first
    #[serde(default)]
    pub predictions: Vec<ClassPrediction>,
    /// Top class label, when the endpoint reports one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<String>,
    /// Confidence of the top class
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
}

/// Parsed predictions for a single image.
#[derive(Debug, Clone, Serialize)]
pub struct PredictionGroup {
    /// Always [`PredictionKind::Classification`] from this SDK
    pub kind: PredictionKind,
    /// The path or URL the caller passed in, verbatim
    pub image_ref: String,
    /// Dimensions of the classified image (0x0 in hosted mode)
    pub image_dims: ImageDims,
    /// Per-class predictions
    pub predictions: Vec<ClassPrediction>,
    /// Top class label reported by the endpoint
    pub top: Option<String>,
    /// Confidence of the top class
    pub confidence: Option<f64>,
    /// Raw response body, kept for fields this crate does not model
    pub raw: Value,
}

impl PredictionGroup {
    /// Build a prediction group from a raw endpoint response.
    ///
    /// Parsing is tolerant: an unexpected response shape yields an empty
    /// prediction list rather than an error, and the raw JSON is always
    /// retained.
    pub fn from_response(raw: Value, image_ref: impl Into<String>, image_dims: ImageDims) -> Self {
        let parsed: ClassifyResponse = serde_json::from_value(raw.clone()).unwrap_or_default();

        Self {
            kind: PredictionKind::Classification,
            image_ref: image_ref.into(),
            image_dims,
            predictions: parsed.predictions,
            top: parsed.top,
            confidence: parsed.confidence,
            raw,
        }
    }

    /// The highest-confidence prediction, if any.
    pub fn top_prediction(&self) -> Option<&ClassPrediction> {
        self.predictions
            .iter()
            .max_by(|a, b| a.confidence.total_cmp(&b.confidence))
    }

    pub fn len(&self) -> usize {
        self.predictions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predictions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_response_tags_classification() {
        let body = json!({
            "time": 0.041,
            "top": "dog",
            "confidence": 0.97,
            "predictions": [
                { "class": "dog", "confidence": 0.97 },
                { "class": "cat", "confidence": 0.03 }
            ]
        });

        let group = PredictionGroup::from_response(
            body,
            "photos/dog.jpg",
            ImageDims::new(640, 480),
        );

        assert_eq!(group.kind, PredictionKind::Classification);
        assert_eq!(group.image_ref, "photos/dog.jpg");
        assert_eq!(group.len(), 2);
        assert_eq!(group.top.as_deref(), Some("dog"));
        assert_eq!(group.top_prediction().unwrap().class_name, "dog");
    }

    #[test]
    fn test_from_response_tolerates_unknown_shape() {
        let body = json!({ "message": "no predictions today" });

        let group = PredictionGroup::from_response(body.clone(), "x.jpg", ImageDims::unknown());

        assert!(group.is_empty());
        assert_eq!(group.top, None);
        assert_eq!(group.raw, body);
    }

    #[test]
    fn test_prediction_kind_serializes_lowercase() {
        let kind = serde_json::to_string(&PredictionKind::Classification).unwrap();
        assert_eq!(kind, "\"classification\"");
    }
}
