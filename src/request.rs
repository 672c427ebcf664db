use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::pb;
use crate::{Error, Result};

/// Key of the service-side result filter in the request params.
const SCORE_THRESHOLD_PARAM: &str = "score_threshold";

/// Read an image file into memory as opaque bytes.
///
/// The whole file is buffered; the service expects a complete image and the
/// format is its concern, not ours.
pub fn read_image<P: AsRef<Path>>(path: P) -> Result<Vec<u8>> {
    let path = path.as_ref();
    fs::read(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// A single classification query, immutable once constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionRequest {
    model: String,
    image_bytes: Vec<u8>,
    score_threshold: Option<f32>,
}

impl PredictionRequest {
    /// Create a request against a full model resource name
    /// (see [`Config::model_path`](crate::Config::model_path)).
    pub fn new<S: Into<String>>(model: S, image_bytes: Vec<u8>) -> Self {
        PredictionRequest {
            model: model.into(),
            image_bytes,
            score_threshold: None,
        }
    }

    /// Set the minimum confidence for a label to be included in results.
    ///
    /// The raw string is validated here so a bad value never reaches the
    /// service: it must parse as a float within `[0, 1]`. Leaving the
    /// threshold unset defers filtering to the service default.
    pub fn with_score_threshold(mut self, raw: &str) -> Result<Self> {
        let value: f32 = raw.trim().parse().map_err(|_| Error::InvalidArgument {
            value: raw.to_string(),
            reason: "not a number".to_string(),
        })?;
        if !(0.0..=1.0).contains(&value) {
            return Err(Error::InvalidArgument {
                value: raw.to_string(),
                reason: "must be within [0, 1]".to_string(),
            });
        }
        self.score_threshold = Some(value);
        Ok(self)
    }

    /// Full resource name of the model serving the prediction.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Raw image payload.
    pub fn image_bytes(&self) -> &[u8] {
        &self.image_bytes
    }

    /// Validated score threshold, if one was supplied.
    pub fn score_threshold(&self) -> Option<f32> {
        self.score_threshold
    }
}

impl From<PredictionRequest> for pb::PredictRequest {
    fn from(request: PredictionRequest) -> Self {
        let mut params = HashMap::new();
        if let Some(threshold) = request.score_threshold {
            params.insert(SCORE_THRESHOLD_PARAM.to_string(), threshold.to_string());
        }
        pb::PredictRequest {
            name: request.model,
            payload: Some(pb::ExamplePayload {
                payload: Some(pb::example_payload::Payload::Image(pb::Image {
                    image_bytes: request.image_bytes,
                })),
            }),
            params,
        }
    }
}
