use std::path::Path;

use tracing::info;

use crate::client::{Prediction, PredictionClient};
use crate::config::Config;
use crate::request::{self, PredictionRequest};
use crate::Result;

/// Single-shot prediction pipeline: resolve the model, load the image, issue
/// one remote call. No retries, no state kept between invocations.
pub struct Pipeline<C> {
    config: Config,
    client: C,
}

impl<C: PredictionClient> Pipeline<C> {
    pub fn new(config: Config, client: C) -> Self {
        Pipeline { config, client }
    }

    /// Run one prediction for an image file against a model in the
    /// configured project and region.
    ///
    /// `score_threshold` is the raw CLI string; it is validated here, before
    /// the service is contacted.
    pub async fn run(
        &mut self,
        model_id: &str,
        file_path: &Path,
        score_threshold: Option<&str>,
    ) -> Result<Prediction> {
        let image_bytes = request::read_image(file_path)?;
        let mut request =
            PredictionRequest::new(self.config.model_path(model_id), image_bytes);
        if let Some(raw) = score_threshold {
            request = request.with_score_threshold(raw)?;
        }
        info!(
            model = %request.model(),
            bytes = request.image_bytes().len(),
            "submitting prediction request"
        );
        self.client.predict(request).await
    }
}
