use async_trait::async_trait;
use tonic::transport::{Channel, Endpoint};
use tracing::debug;

use crate::pb;
use crate::pb::prediction_service_client::PredictionServiceClient;
use crate::request::PredictionRequest;
use crate::Result;

/// Public endpoint of the hosted prediction service.
pub const DEFAULT_ENDPOINT: &str = "https://automl.googleapis.com";

/// Capability to submit one classification request to a remote model.
///
/// The pipeline talks to the service exclusively through this trait, so a
/// test double can stand in for the network with no transport involved.
#[async_trait]
pub trait PredictionClient {
    /// Submit one request and block until the service answers or fails.
    async fn predict(&mut self, request: PredictionRequest) -> Result<Prediction>;
}

/// One label returned by the model.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    /// Human-readable label name.
    pub display_name: String,
    /// Confidence estimate between 0.0 and 1.0.
    pub score: f32,
}

/// Ordered results of a single prediction, exactly as the service returned
/// them. Empty is valid: it means nothing cleared the score threshold.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Prediction {
    pub results: Vec<Classification>,
}

impl From<pb::PredictResponse> for Prediction {
    fn from(response: pb::PredictResponse) -> Self {
        let results = response
            .payload
            .into_iter()
            .filter_map(|entry| {
                let pb::annotation_payload::Detail::Classification(classification) =
                    entry.detail?;
                Some(Classification {
                    display_name: entry.display_name,
                    score: classification.score,
                })
            })
            .collect();
        Prediction { results }
    }
}

/// Client for the hosted AutoML prediction service.
///
/// This struct is created through [`AutoMlClient::builder`]. Use the builder
/// to override the endpoint, then call `connect` to establish the channel.
pub struct AutoMlClient {
    inner: PredictionServiceClient<Channel>,
}

impl AutoMlClient {
    /// Construct a new `AutoMlClient` builder struct.
    pub fn builder() -> AutoMlClientBuilder {
        AutoMlClientBuilder::default()
    }
}

/// Builder pattern used to build the client.
///
/// All parameters are optional; the endpoint defaults to
/// [`DEFAULT_ENDPOINT`].
#[derive(Debug, Default)]
pub struct AutoMlClientBuilder {
    endpoint: Option<String>,
}

impl AutoMlClientBuilder {
    /// Set the service endpoint, e.g. to point at a local stub.
    pub fn endpoint<S: Into<String>>(mut self, endpoint: S) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Build an [`AutoMlClient`], establishing the transport channel.
    pub async fn connect(self) -> Result<AutoMlClient> {
        let endpoint = self
            .endpoint
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        debug!(%endpoint, "connecting to prediction service");
        let channel = Endpoint::new(endpoint)?.connect().await?;
        Ok(AutoMlClient {
            inner: PredictionServiceClient::new(channel),
        })
    }
}

#[async_trait]
impl PredictionClient for AutoMlClient {
    async fn predict(&mut self, request: PredictionRequest) -> Result<Prediction> {
        let wire = pb::PredictRequest::from(request);
        debug!(model = %wire.name, "sending predict request");
        let response = self.inner.predict(wire).await?;
        Ok(response.into_inner().into())
    }
}
