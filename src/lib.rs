//! Client library for a hosted AutoML image classification service.
//!
//! The crate wraps the service's `Predict` RPC in a single-shot pipeline:
//! build a [`Config`] from the environment, read an image file into memory,
//! construct an immutable [`PredictionRequest`], issue one call through a
//! [`PredictionClient`], and render the returned labels and scores.
//!
//! The remote side is reached through the narrow [`PredictionClient`] trait,
//! implemented for real by [`AutoMlClient`] over a tonic channel and by test
//! doubles in the test suite. Authentication, retries and timeouts are the
//! channel's concern, not this crate's.

pub mod client;
pub mod config;
pub mod error;
pub mod format;
pub mod pb;
pub mod pipeline;
pub mod request;

pub use client::{AutoMlClient, Classification, Prediction, PredictionClient, DEFAULT_ENDPOINT};
pub use config::Config;
pub use error::{Error, Result};
pub use pipeline::Pipeline;
pub use request::{read_image, PredictionRequest};
