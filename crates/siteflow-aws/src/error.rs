//! AWS provider error types

use siteflow_core::Step;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AwsError {
    #[error("object storage error: {0}")]
    Storage(String),

    #[error("certificate authority error: {0}")]
    Certificate(String),

    #[error("content delivery error: {0}")]
    Distribution(String),

    #[error("DNS error: {0}")]
    Dns(String),

    #[error("identity service error: {0}")]
    Identity(String),

    #[error("no hosted zone found for {0}")]
    ZoneNotFound(String),

    #[error("provider response missing {0}")]
    MissingField(&'static str),

    #[error("invalid request: {0}")]
    InvalidRequest(#[from] aws_sdk_cloudfront::error::BuildError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AwsError>;

/// A pipeline stage failure, naming the step that halted the run.
#[derive(Error, Debug)]
#[error("{step} failed: {source}")]
pub struct StageError {
    pub step: Step,
    #[source]
    pub source: AwsError,
}

impl StageError {
    pub fn new(step: Step, source: AwsError) -> Self {
        Self { step, source }
    }
}

/// Attach a step name to the error of a stage's result.
pub(crate) trait AtStep<T> {
    fn at(self, step: Step) -> std::result::Result<T, StageError>;
}

impl<T> AtStep<T> for Result<T> {
    fn at(self, step: Step) -> std::result::Result<T, StageError> {
        self.map_err(|source| StageError::new(step, source))
    }
}
