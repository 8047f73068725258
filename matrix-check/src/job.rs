//! End-to-end run orchestration.

use std::time::{Duration, Instant};

use numbers_client::{Axis, BaseUrl, NumbersClient};
use tracing::{info, warn};

use crate::Error;
use crate::digest::matrix_digest;
use crate::matrix::multiply;

/// Results of a completed run.
#[derive(Debug)]
pub struct JobOutcome {
    /// Uppercase hex MD5 of the serialized product matrix.
    pub digest: String,
    /// Time spent fetching both datasets and multiplying them.
    pub elapsed: Duration,
    /// The validator's response body, if the validation call succeeded.
    pub validation: Option<String>,
}

/// Coordinates one multiplication check against the numbers API.
///
/// The init and validate calls tolerate failure (logged, run continues);
/// a failed dataset fetch or a dimension mismatch aborts the run with an
/// error.
pub struct MatrixJob {
    client: NumbersClient,
    size: usize,
}

impl MatrixJob {
    /// Creates a job against the API at `base_url` for `size`-row datasets.
    pub fn new(base_url: impl Into<BaseUrl>, size: usize) -> Result<Self, Error> {
        let client = NumbersClient::new(base_url)?;
        Ok(Self { client, size })
    }

    /// Runs the full pipeline: init, fetch A and B, multiply, hash,
    /// validate.
    pub async fn run(&self) -> Result<JobOutcome, Error> {
        match self.client.init(self.size).await {
            Ok(body) => info!(%body, "datasets initialized"),
            Err(e) => warn!(error = %e, "init request failed, continuing"),
        }

        let started = Instant::now();
        let a = self.client.fetch_dataset("A", Axis::Row, self.size).await?;
        let b = self.client.fetch_dataset("B", Axis::Row, self.size).await?;
        let product = multiply(&a, &b)?;
        let elapsed = started.elapsed();

        let digest = matrix_digest(&product);
        info!(?elapsed, %digest, "computed result digest");

        let validation = match self.client.validate(&digest).await {
            Ok(body) => Some(body),
            Err(e) => {
                warn!(error = %e, "validate request failed");
                None
            }
        };

        Ok(JobOutcome {
            digest,
            elapsed,
            validation,
        })
    }
}
