//! HTTP transport and single-request operations.

use std::time::Duration;

use crate::error::Error;
use crate::model::FetchResponse;

const POOL_MAX_IDLE_PER_HOST: usize = 10;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

// Fixed by the remote validator; the envelope must match byte for byte.
const VALIDATE_XMLNS: &str = "http://schemas.microsoft.com/2003/10/Serialization/";

/// Which orientation of a dataset to fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Row,
    Col,
}

impl Axis {
    pub fn as_str(self) -> &'static str {
        match self {
            Axis::Row => "row",
            Axis::Col => "col",
        }
    }
}

/// A client for the numbers dataset API.
///
/// `NumbersClient` owns a single pooled HTTP client that is reused by
/// every request, including the concurrent fetches issued by
/// [`fetch_dataset`](NumbersClient::fetch_dataset). The client carries no
/// application state, so concurrent calls need no coordination.
///
/// # Example
///
/// ```no_run
/// use numbers_client::{Axis, NumbersClient};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = NumbersClient::new("https://recruitment-test.investcloud.com")?;
///     let row = client.fetch_row("A", Axis::Row, 0).await?;
///     println!("{:?}", row);
///     Ok(())
/// }
/// ```
pub struct NumbersClient {
    http: reqwest::Client,
    base_url: BaseUrl,
}

impl NumbersClient {
    /// Creates a new client for the API at `base_url`.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Scheme and host (e.g., `"https://recruitment-test.investcloud.com"`)
    pub fn new(base_url: impl Into<BaseUrl>) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .pool_max_idle_per_host(POOL_MAX_IDLE_PER_HOST)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    /// Fetches the integer array at one index of a dataset.
    ///
    /// Fails on transport errors, non-success HTTP status, a malformed
    /// body, or a payload whose `Success` flag is false. No retries.
    pub async fn fetch_row(
        &self,
        dataset: &str,
        axis: Axis,
        index: usize,
    ) -> Result<Vec<i64>, Error> {
        let url = format!(
            "{}/api/numbers/{}/{}/{}",
            self.base_url.0,
            dataset,
            axis.as_str(),
            index
        );
        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status(status));
        }

        let body = response.text().await?;
        let payload: FetchResponse = serde_json::from_str(&body)?;
        if !payload.success {
            return Err(Error::Rejected {
                index,
                cause: payload
                    .cause
                    .unwrap_or_else(|| "no cause given".to_string()),
            });
        }

        Ok(payload.value)
    }

    /// Asks the server to initialize datasets of `size` rows and columns.
    ///
    /// The response body is opaque and returned as-is.
    pub async fn init(&self, size: usize) -> Result<String, Error> {
        let url = format!("{}/api/numbers/init/{}", self.base_url.0, size);
        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status(status));
        }

        Ok(response.text().await?)
    }

    /// Submits a result digest for validation.
    ///
    /// The digest is wrapped in the XML envelope the validator expects
    /// and posted as `application/xml`. The response body is opaque and
    /// returned as-is.
    pub async fn validate(&self, digest: &str) -> Result<String, Error> {
        let url = format!("{}/api/numbers/validate", self.base_url.0);
        let body = format!("<string xmlns=\"{}\">{}</string>", VALIDATE_XMLNS, digest);
        let response = self
            .http
            .post(&url)
            .header("content-type", "application/xml")
            .body(body)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status(status));
        }

        Ok(response.text().await?)
    }
}

/// Base URL wrapper for type-safe construction.
#[derive(Clone)]
pub struct BaseUrl(pub String);

impl From<String> for BaseUrl {
    fn from(s: String) -> Self {
        Self(s.trim_end_matches('/').to_string())
    }
}

impl From<&str> for BaseUrl {
    fn from(s: &str) -> Self {
        Self(s.trim_end_matches('/').to_string())
    }
}
