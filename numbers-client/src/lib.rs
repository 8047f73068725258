//! Async client for the numbers dataset API.
//!
//! `numbers-client` retrieves remotely hosted integer datasets one index
//! at a time over HTTP and assembles them into matrices. Requests are
//! issued in fixed-size batches of concurrent fetches, one batch at a
//! time, so the remote never sees more than [`BATCH_SIZE`] calls in
//! flight from a single dataset fetch.
//!
//! # Features
//!
//! - Single pooled HTTP client reused across all concurrent calls
//! - Batched dataset retrieval with index-order results
//! - Dataset initialization and result-hash validation endpoints
//!
//! # Example
//!
//! ```no_run
//! use numbers_client::{Axis, NumbersClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = NumbersClient::new("https://recruitment-test.investcloud.com")?;
//!
//!     client.init(1000).await?;
//!     let dataset = client.fetch_dataset("A", Axis::Row, 1000).await?;
//!     assert_eq!(dataset.len(), 1000);
//!
//!     Ok(())
//! }
//! ```

mod batch;
mod client;
mod error;
mod model;

pub use batch::BATCH_SIZE;
pub use client::{Axis, BaseUrl, NumbersClient};
pub use error::Error;
