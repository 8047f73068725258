//! Remote matrix multiplication check.
//!
//! `matrix-check` fetches two integer datasets from the numbers API,
//! multiplies them as matrices, hashes the result, and submits the hash
//! for validation.
//!
//! # Pipeline
//!
//! 1. Ask the server to initialize datasets of the requested size
//! 2. Fetch datasets A and B in concurrent batches
//! 3. Multiply A × B
//! 4. Serialize the product row-major and take its MD5 digest
//! 5. Submit the digest to the validation endpoint
//!
//! # Example
//!
//! ```no_run
//! use matrix_check::MatrixJob;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let job = MatrixJob::new("https://recruitment-test.investcloud.com", 1000)?;
//!     let outcome = job.run().await?;
//!
//!     println!("{}", outcome.digest);
//!     Ok(())
//! }
//! ```

mod digest;
mod error;
mod job;
mod matrix;

pub use digest::matrix_digest;
pub use error::Error;
pub use job::{JobOutcome, MatrixJob};
pub use matrix::{Matrix, multiply};
