//! Error types for matrix-check operations.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("numbers api error: {0}")]
    Api(#[from] numbers_client::Error),

    #[error("matrix dimension mismatch: A is {0}x{1}, B is {2}x{3}")]
    DimensionMismatch(usize, usize, usize, usize),
}
