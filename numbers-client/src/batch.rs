//! Batched dataset retrieval.

use futures_util::future::try_join_all;
use tracing::debug;

use crate::client::{Axis, NumbersClient};
use crate::error::Error;

/// Number of concurrent requests dispatched per batch.
pub const BATCH_SIZE: usize = 100;

impl NumbersClient {
    /// Fetches a whole dataset of `size` rows, [`BATCH_SIZE`] concurrent
    /// requests at a time.
    ///
    /// Batches run strictly one after another; within a batch every index
    /// is requested concurrently and the batch is joined before the next
    /// one starts. Results are appended in index order, so the returned
    /// matrix has exactly `size` rows in ascending index order regardless
    /// of completion order. The final batch is clamped to `size`, so no
    /// out-of-range index is ever requested.
    ///
    /// Any failed fetch fails its whole batch and aborts the dataset
    /// fetch with the first error.
    pub async fn fetch_dataset(
        &self,
        dataset: &str,
        axis: Axis,
        size: usize,
    ) -> Result<Vec<Vec<i64>>, Error> {
        let batches = size.div_ceil(BATCH_SIZE);
        let mut rows = Vec::with_capacity(size);

        for batch in 0..batches {
            let start = batch * BATCH_SIZE;
            let end = (start + BATCH_SIZE).min(size);
            debug!(dataset, batch, start, end, "dispatching fetch batch");

            let fetches = (start..end).map(|index| self.fetch_row(dataset, axis, index));
            let batch_rows = try_join_all(fetches).await?;
            rows.extend(batch_rows);
        }

        Ok(rows)
    }

    /// Fetches a whole dataset with all `size` requests in flight at
    /// once, without batching.
    ///
    /// Same ordering and failure semantics as
    /// [`fetch_dataset`](NumbersClient::fetch_dataset), but the remote
    /// sees up to `size` concurrent calls.
    pub async fn fetch_dataset_eager(
        &self,
        dataset: &str,
        axis: Axis,
        size: usize,
    ) -> Result<Vec<Vec<i64>>, Error> {
        let fetches = (0..size).map(|index| self.fetch_row(dataset, axis, index));
        try_join_all(fetches).await
    }
}
