use async_trait::async_trait;
use chronos_core::Timestamp;

use crate::error::FetchError;

/// Port for the remote time source
///
/// One invocation performs one network request and yields either the
/// current wall-clock time in the remote timezone or a [`FetchError`].
/// Retry policy lives entirely in the caller.
#[async_trait]
pub trait TimeFetcher: Send + Sync {
    /// Fetch the current time from the remote source
    async fn fetch_time(&self) -> Result<Timestamp, FetchError>;
}
