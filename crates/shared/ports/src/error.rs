use thiserror::Error;

/// Failure modes of a single remote time fetch
///
/// The sync cycle treats the two variants very differently: network
/// failures are transient and retried with backoff, while a malformed
/// payload from a reachable server will not self-correct by retrying and
/// aborts the cycle.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Parse error: {0}")]
    Parse(String),
}
