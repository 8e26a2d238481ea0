/// Fetch-level error.
///
/// Carries the failing identifier so that an aggregate failure still
/// names the member that caused it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("record {id} not found")]
    NotFound { id: u64 },
}
