use serde::{Deserialize, Serialize};

/// Fetched record. Created only as the resolved output of a fetch,
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Identifier the record was requested under.
    pub id: u64,
    /// Display name of the record subject.
    pub name: String,
}
