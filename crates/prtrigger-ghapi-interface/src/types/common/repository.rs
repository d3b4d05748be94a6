use serde::{Deserialize, Serialize};

/// GitHub Repository.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhRepository {
    /// Full name (`owner/name`).
    pub full_name: String,
}
