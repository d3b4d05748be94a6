use serde::{Deserialize, Serialize};

/// GitHub Team.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhTeam {
    /// Team slug.
    pub slug: String,
}
