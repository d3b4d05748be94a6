use serde::{Deserialize, Serialize};

/// Build configuration reference.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct CiBuildTypeRef {
    pub id: String,
}

/// Build comment.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct CiComment {
    pub text: String,
}

/// Build queue submission.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CiBuildQueueRequest {
    pub branch_name: String,
    pub build_type: CiBuildTypeRef,
    pub comment: CiComment,
}

impl CiBuildQueueRequest {
    pub fn new<B, I, C>(branch_name: B, build_type_id: I, comment: C) -> Self
    where
        B: Into<String>,
        I: Into<String>,
        C: Into<String>,
    {
        Self {
            branch_name: branch_name.into(),
            build_type: CiBuildTypeRef {
                id: build_type_id.into(),
            },
            comment: CiComment {
                text: comment.into(),
            },
        }
    }
}
