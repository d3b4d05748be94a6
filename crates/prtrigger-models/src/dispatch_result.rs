use crate::BuildTypeId;

/// Outcome of one build queue submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchResult {
    pub build_type_id: BuildTypeId,
    /// Status or error message when the submission failed.
    pub error: Option<String>,
}

impl DispatchResult {
    pub fn queued(build_type_id: BuildTypeId) -> Self {
        Self {
            build_type_id,
            error: None,
        }
    }

    pub fn failed<T: Into<String>>(build_type_id: BuildTypeId, detail: T) -> Self {
        Self {
            build_type_id,
            error: Some(detail.into()),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}
