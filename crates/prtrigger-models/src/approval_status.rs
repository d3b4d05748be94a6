/// Readiness of a pull request for CI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApprovalStatus {
    Ready,
    NotReady {
        /// Reviewers still requested on the pull request.
        pending_reviewers: Vec<String>,
        /// Reviewers whose last review is not an approval.
        unapproved_reviewers: Vec<String>,
    },
}

impl ApprovalStatus {
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready)
    }
}
