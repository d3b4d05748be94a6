use prtrigger_ghapi_interface::ApiError;

#[derive(Debug, thiserror::Error)]
#[allow(clippy::enum_variant_names)]
pub enum GitHubError {
    #[error(transparent)]
    HttpError { source: reqwest::Error },

    #[error("Unexpected status {} on {}", status, url)]
    StatusError { status: u16, url: String },

    #[error("Invalid header value for {}", name)]
    HeaderError { name: &'static str },
}

impl From<reqwest::Error> for GitHubError {
    fn from(e: reqwest::Error) -> Self {
        GitHubError::HttpError { source: e }
    }
}

impl From<GitHubError> for ApiError {
    fn from(e: GitHubError) -> Self {
        match e {
            GitHubError::StatusError { status, url } => ApiError::UnexpectedStatus { status, url },
            e => ApiError::ImplementationError { source: e.into() },
        }
    }
}
