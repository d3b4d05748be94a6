use prtrigger_ciapi_interface::CiApiError;

#[derive(Debug, thiserror::Error)]
#[allow(clippy::enum_variant_names)]
pub enum TeamcityError {
    #[error(transparent)]
    HttpError { source: reqwest::Error },

    #[error("Unexpected status {} on {}", status, url)]
    StatusError { status: u16, url: String },

    #[error("Invalid header value for {}", name)]
    HeaderError { name: &'static str },
}

impl From<reqwest::Error> for TeamcityError {
    fn from(e: reqwest::Error) -> Self {
        TeamcityError::HttpError { source: e }
    }
}

impl From<TeamcityError> for CiApiError {
    fn from(e: TeamcityError) -> Self {
        match e {
            TeamcityError::StatusError { status, url } => {
                CiApiError::UnexpectedStatus { status, url }
            }
            e => CiApiError::ImplementationError { source: e.into() },
        }
    }
}
