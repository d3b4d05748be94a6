//! Pull request resolution from the workflow context.

use std::{fs, path::PathBuf};

use prtrigger_config::Config;
use prtrigger_ghapi_interface::types::GhPullRequestReviewEvent;
use prtrigger_models::{PullRequestHandle, RepositoryPath, RepositoryPathError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContextError {
    #[error("Missing repository, set GITHUB_REPOSITORY or use --repository")]
    MissingRepository,
    #[error("Missing pull request number, no pull request in event payload and no --pull-number given")]
    MissingPullRequestNumber,
    #[error("Invalid pull request number: {value}")]
    InvalidPullRequestNumber { value: String },
    #[error("Invalid repository: {source}")]
    InvalidRepository { source: RepositoryPathError },
    #[error("Could not read event payload at {}: {}", path.display(), source)]
    EventReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Could not parse event payload at {}: {}", path.display(), source)]
    EventParseError {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Find the pull request targeted by this run.
///
/// Explicit values from the configuration win; the event payload fills the gaps.
pub fn resolve_pull_request_handle(config: &Config) -> Result<PullRequestHandle, ContextError> {
    let mut repository = config.context.repository.clone();
    let mut pull_number = parse_pull_number(&config.context.pull_number)?;

    if repository.is_empty() || pull_number.is_none() {
        if let Some(event) = read_event(&config.context.event_path)? {
            if repository.is_empty() {
                if let Some(repo) = event.repository {
                    repository = repo.full_name;
                }
            }

            if pull_number.is_none() {
                pull_number = event.pull_request.map(|pr| pr.number);
            }
        }
    }

    if repository.is_empty() {
        return Err(ContextError::MissingRepository);
    }

    let repository = RepositoryPath::new(&repository)
        .map_err(|source| ContextError::InvalidRepository { source })?;
    let number = pull_number.ok_or(ContextError::MissingPullRequestNumber)?;

    Ok(PullRequestHandle::new(repository, number))
}

fn parse_pull_number(value: &str) -> Result<Option<u64>, ContextError> {
    if value.is_empty() {
        return Ok(None);
    }

    value
        .parse()
        .map(Some)
        .map_err(|_| ContextError::InvalidPullRequestNumber {
            value: value.to_string(),
        })
}

fn read_event(event_path: &str) -> Result<Option<GhPullRequestReviewEvent>, ContextError> {
    if event_path.is_empty() {
        return Ok(None);
    }

    let path = PathBuf::from(event_path);
    let contents = fs::read_to_string(&path).map_err(|source| ContextError::EventReadError {
        path: path.clone(),
        source,
    })?;

    serde_json::from_str(&contents)
        .map(Some)
        .map_err(|source| ContextError::EventParseError { path, source })
}
