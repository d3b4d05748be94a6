//! GitHub adapter

use async_trait::async_trait;
use prtrigger_config::Config;
use prtrigger_ghapi_interface::{
    review::GhReviewApi, types::GhRequestedReviewers, ApiError, ApiService, Result,
};
use reqwest::Client;

use crate::{
    auth::{build_github_url, check_status, get_authenticated_client_builder},
    errors::GitHubError,
};

const REVIEWS_PAGE_SIZE: u32 = 100;

/// GitHub API adapter implementation.
#[derive(Clone)]
pub struct GithubApiService {
    config: Config,
}

impl GithubApiService {
    /// Creates new GitHub API adapter.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    fn get_client(&self) -> Result<Client, GitHubError> {
        get_authenticated_client_builder(&self.config)?
            .build()
            .map_err(GitHubError::from)
    }

    fn build_url(&self, path: String) -> String {
        build_github_url(&self.config, path)
    }
}

#[async_trait]
impl ApiService for GithubApiService {
    #[tracing::instrument(skip(self), ret)]
    async fn pull_reviewer_requests_list(
        &self,
        owner: &str,
        name: &str,
        issue_number: u64,
    ) -> Result<GhRequestedReviewers> {
        let response = self
            .get_client()?
            .get(self.build_url(format!(
                "/repos/{owner}/{name}/pulls/{issue_number}/requested_reviewers"
            )))
            .send()
            .await
            .map_err(GitHubError::from)?;

        check_status(response)?
            .json::<GhRequestedReviewers>()
            .await
            .map_err(|e| ApiError::from(GitHubError::from(e)))
    }

    #[tracing::instrument(skip(self), ret)]
    async fn pull_reviews_list(
        &self,
        owner: &str,
        name: &str,
        issue_number: u64,
    ) -> Result<Vec<GhReviewApi>> {
        let response = self
            .get_client()?
            .get(self.build_url(format!(
                "/repos/{owner}/{name}/pulls/{issue_number}/reviews"
            )))
            .query(&[("per_page", REVIEWS_PAGE_SIZE)])
            .send()
            .await
            .map_err(GitHubError::from)?;

        check_status(response)?
            .json::<Vec<GhReviewApi>>()
            .await
            .map_err(|e| ApiError::from(GitHubError::from(e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_url() {
        let mut config = Config::from_env_no_version().unwrap();
        config.api.github.root_url = "https://github.example.com/api/v3".into();

        let service = GithubApiService::new(config);
        assert_eq!(
            service.build_url("/repos/me/test/pulls/42/requested_reviewers".into()),
            "https://github.example.com/api/v3/repos/me/test/pulls/42/requested_reviewers"
        );
        service.get_client().unwrap();
    }

    #[tokio::test]
    async fn unreachable_host_is_implementation_error() {
        let mut config = Config::from_env_no_version().unwrap();
        config.api.github.root_url = "http://127.0.0.1:1".into();
        config.api.github.connect_timeout = 200;

        let service = GithubApiService::new(config);
        let result = service.pull_reviews_list("me", "test", 1).await;
        assert!(matches!(result, Err(ApiError::ImplementationError { .. })));
    }
}
