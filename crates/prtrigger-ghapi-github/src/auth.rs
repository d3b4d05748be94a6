//! Auth.

use std::time::Duration;

use http::{header, HeaderMap, HeaderValue};
use prtrigger_config::Config;
use reqwest::{ClientBuilder, Response};

use crate::errors::GitHubError;

const GITHUB_ACCEPT: &str = "application/vnd.github+json";
const GITHUB_API_VERSION: &str = "2022-11-28";

/// Get an authenticated GitHub client builder.
pub fn get_authenticated_client_builder(config: &Config) -> Result<ClientBuilder, GitHubError> {
    let token = &config.api.github.token;

    let mut headers = base_headers();
    headers.insert(
        header::AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|_| GitHubError::HeaderError { name: "authorization" })?,
    );

    Ok(get_anonymous_client_builder(config).default_headers(headers))
}

/// Get anonymous GitHub client builder.
pub fn get_anonymous_client_builder(config: &Config) -> ClientBuilder {
    ClientBuilder::new()
        .connect_timeout(Duration::from_millis(config.api.github.connect_timeout))
        .user_agent(format!("prtrigger/{}", config.version))
        .default_headers(base_headers())
}

/// Build a GitHub URL.
pub fn build_github_url<T: Into<String>>(config: &Config, path: T) -> String {
    format!(
        "{}{}",
        config.api.github.root_url.trim_end_matches('/'),
        path.into()
    )
}

/// Turn a non-success response into an error.
pub fn check_status(response: Response) -> Result<Response, GitHubError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(GitHubError::StatusError {
            status: status.as_u16(),
            url: response.url().to_string(),
        })
    }
}

fn base_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(header::ACCEPT, HeaderValue::from_static(GITHUB_ACCEPT));
    headers.insert(
        "x-github-api-version",
        HeaderValue::from_static(GITHUB_API_VERSION),
    );
    headers
}
