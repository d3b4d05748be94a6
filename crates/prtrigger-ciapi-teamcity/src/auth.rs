//! Auth.
//!
//! Every request gets its own header map, built from the bearer token plus the
//! headers specific to that call.

use std::time::Duration;

use http::{header, HeaderMap, HeaderValue};
use prtrigger_ciapi_interface::types::CsrfToken;
use prtrigger_config::Config;
use reqwest::{ClientBuilder, Response};

use crate::errors::TeamcityError;

const CSRF_HEADER: &str = "x-tc-csrf-token";

/// Get a TeamCity client builder, without credentials.
pub fn get_client_builder(config: &Config) -> ClientBuilder {
    ClientBuilder::new()
        .connect_timeout(Duration::from_millis(config.api.teamcity.connect_timeout))
        .user_agent(format!("prtrigger/{}", config.version))
}

/// Build a TeamCity URL.
pub fn build_teamcity_url<T: Into<String>>(config: &Config, path: T) -> String {
    format!(
        "{}{}",
        config.api.teamcity.root_url.trim_end_matches('/'),
        path.into()
    )
}

/// Headers for the CSRF token request.
pub fn token_headers(config: &Config) -> Result<HeaderMap, TeamcityError> {
    let mut headers = bearer_headers(config)?;
    headers.insert(header::ACCEPT, HeaderValue::from_static("text/plain"));
    Ok(headers)
}

/// Headers for authenticated reads.
pub fn read_headers(config: &Config, csrf_token: &CsrfToken) -> Result<HeaderMap, TeamcityError> {
    let mut headers = bearer_headers(config)?;
    headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(CSRF_HEADER, csrf_value(csrf_token)?);
    Ok(headers)
}

/// Headers for authenticated JSON writes.
pub fn write_headers(config: &Config, csrf_token: &CsrfToken) -> Result<HeaderMap, TeamcityError> {
    let mut headers = read_headers(config, csrf_token)?;
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    Ok(headers)
}

/// Turn a non-200 response into an error.
pub fn check_status(response: Response) -> Result<Response, TeamcityError> {
    let status = response.status();
    if status == reqwest::StatusCode::OK {
        Ok(response)
    } else {
        Err(TeamcityError::StatusError {
            status: status.as_u16(),
            url: response.url().to_string(),
        })
    }
}

fn bearer_headers(config: &Config) -> Result<HeaderMap, TeamcityError> {
    let token = &config.api.teamcity.token;

    let mut headers = HeaderMap::new();
    headers.insert(
        header::AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|_| TeamcityError::HeaderError { name: "authorization" })?,
    );
    Ok(headers)
}

fn csrf_value(csrf_token: &CsrfToken) -> Result<HeaderValue, TeamcityError> {
    HeaderValue::from_str(csrf_token.as_str())
        .map_err(|_| TeamcityError::HeaderError { name: CSRF_HEADER })
}
