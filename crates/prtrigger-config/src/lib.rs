//! Config module.

mod policy;

use std::{env, str::FromStr};

pub use policy::{ApprovalPolicy, PolicyError};

/// Build configurations queued for each ready pull request.
pub const DEFAULT_BUILD_TYPE_IDS: &[&str] = &[
    "Tests_Linux",
    "Tests_Windows",
    "Tests_MacOS",
    "Perf_Linux",
];

/// Comment attached to every queued build.
pub const DEFAULT_BUILD_COMMENT: &str = "Triggered by prtrigger after pull request review";

/// Number of recent builds inspected before queueing.
pub const BUILD_HISTORY_COUNT: u32 = 9;

#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// GitHub options.
    pub github: ApiGitHubConfig,
    /// TeamCity options.
    pub teamcity: ApiTeamcityConfig,
}

#[derive(Debug, Clone)]
pub struct ApiGitHubConfig {
    /// GitHub API connect timeout (in milliseconds).
    pub connect_timeout: u64,
    /// GitHub API root URL.
    pub root_url: String,
    /// GitHub API token.
    pub token: String,
}

#[derive(Debug, Clone)]
pub struct ApiTeamcityConfig {
    /// TeamCity connect timeout (in milliseconds).
    pub connect_timeout: u64,
    /// TeamCity server root URL.
    pub root_url: String,
    /// TeamCity bearer token.
    pub token: String,
    /// Build configuration identifiers to queue.
    pub build_type_ids: Vec<String>,
    /// Comment attached to queued builds.
    pub build_comment: String,
    /// Maximum count of builds fetched when looking for a previous success.
    pub history_count: u32,
}

#[derive(Debug, Clone)]
pub struct ContextConfig {
    /// Repository path, `owner/name`.
    pub repository: String,
    /// Path to the triggering event payload.
    pub event_path: String,
    /// Pull request number override, as given (empty when unset).
    pub pull_number: String,
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Use bunyan logging.
    pub use_bunyan: bool,
}

/// Trigger configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// API options.
    pub api: ApiConfig,
    /// Triggering context.
    pub context: ContextConfig,
    /// Approval policy.
    pub approval_policy: ApprovalPolicy,
    /// Logging options.
    pub logging: LoggingConfig,
    /// App version
    pub version: String,
}

impl Config {
    /// Create configuration from environment.
    pub fn from_env(version: String) -> Result<Config, PolicyError> {
        let connect_timeout = env_to_u64("INPUT_CONNECT_TIMEOUT", 5000);

        Ok(Config {
            api: ApiConfig {
                github: ApiGitHubConfig {
                    connect_timeout,
                    root_url: env_to_str("GITHUB_API_URL", "https://api.github.com"),
                    token: env_to_str("INPUT_TOKEN", ""),
                },
                teamcity: ApiTeamcityConfig {
                    connect_timeout,
                    root_url: env_to_str("INPUT_TEAMCITY_URL", "http://localhost:8111"),
                    token: env_to_str("INPUT_TEAMCITY", ""),
                    build_type_ids: env_to_list("INPUT_BUILD_TYPES", DEFAULT_BUILD_TYPE_IDS),
                    build_comment: env_to_str("INPUT_BUILD_COMMENT", DEFAULT_BUILD_COMMENT),
                    history_count: BUILD_HISTORY_COUNT,
                },
            },
            context: ContextConfig {
                repository: env_to_str("GITHUB_REPOSITORY", ""),
                event_path: env_to_str("GITHUB_EVENT_PATH", ""),
                pull_number: env_to_str("INPUT_PULL_NUMBER", "").trim().to_string(),
            },
            approval_policy: ApprovalPolicy::from_str(&env_to_str("INPUT_APPROVAL_POLICY", ""))?,
            logging: LoggingConfig {
                use_bunyan: env_to_bool("INPUT_LOGGING_USE_BUNYAN", false),
            },
            version,
        })
    }

    pub fn from_env_no_version() -> Result<Config, PolicyError> {
        Self::from_env("0.0.0".into())
    }
}

fn env_to_u64(name: &str, default: u64) -> u64 {
    env::var(name)
        .map(|e| e.trim().parse().unwrap_or(default))
        .unwrap_or(default)
}

fn env_to_bool(name: &str, default: bool) -> bool {
    env::var(name)
        .map(|e| parse_bool(&e).unwrap_or(default))
        .unwrap_or(default)
}

fn env_to_str(name: &str, default: &str) -> String {
    env::var(name)
        .ok()
        .filter(|e| !e.is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn env_to_list(name: &str, default: &[&str]) -> Vec<String> {
    env::var(name)
        .ok()
        .map(|e| parse_list(&e))
        .filter(|l| !l.is_empty())
        .unwrap_or_else(|| default.iter().map(|s| s.to_string()).collect())
}

fn parse_bool(value: &str) -> Option<bool> {
    match &value.trim().to_lowercase()[..] {
        "" => None,
        "1" | "true" | "yes" => Some(true),
        _ => Some(false),
    }
}

fn parse_list(value: &str) -> Vec<String> {
    value
        .split([',', '\n'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
