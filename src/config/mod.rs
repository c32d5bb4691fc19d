//! Runtime configuration, read from the process environment.
//!
//! Only the API token is required. Repository coordinates and the committer
//! identity fall back to the values the quiz site has always used.

use crate::models::commit::Committer;
use thiserror::Error;
use url::Url;

pub const TOKEN_VAR: &str = "GITHUB_TOKEN";
pub const API_URL_VAR: &str = "GITHUB_API_URL";
pub const OWNER_VAR: &str = "RESULTS_REPO_OWNER";
pub const REPO_VAR: &str = "RESULTS_REPO_NAME";
pub const BRANCH_VAR: &str = "RESULTS_BRANCH";
pub const COMMITTER_NAME_VAR: &str = "RESULTS_COMMITTER_NAME";
pub const COMMITTER_EMAIL_VAR: &str = "RESULTS_COMMITTER_EMAIL";

const DEFAULT_API_URL: &str = "https://api.github.com";
const DEFAULT_OWNER: &str = "dustmana8-byte";
const DEFAULT_REPO: &str = "Auralis";
const DEFAULT_BRANCH: &str = "main";
const DEFAULT_COMMITTER_NAME: &str = "Results Bot";
const DEFAULT_COMMITTER_EMAIL: &str = "noreply@example.com";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing GITHUB_TOKEN")]
    MissingToken,

    #[error("bad GITHUB_API_URL: {0}")]
    BadApiUrl(#[from] url::ParseError),
}

/// Everything the remote store needs to write a result.
#[derive(Clone)]
pub struct Config {
    pub token: String,
    pub api_url: Url,
    pub owner: String,
    pub repo: String,
    pub branch: String,
    pub committer: Committer,
}

// Keeps the token out of logs.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("token", &"<redacted>")
            .field("api_url", &self.api_url.as_str())
            .field("owner", &self.owner)
            .field("repo", &self.repo)
            .field("branch", &self.branch)
            .field("committer", &self.committer)
            .finish()
    }
}

impl Config {
    /// Load from the process environment.
    pub fn from_env() -> Result<Config, ConfigError> {
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from any key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let or_default = |key: &str, default: &str| get(key).unwrap_or_else(|| default.to_string());

        let token = get(TOKEN_VAR).ok_or(ConfigError::MissingToken)?;
        let api_url = Url::parse(&or_default(API_URL_VAR, DEFAULT_API_URL))?;

        Ok(Config {
            token,
            api_url,
            owner: or_default(OWNER_VAR, DEFAULT_OWNER),
            repo: or_default(REPO_VAR, DEFAULT_REPO),
            branch: or_default(BRANCH_VAR, DEFAULT_BRANCH),
            committer: Committer {
                name: or_default(COMMITTER_NAME_VAR, DEFAULT_COMMITTER_NAME),
                email: or_default(COMMITTER_EMAIL_VAR, DEFAULT_COMMITTER_EMAIL),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let env: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn test_missing_token_is_an_error() {
        assert!(matches!(load(&[]), Err(ConfigError::MissingToken)));
    }

    #[test]
    fn test_blank_token_counts_as_missing() {
        assert!(matches!(load(&[(TOKEN_VAR, "  ")]), Err(ConfigError::MissingToken)));
    }

    #[test]
    fn test_defaults_apply() {
        let config = load(&[(TOKEN_VAR, "t0k3n")]).unwrap();
        assert_eq!(config.token, "t0k3n");
        assert_eq!(config.api_url.as_str(), "https://api.github.com/");
        assert_eq!(config.owner, DEFAULT_OWNER);
        assert_eq!(config.repo, DEFAULT_REPO);
        assert_eq!(config.branch, "main");
        assert_eq!(config.committer.name, "Results Bot");
        assert_eq!(config.committer.email, "noreply@example.com");
    }

    #[test]
    fn test_overrides_apply() {
        let config = load(&[
            (TOKEN_VAR, "t0k3n"),
            (API_URL_VAR, "https://ghe.example.com/api/v3"),
            (OWNER_VAR, "acme"),
            (REPO_VAR, "quiz"),
            (BRANCH_VAR, "results"),
            (COMMITTER_NAME_VAR, "Quiz Bot"),
            (COMMITTER_EMAIL_VAR, "bot@acme.test"),
        ])
        .unwrap();
        assert_eq!(config.api_url.as_str(), "https://ghe.example.com/api/v3");
        assert_eq!(config.owner, "acme");
        assert_eq!(config.repo, "quiz");
        assert_eq!(config.branch, "results");
        assert_eq!(config.committer.name, "Quiz Bot");
        assert_eq!(config.committer.email, "bot@acme.test");
    }

    #[test]
    fn test_bad_api_url() {
        let err = load(&[(TOKEN_VAR, "t0k3n"), (API_URL_VAR, "not a url")]).unwrap_err();
        assert!(matches!(err, ConfigError::BadApiUrl(_)));
        assert!(err.to_string().starts_with("bad GITHUB_API_URL"));
    }

    #[test]
    fn test_debug_redacts_token() {
        let config = load(&[(TOKEN_VAR, "t0k3n")]).unwrap();
        assert!(!format!("{config:?}").contains("t0k3n"));
    }
}
