use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::header::{ACCEPT, USER_AGENT};
use reqwest::Response;
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use crate::config::Config;
use crate::models::commit::{Committer, FileWrite};
use crate::store::{ResultStore, StoreError};

const GITHUB_ACCEPT: &str = "application/vnd.github+json";
const API_VERSION_HEADER: &str = "X-GitHub-Api-Version";
const API_VERSION: &str = "2022-11-28";
const CLIENT_NAME: &str = concat!("quiz-results/", env!("CARGO_PKG_VERSION"));

/// Payload of `PUT /repos/{owner}/{repo}/contents/{path}`.
#[derive(Debug, Serialize)]
struct PutContents<'a> {
    message: &'a str,
    /// Base64 of the file bytes.
    content: String,
    branch: &'a str,
    committer: &'a Committer,
}

/// Error body returned by the GitHub REST API.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// [`ResultStore`] backed by the GitHub "create or update file contents" endpoint.
#[derive(Debug)]
pub struct GithubContents {
    config: Config,
    client: reqwest::Client,
}

impl GithubContents {
    pub fn new(config: Config) -> Self {
        GithubContents::with_client(config, reqwest::Client::new())
    }

    pub fn with_client(config: Config, client: reqwest::Client) -> Self {
        GithubContents { config, client }
    }

    /// `{api}/repos/{owner}/{repo}/contents/{path}`, each segment percent-encoded.
    fn contents_url(&self, path: &str) -> Result<Url, StoreError> {
        let mut url = self.config.api_url.clone();
        url.path_segments_mut()
            .map_err(|_| StoreError::BaseUrl(self.config.api_url.to_string()))?
            .pop_if_empty()
            .extend([
                "repos",
                self.config.owner.as_str(),
                self.config.repo.as_str(),
                "contents",
            ])
            .extend(path.split('/'));
        Ok(url)
    }

    fn body<'a>(&'a self, file: &'a FileWrite) -> PutContents<'a> {
        PutContents {
            message: &file.message,
            content: STANDARD.encode(file.content.as_bytes()),
            branch: &self.config.branch,
            committer: &self.config.committer,
        }
    }

    async fn handle_response(response: Response) -> Result<(), StoreError> {
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let text = response.text().await?;
        Err(StoreError::Api {
            status: status.as_u16(),
            message: api_error_message(&text),
        })
    }
}

impl ResultStore for GithubContents {
    async fn write_file(&self, file: FileWrite) -> Result<(), StoreError> {
        let url = self.contents_url(&file.path)?;
        debug!(%url, branch = %self.config.branch, "writing file");

        let response = self
            .client
            .put(url)
            .bearer_auth(&self.config.token)
            .header(ACCEPT, GITHUB_ACCEPT)
            .header(USER_AGENT, CLIENT_NAME)
            .header(API_VERSION_HEADER, API_VERSION)
            .json(&self.body(&file))
            .send()
            .await?;

        GithubContents::handle_response(response).await
    }
}

/// The API's `message` field, or the raw body when it is not the usual JSON shape.
fn api_error_message(body: &str) -> String {
    match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(err) => err.message,
        Err(_) if body.trim().is_empty() => "empty response from API".to_string(),
        Err(_) => body.trim().to_string(),
    }
}
