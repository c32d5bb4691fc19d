//! Request handling for `POST /api/save_result`.
//!
//! Validates the submission, names the file and hands one write to the
//! configured [`ResultStore`]. Every failure is terminal for the request;
//! nothing is retried.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{error, info, warn};
use vercel_runtime::{Body, Error, Request, Response, StatusCode};

use crate::config::ConfigError;
use crate::models::commit::FileWrite;
use crate::models::submission::{SaveResponse, Submission};
use crate::naming::{commit_message, resolve_identifier, result_path, timestamp_segment};
use crate::store::{ResultStore, StoreError};

/// Why a submission was not stored. The display text is the response body.
#[derive(Error, Debug)]
pub enum SubmissionError {
    #[error("Method Not Allowed")]
    MethodNotAllowed,

    #[error("Server not configured ({0})")]
    NotConfigured(#[from] ConfigError),

    #[error("Invalid JSON")]
    InvalidJson(#[source] serde_json::Error),

    #[error("Missing result object")]
    MissingResult,

    #[error("Failed to encode result: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Failed to save result: {0}")]
    Store(#[from] StoreError),
}

impl SubmissionError {
    pub fn status(&self) -> StatusCode {
        match self {
            SubmissionError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            SubmissionError::InvalidJson(_) | SubmissionError::MissingResult => {
                StatusCode::BAD_REQUEST
            }
            SubmissionError::NotConfigured(_)
            | SubmissionError::Encode(_)
            | SubmissionError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Handle one submission.
///
/// `store` is `Err` when the process is missing its configuration; that is
/// reported as a 500 before the body is even parsed. `now` names the file.
pub async fn save_result<S: ResultStore>(
    req: &Request,
    store: Result<S, ConfigError>,
    now: DateTime<Utc>,
) -> Result<Response<Body>, Error> {
    match store_submission(req, store, now).await {
        Ok(saved) => json_response(StatusCode::OK, &saved),
        Err(err) => {
            match &err {
                SubmissionError::Store(source) => {
                    error!(status = ?source.status(), "failed to save result: {source}")
                }
                SubmissionError::NotConfigured(source) => {
                    error!("server not configured: {source}")
                }
                other => warn!(method = %req.method(), "rejected submission: {other}"),
            }
            text_response(err.status(), err.to_string())
        }
    }
}

async fn store_submission<S: ResultStore>(
    req: &Request,
    store: Result<S, ConfigError>,
    now: DateTime<Utc>,
) -> Result<SaveResponse, SubmissionError> {
    if *req.method() != http::Method::POST {
        return Err(SubmissionError::MethodNotAllowed);
    }

    let store = store?;

    let payload: Value =
        serde_json::from_slice(body_bytes(req.body())).map_err(SubmissionError::InvalidJson)?;
    let submission = Submission::from(payload);
    let result = submission.result().ok_or(SubmissionError::MissingResult)?;

    let identifier = resolve_identifier(submission.username.as_deref(), result);
    let timestamp = timestamp_segment(now);
    let path = result_path(now, &identifier);
    let content = serde_json::to_string_pretty(result).map_err(SubmissionError::Encode)?;

    store
        .write_file(FileWrite {
            path: path.clone(),
            content,
            message: commit_message(&identifier, &timestamp),
        })
        .await?;

    info!(%path, %identifier, "stored quiz result");
    Ok(SaveResponse::stored(path))
}

fn body_bytes(body: &Body) -> &[u8] {
    match body {
        Body::Empty => &[],
        Body::Text(text) => text.as_bytes(),
        Body::Binary(bytes) => bytes.as_slice(),
    }
}

fn json_response<T: Serialize>(status: StatusCode, payload: &T) -> Result<Response<Body>, Error> {
    Ok(Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .body(Body::Text(serde_json::to_string(payload)?))?)
}

fn text_response(status: StatusCode, message: String) -> Result<Response<Body>, Error> {
    Ok(Response::builder()
        .status(status)
        .header("Content-Type", "text/plain; charset=utf-8")
        .body(Body::Text(message))?)
}
