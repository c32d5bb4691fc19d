use quiz_results::config::Config;
use quiz_results::{init_logging, version};
use serde_json::json;
use vercel_runtime::{run, Body, Error, Request, Response, StatusCode};

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_logging();
    run(handler).await
}

/// GET /api/health — Liveness plus whether the store configuration loads.
pub async fn handler(_req: Request) -> Result<Response<Body>, Error> {
    let payload = json!({
        "status": "ok",
        "version": version(),
        "configured": Config::from_env().is_ok(),
    });

    Ok(Response::builder()
        .status(StatusCode::OK)
        .header("Content-Type", "application/json")
        .body(Body::Text(payload.to_string()))?)
}
