use chrono::Utc;
use quiz_results::config::Config;
use quiz_results::handler::save_result;
use quiz_results::init_logging;
use quiz_results::store::GithubContents;
use vercel_runtime::{run, Body, Error, Request, Response};

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_logging();
    run(handler).await
}

/// POST /api/save_result — Store one quiz result as a JSON file in the results repository.
///
/// Configuration is read per invocation so a rotated token is picked up
/// without a redeploy.
pub async fn handler(req: Request) -> Result<Response<Body>, Error> {
    let now = Utc::now();
    let store = Config::from_env().map(GithubContents::new);

    save_result(&req, store, now).await
}
