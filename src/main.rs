use std::fs::File;
use std::sync::Arc;

use clap::Parser;
use env_logger::Target;
use log::info;

use repo_browser::{DEFAULT_API_ENDPOINT, RestFetcher, StdResult, run};

/// Command line arguments for the repository browser
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// Base URL of the repository API
    #[arg(short, long, env = "REPOSITORY_API_URL", default_value = DEFAULT_API_ENDPOINT)]
    api_url: String,

    /// File receiving diagnostic logs
    #[arg(short, long, env = "REPOSITORY_LOG_FILE", default_value = "repo-browser.log")]
    log_file: String,
}

#[tokio::main]
async fn main() -> StdResult<()> {
    let args = Args::parse();
    init_logger(&args.log_file)?;
    info!("Starting repository browser against {}", args.api_url);

    let fetcher = Arc::new(RestFetcher::try_new(&args.api_url)?);
    run(fetcher).await?;
    info!("Repository browser exited");

    Ok(())
}

/// Logs go to a file: the terminal is in raw mode while the UI runs.
fn init_logger(path: &str) -> StdResult<()> {
    let file = File::create(path)?;
    env_logger::Builder::from_default_env()
        .target(Target::Pipe(Box::new(file)))
        .init();

    Ok(())
}
