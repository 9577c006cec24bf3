mod config;
mod describer;
mod github;
mod http;
mod llm;
mod logger;
mod prompt;

use anyhow::{Context, Result};
use config::Config;
use describer::{Describer, Outcome};
use http::ReqwestClient;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    logger::init()?;

    log::info!("Starting");
    let config = Config::load().await.context("Cannot load config file")?;

    let describer = Describer::new(&config, ReqwestClient::new())?;

    match describer
        .run()
        .await
        .context("Cannot describe the pull request")?
    {
        Outcome::Published {
            description,
            pull_request,
        } => {
            println!("Generated description:\n{}\n", description);
            println!(
                "Pull request #{} updated: {}",
                pull_request.number, pull_request.html_url
            );
        }
        Outcome::DryRun { description } => {
            println!("Generated description (not published):\n{}", description);
        }
    }

    Ok(())
}
