//! Console front end: fetch the roster once and print it grouped.

mod logging;
mod render;

use std::process::ExitCode;
use std::sync::Arc;

use roster_engine::{FetchError, FetchSettings, ReqwestFetcher, RosterPublisher};
use roster_logging::{roster_error, roster_info};

#[tokio::main]
async fn main() -> ExitCode {
    logging::initialize();

    // An optional first argument overrides the service base URL, which is
    // how integration setups point the app at a local stand-in.
    let base_url = std::env::args().nth(1);
    match run(base_url).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            roster_error!("Roster refresh failed: {}", err);
            ExitCode::FAILURE
        }
    }
}

async fn run(base_url: Option<String>) -> Result<(), FetchError> {
    let mut settings = FetchSettings::default();
    if let Some(base_url) = base_url {
        settings.base_url = base_url;
    }
    roster_info!(
        "Fetching roster from {}{}",
        settings.base_url,
        settings.resource_path
    );

    let fetcher = ReqwestFetcher::new(settings)?;
    let publisher = RosterPublisher::new(Arc::new(fetcher));
    let mut observer = publisher.observe();

    publisher.refresh().await?;

    if let Some(snapshot) = observer.changed().await {
        print!("{}", render::format_roster(&snapshot));
    }
    Ok(())
}
