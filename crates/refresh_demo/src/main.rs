mod app;
mod config;
mod feed;
mod logging;
mod render;
mod surface;
mod worker;

use std::path::PathBuf;

use refresh_logging::refresh_info;

fn main() -> anyhow::Result<()> {
    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(config::CONFIG_FILENAME));
    let config = config::load(&path)?;
    logging::initialize(config.log_destination, config.verbose);
    refresh_info!("Demo configuration from {:?}: {:?}", path, config);

    app::run(config)
}
