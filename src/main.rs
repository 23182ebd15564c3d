mod app;
mod config;
mod events;
mod state;
mod store;
mod ui;

use anyhow::Result;
use app::App;
use clap::{crate_version, App as Cli, Arg};
use config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    let matches = Cli::new("taskflow-tui")
        .version(crate_version!())
        .about("A terminal user interface for TaskFlow project tracking")
        .arg(
            Arg::with_name("url")
                .long("url")
                .value_name("URL")
                .help("Base endpoint URL of the remote store")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("key")
                .long("key")
                .value_name("KEY")
                .help("Access key for the remote store")
                .takes_value(true),
        )
        .get_matches();

    let config = Config::resolve(matches.value_of("url"), matches.value_of("key"));
    App::start(config).await
}
