extern crate greeter_lib;
use greeter_lib::shared::config::ClientConfig;
use greeter_lib::shared::{session, telemetry};

use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init();
    let config = ClientConfig::parse();

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    session::run(&config, stdin.lock(), stdout.lock()).await?;

    Ok(())
}
