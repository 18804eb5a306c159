extern crate greeter_lib;
use greeter_lib::shared::config::ServerConfig;
use greeter_lib::shared::greeter::GreeterService;
use greeter_lib::shared::telemetry;

use anyhow::Context;
use clap::Parser;
use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::transport::Server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init();
    let config = ServerConfig::parse();

    let listener = TcpListener::bind(config.listen)
        .await
        .with_context(|| format!("binding {}", config.listen))?;
    tracing::info!(addr = %listener.local_addr()?, "Greeter listening");

    Server::builder()
        .add_service(GreeterService::default().into_server())
        .serve_with_incoming_shutdown(TcpListenerStream::new(listener), async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("shutting down");
        })
        .await?;

    Ok(())
}
