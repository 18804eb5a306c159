use std::net::SocketAddr;
use std::time::Duration;

use clap::Parser;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:50051";
pub const DEFAULT_LISTEN: &str = "127.0.0.1:50051";
pub const DEFAULT_CONNECT_TIMEOUT_MS: u64 = 5000;

/// Asks a Greeter service for a hello and a goodbye.
#[derive(Clone, Debug, Parser)]
#[command(name = "client")]
pub struct ClientConfig {
    /// Greeter service to call (plain-text HTTP/2)
    #[arg(long, env = "GREETER_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Upper bound on establishing the channel
    #[arg(
        long = "connect-timeout-ms",
        env = "GREETER_CONNECT_TIMEOUT_MS",
        default_value = "5000",
        value_parser = parse_millis
    )]
    pub connect_timeout: Duration,

    /// Per-call deadline; calls wait indefinitely when unset
    #[arg(
        long = "request-timeout-ms",
        env = "GREETER_REQUEST_TIMEOUT_MS",
        value_parser = parse_millis
    )]
    pub request_timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            connect_timeout: Duration::from_millis(DEFAULT_CONNECT_TIMEOUT_MS),
            request_timeout: None,
        }
    }
}

/// Serves the Greeter service.
#[derive(Clone, Debug, Parser)]
#[command(name = "server")]
pub struct ServerConfig {
    /// Address to listen on
    #[arg(long, env = "GREETER_LISTEN", default_value = DEFAULT_LISTEN)]
    pub listen: SocketAddr,
}

fn parse_millis(s: &str) -> Result<Duration, std::num::ParseIntError> {
    s.parse().map(Duration::from_millis)
}
