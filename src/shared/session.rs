use std::io::{self, BufRead, Write};

use tokio::time::timeout;
use tonic::transport::{Channel, Endpoint};

use super::config::ClientConfig;
use super::error::{ClientError, Result};
use super::greeting::Greeting;
use crate::comms::greeter_client::GreeterClient;

pub const PROMPT: &str = "What is your name? ";
pub const RECEIVED_LABEL: &str = "Greeter client received: ";

/// Prompts on `output` and reads one line from `input`, minus its line terminator.
///
/// EOF reads as the empty name.
pub fn read_name<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<String> {
    writeln!(output, "{}", PROMPT)?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;

    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(line)
}

/// Opens a plain-text channel to `config.endpoint` and binds a stub to it.
pub async fn connect(config: &ClientConfig) -> Result<GreeterClient<Channel>> {
    let mut endpoint = Endpoint::from_shared(config.endpoint.clone()).map_err(|e| {
        ClientError::InvalidEndpoint {
            endpoint: config.endpoint.clone(),
            reason: e.to_string(),
        }
    })?;
    if let Some(deadline) = config.request_timeout {
        endpoint = endpoint.timeout(deadline);
    }

    tracing::info!(endpoint = %config.endpoint, "connecting");

    let channel = match timeout(config.connect_timeout, endpoint.connect()).await {
        Ok(Ok(channel)) => channel,
        Ok(Err(source)) => {
            tracing::warn!(endpoint = %config.endpoint, error = %source, "connect failed");
            return Err(ClientError::Connect {
                endpoint: config.endpoint.clone(),
                source,
            });
        }
        Err(_) => {
            tracing::warn!(endpoint = %config.endpoint, "connect timed out");
            return Err(ClientError::ConnectTimeout {
                endpoint: config.endpoint.clone(),
                timeout: config.connect_timeout,
            });
        }
    };

    tracing::info!(endpoint = %config.endpoint, "connected");
    Ok(GreeterClient::new(channel))
}

/// Calls `SayHello` then `SayBye` with `name`, writing each reply as it arrives.
///
/// Stops at the first failed call.
pub async fn greet<G, W>(stub: &mut G, name: &str, output: &mut W) -> Result<()>
where
    G: Greeting + Send + ?Sized,
    W: Write,
{
    tracing::debug!(user = name, "sending SayHello");
    let message = stub.say_hello(name.to_owned()).await.map_err(log_failure)?;
    writeln!(output, "{}{}", RECEIVED_LABEL, message)?;

    tracing::debug!(user = name, "sending SayBye");
    let message = stub.say_bye(name.to_owned()).await.map_err(log_failure)?;
    writeln!(output, "{}{}", RECEIVED_LABEL, message)?;

    output.flush()?;
    Ok(())
}

/// The whole client shell: prompt, connect, greet.
pub async fn run<R, W>(config: &ClientConfig, mut input: R, mut output: W) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    let name = read_name(&mut input, &mut output)?;
    let mut stub = connect(config).await?;

    greet(&mut stub, &name, &mut output).await
}

fn log_failure(err: ClientError) -> ClientError {
    tracing::warn!(error = %err, code = ?err.code(), "call failed");
    err
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::io::Cursor;
    use tonic::{Code, Status};

    #[derive(Default)]
    struct FakeGreeter {
        calls: Vec<(&'static str, String)>,
        fail_hello: bool,
        fail_bye: bool,
    }

    #[async_trait]
    impl Greeting for FakeGreeter {
        async fn say_hello(&mut self, name: String) -> Result<String> {
            self.calls.push(("SayHello", name.clone()));
            if self.fail_hello {
                return Err(ClientError::Call {
                    method: "SayHello",
                    source: Status::unavailable("down"),
                });
            }
            Ok(format!("hi {}", name))
        }

        async fn say_bye(&mut self, name: String) -> Result<String> {
            self.calls.push(("SayBye", name.clone()));
            if self.fail_bye {
                return Err(ClientError::Call {
                    method: "SayBye",
                    source: Status::internal("boom"),
                });
            }
            Ok(format!("bye {}", name))
        }
    }

    #[test]
    fn read_name_prompts_and_strips_newline() {
        let mut input = Cursor::new("Alice\n");
        let mut output = Vec::new();

        let name = read_name(&mut input, &mut output).unwrap();

        assert_eq!(name, "Alice");
        assert_eq!(String::from_utf8(output).unwrap(), "What is your name? \n");
    }

    #[test]
    fn read_name_strips_crlf_only() {
        let mut input = Cursor::new("  Bob \r\nignored\n");

        let name = read_name(&mut input, &mut Vec::new()).unwrap();

        assert_eq!(name, "  Bob ");
    }

    #[test]
    fn read_name_accepts_empty_line_and_eof() {
        assert_eq!(read_name(&mut Cursor::new("\n"), &mut Vec::new()).unwrap(), "");
        assert_eq!(read_name(&mut Cursor::new(""), &mut Vec::new()).unwrap(), "");
    }

    #[tokio::test]
    async fn greet_calls_hello_then_bye_with_same_name() {
        let mut stub = FakeGreeter::default();
        let mut output = Vec::new();

        greet(&mut stub, "Alice", &mut output).await.unwrap();

        assert_eq!(
            stub.calls,
            vec![("SayHello", "Alice".to_owned()), ("SayBye", "Alice".to_owned())]
        );
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "Greeter client received: hi Alice\nGreeter client received: bye Alice\n"
        );
    }

    #[tokio::test]
    async fn failed_hello_skips_bye() {
        let mut stub = FakeGreeter {
            fail_hello: true,
            ..Default::default()
        };
        let mut output = Vec::new();

        let err = greet(&mut stub, "Alice", &mut output).await.unwrap_err();

        assert!(matches!(err, ClientError::Call { method: "SayHello", .. }));
        assert_eq!(err.code(), Some(Code::Unavailable));
        assert_eq!(stub.calls.len(), 1);
        assert!(output.is_empty());
    }

    #[tokio::test]
    async fn failed_bye_is_reported_after_hello_output() {
        let mut stub = FakeGreeter {
            fail_bye: true,
            ..Default::default()
        };
        let mut output = Vec::new();

        let err = greet(&mut stub, "Alice", &mut output).await.unwrap_err();

        assert!(matches!(err, ClientError::Call { method: "SayBye", .. }));
        assert_eq!(err.code(), Some(Code::Internal));
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "Greeter client received: hi Alice\n"
        );
    }

    #[tokio::test]
    async fn connect_rejects_malformed_endpoint() {
        let config = ClientConfig {
            endpoint: "http://bad host".to_owned(),
            ..Default::default()
        };

        let err = connect(&config).await.unwrap_err();

        assert!(matches!(err, ClientError::InvalidEndpoint { .. }));
    }
}
