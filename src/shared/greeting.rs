use async_trait::async_trait;
use tonic::transport::Channel;

use super::error::{ClientError, Result};
use crate::comms::greeter_client::GreeterClient;
use crate::comms::HelloRequest;

/// The two remote operations the client shell drives.
///
/// `GreeterClient<Channel>` is the production implementation; anything else
/// that can answer a name with a message can stand in for it.
#[async_trait]
pub trait Greeting {
    async fn say_hello(&mut self, name: String) -> Result<String>;

    async fn say_bye(&mut self, name: String) -> Result<String>;
}

#[async_trait]
impl Greeting for GreeterClient<Channel> {
    async fn say_hello(&mut self, name: String) -> Result<String> {
        let req = tonic::Request::new(HelloRequest { name });

        let res = GreeterClient::say_hello(self, req)
            .await
            .map_err(|source| ClientError::Call {
                method: "SayHello",
                source,
            })?;
        Ok(res.into_inner().message)
    }

    async fn say_bye(&mut self, name: String) -> Result<String> {
        let req = tonic::Request::new(HelloRequest { name });

        let res = GreeterClient::say_bye(self, req)
            .await
            .map_err(|source| ClientError::Call {
                method: "SayBye",
                source,
            })?;
        Ok(res.into_inner().message)
    }
}
