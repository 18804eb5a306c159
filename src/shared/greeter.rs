use tonic::{Request, Response, Status};

use crate::comms::greeter_server::{Greeter, GreeterServer};
use crate::comms::{HelloReply, HelloRequest};

#[derive(Debug, Default)]
pub struct GreeterService {}

impl GreeterService {
    pub fn into_server(self) -> GreeterServer<Self> {
        GreeterServer::new(self)
    }
}

#[tonic::async_trait]
impl Greeter for GreeterService {
    async fn say_hello(&self, req: Request<HelloRequest>) -> Result<Response<HelloReply>, Status> {
        tracing::info!(remote = ?req.remote_addr(), "SayHello");

        let res = HelloReply {
            message: format!("Hello {}!", req.into_inner().name),
        };
        Ok(Response::new(res))
    }

    async fn say_bye(&self, req: Request<HelloRequest>) -> Result<Response<HelloReply>, Status> {
        tracing::info!(remote = ?req.remote_addr(), "SayBye");

        let res = HelloReply {
            message: format!("Goodbye {}!", req.into_inner().name),
        };
        Ok(Response::new(res))
    }
}
