pub mod comms {
    tonic::include_proto!("helloworld");
}

pub mod shared;
