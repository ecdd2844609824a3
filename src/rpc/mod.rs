//! gRPC plumbing for the Caffa `App` service
//!
//! The client side wraps a lazily connected tonic channel. The server side is a
//! reference implementation of the same service used for local testing.

pub mod client;
pub mod messages;
pub mod server;
pub mod service;

pub use client::AppClient;
pub use server::RpcServer;

// Include the generated service code
pub mod app {
    include!(concat!(env!("OUT_DIR"), "/caffa.rpc.App.rs"));
}
