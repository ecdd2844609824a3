//! Client and reference server for the Caffa `App` gRPC service.
//!
//! The client fetches the application name and version from a Caffa server
//! over a plaintext channel and renders it as `"<name> version <major>.<minor>"`.

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod rpc;
pub mod types;

pub use error::{AppError, Result};
