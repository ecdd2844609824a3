//! Protobuf messages of the `caffa.rpc.App` service
//!
//! Field tags follow the Caffa `App.proto` definitions so that the client can
//! talk to any Caffa server, not only the reference one in this crate.

/// Empty request and reply payload.
#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct NullMessage {}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AppInfoReply {
    #[prost(string, tag = "1")]
    pub name: ::prost::alloc::string::String,
    #[prost(int32, tag = "2")]
    pub major_version: i32,
    #[prost(int32, tag = "3")]
    pub minor_version: i32,
    #[prost(int32, tag = "4")]
    pub patch_version: i32,
    /// Bitmask of `AppCapability` values
    #[prost(uint32, tag = "5")]
    pub r#type: u32,
}
