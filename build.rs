use tonic_build::manual::{Builder, Method, Service};

fn unary(name: &str, route: &str, input: &str, output: &str) -> Method {
    Method::builder()
        .name(name)
        .route_name(route)
        .input_type(input)
        .output_type(output)
        .codec_path("tonic::codec::ProstCodec")
        .build()
}

fn main() {
    // Messages are declared in src/rpc/messages.rs, only the service glue is generated
    let app_service = Service::builder()
        .name("App")
        .package("caffa.rpc")
        .method(unary(
            "get_app_info",
            "GetAppInfo",
            "crate::rpc::messages::NullMessage",
            "crate::rpc::messages::AppInfoReply",
        ))
        .method(unary(
            "ping",
            "Ping",
            "crate::rpc::messages::NullMessage",
            "crate::rpc::messages::NullMessage",
        ))
        .method(unary(
            "quit",
            "Quit",
            "crate::rpc::messages::NullMessage",
            "crate::rpc::messages::NullMessage",
        ))
        .build();

    Builder::new().compile(&[app_service]);

    println!("cargo:rerun-if-changed=build.rs");
}
