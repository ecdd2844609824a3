//! Reference implementation of the `App` service

use crate::rpc::app::app_server::App;
use crate::rpc::messages::{AppInfoReply, NullMessage};
use crate::types::AppInfo;
use std::sync::Arc;
use tokio::sync::Notify;
use tonic::{Request, Response, Status};
use tracing::info;

/// Serves a fixed `AppInfo` and signals `shutdown` when a client asks to quit
pub struct AppServiceImpl {
    info: AppInfo,
    shutdown: Arc<Notify>,
}

impl AppServiceImpl {
    pub fn new(info: AppInfo, shutdown: Arc<Notify>) -> Self {
        Self { info, shutdown }
    }
}

#[tonic::async_trait]
impl App for AppServiceImpl {
    async fn get_app_info(
        &self,
        request: Request<NullMessage>,
    ) -> Result<Response<AppInfoReply>, Status> {
        info!(
            "Received app info request from {}",
            peer_label(request.remote_addr())
        );
        Ok(Response::new(AppInfoReply::from(&self.info)))
    }

    async fn ping(&self, request: Request<NullMessage>) -> Result<Response<NullMessage>, Status> {
        info!(
            "Received ping request from {}",
            peer_label(request.remote_addr())
        );
        Ok(Response::new(NullMessage {}))
    }

    async fn quit(&self, request: Request<NullMessage>) -> Result<Response<NullMessage>, Status> {
        info!(
            "Received quit request from {}",
            peer_label(request.remote_addr())
        );
        // The permit is kept until the server loop waits on it
        self.shutdown.notify_one();
        Ok(Response::new(NullMessage {}))
    }
}

fn peer_label(addr: Option<std::net::SocketAddr>) -> String {
    addr.map(|a| a.to_string())
        .unwrap_or_else(|| "unknown peer".to_string())
}
