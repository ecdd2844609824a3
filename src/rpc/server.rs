//! RPC server for the reference `App` service

use crate::config::ConnectionTarget;
use crate::error::{AppError, Result};
use crate::rpc::app::app_server::AppServer;
use crate::rpc::service::AppServiceImpl;
use crate::types::AppInfo;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Notify;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::transport::Server;
use tracing::{error, info};

/// RPC server serving one `AppInfo` until a client calls `Quit`
pub struct RpcServer {
    target: ConnectionTarget,
    info: AppInfo,
    shutdown: Arc<Notify>,
}

impl RpcServer {
    pub fn new(target: ConnectionTarget, info: AppInfo) -> Self {
        Self {
            target,
            info,
            shutdown: Arc::new(Notify::new()),
        }
    }

    /// Handle that stops the server when notified, same as a `Quit` call
    pub fn shutdown_handle(&self) -> Arc<Notify> {
        self.shutdown.clone()
    }

    /// Bind the configured address and serve until shutdown
    pub async fn start(self) -> Result<()> {
        let addr = self.target.to_string();
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|source| AppError::Bind { addr, source })?;
        self.serve_with_listener(listener).await
    }

    /// Serve on an already bound listener until shutdown
    pub async fn serve_with_listener(self, listener: TcpListener) -> Result<()> {
        let local_addr = listener.local_addr().map_err(|source| AppError::Bind {
            addr: self.target.to_string(),
            source,
        })?;
        info!("Starting RPC server for {} on {}", self.info, local_addr);

        let shutdown = self.shutdown.clone();
        let service = AppServiceImpl::new(self.info, self.shutdown);

        let server = Server::builder()
            .add_service(AppServer::new(service))
            .serve_with_incoming_shutdown(TcpListenerStream::new(listener), async move {
                shutdown.notified().await
            });

        if let Err(e) = server.await {
            error!("RPC server error: {}", e);
            return Err(e.into());
        }

        info!("RPC server on {} stopped", local_addr);
        Ok(())
    }
}
