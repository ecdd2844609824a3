//! Commands run by the `caffa-appinfo` binary

use crate::cli::Commands;
use crate::config::Settings;
use crate::error::Result;
use crate::format::app_info_line;
use crate::rpc::{AppClient, RpcServer};
use crate::types::AppInfo;
use tracing::{debug, info};

/// Query the app info and render the line logged by the `info` command.
///
/// Failures of the remote call are returned as they are, never replaced by
/// an empty or default name.
pub async fn describe_app(client: &mut AppClient) -> Result<String> {
    let info = client.app_info().await?;
    debug!(
        "{} full version {}, capabilities: {:?}",
        info.name,
        info.version_string(),
        info.capabilities()
    );
    Ok(app_info_line(&info.to_string()))
}

/// Run one command against the configured target
pub async fn run(command: Commands, settings: Settings) -> Result<()> {
    match command {
        Commands::Info => {
            let mut client = AppClient::connect_lazy(&settings.rpc)?;
            let line = describe_app(&mut client).await?;
            info!("{}", line);
        }
        Commands::Ping => {
            let mut client = AppClient::connect_lazy(&settings.rpc)?;
            client.ping().await?;
            info!("Server at {} answered ping", settings.rpc);
        }
        Commands::Quit => {
            let mut client = AppClient::connect_lazy(&settings.rpc)?;
            client.quit().await?;
            info!("Server at {} is shutting down", settings.rpc);
        }
        Commands::Serve => {
            info!("Serving {}", settings.app.description);
            let server = RpcServer::new(settings.rpc, AppInfo::from(&settings.app));
            server.start().await?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConnectionTarget;
    use crate::error::AppError;
    use crate::types::AppCapability;
    use std::sync::Arc;
    use tokio::net::TcpListener;
    use tokio::sync::Notify;
    use tokio::task::JoinHandle;

    fn caffa() -> AppInfo {
        AppInfo {
            name: "Caffa".to_string(),
            major_version: 2,
            minor_version: 0,
            patch_version: 3,
            app_type: AppCapability::Server.bit(),
        }
    }

    async fn spawn_server(
        info: AppInfo,
    ) -> (ConnectionTarget, Arc<Notify>, JoinHandle<Result<()>>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        let target = ConnectionTarget::new("127.0.0.1", port);

        let server = RpcServer::new(target.clone(), info);
        let shutdown = server.shutdown_handle();
        let handle = tokio::spawn(server.serve_with_listener(listener));
        (target, shutdown, handle)
    }

    /// A port that was just free, nothing listens on it
    async fn unreachable_target() -> ConnectionTarget {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);
        ConnectionTarget::new("127.0.0.1", port)
    }

    #[tokio::test]
    async fn test_describe_app_end_to_end() {
        let (target, shutdown, handle) = spawn_server(caffa()).await;

        let mut client = AppClient::connect_lazy(&target).unwrap();
        let line = describe_app(&mut client).await.unwrap();
        assert_eq!(line, "Application Name and Version: Caffa version 2.0");

        drop(client);
        shutdown.notify_one();
        handle.await.unwrap().unwrap();
    }

    #[tokio::test]
    async fn test_app_info_is_fresh_per_call() {
        let (target, shutdown, handle) = spawn_server(caffa()).await;

        let mut client = AppClient::connect_lazy(&target).unwrap();
        let first = client.app_info().await.unwrap();
        let second = client.app_info().await.unwrap();
        assert_eq!(first, caffa());
        assert_eq!(first, second);

        drop(client);
        shutdown.notify_one();
        handle.await.unwrap().unwrap();
    }

    #[tokio::test]
    async fn test_degenerate_reply() {
        let (target, shutdown, handle) = spawn_server(AppInfo::default()).await;

        let mut client = AppClient::connect_lazy(&target).unwrap();
        let line = describe_app(&mut client).await.unwrap();
        assert_eq!(line, "Application Name and Version:  version 0.0");

        drop(client);
        shutdown.notify_one();
        handle.await.unwrap().unwrap();
    }

    #[tokio::test]
    async fn test_unreachable_target_propagates_error() {
        let target = unreachable_target().await;

        let mut client = AppClient::connect_lazy(&target).unwrap();
        let result = describe_app(&mut client).await;
        match result {
            Err(AppError::Status(_)) | Err(AppError::Transport(_)) => {}
            Err(other) => panic!("Unexpected error: {other}"),
            Ok(line) => panic!("Expected a failure, got {line:?}"),
        }
    }

    #[tokio::test]
    async fn test_ping_and_quit() {
        let (target, _shutdown, handle) = spawn_server(caffa()).await;

        let mut client = AppClient::connect_lazy(&target).unwrap();
        client.ping().await.unwrap();
        client.quit().await.unwrap();
        drop(client);

        let result = tokio::time::timeout(std::time::Duration::from_secs(5), handle)
            .await
            .expect("server should stop after quit")
            .unwrap();
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_run_info_fails_without_server() {
        let settings = Settings {
            rpc: unreachable_target().await,
            ..Settings::default()
        };
        assert!(run(Commands::Info, settings).await.is_err());
    }

    #[tokio::test]
    async fn test_run_info_and_quit() {
        let (target, _shutdown, handle) = spawn_server(caffa()).await;
        let settings = Settings {
            rpc: target,
            ..Settings::default()
        };

        run(Commands::Info, settings.clone()).await.unwrap();
        run(Commands::Ping, settings.clone()).await.unwrap();
        run(Commands::Quit, settings).await.unwrap();

        handle.await.unwrap().unwrap();
    }
}
