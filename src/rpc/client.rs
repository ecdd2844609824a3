//! Client for the Caffa `App` service

use crate::config::ConnectionTarget;
use crate::error::{AppError, Result};
use crate::rpc::app::app_client::AppClient as AppStub;
use crate::rpc::messages::NullMessage;
use crate::types::AppInfo;
use std::net::Ipv6Addr;
use tonic::transport::{Channel, Endpoint};
use tonic::Request;
use tracing::debug;

/// Client side of the `App` service over a plaintext channel.
///
/// Cloning is cheap, clones share the same underlying channel.
#[derive(Debug, Clone)]
pub struct AppClient {
    stub: AppStub<Channel>,
    target: ConnectionTarget,
}

impl AppClient {
    /// Create a client for `target` without connecting.
    ///
    /// The channel connects on the first call, so an unreachable target is
    /// reported by that call rather than here. Must be called from within a
    /// tokio runtime.
    pub fn connect_lazy(target: &ConnectionTarget) -> Result<Self> {
        let invalid = |reason: String| AppError::InvalidTarget {
            target: target.to_string(),
            reason,
        };
        let bare_host = target.bare_host();
        if bare_host.contains(':') && bare_host.parse::<Ipv6Addr>().is_err() {
            return Err(invalid("host is neither a name nor an address".to_string()));
        }
        let endpoint = Endpoint::from_shared(target.uri()).map_err(|e| invalid(e.to_string()))?;

        // The host must not smuggle in a path, port or userinfo of its own
        let uri = endpoint.uri();
        let host = uri.host().map(|h| h.trim_start_matches('[').trim_end_matches(']'));
        if host != Some(bare_host) {
            return Err(invalid(format!("host resolves to {:?}", uri.host())));
        }
        if uri.port_u16() != Some(target.port) {
            return Err(invalid(format!("port resolves to {:?}", uri.port_u16())));
        }
        if uri.path() != "/" || uri.query().is_some() {
            return Err(invalid(format!("unexpected path {}", uri.path())));
        }
        debug!("Created lazy channel to {}", target);

        Ok(Self {
            stub: AppStub::new(endpoint.connect_lazy()),
            target: target.clone(),
        })
    }

    pub fn target(&self) -> &ConnectionTarget {
        &self.target
    }

    /// Fetch the application name and version from the server
    pub async fn app_info(&mut self) -> Result<AppInfo> {
        debug!("Requesting app info from {}", self.target);
        let reply = self
            .stub
            .get_app_info(Request::new(NullMessage {}))
            .await?
            .into_inner();
        Ok(AppInfo::from(reply))
    }

    /// Check that the server answers
    pub async fn ping(&mut self) -> Result<()> {
        debug!("Pinging {}", self.target);
        self.stub.ping(Request::new(NullMessage {})).await?;
        Ok(())
    }

    /// Ask the server to shut down
    pub async fn quit(&mut self) -> Result<()> {
        debug!("Telling server at {} to quit", self.target);
        self.stub.quit(Request::new(NullMessage {})).await?;
        Ok(())
    }
}
