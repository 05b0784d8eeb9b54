//! HTTP server lifecycle.

use std::future::Future;
use std::net::SocketAddr;

use tokio::net::TcpListener;
use tracing::info;

use crate::api::{create_router, AppState};
use crate::config::Config;
use crate::error::Result;

/// How a call to [`serve`] ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServeOutcome {
    /// `APP_ENV=test`: the router was built but nothing was bound.
    Suppressed,
    /// The listener was bound at this address and has shut down.
    Stopped(SocketAddr),
}

/// Serve the API until `shutdown` resolves.
///
/// Under `APP_ENV=test` no listener is bound and the call returns at once.
pub async fn serve<F>(config: &Config, state: AppState, shutdown: F) -> Result<ServeOutcome>
where
    F: Future<Output = ()> + Send + 'static,
{
    let router = create_router(state);

    if config.is_test() {
        info!("APP_ENV=test, not binding a listener");
        return Ok(ServeOutcome::Suppressed);
    }

    let listener = TcpListener::bind(config.socket_addr()).await?;
    let addr = listener.local_addr()?;
    info!("Server is running on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("Server stopped");
    Ok(ServeOutcome::Stopped(addr))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::{IpAddr, Ipv4Addr};

    #[tokio::test]
    async fn test_environment_suppresses_listener() {
        let config = Config {
            app_env: "test".to_string(),
            ..Config::default()
        };

        let outcome = serve(&config, AppState::default(), std::future::pending::<()>())
            .await
            .unwrap();

        assert_eq!(outcome, ServeOutcome::Suppressed);
    }

    #[tokio::test]
    async fn binds_and_stops_on_shutdown() {
        let config = Config {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 0,
            ..Config::default()
        };

        let outcome = serve(&config, AppState::default(), std::future::ready(()))
            .await
            .unwrap();

        match outcome {
            ServeOutcome::Stopped(addr) => {
                assert!(addr.ip().is_loopback());
                assert_ne!(addr.port(), 0);
            }
            other => panic!("expected a bound listener, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn bind_failure_is_reported() {
        let taken = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let config = Config {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: taken.local_addr().unwrap().port(),
            ..Config::default()
        };

        let result = serve(&config, AppState::default(), std::future::ready(())).await;

        assert!(matches!(result, Err(crate::error::AppError::Io(_))));
    }
}
