use std::future::Future;
use std::time::Duration;
use tokio::signal;
use tokio::sync::oneshot;

/// Resolves on Ctrl+C or SIGTERM, then notifies `signalled` so the drain
/// deadline in [`serve_until_drained`] can start.
pub async fn shutdown_signal(signalled: oneshot::Sender<()>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("received Ctrl+C, stopping health-api");
        }
        _ = terminate => {
            tracing::info!("received SIGTERM, stopping health-api");
        }
    }

    let _ = signalled.send(());
}

/// Drives `server` to completion, but gives up on in-flight requests once
/// `drain_timeout` has passed after shutdown was signalled.
pub async fn serve_until_drained<S, E>(
    server: S,
    signalled: oneshot::Receiver<()>,
    drain_timeout: Duration,
) -> Result<(), E>
where
    S: Future<Output = Result<(), E>>,
{
    tokio::pin!(server);

    tokio::select! {
        result = &mut server => return result,
        received = signalled => {
            if received.is_err() {
                // Sender gone without a signal: nothing to bound.
                return server.await;
            }
        }
    }

    tracing::info!(
        timeout_secs = drain_timeout.as_secs(),
        "draining in-flight health checks"
    );

    match tokio::time::timeout(drain_timeout, server).await {
        Ok(result) => result,
        Err(_) => {
            tracing::warn!(
                timeout_secs = drain_timeout.as_secs(),
                "drain deadline passed, dropping remaining connections"
            );
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::time::Instant;

    #[tokio::test]
    async fn test_server_finishing_first_returns_its_result() {
        let (_tx, rx) = oneshot::channel();
        let server = async { Err::<(), _>(io::Error::new(io::ErrorKind::Other, "bind lost")) };

        let result = serve_until_drained(server, rx, Duration::from_secs(30)).await;

        assert_eq!(result.unwrap_err().to_string(), "bind lost");
    }

    #[tokio::test]
    async fn test_stuck_drain_is_cut_off_after_timeout() {
        let (tx, rx) = oneshot::channel();
        let server = std::future::pending::<Result<(), io::Error>>();
        tx.send(()).unwrap();

        let started = Instant::now();
        let result = serve_until_drained(server, rx, Duration::from_millis(50)).await;

        assert!(result.is_ok());
        assert!(started.elapsed() < Duration::from_secs(5));
    }

    #[tokio::test]
    async fn test_drain_that_completes_in_time_is_awaited() {
        let (tx, rx) = oneshot::channel();
        let server = async {
            tokio::time::sleep(Duration::from_millis(20)).await;
            Ok::<(), io::Error>(())
        };
        tx.send(()).unwrap();

        let result = serve_until_drained(server, rx, Duration::from_secs(5)).await;

        assert!(result.is_ok());
    }
}
