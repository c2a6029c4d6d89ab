//! HTTP server lifecycle.

use std::future::{Future, IntoFuture};
use std::io;
use std::time::Duration;

use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tracing::warn;

/// Serves `app` until `signal` resolves, then drains in-flight requests.
///
/// Draining is bounded by `grace`: connections still open when it elapses
/// are dropped and the function returns.
pub async fn serve<F>(
    listener: TcpListener,
    app: Router,
    signal: F,
    grace: Duration,
) -> io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let (signalled_tx, signalled_rx) = oneshot::channel::<()>();

    let server = axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            signal.await;
            let _ = signalled_tx.send(());
        })
        .into_future();

    let deadline = async move {
        match signalled_rx.await {
            Ok(()) => tokio::time::sleep(grace).await,
            // Server stopped on its own
            Err(_) => std::future::pending().await,
        }
    };

    tokio::select! {
        result = server => result,
        _ = deadline => {
            warn!(grace_secs = grace.as_secs_f64(), "shutdown timed out, dropping open connections");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::routing::get;
    use std::time::Instant;

    async fn bind() -> (TcpListener, String) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());
        (listener, url)
    }

    fn app() -> Router {
        Router::new()
            .route("/fast", get(|| async { "ok" }))
            .route(
                "/slow",
                get(|| async {
                    tokio::time::sleep(Duration::from_secs(60)).await;
                    "late"
                }),
            )
    }

    #[tokio::test]
    async fn test_serve_answers_until_signalled() {
        let (listener, url) = bind().await;
        let (stop_tx, stop_rx) = oneshot::channel::<()>();
        let server = tokio::spawn(serve(
            listener,
            app(),
            async move {
                let _ = stop_rx.await;
            },
            Duration::from_secs(5),
        ));

        let body = reqwest::get(format!("{url}/fast"))
            .await
            .unwrap()
            .text()
            .await
            .unwrap();
        assert_eq!(body, "ok");

        stop_tx.send(()).unwrap();
        let result = tokio::time::timeout(Duration::from_secs(5), server)
            .await
            .unwrap()
            .unwrap();
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_stuck_request_does_not_block_shutdown() {
        let (listener, url) = bind().await;
        let (stop_tx, stop_rx) = oneshot::channel::<()>();
        let server = tokio::spawn(serve(
            listener,
            app(),
            async move {
                let _ = stop_rx.await;
            },
            Duration::from_millis(200),
        ));

        let in_flight = tokio::spawn(reqwest::get(format!("{url}/slow")));
        // Let the request reach the handler
        tokio::time::sleep(Duration::from_millis(200)).await;

        let started = Instant::now();
        stop_tx.send(()).unwrap();
        let result = tokio::time::timeout(Duration::from_secs(10), server)
            .await
            .unwrap()
            .unwrap();

        assert!(result.is_ok());
        assert!(started.elapsed() < Duration::from_secs(5));
        in_flight.abort();
    }
}
