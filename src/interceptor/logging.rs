use crate::interceptor::{Interceptor, InterceptorResult, Next};
use async_trait::async_trait;
use axum::{body::Body, http::Request};
use std::time::Instant;

fn elapsed_millis(start: Instant) -> u64 {
    u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX)
}

/// Logs method, URI, status and latency of every request
#[derive(Clone, Default)]
pub struct LoggingInterceptor;

#[async_trait]
impl Interceptor for LoggingInterceptor {
    async fn intercept(&self, request: Request<Body>, next: Next) -> InterceptorResult {
        let method = request.method().clone();
        let uri = request.uri().clone();
        let start = Instant::now();

        tracing::debug!(%method, %uri, "--> request");

        match next.run(request).await {
            Ok(response) => {
                let status = response.status();
                let elapsed_ms = elapsed_millis(start);
                if status.is_server_error() {
                    tracing::error!(%method, %uri, status = status.as_u16(), elapsed_ms, "<-- response");
                } else {
                    tracing::info!(%method, %uri, status = status.as_u16(), elapsed_ms, "<-- response");
                }
                Ok(response)
            }
            Err(e) => {
                let elapsed_ms = elapsed_millis(start);
                tracing::error!(%method, %uri, error = %e, elapsed_ms, "<-- failed");
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn elapsed_millis_counts_from_start() {
        let start = Instant::now() - Duration::from_millis(25);
        assert!(elapsed_millis(start) >= 25);
    }
}
