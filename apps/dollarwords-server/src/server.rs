//! # Conversion Server
//!
//! ## Connection Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │   accept ──► read to EOF (≤ max bytes, ≤ read_timeout) ──► convert      │
//! │     ▲                                                         │         │
//! │     │                                                         ▼         │
//! │     └──────────────── close ◄──────────────────────────── write         │
//! │                                                                         │
//! │  • One client at a time: the next accept waits for the close           │
//! │  • A failed connection is logged and the loop moves on                 │
//! │  • The shutdown future stops the loop between connections              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::future::Future;
use std::net::SocketAddr;
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tracing::{debug, error, info, warn};

use dollarwords_core::CurrencyFormatter;

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::protocol::Response;

/// TCP server answering each connection with one converted amount.
pub struct ConversionServer<F> {
    listener: TcpListener,
    formatter: F,
    config: ServerConfig,
}

impl<F: CurrencyFormatter> ConversionServer<F> {
    /// Binds the listener described by `config`.
    pub async fn bind(config: ServerConfig, formatter: F) -> ServerResult<Self> {
        let bind_addr = config.listener.bind_address();
        let listener = TcpListener::bind(&bind_addr).await.map_err(|e| {
            ServerError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to bind to {}: {}", bind_addr, e),
            ))
        })?;

        info!(addr = %bind_addr, "Conversion server listening");

        Ok(ConversionServer {
            listener,
            formatter,
            config,
        })
    }

    /// Address the listener is actually bound to (useful with port 0).
    pub fn local_addr(&self) -> ServerResult<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Serves connections one by one until `shutdown` completes.
    pub async fn run_until<S>(self, shutdown: S) -> ServerResult<()>
    where
        S: Future<Output = ()>,
    {
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                _ = &mut shutdown => {
                    info!("Shutdown requested, no longer accepting connections");
                    break;
                }
                accepted = self.listener.accept() => {
                    match accepted {
                        Ok((stream, addr)) => {
                            debug!(addr = %addr, "Client connected");
                            if let Err(e) = self.handle_connection(stream, addr).await {
                                warn!(addr = %addr, error = %e, "Connection failed");
                            }
                        }
                        Err(e) => warn!(error = %e, "Failed to accept connection"),
                    }
                }
            }
        }

        Ok(())
    }

    /// Reads one request, writes one response, closes the stream.
    async fn handle_connection(
        &self,
        mut stream: TcpStream,
        addr: SocketAddr,
    ) -> ServerResult<Response> {
        let listener = &self.config.listener;
        let mut request = Vec::with_capacity(listener.max_request_bytes);

        // The request ends when the client half-closes or the limit is hit
        tokio::time::timeout(
            Duration::from_secs(listener.read_timeout_secs),
            (&mut stream)
                .take(listener.max_request_bytes as u64)
                .read_to_end(&mut request),
        )
        .await
        .map_err(|_| ServerError::Timeout(listener.read_timeout_secs))??;

        let request = request.as_slice();
        debug!(
            addr = %addr,
            request = %String::from_utf8_lossy(request),
            "Data received from client"
        );

        let response = Response::for_request(&self.formatter, request, &self.config.protocol);
        match &response {
            Response::Words(_) => {}
            Response::InvalidRequest(e) => {
                warn!(addr = %addr, kind = e.kind(), error = %e, "Request could not be parsed")
            }
            Response::Rejected(e) if e.is_internal() => {
                error!(addr = %addr, error = %e, "Conversion hit an internal invariant violation")
            }
            Response::Rejected(e) => {
                warn!(addr = %addr, kind = e.kind(), error = %e, "Conversion rejected")
            }
        }

        let body = response.render(self.config.protocol.response_format)?;
        stream.write_all(body.as_bytes()).await?;
        stream.shutdown().await?;

        info!(addr = %addr, response = %body, "Response sent, client disconnected");
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ResponseFormat;
    use dollarwords_core::{ConversionError, ConversionResult, DollarFormatter};
    use rust_decimal::prelude::ToPrimitive;
    use rust_decimal::Decimal;
    use tokio::sync::oneshot;

    struct Broken;

    impl CurrencyFormatter for Broken {
        fn format(&self, amount: Decimal) -> ConversionResult<String> {
            Err(ConversionError::UnsupportedMagnitude(
                amount.trunc().to_u64().unwrap_or(0),
            ))
        }
    }

    fn test_config() -> ServerConfig {
        let mut config = ServerConfig::default();
        config.listener.port = 0;
        config.listener.read_timeout_secs = 1;
        config
    }

    async fn start<F>(config: ServerConfig, formatter: F) -> (SocketAddr, oneshot::Sender<()>)
    where
        F: CurrencyFormatter + Send + Sync + 'static,
    {
        let server = ConversionServer::bind(config, formatter).await.unwrap();
        let addr = server.local_addr().unwrap();
        let (tx, rx) = oneshot::channel::<()>();
        tokio::spawn(server.run_until(async {
            let _ = rx.await;
        }));
        (addr, tx)
    }

    async fn request(addr: SocketAddr, body: &str) -> String {
        let mut stream = TcpStream::connect(addr).await.unwrap();
        stream.write_all(body.as_bytes()).await.unwrap();
        stream.shutdown().await.unwrap();
        let mut response = String::new();
        stream.read_to_string(&mut response).await.unwrap();
        response
    }

    #[tokio::test]
    async fn test_converts_amount() {
        let (addr, _shutdown) = start(test_config(), DollarFormatter).await;
        assert_eq!(
            request(addr, "1234.56").await,
            "one thousand two hundred thirty four dollars and fifty six cents"
        );
    }

    #[tokio::test]
    async fn test_serves_clients_one_after_another() {
        let (addr, _shutdown) = start(test_config(), DollarFormatter).await;
        assert_eq!(request(addr, "1").await, "one dollar");
        assert_eq!(request(addr, "0,01").await, "zero dollars and one cent");
        assert_eq!(
            request(addr, "-5").await,
            "conversion failed: The amount must not be negative"
        );
        assert_eq!(request(addr, "1000").await, "one thousand dollars");
    }

    #[tokio::test]
    async fn test_request_split_across_writes() {
        let (addr, _shutdown) = start(test_config(), DollarFormatter).await;

        let mut stream = TcpStream::connect(addr).await.unwrap();
        stream.write_all(b"12").await.unwrap();
        stream.flush().await.unwrap();
        tokio::time::sleep(Duration::from_millis(50)).await;
        stream.write_all(b"34.56").await.unwrap();
        stream.shutdown().await.unwrap();

        let mut response = String::new();
        stream.read_to_string(&mut response).await.unwrap();
        assert_eq!(
            response,
            "one thousand two hundred thirty four dollars and fifty six cents"
        );
    }

    #[tokio::test]
    async fn test_client_that_never_closes_times_out() {
        let (addr, _shutdown) = start(test_config(), DollarFormatter).await;

        let mut open = TcpStream::connect(addr).await.unwrap();
        open.write_all(b"12").await.unwrap();
        let mut response = String::new();
        open.read_to_string(&mut response).await.unwrap();
        assert!(response.is_empty());

        assert_eq!(request(addr, "12").await, "twelve dollars");
    }

    #[tokio::test]
    async fn test_parse_failure_is_not_an_empty_response() {
        let (addr, _shutdown) = start(test_config(), DollarFormatter).await;
        assert_eq!(
            request(addr, "twelve").await,
            "invalid request: 'twelve' is not a number"
        );
    }

    #[tokio::test]
    async fn test_empty_request() {
        let (addr, _shutdown) = start(test_config(), DollarFormatter).await;

        let mut stream = TcpStream::connect(addr).await.unwrap();
        stream.shutdown().await.unwrap();
        let mut response = String::new();
        stream.read_to_string(&mut response).await.unwrap();

        assert_eq!(response, "invalid request: the request is empty");
    }

    #[tokio::test]
    async fn test_json_responses() {
        let mut config = test_config();
        config.protocol.response_format = ResponseFormat::Json;
        let (addr, _shutdown) = start(config, DollarFormatter).await;

        let value: serde_json::Value = serde_json::from_str(&request(addr, "2").await).unwrap();
        assert_eq!(value["status"], "ok");
        assert_eq!(value["words"], "two dollars");

        let value: serde_json::Value =
            serde_json::from_str(&request(addr, "1.998").await).unwrap();
        assert_eq!(value["status"], "error");
        assert_eq!(value["kind"], "too_many_decimal_digits");
    }

    #[tokio::test]
    async fn test_internal_error_is_reported() {
        let (addr, _shutdown) = start(test_config(), Broken).await;
        assert_eq!(
            request(addr, "7").await,
            "conversion failed: No conversion is defined for the magnitude of 7"
        );
    }

    #[tokio::test]
    async fn test_silent_client_times_out_and_loop_continues() {
        let (addr, _shutdown) = start(test_config(), DollarFormatter).await;

        let mut silent = TcpStream::connect(addr).await.unwrap();
        let mut response = String::new();
        silent.read_to_string(&mut response).await.unwrap();
        assert!(response.is_empty());

        assert_eq!(request(addr, "3").await, "three dollars");
    }

    #[tokio::test]
    async fn test_shutdown_stops_accepting() {
        let server = ConversionServer::bind(test_config(), DollarFormatter).await.unwrap();
        let (tx, rx) = oneshot::channel::<()>();
        let handle = tokio::spawn(server.run_until(async {
            let _ = rx.await;
        }));

        tx.send(()).unwrap();
        assert!(handle.await.unwrap().is_ok());
    }
}
