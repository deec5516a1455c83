//! # dollarwords-server
//!
//! TCP front end for `dollarwords-core`.
//!
//! ## Modules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  config    ServerConfig: defaults ─► server.toml ─► DOLLARWORDS_* env   │
//! │  protocol  request bytes ─► Decimal ─► Response ─► text | json          │
//! │  server    sequential accept / read / convert / write / close loop      │
//! │  input     entry pattern checked by dollarwords-client                  │
//! │  logging   tracing subscriber for both binaries                         │
//! │  error     ServerError                                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod protocol;
pub mod server;

pub use config::{DecimalSeparator, ProtocolSettings, ResponseFormat, ServerConfig};
pub use error::{ServerError, ServerResult};
pub use input::EntryPattern;
pub use protocol::{parse_amount, ParseError, RequestError, Response};
pub use server::ConversionServer;
