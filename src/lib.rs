//! # bitcoin.de Trading API Client
//!
//! Builds signed requests for the bitcoin.de Trading API v1 and decodes the
//! exchange's JSON responses.
//!
//! ## Architecture
//!
//! - `api`: method registry, parameter canonicalization, request signing
//!   and the HTTP client
//! - `config`: configuration management and validation
//!
//! ## Example
//!
//! ```no_run
//! use bitcoinde::{ApiMethod, BitcoinDeClient, Params};
//!
//! # async fn run() -> Result<(), bitcoinde::ApiError> {
//! let client = BitcoinDeClient::new("api-key", "secret")?;
//! let orderbook = client
//!     .call(ApiMethod::ShowOrderbook, Params::new().with("type", "buy"))
//!     .await?;
//! println!("{orderbook}");
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;

pub use api::{ApiError, ApiMethod, BitcoinDeClient, ClientOptions, ParamValue, Params};
pub use config::Config;
