//! bitcoin.de Trading API v1.
//!
//! Every call carries three headers: `X-API-KEY`, `X-API-NONCE` and
//! `X-API-SIGNATURE`, the last an HMAC-SHA256 over
//! `verb#uri#apiKey#nonce#md5(body)`. The [`sign`] module holds the
//! canonical string rules, [`method`](ApiMethod) the registry of supported
//! calls, and [`BitcoinDeClient`] ties both to the HTTP transport.

mod client;
mod error;
mod method;
mod nonce;
mod params;

pub mod codes;
pub mod sign;
pub mod types;

pub use client::{BitcoinDeClient, ClientOptions, SignedRequest};
pub use error::ApiError;
pub use method::{ApiMethod, HttpVerb, MethodSpec};
pub use nonce::{ClockNonce, CounterNonce, NonceSource};
pub use params::{ParamValue, Params};
