//! bitcoin.de REST API client.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use serde_json::Value;
use tracing::{debug, instrument};

use crate::config::Config;

use super::error::ApiError;
use super::method::{ApiMethod, HttpVerb};
use super::nonce::{ClockNonce, NonceSource};
use super::params::Params;
use super::sign;

/// Production endpoint of the Trading API.
const DEFAULT_BASE_URL: &str = "https://api.bitcoin.de/";

const HEADER_API_KEY: &str = "X-API-KEY";
const HEADER_NONCE: &str = "X-API-NONCE";
const HEADER_SIGNATURE: &str = "X-API-SIGNATURE";

/// Client construction options.
#[derive(Debug, Clone)]
pub struct ClientOptions {
    pub base_url: String,
    pub verify_tls: bool,
    pub api_version: u32,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            verify_tls: true,
            api_version: 1,
        }
    }
}

/// A fully signed request, ready for one HTTP round-trip.
///
/// Transient: created per call, dropped after transport. The signature
/// covers the verb, the full URI (query included), the API key, the nonce
/// and the MD5 digest of the canonical body.
#[derive(Debug, Clone)]
pub struct SignedRequest {
    pub verb: HttpVerb,
    pub uri: String,
    pub nonce: String,
    pub signature: String,
    /// Form pairs sent as the POST body; empty for GET and DELETE.
    pub body: Vec<(String, String)>,
}

/// bitcoin.de Trading API client.
///
/// Credentials are owned by the instance and never mutated after
/// construction. Each call validates its parameters against the method
/// registry, signs a fresh request and performs a single round-trip; there
/// is no retry or rate-limit handling at this layer.
pub struct BitcoinDeClient {
    http: Client,
    api_key: String,
    secret: String,
    base_url: String,
    api_version: u32,
    nonces: Arc<dyn NonceSource>,
}

impl BitcoinDeClient {
    /// Create a client against the production endpoint.
    pub fn new(api_key: impl Into<String>, secret: impl Into<String>) -> Result<Self, ApiError> {
        Self::with_options(api_key, secret, ClientOptions::default())
    }

    /// Create a client with explicit options.
    pub fn with_options(
        api_key: impl Into<String>,
        secret: impl Into<String>,
        options: ClientOptions,
    ) -> Result<Self, ApiError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .danger_accept_invalid_certs(!options.verify_tls)
            .build()?;

        let mut base_url = options.base_url;
        if !base_url.ends_with('/') {
            base_url.push('/');
        }

        Ok(Self {
            http,
            api_key: api_key.into(),
            secret: secret.into(),
            base_url,
            api_version: options.api_version,
            nonces: Arc::new(ClockNonce::default()),
        })
    }

    /// Create a client from loaded configuration.
    pub fn from_config(config: &Config) -> Result<Self, ApiError> {
        Self::with_options(
            config.api_key.clone(),
            config.secret.clone(),
            ClientOptions {
                base_url: config.base_url.clone(),
                verify_tls: config.verify_tls,
                api_version: config.api_version,
            },
        )
    }

    /// Replace the nonce source, e.g. with a deterministic counter in tests.
    pub fn with_nonce_source(mut self, nonces: Arc<dyn NonceSource>) -> Self {
        self.nonces = nonces;
        self
    }

    /// Validate, canonicalize and sign a request without sending it.
    ///
    /// All validation failures surface here, before any network I/O: a
    /// mandatory parameter missing from `params`, or an id parameter that is
    /// absent or empty. The id value is removed from the parameter set and
    /// becomes a path segment between the entity and the subentity.
    pub fn build_request(
        &self,
        method: ApiMethod,
        mut params: Params,
        nonce: &str,
    ) -> Result<SignedRequest, ApiError> {
        let spec = method.spec();

        for &name in spec.mandatory {
            if !params.contains_key(name) {
                return Err(ApiError::MissingParameter { name });
            }
        }

        let id_segment = match spec.id_param {
            Some(name) => {
                let value = params
                    .remove(name)
                    .ok_or(ApiError::MissingParameter { name })?
                    .to_string();
                if value.is_empty() {
                    return Err(ApiError::MissingParameter { name });
                }
                Some(value)
            }
            None => None,
        };

        // Remaining parameters become the body for POST, the query for GET.
        // DELETE carries nothing beyond the id path segment.
        let (body_params, query_params) = match spec.verb {
            HttpVerb::Post => (params, Params::new()),
            HttpVerb::Get => (Params::new(), params),
            HttpVerb::Delete => (Params::new(), Params::new()),
        };

        let canonical_body = sign::canonical_post_body(&body_params);
        let digest = sign::body_digest(&canonical_body);
        let query = sign::canonical_query(&query_params);

        let mut uri = format!("{}v{}/{}", self.base_url, self.api_version, spec.entity);
        if let Some(id) = &id_segment {
            uri.push('/');
            uri.push_str(id);
        }
        if let Some(subentity) = spec.subentity {
            uri.push('/');
            uri.push_str(subentity);
        }
        if !query.is_empty() {
            uri.push('?');
            uri.push_str(&query);
        }

        let payload =
            sign::signature_payload(spec.verb.as_str(), &uri, &self.api_key, nonce, &digest);
        let signature = sign::sign(&self.secret, &payload);

        Ok(SignedRequest {
            verb: spec.verb,
            uri,
            nonce: nonce.to_string(),
            signature,
            body: body_params.to_form(),
        })
    }

    /// Execute an API call by wire name.
    pub async fn call_named(&self, name: &str, params: Params) -> Result<Value, ApiError> {
        let method =
            ApiMethod::from_name(name).ok_or_else(|| ApiError::UnknownMethod(name.to_string()))?;
        self.call(method, params).await
    }

    /// Execute an API call: validate, sign, one HTTP round-trip, JSON decode.
    ///
    /// An empty response body decodes to `Value::Null`. HTTP status is not
    /// interpreted; the exchange reports application errors inside the JSON
    /// body and those pass through opaquely.
    #[instrument(skip(self, params))]
    pub async fn call(&self, method: ApiMethod, params: Params) -> Result<Value, ApiError> {
        let nonce = self.nonces.next_nonce();
        let request = self.build_request(method, params, &nonce)?;

        debug!(uri = %request.uri, verb = %request.verb, "sending signed request");

        let mut builder = match request.verb {
            HttpVerb::Get => self.http.get(&request.uri),
            HttpVerb::Post => self.http.post(&request.uri),
            HttpVerb::Delete => self.http.delete(&request.uri),
        };

        builder = builder
            .header(HEADER_API_KEY, &self.api_key)
            .header(HEADER_NONCE, &request.nonce)
            .header(HEADER_SIGNATURE, &request.signature);

        if !request.body.is_empty() {
            builder = builder.form(&request.body);
        }

        let response = builder.send().await?;
        let text = response.text().await?;

        debug!(bytes = text.len(), "received response");

        if text.is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_str(&text).map_err(ApiError::MalformedResponse)
    }
}
