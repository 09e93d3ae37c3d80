//! Canonical strings and the request signature.
//!
//! The exchange verifies an HMAC-SHA256 over
//! `verb#uri#apiKey#nonce#md5(body)` and compares it byte for byte, so the
//! canonical strings produced here must match what goes on the wire exactly.
//! POST bodies are canonicalized in ascending key order; GET query strings
//! keep their insertion order. The server's check depends on that asymmetry,
//! so it must not be normalized away.

use hmac::{Hmac, Mac};
use sha2::Sha256;

use super::params::Params;

type HmacSha256 = Hmac<Sha256>;

/// Canonical POST body: `key=value` pairs sorted ascending by key bytes,
/// joined with `&`. An empty parameter set yields the empty string.
pub fn canonical_post_body(params: &Params) -> String {
    let mut pairs: Vec<(String, String)> = params
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    pairs.sort_by(|a, b| a.0.cmp(&b.0));
    join_pairs(&pairs)
}

/// Canonical GET query: `key=value` pairs joined with `&` in insertion
/// order, without the leading `?`.
pub fn canonical_query(params: &Params) -> String {
    let pairs: Vec<(String, String)> = params
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    join_pairs(&pairs)
}

fn join_pairs(pairs: &[(String, String)]) -> String {
    pairs
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&")
}

/// Lowercase-hex MD5 of the canonical body string. Computed for every
/// request; GET and DELETE hash the empty string.
pub fn body_digest(canonical_body: &str) -> String {
    format!("{:x}", md5::compute(canonical_body.as_bytes()))
}

/// The string the signature is computed over: the five fields joined by a
/// single `#`, no escaping.
pub fn signature_payload(
    verb: &str,
    uri: &str,
    api_key: &str,
    nonce: &str,
    body_digest: &str,
) -> String {
    [verb, uri, api_key, nonce, body_digest].join("#")
}

/// HMAC-SHA256 of the payload keyed by the API secret, lowercase hex.
pub fn sign(secret: &str, payload: &str) -> String {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .expect("HMAC can take key of any size");
    mac.update(payload.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    /// MD5 of the empty string, what every GET and DELETE hashes to.
    const EMPTY_BODY_DIGEST: &str = "d41d8cd98f00b204e9800998ecf8427e";

    #[test]
    fn test_post_body_sorts_by_key() {
        let params = Params::new().with("b", 2i64).with("a", 1i64);
        assert_eq!(canonical_post_body(&params), "a=1&b=2");

        let reordered = Params::new().with("a", 1i64).with("b", 2i64);
        assert_eq!(canonical_post_body(&reordered), "a=1&b=2");
    }

    #[test]
    fn test_post_body_sorts_by_bytes_not_locale() {
        let params = Params::new()
            .with("type", "buy")
            .with("max_amount", dec!(0.5))
            .with("price", dec!(24.42));
        assert_eq!(
            canonical_post_body(&params),
            "max_amount=0.5&price=24.42&type=buy"
        );
    }

    #[test]
    fn test_query_keeps_insertion_order() {
        let params = Params::new().with("b", 2i64).with("a", 1i64);
        assert_eq!(canonical_query(&params), "b=2&a=1");
    }

    #[test]
    fn test_empty_params_yield_empty_strings() {
        let params = Params::new();
        assert_eq!(canonical_post_body(&params), "");
        assert_eq!(canonical_query(&params), "");
    }

    #[test]
    fn test_empty_body_digest() {
        assert_eq!(body_digest(""), EMPTY_BODY_DIGEST);
    }

    #[test]
    fn test_body_digest_is_lowercase_hex() {
        let digest = body_digest("a=1&b=2");
        assert_eq!(digest.len(), 32);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        assert_ne!(digest, EMPTY_BODY_DIGEST);
    }

    #[test]
    fn test_payload_layout() {
        let payload = signature_payload(
            "GET",
            "https://api.bitcoin.de/v1/orders?type=buy",
            "key",
            "1500000000000000",
            EMPTY_BODY_DIGEST,
        );
        assert_eq!(
            payload,
            "GET#https://api.bitcoin.de/v1/orders?type=buy#key#1500000000000000#d41d8cd98f00b204e9800998ecf8427e"
        );
    }

    /// RFC 4231 test case 2 pins the HMAC-SHA256 implementation bit-exactly.
    #[test]
    fn test_hmac_sha256_known_vector() {
        assert_eq!(
            sign("Jefe", "what do ya wanna do for nothing?"),
            "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843"
        );
    }

    #[test]
    fn test_signature_is_deterministic_and_input_sensitive() {
        let payload = signature_payload(
            "GET",
            "https://api.bitcoin.de/v1/rates",
            "key",
            "1500000000000000",
            EMPTY_BODY_DIGEST,
        );
        let signature = sign("secret", &payload);
        assert_eq!(sign("secret", &payload), signature);

        let bumped_nonce = signature_payload(
            "GET",
            "https://api.bitcoin.de/v1/rates",
            "key",
            "1500000000000001",
            EMPTY_BODY_DIGEST,
        );
        assert_ne!(sign("secret", &bumped_nonce), signature);
        assert_ne!(sign("other-secret", &payload), signature);
    }
}
