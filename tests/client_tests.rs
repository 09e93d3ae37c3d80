//! HTTP round-trip tests against a local mock server.
//!
//! These pin the full wire contract: path construction, the three
//! authentication headers (signature recomputed independently), the
//! form-encoded POST body and the response decoding rules.

use std::sync::Arc;

use bitcoinde::api::sign::{body_digest, sign, signature_payload};
use bitcoinde::api::{ApiError, ApiMethod, BitcoinDeClient, ClientOptions, CounterNonce, Params};
use serde_json::json;
use wiremock::matchers::{body_string, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const API_KEY: &str = "test-api-key";
const SECRET: &str = "test-secret";
const NONCE_SEED: i64 = 1_500_000_000_000_000;
const NONCE: &str = "1500000000000000";
const EMPTY_BODY_DIGEST: &str = "d41d8cd98f00b204e9800998ecf8427e";

fn test_client(server: &MockServer) -> BitcoinDeClient {
    BitcoinDeClient::with_options(
        API_KEY,
        SECRET,
        ClientOptions {
            base_url: server.uri(),
            ..ClientOptions::default()
        },
    )
    .unwrap()
    .with_nonce_source(Arc::new(CounterNonce::starting_at(NONCE_SEED)))
}

#[tokio::test]
async fn show_orderbook_sends_signed_get() {
    let server = MockServer::start().await;
    let client = test_client(&server);

    let uri = format!("{}/v1/orders?type=buy", server.uri());
    let payload = signature_payload("GET", &uri, API_KEY, NONCE, EMPTY_BODY_DIGEST);
    let signature = sign(SECRET, &payload);

    let body = json!({"orders": [], "credits": 20});
    Mock::given(method("GET"))
        .and(path("/v1/orders"))
        .and(query_param("type", "buy"))
        .and(header("X-API-KEY", API_KEY))
        .and(header("X-API-NONCE", NONCE))
        .and(header("X-API-SIGNATURE", signature.as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let result = client
        .call(ApiMethod::ShowOrderbook, Params::new().with("type", "buy"))
        .await
        .unwrap();
    assert_eq!(result, body);
}

#[tokio::test]
async fn create_order_posts_form_body_and_signs_sorted_canonical() {
    let server = MockServer::start().await;
    let client = test_client(&server);

    // Wire body keeps insertion order; the signed digest is over the sorted
    // canonical form.
    let digest = body_digest("max_amount=0.5&price=24.42&type=buy");
    let uri = format!("{}/v1/orders", server.uri());
    let payload = signature_payload("POST", &uri, API_KEY, NONCE, &digest);
    let signature = sign(SECRET, &payload);

    Mock::given(method("POST"))
        .and(path("/v1/orders"))
        .and(header("X-API-SIGNATURE", signature.as_str()))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string("type=buy&price=24.42&max_amount=0.5"))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!({"order_id": "A1B2D3", "credits": 19})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let params = Params::new()
        .with("type", "buy")
        .with("price", "24.42")
        .with("max_amount", "0.5");
    let result = client.call(ApiMethod::CreateOrder, params).await.unwrap();
    assert_eq!(result["order_id"], "A1B2D3");
}

#[tokio::test]
async fn delete_order_uses_delete_verb_and_id_path() {
    let server = MockServer::start().await;
    let client = test_client(&server);

    let uri = format!("{}/v1/orders/123", server.uri());
    let payload = signature_payload("DELETE", &uri, API_KEY, NONCE, EMPTY_BODY_DIGEST);
    let signature = sign(SECRET, &payload);

    Mock::given(method("DELETE"))
        .and(path("/v1/orders/123"))
        .and(header("X-API-SIGNATURE", signature.as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"credits": 19})))
        .expect(1)
        .mount(&server)
        .await;

    let params = Params::new().with("order_id", "123");
    let result = client.call(ApiMethod::DeleteOrder, params).await.unwrap();
    assert_eq!(result["credits"], 19);
}

#[tokio::test]
async fn subentity_path_round_trip() {
    let server = MockServer::start().await;
    let client = test_client(&server);

    Mock::given(method("GET"))
        .and(path("/v1/account/ledger"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"account_ledger": []})))
        .expect(1)
        .mount(&server)
        .await;

    let result = client
        .call(ApiMethod::ShowAccountLedger, Params::new())
        .await
        .unwrap();
    assert_eq!(result, json!({"account_ledger": []}));
}

#[tokio::test]
async fn empty_response_body_is_null_not_an_error() {
    let server = MockServer::start().await;
    let client = test_client(&server);

    Mock::given(method("GET"))
        .and(path("/v1/rates"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let result = client.call(ApiMethod::ShowRates, Params::new()).await.unwrap();
    assert!(result.is_null());
}

#[tokio::test]
async fn non_json_body_is_malformed_response() {
    let server = MockServer::start().await;
    let client = test_client(&server);

    Mock::given(method("GET"))
        .and(path("/v1/rates"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let result = client.call(ApiMethod::ShowRates, Params::new()).await;
    assert!(matches!(result, Err(ApiError::MalformedResponse(_))));
}

#[tokio::test]
async fn error_bodies_pass_through_as_opaque_json() {
    let server = MockServer::start().await;
    let client = test_client(&server);

    // The exchange reports application errors inside the body; the client
    // does not classify them, whatever the HTTP status.
    let body = json!({"errors": [{"message": "Invalid signature", "code": 5}], "credits": 20});
    Mock::given(method("GET"))
        .and(path("/v1/account"))
        .respond_with(ResponseTemplate::new(401).set_body_json(body.clone()))
        .mount(&server)
        .await;

    let result = client
        .call(ApiMethod::ShowAccountInfo, Params::new())
        .await
        .unwrap();
    assert_eq!(result, body);
}

#[tokio::test]
async fn unknown_method_name_fails_without_network() {
    let server = MockServer::start().await;
    let client = test_client(&server);

    let result = client.call_named("showOrderBook", Params::new()).await;
    match result {
        Err(ApiError::UnknownMethod(name)) => assert_eq!(name, "showOrderBook"),
        other => panic!("expected UnknownMethod, got {other:?}"),
    }

    // Nothing reached the server.
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn missing_parameter_fails_before_any_request() {
    let server = MockServer::start().await;
    let client = test_client(&server);

    let result = client.call(ApiMethod::ExecuteTrade, Params::new()).await;
    assert!(matches!(
        result,
        Err(ApiError::MissingParameter { name: "type" })
    ));

    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn nonces_increase_across_sequential_calls() {
    let server = MockServer::start().await;
    let client = test_client(&server);

    Mock::given(method("GET"))
        .and(path("/v1/rates"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    client.call(ApiMethod::ShowRates, Params::new()).await.unwrap();
    client.call(ApiMethod::ShowRates, Params::new()).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let nonces: Vec<String> = requests
        .iter()
        .map(|r| {
            r.headers
                .get("X-API-NONCE")
                .unwrap()
                .to_str()
                .unwrap()
                .to_string()
        })
        .collect();
    assert_eq!(nonces, vec![NONCE.to_string(), "1500000000000001".to_string()]);
}
