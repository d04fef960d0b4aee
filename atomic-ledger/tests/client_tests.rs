use atomic_ledger::{HttpLedgerClient, LedgerClient, LedgerConfig, LedgerError, TableRequest};
use atomic_types::Network;
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn mock_config(server: &MockServer) -> LedgerConfig {
    LedgerConfig {
        endpoint: server.uri(),
        ..Default::default()
    }
}

// ── Config defaults ─────────────────────────────────────────────

#[test]
fn ledger_config_default() {
    let cfg = LedgerConfig::default();
    assert_eq!(cfg.endpoint, "https://wax.greymass.com");
    assert_eq!(cfg.network, Network::Wax);
    assert_eq!(cfg.timeout_secs, 30);
}

#[test]
fn client_exposes_network_and_endpoint() {
    let client = HttpLedgerClient::new(LedgerConfig::default()).unwrap();
    assert_eq!(client.network(), Network::Wax);
    assert_eq!(client.endpoint(), "https://wax.greymass.com");
}

// ── Request shape ───────────────────────────────────────────────

#[tokio::test]
async fn fetch_posts_the_request_to_the_chain_api() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chain/get_table_rows"))
        .and(body_partial_json(json!({
            "json": true,
            "code": "atomicassets",
            "scope": "earlyibmfans",
            "table": "templates",
            "limit": 1,
            "reverse": false,
            "show_payer": false,
            "lower_bound": "209164",
            "upper_bound": "209164",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "rows": [{"template_id": 209164, "schema_name": "poster"}],
            "more": false,
            "next_key": ""
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpLedgerClient::new(mock_config(&server)).unwrap();
    let request = TableRequest::new("atomicassets", "earlyibmfans", "templates")
        .with_limit(1)
        .with_exact_key("209164");

    let page = client.fetch_table_rows(&request).await.unwrap();
    assert_eq!(page.rows.len(), 1);
    assert!(!page.more);
    assert_eq!(page.rows[0].get_u64("template_id"), Some(209164));
}

#[tokio::test]
async fn unset_bounds_are_omitted_from_the_body() {
    let server = MockServer::start().await;

    // A body carrying lower_bound/upper_bound keys would not match here.
    Mock::given(method("POST"))
        .and(path("/v1/chain/get_table_rows"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "rows": [],
            "more": false
        })))
        .mount(&server)
        .await;

    let request = TableRequest::new("atomicassets", "atomicassets", "collections");
    let body = serde_json::to_value(&request).unwrap();
    assert!(body.get("lower_bound").is_none());
    assert!(body.get("upper_bound").is_none());

    let client = HttpLedgerClient::new(mock_config(&server)).unwrap();
    let page = client.fetch_table_rows(&request).await.unwrap();
    assert!(page.rows.is_empty());
}

// ── Response parsing ────────────────────────────────────────────

#[tokio::test]
async fn continuation_cursor_round_trips() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chain/get_table_rows"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "rows": [{"collection_name": "aaa"}],
            "more": true,
            "next_key": "bbb"
        })))
        .mount(&server)
        .await;

    let client = HttpLedgerClient::new(mock_config(&server)).unwrap();
    let page = client
        .fetch_table_rows(&TableRequest::new("atomicassets", "atomicassets", "collections"))
        .await
        .unwrap();

    assert!(page.more);
    assert_eq!(page.next_key.as_deref(), Some("bbb"));
}

// ── Error surfacing ─────────────────────────────────────────────

#[tokio::test]
async fn api_errors_carry_status_and_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chain/get_table_rows"))
        .respond_with(
            ResponseTemplate::new(500).set_body_string("Internal Service Error"),
        )
        .mount(&server)
        .await;

    let client = HttpLedgerClient::new(mock_config(&server)).unwrap();
    let err = client
        .fetch_table_rows(&TableRequest::new("atomicassets", "atomicassets", "config"))
        .await
        .unwrap_err();

    match err {
        LedgerError::Api { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "Internal Service Error");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_response_is_a_network_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chain/get_table_rows"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = HttpLedgerClient::new(mock_config(&server)).unwrap();
    let err = client
        .fetch_table_rows(&TableRequest::new("atomicassets", "atomicassets", "config"))
        .await
        .unwrap_err();

    assert!(matches!(err, LedgerError::Network(_)));
}
