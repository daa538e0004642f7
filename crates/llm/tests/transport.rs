//! Tests for HttpTransport header construction.

use skimmer_llm::{Client, HttpTransport};
use std::collections::BTreeMap;

#[test]
fn bearer_sets_authorization_header() {
    let client = Client::new();
    let transport =
        HttpTransport::bearer(client, "test-key", "https://api.example.com/v1").expect("bearer");

    let auth = transport
        .headers()
        .get("authorization")
        .expect("authorization header");
    assert_eq!(auth.to_str().unwrap(), "Bearer test-key");
    assert_eq!(transport.base(), "https://api.example.com/v1");
}

#[test]
fn no_auth_omits_authorization_header() {
    let client = Client::new();
    let transport = HttpTransport::no_auth(client, "http://localhost:1234/v1");

    assert!(transport.headers().get("authorization").is_none());
    assert_eq!(transport.base(), "http://localhost:1234/v1");
}

#[test]
fn json_headers_are_set() {
    let client = Client::new();
    let transport = HttpTransport::no_auth(client, "http://localhost:1234/v1");

    let ct = transport.headers().get("content-type").expect("content-type");
    assert_eq!(ct.to_str().unwrap(), "application/json");
    let accept = transport.headers().get("accept").expect("accept");
    assert_eq!(accept.to_str().unwrap(), "application/json");
}

#[test]
fn extra_headers_are_merged() {
    let client = Client::new();
    let mut extra = BTreeMap::new();
    extra.insert("x-api-version".to_string(), "2".to_string());
    let transport = HttpTransport::bearer(client, "k", "https://api.example.com")
        .expect("bearer")
        .with_extra_headers(&extra);

    let version = transport.headers().get("x-api-version").expect("x-api-version");
    assert_eq!(version.to_str().unwrap(), "2");
    // Standard headers survive the merge.
    assert!(transport.headers().get("authorization").is_some());
}

#[test]
fn invalid_extra_headers_are_skipped() {
    let client = Client::new();
    let mut extra = BTreeMap::new();
    extra.insert("bad header name".to_string(), "v".to_string());
    extra.insert("x-ok".to_string(), "fine".to_string());
    let transport =
        HttpTransport::no_auth(client, "http://localhost:1234/v1").with_extra_headers(&extra);

    assert!(transport.headers().get("bad header name").is_none());
    assert_eq!(
        transport.headers().get("x-ok").unwrap().to_str().unwrap(),
        "fine"
    );
}

#[test]
fn trailing_slash_is_trimmed_from_base() {
    let client = Client::new();
    let transport = HttpTransport::no_auth(client, "http://localhost:1234/v1/");
    assert_eq!(transport.base(), "http://localhost:1234/v1");
}
