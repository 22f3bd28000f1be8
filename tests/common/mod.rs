//! Shared fixtures for integration tests.

use std::collections::HashMap;

use bytes::Bytes;
use http_message_pool::message::UploadedFile;
use http_message_pool::transport::RawRequest;

/// Build a string map from literal pairs.
pub fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// A transport fixture exercising every field the server-request factory
/// copies through.
#[allow(dead_code)]
pub fn full_transport_fixture() -> RawRequest {
    RawRequest {
        server: vars(&[
            ("request_method", "POST"),
            ("http_host", "api.example.com:8443"),
            ("request_uri", "/orders/42?expand=items"),
            ("query_string", "ignored=1"),
            ("server_protocol", "HTTP/1.1"),
            ("https", "on"),
        ]),
        headers: vars(&[
            ("host", "api.example.com:8443"),
            ("content-type", "application/x-www-form-urlencoded"),
        ]),
        cookies: vars(&[("session", "abc123")]),
        get: vars(&[("expand", "items")]),
        post: vars(&[("note", "rush order")]),
        files: vec![UploadedFile {
            name: "invoice.pdf".to_string(),
            content_type: "application/pdf".to_string(),
            tmp_path: "/tmp/upload_1".to_string(),
            size: 512,
        }],
        body: Bytes::from_static(b"note=rush+order"),
    }
}
