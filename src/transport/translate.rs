//! Transport-to-URI translation.

use std::collections::HashMap;

use crate::message::Uri;

/// Derive a structured [`Uri`] from raw server variables and headers.
///
/// Pure precedence logic, first match wins:
///
/// 1. scheme — `https` when the `https` server variable is present and not
///    the literal `"off"`, else `http`;
/// 2. host/port — `http_host` (split on `:`, the second segment is the
///    port), then `server_name`, then `server_addr`, then the `host`
///    header (split on the first `:` only; bracketed IPv6 literals are
///    carried through unsplit-as-is, not special-cased). `server_port`
///    applies only when none of the above produced a port;
/// 3. path/query — `request_uri` split on the first `?`; `query_string`
///    applies only when `request_uri` carried no `?` of its own.
///
/// Anything not derivable stays empty; a request with no host source at
/// all yields an empty host, not an error.
pub fn uri_from_transport(
    server: &HashMap<String, String>,
    headers: &HashMap<String, String>,
) -> Uri {
    let mut uri = Uri::default();

    uri.scheme = match server.get("https") {
        Some(v) if v != "off" => "https".to_string(),
        _ => "http".to_string(),
    };

    let mut has_port = false;
    if let Some(http_host) = server.get("http_host") {
        let mut segments = http_host.split(':');
        uri.host = segments.next().unwrap_or_default().to_string();
        if let Some(port) = segments.next() {
            has_port = true;
            uri.port = port.to_string();
        }
    } else if let Some(name) = server.get("server_name") {
        uri.host = name.clone();
    } else if let Some(addr) = server.get("server_addr") {
        uri.host = addr.clone();
    } else if let Some(host_header) = headers.get("host") {
        has_port = true;
        match host_header.split_once(':') {
            Some((host, port)) => {
                uri.host = host.to_string();
                uri.port = port.to_string();
            }
            None => uri.host = host_header.clone(),
        }
    }

    if !has_port {
        if let Some(port) = server.get("server_port") {
            uri.port = port.clone();
        }
    }

    let mut has_query = false;
    if let Some(request_uri) = server.get("request_uri") {
        match request_uri.split_once('?') {
            Some((path, query)) => {
                uri.path = path.to_string();
                uri.query = query.to_string();
                has_query = true;
            }
            None => uri.path = request_uri.clone(),
        }
    }

    if !has_query {
        if let Some(query) = server.get("query_string") {
            uri.query = query.clone();
        }
    }

    uri
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_http_host_takes_precedence() {
        let server = vars(&[
            ("http_host", "example.com:8443"),
            ("request_uri", "/a/b?x=1"),
            ("https", "on"),
        ]);
        let uri = uri_from_transport(&server, &HashMap::new());
        assert_eq!(uri.scheme(), "https");
        assert_eq!(uri.host(), "example.com");
        assert_eq!(uri.port(), "8443");
        assert_eq!(uri.path(), "/a/b");
        assert_eq!(uri.query(), "x=1");
    }

    #[test]
    fn test_https_off_means_http() {
        let server = vars(&[("https", "off"), ("http_host", "h")]);
        let uri = uri_from_transport(&server, &HashMap::new());
        assert_eq!(uri.scheme(), "http");
    }

    #[test]
    fn test_server_name_beats_host_header() {
        let server = vars(&[("server_name", "svc"), ("request_uri", "/p")]);
        let headers = vars(&[("host", "ignored:9999")]);
        let uri = uri_from_transport(&server, &headers);
        assert_eq!(uri.host(), "svc");
        assert_eq!(uri.port(), "");
        assert_eq!(uri.path(), "/p");
    }

    #[test]
    fn test_server_port_fills_in_when_no_port_seen() {
        let server = vars(&[("server_name", "svc"), ("server_port", "8080")]);
        let uri = uri_from_transport(&server, &HashMap::new());
        assert_eq!(uri.host(), "svc");
        assert_eq!(uri.port(), "8080");
    }

    #[test]
    fn test_host_header_fallback_splits_on_first_colon() {
        let server = HashMap::new();
        let headers = vars(&[("host", "h:90:91")]);
        let uri = uri_from_transport(&server, &headers);
        assert_eq!(uri.host(), "h");
        assert_eq!(uri.port(), "90:91");
    }

    #[test]
    fn test_host_header_without_colon_blocks_server_port() {
        // The host header marks the port as resolved even when it carries
        // none, so server_port must not apply.
        let server = vars(&[("server_port", "8080")]);
        let headers = vars(&[("host", "plain")]);
        let uri = uri_from_transport(&server, &headers);
        assert_eq!(uri.host(), "plain");
        assert_eq!(uri.port(), "");
    }

    #[test]
    fn test_query_string_fallback() {
        let server = vars(&[("request_uri", "/p"), ("query_string", "y=2")]);
        let uri = uri_from_transport(&server, &HashMap::new());
        assert_eq!(uri.path(), "/p");
        assert_eq!(uri.query(), "y=2");
    }

    #[test]
    fn test_request_uri_query_wins_over_query_string() {
        let server = vars(&[("request_uri", "/p?x=1"), ("query_string", "y=2")]);
        let uri = uri_from_transport(&server, &HashMap::new());
        assert_eq!(uri.query(), "x=1");
    }

    #[test]
    fn test_no_sources_yield_empty_fields() {
        let uri = uri_from_transport(&HashMap::new(), &HashMap::new());
        assert_eq!(uri.scheme(), "http");
        assert_eq!(uri.host(), "");
        assert_eq!(uri.port(), "");
        assert_eq!(uri.path(), "");
        assert_eq!(uri.query(), "");
    }
}
