//! Client-side request message.

use std::collections::HashMap;

use crate::message::Uri;

/// An outbound HTTP request.
///
/// Recyclable: the request factory overwrites method and URI on checkout;
/// headers and protocol version keep whatever the previous task set until
/// a caller assigns them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub(crate) method: String,
    pub(crate) uri: Uri,
    pub(crate) version: String,
    pub(crate) headers: HashMap<String, String>,
}

impl Request {
    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn uri(&self) -> &Uri {
        &self.uri
    }

    /// Protocol version without the `HTTP/` prefix, e.g. `"1.1"`.
    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    /// Replace a header value.
    pub fn set_header(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.headers.insert(name.into(), value.into());
    }
}

impl Default for Request {
    fn default() -> Self {
        Self {
            method: "GET".to_string(),
            uri: Uri::default(),
            version: "1.1".to_string(),
            headers: HashMap::new(),
        }
    }
}
