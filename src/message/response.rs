//! Response message.

use std::collections::HashMap;

use bytes::Bytes;

/// An outbound HTTP response.
///
/// Recyclable: the response factory overwrites status code and reason
/// phrase on checkout. Headers, version, and body keep their prior values
/// until assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub(crate) status: u16,
    pub(crate) reason: String,
    pub(crate) version: String,
    pub(crate) headers: HashMap<String, String>,
    pub(crate) body: Bytes,
}

impl Response {
    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    pub fn body(&self) -> &Bytes {
        &self.body
    }

    pub fn set_header(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.headers.insert(name.into(), value.into());
    }

    pub fn set_body(&mut self, body: Bytes) {
        self.body = body;
    }
}

impl Default for Response {
    fn default() -> Self {
        Self {
            status: 200,
            reason: String::new(),
            version: "1.1".to_string(),
            headers: HashMap::new(),
            body: Bytes::new(),
        }
    }
}
