//! Inbound server request message.

use std::collections::HashMap;

use bytes::Bytes;

use crate::message::Uri;

/// Metadata for one uploaded file, carried through from the transport
/// without inspection. Normalization of multipart payloads happens outside
/// this crate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadedFile {
    /// Client-supplied file name.
    pub name: String,
    /// Client-supplied content type.
    pub content_type: String,
    /// Where the server runtime spooled the payload.
    pub tmp_path: String,
    /// Payload size in bytes.
    pub size: u64,
}

/// An inbound request reconstructed from raw transport fields.
///
/// Recyclable: the server-request factory overwrites every field below on
/// checkout, because it is the only factory whose source (the transport)
/// supplies them all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerRequest {
    pub(crate) method: String,
    pub(crate) uri: Uri,
    pub(crate) version: String,
    pub(crate) headers: HashMap<String, String>,
    pub(crate) cookies: HashMap<String, String>,
    pub(crate) query_params: HashMap<String, String>,
    pub(crate) server_params: HashMap<String, String>,
    pub(crate) parsed_body: HashMap<String, String>,
    pub(crate) uploaded_files: Vec<UploadedFile>,
    pub(crate) body: Bytes,
}

impl ServerRequest {
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

    pub fn cookies(&self) -> &HashMap<String, String> {
        &self.cookies
    }

    pub fn query_params(&self) -> &HashMap<String, String> {
        &self.query_params
    }

    pub fn server_params(&self) -> &HashMap<String, String> {
        &self.server_params
    }

    pub fn parsed_body(&self) -> &HashMap<String, String> {
        &self.parsed_body
    }

    pub fn uploaded_files(&self) -> &[UploadedFile] {
        &self.uploaded_files
    }

    /// Raw request body as handed over by the transport.
    pub fn body(&self) -> &Bytes {
        &self.body
    }
}

impl Default for ServerRequest {
    fn default() -> Self {
        Self {
            method: "GET".to_string(),
            uri: Uri::default(),
            version: "1.1".to_string(),
            headers: HashMap::new(),
            cookies: HashMap::new(),
            query_params: HashMap::new(),
            server_params: HashMap::new(),
            parsed_body: HashMap::new(),
            uploaded_files: Vec::new(),
            body: Bytes::new(),
        }
    }
}
