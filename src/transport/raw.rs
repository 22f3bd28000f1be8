//! The raw transport request object.

use std::collections::HashMap;

use bytes::Bytes;

use crate::message::UploadedFile;

/// Loosely structured request data as produced by the surrounding server
/// runtime, prior to any translation into a structured message.
///
/// Keys in `server` follow the runtime's convention of lower-case variable
/// names (`request_method`, `http_host`, `server_protocol`, ...). Nothing
/// here is validated; the factories and the URI translator read these maps
/// as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRequest {
    /// Server-variable mapping.
    pub server: HashMap<String, String>,
    /// Header mapping, one value per name.
    pub headers: HashMap<String, String>,
    /// Cookie pairs.
    pub cookies: HashMap<String, String>,
    /// Query-string parameters, already split by the runtime.
    pub get: HashMap<String, String>,
    /// Form fields from the request body.
    pub post: HashMap<String, String>,
    /// Uploaded-file metadata.
    pub files: Vec<UploadedFile>,
    /// Raw request body.
    pub body: Bytes,
}
