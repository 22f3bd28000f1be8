//! Message object types.
//!
//! Mutable, recyclable representations of URIs, requests, and responses.
//! Fields are crate-internal so the factories can overwrite them in place
//! on a freshly checked-out instance; downstream code sees read-only
//! accessors. Instances coming out of a pool carry whatever the previous
//! task left behind until a factory overwrites the fields it owns.

pub mod request;
pub mod response;
pub mod server_request;
pub mod uri;

pub use request::Request;
pub use response::Response;
pub use server_request::{ServerRequest, UploadedFile};
pub use uri::Uri;
