//! Raw transport fields and their translation.
//!
//! # Data Flow
//! ```text
//! server runtime hands over a RawRequest
//!     → translate.rs derives scheme/host/port/path/query
//!     → factory overwrites a pooled Uri / ServerRequest with the result
//! ```
//!
//! The translator applies precedence rules only; it never reparses or
//! normalizes values beyond them.

pub mod raw;
pub mod translate;

pub use raw::RawRequest;
