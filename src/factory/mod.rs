//! Message factories.
//!
//! # Data Flow
//! ```text
//! caller asks a factory for a message
//!     → factory checks out from its pool (one pool per message type)
//!     → factory overwrites the instance's fields in place
//!     → caller uses the handle for the rest of the task
//! ```
//!
//! # Design Decisions
//! - Each factory owns exactly one pool; the URI factory is shared so that
//!   request factories can resolve string URIs through it
//! - Factories write `pub(crate)` fields directly: the field-overwrite
//!   contract is explicit, not reflective
//! - A factory only overwrites the fields its inputs supply; everything
//!   else keeps the previous task's values (see the pool docs)

pub mod request;
pub mod response;
pub mod server_request;
pub mod uri;

use std::sync::Arc;

use thiserror::Error;

use crate::config::MessageConfig;
use crate::pool::PoolError;

pub use request::{RequestFactory, UriInput};
pub use response::ResponseFactory;
pub use server_request::{ServerParams, ServerRequestFactory};
pub use uri::UriFactory;

/// Errors surfaced by the message factories.
#[derive(Debug, Error)]
pub enum FactoryError {
    /// Pool misuse or creation failure underneath the factory.
    #[error(transparent)]
    Pool(#[from] PoolError),

    /// A URI string could not be decomposed into components.
    #[error("unable to parse URI `{input}`")]
    MalformedUri {
        input: String,
        #[source]
        source: url::ParseError,
    },

    /// `create_server_request` was invoked without a raw transport request.
    #[error("no raw transport request in server parameters")]
    MissingTransport,
}

/// The factory set for one runtime, built from configuration.
///
/// Bundles one factory per message type around a shared URI factory, the
/// way a server runtime wires them at startup.
pub struct MessageFactories {
    pub uris: Arc<UriFactory>,
    pub requests: RequestFactory,
    pub responses: ResponseFactory,
    pub server_requests: ServerRequestFactory,
}

impl MessageFactories {
    /// Build all factories with pool capacities from `config`.
    pub fn from_config(config: &MessageConfig) -> Self {
        let uris = Arc::new(UriFactory::new(config.uri_pool.capacity));
        Self {
            requests: RequestFactory::new(config.request_pool.capacity, Arc::clone(&uris)),
            responses: ResponseFactory::new(config.response_pool.capacity),
            server_requests: ServerRequestFactory::new(
                config.server_request_pool.capacity,
                Arc::clone(&uris),
            ),
            uris,
        }
    }
}

impl Default for MessageFactories {
    fn default() -> Self {
        Self::from_config(&MessageConfig::default())
    }
}
