//! Server request factory.

use std::sync::Arc;

use crate::factory::{FactoryError, UriFactory};
use crate::message::ServerRequest;
use crate::pool::{ObjectPool, Pooled};
use crate::transport::RawRequest;

/// Server parameters handed to [`ServerRequestFactory::create_server_request`].
///
/// The raw transport request is the one mandatory ingredient; everything
/// the factory populates is extracted from it.
#[derive(Debug, Default)]
pub struct ServerParams {
    /// The raw transport request produced by the server runtime.
    pub raw: Option<RawRequest>,
}

impl From<RawRequest> for ServerParams {
    fn from(raw: RawRequest) -> Self {
        Self { raw: Some(raw) }
    }
}

/// Produces pooled [`ServerRequest`] instances from raw transport fields.
pub struct ServerRequestFactory {
    pool: ObjectPool<ServerRequest>,
    uris: Arc<UriFactory>,
}

impl ServerRequestFactory {
    /// Create the factory with the given pool capacity and a shared URI
    /// factory.
    pub fn new(capacity: usize, uris: Arc<UriFactory>) -> Self {
        Self {
            pool: ObjectPool::new(capacity, || Some(ServerRequest::default())),
            uris,
        }
    }

    /// Check out the task's server-request instance and rebuild it from
    /// the raw transport request in `params`.
    ///
    /// Extraction rules:
    /// - method: `request_method` server variable, default `GET`;
    /// - URI: translated from server variables and headers through the
    ///   task's pooled URI instance;
    /// - protocol version: `server_protocol` stripped of its `HTTP/`
    ///   prefix, default `1.1`;
    /// - headers, cookies, query/server/parsed-body parameters, uploaded
    ///   files, and the raw body are carried over as-is.
    ///
    /// This factory overwrites every field of the instance.
    ///
    /// # Errors
    ///
    /// [`FactoryError::MissingTransport`] when `params` carries no raw
    /// request; pool errors pass through.
    pub fn create_server_request(
        &self,
        params: ServerParams,
    ) -> Result<Pooled<ServerRequest>, FactoryError> {
        let raw = params.raw.ok_or(FactoryError::MissingTransport)?;

        let uri = self.uris.create_uri_from_transport(&raw)?.get().clone();
        let method = raw
            .server
            .get("request_method")
            .cloned()
            .unwrap_or_else(|| "GET".to_string());
        let version = raw
            .server
            .get("server_protocol")
            .map(|p| p.trim_start_matches("HTTP/").to_string())
            .unwrap_or_else(|| "1.1".to_string());

        tracing::trace!(
            method = %method,
            path = %uri.path(),
            "server request rebuilt from transport"
        );

        let handle = self.pool.checkout()?;
        {
            let mut request = handle.get_mut();
            request.method = method;
            request.uri = uri;
            request.version = version;
            request.headers = raw.headers;
            request.cookies = raw.cookies;
            request.query_params = raw.get;
            request.server_params = raw.server;
            request.parsed_body = raw.post;
            request.uploaded_files = raw.files;
            request.body = raw.body;
        }
        Ok(handle)
    }

    /// The factory's pool, for capacity and traffic introspection.
    pub fn pool(&self) -> &ObjectPool<ServerRequest> {
        &self.pool
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::scope;

    #[tokio::test]
    async fn test_missing_transport_is_an_invalid_argument() {
        let factory = ServerRequestFactory::new(8, Arc::new(UriFactory::new(8)));
        scope(async {
            let err = factory
                .create_server_request(ServerParams::default())
                .unwrap_err();
            assert!(matches!(err, FactoryError::MissingTransport));
        })
        .await;
        // Nothing was checked out for the failed call.
        assert_eq!(factory.pool().stats().created, 0);
    }

    #[tokio::test]
    async fn test_method_defaults_to_get() {
        let factory = ServerRequestFactory::new(8, Arc::new(UriFactory::new(8)));
        scope(async {
            let request = factory
                .create_server_request(RawRequest::default().into())
                .unwrap();
            assert_eq!(request.get().method(), "GET");
            assert_eq!(request.get().version(), "1.1");
        })
        .await;
    }
}
