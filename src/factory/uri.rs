//! URI factory.

use url::Url;

use crate::factory::FactoryError;
use crate::message::Uri;
use crate::pool::{ObjectPool, PoolError, Pooled};
use crate::transport::{translate, RawRequest};

/// Produces pooled [`Uri`] instances.
pub struct UriFactory {
    pool: ObjectPool<Uri>,
}

impl UriFactory {
    /// Create the factory with the given pool capacity.
    pub fn new(capacity: usize) -> Self {
        Self {
            pool: ObjectPool::new(capacity, || Some(Uri::default())),
        }
    }

    /// Check out the task's URI instance and overwrite it from `input`.
    ///
    /// An empty string is valid and yields the default URI (scheme
    /// `"http"`, everything else empty). Absolute inputs are decomposed
    /// with a full parser; anything else is treated as origin-form
    /// `path[?query]`.
    ///
    /// # Errors
    ///
    /// [`FactoryError::MalformedUri`] when an absolute input fails to
    /// parse; pool errors pass through.
    pub fn create_uri(&self, input: &str) -> Result<Pooled<Uri>, FactoryError> {
        let handle = self.pool.checkout()?;
        apply_uri_str(&mut handle.get_mut(), input)?;
        Ok(handle)
    }

    /// Check out the task's URI instance and overwrite it from transport
    /// fields, applying the translation precedence rules.
    pub fn create_uri_from_transport(&self, raw: &RawRequest) -> Result<Pooled<Uri>, PoolError> {
        let handle = self.pool.checkout()?;
        *handle.get_mut() = translate::uri_from_transport(&raw.server, &raw.headers);
        Ok(handle)
    }

    /// The factory's pool, for capacity and traffic introspection.
    pub fn pool(&self) -> &ObjectPool<Uri> {
        &self.pool
    }
}

/// Overwrite every field of `uri` from the decomposed `input`.
fn apply_uri_str(uri: &mut Uri, input: &str) -> Result<(), FactoryError> {
    uri.scheme = "http".to_string();
    uri.host.clear();
    uri.port.clear();
    uri.path.clear();
    uri.query.clear();

    if input.is_empty() {
        return Ok(());
    }

    if input.contains("://") {
        let parsed = Url::parse(input).map_err(|source| FactoryError::MalformedUri {
            input: input.to_string(),
            source,
        })?;
        uri.scheme = parsed.scheme().to_string();
        uri.host = parsed.host_str().unwrap_or_default().to_string();
        uri.port = parsed.port().map(|p| p.to_string()).unwrap_or_default();
        uri.path = parsed.path().to_string();
        uri.query = parsed.query().unwrap_or_default().to_string();
    } else {
        // Origin-form: path with an optional query.
        match input.split_once('?') {
            Some((path, query)) => {
                uri.path = path.to_string();
                uri.query = query.to_string();
            }
            None => uri.path = input.to_string(),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::scope;

    #[tokio::test]
    async fn test_empty_input_never_errors() {
        let factory = UriFactory::new(8);
        scope(async {
            let uri = factory.create_uri("").unwrap();
            let uri = uri.get();
            assert_eq!(uri.scheme(), "http");
            assert_eq!(uri.host(), "");
            assert_eq!(uri.port(), "");
            assert_eq!(uri.path(), "");
            assert_eq!(uri.query(), "");
        })
        .await;
    }

    #[tokio::test]
    async fn test_absolute_uri_decomposes() {
        let factory = UriFactory::new(8);
        scope(async {
            let uri = factory.create_uri("https://example.com:8443/a/b?x=1").unwrap();
            let uri = uri.get();
            assert_eq!(uri.scheme(), "https");
            assert_eq!(uri.host(), "example.com");
            assert_eq!(uri.port(), "8443");
            assert_eq!(uri.path(), "/a/b");
            assert_eq!(uri.query(), "x=1");
        })
        .await;
    }

    #[tokio::test]
    async fn test_origin_form_decomposes() {
        let factory = UriFactory::new(8);
        scope(async {
            let uri = factory.create_uri("/p?y=2").unwrap();
            assert_eq!(uri.get().path(), "/p");
            assert_eq!(uri.get().query(), "y=2");
            assert_eq!(uri.get().scheme(), "http");
        })
        .await;
    }

    #[tokio::test]
    async fn test_malformed_absolute_uri_errors() {
        let factory = UriFactory::new(8);
        scope(async {
            let err = factory.create_uri("http://").unwrap_err();
            assert!(matches!(err, FactoryError::MalformedUri { .. }));
        })
        .await;
    }

    #[tokio::test]
    async fn test_reuse_overwrites_previous_fields() {
        let factory = UriFactory::new(8);
        scope(async {
            factory
                .create_uri("https://stale.example:1234/old?a=b")
                .unwrap();
        })
        .await;
        scope(async {
            // Same recycled instance; every field must be overwritten.
            let uri = factory.create_uri("/fresh").unwrap();
            let uri = uri.get();
            assert_eq!(uri.scheme(), "http");
            assert_eq!(uri.host(), "");
            assert_eq!(uri.port(), "");
            assert_eq!(uri.path(), "/fresh");
            assert_eq!(uri.query(), "");
        })
        .await;
        assert_eq!(factory.pool().stats().reused, 1);
    }
}
