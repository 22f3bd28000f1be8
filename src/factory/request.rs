//! Client request factory.

use std::sync::Arc;

use crate::factory::{FactoryError, UriFactory};
use crate::message::{Request, Uri};
use crate::pool::{ObjectPool, Pooled};

/// URI argument accepted by the request factories: either a raw string to
/// be resolved through the URI factory, or already-structured parts.
pub enum UriInput<'a> {
    Raw(&'a str),
    Parts(Uri),
}

impl<'a> From<&'a str> for UriInput<'a> {
    fn from(raw: &'a str) -> Self {
        Self::Raw(raw)
    }
}

impl<'a> From<Uri> for UriInput<'a> {
    fn from(parts: Uri) -> Self {
        Self::Parts(parts)
    }
}

/// Produces pooled [`Request`] instances.
pub struct RequestFactory {
    pool: ObjectPool<Request>,
    uris: Arc<UriFactory>,
}

impl RequestFactory {
    /// Create the factory with the given pool capacity and a shared URI
    /// factory for resolving string URIs.
    pub fn new(capacity: usize, uris: Arc<UriFactory>) -> Self {
        Self {
            pool: ObjectPool::new(capacity, || Some(Request::default())),
            uris,
        }
    }

    /// Check out the task's request instance and overwrite method and URI.
    ///
    /// A string URI is resolved through the URI factory first (checking
    /// out the task's URI instance as a side effect). The method is
    /// uppercased. Headers and protocol version are deliberately left as
    /// the previous task set them.
    ///
    /// # Errors
    ///
    /// [`FactoryError::MalformedUri`] for an unparseable absolute URI
    /// string; pool errors pass through.
    pub fn create_request<'a>(
        &self,
        method: &str,
        uri: impl Into<UriInput<'a>>,
    ) -> Result<Pooled<Request>, FactoryError> {
        let uri = match uri.into() {
            UriInput::Parts(parts) => parts,
            UriInput::Raw(input) => self.uris.create_uri(input)?.get().clone(),
        };

        let handle = self.pool.checkout()?;
        {
            let mut request = handle.get_mut();
            request.method = method.to_ascii_uppercase();
            request.uri = uri;
        }
        Ok(handle)
    }

    /// The factory's pool, for capacity and traffic introspection.
    pub fn pool(&self) -> &ObjectPool<Request> {
        &self.pool
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::scope;

    fn factory() -> RequestFactory {
        RequestFactory::new(8, Arc::new(UriFactory::new(8)))
    }

    #[tokio::test]
    async fn test_method_is_uppercased() {
        let factory = factory();
        scope(async {
            let request = factory.create_request("post", "/submit").unwrap();
            assert_eq!(request.get().method(), "POST");
            assert_eq!(request.get().uri().path(), "/submit");
        })
        .await;
    }

    #[tokio::test]
    async fn test_structured_uri_is_taken_as_is() {
        let factory = factory();
        scope(async {
            let uri = Uri {
                host: "svc".into(),
                path: "/x".into(),
                ..Uri::default()
            };
            let request = factory.create_request("GET", uri.clone()).unwrap();
            assert_eq!(request.get().uri(), &uri);
        })
        .await;
    }

    #[tokio::test]
    async fn test_string_uri_resolves_through_uri_factory() {
        let factory = factory();
        scope(async {
            let request = factory
                .create_request("get", "https://example.com/a?b=c")
                .unwrap();
            let request = request.get();
            assert_eq!(request.uri().host(), "example.com");
            assert_eq!(request.uri().query(), "b=c");
        })
        .await;
    }
}
