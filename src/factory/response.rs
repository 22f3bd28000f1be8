//! Response factory.

use crate::factory::FactoryError;
use crate::message::Response;
use crate::pool::{ObjectPool, Pooled};

/// Produces pooled [`Response`] instances.
pub struct ResponseFactory {
    pool: ObjectPool<Response>,
}

impl ResponseFactory {
    /// Create the factory with the given pool capacity.
    pub fn new(capacity: usize) -> Self {
        Self {
            pool: ObjectPool::new(capacity, || Some(Response::default())),
        }
    }

    /// Check out the task's response instance and overwrite status code and
    /// reason phrase. Headers, version, and body are left as the previous
    /// task set them.
    pub fn create_response(
        &self,
        status: u16,
        reason: &str,
    ) -> Result<Pooled<Response>, FactoryError> {
        let handle = self.pool.checkout()?;
        {
            let mut response = handle.get_mut();
            response.status = status;
            response.reason = reason.to_string();
        }
        Ok(handle)
    }

    /// The factory's pool, for capacity and traffic introspection.
    pub fn pool(&self) -> &ObjectPool<Response> {
        &self.pool
    }
}
