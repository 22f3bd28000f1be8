//! Task scope wrapper.

use std::future::Future;

use crate::task::context::{TaskContext, CONTEXT};

/// Run a future as one logical task.
///
/// Installs a fresh [`TaskId`](crate::task::TaskId) and scratch space for
/// the duration of `fut`. Pool checkouts performed anywhere below `fut`
/// attach to this scope and are recycled when it ends — whether the future
/// completes, returns an error, or is dropped mid-flight.
///
/// Scopes nest: an inner `scope` is an independent task and shadows the
/// outer one until it finishes.
pub async fn scope<F: Future>(fut: F) -> F::Output {
    let ctx = TaskContext::new();
    tracing::trace!(task = %ctx.id(), "task scope opened");
    CONTEXT.scope(ctx, fut).await
}

#[cfg(test)]
mod tests {
    use crate::task::{current_task_id, scope};

    #[tokio::test]
    async fn test_scope_installs_identity() {
        assert!(current_task_id().is_none());
        let id = scope(async { current_task_id() }).await;
        assert!(id.is_some());
        assert!(current_task_id().is_none());
    }

    #[tokio::test]
    async fn test_nested_scope_is_a_new_task() {
        let (outer, inner) = scope(async {
            let outer = current_task_id().unwrap();
            let inner = scope(async { current_task_id().unwrap() }).await;
            (outer, inner)
        })
        .await;
        assert_ne!(outer, inner);
    }

    #[tokio::test]
    async fn test_sibling_scopes_get_distinct_ids() {
        let a = scope(async { current_task_id().unwrap() }).await;
        let b = scope(async { current_task_id().unwrap() }).await;
        assert_ne!(a, b);
    }
}
