//! Per-task context: identity plus a type-keyed scratch space.

use std::any::{Any, TypeId};
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

tokio::task_local! {
    pub(crate) static CONTEXT: TaskContext;
}

static NEXT_TASK_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of one logical task.
///
/// Assigned when the task scope opens; never reused within a process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(u64);

impl TaskId {
    fn next() -> Self {
        Self(NEXT_TASK_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "task-{}", self.0)
    }
}

/// Per-task state installed by [`scope`](crate::task::scope).
///
/// Holds the task identity and a scratch space keyed by entry type. The
/// scratch owns its entries: when the context drops at the end of the task,
/// every entry drops with it, which is how pooled instances find their way
/// back to the free list.
pub(crate) struct TaskContext {
    id: TaskId,
    scratch: RefCell<HashMap<TypeId, Box<dyn Any>>>,
}

impl TaskContext {
    pub(crate) fn new() -> Self {
        Self {
            id: TaskId::next(),
            scratch: RefCell::new(HashMap::new()),
        }
    }

    pub(crate) fn id(&self) -> TaskId {
        self.id
    }

    /// Read the scratch entry of type `E`, if one was recorded.
    pub(crate) fn with_entry<E: Any, R>(&self, f: impl FnOnce(&E) -> R) -> Option<R> {
        let scratch = self.scratch.borrow();
        scratch
            .get(&TypeId::of::<E>())
            .and_then(|entry| entry.downcast_ref::<E>())
            .map(f)
    }

    /// Record a scratch entry, replacing any previous entry of the same type.
    pub(crate) fn insert<E: Any>(&self, entry: E) {
        self.scratch
            .borrow_mut()
            .insert(TypeId::of::<E>(), Box::new(entry));
    }

    /// Remove and return the scratch entry of type `E`.
    pub(crate) fn remove<E: Any>(&self) -> Option<E> {
        let boxed = self.scratch.borrow_mut().remove(&TypeId::of::<E>())?;
        boxed.downcast::<E>().ok().map(|entry| *entry)
    }
}

impl Drop for TaskContext {
    fn drop(&mut self) {
        tracing::trace!(task = %self.id, "task scope closed");
    }
}

/// Identity of the currently executing task, or `None` outside any scope.
pub fn current_task_id() -> Option<TaskId> {
    CONTEXT.try_with(TaskContext::id).ok()
}

/// Run `f` against the current task context, or return `None` outside a scope.
pub(crate) fn with_context<R>(f: impl FnOnce(&TaskContext) -> R) -> Option<R> {
    CONTEXT.try_with(|ctx| f(ctx)).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_ids_are_unique() {
        let a = TaskId::next();
        let b = TaskId::next();
        assert_ne!(a, b);
    }

    #[test]
    fn test_scratch_round_trip() {
        let ctx = TaskContext::new();
        ctx.insert(42u32);
        assert_eq!(ctx.with_entry::<u32, _>(|v| *v), Some(42));
        assert_eq!(ctx.remove::<u32>(), Some(42));
        assert_eq!(ctx.with_entry::<u32, _>(|v| *v), None);
    }

    #[test]
    fn test_no_context_outside_scope() {
        assert!(current_task_id().is_none());
    }
}
