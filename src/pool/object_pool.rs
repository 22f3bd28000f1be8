//! Task-scoped object pool over a lock-free bounded free list.
//!
//! A pool amortizes the allocation cost of one message type across many
//! short-lived tasks. Within a task, the first [`ObjectPool::checkout`]
//! claims an instance and every later checkout returns a handle to the same
//! one; when the task scope ends the instance goes back on the free list.
//!
//! **Recycled instances are not reset.** Whatever the previous task left in
//! the fields is still there on the next checkout. Every factory must
//! overwrite all the fields it is responsible for; a field a factory forgets
//! to set leaks prior-task data into the current task. This is a deliberate
//! performance trade-off, not an oversight — adding a field to a message
//! type means updating every factory that populates that type.

use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crossbeam_queue::ArrayQueue;
use thiserror::Error;

use crate::task::context::{with_context, TaskContext};

/// Default free-list capacity. A tunable bound, not a correctness constant.
pub const DEFAULT_CAPACITY: usize = 100_000;

/// Errors surfaced by pool operations.
///
/// All of these indicate caller bugs or a failed creation closure; none are
/// retried internally and none leave partial state behind.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PoolError {
    /// A pool operation ran outside any task scope.
    #[error("pool misuse: `{0}` called outside a task scope")]
    OutsideTaskScope(&'static str),

    /// `release` was called with nothing checked out for this pool.
    #[error("pool misuse: no instance checked out for this pool in the current task")]
    NothingCheckedOut,

    /// The creation closure produced no usable object on a free-list miss.
    #[error("pool misuse: creation closure produced no usable object")]
    CreateFailed,
}

/// Counters tracking pool traffic. Updates are relaxed atomic increments.
#[derive(Default)]
pub struct PoolStats {
    created: AtomicU64,
    reused: AtomicU64,
    recycled: AtomicU64,
    dropped: AtomicU64,
}

impl PoolStats {
    fn note_created(&self) {
        self.created.fetch_add(1, Ordering::Relaxed);
    }

    fn note_reused(&self) {
        self.reused.fetch_add(1, Ordering::Relaxed);
    }

    fn note_recycled(&self) {
        self.recycled.fetch_add(1, Ordering::Relaxed);
    }

    fn note_dropped(&self) {
        self.dropped.fetch_add(1, Ordering::Relaxed);
    }

    /// Take a point-in-time snapshot of the counters.
    pub fn snapshot(&self) -> PoolStatsSnapshot {
        PoolStatsSnapshot {
            created: self.created.load(Ordering::Relaxed),
            reused: self.reused.load(Ordering::Relaxed),
            recycled: self.recycled.load(Ordering::Relaxed),
            dropped: self.dropped.load(Ordering::Relaxed),
        }
    }
}

/// Snapshot of [`PoolStats`] counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct PoolStatsSnapshot {
    /// Instances manufactured on free-list misses.
    pub created: u64,
    /// Instances popped from the free list.
    pub reused: u64,
    /// Instances returned to the free list at task end.
    pub recycled: u64,
    /// Instances discarded: free list full, or a handle outlived its task.
    pub dropped: u64,
}

/// Scratch entry recording the one instance a task has checked out.
///
/// Dropping the entry is the task-exit hook: it recycles the instance if it
/// is the sole owner, otherwise lets the host allocator reclaim it. Stored
/// in the task scratch under `TypeId::of::<SlotEntry<T>>()`, so the entry
/// drops exactly once per task no matter how the task ends.
struct SlotEntry<T: 'static> {
    handle: Option<Rc<RefCell<T>>>,
    free: Arc<ArrayQueue<T>>,
    stats: Arc<PoolStats>,
}

impl<T: 'static> SlotEntry<T> {
    fn handle(&self) -> Option<Rc<RefCell<T>>> {
        self.handle.clone()
    }
}

impl<T: 'static> Drop for SlotEntry<T> {
    fn drop(&mut self) {
        let Some(handle) = self.handle.take() else {
            return;
        };
        match Rc::try_unwrap(handle) {
            Ok(cell) => {
                // Full queue: the instance is simply not returned.
                if self.free.push(cell.into_inner()).is_ok() {
                    self.stats.note_recycled();
                } else {
                    self.stats.note_dropped();
                }
            }
            // A handle escaped the task; recycling it would alias two
            // tasks, so the instance is dropped with the last handle.
            Err(_) => self.stats.note_dropped(),
        }
    }
}

/// Handle to an instance checked out for the current task.
///
/// Cheap to clone; all clones refer to the task's single instance. Handles
/// are `!Send` and must not outlive the task scope — one that does merely
/// keeps its instance from being recycled.
pub struct Pooled<T> {
    inner: Rc<RefCell<T>>,
}

impl<T> Pooled<T> {
    /// Borrow the instance.
    pub fn get(&self) -> Ref<'_, T> {
        self.inner.borrow()
    }

    /// Mutably borrow the instance.
    pub fn get_mut(&self) -> RefMut<'_, T> {
        self.inner.borrow_mut()
    }

    /// Whether two handles refer to the same physical instance.
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Rc::ptr_eq(&a.inner, &b.inner)
    }
}

impl<T> Clone for Pooled<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Pooled<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Pooled").field(&self.inner.borrow()).finish()
    }
}

/// Bounded pool of reusable instances of one object type.
///
/// Build one pool per recyclable type: the task scratch is keyed by the
/// object type, so two pools of the same `T` would shadow each other's
/// checkouts. The message factories each own exactly one.
pub struct ObjectPool<T: 'static> {
    free: Arc<ArrayQueue<T>>,
    create: Box<dyn Fn() -> Option<T> + Send + Sync>,
    stats: Arc<PoolStats>,
}

impl<T: 'static> ObjectPool<T> {
    /// Create a pool with the given free-list capacity.
    ///
    /// The creation closure manufactures an instance on a free-list miss;
    /// returning `None` surfaces as [`PoolError::CreateFailed`]. Capacity
    /// must be non-zero.
    pub fn new<F>(capacity: usize, create: F) -> Self
    where
        F: Fn() -> Option<T> + Send + Sync + 'static,
    {
        assert!(capacity > 0, "pool capacity must be non-zero");
        Self {
            free: Arc::new(ArrayQueue::new(capacity)),
            create: Box::new(create),
            stats: Arc::new(PoolStats::default()),
        }
    }

    /// Create a pool with [`DEFAULT_CAPACITY`].
    pub fn with_default_capacity<F>(create: F) -> Self
    where
        F: Fn() -> Option<T> + Send + Sync + 'static,
    {
        Self::new(DEFAULT_CAPACITY, create)
    }

    /// Claim the current task's instance for this pool.
    ///
    /// Idempotent within a task: the first call pops the free list (or runs
    /// the creation closure) and records the instance against the task;
    /// every later call returns a handle to that same instance. The
    /// instance goes back on the free list when the task scope ends.
    ///
    /// # Errors
    ///
    /// [`PoolError::OutsideTaskScope`] when no task scope is active — a
    /// caller bug, checked before the free list is touched.
    /// [`PoolError::CreateFailed`] when the creation closure yields nothing;
    /// the task is left with no scratch entry, so a later checkout starts
    /// clean.
    pub fn checkout(&self) -> Result<Pooled<T>, PoolError> {
        with_context(|ctx| self.checkout_in(ctx))
            .ok_or(PoolError::OutsideTaskScope("checkout"))?
    }

    fn checkout_in(&self, ctx: &TaskContext) -> Result<Pooled<T>, PoolError> {
        if let Some(existing) = ctx.with_entry::<SlotEntry<T>, _>(SlotEntry::handle).flatten() {
            return Ok(Pooled { inner: existing });
        }

        let instance = match self.free.pop() {
            Some(instance) => {
                self.stats.note_reused();
                instance
            }
            None => {
                let instance = (self.create)().ok_or(PoolError::CreateFailed)?;
                self.stats.note_created();
                instance
            }
        };

        let handle = Rc::new(RefCell::new(instance));
        ctx.insert(SlotEntry {
            handle: Some(Rc::clone(&handle)),
            free: Arc::clone(&self.free),
            stats: Arc::clone(&self.stats),
        });
        Ok(Pooled { inner: handle })
    }

    /// Return the current task's instance to the free list early.
    ///
    /// Normally the task-exit hook does this; `release` exists for callers
    /// that are done with the instance mid-task. A checkout after `release`
    /// starts over from the free list. If live handles to the instance are
    /// still around, it is dropped rather than queued, so no other task can
    /// alias it.
    ///
    /// # Errors
    ///
    /// [`PoolError::OutsideTaskScope`] outside any task scope,
    /// [`PoolError::NothingCheckedOut`] when the task holds no instance for
    /// this pool.
    pub fn release(&self) -> Result<(), PoolError> {
        with_context(|ctx| {
            // Dropping the entry pushes the instance back.
            ctx.remove::<SlotEntry<T>>()
                .map(drop)
                .ok_or(PoolError::NothingCheckedOut)
        })
        .ok_or(PoolError::OutsideTaskScope("release"))?
    }

    /// Number of instances currently sitting on the free list.
    pub fn free_len(&self) -> usize {
        self.free.len()
    }

    /// Free-list capacity.
    pub fn capacity(&self) -> usize {
        self.free.capacity()
    }

    /// Traffic counters for this pool.
    pub fn stats(&self) -> PoolStatsSnapshot {
        self.stats.snapshot()
    }
}

impl<T: 'static> fmt::Debug for ObjectPool<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectPool")
            .field("capacity", &self.free.capacity())
            .field("free_len", &self.free.len())
            .finish_non_exhaustive()
    }
}
