//! Object pooling subsystem.
//!
//! # Data Flow
//! ```text
//! factory asks its pool for an instance
//!     → checkout: scratch hit? return the task's existing handle
//!     → miss: pop the free list, else run the creation closure
//!     → instance recorded in the task scratch (one slot per type)
//!     → task ends → slot drops → instance pushed back to the free list
//! ```
//!
//! # Design Decisions
//! - Free list is a lock-free bounded `ArrayQueue`; push/pop never block
//!   and never suspend
//! - At most one instance per pool per task; repeated checkout is idempotent
//! - No reset on recycle: instances keep the previous task's field values
//!   until a factory overwrites them (see [`ObjectPool`])

pub mod object_pool;

pub use object_pool::{
    ObjectPool, PoolError, PoolStats, PoolStatsSnapshot, Pooled, DEFAULT_CAPACITY,
};
