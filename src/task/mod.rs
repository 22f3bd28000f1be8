//! Task context subsystem.
//!
//! # Data Flow
//! ```text
//! scope(fut) installs a fresh TaskContext (task-local)
//!     → pool checkouts record their instance in the context scratch
//!     → the wrapped future runs to completion, error, or is dropped
//!     → TaskContext drops → scratch entries drop → instances recycled
//! ```
//!
//! # Design Decisions
//! - Context lives in a `tokio::task_local!`, not a process-wide registry;
//!   each `scope` call is one logical task
//! - Exit notification is structural: dropping the context is the hook, so
//!   it fires exactly once on every termination path, cancellation included
//! - Scratch is keyed by `TypeId` and only reachable from this crate

pub mod context;
pub mod scope;

pub use context::{current_task_id, TaskId};
pub use scope::scope;
