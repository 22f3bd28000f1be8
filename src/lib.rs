//! Task-Scoped HTTP Message Pooling
//!
//! The mutable-object reuse layer beneath an HTTP message abstraction on a
//! cooperatively scheduled runtime. Requests, responses, and URIs are
//! expensive to allocate per task at high request rates, so the factories
//! here recycle them through bounded pools keyed to the task's lifetime.
//!
//! # Architecture Overview
//!
//! ```text
//!                 ┌──────────────────────────────────────────────────┐
//!                 │              MESSAGE POOLING LAYER               │
//!                 │                                                  │
//!   RawRequest    │  ┌───────────┐    ┌───────────┐    ┌──────────┐  │
//!   ──────────────┼─▶│ transport │───▶│  factory  │───▶│ message  │──┼──▶ handler code
//!                 │  │ translate │    │ overwrite │    │  handle  │  │
//!                 │  └───────────┘    └─────┬─────┘    └──────────┘  │
//!                 │                         │                        │
//!                 │                         ▼                        │
//!                 │  ┌───────────┐    ┌───────────┐                  │
//!                 │  │   task    │◀───│   pool    │                  │
//!                 │  │  context  │    │ free list │                  │
//!                 │  └───────────┘    └───────────┘                  │
//!                 │                                                  │
//!                 │  config sizes the pools; task exit recycles      │
//!                 └──────────────────────────────────────────────────┘
//! ```
//!
//! # Recycling hazard
//!
//! Instances are **not reset** between tasks. A factory overwrites only the
//! fields its inputs supply; any other field still holds whatever the
//! previous task wrote. When adding a field to a message type, update every
//! factory that populates that type, or the field will leak data across
//! tasks.

// Core subsystems
pub mod message;
pub mod pool;
pub mod task;
pub mod transport;

// Construction & wiring
pub mod config;
pub mod factory;

// External collaborator contracts
pub mod kv;

pub use config::MessageConfig;
pub use factory::MessageFactories;
pub use pool::{ObjectPool, PoolError, Pooled};
pub use task::scope;
