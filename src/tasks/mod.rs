//! Background Tasks Module
//!
//! Contains background tasks that run periodically while the cache is alive.
//!
//! # Tasks
//! - TTL Sweep: Removes expired cache entries on a fixed interval

mod sweep;

pub use sweep::spawn_sweep_task;
