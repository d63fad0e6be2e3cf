//! KRK components - cache and list rendering building blocks
//!
//! A bounded TTL cache with FIFO eviction, a viewport-windowed virtual
//! scroller, and a small HTTP service sharing one cache between clients.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod keys;
pub mod models;
pub mod scroller;
pub mod tasks;

pub use api::AppState;
pub use cache::{Lookup, TtlCache};
pub use config::{CacheOptions, Config, ScrollerOptions};
pub use scroller::{ScrollSurface, ViewportWindow, VirtualScroller};
pub use tasks::spawn_cleanup_task;
