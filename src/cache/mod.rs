//! Cache module for storing rendered standings in memory
//!
//! This module provides a cache manager that keeps rendered artifacts for a
//! configurable TTL (time-to-live). Unlike a stale-while-revalidate cache, an
//! expired entry is never served: it reads exactly like a key that was never set.

mod manager;

pub use manager::{CacheManager, DEFAULT_TTL_SECS};
