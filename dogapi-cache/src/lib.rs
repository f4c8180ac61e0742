//! # dogapi Cache
//!
//! Caching decorator for breed fetchers.
//!
//! [`CachingBreedFetcher`] wraps any [`BreedFetcher`](dogapi_core::BreedFetcher)
//! and serves repeated lookups from memory. Keys are case-insensitive,
//! failed lookups are never cached, and every call that reaches the wrapped
//! fetcher is counted.
//!
//! ## Example
//!
//! ```rust
//! use dogapi_cache::CachingBreedFetcher;
//! use dogapi_local::MemoryBreedFetcher;
//!
//! let source = MemoryBreedFetcher::with_breeds([("hound", vec!["afghan", "basset"])]);
//! let cache = CachingBreedFetcher::new(source);
//!
//! assert_eq!(cache.lookup(Some("Hound")).unwrap().len(), 2);
//! assert_eq!(cache.lookup(Some("hound")).unwrap().len(), 2);
//! assert_eq!(cache.calls_made(), 1);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

mod cache;

pub use cache::{CacheBuilder, CacheConfig, CacheStats, CachingBreedFetcher};
