//! # dogapi Local
//!
//! Breed sources that need no network.
//!
//! - **Memory**: A table of breeds held in process, filled by hand or from
//!   a dog.ceo `breeds/list/all` payload
//!
//! ## Example
//!
//! ```rust
//! use dogapi_core::BreedFetcher;
//! use dogapi_local::MemoryBreedFetcher;
//!
//! let fetcher = MemoryBreedFetcher::new();
//! fetcher.insert("hound", vec!["afghan", "basset"]);
//!
//! assert_eq!(fetcher.get_sub_breeds("hound").unwrap().len(), 2);
//! assert!(fetcher.get_sub_breeds("wolf").is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

mod memory;

pub use memory::{BreedListResponse, MemoryBreedFetcher};

// Re-export the trait from core
pub use dogapi_core::traits::BreedFetcher;
