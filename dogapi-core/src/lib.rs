//! # dogapi Core
//!
//! Core types, errors, and traits shared by the dogapi crates.
//!
//! - **Types**: [`SubBreeds`], the immutable list a lookup returns, and
//!   [`BreedKey`], the normalized form of a breed name
//! - **Errors**: [`DogApiError`] and the crate-wide [`Result`] alias
//! - **Constants**: Defaults and payload markers
//! - **Traits**: [`BreedFetcher`], the lookup capability every source implements
//!
//! ## Example
//!
//! ```rust
//! use dogapi_core::{BreedFetcher, DogApiError, Result, SubBreeds};
//!
//! struct Hounds;
//!
//! impl BreedFetcher for Hounds {
//!     fn get_sub_breeds(&self, breed: &str) -> Result<SubBreeds> {
//!         match breed {
//!             "hound" => Ok(SubBreeds::from(["afghan", "basset"])),
//!             other => Err(DogApiError::BreedNotFound(other.to_string())),
//!         }
//!     }
//! }
//!
//! assert_eq!(Hounds.get_sub_breeds("hound").unwrap().len(), 2);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, clippy::all)]

pub mod constants;
pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at crate root
pub use constants::*;
pub use error::{DogApiError, Result};
pub use traits::*;
pub use types::*;
