//! Domain types for dogapi.
//!
//! - [`SubBreeds`]: Immutable, cheaply cloned list of sub-breed names
//! - [`BreedKey`]: Case-insensitive cache key derived from a breed name

mod breed;

pub use breed::*;
