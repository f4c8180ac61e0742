//! Shared constants for dogapi.

/// Default number of cache slots reserved up front.
///
/// This only pre-sizes the map; the cache itself is unbounded.
pub const DEFAULT_CACHE_CAPACITY: usize = 64;

/// `status` value the dog.ceo API uses for a successful response.
pub const RESPONSE_STATUS_SUCCESS: &str = "success";

/// Key the empty or absent breed name normalizes to.
pub const EMPTY_BREED_KEY: &str = "";
