//! Breed lookup types.
//!
//! - [`SubBreeds`]: The result of a lookup, frozen at construction
//! - [`BreedKey`]: The normalized name used to address cached results

use std::borrow::Borrow;
use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::constants::EMPTY_BREED_KEY;

// ═══════════════════════════════════════════════════════════════════════════════
// SUB-BREEDS
// ═══════════════════════════════════════════════════════════════════════════════

/// Ordered, immutable list of sub-breed names.
///
/// Backed by an `Arc<[String]>`: cloning shares the same allocation and
/// there is no way to obtain mutable access to the names. A value handed
/// out by a cache can therefore never be used to alter what the cache
/// returns on a later lookup.
///
/// # Example
/// ```
/// use dogapi_core::SubBreeds;
///
/// let hounds = SubBreeds::from(vec!["afghan".to_string(), "basset".to_string()]);
/// assert_eq!(hounds.len(), 2);
/// assert_eq!(hounds[0], "afghan");
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct SubBreeds(Arc<[String]>);

impl SubBreeds {
    /// Creates an empty list.
    pub fn empty() -> Self {
        Self(Arc::from(Vec::new()))
    }

    /// Returns the names as a slice.
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Copies the names into a vector the caller owns.
    pub fn to_vec(&self) -> Vec<String> {
        self.0.to_vec()
    }

    /// Returns true if both values share the same allocation.
    pub fn ptr_eq(&self, other: &SubBreeds) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Default for SubBreeds {
    fn default() -> Self {
        Self::empty()
    }
}

impl Deref for SubBreeds {
    type Target = [String];

    fn deref(&self) -> &[String] {
        &self.0
    }
}

impl AsRef<[String]> for SubBreeds {
    fn as_ref(&self) -> &[String] {
        &self.0
    }
}

impl fmt::Debug for SubBreeds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

impl From<Vec<String>> for SubBreeds {
    fn from(names: Vec<String>) -> Self {
        Self(Arc::from(names))
    }
}

impl From<&[String]> for SubBreeds {
    fn from(names: &[String]) -> Self {
        Self(Arc::from(names))
    }
}

impl From<Vec<&str>> for SubBreeds {
    fn from(names: Vec<&str>) -> Self {
        names.into_iter().collect()
    }
}

impl<const N: usize> From<[&str; N]> for SubBreeds {
    fn from(names: [&str; N]) -> Self {
        names.into_iter().collect()
    }
}

impl From<SubBreeds> for Vec<String> {
    fn from(sub_breeds: SubBreeds) -> Self {
        sub_breeds.to_vec()
    }
}

impl FromIterator<String> for SubBreeds {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> FromIterator<&'a str> for SubBreeds {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self(iter.into_iter().map(str::to_string).collect())
    }
}

impl<'a> IntoIterator for &'a SubBreeds {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl PartialEq<[String]> for SubBreeds {
    fn eq(&self, other: &[String]) -> bool {
        *self.0 == *other
    }
}

impl PartialEq<Vec<String>> for SubBreeds {
    fn eq(&self, other: &Vec<String>) -> bool {
        *self.0 == other[..]
    }
}

impl<const N: usize> PartialEq<[&str; N]> for SubBreeds {
    fn eq(&self, other: &[&str; N]) -> bool {
        self.0.len() == N && self.0.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// BREED KEY
// ═══════════════════════════════════════════════════════════════════════════════

/// Normalized breed name used to address cached results.
///
/// An absent name maps to the empty key. Anything else is lowercased with
/// the Unicode default case mapping, which does not depend on the process
/// locale.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BreedKey(String);

impl BreedKey {
    /// Normalizes an optional breed name.
    pub fn normalize(breed: Option<&str>) -> Self {
        match breed {
            Some(name) => Self(name.to_lowercase()),
            None => Self(EMPTY_BREED_KEY.to_string()),
        }
    }

    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if this is the key of an empty or absent name.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for BreedKey {
    fn from(breed: &str) -> Self {
        Self::normalize(Some(breed))
    }
}

impl Borrow<str> for BreedKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BreedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use test_case::test_case;

    #[test_case(Some("Husky"), "husky" ; "mixed case")]
    #[test_case(Some("HUSKY"), "husky" ; "upper case")]
    #[test_case(Some("husky"), "husky" ; "already lower")]
    #[test_case(Some(""), "" ; "empty")]
    #[test_case(None, "" ; "absent")]
    #[test_case(Some("  Hound "), "  hound " ; "whitespace kept")]
    fn test_breed_key_normalize(input: Option<&str>, expected: &str) {
        assert_eq!(BreedKey::normalize(input).as_str(), expected);
    }

    #[test]
    fn test_breed_key_unicode_case() {
        assert_eq!(BreedKey::from("ÉPAGNEUL"), BreedKey::from("épagneul"));
        assert_eq!(BreedKey::from("ÉPAGNEUL").as_str(), "épagneul");
        assert_eq!(BreedKey::from("TERRIER").as_str(), "terrier");
    }

    #[test]
    fn test_breed_key_borrows_as_str() {
        let mut keys = std::collections::HashSet::new();
        keys.insert(BreedKey::from("Hound"));
        assert!(keys.contains("hound"));
    }

    #[test]
    fn test_none_and_empty_share_key() {
        assert_eq!(BreedKey::normalize(None), BreedKey::normalize(Some("")));
        assert!(BreedKey::normalize(None).is_empty());
    }

    #[test]
    fn test_sub_breeds_from_vec() {
        let names = SubBreeds::from(vec!["afghan".to_string(), "basset".to_string()]);
        assert_eq!(names.len(), 2);
        assert_eq!(names, ["afghan", "basset"]);
        assert_eq!(names.to_vec(), vec!["afghan".to_string(), "basset".to_string()]);
    }

    #[test]
    fn test_sub_breeds_clone_shares_storage() {
        let names = SubBreeds::from(["afghan", "basset"]);
        let copy = names.clone();
        assert!(names.ptr_eq(&copy));
        assert_eq!(names, copy);
    }

    #[test]
    fn test_sub_breeds_owned_copy_is_detached() {
        let names = SubBreeds::from(["afghan", "basset"]);
        let mut owned = names.to_vec();
        owned.push("blood".into());
        owned[0] = "changed".into();
        assert_eq!(names, ["afghan", "basset"]);
    }

    #[test]
    fn test_sub_breeds_empty() {
        let names = SubBreeds::default();
        assert!(names.is_empty());
        assert_eq!(names, SubBreeds::empty());
    }

    #[test]
    fn test_sub_breeds_debug_is_list() {
        let names = SubBreeds::from(["afghan"]);
        assert_eq!(format!("{:?}", names), r#"["afghan"]"#);
    }

    #[test]
    fn test_sub_breeds_serde() {
        let names = SubBreeds::from(["afghan", "basset"]);
        let json = serde_json::to_string(&names).unwrap();
        assert_eq!(json, r#"["afghan","basset"]"#);

        let parsed: SubBreeds = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, names);
    }

    proptest! {
        #[test]
        fn prop_key_ignores_ascii_case(name in "[a-zA-Z]{0,16}") {
            prop_assert_eq!(
                BreedKey::from(name.as_str()),
                BreedKey::from(name.to_ascii_uppercase().as_str())
            );
        }
    }
}
