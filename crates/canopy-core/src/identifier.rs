//! Node identifiers backed by a global string interner.
//!
//! Callers name tree nodes with arbitrary strings or integers. Both are
//! interned into an [`Id`], a `Copy` handle that hashes and compares in
//! constant time. Integer identifiers are interned by their decimal text, so
//! `Id::from(0u32) == Id::new("0")`. No identifier value is reserved.

use std::{
    fmt,
    sync::{Mutex, MutexGuard, OnceLock},
};

use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{self, Visitor},
};
use string_interner::{DefaultStringInterner, DefaultSymbol};

/// Global string interner for identifier storage.
///
/// # Thread Safety
///
/// Access goes through a `Mutex`, so identifiers may be created from any thread.
static INTERNER: OnceLock<Mutex<DefaultStringInterner>> = OnceLock::new();

fn interner() -> MutexGuard<'static, DefaultStringInterner> {
    INTERNER
        .get_or_init(|| Mutex::new(DefaultStringInterner::new()))
        .lock()
        .expect("Failed to acquire interner lock")
}

/// Interned node identifier.
///
/// # Examples
///
/// ```
/// use canopy_core::identifier::Id;
///
/// let root = Id::new("root");
/// let zero = Id::from(0u32);
///
/// assert_eq!(root, "root");
/// assert_eq!(zero, "0");
/// assert_ne!(root, zero);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Id(DefaultSymbol);

impl Id {
    /// Creates an `Id` from its textual name.
    pub fn new(name: &str) -> Self {
        Self(interner().get_or_intern(name))
    }

    /// Runs `f` with the textual form of this identifier.
    ///
    /// The interner stays locked while `f` runs, so `f` must not create or
    /// format other identifiers.
    pub fn with_str<R>(self, f: impl FnOnce(&str) -> R) -> R {
        let interner = interner();
        let name = interner
            .resolve(self.0)
            .expect("Symbol should exist in interner");
        f(name)
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.with_str(str::to_owned);
        f.write_str(&name)
    }
}

impl std::str::FromStr for Id {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<&str> for Id {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Id {
    fn from(name: String) -> Self {
        Self::new(&name)
    }
}

impl From<u32> for Id {
    fn from(value: u32) -> Self {
        Self::new(&value.to_string())
    }
}

impl From<u64> for Id {
    fn from(value: u64) -> Self {
        Self::new(&value.to_string())
    }
}

impl From<i64> for Id {
    fn from(value: i64) -> Self {
        Self::new(&value.to_string())
    }
}

impl PartialEq<str> for Id {
    /// Allows direct comparison with string slices: `id == "string"`
    fn eq(&self, other: &str) -> bool {
        self.with_str(|name| name == other)
    }
}

impl PartialEq<&str> for Id {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl Serialize for Id {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.with_str(|name| serializer.serialize_str(name))
    }
}

impl<'de> Deserialize<'de> for Id {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(IdVisitor)
    }
}

/// Accepts identifiers written either as strings or as integers.
struct IdVisitor;

impl Visitor<'_> for IdVisitor {
    type Value = Id;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a string or integer node identifier")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Id, E> {
        Ok(Id::new(value))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Id, E> {
        Ok(Id::from(value))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Id, E> {
        Ok(Id::from(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let id1 = Id::new("leaf");
        let id2 = Id::new("leaf");
        let id3 = Id::new("branch");

        assert_eq!(id1, id2);
        assert_ne!(id1, id3);
        assert_eq!(id1, "leaf");
    }

    #[test]
    fn test_integer_ids_intern_by_decimal_text() {
        assert_eq!(Id::from(7u32), Id::new("7"));
        assert_eq!(Id::from(7u64), Id::from(7i64));
        assert_eq!(Id::from(-3i64), "-3");
    }

    #[test]
    fn test_zero_is_an_ordinary_id() {
        let zero = Id::from(0u32);
        assert_eq!(zero, "0");
        assert_ne!(zero, Id::new(""));
    }

    #[test]
    fn test_display_trait() {
        let id = Id::new("display_test");
        assert_eq!(format!("{}", id), "display_test");
        assert_eq!(Id::from(42u32).to_string(), "42");
    }

    #[test]
    fn test_from_str() {
        let id: Id = "parsed".parse().unwrap();
        assert_eq!(id, Id::new("parsed"));
    }

    #[test]
    fn test_with_str() {
        let id = Id::new("measured");
        assert_eq!(id.with_str(str::len), 8);
    }

    #[test]
    fn test_hash_and_eq() {
        use std::collections::HashMap;

        let id1 = Id::new("key1");
        let id2 = Id::new("key1");
        let id3 = Id::new("key2");

        let mut map = HashMap::new();
        map.insert(id1, "value1");
        map.insert(id3, "value2");

        assert_eq!(map.get(&id2), Some(&"value1"));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_deserialize_string_and_integer() {
        let ids: Vec<Id> = serde_json::from_str(r#"["a", 1, 0, -2]"#).unwrap();
        assert_eq!(ids, vec![Id::new("a"), Id::new("1"), Id::new("0"), Id::new("-2")]);
    }

    #[test]
    fn test_deserialize_rejects_other_types() {
        let result: Result<Id, _> = serde_json::from_str("1.5");
        assert!(result.is_err());
        let result: Result<Id, _> = serde_json::from_str("true");
        assert!(result.is_err());
    }

    #[test]
    fn test_serialize_as_string() {
        let json = serde_json::to_string(&vec![Id::from(3u32), Id::new("x")]).unwrap();
        assert_eq!(json, r#"["3","x"]"#);
    }
}
