//! Identifier management using string interning for efficient storage and comparison.
//!
//! This module provides the [`Id`] type backed by a global string interner.

use std::{
    fmt,
    sync::{Mutex, OnceLock},
};

use string_interner::{DefaultStringInterner, DefaultSymbol};

/// Global string interner for identifier storage.
///
/// # Thread Safety
///
/// Access goes through a `Mutex`, so identifiers can be created and resolved
/// from any thread.
static INTERNER: OnceLock<Mutex<DefaultStringInterner>> = OnceLock::new();

fn interner() -> &'static Mutex<DefaultStringInterner> {
    INTERNER.get_or_init(|| Mutex::new(DefaultStringInterner::new()))
}

/// Efficient identifier type using string interning.
///
/// Two `Id` values created from the same string are equal and share storage,
/// so identifiers can be freely copied and compared when wiring nodes and
/// edges together.
///
/// # Examples
///
/// ```
/// use topogram_core::identifier::Id;
///
/// let api = Id::new("api");
/// let api_again = Id::new("api");
/// assert_eq!(api, api_again);
/// assert_eq!(api.to_string(), "api");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Id(DefaultSymbol);

impl Id {
    /// Creates an `Id` from a string, interning it if it is new.
    pub fn new(name: &str) -> Self {
        let mut pool = interner().lock().expect("identifier interner poisoned");
        Id(pool.get_or_intern(name))
    }

    /// Resolves the identifier back to its string form.
    pub fn resolve(&self) -> String {
        let pool = interner().lock().expect("identifier interner poisoned");
        pool.resolve(self.0)
            .map(str::to_owned)
            .unwrap_or_else(|| String::from("<unresolved>"))
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.resolve())
    }
}

impl PartialEq<&str> for Id {
    fn eq(&self, other: &&str) -> bool {
        self.resolve() == *other
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::Id;

    #[test]
    fn same_name_yields_equal_ids() {
        assert_eq!(Id::new("redis"), Id::new("redis"));
    }

    #[test]
    fn distinct_names_yield_distinct_ids() {
        assert_ne!(Id::new("redis"), Id::new("postgres"));
    }

    #[test]
    fn display_resolves_original_name() {
        let id = Id::new("cutout_workers");
        assert_eq!(id.to_string(), "cutout_workers");
        assert_eq!(id, "cutout_workers");
    }

    proptest! {
        #[test]
        fn interning_is_stable(name in "[a-zA-Z0-9_ -]{1,40}") {
            let first = Id::new(&name);
            let second = Id::new(&name);
            prop_assert_eq!(first, second);
            prop_assert_eq!(first.resolve(), name);
        }
    }
}
