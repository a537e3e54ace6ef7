//! People taking part in a group.
//!
//! A [`Person`] is nothing more than a name: existence is implied by
//! membership in a roster. Names are trimmed and NFC-normalized so that
//! visually identical input always maps to the same person.

use std::{borrow::Borrow, fmt};

use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

use crate::{EngineError, ResultEngine};

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Person(String);

impl Person {
    /// Builds a person from a display name.
    ///
    /// Fails with [`EngineError::InvalidPerson`] when the name is blank.
    pub fn new(name: &str) -> ResultEngine<Self> {
        let normalized: String = name.trim().nfc().collect();
        if normalized.is_empty() {
            return Err(EngineError::InvalidPerson("name is empty".to_string()));
        }
        Ok(Self(normalized))
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for Person {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Person {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for Person {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Person::new(value)
    }
}

impl TryFrom<String> for Person {
    type Error = EngineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Person::new(&value)
    }
}

impl From<Person> for String {
    fn from(value: Person) -> Self {
        value.0
    }
}
