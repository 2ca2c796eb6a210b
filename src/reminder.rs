use std::fmt;

use rand::Rng;

const ID_LENGTH: usize = 10;
const ID_ALPHABET: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789_-";

/// Opaque reminder identifier, assigned at creation and never changed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReminderId(String);

impl ReminderId {
    /// Generates a fresh 10-character id from a URL-safe alphabet.
    ///
    /// The generator does not check for collisions; with 64^10 possible
    /// values the store trusts the odds.
    pub fn generate() -> Self {
        let mut rng = rand::rng();
        let id = (0..ID_LENGTH)
            .map(|_| ID_ALPHABET[rng.random_range(0..ID_ALPHABET.len())] as char)
            .collect();

        Self(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReminderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ReminderId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

#[derive(Debug, Clone)]
pub struct Reminder {
    pub id: ReminderId,
    pub text: String,
}

impl Reminder {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: ReminderId::generate(),
            text: text.into(),
        }
    }
}
