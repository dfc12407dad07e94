/// Login secret codes
use rand::{distributions::Alphanumeric, Rng};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Secret code used in place of a password to log in
///
/// Codes are drawn uniformly from `[a-zA-Z0-9]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SecretCode(String);

impl SecretCode {
    /// Length of codes produced by [`SecretCode::generate`]
    pub const DEFAULT_LENGTH: usize = 8;

    /// Wrap an existing code
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Generate a random code of the default length
    pub fn generate() -> Self {
        Self::generate_with_length(Self::DEFAULT_LENGTH)
    }

    /// Generate a random code of `len` alphanumeric characters
    pub fn generate_with_length(len: usize) -> Self {
        let code = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(len)
            .map(char::from)
            .collect();
        Self(code)
    }

    /// Get the inner string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SecretCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
