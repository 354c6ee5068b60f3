//! Shared secret used to authorise device writes

use std::fmt;

use super::ValidationError;

/// Validated shared secret (non-empty)
///
/// An empty secret is refused because a request without the header would
/// otherwise match it.
#[derive(Clone, PartialEq, Eq)]
pub struct SecretKey(String);

impl SecretKey {
    /// Create a secret key, rejecting the empty string.
    ///
    /// # Example
    /// ```
    /// use thermolog_server::models::SecretKey;
    ///
    /// assert!(SecretKey::new("s3cret").is_ok());
    /// assert!(SecretKey::new("").is_err());
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        if s.is_empty() {
            return Err(ValidationError::Empty {
                field: "secret key",
            });
        }
        Ok(Self(s.to_owned()))
    }

    /// Exact string comparison against a provided header value.
    ///
    /// Not constant-time.
    pub fn matches(&self, provided: &str) -> bool {
        self.0 == provided
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretKey(***)")
    }
}
