//! API key authentication for inbound webhooks.
//! The expected key is injected at construction, there is no global key.

mod error;

pub use error::{AuthError, Result};

use secrecy::{ExposeSecret, SecretString};

#[derive(Clone, Debug)]
pub struct ApiKeyValidator {
    expected: SecretString,
}

impl ApiKeyValidator {
    pub fn new(expected: SecretString) -> Self {
        ApiKeyValidator { expected }
    }

    /// Plain equality against the expected key. No trimming, no case folding.
    pub fn is_valid(&self, key: &str) -> bool {
        self.expected.expose_secret() == key
    }

    pub fn validate(&self, key: &str) -> Result<()> {
        if self.is_valid(key) {
            Ok(())
        } else {
            Err(AuthError::InvalidApiKey)
        }
    }
}
