use std::fmt;

use crate::error::DomainError;

/// The single static password that authorizes writes.
///
/// When no secret is configured every write is refused.
#[derive(Clone, Default)]
pub struct SharedSecret(Option<String>);

impl SharedSecret {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(Some(secret.into()))
    }

    /// A secret that matches nothing.
    pub fn unset() -> Self {
        Self(None)
    }

    pub fn is_configured(&self) -> bool {
        self.0.is_some()
    }

    /// Exact comparison against the configured secret.
    pub fn verify(&self, candidate: Option<&str>) -> Result<(), DomainError> {
        match (&self.0, candidate) {
            (Some(expected), Some(given)) if expected == given => Ok(()),
            (None, _) => {
                tracing::warn!("Write rejected: no shared secret configured");
                Err(DomainError::Forbidden)
            }
            _ => {
                tracing::warn!("Write rejected: incorrect password");
                Err(DomainError::Forbidden)
            }
        }
    }
}

impl From<Option<String>> for SharedSecret {
    fn from(secret: Option<String>) -> Self {
        Self(secret)
    }
}

impl fmt::Debug for SharedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shown = if self.0.is_some() { "***" } else { "<unset>" };
        f.debug_tuple("SharedSecret").field(&shown).finish()
    }
}
