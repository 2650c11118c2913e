//! Admin credential check
//!
//! The ledger is administered through one static password. Whether the
//! current session is authenticated is tracked by the menu, not by the
//! ledger.

use secrecy::{ExposeSecret, SecretString};

/// Password used when none is configured
pub const DEFAULT_ADMIN_PASSWORD: &str = "shrey";

/// The single administrator credential
///
/// Comparison is an exact string match; no trimming or case folding. The
/// password is only read back through `ExposeSecret`, and `Debug` redacts it.
#[derive(Debug)]
pub struct AdminCredential {
    password: SecretString,
}

impl AdminCredential {
    pub fn new(password: impl Into<String>) -> Self {
        Self {
            password: SecretString::from(password.into()),
        }
    }

    /// Check an entered password
    pub fn verify(&self, attempt: &str) -> bool {
        self.password.expose_secret() == attempt
    }
}

impl Clone for AdminCredential {
    fn clone(&self) -> Self {
        Self::new(self.password.expose_secret())
    }
}

impl Default for AdminCredential {
    fn default() -> Self {
        Self::new(DEFAULT_ADMIN_PASSWORD)
    }
}
