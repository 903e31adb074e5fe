//! Admin gate controlling access to edit/delete capability

use crate::error::{AuthError, Result};
use crate::types::AdminCredential;

/// Credential verification seam.
///
/// The stock implementation compares the stored pair in plain text; a
/// stronger scheme can slot in behind this trait without touching the
/// gate itself.
pub trait AuthProvider {
    fn verify(&self, username: &str, password: &str) -> bool;
}

/// Case-sensitive plain-text equality against a stored credential pair
pub struct StoredCredentialProvider {
    credential: AdminCredential,
}

impl StoredCredentialProvider {
    pub fn new(credential: AdminCredential) -> Self {
        Self { credential }
    }
}

impl AuthProvider for StoredCredentialProvider {
    fn verify(&self, username: &str, password: &str) -> bool {
        username == self.credential.username && password == self.credential.password
    }
}

/// Two-state login session gating the admin view
pub struct AdminGate {
    provider: Box<dyn AuthProvider>,
    logged_in: bool,
}

impl AdminGate {
    /// Create a gate in the logged-out state
    pub fn new(provider: Box<dyn AuthProvider>) -> Self {
        Self {
            provider,
            logged_in: false,
        }
    }

    /// Transition to logged-in when the submitted pair matches.
    ///
    /// A mismatch leaves the state untouched; there is no lockout and
    /// no rate limiting.
    pub fn login(&mut self, username: &str, password: &str) -> Result<()> {
        if self.provider.verify(username, password) {
            self.logged_in = true;
            Ok(())
        } else {
            Err(AuthError.into())
        }
    }

    /// Explicit logout
    pub fn logout(&mut self) {
        self.logged_in = false;
    }

    /// Edit/delete surfaces are reachable only while this holds
    pub fn is_logged_in(&self) -> bool {
        self.logged_in
    }
}
