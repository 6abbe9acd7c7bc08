//! Password Verifier
//!
//! Runs bcrypt verification on the blocking pool. When the account does not
//! exist, a decoy hash is verified instead so the unknown-user path costs
//! the same as a wrong password.

use std::sync::Arc;

use platform::password::{ClearTextPassword, HashedPassword};

use crate::error::{AuthError, AuthResult};

pub struct PasswordVerifier {
    decoy: Arc<HashedPassword>,
}

impl PasswordVerifier {
    /// Build a verifier with a decoy hash at `cost`
    ///
    /// Hashing at cost 12 takes a noticeable fraction of a second; call once
    /// at startup.
    pub fn new(cost: u32) -> AuthResult<Self> {
        let decoy =
            HashedPassword::decoy(cost).map_err(|e| AuthError::Internal(e.to_string()))?;
        Ok(Self {
            decoy: Arc::new(decoy),
        })
    }

    /// Verify `password` against `stored`
    pub async fn verify(
        &self,
        password: ClearTextPassword,
        stored: &HashedPassword,
    ) -> AuthResult<bool> {
        let stored = stored.clone();
        let valid = tokio::task::spawn_blocking(move || stored.verify(&password)).await?;
        Ok(valid)
    }

    /// Verify `password` against `stored`, or burn one decoy verification
    /// and return `false` when there is nothing to verify against
    pub async fn verify_or_decoy(
        &self,
        password: ClearTextPassword,
        stored: Option<&HashedPassword>,
    ) -> AuthResult<bool> {
        match stored {
            Some(hash) => self.verify(password, hash).await,
            None => {
                let decoy = self.decoy.clone();
                tokio::task::spawn_blocking(move || {
                    let _ = decoy.verify(&password);
                })
                .await?;
                Ok(false)
            }
        }
    }
}
