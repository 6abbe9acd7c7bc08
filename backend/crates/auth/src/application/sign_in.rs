//! Sign In Use Case
//!
//! Checks a teacher's credentials and opens a session.

use std::sync::Arc;

use platform::password::ClearTextPassword;

use crate::application::password_verifier::PasswordVerifier;
use crate::application::session_manager::SessionManager;
use crate::domain::repository::{SessionRepository, TeacherRepository};
use crate::domain::value_object::{session_token::SessionToken, user_name::UserName};
use crate::error::{AuthError, AuthResult};

/// Sign in input
pub struct SignInInput {
    pub user_name: String,
    pub password: String,
}

/// Sign in output
#[derive(Debug)]
pub struct SignInOutput {
    /// Session token for cookie
    pub session_token: SessionToken,
    pub user_name: UserName,
}

/// Sign in use case
pub struct SignInUseCase<T, S>
where
    T: TeacherRepository,
    S: SessionRepository,
{
    teachers: Arc<T>,
    sessions: SessionManager<S>,
    verifier: Arc<PasswordVerifier>,
}

impl<T, S> SignInUseCase<T, S>
where
    T: TeacherRepository,
    S: SessionRepository,
{
    pub fn new(teachers: Arc<T>, sessions: SessionManager<S>, verifier: Arc<PasswordVerifier>) -> Self {
        Self {
            teachers,
            sessions,
            verifier,
        }
    }

    /// Every failure path runs exactly one bcrypt verification and ends in
    /// [`AuthError::InvalidCredentials`].
    pub async fn execute(&self, input: SignInInput) -> AuthResult<SignInOutput> {
        let password = ClearTextPassword::new(input.password);

        let account = match UserName::new(input.user_name) {
            Ok(user_name) => self.teachers.find_by_user_name(&user_name).await?,
            Err(_) => None,
        };

        let password_valid = self
            .verifier
            .verify_or_decoy(password, account.as_ref().map(|a| &a.password_hash))
            .await?;

        let account = match account {
            Some(account) if password_valid => account,
            _ => return Err(AuthError::InvalidCredentials),
        };

        let session_token = self.sessions.create(&account.user_name).await?;

        tracing::info!(user_name = %account.user_name, "Teacher signed in");

        Ok(SignInOutput {
            session_token,
            user_name: account.user_name,
        })
    }
}
