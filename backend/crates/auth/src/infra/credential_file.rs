//! Static Credential Store
//!
//! Teacher accounts loaded once from a JSON record:
//!
//! ```json
//! {
//!   "teachers": [
//!     { "username": "teacher1", "password_hash": "$2b$12$..." }
//!   ]
//! }
//! ```
//!
//! Any problem with the record is a startup error, including a hash whose
//! cost differs from the configured one: the decoy hash used for unknown
//! user names is built at that cost, and a cheaper stored hash would make
//! known user names answer measurably faster. The store is never written
//! after construction, so lookups take no lock.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use platform::password::{HashedPassword, PasswordHashError};
use serde::Deserialize;
use thiserror::Error;

use crate::domain::entity::teacher_account::TeacherAccount;
use crate::domain::repository::TeacherRepository;
use crate::domain::value_object::user_name::{UserName, UserNameError};
use crate::error::AuthResult;

/// Reasons the credential record cannot be used
#[derive(Debug, Error)]
pub enum CredentialStoreError {
    #[error("failed to read credential record {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed credential record: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("invalid username in teacher entry #{index}: {source}")]
    InvalidUserName { index: usize, source: UserNameError },

    #[error("password_hash for teacher '{user_name}' is not a usable bcrypt hash: {source}")]
    InvalidPasswordHash {
        user_name: String,
        source: PasswordHashError,
    },

    #[error("password_hash for teacher '{user_name}' has cost {found}, expected {expected}")]
    UnexpectedHashCost {
        user_name: String,
        expected: u32,
        found: u32,
    },

    #[error("teacher '{0}' appears more than once")]
    DuplicateUserName(String),

    #[error("credential record contains no teachers")]
    Empty,
}

#[derive(Debug, Deserialize)]
struct CredentialRecord {
    teachers: Vec<TeacherRecord>,
}

#[derive(Debug, Deserialize)]
struct TeacherRecord {
    username: String,
    password_hash: String,
}

/// Immutable teacher credential store
#[derive(Clone)]
pub struct StaticCredentialStore {
    accounts: Arc<HashMap<UserName, TeacherAccount>>,
}

impl StaticCredentialStore {
    /// Load and validate the record at `path`; every hash must use `hash_cost`
    pub fn load(path: impl AsRef<Path>, hash_cost: u32) -> Result<Self, CredentialStoreError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| CredentialStoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let store = Self::from_json_str(&raw, hash_cost)?;
        tracing::info!(
            path = %path.display(),
            teachers = store.len(),
            hash_cost,
            "Teacher credentials loaded"
        );
        Ok(store)
    }

    /// Parse and validate a JSON record
    pub fn from_json_str(raw: &str, hash_cost: u32) -> Result<Self, CredentialStoreError> {
        let record: CredentialRecord = serde_json::from_str(raw)?;

        let mut accounts = Vec::with_capacity(record.teachers.len());
        for (index, entry) in record.teachers.into_iter().enumerate() {
            let user_name = UserName::new(entry.username)
                .map_err(|source| CredentialStoreError::InvalidUserName { index, source })?;

            let password_hash = HashedPassword::from_hash_string(entry.password_hash).map_err(
                |source| CredentialStoreError::InvalidPasswordHash {
                    user_name: user_name.to_string(),
                    source,
                },
            )?;

            accounts.push(TeacherAccount::new(user_name, password_hash));
        }

        Self::from_accounts(accounts, hash_cost)
    }

    /// Build from already-parsed accounts, all hashed at `hash_cost`
    pub fn from_accounts(
        accounts: impl IntoIterator<Item = TeacherAccount>,
        hash_cost: u32,
    ) -> Result<Self, CredentialStoreError> {
        let mut map = HashMap::new();
        for account in accounts {
            let found = account.password_hash.cost();
            if found != hash_cost {
                return Err(CredentialStoreError::UnexpectedHashCost {
                    user_name: account.user_name.to_string(),
                    expected: hash_cost,
                    found,
                });
            }
            if map.contains_key(&account.user_name) {
                return Err(CredentialStoreError::DuplicateUserName(
                    account.user_name.to_string(),
                ));
            }
            map.insert(account.user_name.clone(), account);
        }

        if map.is_empty() {
            return Err(CredentialStoreError::Empty);
        }

        Ok(Self {
            accounts: Arc::new(map),
        })
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Direct lookup by exact user name
    pub fn lookup(&self, user_name: &UserName) -> Option<&TeacherAccount> {
        self.accounts.get(user_name)
    }
}

impl TeacherRepository for StaticCredentialStore {
    async fn find_by_user_name(&self, user_name: &UserName) -> AuthResult<Option<TeacherAccount>> {
        Ok(self.lookup(user_name).cloned())
    }
}
