//! Teacher Account Entity
//!
//! Provisioned out of band and loaded once at startup. Never mutated by the
//! running process.

use platform::password::HashedPassword;

use crate::domain::value_object::user_name::UserName;

#[derive(Debug, Clone)]
pub struct TeacherAccount {
    pub user_name: UserName,
    pub password_hash: HashedPassword,
}

impl TeacherAccount {
    pub fn new(user_name: UserName, password_hash: HashedPassword) -> Self {
        Self {
            user_name,
            password_hash,
        }
    }
}
