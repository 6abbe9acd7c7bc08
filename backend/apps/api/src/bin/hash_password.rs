//! Prints the bcrypt hash of a password read from stdin, for `teachers.json`
//!
//! ```text
//! $ printf '%s' 'password123' | cargo run --bin hash_password
//! $2b$12$...
//! ```

use std::io::Read;

use anyhow::Context;
use platform::password::{ClearTextPassword, DEFAULT_COST};

fn main() -> anyhow::Result<()> {
    let mut raw = String::new();
    std::io::stdin()
        .read_to_string(&mut raw)
        .context("failed to read password from stdin")?;

    // a trailing newline from `echo` is not part of the password
    let trimmed_len = raw.trim_end_matches(['\r', '\n']).len();
    raw.truncate(trimmed_len);

    let password = ClearTextPassword::for_provisioning(raw)?;
    let hashed = password.hash(DEFAULT_COST)?;

    println!("{}", hashed.as_hash_string());
    Ok(())
}
