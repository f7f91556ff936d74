//! # Credential Verifier
//!
//! Credentials gate the write operations of the admin surface. Secrets are
//! stored as Argon2 PHC strings with a per-credential random salt; Argon2's
//! verifier compares digests in constant time.

use crate::models::DbCredential;
use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
};
use chrono::Utc;
use eyre::{eyre, Result};
use roomgrid_core::models::credential::CredentialCheck;
use sqlx::{Pool, Postgres};
use std::sync::OnceLock;

/// Plaintext behind [`placeholder_hash`]. Never stored.
const PLACEHOLDER_SECRET: &str = "roomgrid-placeholder-secret";

/// Hashes a plaintext secret with a fresh random salt.
pub fn hash_secret(plaintext: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);

    let hash = Argon2::default()
        .hash_password(plaintext.as_bytes(), &salt)
        .map_err(|e| eyre!("Error hashing secret: {}", e))?
        .to_string();

    Ok(hash)
}

/// A hash with the default parameters, verified against when the username is
/// unknown so that both rejections cost one Argon2 run.
pub fn placeholder_hash() -> Result<&'static str> {
    static PLACEHOLDER: OnceLock<String> = OnceLock::new();

    if let Some(hash) = PLACEHOLDER.get() {
        return Ok(hash);
    }
    let hash = hash_secret(PLACEHOLDER_SECRET)?;
    Ok(PLACEHOLDER.get_or_init(|| hash))
}

/// Checks a plaintext secret against a stored PHC hash string.
pub fn secret_matches(plaintext: &str, stored_hash: &str) -> Result<bool> {
    let parsed_hash =
        PasswordHash::new(stored_hash).map_err(|e| eyre!("Invalid secret hash: {}", e))?;

    Ok(Argon2::default()
        .verify_password(plaintext.as_bytes(), &parsed_hash)
        .is_ok())
}

pub async fn create_credential(
    pool: &Pool<Postgres>,
    username: &str,
    plaintext: &str,
    display_name: &str,
) -> Result<DbCredential> {
    let secret_hash = hash_secret(plaintext)?;
    let now = Utc::now();

    let credential = sqlx::query_as::<_, DbCredential>(
        r#"
        INSERT INTO credentials (username, secret_hash, display_name, created_at)
        VALUES ($1, $2, $3, $4)
        RETURNING username, secret_hash, display_name, created_at
        "#,
    )
    .bind(username)
    .bind(secret_hash)
    .bind(display_name)
    .bind(now)
    .fetch_one(pool)
    .await?;

    tracing::debug!("Credential created: username={}", username);
    Ok(credential)
}

pub async fn get_credential(pool: &Pool<Postgres>, username: &str) -> Result<Option<DbCredential>> {
    let credential = sqlx::query_as::<_, DbCredential>(
        r#"
        SELECT username, secret_hash, display_name, created_at
        FROM credentials
        WHERE username = $1
        "#,
    )
    .bind(username)
    .fetch_optional(pool)
    .await?;

    Ok(credential)
}

/// Unknown usernames and wrong secrets are both a plain rejection.
pub async fn verify_credential(
    pool: &Pool<Postgres>,
    username: &str,
    plaintext: &str,
) -> Result<CredentialCheck> {
    let Some(credential) = get_credential(pool, username).await? else {
        tracing::debug!("Credential check for unknown username={}", username);
        secret_matches(plaintext, placeholder_hash()?)?;
        return Ok(CredentialCheck::rejected());
    };

    if secret_matches(plaintext, &credential.secret_hash)? {
        Ok(CredentialCheck::accepted(credential.display_name))
    } else {
        Ok(CredentialCheck::rejected())
    }
}
