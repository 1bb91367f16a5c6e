use argon2::{
    password_hash::{self, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};
use rand_core::{OsRng, RngCore};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use thiserror::Error;

use crate::config::HashingConfig;

#[derive(Debug, Error)]
pub enum HashingError {
    #[error("invalid hashing parameters: {0}")]
    Params(String),
    #[error("failed to hash password: {0}")]
    Hash(String),
    #[error("malformed password hash: {0}")]
    MalformedHash(String),
}

/// Argon2id hashing with per-hash random salts.
///
/// Verification reads the parameters embedded in the stored PHC string, so
/// hashes produced under an older cost setting keep verifying after a change.
#[derive(Clone)]
pub struct CredentialHasher {
    params: Params,
    decoy: String,
}

impl CredentialHasher {
    pub fn new(config: &HashingConfig) -> Result<Self, HashingError> {
        let params = Params::new(config.memory_kib, config.iterations, config.parallelism, None)
            .map_err(|e| HashingError::Params(e.to_string()))?;

        let mut hasher = Self { params, decoy: String::new() };
        hasher.decoy = hasher.hash(&random_secret())?;
        Ok(hasher)
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }

    pub fn hash(&self, plaintext: &str) -> Result<String, HashingError> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = self
            .argon2()
            .hash_password(plaintext.as_bytes(), &salt)
            .map_err(|e| HashingError::Hash(e.to_string()))?;
        Ok(hash.to_string())
    }

    /// `Ok(false)` on mismatch. Errors only when `hash` cannot be parsed or used.
    pub fn verify(&self, hash: &str, plaintext: &str) -> Result<bool, HashingError> {
        let parsed = PasswordHash::new(hash).map_err(|e| HashingError::MalformedHash(e.to_string()))?;
        match self.argon2().verify_password(plaintext.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(password_hash::Error::Password) => Ok(false),
            Err(e) => Err(HashingError::MalformedHash(e.to_string())),
        }
    }

    /// Burns one verification against a hash no password matches.
    pub fn verify_decoy(&self, plaintext: &str) {
        let _ = self.verify(&self.decoy, plaintext);
    }

    pub async fn hash_blocking(&self, plaintext: String) -> Result<String, HashingError> {
        let hasher = self.clone();
        tokio::task::spawn_blocking(move || hasher.hash(&plaintext))
            .await
            .map_err(|e| HashingError::Hash(e.to_string()))?
    }

    pub async fn verify_blocking(&self, hash: String, plaintext: String) -> Result<bool, HashingError> {
        let hasher = self.clone();
        tokio::task::spawn_blocking(move || hasher.verify(&hash, &plaintext))
            .await
            .map_err(|e| HashingError::Hash(e.to_string()))?
    }

    pub async fn verify_decoy_blocking(&self, plaintext: String) {
        let hasher = self.clone();
        let _ = tokio::task::spawn_blocking(move || hasher.verify_decoy(&plaintext)).await;
    }
}

fn random_secret() -> String {
    let mut buf = [0u8; 32];
    OsRng.fill_bytes(&mut buf);
    URL_SAFE_NO_PAD.encode(buf)
}
