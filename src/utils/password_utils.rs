//! Hachage et vérification des mots de passe

use anyhow::{anyhow, Result};
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHashString, SaltString},
    Argon2, PasswordHasher,
};
use once_cell::sync::Lazy;
use std::fmt;

use crate::utils::validation::PasswordInput;

static DEFAULT_HASHER: Lazy<Argon2<'static>> = Lazy::new(Argon2::default);

/// Un mot de passe haché, au format PHC
#[derive(Clone)]
pub struct PWHash(PasswordHashString);

impl PWHash {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for PWHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PWHash").field(&self.0.as_str()).finish()
    }
}

/// Calcule un haché Argon2id à partir d'un mot de passe validé, avec un sel aléatoire
pub fn hash(password: &PasswordInput) -> Result<PWHash> {
    let salt = SaltString::generate(&mut OsRng);

    let hash = DEFAULT_HASHER
        .hash_password(password.as_str().as_bytes(), &salt)
        .map_err(|e| anyhow!("Password hashing failed: {e}"))?
        .serialize();

    Ok(PWHash(hash))
}

/// Calcule le haché sur le pool bloquant de tokio, Argon2 monopoliserait
/// sinon un thread de l'exécuteur.
pub async fn hash_blocking(password: PasswordInput) -> Result<PWHash> {
    tokio::task::spawn_blocking(move || hash(&password))
        .await
        .map_err(|e| anyhow!("Password hashing task failed: {e}"))?
}

/// Vérifie si le mot de passe correspond au haché stocké
#[cfg(test)]
pub fn verify(password: &str, hash: &PWHash) -> bool {
    use argon2::password_hash::{PasswordHash, PasswordVerifier};

    match PasswordHash::new(hash.as_str()) {
        Ok(parsed) => DEFAULT_HASHER
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(_) => false,
    }
}
