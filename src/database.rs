//! Stockage en mémoire des comptes et des tokens de réinitialisation.
//! Sert de collaborateur de référence pour les flux d'inscription et de
//! réinitialisation.

use anyhow::anyhow;
use async_trait::async_trait;
use std::{collections::HashMap, sync::Arc, sync::RwLock};
use uuid::Uuid;

use crate::consts::RESET_PASSWORD_ROUTE;
use crate::email::Outbox;
use crate::services::{
    AccountCreation, AccountCreator, CollaboratorError, PasswordResetCompleter,
    PasswordResetInitiator, ResetInitiation,
};
use crate::utils::password_utils::{hash_blocking, PWHash};
use crate::utils::validation::{EmailInput, PasswordInput};

#[derive(Clone, Debug)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub password_hash: PWHash,
}

pub struct Database {
    users: RwLock<HashMap<String, User>>,
    // token -> email
    tokens: RwLock<HashMap<String, String>>,
    outbox: Arc<Outbox>,
    base_url: String,
}

impl Database {
    pub fn new(outbox: Arc<Outbox>, base_url: impl Into<String>) -> Self {
        Self {
            users: RwLock::default(),
            tokens: RwLock::default(),
            outbox,
            base_url: base_url.into(),
        }
    }

    #[cfg(test)]
    pub fn get(&self, email: &str) -> Option<User> {
        self.users.read().ok()?.get(email).cloned()
    }

    pub fn exists(&self, email: &str) -> anyhow::Result<bool> {
        Ok(self
            .users
            .read()
            .or(Err(anyhow!("DB poisoned")))?
            .contains_key(email))
    }

    /// Génère un token de réinitialisation pour `email`. Les tokens précédents
    /// du même compte sont invalidés, il n'y en a qu'un actif par compte.
    pub fn generate_token(&self, email: &str) -> anyhow::Result<String> {
        let token = Uuid::new_v4().to_string();
        let mut tokens = self.tokens.write().or(Err(anyhow!("DB poisoned")))?;
        tokens.retain(|_, owner| owner != email);
        tokens.insert(token.clone(), email.to_string());
        Ok(token)
    }

    fn has_token(&self, token: &str) -> anyhow::Result<bool> {
        Ok(self
            .tokens
            .read()
            .or(Err(anyhow!("DB poisoned")))?
            .contains_key(token))
    }

    /// Retire le token et retourne l'email associé. Un token ne sert qu'une fois.
    pub fn consume_token(&self, token: &str) -> anyhow::Result<String> {
        self.tokens
            .write()
            .or(Err(anyhow!("DB poisoned")))?
            .remove(token)
            .ok_or_else(|| anyhow!("Token not found"))
    }
}

#[async_trait]
impl AccountCreator for Database {
    async fn create(
        &self,
        email: &EmailInput,
        password: &PasswordInput,
    ) -> Result<AccountCreation, CollaboratorError> {
        let password_hash = hash_blocking(password.clone()).await?;

        let mut db = self.users.write().or(Err(anyhow!("DB poisoned")))?;
        if db.contains_key(email.as_str()) {
            return Err(CollaboratorError::AccountExists);
        }

        let user = User {
            id: Uuid::new_v4(),
            email: email.to_string(),
            password_hash,
        };
        let creation = AccountCreation {
            id: user.id,
            email: user.email.clone(),
        };
        db.insert(user.email.clone(), user);
        Ok(creation)
    }
}

#[async_trait]
impl PasswordResetInitiator for Database {
    async fn initiate(&self, email: &EmailInput) -> Result<ResetInitiation, CollaboratorError> {
        if !self.exists(email.as_str())? {
            return Ok(ResetInitiation::UnknownAccount);
        }

        let token = self.generate_token(email.as_str())?;
        let link = format!("{}{}/{}", self.base_url, RESET_PASSWORD_ROUTE, token);

        self.outbox.send_mail(
            email.as_str(),
            "Redefinição de senha",
            &format!(
                "Clique no link a seguir para redefinir sua senha: {}\n\n\
                 Se você não solicitou a redefinição, ignore este e-mail.",
                link
            ),
        )?;

        Ok(ResetInitiation::LinkSent)
    }
}

#[async_trait]
impl PasswordResetCompleter for Database {
    async fn complete(&self, token: &str, password: &PasswordInput) -> Result<(), CollaboratorError> {
        // Pas de hachage pour un token inconnu
        if !self.has_token(token)? {
            return Err(CollaboratorError::InvalidToken);
        }

        let password_hash = hash_blocking(password.clone()).await?;

        let email = self
            .consume_token(token)
            .map_err(|_| CollaboratorError::InvalidToken)?;

        let mut db = self.users.write().or(Err(anyhow!("DB poisoned")))?;
        let user = db.get_mut(&email).ok_or(CollaboratorError::InvalidToken)?;
        user.password_hash = password_hash;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::password_utils::verify;
    use crate::utils::validation::PasswordPolicy;

    fn database() -> (Database, Arc<Outbox>) {
        let outbox = Arc::new(Outbox::default());
        (Database::new(outbox.clone(), "http://localhost:8080"), outbox)
    }

    fn credentials(email: &str, password: &str) -> (EmailInput, PasswordInput) {
        (
            EmailInput::new(email).unwrap(),
            PasswordPolicy::default().validate(password).unwrap(),
        )
    }

    #[tokio::test]
    async fn test_create_hashes_password() {
        let (db, _) = database();
        let (email, password) = credentials("User@Example.com", "Senha123!");

        let account = db.create(&email, &password).await.unwrap();
        assert_eq!(account.email, "user@example.com");

        let user = db.get("user@example.com").unwrap();
        assert_eq!(user.id, account.id);
        assert!(verify("Senha123!", &user.password_hash));
    }

    #[tokio::test]
    async fn test_create_duplicate() {
        let (db, _) = database();
        let (email, password) = credentials("user@example.com", "Senha123!");

        db.create(&email, &password).await.unwrap();
        let again = db.create(&email, &password).await;
        assert!(matches!(again, Err(CollaboratorError::AccountExists)));
    }

    #[tokio::test]
    async fn test_reset_sends_link_for_known_account() {
        let (db, outbox) = database();
        let (email, password) = credentials("user@example.com", "Senha123!");
        db.create(&email, &password).await.unwrap();

        assert_eq!(db.initiate(&email).await.unwrap(), ResetInitiation::LinkSent);

        let sent = outbox.sent_to("user@example.com");
        assert_eq!(sent.len(), 1);

        let prefix = "http://localhost:8080/auth/reset-password/";
        let start = sent[0].body.find(prefix).unwrap() + prefix.len();
        let token: String = sent[0].body[start..]
            .chars()
            .take_while(|c| !c.is_whitespace())
            .collect();

        assert_eq!(db.consume_token(&token).unwrap(), "user@example.com");
        assert!(db.consume_token(&token).is_err());
    }

    #[tokio::test]
    async fn test_reset_unknown_account_sends_nothing() {
        let (db, outbox) = database();
        let email = EmailInput::new("ghost@example.com").unwrap();

        assert_eq!(db.initiate(&email).await.unwrap(), ResetInitiation::UnknownAccount);
        assert!(outbox.sent_to("ghost@example.com").is_empty());
    }

    #[tokio::test]
    async fn test_new_reset_request_replaces_previous_token() {
        let (db, _) = database();
        let (email, password) = credentials("user@example.com", "Senha123!");
        db.create(&email, &password).await.unwrap();

        let first = db.generate_token(email.as_str()).unwrap();
        let second = db.generate_token(email.as_str()).unwrap();

        assert!(db.consume_token(&first).is_err());
        assert_eq!(db.consume_token(&second).unwrap(), "user@example.com");
    }

    #[tokio::test]
    async fn test_complete_replaces_password_once() {
        let (db, _) = database();
        let (email, password) = credentials("user@example.com", "Senha123!");
        db.create(&email, &password).await.unwrap();
        let token = db.generate_token(email.as_str()).unwrap();

        let new_password = PasswordPolicy::default().validate("NovaSenha9#").unwrap();
        db.complete(&token, &new_password).await.unwrap();

        let user = db.get("user@example.com").unwrap();
        assert!(verify("NovaSenha9#", &user.password_hash));
        assert!(!verify("Senha123!", &user.password_hash));

        let again = db.complete(&token, &new_password).await;
        assert!(matches!(again, Err(CollaboratorError::InvalidToken)));
    }
}
