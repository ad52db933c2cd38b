//! Point d'entrée unique de la validation des identifiants.
//!
//! `AuthService` applique les validateurs dans un ordre fixe (email puis mot
//! de passe), s'arrête au premier échec et ne délègue aux collaborateurs
//! externes qu'une fois toute la validation réussie.

use async_trait::async_trait;
use log::{error, info};
use serde::Deserialize;
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

use crate::utils::error_messages::ErrorKind;
use crate::utils::validation::{EmailInput, PasswordInput, PasswordPolicy};

/// Identifiants bruts reçus pour une requête
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CredentialInput {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

impl CredentialInput {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Compte créé par le collaborateur d'inscription
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountCreation {
    pub id: Uuid,
    pub email: String,
}

/// Issue d'une demande de réinitialisation. Les deux variantes doivent être
/// présentées de la même façon à l'utilisateur.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetInitiation {
    LinkSent,
    UnknownAccount,
}

#[derive(Debug, Error)]
pub enum CollaboratorError {
    #[error("Compte déjà existant")]
    AccountExists,

    #[error("Token de réinitialisation inconnu ou déjà utilisé")]
    InvalidToken,

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

#[derive(Debug, Error)]
pub enum FlowError {
    #[error(transparent)]
    Validation(#[from] ErrorKind),

    #[error(transparent)]
    Collaborator(#[from] CollaboratorError),
}

#[async_trait]
pub trait AccountCreator: Send + Sync {
    async fn create(
        &self,
        email: &EmailInput,
        password: &PasswordInput,
    ) -> Result<AccountCreation, CollaboratorError>;
}

#[async_trait]
pub trait PasswordResetInitiator: Send + Sync {
    async fn initiate(&self, email: &EmailInput) -> Result<ResetInitiation, CollaboratorError>;
}

#[async_trait]
pub trait PasswordResetCompleter: Send + Sync {
    /// Remplace le mot de passe du compte lié à `token`, qui ne sert qu'une fois.
    async fn complete(&self, token: &str, password: &PasswordInput) -> Result<(), CollaboratorError>;
}

pub struct AuthService {
    policy: PasswordPolicy,
    accounts: Arc<dyn AccountCreator>,
    resets: Arc<dyn PasswordResetInitiator>,
    completions: Arc<dyn PasswordResetCompleter>,
}

impl AuthService {
    pub fn new(
        policy: PasswordPolicy,
        accounts: Arc<dyn AccountCreator>,
        resets: Arc<dyn PasswordResetInitiator>,
        completions: Arc<dyn PasswordResetCompleter>,
    ) -> Self {
        Self {
            policy,
            accounts,
            resets,
            completions,
        }
    }

    /// Valide l'email puis le mot de passe, et crée le compte si les deux passent.
    pub async fn handle_signup(&self, input: &CredentialInput) -> Result<AccountCreation, FlowError> {
        let (email, password) = self.validate_signup(input)?;

        let account = self.accounts.create(&email, &password).await.map_err(|e| {
            log_collaborator_error("signup", &e);
            e
        })?;

        info!("Account created for {}", account.email);
        Ok(account)
    }

    /// Valide uniquement l'email, le mot de passe reçu est ignoré.
    pub async fn handle_reset_password(&self, input: &CredentialInput) -> Result<ResetInitiation, FlowError> {
        let email = EmailInput::new(&input.email).map_err(|kind| {
            info!("Reset password rejected: {:?}", kind);
            kind
        })?;

        let outcome = self.resets.initiate(&email).await.map_err(|e| {
            log_collaborator_error("reset-password", &e);
            e
        })?;

        Ok(outcome)
    }

    /// Valide le nouveau mot de passe avant de consommer le token, un mot de
    /// passe refusé laisse le lien utilisable.
    pub async fn handle_complete_reset(&self, token: &str, input: &CredentialInput) -> Result<(), FlowError> {
        let password = self.policy.validate(&input.password).map_err(|kind| {
            info!("Reset completion rejected: {:?}", kind);
            kind
        })?;

        self.completions.complete(token, &password).await.map_err(|e| {
            log_collaborator_error("reset-password completion", &e);
            e
        })?;

        info!("Password reset completed");
        Ok(())
    }

    fn validate_signup(&self, input: &CredentialInput) -> Result<(EmailInput, PasswordInput), ErrorKind> {
        let validated = EmailInput::new(&input.email)
            .and_then(|email| Ok((email, self.policy.validate(&input.password)?)));

        if let Err(kind) = &validated {
            info!("Signup rejected: {:?}", kind);
        }
        validated
    }
}

fn log_collaborator_error(flow: &str, e: &CollaboratorError) {
    match e {
        CollaboratorError::AccountExists | CollaboratorError::InvalidToken => info!("{flow}: {e}"),
        CollaboratorError::Internal(inner) => error!("{flow} collaborator failed: {inner:#}"),
    }
}
