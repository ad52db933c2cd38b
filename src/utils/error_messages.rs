//! Represents all possible errors surfaced to the user

use thiserror::Error;

pub const INVALID_EMAIL: &str = "E-mail inválido";

pub const WEAK_PASSWORD: &str = "Senha não atende aos critérios mínimos de segurança";

pub const ACCOUNT_EXISTS: &str = "Conta já cadastrada";

pub const INTERNAL_ERROR: &str = "Erro interno";

pub const INVALID_RESET_LINK: &str = "Link de redefinição inválido ou expirado";

pub const PASSWORD_UPDATED: &str = "Senha redefinida com sucesso";

pub const RESET_REQUESTED: &str =
    "Se o e-mail estiver cadastrado, um link de redefinição será enviado";

/// The closed set of validation failures. The `Display` output is the
/// literal message shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ErrorKind {
    #[error("{}", INVALID_EMAIL)]
    InvalidEmail,

    #[error("{}", WEAK_PASSWORD)]
    WeakPassword,
}

impl ErrorKind {
    pub fn message(&self) -> &'static str {
        match self {
            ErrorKind::InvalidEmail => INVALID_EMAIL,
            ErrorKind::WeakPassword => WEAK_PASSWORD,
        }
    }
}

/// Result of a single validator invocation.
pub type ValidationOutcome<T> = Result<T, ErrorKind>;
