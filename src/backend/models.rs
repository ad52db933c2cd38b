//! Définitions des structures de réponse de l'API.

use serde::Serialize;
use uuid::Uuid;

/// Corps de réponse en cas d'échec
#[derive(Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
}

/// Corps de réponse d'une inscription réussie
#[derive(Serialize)]
pub struct SignupBody {
    pub id: Uuid,
}

/// Corps de réponse d'une demande de réinitialisation
#[derive(Serialize)]
pub struct ResetBody {
    pub message: &'static str,
}
