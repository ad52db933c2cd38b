//! Handlers des routes d'inscription et de réinitialisation de mot de passe.
//! Traduisent l'issue de `AuthService` en statut HTTP et corps JSON.

use axum::{
    extract::{Extension, Json, Path},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use super::models::{ErrorBody, ResetBody, SignupBody};
use crate::services::{AuthService, CollaboratorError, CredentialInput, FlowError};
use crate::utils::error_messages::{
    ACCOUNT_EXISTS, INTERNAL_ERROR, INVALID_RESET_LINK, PASSWORD_UPDATED, RESET_REQUESTED,
};

/// POST /auth/signup
pub async fn signup(
    Extension(service): Extension<Arc<AuthService>>,
    Json(input): Json<CredentialInput>,
) -> Response {
    match service.handle_signup(&input).await {
        Ok(account) => (StatusCode::CREATED, Json(SignupBody { id: account.id })).into_response(),
        Err(e) => flow_error_response(e),
    }
}

/// POST /auth/reset-password
///
/// La réponse est identique que le compte existe ou non.
pub async fn reset_password(
    Extension(service): Extension<Arc<AuthService>>,
    Json(input): Json<CredentialInput>,
) -> Response {
    match service.handle_reset_password(&input).await {
        Ok(_) => (
            StatusCode::ACCEPTED,
            Json(ResetBody {
                message: RESET_REQUESTED,
            }),
        )
            .into_response(),
        Err(e) => flow_error_response(e),
    }
}

/// POST /auth/reset-password/:token
///
/// Lien envoyé par email, le corps porte le nouveau mot de passe.
pub async fn complete_reset(
    Path(token): Path<String>,
    Extension(service): Extension<Arc<AuthService>>,
    Json(input): Json<CredentialInput>,
) -> Response {
    match service.handle_complete_reset(&token, &input).await {
        Ok(()) => (
            StatusCode::OK,
            Json(ResetBody {
                message: PASSWORD_UPDATED,
            }),
        )
            .into_response(),
        Err(e) => flow_error_response(e),
    }
}

fn flow_error_response(e: FlowError) -> Response {
    let (status, error) = match e {
        FlowError::Validation(kind) => (StatusCode::BAD_REQUEST, kind.message()),
        FlowError::Collaborator(CollaboratorError::AccountExists) => (StatusCode::CONFLICT, ACCOUNT_EXISTS),
        FlowError::Collaborator(CollaboratorError::InvalidToken) => (StatusCode::BAD_REQUEST, INVALID_RESET_LINK),
        FlowError::Collaborator(CollaboratorError::Internal(_)) => {
            (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR)
        }
    };

    (status, Json(ErrorBody { error })).into_response()
}
