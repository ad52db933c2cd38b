//! Configuration des routes pour l'application.

use axum::{routing::post, Extension, Router};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::backend::handlers::{complete_reset, reset_password, signup};
use crate::consts::{RESET_PASSWORD_ROUTE, RESET_PASSWORD_TOKEN_ROUTE, SIGNUP_ROUTE};
use crate::services::AuthService;

/// Initialisation du routeur principal
pub fn get_router(service: Arc<AuthService>) -> Router {
    let router = Router::new()
        .route(SIGNUP_ROUTE, post(signup))
        .route(RESET_PASSWORD_ROUTE, post(reset_password))
        .route(RESET_PASSWORD_TOKEN_ROUTE, post(complete_reset))
        .layer(Extension(service));

    // CORS ouvert en mode debug uniquement
    if cfg!(debug_assertions) {
        let cors = CorsLayer::new()
            .allow_methods(tower_http::cors::AllowMethods::any())
            .allow_headers(Any)
            .allow_origin(Any);
        router.layer(cors)
    } else {
        router
    }
}
