//! Définition des constantes globales pour l'application.

pub const HTTP_PORT: u16 = 8080; // Port par défaut pour le serveur HTTP.
pub const PUBLIC_BASE_URL: &str = "http://localhost:8080"; // Base des liens envoyés par email.
pub const SIGNUP_ROUTE: &str = "/auth/signup";
pub const RESET_PASSWORD_ROUTE: &str = "/auth/reset-password";
pub const RESET_PASSWORD_TOKEN_ROUTE: &str = "/auth/reset-password/:token";
