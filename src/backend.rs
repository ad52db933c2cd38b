//! Module principal pour le backend de l'application.
//! Contient les handlers des routes, les modèles de réponse et le routeur.
pub mod handlers;
mod models;
pub mod router;
