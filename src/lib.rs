//! Porte de validation des identifiants pour l'inscription et la
//! réinitialisation de mot de passe.

pub mod backend;
pub mod config;
pub mod consts;
pub mod database;
pub mod email;
pub mod services;
pub mod utils;
