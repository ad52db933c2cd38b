//! Envoi simulé d'emails: chaque message est journalisé puis conservé dans
//! une boîte d'envoi en mémoire.

use anyhow::{anyhow, Result};
use log::info;
use std::sync::RwLock;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email {
    pub to: String,
    pub subject: String,
    pub body: String,
}

#[derive(Debug, Default)]
pub struct Outbox {
    sent: RwLock<Vec<Email>>,
}

impl Outbox {
    /// Envoie un email simulé en l'ajoutant à la boîte d'envoi.
    pub fn send_mail(&self, to: &str, subject: &str, body: &str) -> Result<()> {
        info!("Sending an email");
        self.sent
            .write()
            .or(Err(anyhow!("Outbox poisoned")))?
            .push(Email {
                to: to.to_string(),
                subject: subject.to_string(),
                body: body.to_string(),
            });
        Ok(())
    }

    /// Emails envoyés à `to`, du plus ancien au plus récent.
    pub fn sent_to(&self, to: &str) -> Vec<Email> {
        self.sent
            .read()
            .map(|sent| sent.iter().filter(|mail| mail.to == to).cloned().collect())
            .unwrap_or_default()
    }
}
