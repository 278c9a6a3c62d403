//! Record Store Client
//!
//! Persistence for captured leads lives in an external record store.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A prospective customer's contact record, as collected by the
/// registration form. Field names are the record store's wire contract.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeadRecord {
    pub nome: String,
    pub sobrenome: String,
    pub telefone: String,
    pub email: String,
    pub cidade: String,
    /// Stamped on the client at submit time.
    pub captured_at: DateTime<Utc>,
}

/// Error types for record store operations.
#[derive(Debug, Clone, thiserror::Error)]
pub enum RecordsError {
    #[error("request failed: {0}")]
    RequestFailed(String),
}

/// Client for the lead record store.
#[derive(Debug, Clone)]
pub struct RecordsClient {
    /// Records API base URL; unused until persistence is wired up.
    #[allow(dead_code)]
    base_url: String,
}

impl RecordsClient {
    /// Create a new record store client
    pub fn new(url: &str) -> Self {
        let base_url = url.trim_end_matches('/').to_string();
        Self { base_url }
    }

    /// Persists a captured lead.
    ///
    /// Persistence is not wired up yet; the record is written to the
    /// diagnostic log and the call always succeeds.
    // TODO: POST to {base_url}/rest/v1/leads once the records endpoint lands
    pub async fn create_lead(&self, lead: &LeadRecord) -> Result<(), RecordsError> {
        tracing::info!(
            nome = %lead.nome,
            sobrenome = %lead.sobrenome,
            telefone = %lead.telefone,
            email = %lead.email,
            cidade = %lead.cidade,
            captured_at = %lead.captured_at,
            "lead captured"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lead_record_serializes_with_the_store_field_names() {
        let record = LeadRecord {
            nome: "Ana".to_string(),
            sobrenome: "Silva".to_string(),
            telefone: "11999999999".to_string(),
            email: String::new(),
            cidade: String::new(),
            captured_at: Utc::now(),
        };

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["nome"], "Ana");
        assert_eq!(value["sobrenome"], "Silva");
        assert_eq!(value["telefone"], "11999999999");
        assert_eq!(value["email"], "");
        assert_eq!(value["cidade"], "");
        assert!(value.get("captured_at").is_some());
    }
}
