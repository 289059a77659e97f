//! Client records as served by `/api/clients/`.

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Sexe of a client; the wire carries the single letters `M` and `F`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sexe {
    M,
    F,
}

impl Sexe {
    /// French display label, matching the backend's choice labels.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::M => "Masculin",
            Self::F => "Féminin",
        }
    }

    /// Wire value.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::M => "M",
            Self::F => "F",
        }
    }
}

/// One client row.
///
/// `nom_complet` is derived server-side.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Client {
    pub id: Uuid,
    pub nom: String,
    pub prenom: String,
    pub sexe: Sexe,
    pub telephone: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub date_anniversaire: Option<String>,
    #[serde(default)]
    pub lieu_habitation: Option<String>,
    #[serde(default)]
    pub nom_complet: String,
    #[serde(default)]
    pub date_creation: String,
    #[serde(default)]
    pub date_modification: String,
    #[serde(default = "default_actif")]
    pub actif: bool,
}

fn default_actif() -> bool {
    true
}

impl Client {
    /// Full name, falling back to `prenom nom` when the server field is
    /// missing (nested session payloads omit it).
    #[must_use]
    pub fn nom_affichage(&self) -> String {
        if self.nom_complet.is_empty() {
            format!("{} {}", self.prenom, self.nom)
        } else {
            self.nom_complet.clone()
        }
    }

    /// Case-insensitive match over the fields the directory search covers.
    #[must_use]
    pub fn matches_search(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        let haystacks = [
            Some(self.nom.as_str()),
            Some(self.prenom.as_str()),
            Some(self.telephone.as_str()),
            self.email.as_deref(),
            self.lieu_habitation.as_deref(),
        ];
        haystacks
            .into_iter()
            .flatten()
            .any(|field| field.to_lowercase().contains(&query))
    }
}

/// Body for creating or updating a client. `None` fields stay out of the
/// JSON so partial updates leave them untouched.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ClientPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nom: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prenom: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sexe: Option<Sexe>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telephone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_anniversaire: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lieu_habitation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actif: Option<bool>,
}
