//! Client feedback left at the end of a checkout session.
//!
//! Feedback is keyed by phone number rather than client id so a visitor
//! can rate the salon even when their record was created mid-session.

#[cfg(test)]
#[path = "feedback_test.rs"]
mod feedback_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::validate::{validate_rating, validate_telephone, ValidationError};

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ClientFeedback {
    pub id: Uuid,
    pub client_telephone: String,
    pub client_nom: String,
    pub client_prenom: String,
    pub rating: u8,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub date_creation: String,
}

impl ClientFeedback {
    #[must_use]
    pub fn client_affichage(&self) -> String {
        format!("{} {}", self.client_prenom, self.client_nom)
    }
}

/// Aggregates from `/api/client-feedback/statistiques/`.
///
/// The distribution arrives keyed by the note as a string (`"1"` .. `"5"`).
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct FeedbackStats {
    #[serde(default)]
    pub total_feedbacks: u64,
    #[serde(default)]
    pub average_rating: f64,
    #[serde(default)]
    pub rating_distribution: BTreeMap<String, u64>,
}

impl FeedbackStats {
    /// Counts for notes 1 through 5 in order, for the distribution bars.
    #[must_use]
    pub fn distribution(&self) -> [u64; 5] {
        let mut out = [0u64; 5];
        for (note, count) in &self.rating_distribution {
            let idx = match note.as_str() {
                "1" => 0,
                "2" => 1,
                "3" => 2,
                "4" => 3,
                "5" => 4,
                _ => continue,
            };
            out[idx] = *count;
        }
        out
    }

    /// Average with one decimal, the format the stats header shows.
    #[must_use]
    pub fn average_affichage(&self) -> String {
        format!("{:.1}", self.average_rating)
    }
}

/// Body for posting feedback. `comment` goes out as `null` when the field
/// was left empty.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct FeedbackPayload {
    pub client_telephone: String,
    pub client_nom: String,
    pub client_prenom: String,
    pub rating: u8,
    pub comment: Option<String>,
}

impl FeedbackPayload {
    /// Form-side checks matching the backend serializer.
    ///
    /// # Errors
    ///
    /// Returns the first failing rule: note bounds, phone, then the two
    /// name fields.
    pub fn valider(&self) -> Result<(), ValidationError> {
        validate_rating(self.rating)?;
        validate_telephone(&self.client_telephone)?;
        if self.client_nom.trim().is_empty() {
            return Err(ValidationError::ChampRequis("Le nom du client"));
        }
        if self.client_prenom.trim().is_empty() {
            return Err(ValidationError::ChampRequis("Le prénom du client"));
        }
        Ok(())
    }
}
