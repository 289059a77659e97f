//! Service catalog (prestations) and price-range rules.
//!
//! The list endpoint serves a slim row without the price bounds; the detail
//! endpoint adds them back. Both decode into [`Prestation`], so the bound
//! fields are optional here even though the backend always stores
//! `prix_min`.

#[cfg(test)]
#[path = "prestation_test.rs"]
mod prestation_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::money::{deserialize_montant_opt, format_grouped};
use crate::validate::ValidationError;

/// Service family, stored as snake_case wire values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypePrestation {
    DreadlocksNouveau,
    SisterLocks,
    NidsLocks,
    Shampoing,
    Resserrage,
    Coiffure,
    #[default]
    Autre,
}

impl TypePrestation {
    pub const ALL: [Self; 7] = [
        Self::DreadlocksNouveau,
        Self::SisterLocks,
        Self::NidsLocks,
        Self::Shampoing,
        Self::Resserrage,
        Self::Coiffure,
        Self::Autre,
    ];

    /// French display label, matching the backend's choice labels.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::DreadlocksNouveau => "Dreadlocks (nouveau)",
            Self::SisterLocks => "Sister locks",
            Self::NidsLocks => "Nids locks",
            Self::Shampoing => "Shampoing",
            Self::Resserrage => "Resserrage",
            Self::Coiffure => "Coiffure",
            Self::Autre => "Autre",
        }
    }

    /// Wire value, also used for the `type` query filter.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::DreadlocksNouveau => "dreadlocks_nouveau",
            Self::SisterLocks => "sister_locks",
            Self::NidsLocks => "nids_locks",
            Self::Shampoing => "shampoing",
            Self::Resserrage => "resserrage",
            Self::Coiffure => "coiffure",
            Self::Autre => "autre",
        }
    }
}

/// One catalog entry.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Prestation {
    pub id: Uuid,
    pub nom: String,
    pub type_prestation: TypePrestation,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "deserialize_montant_opt")]
    pub prix_min: Option<u32>,
    #[serde(default, deserialize_with = "deserialize_montant_opt")]
    pub prix_max: Option<u32>,
    #[serde(default)]
    pub prix_affichage: String,
    #[serde(default)]
    pub duree_estimee: Option<u32>,
    pub actif: bool,
    #[serde(default)]
    pub date_creation: String,
    #[serde(default)]
    pub date_modification: String,
}

impl Prestation {
    /// Default amount for a checkout, the backend seeds `prix_min`.
    #[must_use]
    pub fn montant_defaut(&self) -> Option<u32> {
        self.prix_min
    }

    /// Check a negotiated amount against the price bounds.
    ///
    /// # Errors
    ///
    /// Returns the backend's exact bound messages when out of range.
    pub fn valider_montant(&self, montant: u32) -> Result<(), ValidationError> {
        if montant == 0 {
            return Err(ValidationError::MontantNonPositif);
        }
        if let Some(max) = self.prix_max {
            if montant > max {
                return Err(ValidationError::MontantAuDessusMaximum(max));
            }
        }
        if let Some(min) = self.prix_min {
            if montant < min {
                return Err(ValidationError::MontantSousMinimum(min));
            }
        }
        Ok(())
    }

    /// Case-insensitive match over name and description.
    #[must_use]
    pub fn matches_search(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        self.nom.to_lowercase().contains(&query)
            || self
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(&query))
    }
}

/// Price label in the backend's format: `5,000 FCFA` for a fixed price,
/// `5,000 à 10,000 FCFA` when a real range exists.
#[must_use]
pub fn format_prix_affichage(prix_min: u32, prix_max: Option<u32>) -> String {
    match prix_max {
        Some(max) if max > prix_min => {
            format!("{} à {} FCFA", format_grouped(u64::from(prix_min)), format_grouped(u64::from(max)))
        }
        _ => format!("{} FCFA", format_grouped(u64::from(prix_min))),
    }
}

/// Check catalog price bounds before save.
///
/// # Errors
///
/// Returns [`ValidationError::PrixMaxInferieur`] when the maximum undercuts
/// the minimum.
pub fn valider_bornes_prix(prix_min: u32, prix_max: Option<u32>) -> Result<(), ValidationError> {
    if let Some(max) = prix_max {
        if max < prix_min {
            return Err(ValidationError::PrixMaxInferieur);
        }
    }
    Ok(())
}

/// Body for creating or updating a catalog entry. Optional fields are sent
/// as explicit `null` so a full update can clear them.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PrestationPayload {
    pub nom: String,
    pub type_prestation: TypePrestation,
    pub description: Option<String>,
    pub prix_min: u32,
    pub prix_max: Option<u32>,
    pub duree_estimee: Option<u32>,
    pub actif: bool,
}
