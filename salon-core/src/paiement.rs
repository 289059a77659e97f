//! Payments: wire types, display rules, and the cancel/operator invariants.
//!
//! The list endpoint serves slim [`PaiementRow`] records with server-side
//! display strings; the detail endpoint serves the full [`Paiement`]. A
//! mobile-money payment always names its operator, which both the create
//! form and the backend enforce.

#[cfg(test)]
#[path = "paiement_test.rs"]
mod paiement_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::money::deserialize_montant;
use crate::validate::ValidationError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoyenPaiement {
    MobileMoney,
    CarteBancaire,
    CartePrepayee,
    Espece,
}

impl MoyenPaiement {
    pub const ALL: [Self; 4] = [
        Self::MobileMoney,
        Self::CarteBancaire,
        Self::CartePrepayee,
        Self::Espece,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::MobileMoney => "Mobile Money",
            Self::CarteBancaire => "Carte Bancaire",
            Self::CartePrepayee => "Carte Prépayée",
            Self::Espece => "Espèce",
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MobileMoney => "mobile_money",
            Self::CarteBancaire => "carte_bancaire",
            Self::CartePrepayee => "carte_prepayee",
            Self::Espece => "espece",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperateurMobile {
    Wave,
    Orange,
    Mtn,
    Moov,
}

impl OperateurMobile {
    pub const ALL: [Self; 4] = [Self::Wave, Self::Orange, Self::Mtn, Self::Moov];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Wave => "Wave",
            Self::Orange => "Orange Money",
            Self::Mtn => "MTN Mobile Money",
            Self::Moov => "Moov Money",
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Wave => "wave",
            Self::Orange => "orange",
            Self::Mtn => "mtn",
            Self::Moov => "moov",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatutPaiement {
    EnAttente,
    EnCours,
    Reussi,
    Echoue,
    Annule,
}

impl StatutPaiement {
    pub const ALL: [Self; 5] = [
        Self::EnAttente,
        Self::EnCours,
        Self::Reussi,
        Self::Echoue,
        Self::Annule,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::EnAttente => "En attente",
            Self::EnCours => "En cours",
            Self::Reussi => "Réussi",
            Self::Echoue => "Échoué",
            Self::Annule => "Annulé",
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::EnAttente => "en_attente",
            Self::EnCours => "en_cours",
            Self::Reussi => "reussi",
            Self::Echoue => "echoue",
            Self::Annule => "annule",
        }
    }

    /// Only pending and in-progress payments can still be cancelled.
    #[must_use]
    pub fn est_annulable(self) -> bool {
        matches!(self, Self::EnAttente | Self::EnCours)
    }
}

/// Slim row from the payment list endpoint.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PaiementRow {
    pub id: Uuid,
    #[serde(default)]
    pub client_nom_complet: Option<String>,
    #[serde(default)]
    pub prestation_nom: Option<String>,
    #[serde(deserialize_with = "deserialize_montant")]
    pub montant: u32,
    #[serde(default)]
    pub moyen_paiement_affichage: String,
    pub statut: StatutPaiement,
    pub date_paiement: String,
}

impl PaiementRow {
    /// Client name with the dashboard's fallback for orphaned rows.
    #[must_use]
    pub fn client_affichage(&self) -> &str {
        match self.client_nom_complet.as_deref() {
            Some(nom) if !nom.is_empty() => nom,
            _ => "Client inconnu",
        }
    }

    /// Prestation name with the matching fallback.
    #[must_use]
    pub fn prestation_affichage(&self) -> &str {
        match self.prestation_nom.as_deref() {
            Some(nom) if !nom.is_empty() => nom,
            _ => "Prestation inconnue",
        }
    }
}

/// Full payment from the detail endpoint and from nested session payloads.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Paiement {
    pub id: Uuid,
    pub client: Uuid,
    #[serde(default)]
    pub client_nom_complet: Option<String>,
    pub prestation: Uuid,
    #[serde(default)]
    pub prestation_nom: Option<String>,
    #[serde(deserialize_with = "deserialize_montant")]
    pub montant: u32,
    pub moyen_paiement: MoyenPaiement,
    #[serde(default)]
    pub operateur_mobile: Option<OperateurMobile>,
    #[serde(default)]
    pub moyen_paiement_affichage: String,
    #[serde(default)]
    pub numero_transaction: Option<String>,
    #[serde(default)]
    pub reference_paiement: Option<String>,
    pub statut: StatutPaiement,
    pub date_paiement: String,
    #[serde(default)]
    pub date_mise_a_jour: String,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Display string for a payment method, `Mobile Money (Wave)` style when an
/// operator is involved.
#[must_use]
pub fn moyen_paiement_affichage(
    moyen: MoyenPaiement,
    operateur: Option<OperateurMobile>,
) -> String {
    match (moyen, operateur) {
        (MoyenPaiement::MobileMoney, Some(op)) => {
            format!("{} ({})", moyen.label(), op.label())
        }
        _ => moyen.label().to_string(),
    }
}

/// Operator rule for payment forms: required with Mobile Money, rejected
/// with anything else.
///
/// # Errors
///
/// Returns [`ValidationError::OperateurRequis`] or
/// [`ValidationError::OperateurInattendu`].
pub fn valider_moyen_operateur(
    moyen: MoyenPaiement,
    operateur: Option<OperateurMobile>,
) -> Result<(), ValidationError> {
    match (moyen, operateur) {
        (MoyenPaiement::MobileMoney, None) => Err(ValidationError::OperateurRequis),
        (MoyenPaiement::MobileMoney, Some(_)) => Ok(()),
        (_, Some(_)) => Err(ValidationError::OperateurInattendu),
        (_, None) => Ok(()),
    }
}

/// Body for creating or editing a payment.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PaiementPayload {
    pub client: Uuid,
    pub prestation: Uuid,
    pub montant: u32,
    pub moyen_paiement: MoyenPaiement,
    pub operateur_mobile: Option<OperateurMobile>,
    pub numero_transaction: Option<String>,
    pub reference_paiement: Option<String>,
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statut: Option<StatutPaiement>,
}

impl PaiementPayload {
    /// Run the form-side checks the backend will apply on submit.
    ///
    /// # Errors
    ///
    /// Returns the first failing rule: positive amount, then the operator
    /// rule.
    pub fn valider(&self) -> Result<(), ValidationError> {
        if self.montant == 0 {
            return Err(ValidationError::MontantNonPositif);
        }
        valider_moyen_operateur(self.moyen_paiement, self.operateur_mobile)
    }
}
