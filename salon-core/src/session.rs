//! Checkout sessions: the QR-to-payment workflow state machine.
//!
//! A session walks `scanne` to `identification` to `prestation_selectionnee`
//! to `paiement_initie` and ends in success, failure, abandon, or expiry.
//! The backend owns the clock and the transition rules; the client reads
//! `est_active`/`est_expire` from the payload and only reasons about the
//! status it was given.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::client::{Client, ClientPayload};
use crate::money::{deserialize_montant, deserialize_montant_opt};
use crate::paiement::{MoyenPaiement, OperateurMobile, Paiement};
use crate::prestation::Prestation;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatut {
    Scanne,
    Identification,
    PrestationSelectionnee,
    PaiementInitie,
    PaiementReussi,
    PaiementEchoue,
    Abandonne,
    Expire,
}

impl SessionStatut {
    /// Workflow step shown by the progress indicator, 1 through 5.
    #[must_use]
    pub fn etape(self) -> u8 {
        match self {
            Self::Scanne => 1,
            Self::Identification => 2,
            Self::PrestationSelectionnee => 3,
            Self::PaiementInitie | Self::PaiementReussi | Self::PaiementEchoue => 4,
            Self::Abandonne | Self::Expire => 5,
        }
    }

    /// Statuses no transition leaves.
    #[must_use]
    pub fn est_terminal(self) -> bool {
        matches!(self, Self::PaiementReussi | Self::Abandonne | Self::Expire)
    }
}

/// Detail payload of `/api/sessions-paiement/{session_id}/` and the
/// workflow actions.
///
/// `paiement` is attached by the backend once a payment has been initiated.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SessionPaiement {
    pub id: Uuid,
    pub session_id: String,
    #[serde(default)]
    pub client: Option<Client>,
    #[serde(default)]
    pub prestation: Option<Prestation>,
    #[serde(default, deserialize_with = "deserialize_montant_opt")]
    pub montant_final: Option<u32>,
    pub statut: SessionStatut,
    #[serde(default)]
    pub etape_actuelle: u8,
    #[serde(default)]
    pub est_active: bool,
    #[serde(default)]
    pub est_expire: bool,
    #[serde(default)]
    pub date_creation: String,
    #[serde(default)]
    pub date_expiration: Option<String>,
    #[serde(default)]
    pub paiement: Option<Paiement>,
}

impl SessionPaiement {
    /// Whether the payment step can be offered: an identified client plus a
    /// selected prestation.
    #[must_use]
    pub fn paiement_possible(&self) -> bool {
        self.client.is_some()
            && (self.statut == SessionStatut::PrestationSelectionnee || self.prestation.is_some())
    }

    /// Amount to show on the recap: the negotiated amount, else the
    /// prestation's base price.
    #[must_use]
    pub fn montant_affiche(&self) -> Option<u32> {
        self.montant_final
            .or_else(|| self.prestation.as_ref().and_then(Prestation::montant_defaut))
    }
}

/// Body of `identifier_client`: phone plus the form fields for a client the
/// salon has not seen before.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct IdentificationPayload {
    pub telephone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client: Option<ClientPayload>,
}

/// Body of `selectionner_prestation`. Without `montant_final` the backend
/// falls back to the prestation's `prix_min`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SelectionPrestationPayload {
    pub prestation_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub montant_final: Option<u32>,
}

/// Body of `initier_paiement`. The operator key must stay out of the JSON
/// for non-mobile means, the backend rejects unexpected operators.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct InitiationPayload {
    pub moyen_paiement: MoyenPaiement,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operateur_mobile: Option<OperateurMobile>,
}

/// Answer of `initier_paiement`; `paiement_url` is only set for mobile
/// money checkouts that continue on the operator's page.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct InitiationPaiement {
    pub paiement_id: Uuid,
    #[serde(default)]
    pub paiement_url: Option<String>,
    #[serde(deserialize_with = "deserialize_montant")]
    pub montant: u32,
    pub moyen_paiement: MoyenPaiement,
}

/// Answer of `recapitulatif`, closing the checkout with a thank-you note.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Recapitulatif {
    pub session: SessionPaiement,
    #[serde(default)]
    pub paiement: Option<Paiement>,
    pub message_remerciement: String,
}

/// Body of `authentification_directe`, the QR-less entry point.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AuthDirectePayload {
    pub telephone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client: Option<ClientPayload>,
}

/// Answer of `authentification_directe`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AuthDirecteReponse {
    pub session: SessionPaiement,
    pub redirect_url: String,
}
