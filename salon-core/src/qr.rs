//! QR codes handed to clients to open a checkout session.
//!
//! The list endpoint only carries display strings; typed values come back
//! on detail and generation answers. The image arrives as a media URL,
//! under `image` or the legacy `image_qr` key depending on the backend
//! revision.

#[cfg(test)]
#[path = "qr_test.rs"]
mod qr_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeQr {
    Identification,
    Prestation,
    Paiement,
    Recapitulatif,
}

impl TypeQr {
    pub const ALL: [Self; 4] = [
        Self::Identification,
        Self::Prestation,
        Self::Paiement,
        Self::Recapitulatif,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Identification => "Identification Client",
            Self::Prestation => "Sélection Prestation",
            Self::Paiement => "Paiement",
            Self::Recapitulatif => "Récapitulatif",
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Identification => "identification",
            Self::Prestation => "prestation",
            Self::Paiement => "paiement",
            Self::Recapitulatif => "recapitulatif",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatutQr {
    Genere,
    Scanne,
    Expire,
    Utilise,
}

impl StatutQr {
    pub const ALL: [Self; 4] = [Self::Genere, Self::Scanne, Self::Expire, Self::Utilise];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Genere => "Généré",
            Self::Scanne => "Scanné",
            Self::Expire => "Expiré",
            Self::Utilise => "Utilisé",
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Genere => "genere",
            Self::Scanne => "scanne",
            Self::Expire => "expire",
            Self::Utilise => "utilise",
        }
    }
}

/// Slim row from the QR list endpoint: display strings only.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct QrCodeRow {
    pub id: Uuid,
    #[serde(default)]
    pub client_nom_complet: Option<String>,
    #[serde(default)]
    pub type_qrcode_display: String,
    #[serde(default)]
    pub statut_display: String,
    #[serde(default)]
    pub date_expiration: Option<String>,
    #[serde(default)]
    pub est_expire: bool,
    #[serde(default)]
    pub nombre_scans: u32,
    #[serde(default)]
    pub date_creation: String,
}

/// Full QR code from detail and generation answers.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct QrCode {
    pub id: Uuid,
    #[serde(default)]
    pub client: Option<Uuid>,
    #[serde(default)]
    pub client_nom_complet: Option<String>,
    pub type_qrcode: TypeQr,
    #[serde(default)]
    pub contenu: String,
    pub statut: StatutQr,
    #[serde(default, alias = "image_qr")]
    pub image: Option<String>,
    #[serde(default)]
    pub date_expiration: Option<String>,
    #[serde(default)]
    pub nombre_scans: u32,
    #[serde(default)]
    pub nombre_utilisations: u32,
    #[serde(default)]
    pub est_expire: bool,
    #[serde(default)]
    pub est_valide: bool,
    #[serde(default)]
    pub date_creation: String,
}

/// Body of `generer_pour_client`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct QrGenerationPayload {
    pub client_id: Uuid,
    pub type_qrcode: TypeQr,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contenu: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_expiration: Option<String>,
}

/// Answer of the `scanner`, `utiliser`, `regenerer_image`, and
/// `nettoyer_expires` actions; all carry a message, the rest varies.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct QrActionReponse {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub client: Option<String>,
    #[serde(default, rename = "type")]
    pub type_affichage: Option<String>,
    #[serde(default)]
    pub nombre_scans: Option<u32>,
    #[serde(default)]
    pub nombre_utilisations: Option<u32>,
}
