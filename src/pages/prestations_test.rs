use super::*;

fn formulaire_valide() -> FormulairePrestation {
    FormulairePrestation {
        nom: "Resserrage".to_owned(),
        type_prestation: TypePrestation::Resserrage,
        description: String::new(),
        prix_min: "5000".to_owned(),
        prix_max: String::new(),
        duree: String::new(),
        actif: true,
    }
}

#[test]
fn parse_montant_accepte_vide_et_nombres() {
    assert_eq!(parse_montant(""), Ok(None));
    assert_eq!(parse_montant("  "), Ok(None));
    assert_eq!(parse_montant(" 5000 "), Ok(Some(5000)));
}

#[test]
fn parse_montant_rejette_le_non_numerique() {
    assert_eq!(parse_montant("abc"), Err(ValidationError::MontantNonPositif));
    assert_eq!(parse_montant("-5"), Err(ValidationError::MontantNonPositif));
}

#[test]
fn payload_complet() {
    let mut form = formulaire_valide();
    form.prix_max = "10000".to_owned();
    form.duree = "90".to_owned();
    form.description = "  Entretien des locks  ".to_owned();
    let payload = payload_du_formulaire(&form).unwrap();
    assert_eq!(payload.prix_min, 5000);
    assert_eq!(payload.prix_max, Some(10_000));
    assert_eq!(payload.duree_estimee, Some(90));
    assert_eq!(payload.description.as_deref(), Some("Entretien des locks"));
}

#[test]
fn prix_minimum_requis() {
    let mut form = formulaire_valide();
    form.prix_min = String::new();
    assert_eq!(
        payload_du_formulaire(&form),
        Err(ValidationError::ChampRequis("Le prix minimum"))
    );
}

#[test]
fn prix_minimum_nul_rejete() {
    let mut form = formulaire_valide();
    form.prix_min = "0".to_owned();
    assert_eq!(
        payload_du_formulaire(&form),
        Err(ValidationError::MontantNonPositif)
    );
}

#[test]
fn bornes_inversees_rejetees() {
    let mut form = formulaire_valide();
    form.prix_max = "4000".to_owned();
    assert_eq!(
        payload_du_formulaire(&form),
        Err(ValidationError::PrixMaxInferieur)
    );
}

#[test]
fn type_depuis_retombe_sur_autre() {
    assert_eq!(type_depuis("sister_locks"), TypePrestation::SisterLocks);
    assert_eq!(type_depuis("inconnu"), TypePrestation::Autre);
}

#[test]
fn filtres_depuis_la_valeur_du_select() {
    assert_eq!(filtre_type_depuis("coiffure"), Some(TypePrestation::Coiffure));
    assert_eq!(filtre_type_depuis(""), None);
    assert_eq!(filtre_actif_depuis("true"), Some(true));
    assert_eq!(filtre_actif_depuis("false"), Some(false));
    assert_eq!(filtre_actif_depuis(""), None);
}

#[test]
fn correspond_combine_recherche_et_filtres() {
    let brut = serde_json::json!({
        "id": "7f2f9f4e-8d2a-4f6e-9c1b-2a6d8e4f1a23",
        "nom": "Resserrage",
        "type_prestation": "resserrage",
        "prix_affichage": "5,000 FCFA",
        "actif": true
    });
    let prestation: Prestation = serde_json::from_value(brut).unwrap();
    assert!(correspond(&prestation, "", None, None));
    assert!(correspond(&prestation, "resser", Some(TypePrestation::Resserrage), Some(true)));
    assert!(!correspond(&prestation, "", Some(TypePrestation::Coiffure), None));
    assert!(!correspond(&prestation, "", None, Some(false)));
    assert!(!correspond(&prestation, "shampoing", None, None));
}

#[test]
fn prix_pour_prefere_le_libelle_serveur() {
    let brut = serde_json::json!({
        "id": "7f2f9f4e-8d2a-4f6e-9c1b-2a6d8e4f1a23",
        "nom": "Resserrage",
        "type_prestation": "resserrage",
        "prix_min": 5000,
        "prix_max": 10000,
        "prix_affichage": "5,000 à 10,000 FCFA",
        "actif": true
    });
    let prestation: Prestation = serde_json::from_value(brut).unwrap();
    assert_eq!(prix_pour(&prestation), "5,000 à 10,000 FCFA");
}

#[test]
fn prix_pour_derive_des_bornes() {
    let brut = serde_json::json!({
        "id": "7f2f9f4e-8d2a-4f6e-9c1b-2a6d8e4f1a23",
        "nom": "Shampoing",
        "type_prestation": "shampoing",
        "prix_min": 2000,
        "actif": true
    });
    let prestation: Prestation = serde_json::from_value(brut).unwrap();
    assert_eq!(prix_pour(&prestation), "2,000 FCFA");
}

#[test]
fn formulaire_prerempli_depuis_la_prestation() {
    let brut = serde_json::json!({
        "id": "7f2f9f4e-8d2a-4f6e-9c1b-2a6d8e4f1a23",
        "nom": "Sister locks",
        "type_prestation": "sister_locks",
        "description": "Pose complète",
        "prix_min": 30000,
        "prix_max": 60000,
        "duree_estimee": 240,
        "actif": false
    });
    let prestation: Prestation = serde_json::from_value(brut).unwrap();
    let form = FormulairePrestation::depuis_prestation(&prestation);
    assert_eq!(form.nom, "Sister locks");
    assert_eq!(form.description, "Pose complète");
    assert_eq!(form.prix_min, "30000");
    assert_eq!(form.prix_max, "60000");
    assert_eq!(form.duree, "240");
    assert!(!form.actif);
}
