use super::*;

fn formulaire_valide() -> FormulaireClient {
    FormulaireClient {
        nom: "Diallo".to_owned(),
        prenom: "Awa".to_owned(),
        sexe: Sexe::F,
        telephone: "+22512345678".to_owned(),
        email: String::new(),
        date_anniversaire: String::new(),
        lieu_habitation: String::new(),
    }
}

#[test]
fn payload_trim_et_omet_les_champs_vides() {
    let mut form = formulaire_valide();
    form.nom = "  Diallo  ".to_owned();
    form.lieu_habitation = "  ".to_owned();
    let payload = payload_du_formulaire(&form).unwrap();
    assert_eq!(payload.nom.as_deref(), Some("Diallo"));
    assert_eq!(payload.email, None);
    assert_eq!(payload.lieu_habitation, None);
    assert_eq!(payload.actif, None);
}

#[test]
fn payload_garde_les_champs_optionnels_remplis() {
    let mut form = formulaire_valide();
    form.email = "awa@example.com".to_owned();
    form.lieu_habitation = "Cocody".to_owned();
    let payload = payload_du_formulaire(&form).unwrap();
    assert_eq!(payload.email.as_deref(), Some("awa@example.com"));
    assert_eq!(payload.lieu_habitation.as_deref(), Some("Cocody"));
}

#[test]
fn nom_requis() {
    let mut form = formulaire_valide();
    form.nom = "   ".to_owned();
    assert_eq!(
        payload_du_formulaire(&form),
        Err(ValidationError::ChampRequis("Le nom"))
    );
}

#[test]
fn telephone_invalide_rejete() {
    let mut form = formulaire_valide();
    form.telephone = "abc".to_owned();
    assert_eq!(
        payload_du_formulaire(&form),
        Err(ValidationError::TelephoneFormat)
    );
}

#[test]
fn email_invalide_rejete() {
    let mut form = formulaire_valide();
    form.email = "pas-un-email".to_owned();
    assert_eq!(
        payload_du_formulaire(&form),
        Err(ValidationError::EmailFormat)
    );
}

#[test]
fn sexe_depuis_la_valeur_du_select() {
    assert_eq!(sexe_depuis("M"), Sexe::M);
    assert_eq!(sexe_depuis("F"), Sexe::F);
    assert_eq!(sexe_depuis("autre"), Sexe::F);
}

#[test]
fn filtres_depuis_la_valeur_du_select() {
    assert_eq!(filtre_sexe_depuis("F"), Some(Sexe::F));
    assert_eq!(filtre_sexe_depuis("M"), Some(Sexe::M));
    assert_eq!(filtre_sexe_depuis(""), None);
    assert_eq!(filtre_actif_depuis("true"), Some(true));
    assert_eq!(filtre_actif_depuis("false"), Some(false));
    assert_eq!(filtre_actif_depuis(""), None);
}

#[test]
fn correspond_combine_recherche_et_filtres() {
    let client: Client = serde_json::from_str(
        r#"{
            "id": "7a0f4a2e-90b1-4a6b-8a1e-2f3c5d6e7f80",
            "nom": "Ndiaye",
            "prenom": "Awa",
            "sexe": "F",
            "telephone": "+221771234567",
            "actif": true
        }"#,
    )
    .unwrap();
    assert!(correspond(&client, "", None, None));
    assert!(correspond(&client, "awa", Some(Sexe::F), Some(true)));
    assert!(!correspond(&client, "", Some(Sexe::M), None));
    assert!(!correspond(&client, "", None, Some(false)));
    assert!(!correspond(&client, "fatou", None, None));
}
