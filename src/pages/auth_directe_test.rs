use super::*;

fn reponse(redirect_url: &str) -> AuthDirecteReponse {
    let body = format!(
        r#"{{
            "session": {{
                "id": "92b6f5e4-d3c2-41b0-9a8f-7e6d5c4b3a29",
                "session_id": "d4f0a1b2-c3e4-4f50-8a9b-0c1d2e3f4a5b",
                "statut": "scanne"
            }},
            "redirect_url": "{redirect_url}"
        }}"#
    );
    serde_json::from_str(&body).unwrap()
}

fn formulaire_rempli() -> FormulaireNouveauClient {
    FormulaireNouveauClient {
        nom: "  Koné  ".to_owned(),
        prenom: "Fatou".to_owned(),
        sexe: Sexe::F,
        email: String::new(),
        date_anniversaire: String::new(),
        lieu_habitation: "  Yopougon  ".to_owned(),
    }
}

#[test]
fn client_connu_envoie_un_objet_vide() {
    let payload = payload_auth(" +22507123456 ", true, &formulaire_rempli()).unwrap();
    assert_eq!(payload.telephone, "+22507123456");
    let json = serde_json::to_value(payload.client.unwrap()).unwrap();
    assert_eq!(json, serde_json::json!({}));
}

#[test]
fn nouveau_client_porte_le_formulaire() {
    let payload = payload_auth("+22507123456", false, &formulaire_rempli()).unwrap();
    let client = payload.client.unwrap();
    assert_eq!(client.nom.as_deref(), Some("Koné"));
    assert_eq!(client.prenom.as_deref(), Some("Fatou"));
    assert_eq!(client.sexe, Some(Sexe::F));
    assert_eq!(client.email, None);
    assert_eq!(client.lieu_habitation.as_deref(), Some("Yopougon"));
}

#[test]
fn nouveau_client_exige_nom_et_prenom() {
    let mut form = formulaire_rempli();
    form.nom = "  ".to_owned();
    assert_eq!(
        payload_auth("+22507123456", false, &form),
        Err(ValidationError::ChampRequis("Le nom"))
    );
    let mut form = formulaire_rempli();
    form.prenom = String::new();
    assert_eq!(
        payload_auth("+22507123456", false, &form),
        Err(ValidationError::ChampRequis("Le prénom"))
    );
}

#[test]
fn telephone_invalide_bloque_avant_le_reste() {
    assert_eq!(
        payload_auth("", true, &formulaire_rempli()),
        Err(ValidationError::TelephoneRequis)
    );
    assert_eq!(
        payload_auth("0712", false, &FormulaireNouveauClient::default()),
        Err(ValidationError::TelephoneFormat)
    );
}

#[test]
fn cible_prefere_l_url_du_backend() {
    assert_eq!(
        cible_session(&reponse("/session/abc-123")),
        "/session/abc-123"
    );
    assert_eq!(
        cible_session(&reponse("")),
        "/session/d4f0a1b2-c3e4-4f50-8a9b-0c1d2e3f4a5b"
    );
}

#[test]
fn libelle_du_bouton_selon_le_mode() {
    assert_eq!(
        libelle_continuer(true, "Fatou"),
        "Continuer en tant que Fatou"
    );
    assert_eq!(
        libelle_continuer(false, "Fatou"),
        "Continuer avec les nouvelles informations"
    );
}
