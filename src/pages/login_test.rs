use super::*;

#[test]
fn valider_formulaire_trim_le_nom() {
    let payload = valider_formulaire("  admin  ", "secret123");
    assert_eq!(
        payload,
        Ok(LoginPayload {
            username: "admin".to_owned(),
            password: "secret123".to_owned(),
        })
    );
}

#[test]
fn valider_formulaire_exige_le_nom() {
    assert_eq!(
        valider_formulaire("   ", "secret123"),
        Err("Le nom d'utilisateur est requis")
    );
}

#[test]
fn valider_formulaire_exige_le_mot_de_passe() {
    assert_eq!(
        valider_formulaire("admin", ""),
        Err("Le mot de passe est requis")
    );
}

#[test]
fn valider_formulaire_garde_les_espaces_du_mot_de_passe() {
    let payload = valider_formulaire("admin", " avec espaces ");
    assert_eq!(
        payload.map(|p| p.password),
        Ok(" avec espaces ".to_owned())
    );
}
