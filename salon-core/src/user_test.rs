use super::*;

fn user_json() -> &'static str {
    r#"{
        "id": 3,
        "username": "fatou",
        "email": "fatou@salon.sn",
        "first_name": "Fatou",
        "last_name": "Sall",
        "role": "vendeur",
        "telephone": "+221770000000",
        "actif": true,
        "date_creation": "2026-01-05T10:00:00Z",
        "date_modification": "2026-01-05T10:00:00Z"
    }"#
}

#[test]
fn decodes_accounts_with_integer_ids() {
    let user: Utilisateur = serde_json::from_str(user_json()).unwrap();
    assert_eq!(user.id, 3);
    assert_eq!(user.role, Role::Vendeur);
    assert!(!user.est_admin());
}

#[test]
fn role_wire_values_and_labels() {
    assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), r#""admin""#);
    assert_eq!(serde_json::to_string(&Role::Vendeur).unwrap(), r#""vendeur""#);
    assert_eq!(Role::Admin.label(), "Administrateur");
    assert_eq!(Role::default(), Role::Vendeur);
}

#[test]
fn admin_holds_every_permission() {
    for p in [
        Permission::ViewDashboard,
        Permission::ManageUsers,
        Permission::ManageClients,
        Permission::ManagePrestations,
        Permission::ManagePaiements,
        Permission::ManageSessions,
        Permission::ViewReports,
        Permission::ManageSystem,
    ] {
        assert!(Role::Admin.a_permission(p));
    }
}

#[test]
fn vendeur_cannot_manage_users_or_system() {
    assert!(Role::Vendeur.a_permission(Permission::ViewDashboard));
    assert!(Role::Vendeur.a_permission(Permission::ManagePaiements));
    assert!(!Role::Vendeur.a_permission(Permission::ManageUsers));
    assert!(!Role::Vendeur.a_permission(Permission::ManageSystem));
}

#[test]
fn nom_affichage_falls_back_to_username() {
    let mut user: Utilisateur = serde_json::from_str(user_json()).unwrap();
    assert_eq!(user.nom_affichage(), "Fatou Sall");
    user.first_name = String::new();
    user.last_name = String::new();
    assert_eq!(user.nom_affichage(), "fatou");
}

#[test]
fn create_payload_enforces_username_and_password_rules() {
    let mut payload = UtilisateurCreatePayload {
        username: String::new(),
        email: "a@salon.sn".to_string(),
        password: "motdepasse".to_string(),
        password_confirm: "motdepasse".to_string(),
        first_name: String::new(),
        last_name: String::new(),
        role: Role::Vendeur,
        telephone: None,
    };
    assert_eq!(
        payload.valider(),
        Err(ValidationError::ChampRequis("Le nom d'utilisateur"))
    );
    payload.username = "fatou".to_string();
    assert_eq!(payload.valider(), Ok(()));
    payload.password_confirm = "autre".to_string();
    assert_eq!(payload.valider(), Err(ValidationError::MotsDePasseDifferents));
    payload.password = "court".to_string();
    payload.password_confirm = "court".to_string();
    assert_eq!(payload.valider(), Err(ValidationError::MotDePasseTropCourt));
}

#[test]
fn decodes_login_answers() {
    let body = format!(
        r#"{{"token": "3e0c1b2a", "user": {}, "message": "Connexion réussie"}}"#,
        user_json()
    );
    let login: LoginReponse = serde_json::from_str(&body).unwrap();
    assert_eq!(login.token, "3e0c1b2a");
    assert_eq!(login.user.username, "fatou");
}

#[test]
fn change_password_requires_the_current_one() {
    let payload = ChangePasswordPayload {
        current_password: String::new(),
        new_password: "nouveaumotdepasse".to_string(),
        new_password_confirm: "nouveaumotdepasse".to_string(),
    };
    assert_eq!(
        payload.valider(),
        Err(ValidationError::ChampRequis("Le mot de passe actuel"))
    );
    let payload = ChangePasswordPayload {
        current_password: "ancien".to_string(),
        ..payload
    };
    assert_eq!(payload.valider(), Ok(()));
}
