use super::*;

fn chemins(est_admin: bool) -> Vec<&'static str> {
    nav_items(est_admin).into_iter().map(|i| i.chemin).collect()
}

#[test]
fn vendeur_voit_les_pages_operationnelles() {
    assert_eq!(
        chemins(false),
        vec![
            "/dashboard",
            "/paiements",
            "/clients",
            "/prestations",
            "/avis",
            "/qr-codes",
        ],
    );
}

#[test]
fn admin_voit_aussi_comptes_et_parametres() {
    let admin = chemins(true);
    assert!(admin.contains(&"/users"));
    assert_eq!(admin.last(), Some(&"/settings"));
    assert_eq!(admin.len(), chemins(false).len() + 2);
}

#[test]
fn pages_admin_fermees_aux_vendeurs() {
    assert!(!chemins(false).contains(&"/users"));
    assert!(!chemins(false).contains(&"/settings"));
}

#[test]
fn titre_suit_le_chemin() {
    assert_eq!(titre_pour("/paiements"), "Paiements");
    assert_eq!(titre_pour("/users"), "Utilisateurs");
    assert_eq!(titre_pour("/settings"), "Paramètres");
}

#[test]
fn titre_par_defaut_sur_chemin_inconnu() {
    assert_eq!(titre_pour("/"), "Tableau de bord");
    assert_eq!(titre_pour("/inconnu"), "Tableau de bord");
}
