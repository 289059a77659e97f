use super::*;

// =============================================================
// hauteurs_barres
// =============================================================

#[test]
fn tallest_bar_reaches_the_ceiling() {
    let hauteurs = hauteurs_barres(&[5000, 10_000, 2500], 120);
    assert_eq!(hauteurs, vec![60, 120, 30]);
}

#[test]
fn empty_week_stays_flat() {
    assert_eq!(hauteurs_barres(&[0, 0, 0], 120), vec![0, 0, 0]);
    assert!(hauteurs_barres(&[], 120).is_empty());
}

#[test]
fn single_point_fills_the_chart() {
    assert_eq!(hauteurs_barres(&[1], 120), vec![120]);
}

#[test]
fn large_amounts_do_not_overflow() {
    let hauteurs = hauteurs_barres(&[u64::MAX / 2, u64::MAX], 100);
    assert_eq!(hauteurs[1], 100);
    assert!(hauteurs[0] <= 100);
}

// =============================================================
// pourcentage
// =============================================================

#[test]
fn pourcentage_rounds_to_nearest() {
    assert_eq!(pourcentage(2, 3), 67);
    assert_eq!(pourcentage(1, 3), 33);
    assert_eq!(pourcentage(1, 2), 50);
}

#[test]
fn pourcentage_of_empty_total_is_zero() {
    assert_eq!(pourcentage(0, 0), 0);
    assert_eq!(pourcentage(5, 0), 0);
}

#[test]
fn pourcentage_full_share_is_hundred() {
    assert_eq!(pourcentage(7, 7), 100);
}
