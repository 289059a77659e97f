//! Source hygiene for the domain crate.
//!
//! salon-core runs inside the WASM app and decodes whatever the backend
//! sends, so a panicking line here takes the whole page down. These tests
//! walk `salon-core/src` and refuse the constructs below outright, naming
//! the offending lines.

use std::fs;
use std::path::Path;

fn ramasser(dossier: &Path, fichiers: &mut Vec<(String, String)>) {
    let Ok(entrees) = fs::read_dir(dossier) else {
        return;
    };
    for entree in entrees.flatten() {
        let chemin = entree.path();
        if chemin.is_dir() {
            ramasser(&chemin, fichiers);
            continue;
        }
        let nom = chemin.to_string_lossy().into_owned();
        // Side-by-side unit tests may panic; production files may not.
        if !nom.ends_with(".rs") || nom.ends_with("_test.rs") {
            continue;
        }
        if let Ok(contenu) = fs::read_to_string(&chemin) {
            fichiers.push((nom, contenu));
        }
    }
}

/// `path:line: motif` for every production line containing one of `motifs`.
fn chercher(motifs: &[&str]) -> Vec<String> {
    let mut fichiers = Vec::new();
    ramasser(Path::new("src"), &mut fichiers);
    assert!(
        !fichiers.is_empty(),
        "no sources under src/; the test expects the crate root as cwd"
    );
    let mut coupables = Vec::new();
    for (chemin, contenu) in &fichiers {
        for (indice, ligne) in contenu.lines().enumerate() {
            for motif in motifs {
                if ligne.contains(motif) {
                    coupables.push(format!("{chemin}:{}: {motif}", indice + 1));
                }
            }
        }
    }
    coupables
}

#[test]
fn decode_paths_never_panic() {
    let coupables = chercher(&[
        ".unwrap()",
        ".expect(",
        "panic!(",
        "unreachable!(",
        "todo!(",
        "unimplemented!(",
    ]);
    assert!(
        coupables.is_empty(),
        "panicking constructs in salon-core/src (each one aborts the WASM instance):\n{}",
        coupables.join("\n")
    );
}

#[test]
fn errors_are_never_dropped_silently() {
    let coupables = chercher(&["let _ =", ".ok()"]);
    assert!(
        coupables.is_empty(),
        "silently discarded results in salon-core/src:\n{}",
        coupables.join("\n")
    );
}

#[test]
fn debug_noise_stays_out() {
    let coupables = chercher(&["println!(", "eprintln!(", "dbg!("]);
    assert!(
        coupables.is_empty(),
        "debug output in salon-core/src (browser builds have no stdout):\n{}",
        coupables.join("\n")
    );
}

#[test]
fn no_dead_code_waivers() {
    let coupables = chercher(&["#[allow(dead_code)]"]);
    assert!(
        coupables.is_empty(),
        "#[allow(dead_code)] in salon-core/src; unused code gets deleted instead:\n{}",
        coupables.join("\n")
    );
}
