// src/noyau/format.rs

use tracing::warn;

/// Au-delà (ou en deçà) de ces bornes, on passe en notation exponentielle.
const SEUIL_EXPO_HAUT: f64 = 1e21;
const SEUIL_EXPO_BAS: f64 = 1e-6;

/* ------------------------ nombre -> texte ------------------------ */

/// Formate un résultat pour l’affichage.
///
/// - représentation décimale la plus courte qui relit la même valeur
/// - pas de séparateur de milliers, pas de troncature à précision fixe
/// - sentinelles lisibles : "Infinity", "-Infinity", "NaN"
/// - "-0" s’affiche "0"
/// - |x| ≥ 1e21 ou 0 < |x| < 1e-6 : mantisse + exposant signé ("1e+21", "1.5e-7")
pub fn formater(x: f64) -> String {
    if x.is_nan() {
        return "NaN".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        };
    }
    if x == 0.0 {
        return "0".to_string();
    }

    let abs = x.abs();
    if abs >= SEUIL_EXPO_HAUT || abs < SEUIL_EXPO_BAS {
        return format_exposant(x);
    }

    format!("{x}")
}

fn format_exposant(x: f64) -> String {
    let brut = format!("{x:e}");
    match brut.split_once('e') {
        Some((mantisse, expo)) if !expo.starts_with('-') => format!("{mantisse}e+{expo}"),
        _ => brut,
    }
}

/* ------------------------ texte -> nombre ------------------------ */

/// Relit l’affichage en nombre.
///
/// Tout ce que la machine met dans l’affichage est relisible (saisie décimale
/// ou sortie de `formater`) ; si ce n’était pas le cas, on obtient NaN.
pub fn lire(texte: &str) -> f64 {
    match texte.parse::<f64>() {
        Ok(v) => v,
        Err(e) => {
            warn!(texte, erreur = %e, "affichage illisible, NaN");
            f64::NAN
        }
    }
}

/// Vrai si le texte est une saisie décimale qu’on peut prolonger :
/// `-?[0-9]+(\.[0-9]*)?` (le point final est permis pendant la frappe).
///
/// Faux pour les sentinelles et la notation exponentielle.
pub fn est_editable(texte: &str) -> bool {
    let corps = texte.strip_prefix('-').unwrap_or(texte);
    let (entier, frac) = match corps.split_once('.') {
        Some((e, f)) => (e, f),
        None => (corps, ""),
    };

    !entier.is_empty()
        && entier.bytes().all(|b| b.is_ascii_digit())
        && frac.bytes().all(|b| b.is_ascii_digit())
}
