//! Scénarios de frappe : séquences complètes de touches -> affichage attendu.
//!
//! Notation compacte : "7+3=" ; 'C' = AC, '<' = retour arrière.

use super::{Accumulateur, Calcul, Operateur, Touche};

fn touche(c: char) -> Touche {
    match c {
        'C' => Touche::Effacer,
        '<' => Touche::RetourArriere,
        _ => Touche::depuis_caractere(c).unwrap_or_else(|| panic!("touche inconnue {c:?}")),
    }
}

fn taper(sequence: &str) -> (Accumulateur, Vec<Calcul>) {
    let mut a = Accumulateur::default();
    let calculs = sequence.chars().filter_map(|c| a.traiter(touche(c))).collect();
    (a, calculs)
}

fn affichage(sequence: &str) -> String {
    taper(sequence).0.affichage
}

/* ------------------------ Saisie ------------------------ */

#[test]
fn scen_zeros_de_tete() {
    assert_eq!(affichage("05"), "5");
    assert_eq!(affichage("000"), "0");
    assert_eq!(affichage("1002"), "1002");
}

#[test]
fn scen_virgule_unique() {
    assert_eq!(affichage(".."), "0.");
    assert_eq!(affichage("1.2.5"), "1.25");
    assert_eq!(affichage("0.05"), "0.05");
}

#[test]
fn scen_retour_arriere() {
    assert_eq!(affichage("<"), "0");
    assert_eq!(affichage("12<"), "1");
    assert_eq!(affichage("1<"), "0");
    assert_eq!(affichage("1.<"), "1");
}

#[test]
fn scen_effacer_revient_au_defaut() {
    let (a, _) = taper("12+7*C");
    assert_eq!(a, Accumulateur::default());
}

/* ------------------------ Évaluation ------------------------ */

#[test]
fn scen_addition_simple() {
    let (a, calculs) = taper("7+3=");
    assert_eq!(a.affichage, "10");
    assert_eq!(a.memoire, "10");
    assert_eq!(a.operateur, None);
    assert_eq!(calculs.len(), 1);
}

#[test]
fn scen_division_par_zero() {
    assert_eq!(affichage("5/0="), "Infinity");
    assert_eq!(affichage("0/0="), "NaN");
    assert_eq!(affichage("3-8=/0="), "-Infinity");
}

#[test]
fn scen_operateur_enchaine_puis_egal() {
    let mut a = Accumulateur::default();
    for c in "4+5".chars() {
        a.traiter(touche(c));
    }

    a.traiter(Touche::Operateur(Operateur::Addition));
    assert_eq!(a.affichage, "9");
    assert_eq!(a.memoire, "9");
    assert_eq!(a.operateur, Some(Operateur::Addition));
    assert!(a.en_attente_operande);

    // aucun nouvel opérande : "=" ne fait rien
    assert_eq!(a.traiter(Touche::Egal), None);
    assert_eq!(a.affichage, "9");
    assert_eq!(a.operateur, Some(Operateur::Addition));
}

#[test]
fn scen_deux_operateurs_d_affilee() {
    let (a, calculs) = taper("5+*");
    assert!(calculs.is_empty(), "pas de combinaison en double");
    assert_eq!(a.affichage, "5");
    assert_eq!(a.memoire, "5");
    assert_eq!(a.operateur, Some(Operateur::Multiplication));

    // le dernier opérateur pressé est celui qui s’applique
    let (a, _) = taper("5+*3=");
    assert_eq!(a.affichage, "15");
}

#[test]
fn scen_gauche_a_droite_sans_priorite() {
    // (2 + 3) * 4, pas 2 + 12
    assert_eq!(affichage("2+3*4="), "20");
    assert_eq!(affichage("10-4/2="), "3");
}

#[test]
fn scen_pourcentage() {
    assert_eq!(affichage("50%"), "0.5");
    assert_eq!(affichage("200+10%="), "200.1");
}

#[test]
fn scen_grands_nombres_en_exposant() {
    assert_eq!(affichage("1000000000*1000000000000="), "1e+21");
    // on ne prolonge pas un exposant : nouvelle saisie
    assert_eq!(affichage(".0000001%3"), "3");
    assert_eq!(affichage(".0000001%."), "0.");
}

#[test]
fn scen_egal_sans_operateur() {
    let (a, calculs) = taper("42=");
    assert!(calculs.is_empty());
    assert_eq!(a.affichage, "42");
    assert!(!a.en_attente_operande);
}

#[test]
fn scen_egal_repete_sans_effet() {
    let (a, calculs) = taper("2*3==");
    assert_eq!(calculs.len(), 1);
    assert_eq!(a.affichage, "6");
}

#[test]
fn scen_continuer_apres_egal() {
    // le résultat reste le premier opérande
    assert_eq!(affichage("7+3=*2="), "20");
}

#[test]
fn scen_memoire_conservee_apres_egal() {
    // le nombre tapé après "=" n’est pas repris : 10 + 1
    assert_eq!(affichage("7+3=5+1="), "11");
    // pourcentage après "=" : la mémoire vaut toujours 10
    assert_eq!(affichage("7+3=%*2="), "20");

    let (a, calculs) = taper("7+3=5+");
    assert_eq!(calculs.len(), 1);
    assert_eq!(a.memoire, "10");
    assert_eq!(a.affichage, "5");
    assert_eq!(a.operateur, Some(Operateur::Addition));
}

#[test]
fn scen_decimaux_flottants() {
    assert_eq!(affichage(".1+.2="), "0.30000000000000004");
    assert_eq!(affichage("1.5*4="), "6");
}

#[test]
fn scen_apres_sentinelle() {
    // on peut repartir d’un nouveau nombre
    assert_eq!(affichage("5/0=7"), "7");
    assert_eq!(affichage("5/0=<"), "0");
    // la sentinelle se propage dans les calculs
    assert_eq!(affichage("5/0=+1="), "Infinity");
}

#[test]
fn scen_historique_des_calculs() {
    let (_, calculs) = taper("4+5+1=");
    let lignes: Vec<String> = calculs.iter().map(Calcul::ligne).collect();
    assert_eq!(lignes, vec!["4 + 5 = 9", "9 + 1 = 10"]);
}
