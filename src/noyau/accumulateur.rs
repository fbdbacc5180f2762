//! src/noyau/accumulateur.rs
//!
//! Machine à états de la calculatrice (accumulateur séquentiel).
//!
//! Contrats :
//! - Évaluation strictement gauche -> droite, un seul opérateur en attente.
//! - `affichage` n’est jamais vide et reste toujours relisible en nombre.
//! - Aucune erreur : division par zéro => sentinelle affichée ("Infinity", "NaN").
//! - Opérateur en attente => `memoire` non vide.

use tracing::debug;

use super::format::{est_editable, formater, lire};
use super::historique::Calcul;
use super::operateur::Operateur;
use super::touche::Touche;

const AFFICHAGE_DEFAUT: &str = "0";

#[derive(Clone, Debug, PartialEq)]
pub struct Accumulateur {
    /// Opérande en cours de saisie, ou dernier résultat.
    pub affichage: String,
    /// Opérande déjà validé ("" si aucun).
    pub memoire: String,
    pub operateur: Option<Operateur>,
    /// Vrai juste après un opérateur ou "=" : le prochain chiffre démarre un nouvel opérande.
    pub en_attente_operande: bool,
}

impl Default for Accumulateur {
    fn default() -> Self {
        Self {
            affichage: AFFICHAGE_DEFAUT.to_string(),
            memoire: String::new(),
            operateur: None,
            en_attente_operande: false,
        }
    }
}

impl Accumulateur {
    /// Point d’entrée unique de l’hôte.
    ///
    /// Renvoie le calcul effectué si la touche a combiné deux opérandes.
    pub fn traiter(&mut self, touche: Touche) -> Option<Calcul> {
        debug!(?touche, affichage = %self.affichage, "touche");
        match touche {
            Touche::Chiffre(d) => {
                self.chiffre(d);
                None
            }
            Touche::Virgule => {
                self.virgule();
                None
            }
            Touche::Effacer => {
                self.effacer();
                None
            }
            Touche::RetourArriere => {
                self.retour_arriere();
                None
            }
            Touche::Pourcentage => {
                self.pourcentage();
                None
            }
            Touche::Operateur(op) => self.appliquer_operateur(op),
            Touche::Egal => self.egal(),
        }
    }

    /// Ligne d’expression : mémoire + glyphe de l’opérateur en attente.
    pub fn ligne_expression(&self) -> String {
        match self.operateur {
            Some(op) => format!("{} {}", self.memoire, op.glyphe()),
            None => self.memoire.clone(),
        }
    }

    /* ------------------------ Saisie ------------------------ */

    pub fn chiffre(&mut self, d: u8) {
        let Some(c) = char::from_digit(u32::from(d), 10) else {
            debug!(d, "chiffre hors 0..=9 ignoré");
            return;
        };

        if self.en_attente_operande || !est_editable(&self.affichage) {
            self.affichage = c.to_string();
            self.en_attente_operande = false;
            return;
        }

        match self.affichage.as_str() {
            // pas de zéros de tête
            "0" => self.affichage = c.to_string(),
            "-0" => self.affichage = format!("-{c}"),
            _ => self.affichage.push(c),
        }
    }

    pub fn virgule(&mut self) {
        if self.en_attente_operande || !est_editable(&self.affichage) {
            self.affichage = "0.".to_string();
            self.en_attente_operande = false;
            return;
        }

        if !self.affichage.contains('.') {
            self.affichage.push('.');
        }
    }

    /// AC : retour à l’état initial.
    pub fn effacer(&mut self) {
        *self = Self::default();
    }

    /// Retire le dernier caractère (ne touche ni à la mémoire, ni à l’opérateur).
    pub fn retour_arriere(&mut self) {
        if !est_editable(&self.affichage) || self.affichage.chars().count() <= 1 {
            self.affichage = AFFICHAGE_DEFAUT.to_string();
            return;
        }

        self.affichage.pop();
        if self.affichage == "-" {
            self.affichage = AFFICHAGE_DEFAUT.to_string();
        }
    }

    pub fn pourcentage(&mut self) {
        self.affichage = formater(lire(&self.affichage) / 100.0);
    }

    /* ------------------------ Évaluation ------------------------ */

    pub fn appliquer_operateur(&mut self, op: Operateur) -> Option<Calcul> {
        let calcul = match self.operateur {
            _ if self.memoire.is_empty() => {
                self.memoire = self.affichage.clone();
                None
            }
            // Après "=" : la mémoire garde le résultat, l’affichage n’est pas repris.
            None => None,
            // Deux opérateurs d’affilée : aucun opérande saisi entre les deux,
            // on remplace seulement l’opérateur en attente.
            Some(_) if self.en_attente_operande => None,
            Some(en_attente) => Some(self.combiner(en_attente)),
        };

        self.en_attente_operande = true;
        self.operateur = Some(op);
        calcul
    }

    /// "=" : sans effet tant qu’aucun second opérande n’a été saisi.
    pub fn egal(&mut self) -> Option<Calcul> {
        let op = self.operateur.filter(|_| !self.en_attente_operande)?;

        let calcul = self.combiner(op);
        self.en_attente_operande = true;
        self.operateur = None;
        Some(calcul)
    }

    /// memoire op affichage -> memoire = affichage = résultat formaté.
    fn combiner(&mut self, op: Operateur) -> Calcul {
        let gauche = lire(&self.memoire);
        let droite = lire(&self.affichage);
        let resultat = op.combiner(gauche, droite);

        if !resultat.is_finite() {
            debug!(gauche, droite, ?op, "résultat sentinelle");
        }

        let texte = formater(resultat);
        self.memoire = texte.clone();
        self.affichage = texte;

        Calcul {
            gauche,
            operateur: op,
            droite,
            resultat,
        }
    }
}
