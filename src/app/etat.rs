//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : posséder l’accumulateur (seul état logique) et l’historique, et
//! router les touches. Aucune règle de calcul ici : tout passe par
//! `Accumulateur::traiter`.

use crate::noyau::{Accumulateur, Historique, Touche};
use crate::reglages::Reglages;

#[derive(Clone, Debug)]
pub struct AppCalc {
    pub accumulateur: Accumulateur,
    pub historique: Historique,
    pub titre: String,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self::new(&Reglages::default())
    }
}

impl AppCalc {
    pub fn new(reglages: &Reglages) -> Self {
        Self {
            accumulateur: Accumulateur::default(),
            historique: Historique::new(reglages.capacite_historique),
            titre: reglages.titre.clone(),
        }
    }

    /// Touche du pavé ou du clavier.
    pub fn appuyer(&mut self, touche: Touche) {
        if let Some(calcul) = self.accumulateur.traiter(touche) {
            self.historique.ajouter(calcul);
        }
    }

    /// Bouton du panneau historique (AC ne l’efface pas).
    pub fn vider_historique(&mut self) {
        self.historique.vider();
    }
}
