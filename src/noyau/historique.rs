// src/noyau/historique.rs
//
// Historique borné des calculs effectués (FIFO).
// Rempli par l’app à partir de ce que renvoie Accumulateur::traiter.

use std::collections::VecDeque;

use super::format::formater;
use super::operateur::Operateur;

/// Un calcul effectivement combiné : gauche op droite = resultat.
#[derive(Clone, Debug, PartialEq)]
pub struct Calcul {
    pub gauche: f64,
    pub operateur: Operateur,
    pub droite: f64,
    pub resultat: f64,
}

impl Calcul {
    /// Ligne lisible, ex. "7 + 3 = 10".
    pub fn ligne(&self) -> String {
        format!(
            "{} {} {} = {}",
            formater(self.gauche),
            self.operateur.glyphe(),
            formater(self.droite),
            formater(self.resultat)
        )
    }
}

#[derive(Clone, Debug, Default)]
pub struct Historique {
    calculs: VecDeque<Calcul>,
    capacite: usize,
}

impl Historique {
    /// capacite == 0 : historique désactivé.
    pub fn new(capacite: usize) -> Self {
        Self {
            calculs: VecDeque::with_capacity(capacite),
            capacite,
        }
    }

    pub fn ajouter(&mut self, calcul: Calcul) {
        if self.capacite == 0 {
            return;
        }
        while self.calculs.len() >= self.capacite {
            self.calculs.pop_front();
        }
        self.calculs.push_back(calcul);
    }

    /// Du plus récent au plus ancien.
    pub fn recents(&self) -> impl Iterator<Item = &Calcul> {
        self.calculs.iter().rev()
    }

    pub fn len(&self) -> usize {
        self.calculs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.calculs.is_empty()
    }

    pub fn vider(&mut self) {
        self.calculs.clear();
    }
}
