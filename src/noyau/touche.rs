// src/noyau/touche.rs

use super::operateur::Operateur;

/// Action discrète envoyée par l’hôte (clic sur le pavé ou clavier).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Touche {
    /// 0..=9
    Chiffre(u8),
    Virgule,
    Operateur(Operateur),
    Egal,
    /// AC
    Effacer,
    RetourArriere,
    Pourcentage,
}

impl Touche {
    pub fn libelle(self) -> String {
        match self {
            Touche::Chiffre(d) => d.to_string(),
            Touche::Virgule => ".".to_string(),
            Touche::Operateur(op) => op.glyphe().to_string(),
            Touche::Egal => "=".to_string(),
            Touche::Effacer => "AC".to_string(),
            Touche::RetourArriere => "DEL".to_string(),
            Touche::Pourcentage => "%".to_string(),
        }
    }

    /// Touche correspondant à un caractère tapé au clavier.
    pub fn depuis_caractere(c: char) -> Option<Self> {
        if let Some(d) = c.to_digit(10) {
            return Some(Touche::Chiffre(d as u8));
        }
        match c {
            '.' | ',' => Some(Touche::Virgule),
            '=' => Some(Touche::Egal),
            '%' => Some(Touche::Pourcentage),
            _ => Operateur::depuis_symbole(c).map(Touche::Operateur),
        }
    }
}

/// Pavé : 5 rangées, 4 colonnes (la dernière rangée n’en a que 3, "0" est large).
pub const PAVE: [&[Touche]; 5] = [
    &[
        Touche::Effacer,
        Touche::RetourArriere,
        Touche::Pourcentage,
        Touche::Operateur(Operateur::Division),
    ],
    &[
        Touche::Chiffre(7),
        Touche::Chiffre(8),
        Touche::Chiffre(9),
        Touche::Operateur(Operateur::Multiplication),
    ],
    &[
        Touche::Chiffre(4),
        Touche::Chiffre(5),
        Touche::Chiffre(6),
        Touche::Operateur(Operateur::Soustraction),
    ],
    &[
        Touche::Chiffre(1),
        Touche::Chiffre(2),
        Touche::Chiffre(3),
        Touche::Operateur(Operateur::Addition),
    ],
    &[Touche::Chiffre(0), Touche::Virgule, Touche::Egal],
];
