// src/noyau/operateur.rs

use num_traits::Float;

/// Opérateur binaire en attente (un seul à la fois).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Addition,
    Soustraction,
    Multiplication,
    Division,
}

impl Operateur {
    pub const TOUS: [Operateur; 4] = [
        Operateur::Addition,
        Operateur::Soustraction,
        Operateur::Multiplication,
        Operateur::Division,
    ];

    /// Codage symbolique ASCII : + - * /
    pub fn symbole(self) -> char {
        match self {
            Operateur::Addition => '+',
            Operateur::Soustraction => '-',
            Operateur::Multiplication => '*',
            Operateur::Division => '/',
        }
    }

    /// Glyphe affiché sur le pavé (÷ et × pour les humains).
    pub fn glyphe(self) -> char {
        match self {
            Operateur::Multiplication => '×',
            Operateur::Division => '÷',
            autre => autre.symbole(),
        }
    }

    /// Accepte le symbole ASCII ou le glyphe du pavé.
    pub fn depuis_symbole(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operateur::Addition),
            '-' | '−' => Some(Operateur::Soustraction),
            '*' | '×' => Some(Operateur::Multiplication),
            '/' | '÷' => Some(Operateur::Division),
            _ => None,
        }
    }

    /// a op b, sans jamais lever d’erreur.
    ///
    /// Division par zéro : la valeur sentinelle IEEE (±∞ ou NaN) est propagée
    /// telle quelle, c’est au formatage de la rendre lisible.
    pub fn combiner<F: Float>(self, a: F, b: F) -> F {
        match self {
            Operateur::Addition => a + b,
            Operateur::Soustraction => a - b,
            Operateur::Multiplication => a * b,
            Operateur::Division => a / b,
        }
    }
}
