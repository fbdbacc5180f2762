//! Noyau : accumulateur séquentiel
//!
//! Organisation interne :
//! - accumulateur.rs : état (affichage, mémoire, opérateur, frontière) + transitions
//! - operateur.rs    : + - * / et combiner (sentinelles IEEE propagées)
//! - format.rs       : nombre <-> texte d’affichage
//! - touche.rs       : actions du pavé + disposition
//! - historique.rs   : calculs effectués (borné)

pub mod accumulateur;
pub mod format;
pub mod historique;
pub mod operateur;
pub mod touche;

#[cfg(test)]
mod tests_scenarios;


// API publique minimale
pub use accumulateur::Accumulateur;
pub use historique::{Calcul, Historique};
pub use operateur::Operateur;
pub use touche::{Touche, PAVE};
