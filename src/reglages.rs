//! src/reglages.rs
//!
//! Réglages de l’application (fenêtre, journal, historique).
//!
//! Ordre de chargement :
//! 1. valeurs par défaut
//! 2. fichier TOML (CALCULATRICE_REGLAGES, sinon ./calculatrice.toml s’il existe)
//! 3. validation
//!
//! Aucun réglage ne touche au comportement de l’accumulateur.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Variable d’environnement : chemin du fichier de réglages.
pub const VAR_CHEMIN: &str = "CALCULATRICE_REGLAGES";

const FICHIER_DEFAUT: &str = "calculatrice.toml";

/// Garde-fou : l’historique reste petit.
const HISTORIQUE_MAX: usize = 500;

#[derive(Debug, Error)]
pub enum ErreurReglages {
    #[error("lecture impossible de {chemin:?}: {source}")]
    Lecture {
        chemin: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("réglages TOML invalides: {0}")]
    Syntaxe(#[from] toml::de::Error),

    #[error("réglage invalide: {0}")]
    Invalide(String),
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Reglages {
    pub titre: String,
    pub largeur: f32,
    pub hauteur: f32,
    pub largeur_min: f32,
    pub hauteur_min: f32,
    /// Directive tracing par défaut (RUST_LOG reste prioritaire).
    pub journal: String,
    pub capacite_historique: usize,
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            titre: "Math Wizard Pro".to_string(),
            largeur: 380.0,
            hauteur: 620.0,
            largeur_min: 300.0,
            hauteur_min: 480.0,
            journal: "warn,calculatrice_accumulateur=info".to_string(),
            capacite_historique: 20,
        }
    }
}

impl Reglages {
    /// Charge depuis `chemin`, sinon depuis l’emplacement par défaut.
    ///
    /// Pas de fichier => `Ok(None)` (ce n’est pas une erreur, l’appelant
    /// garde les valeurs par défaut).
    pub fn charger(chemin: Option<PathBuf>) -> Result<Option<Self>, ErreurReglages> {
        let chemin = chemin.unwrap_or_else(Self::chemin_defaut);
        if !chemin.exists() {
            return Ok(None);
        }
        Self::lire_fichier(&chemin).map(Some)
    }

    pub fn chemin_defaut() -> PathBuf {
        std::env::var_os(VAR_CHEMIN)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(FICHIER_DEFAUT))
    }

    fn lire_fichier(chemin: &Path) -> Result<Self, ErreurReglages> {
        let contenu = std::fs::read_to_string(chemin).map_err(|source| ErreurReglages::Lecture {
            chemin: chemin.to_path_buf(),
            source,
        })?;
        Self::depuis_toml(&contenu)
    }

    pub fn depuis_toml(contenu: &str) -> Result<Self, ErreurReglages> {
        let mut r: Self = toml::from_str(contenu)?;
        r.valider()?;
        Ok(r)
    }

    /// Géométrie cohérente ; l’historique est seulement borné.
    fn valider(&mut self) -> Result<(), ErreurReglages> {
        for (nom, v) in [
            ("largeur", self.largeur),
            ("hauteur", self.hauteur),
            ("largeur_min", self.largeur_min),
            ("hauteur_min", self.hauteur_min),
        ] {
            if !(v.is_finite() && v > 0.0) {
                return Err(ErreurReglages::Invalide(format!(
                    "{nom} doit être > 0 (reçu {v})"
                )));
            }
        }

        if self.largeur_min > self.largeur || self.hauteur_min > self.hauteur {
            return Err(ErreurReglages::Invalide(
                "taille minimale plus grande que la taille initiale".into(),
            ));
        }

        self.capacite_historique = self.capacite_historique.min(HISTORIQUE_MAX);
        Ok(())
    }
}
