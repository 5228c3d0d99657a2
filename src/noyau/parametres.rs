// src/noyau/parametres.rs
//
// Réglages de génération + garde-fous.

use super::erreur::ErreurNoyau;

/// Budget d'essais (assemblage d'un arbre ET accumulation d'un lot).
pub const MAX_ESSAIS: usize = 20_000;

/// Nombre maximal d'exercices par lot.
pub const N_MAX: usize = 10_000;

/// Nombre d'opérateurs autorisé par exercice.
pub const OPS_MIN: usize = 1;
pub const OPS_MAX: usize = 3;

/// Feuille : probabilité de tirer un entier (sinon fraction).
pub const PROBA_ENTIER: f64 = 0.5;

/// Fraction : probabilité de la promouvoir en nombre mixte.
pub const PROBA_MIXTE: f64 = 0.2;

#[derive(Clone, Debug, PartialEq)]
pub struct ParametresGeneration {
    pub proba_entier: f64,
    pub proba_mixte: f64,
    pub max_essais: usize,
}

impl Default for ParametresGeneration {
    fn default() -> Self {
        Self {
            proba_entier: PROBA_ENTIER,
            proba_mixte: PROBA_MIXTE,
            max_essais: MAX_ESSAIS,
        }
    }
}

impl ParametresGeneration {
    /// Bornes : probabilités dans [0, 1], budget non nul.
    pub fn verifier(&self) -> Result<(), ErreurNoyau> {
        for (nom, p) in [
            ("proba_entier", self.proba_entier),
            ("proba_mixte", self.proba_mixte),
        ] {
            if !(0.0..=1.0).contains(&p) {
                return Err(ErreurNoyau::InvalidRange(format!(
                    "{nom} = {p} hors de [0, 1]"
                )));
            }
        }
        if self.max_essais == 0 {
            return Err(ErreurNoyau::InvalidRange("max_essais = 0".into()));
        }
        Ok(())
    }
}
