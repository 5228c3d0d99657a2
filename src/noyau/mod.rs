//! Noyau exact des exercices
//!
//! Organisation interne :
//! - rationnel.rs  : rationnel exact (BigRational, division checkée)
//! - erreur.rs     : erreurs du noyau
//! - parametres.rs : réglages + garde-fous (budgets, probabilités)
//! - expr.rs       : arbre Number/Binary + eval/render/validate
//! - canon.rs      : clef canonique (dédoublonnage)
//! - format.rs     : affichage "N", "n/d", "w'n/d" (+ lecture inverse)
//! - essais.rs     : budget d'essais borné
//! - generateur.rs : feuilles + assemblage contraint
//! - lot.rs        : lot sans doublon
//! - jetons.rs     : tokenisation d'un énoncé
//! - rpn.rs        : shunting-yard + construction Expr
//! - eval.rs       : relecture complète (texte -> valeur)
//! - notation.rs   : correction d'un lot

pub mod canon;
pub mod erreur;
pub mod essais;
pub mod eval;
pub mod expr;
pub mod format;
pub mod generateur;
pub mod jetons;
pub mod lot;
pub mod notation;
pub mod parametres;
pub mod rationnel;
pub mod rpn;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::{ErreurNoyau, Violation};
pub use eval::parse_and_eval;
pub use expr::{Expr, Op};
pub use format::{format_fraction, parse_mixed_fraction};
pub use generateur::Generateur;
pub use lot::{generate, Exercice};
pub use notation::{grade, Bilan};
pub use parametres::ParametresGeneration;
pub use rationnel::Rationnel;
