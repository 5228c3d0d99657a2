// src/noyau/erreur.rs
//
// Erreurs du noyau.
// - InvalidRange / GenerationExhausted : remontent à l'appelant
// - DivisionByZero / NonTerminatingConstraintViolation : internes à l'assemblage
//   (rattrapées en "on réessaie"), sauf pour un arbre construit à la main
// - UnparseableExpression : chemin de correction seulement (=> item faux)

use thiserror::Error;

/// Contrainte locale violée par un noeud.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("soustraction négative")]
    Negatif,
    #[error("diviseur nul")]
    DiviseurNul,
    #[error("quotient entier")]
    QuotientEntier,
    #[error("{0} opérateur(s), attendu entre 1 et 3")]
    NombreOperateurs(usize),
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ErreurNoyau {
    #[error("paramètre hors domaine: {0}")]
    InvalidRange(String),

    #[error(
        "seulement {produits} exercice(s) sur {demandes} après {essais} essais \
         (augmenter la plage ou réduire le nombre)"
    )]
    GenerationExhausted {
        produits: usize,
        demandes: usize,
        essais: usize,
    },

    #[error("division par zéro")]
    DivisionByZero,

    #[error("contrainte violée: {0}")]
    NonTerminatingConstraintViolation(Violation),

    #[error("expression illisible: {0}")]
    UnparseableExpression(String),
}
