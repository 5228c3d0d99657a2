//! Exercices Q-pur — générateur et correcteur d'exercices d'arithmétique exacte
//!
//! - énoncés sur entiers naturels, fractions et nombres mixtes ("2'3/8")
//! - jamais de résultat intermédiaire négatif, jamais de division "qui tombe juste"
//! - pas de doublon modulo commutation/association de + et *
//! - correction par relecture exacte de l'énoncé

pub mod noyau;

pub use noyau::{
    format_fraction, generate, grade, parse_and_eval, parse_mixed_fraction, Bilan, ErreurNoyau,
    Exercice, Expr, Generateur, Op, ParametresGeneration, Rationnel, Violation,
};
