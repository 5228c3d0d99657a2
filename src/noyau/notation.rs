// src/noyau/notation.rs
//
// Correction d'un lot : énoncés + réponses proposées -> positions justes / fausses.
// - positions à partir de 1
// - énoncé illisible => faux (jamais d'arrêt du lot)
// - réponses en trop / énoncés sans réponse => faux

use std::fmt;

use log::debug;

use super::eval::parse_and_eval;
use super::format::format_fraction;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Bilan {
    pub correct: Vec<usize>,
    pub wrong: Vec<usize>,
}

/// Réponse attendue pour un énoncé, ou None s'il est illisible.
pub fn reponse_attendue(enonce: &str) -> Option<String> {
    match parse_and_eval(enonce) {
        Ok(v) => Some(format_fraction(&v)),
        Err(e) => {
            debug!("énoncé illisible {enonce:?}: {e}");
            None
        }
    }
}

pub fn grade<E: AsRef<str>, A: AsRef<str>>(exercices: &[E], reponses: &[A]) -> Bilan {
    let mut bilan = Bilan::default();
    let m = exercices.len().min(reponses.len());

    for (i, (ex, rep)) in exercices.iter().zip(reponses).enumerate() {
        let juste = reponse_attendue(ex.as_ref()).is_some_and(|att| att == rep.as_ref().trim());
        if juste {
            bilan.correct.push(i + 1);
        } else {
            bilan.wrong.push(i + 1);
        }
    }

    // longueurs différentes : tout ce qui dépasse est faux
    let total = exercices.len().max(reponses.len());
    bilan.wrong.extend(m + 1..=total);

    bilan
}

fn liste(positions: &[usize]) -> String {
    positions
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Texte du fichier Grade.txt.
impl fmt::Display for Bilan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Correct: {} ({})", self.correct.len(), liste(&self.correct))?;
        writeln!(f)?;
        writeln!(f, "Wrong: {} ({})", self.wrong.len(), liste(&self.wrong))
    }
}
