// src/noyau/format.rs
//
// Affichage élève d'un rationnel exact :
// - entier        : "5"
// - fraction      : "2/3"      (|n| < d)
// - nombre mixte  : "1'1/2"    (|n| > d)
// Le signe est posé une seule fois, devant le jeton entier.
//
// parse_mixed_fraction() est l'inverse exact pour UN littéral.

use num_bigint::BigInt;
use num_traits::Signed;

use super::erreur::ErreurNoyau;
use super::rationnel::Rationnel;

/// Rationnel -> texte ("N", "n/d" ou "w'n/d").
pub fn format_fraction(r: &Rationnel) -> String {
    if r.is_integer() {
        return format!("{}", r.numer());
    }

    let signe = if r.is_negative() { "-" } else { "" };
    let n = r.numer().abs();
    let d = r.denom();

    if &n > d {
        let entier = &n / d;
        let reste = &n % d;
        format!("{signe}{entier}'{reste}/{d}")
    } else {
        format!("{signe}{n}/{d}")
    }
}

fn lire_naturel(s: &str) -> Result<BigInt, ErreurNoyau> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ErreurNoyau::UnparseableExpression(format!(
            "nombre invalide: {s:?}"
        )));
    }
    BigInt::parse_bytes(s.as_bytes(), 10)
        .ok_or_else(|| ErreurNoyau::UnparseableExpression(format!("nombre invalide: {s:?}")))
}

/// Texte d'un littéral ("5", "2/3", "3'2/5", signe "-" optionnel) -> rationnel.
pub fn parse_mixed_fraction(s: &str) -> Result<Rationnel, ErreurNoyau> {
    let s = s.trim();
    let (negatif, corps) = match s.strip_prefix('-') {
        Some(reste) => (true, reste),
        None => (false, s),
    };

    let (entier, fraction) = match corps.split_once('\'') {
        Some((w, f)) => (Some(lire_naturel(w)?), f),
        None => (None, corps),
    };

    let valeur = match fraction.split_once('/') {
        Some((n, d)) => {
            let frac = Rationnel::new(lire_naturel(n)?, lire_naturel(d)?)?;
            match entier {
                Some(w) => &Rationnel::entier(w) + &frac,
                None => frac,
            }
        }
        None => {
            // "3'" ou "3'4" : un mixte exige sa partie n/d
            if entier.is_some() {
                return Err(ErreurNoyau::UnparseableExpression(format!(
                    "nombre mixte incomplet: {s:?}"
                )));
            }
            Rationnel::entier(lire_naturel(fraction)?)
        }
    };

    if negatif {
        Ok(&Rationnel::zero() - &valeur)
    } else {
        Ok(valeur)
    }
}
