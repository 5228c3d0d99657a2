// src/noyau/jetons.rs

use num_bigint::BigInt;
use num_traits::Zero;

use super::rationnel::Rationnel;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Tok {
    Num(Rationnel),

    Plus,
    Minus,
    Star,
    Divide, // ÷ (ou '/' isolé)
    Neg,    // moins unaire (posé par to_rpn, jamais par tokenize)

    LPar,
    RPar,
}

fn lire_chiffres(chars: &[char], i: &mut usize) -> Result<BigInt, String> {
    let start = *i;
    while *i < chars.len() && chars[*i].is_ascii_digit() {
        *i += 1;
    }
    let txt: String = chars[start..*i].iter().collect();
    BigInt::parse_bytes(txt.as_bytes(), 10).ok_or_else(|| "nombre invalide".to_string())
}

fn suivi_d_un_chiffre(chars: &[char], i: usize) -> bool {
    i < chars.len() && chars[i].is_ascii_digit()
}

/// Tokenize un énoncé rendu.
/// Supporte:
/// - entiers (ex: 12)
/// - fractions littérales sans espaces (ex: 3/4) -> Num(3/4)
/// - nombres mixtes (ex: 2'3/8) -> ( 2 + 3/8 )
/// - opérateurs + - * ÷ (et '/' quand il n'appartient pas à un littéral)
/// - parenthèses ( )
/// Les espaces sont ignorés.
pub fn tokenize(s: &str) -> Result<Vec<Tok>, String> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        let symbole = match c {
            '(' => Some(Tok::LPar),
            ')' => Some(Tok::RPar),
            '+' => Some(Tok::Plus),
            '-' => Some(Tok::Minus),
            '*' => Some(Tok::Star),
            '÷' | '/' => Some(Tok::Divide),
            _ => None,
        };
        if let Some(t) = symbole {
            out.push(t);
            i += 1;
            continue;
        }

        if c.is_ascii_digit() {
            let n = lire_chiffres(&chars, &mut i)?;

            // nombre mixte : w'n/d (la partie n/d est obligatoire)
            if i < chars.len() && chars[i] == '\'' {
                i += 1;
                if !suivi_d_un_chiffre(&chars, i) {
                    return Err("nombre mixte incomplet".into());
                }
                let num = lire_chiffres(&chars, &mut i)?;
                if !(i < chars.len() && chars[i] == '/' && suivi_d_un_chiffre(&chars, i + 1)) {
                    return Err("nombre mixte incomplet".into());
                }
                i += 1;
                let den = lire_chiffres(&chars, &mut i)?;
                let frac = fraction(num, den)?;

                // réécrit en ( w + n/d )
                out.push(Tok::LPar);
                out.push(Tok::Num(Rationnel::entier(n)));
                out.push(Tok::Plus);
                out.push(Tok::Num(frac));
                out.push(Tok::RPar);
                continue;
            }

            // fraction immédiate: 12/34 (pas d’espaces)
            // si pas un chiffre après '/', c’est une division (le '/' sera relu)
            if i < chars.len() && chars[i] == '/' && suivi_d_un_chiffre(&chars, i + 1) {
                i += 1;
                let den = lire_chiffres(&chars, &mut i)?;
                out.push(Tok::Num(fraction(n, den)?));
                continue;
            }

            out.push(Tok::Num(Rationnel::entier(n)));
            continue;
        }

        return Err(format!("caractère inattendu: '{c}'"));
    }

    Ok(out)
}

fn fraction(n: BigInt, d: BigInt) -> Result<Rationnel, String> {
    if d.is_zero() {
        return Err("division par zéro dans une fraction".into());
    }
    Rationnel::new(n, d).map_err(|e| e.to_string())
}

/// Format utilitaire (journal) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::new();
    for t in tokens {
        let s = match t {
            Tok::Num(r) => r.to_string(),
            Tok::Plus => "+".to_string(),
            Tok::Minus => "-".to_string(),
            Tok::Star => "*".to_string(),
            Tok::Divide => "÷".to_string(),
            Tok::Neg => "neg".to_string(),
            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
