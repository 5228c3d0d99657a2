// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> AST
// Objectif:
// - Convertir une suite de Tok en RPN (postfix)
// - Puis reconstruire Expr (Number / Binary)
//
// Règles:
// - + - : précédence 1, * ÷ : précédence 2, tous associatifs à gauche
// - Moins unaire:
//    - si '-' arrive quand on attend une valeur, c'est un préfixe Neg (précédence 3)
//    - Neg ne dépile rien à l'entrée ; tout opérateur binaire le dépile
//    - en RPN "x neg", relu comme 0 - x : "2 * -3" => "2 3 neg *"

use super::expr::{Expr, Op};
use super::jetons::Tok;
use super::rationnel::Rationnel;

fn op_of(t: &Tok) -> Option<Op> {
    match t {
        Tok::Plus => Some(Op::Add),
        Tok::Minus => Some(Op::Sub),
        Tok::Star => Some(Op::Mul),
        Tok::Divide => Some(Op::Div),
        _ => None,
    }
}

fn precedence(t: &Tok) -> u8 {
    match t {
        Tok::Neg => 3,
        _ => op_of(t).map_or(0, Op::precedence),
    }
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Num(1), Plus, Num(2), Star, Num(3)]
///   rpn:    [Num(1), Num(2), Num(3), Star, Plus]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Tok>, String> {
    let mut out: Vec<Tok> = Vec::new();
    let mut ops: Vec<Tok> = Vec::new();

    // “valeur” = un atome ou une expression fermée.
    // Sert à détecter le moins unaire.
    let mut prev_was_value = false;

    for tok in tokens.iter().cloned() {
        match tok {
            Tok::Num(_) => {
                out.push(tok);
                prev_was_value = true;
            }

            Tok::LPar => {
                ops.push(tok);
                prev_was_value = false;
            }

            Tok::RPar => {
                // dépile jusqu’à '('
                let mut ouverte = false;
                while let Some(top) = ops.pop() {
                    if matches!(top, Tok::LPar) {
                        ouverte = true;
                        break;
                    }
                    out.push(top);
                }
                if !ouverte {
                    return Err("parenthèse fermante sans ouvrante".into());
                }
                prev_was_value = true;
            }

            // préfixe : rien à dépiler, il s'applique à la valeur qui suit
            Tok::Minus if !prev_was_value => ops.push(Tok::Neg),
            Tok::Neg => ops.push(tok),

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Divide => {
                // associativité gauche : on sort tout ce qui est au moins aussi prioritaire
                while let Some(top) = ops.last() {
                    if matches!(top, Tok::LPar) || precedence(top) < precedence(&tok) {
                        break;
                    }
                    if let Some(t) = ops.pop() {
                        out.push(t);
                    }
                }

                ops.push(tok);
                prev_was_value = false;
            }
        }
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if matches!(op, Tok::LPar) {
            return Err("parenthèses non fermées".into());
        }
        out.push(op);
    }

    Ok(out)
}

/// Construit une Expr à partir d’une RPN.
pub fn from_rpn(rpn: &[Tok]) -> Result<Expr, String> {
    let mut st: Vec<Expr> = Vec::new();

    for tok in rpn.iter().cloned() {
        match tok {
            Tok::Num(r) => st.push(Expr::number(r)),

            Tok::LPar | Tok::RPar => return Err("parenthèse inattendue en RPN".into()),

            Tok::Neg => {
                let x = st.pop().ok_or("moins unaire sans opérande")?;
                st.push(Expr::binary(Op::Sub, Expr::number(Rationnel::zero()), x));
            }

            _ => {
                let op = op_of(&tok).ok_or("jeton inattendu en RPN")?;
                let b = st.pop().ok_or("expression invalide")?;
                let a = st.pop().ok_or("expression invalide")?;
                st.push(Expr::binary(op, a, b));
            }
        }
    }

    if st.len() != 1 {
        return Err("expression invalide".into());
    }
    st.pop().ok_or_else(|| "expression vide".into())
}
