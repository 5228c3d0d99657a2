// src/noyau/canon.rs
//
// Clef canonique (dédoublonnage uniquement) :
// - + et * : aplatissement des descendants de même opérateur, tri des clefs
//   des opérandes, jointure par l'opérateur, le tout entre parenthèses
// - - et ÷ : "(gauche op droite)" sans réordonner
// - feuille : texte de la fraction
//
// Deux arbres qui ne diffèrent que par l'ordre/le groupement des opérandes
// de + ou de * ont la même clef.

use crate::noyau::expr::{Expr, Op};
use crate::noyau::format::format_fraction;

pub fn canon_key(e: &Expr) -> String {
    match e {
        Expr::Number(r) => format_fraction(r),
        Expr::Binary { op, .. } if op.est_commutatif() => {
            let mut termes: Vec<&Expr> = Vec::new();
            aplatir(*op, e, &mut termes);

            let mut clefs: Vec<String> = termes.into_iter().map(canon_key).collect();
            clefs.sort();
            format!("({})", clefs.join(op.symbole()))
        }
        Expr::Binary { op, left, right } => {
            format!("({}{}{})", canon_key(left), op.symbole(), canon_key(right))
        }
    }
}

/// Collecte les opérandes d'une chaîne d'opérateurs `op` (ex: a+(b+c)+d -> [a,b,c,d]).
fn aplatir<'a>(op: Op, e: &'a Expr, sortie: &mut Vec<&'a Expr>) {
    match e {
        Expr::Binary {
            op: o, left, right, ..
        } if *o == op => {
            aplatir(op, left, sortie);
            aplatir(op, right, sortie);
        }
        _ => sortie.push(e),
    }
}
