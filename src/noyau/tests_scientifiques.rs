//! Tests scientifiques (campagne) : invariants du générateur + lois de la clef canonique.
//!
//! But : vérifier ce que promet chaque exercice accepté.
//! - contrainte vérifiée à CHAQUE noeud interne (parcours récursif indépendant)
//! - rendu -> relecture -> même valeur
//! - format -> lecture -> même rationnel
//! - clef canonique stable par commutation/association de + et *
//!
//! Les lots sont tirés avec une graine fixe (déterministes).

use std::collections::HashSet;
use std::time::{Duration, Instant};

use proptest::prelude::*;

use super::eval::{parse_and_eval, parse_expression};
use super::expr::{Expr, Op};
use super::format::{format_fraction, parse_mixed_fraction};
use super::generateur::Generateur;
use super::rationnel::Rationnel;

/// Budget global anti-gel.
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/// Contrôle récursif, écrit indépendamment de Expr::verifier().
fn noeud_conforme(e: &Expr) -> Rationnel {
    match e {
        Expr::Number(r) => r.clone(),
        Expr::Binary { op, left, right } => {
            let a = noeud_conforme(left);
            let b = noeud_conforme(right);
            match op {
                Op::Add => &a + &b,
                Op::Mul => &a * &b,
                Op::Sub => {
                    assert!(a >= b, "soustraction négative dans {e}");
                    &a - &b
                }
                Op::Div => {
                    assert!(!b.is_zero(), "diviseur nul dans {e}");
                    let q = a.checked_div(&b).unwrap();
                    assert!(!q.is_integer(), "quotient entier dans {e}");
                    q
                }
            }
        }
    }
}

fn arbres(graine: u64, combien: usize, range: u64) -> Vec<Expr> {
    let mut g = Generateur::avec_graine(graine);
    let mut out = Vec::new();
    for i in 0..combien {
        if let Some(e) = g.gen_expr_with_ops(1 + i % 3, range) {
            out.push(e);
        }
    }
    out
}

fn n(a: i64, b: i64) -> Expr {
    Expr::number(Rationnel::new(a, b).unwrap())
}

/* ------------------------ Invariants du générateur ------------------------ */

#[test]
fn sci_arbres_acceptes_conformes_partout() {
    let t0 = Instant::now();
    let max = Duration::from_secs(5);

    for graine in 0..10 {
        budget(t0, max);
        for e in arbres(graine, 60, 12) {
            let v = noeud_conforme(&e);
            assert_eq!(e.eval().unwrap(), v);
            assert!((1..=3).contains(&e.operator_count()));
            assert!(!v.is_negative());
        }
    }
}

#[test]
fn sci_rendu_puis_relecture() {
    for range in [2u64, 5, 10, 30] {
        for e in arbres(range, 150, range) {
            let texte = e.render();
            assert_eq!(
                parse_and_eval(&texte).unwrap(),
                e.eval().unwrap(),
                "texte={texte:?}"
            );
            // sans nombre mixte (relu comme w + n/d), relecture = même arbre
            if !texte.contains('\'') {
                assert_eq!(parse_expression(&texte).unwrap().render(), texte);
            }
        }
    }
}

#[test]
fn sci_reponses_relues() {
    let lot = Generateur::avec_graine(11).generate_exercises(200, 10).unwrap();
    for ex in &lot {
        let attendu = parse_and_eval(&ex.enonce).unwrap();
        assert_eq!(format_fraction(&attendu), ex.reponse, "{}", ex.enonce);
        assert_eq!(parse_mixed_fraction(&ex.reponse).unwrap(), attendu);
    }
}

#[test]
fn sci_lot_sans_doublon_canonique() {
    let lot = Generateur::avec_graine(3).generate_exercises(300, 10).unwrap();
    let mut clefs = HashSet::new();
    for ex in &lot {
        if !ex.enonce.contains('\'') {
            let relu = parse_expression(&ex.enonce).unwrap();
            assert_eq!(relu.canonical(), ex.canonique);
        }
        assert!(clefs.insert(ex.canonique.clone()), "doublon: {}", ex.enonce);
    }
}

#[test]
fn sci_grand_lot() {
    let t0 = Instant::now();
    let lot = Generateur::avec_graine(2).generate_exercises(1000, 20).unwrap();
    budget(t0, Duration::from_secs(20));
    assert_eq!(lot.len(), 1000);
}

/* ------------------------ Lois de la clef canonique ------------------------ */

fn arb_feuille() -> impl Strategy<Value = Expr> {
    (0i64..20, 1i64..8).prop_map(|(a, b)| n(a, b))
}

fn arb_expr() -> impl Strategy<Value = Expr> {
    arb_feuille().prop_recursive(3, 8, 2, |inner| {
        (
            prop::sample::select(Op::TOUS.to_vec()),
            inner.clone(),
            inner,
        )
            .prop_map(|(op, a, b)| Expr::binary(op, a, b))
    })
}

proptest! {
    #[test]
    fn canon_commutatif(a in arb_expr(), b in arb_expr()) {
        for op in [Op::Add, Op::Mul] {
            let ab = Expr::binary(op, a.clone(), b.clone());
            let ba = Expr::binary(op, b.clone(), a.clone());
            prop_assert_eq!(ab.canonical(), ba.canonical());
        }
    }

    #[test]
    fn canon_associatif(a in arb_expr(), b in arb_expr(), c in arb_expr()) {
        for op in [Op::Add, Op::Mul] {
            let g = Expr::binary(op, Expr::binary(op, a.clone(), b.clone()), c.clone());
            let d = Expr::binary(op, a.clone(), Expr::binary(op, b.clone(), c.clone()));
            prop_assert_eq!(g.canonical(), d.canonical());
        }
    }

    #[test]
    fn canon_ordre_garde_pour_moins_et_division(a in arb_feuille(), b in arb_feuille()) {
        prop_assume!(a != b);
        for op in [Op::Sub, Op::Div] {
            let ab = Expr::binary(op, a.clone(), b.clone());
            let ba = Expr::binary(op, b.clone(), a.clone());
            prop_assert_ne!(ab.canonical(), ba.canonical());
        }
    }

    #[test]
    fn canon_chaine_melangee(
        (termes, melange) in prop::collection::vec(arb_expr(), 3..6)
            .prop_flat_map(|v| (Just(v.clone()), Just(v).prop_shuffle()))
    ) {
        for op in [Op::Add, Op::Mul] {
            let gauche = |v: &[Expr]| {
                v[1..].iter().cloned().fold(v[0].clone(), |acc, x| Expr::binary(op, acc, x))
            };
            let droite = |v: &[Expr]| {
                v[..v.len() - 1]
                    .iter()
                    .rev()
                    .cloned()
                    .fold(v[v.len() - 1].clone(), |acc, x| Expr::binary(op, x, acc))
            };
            let clef = gauche(&termes[..]).canonical();
            prop_assert_eq!(&gauche(&melange[..]).canonical(), &clef);
            prop_assert_eq!(&droite(&melange[..]).canonical(), &clef);
        }
    }
}
