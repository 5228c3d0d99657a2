//! Tests fuzz safe : robustesse de la relecture + de la correction.
//!
//! But : marteler le chemin de correction sans brûler la machine.
//! - tirage déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - erreurs acceptées : illisible, division par zéro (jamais de panique)
//! - invariant clé : la correction ne s'arrête jamais sur un item

use std::time::{Duration, Instant};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::erreur::ErreurNoyau;
use super::eval::parse_and_eval;
use super::format::format_fraction;
use super::notation::grade;

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

fn is_erreur_attendue(e: &ErreurNoyau) -> bool {
    matches!(
        e,
        ErreurNoyau::UnparseableExpression(_) | ErreurNoyau::DivisionByZero
    )
}

/* ------------------------ Génération de textes (bornée) ------------------------ */

fn gen_litteral(rng: &mut ChaCha8Rng) -> String {
    let a = rng.gen_range(0..8);
    let b = rng.gen_range(0..6); // 0 inclus : fractions n/0 voulues
    match rng.gen_range(0..3) {
        0 => format!("{a}"),
        1 => format!("{a}/{b}"),
        _ => format!("{}'{a}/{b}", rng.gen_range(1..4)),
    }
}

fn gen_texte(rng: &mut ChaCha8Rng, depth: usize) -> String {
    if depth == 0 {
        return gen_litteral(rng);
    }
    let op = ["+", "-", "*", "÷"][rng.gen_range(0..4)];
    match rng.gen_range(0..6) {
        0 => gen_litteral(rng),
        1 => format!(
            "({} {op} {})",
            gen_texte(rng, depth - 1),
            gen_texte(rng, depth - 1)
        ),
        2 => format!(
            "{} {op} {}",
            gen_texte(rng, depth - 1),
            gen_texte(rng, depth - 1)
        ),
        // bruit : parenthèse orpheline, opérateur pendant, caractère étranger
        3 => format!("({}", gen_texte(rng, depth - 1)),
        4 => format!("{} {op}", gen_texte(rng, depth - 1)),
        _ => format!("{} ? {}", gen_litteral(rng), gen_litteral(rng)),
    }
}

/* ------------------------ Helper somme balancée anti pile ------------------------ */

fn somme_balancee(terme: &str, n: usize) -> String {
    let mut items: Vec<String> = (0..n).map(|_| terme.to_string()).collect();
    while items.len() > 1 {
        items = items
            .chunks(2)
            .map(|c| match c {
                [a, b] => format!("({a} + {b})"),
                [a] => a.clone(),
                _ => unreachable!(),
            })
            .collect();
    }
    items.pop().unwrap_or_else(|| "0".to_string())
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_relecture_sans_panique() {
    let t0 = Instant::now();
    let max = Duration::from_millis(2000);

    let mut rng = ChaCha8Rng::seed_from_u64(0xC0FFEE);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..300 {
        budget(t0, max);

        let texte = gen_texte(&mut rng, 3);
        match parse_and_eval(&texte) {
            Ok(v) => {
                // valeur relue : son format se relit à l'identique
                assert_eq!(parse_and_eval(&format_fraction(&v)).ok(), Some(v));
                seen_ok += 1;
            }
            Err(e) => {
                assert!(
                    is_erreur_attendue(&e),
                    "erreur non attendue: texte={texte:?} err={e}"
                );
                seen_err += 1;
            }
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 10, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 10, "trop peu d'erreurs: {seen_err}");
}

#[test]
fn fuzz_safe_correction_partitionne_tout() {
    let t0 = Instant::now();
    let max = Duration::from_millis(2000);

    let mut rng = ChaCha8Rng::seed_from_u64(0xBADC0DE);

    for _ in 0..40 {
        budget(t0, max);

        let nb_ex = rng.gen_range(0..12);
        let nb_rep = rng.gen_range(0..12);
        let exercices: Vec<String> = (0..nb_ex)
            .map(|_| format!("{} =", gen_texte(&mut rng, 2)))
            .collect();
        let reponses: Vec<String> = (0..nb_rep).map(|_| gen_litteral(&mut rng)).collect();

        let bilan = grade(&exercices, &reponses);

        // chaque position apparaît exactement une fois
        let mut toutes: Vec<usize> = bilan
            .correct
            .iter()
            .chain(bilan.wrong.iter())
            .copied()
            .collect();
        toutes.sort_unstable();
        let attendu: Vec<usize> = (1..=nb_ex.max(nb_rep)).collect();
        assert_eq!(toutes, attendu);
    }
}

#[test]
fn fuzz_safe_somme_balancee_anti_pile() {
    let t0 = Instant::now();
    let max = Duration::from_millis(2000);

    let expr = somme_balancee("1/2", 800);
    let v = parse_and_eval(&expr).unwrap_or_else(|e| panic!("err: {e}"));
    budget(t0, max);

    // 800*(1/2) = 400
    assert_eq!(format_fraction(&v), "400");
}
