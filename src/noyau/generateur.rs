// src/noyau/generateur.rs
//
// Générateur contraint.
// - gen_number        : feuille (entier, fraction, parfois nombre mixte)
// - gen_expr_with_ops : k+1 feuilles dans une arène, fusion deux à deux
//
// Contraintes locales (par combinaison) :
// - '-' : gauche >= droite (sinon on échange, sinon abandon)
// - '÷' : diviseur non nul ET quotient non entier (un échange permis, sinon abandon)
// Les abandons ne retirent rien de l'arène : on retente une autre paire.
// Vérification finale sur l'arbre entier (filet de sécurité).

use std::cmp::max;

use log::{debug, trace};
use num_bigint::BigInt;
use num_rational::BigRational;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::erreur::ErreurNoyau;
use super::essais::Essais;
use super::expr::{Expr, Op};
use super::parametres::{ParametresGeneration, OPS_MAX, OPS_MIN};
use super::rationnel::Rationnel;

/// Générateur d'exercices : possède son tirage et ses réglages (rien de partagé).
#[derive(Clone, Debug)]
pub struct Generateur<R: Rng> {
    pub(crate) rng: R,
    pub(crate) params: ParametresGeneration,
}

impl Generateur<ChaCha8Rng> {
    /// Tirage reproductible (tests, lots rejouables).
    pub fn avec_graine(graine: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(graine),
            params: ParametresGeneration::default(),
        }
    }

    pub fn depuis_entropie() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
            params: ParametresGeneration::default(),
        }
    }
}

impl<R: Rng> Generateur<R> {
    /// Réglages vérifiés ici : gen_bool ne voit jamais de probabilité hors [0, 1].
    pub fn new(rng: R, params: ParametresGeneration) -> Result<Self, ErreurNoyau> {
        params.verifier()?;
        Ok(Self { rng, params })
    }

    /// Feuille aléatoire. `range` borne les entiers (exclu) et les dénominateurs.
    pub fn gen_number(&mut self, range: u64) -> Rationnel {
        if range <= 1 {
            return Rationnel::zero();
        }

        if self.rng.gen_bool(self.params.proba_entier) {
            return Rationnel::entier(self.rng.gen_range(0..range));
        }

        let d = self.rng.gen_range(2..=max(2, range - 1));
        let n = self.rng.gen_range(1..d);

        let numer = if self.rng.gen_bool(self.params.proba_mixte) {
            let entier = self.rng.gen_range(0..=(range - 1) / d);
            BigInt::from(entier) * BigInt::from(d) + BigInt::from(n)
        } else {
            BigInt::from(n)
        };

        // d >= 2 : jamais de dénominateur nul
        Rationnel::from(BigRational::new(numer, BigInt::from(d)))
    }

    /// Arbre à exactement `k` opérateurs, ou None (budget épuisé / arbre final invalide).
    pub fn gen_expr_with_ops(&mut self, k: usize, range: u64) -> Option<Expr> {
        if !(OPS_MIN..=OPS_MAX).contains(&k) {
            debug!("gen_expr_with_ops: k = {k} hors de [{OPS_MIN}, {OPS_MAX}]");
            return None;
        }

        let mut noeuds: Vec<Noeud> = (0..=k)
            .map(|_| Noeud::feuille(self.gen_number(range)))
            .collect();

        let mut essais = Essais::new(self.params.max_essais);
        let rng = &mut self.rng;

        while noeuds.len() > 1 {
            if essais.tenter(|| combiner(&mut *rng, &mut noeuds)).is_none() {
                debug!(
                    "assemblage abandonné après {} essais ({} noeuds restants)",
                    essais.faits(),
                    noeuds.len()
                );
                return None;
            }
        }

        let racine = noeuds.pop()?.expr;
        match racine.verifier() {
            Ok(_) => Some(racine),
            Err(e) => {
                debug!("arbre rejeté à la vérification finale: {e} ({racine})");
                None
            }
        }
    }
}

/// Case de l'arène : l'arbre et sa valeur (calculée une fois).
struct Noeud {
    expr: Expr,
    valeur: Rationnel,
}

impl Noeud {
    fn feuille(valeur: Rationnel) -> Self {
        Self {
            expr: Expr::number(valeur.clone()),
            valeur,
        }
    }
}

/// Ordre accepté pour (a op b) : Some(false) tel quel, Some(true) échangé, None abandon.
fn ordre_local(op: Op, a: &Rationnel, b: &Rationnel) -> Option<bool> {
    match op {
        Op::Add | Op::Mul => Some(false),
        // ordre total : l'un des deux sens passe toujours
        Op::Sub => Some(a < b),
        Op::Div => {
            let mut echange = false;
            if b.is_zero() {
                if a.is_zero() {
                    return None;
                }
                echange = true;
            }

            let quotient_entier = |echange: bool| {
                let (x, y) = if echange { (b, a) } else { (a, b) };
                match x.checked_div(y) {
                    Ok(q) => Some(q.is_integer()),
                    Err(_) => None,
                }
            };

            match quotient_entier(echange)? {
                false => Some(echange),
                // un seul échange de plus
                true => match quotient_entier(!echange)? {
                    false => Some(!echange),
                    true => None,
                },
            }
        }
    }
}

/// Un essai : tire deux cases distinctes + un opérateur, fusionne si les contraintes le permettent.
fn combiner<R: Rng + ?Sized>(rng: &mut R, noeuds: &mut Vec<Noeud>) -> Option<()> {
    let i = rng.gen_range(0..noeuds.len());
    let j = rng.gen_range(0..noeuds.len());
    if i == j {
        return None;
    }

    let op = Op::TOUS[rng.gen_range(0..Op::TOUS.len())];

    let Some(echange) = ordre_local(op, &noeuds[i].valeur, &noeuds[j].valeur) else {
        trace!(
            "combinaison abandonnée: {} {} {}",
            noeuds[i].expr,
            op.symbole(),
            noeuds[j].expr
        );
        return None;
    };

    let (g, d) = if echange { (j, i) } else { (i, j) };
    let valeur = op.appliquer(&noeuds[g].valeur, &noeuds[d].valeur).ok()?;

    // retrait par swap_remove : l'indice le plus haut d'abord
    let (haut, bas) = if i > j { (i, j) } else { (j, i) };
    let n_haut = noeuds.swap_remove(haut);
    let n_bas = noeuds.swap_remove(bas);
    let (gauche, droite) = if g == haut {
        (n_haut, n_bas)
    } else {
        (n_bas, n_haut)
    };

    noeuds.push(Noeud {
        expr: Expr::binary(op, gauche.expr, droite.expr),
        valeur,
    });
    Some(())
}
