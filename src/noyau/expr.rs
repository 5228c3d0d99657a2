// src/noyau/expr.rs
//
// Arbre d'exercice exact (sans flottants).
// - Number : feuille rationnelle
// - Binary : opérateur + deux enfants possédés (pas de partage, pas de cycle)
//
// IMPORTANT:
// - eval() est pure ; la seule erreur possible est la division par zéro
//   (arbre construit à la main ou relu depuis un texte).
// - verifier() contrôle TOUS les noeuds internes, pas seulement la racine.

use std::fmt;

use crate::noyau::canon::canon_key;
use crate::noyau::erreur::{ErreurNoyau, Violation};
use crate::noyau::format::format_fraction;
use crate::noyau::parametres::{OPS_MAX, OPS_MIN};
use crate::noyau::rationnel::Rationnel;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

impl Op {
    pub const TOUS: [Op; 4] = [Op::Add, Op::Sub, Op::Mul, Op::Div];

    /// Symbole affiché. La division utilise ÷ pour ne pas se confondre avec n/d.
    pub fn symbole(self) -> &'static str {
        match self {
            Op::Add => "+",
            Op::Sub => "-",
            Op::Mul => "*",
            Op::Div => "÷",
        }
    }

    pub fn precedence(self) -> u8 {
        match self {
            Op::Add | Op::Sub => 1,
            Op::Mul | Op::Div => 2,
        }
    }

    /// + et * : l'ordre des opérandes ne change pas la valeur.
    pub fn est_commutatif(self) -> bool {
        matches!(self, Op::Add | Op::Mul)
    }

    /// Application exacte d'un opérateur.
    pub fn appliquer(self, a: &Rationnel, b: &Rationnel) -> Result<Rationnel, ErreurNoyau> {
        match self {
            Op::Add => Ok(a + b),
            Op::Sub => Ok(a - b),
            Op::Mul => Ok(a * b),
            Op::Div => a.checked_div(b),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expr {
    Number(Rationnel),
    Binary {
        op: Op,
        left: Box<Expr>,
        right: Box<Expr>,
    },
}

impl Expr {
    pub fn number(r: Rationnel) -> Expr {
        Expr::Number(r)
    }

    pub fn binary(op: Op, left: Expr, right: Expr) -> Expr {
        Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Valeur exacte, calculée des feuilles vers la racine.
    pub fn eval(&self) -> Result<Rationnel, ErreurNoyau> {
        match self {
            Expr::Number(r) => Ok(r.clone()),
            Expr::Binary { op, left, right } => op.appliquer(&left.eval()?, &right.eval()?),
        }
    }

    /// Nombre de noeuds Binary.
    pub fn operator_count(&self) -> usize {
        match self {
            Expr::Number(_) => 0,
            Expr::Binary { left, right, .. } => 1 + left.operator_count() + right.operator_count(),
        }
    }

    fn op(&self) -> Option<Op> {
        match self {
            Expr::Number(_) => None,
            Expr::Binary { op, .. } => Some(*op),
        }
    }

    /// Texte d'exercice (sans le " =" final).
    pub fn render(&self) -> String {
        match self {
            Expr::Number(r) => format_fraction(r),
            Expr::Binary { op, left, right } => {
                let p = op.precedence();

                let mut l = left.render();
                if left.op().is_some_and(|lo| lo.precedence() < p) {
                    l = format!("({l})");
                }

                let mut r = right.render();
                let r_entre_parentheses = right.op().is_some_and(|ro| ro.precedence() <= p);
                if r_entre_parentheses {
                    r = format!("({r})");
                }

                // a ÷ (b/c) plutôt que a ÷ b/c
                if *op == Op::Div && !r_entre_parentheses && r.contains('/') {
                    r = format!("({r})");
                }

                format!("{l} {} {r}", op.symbole())
            }
        }
    }

    /// Clef de dédoublonnage (voir canon.rs). Pas pour l'affichage.
    pub fn canonical(&self) -> String {
        canon_key(self)
    }

    /// Parcours ascendant : valeur de l'arbre ou première contrainte violée.
    pub fn verifier(&self) -> Result<Rationnel, ErreurNoyau> {
        let n = self.operator_count();
        if !(OPS_MIN..=OPS_MAX).contains(&n) {
            return Err(ErreurNoyau::NonTerminatingConstraintViolation(
                Violation::NombreOperateurs(n),
            ));
        }
        verifier_noeud(self)
    }

    pub fn validate(&self) -> bool {
        self.verifier().is_ok()
    }
}

fn verifier_noeud(e: &Expr) -> Result<Rationnel, ErreurNoyau> {
    let (op, left, right) = match e {
        Expr::Number(r) => return Ok(r.clone()),
        Expr::Binary { op, left, right } => (*op, left, right),
    };

    let a = verifier_noeud(left)?;
    let b = verifier_noeud(right)?;
    let viole = |v: Violation| -> Result<Rationnel, ErreurNoyau> {
        Err(ErreurNoyau::NonTerminatingConstraintViolation(v))
    };

    match op {
        Op::Sub if a < b => viole(Violation::Negatif),
        Op::Div if b.is_zero() => viole(Violation::DiviseurNul),
        Op::Div => {
            let q = a.checked_div(&b)?;
            if q.is_integer() {
                viole(Violation::QuotientEntier)
            } else {
                Ok(q)
            }
        }
        _ => op.appliquer(&a, &b),
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
