// src/noyau/rationnel.rs
//
// Rationnel exact (enveloppe fine autour de BigRational).
// - toujours réduit (num-rational s'en charge)
// - dénominateur > 0, signe porté par le numérateur
// - division checkée : jamais de panique sur /0

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Sub};

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};

use super::erreur::ErreurNoyau;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rationnel(BigRational);

impl Rationnel {
    pub fn zero() -> Self {
        Rationnel(BigRational::zero())
    }

    pub fn entier(n: impl Into<BigInt>) -> Self {
        Rationnel(BigRational::from_integer(n.into()))
    }

    /// n/d réduit. Refuse d = 0.
    pub fn new(n: impl Into<BigInt>, d: impl Into<BigInt>) -> Result<Self, ErreurNoyau> {
        let d = d.into();
        if d.is_zero() {
            return Err(ErreurNoyau::DivisionByZero);
        }
        Ok(Rationnel(BigRational::new(n.into(), d)))
    }

    pub fn numer(&self) -> &BigInt {
        self.0.numer()
    }

    pub fn denom(&self) -> &BigInt {
        self.0.denom()
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.0.is_negative()
    }

    /// Entier <=> dénominateur 1 (après réduction).
    pub fn is_integer(&self) -> bool {
        self.0.denom().is_one()
    }

    pub fn checked_div(&self, autre: &Rationnel) -> Result<Rationnel, ErreurNoyau> {
        if autre.is_zero() {
            return Err(ErreurNoyau::DivisionByZero);
        }
        Ok(Rationnel(&self.0 / &autre.0))
    }
}

impl From<BigRational> for Rationnel {
    fn from(r: BigRational) -> Self {
        Rationnel(r)
    }
}

impl Add for &Rationnel {
    type Output = Rationnel;
    fn add(self, rhs: &Rationnel) -> Rationnel {
        Rationnel(&self.0 + &rhs.0)
    }
}

impl Sub for &Rationnel {
    type Output = Rationnel;
    fn sub(self, rhs: &Rationnel) -> Rationnel {
        Rationnel(&self.0 - &rhs.0)
    }
}

impl Mul for &Rationnel {
    type Output = Rationnel;
    fn mul(self, rhs: &Rationnel) -> Rationnel {
        Rationnel(&self.0 * &rhs.0)
    }
}

impl PartialOrd for Rationnel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rationnel {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

/// Affichage brut "n" ou "n/d" (debug / jetons). Le rendu élève passe par format.rs.
impl fmt::Display for Rationnel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numer())
        } else {
            write!(f, "{}/{}", self.numer(), self.denom())
        }
    }
}
