// src/noyau/essais.rs
//
// Budget d'essais borné, partagé par :
// - l'assemblage d'un arbre (une combinaison = un essai)
// - l'accumulation d'un lot (un arbre candidat = un essai)
//
// Un compteur unique par appel : un succès ne rend pas les essais consommés.

#[derive(Clone, Debug)]
pub struct Essais {
    budget: usize,
    faits: usize,
}

impl Essais {
    pub fn new(budget: usize) -> Self {
        Self { budget, faits: 0 }
    }

    /// Essais consommés jusqu'ici.
    pub fn faits(&self) -> usize {
        self.faits
    }

    pub fn epuise(&self) -> bool {
        self.faits >= self.budget
    }

    /// Rejoue `tentative` jusqu'au premier `Some`, ou None si le budget est épuisé.
    pub fn tenter<T>(&mut self, mut tentative: impl FnMut() -> Option<T>) -> Option<T> {
        while !self.epuise() {
            self.faits += 1;
            if let Some(v) = tentative() {
                return Some(v);
            }
        }
        None
    }
}
