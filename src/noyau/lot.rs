// src/noyau/lot.rs
//
// Lot d'exercices sans doublon.
// - doublon = même clef canonique (2 + 3 et 3 + 2 sont le même exercice)
// - un doublon ne consomme pas de place dans le lot, seulement un essai
// - budget global épuisé => erreur explicite (jamais de lot partiel "réussi")

use std::collections::HashSet;

use log::{debug, warn};
use rand::Rng;

use super::erreur::ErreurNoyau;
use super::essais::Essais;
use super::format::format_fraction;
use super::generateur::Generateur;
use super::parametres::{N_MAX, OPS_MAX, OPS_MIN};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Exercice {
    /// Texte affiché, terminé par " =".
    pub enonce: String,
    /// Réponse au format fraction ("5", "2/3", "1'1/2").
    pub reponse: String,
    /// Clef de dédoublonnage.
    pub canonique: String,
}

impl<R: Rng> Generateur<R> {
    /// `n` exercices deux à deux distincts (au sens canonique), nombres bornés par `range`.
    pub fn generate_exercises(
        &mut self,
        n: usize,
        range: u64,
    ) -> Result<Vec<Exercice>, ErreurNoyau> {
        if !(1..=N_MAX).contains(&n) {
            return Err(ErreurNoyau::InvalidRange(format!(
                "n = {n} hors de [1, {N_MAX}]"
            )));
        }
        if range == 0 {
            return Err(ErreurNoyau::InvalidRange("range = 0".into()));
        }

        let mut vus: HashSet<String> = HashSet::with_capacity(n);
        let mut lot: Vec<Exercice> = Vec::with_capacity(n);
        let mut essais = Essais::new(self.params.max_essais);

        while lot.len() < n {
            match essais.tenter(|| self.exercice_inedit(range, &mut vus)) {
                Some(ex) => lot.push(ex),
                None => {
                    warn!(
                        "lot incomplet: {}/{} après {} essais (range = {range})",
                        lot.len(),
                        n,
                        essais.faits()
                    );
                    return Err(ErreurNoyau::GenerationExhausted {
                        produits: lot.len(),
                        demandes: n,
                        essais: essais.faits(),
                    });
                }
            }
        }

        debug!("lot de {n} exercices en {} essais", essais.faits());
        Ok(lot)
    }

    /// Un essai de lot : un arbre neuf, gardé seulement si sa clef est nouvelle.
    fn exercice_inedit(&mut self, range: u64, vus: &mut HashSet<String>) -> Option<Exercice> {
        let k = self.rng.gen_range(OPS_MIN..=OPS_MAX);
        let racine = self.gen_expr_with_ops(k, range)?;

        let canonique = racine.canonical();
        if vus.contains(&canonique) {
            debug!("doublon ignoré: {canonique}");
            return None;
        }

        let valeur = racine.eval().ok()?;
        vus.insert(canonique.clone());

        Some(Exercice {
            enonce: format!("{} =", racine.render()),
            reponse: format_fraction(&valeur),
            canonique,
        })
    }
}

/// Façade : (énoncés, réponses) alignés par indice, tirage non reproductible.
pub fn generate(n: usize, range: u64) -> Result<(Vec<String>, Vec<String>), ErreurNoyau> {
    let lot = Generateur::depuis_entropie().generate_exercises(n, range)?;
    Ok(lot.into_iter().map(|ex| (ex.enonce, ex.reponse)).unzip())
}
