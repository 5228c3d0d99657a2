// src/main.rs
//
// Exercices Q-pur — point d’entrée ligne de commande
// --------------------------------------------------
// Deux modes (comme les fichiers attendus par les correcteurs existants) :
// - génération : exercices_qpur -n 10 -r 10
//     => Exercises.txt + Answers.txt (répertoire courant)
// - correction : exercices_qpur -e Exercises.txt -a Answers.txt
//     => Grade.txt
//
// Ici : arguments + fichiers seulement. Toute la logique vit dans le noyau.

use std::fs;
use std::process::ExitCode;

use exercices_qpur::{generate, grade};

const FICHIER_EXERCICES: &str = "Exercises.txt";
const FICHIER_REPONSES: &str = "Answers.txt";
const FICHIER_NOTE: &str = "Grade.txt";

const USAGE: &str = "usage:\n  exercices_qpur -n <nombre> -r <plage>\n  exercices_qpur -e <exercices.txt> -a <reponses.txt>";

#[derive(Debug, Default)]
struct Arguments {
    n: Option<usize>,
    r: Option<u64>,
    e: Option<String>,
    a: Option<String>,
}

enum Mode {
    Generer { n: usize, r: u64 },
    Corriger { exercices: String, reponses: String },
}

fn lire_arguments(mut args: impl Iterator<Item = String>) -> Result<Arguments, String> {
    let mut out = Arguments::default();

    while let Some(drapeau) = args.next() {
        let valeur = args
            .next()
            .ok_or_else(|| format!("valeur manquante après {drapeau}"))?;
        match drapeau.as_str() {
            "-n" => {
                out.n = Some(
                    valeur
                        .parse()
                        .map_err(|_| format!("-n attend un entier, reçu {valeur:?}"))?,
                )
            }
            "-r" => {
                out.r = Some(
                    valeur
                        .parse()
                        .map_err(|_| format!("-r attend un entier, reçu {valeur:?}"))?,
                )
            }
            "-e" => out.e = Some(valeur),
            "-a" => out.a = Some(valeur),
            autre => return Err(format!("option inconnue: {autre}")),
        }
    }

    Ok(out)
}

fn choisir_mode(args: Arguments) -> Result<Mode, String> {
    match (args.e, args.a) {
        (Some(exercices), Some(reponses)) => return Ok(Mode::Corriger { exercices, reponses }),
        (Some(_), None) | (None, Some(_)) => {
            return Err("-e et -a doivent être donnés ensemble".into())
        }
        (None, None) => {}
    }

    let r = args.r.ok_or("génération : -r (plage) est obligatoire")?;
    let n = args.n.ok_or("génération : -n (nombre) est obligatoire")?;
    Ok(Mode::Generer { n, r })
}

/// Lignes non vides, sans espaces de bord.
fn lire_lignes(chemin: &str) -> Result<Vec<String>, String> {
    let texte = fs::read_to_string(chemin).map_err(|e| format!("lecture de {chemin}: {e}"))?;
    Ok(texte
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(String::from)
        .collect())
}

fn ecrire_lignes(chemin: &str, lignes: &[String]) -> Result<(), String> {
    let mut texte = String::new();
    for l in lignes {
        texte.push_str(l);
        texte.push('\n');
    }
    fs::write(chemin, texte).map_err(|e| format!("écriture de {chemin}: {e}"))
}

fn executer(mode: Mode) -> Result<(), String> {
    match mode {
        Mode::Generer { n, r } => {
            let (exercices, reponses) = generate(n, r).map_err(|e| e.to_string())?;
            ecrire_lignes(FICHIER_EXERCICES, &exercices)?;
            ecrire_lignes(FICHIER_REPONSES, &reponses)?;
            println!("{FICHIER_EXERCICES}, {FICHIER_REPONSES} générés ({n} exercices)");
        }
        Mode::Corriger {
            exercices,
            reponses,
        } => {
            let bilan = grade(&lire_lignes(&exercices)?, &lire_lignes(&reponses)?);
            fs::write(FICHIER_NOTE, bilan.to_string())
                .map_err(|e| format!("écriture de {FICHIER_NOTE}: {e}"))?;
            println!(
                "{FICHIER_NOTE} généré ({} juste(s), {} faux)",
                bilan.correct.len(),
                bilan.wrong.len()
            );
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let mode = match lire_arguments(std::env::args().skip(1)).and_then(choisir_mode) {
        Ok(m) => m,
        Err(msg) => {
            eprintln!("erreur: {msg}\n{USAGE}");
            return ExitCode::from(2);
        }
    };

    match executer(mode) {
        Ok(()) => ExitCode::SUCCESS,
        Err(msg) => {
            eprintln!("erreur: {msg}");
            ExitCode::FAILURE
        }
    }
}
