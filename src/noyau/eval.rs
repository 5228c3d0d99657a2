//! Noyau — relecture d'un énoncé (chemin de correction)
//!
//! texte -> (sans "=") -> jetons -> RPN -> Expr -> eval
//!
//! Toute erreur des étapes texte devient `UnparseableExpression` ;
//! une division par zéro reste `DivisionByZero`.

use log::trace;

use super::erreur::ErreurNoyau;
use super::expr::Expr;
use super::jetons::{format_tokens, tokenize};
use super::rationnel::Rationnel;
use super::rpn::{from_rpn, to_rpn};

/// Énoncé -> arbre (même forme Number/Binary que le générateur).
pub fn parse_expression(expr_str: &str) -> Result<Expr, ErreurNoyau> {
    let s = expr_str.trim();
    let s = s.strip_suffix('=').unwrap_or(s).trim_end();
    if s.is_empty() {
        return Err(ErreurNoyau::UnparseableExpression("entrée vide".into()));
    }

    let illisible = |msg: String| ErreurNoyau::UnparseableExpression(format!("{msg} ({s:?})"));

    let jetons = tokenize(s).map_err(illisible)?;
    let rpn = to_rpn(&jetons).map_err(illisible)?;
    trace!("{s:?} -> rpn [{}]", format_tokens(&rpn));

    from_rpn(&rpn).map_err(illisible)
}

/// API publique : valeur exacte d'un énoncé rendu.
pub fn parse_and_eval(expr_str: &str) -> Result<Rationnel, ErreurNoyau> {
    parse_expression(expr_str)?.eval()
}
