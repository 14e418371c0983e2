// src/noyau/operations.rs
//
// Opérations de la pile RPN + table des opérations connues.
//
// Une Op est soit un atome (opérande, variable, constante), soit un
// opérateur (unaire / binaire) portant sa fonction de calcul.
// Contrat : la clé de la table est EXACTEMENT le rendu Display de l'Op,
// donc recherche-par-symbole et rendu-du-symbole restent cohérents.

use std::collections::HashMap;
use std::fmt;

#[derive(Clone, Debug)]
pub enum Op {
    /// Littéral numérique (créé à chaque poussée).
    Operande(f64),

    /// Référence de variable (créée à chaque poussée).
    /// La valeur vient de la table de liaisons du moteur, jamais d'ici.
    Variable(String),

    Unaire(&'static str, fn(f64) -> f64),
    Binaire(&'static str, fn(f64, f64) -> f64),
    Constante(&'static str, f64),
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Op::Operande(v) => write!(f, "{v}"),
            Op::Variable(nom) => write!(f, "{nom}"),
            Op::Unaire(symbole, _) | Op::Binaire(symbole, _) | Op::Constante(symbole, _) => {
                write!(f, "{symbole}")
            }
        }
    }
}

/// Table des opérations connues, construite une fois à la création du moteur,
/// en lecture seule ensuite.
///
/// Convention RPN pour les binaires : le premier argument de la fonction est
/// le premier opérande DÉPILÉ (donc le dernier poussé). Pour `a b −`, la
/// fonction reçoit (b, a) et doit rendre a − b ; même chose pour `÷`.
pub fn operations_connues() -> HashMap<String, Op> {
    let mut connues = HashMap::new();
    let mut apprend = |op: Op| {
        connues.insert(op.to_string(), op);
    };

    apprend(Op::Binaire("+", |d, g| g + d));
    apprend(Op::Binaire("−", |d, g| g - d));
    apprend(Op::Binaire("×", |d, g| g * d));
    apprend(Op::Binaire("÷", |d, g| g / d));

    apprend(Op::Unaire("√", f64::sqrt));
    apprend(Op::Unaire("cos", f64::cos));
    apprend(Op::Unaire("sin", f64::sin));
    // log = logarithme népérien (pas décimal)
    apprend(Op::Unaire("log", f64::ln));
    apprend(Op::Unaire("±", |x| -x));

    apprend(Op::Constante("π", std::f64::consts::PI));
    apprend(Op::Constante("e", std::f64::consts::E));

    connues
}

#[cfg(test)]
mod tests {
    use super::{operations_connues, Op};

    #[test]
    fn cles_coherentes_avec_le_rendu() {
        // Invariant : clé de table == rendu Display, pour chaque entrée.
        for (cle, op) in operations_connues() {
            assert_eq!(cle, op.to_string());
        }
    }

    #[test]
    fn symboles_attendus_presents() {
        let connues = operations_connues();
        for symbole in ["+", "−", "×", "÷", "√", "cos", "sin", "log", "±", "π", "e"] {
            assert!(connues.contains_key(symbole), "symbole absent: {symbole}");
        }
        assert!(connues.get("tan").is_none());
    }

    #[test]
    fn rendu_des_atomes() {
        assert_eq!(Op::Operande(3.0).to_string(), "3");
        assert_eq!(Op::Operande(2.5).to_string(), "2.5");
        assert_eq!(Op::Variable("x".to_string()).to_string(), "x");
        assert_eq!(Op::Constante("π", std::f64::consts::PI).to_string(), "π");
    }

    #[test]
    fn ordre_des_arguments_soustraction_division() {
        let connues = operations_connues();

        // Le premier argument est le premier dépilé : (b, a) -> a − b.
        if let Some(Op::Binaire(_, f)) = connues.get("−") {
            assert_eq!(f(5.0, 8.0), 3.0);
        } else {
            panic!("− absent ou de la mauvaise arité");
        }

        if let Some(Op::Binaire(_, f)) = connues.get("÷") {
            assert_eq!(f(4.0, 10.0), 2.5);
        } else {
            panic!("÷ absent ou de la mauvaise arité");
        }
    }
}
