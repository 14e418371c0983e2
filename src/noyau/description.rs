// src/noyau/description.rs
//
// Rendu infixe de la pile RPN.
// ---------------------------
// Même consommation récursive par la queue que l'évaluation, mais en
// construisant des chaînes :
// - opérande manquant : « ? » (jamais d'échec dur)
// - unaire            : symbole(opérande), toujours parenthésé
// - binaire           : second symbole premier ; le premier opérande dépilé
//   n'est parenthésé QUE s'il a consommé plus d'un cran de pile (il était
//   lui-même composé, les parenthèses préservent la précédence)
// - expressions indépendantes restantes : jointes par des virgules,
//   la plus ancienne d'abord

use super::operations::Op;

/// Opérande indisponible dans le rendu.
const TROU: &str = "?";

/// Description de toute la pile : « expr1, expr2, … » (ordre de poussée).
/// Pile vide : chaîne vide.
pub fn description_complete(ops: &[Op]) -> String {
    let (morceau, reste) = decrit(ops);
    match morceau {
        None => String::new(),
        Some(texte) if reste.is_empty() => texte,
        Some(texte) => format!("{}, {}", description_complete(reste), texte),
    }
}

/// Décrit UNE expression en queue de `ops` ; rend (texte, reste non consommé).
/// None seulement sur tranche vide.
fn decrit(ops: &[Op]) -> (Option<String>, &[Op]) {
    let (derniere, reste) = match ops.split_last() {
        Some(paire) => paire,
        None => return (None, ops),
    };

    match derniere {
        // Littéral : conversion numérique par défaut.
        Op::Operande(valeur) => (Some(format!("{valeur}")), reste),
        Op::Constante(symbole, _) => (Some((*symbole).to_string()), reste),
        Op::Variable(nom) => (Some(nom.clone()), reste),

        Op::Unaire(symbole, _) => {
            let (operande, apres) = decrit(reste);
            let operande = operande.unwrap_or_else(|| TROU.to_string());
            (Some(format!("{symbole}({operande})")), apres)
        }

        Op::Binaire(symbole, _) => {
            let (premier, apres_premier) = decrit(reste);

            // Composé = a consommé plus d'un cran de pile.
            let compose = reste.len() - apres_premier.len() > 1;
            let premier = match premier {
                Some(texte) if compose => format!("({texte})"),
                Some(texte) => texte,
                None => TROU.to_string(),
            };

            let (second, apres_second) = decrit(apres_premier);
            let second = second.unwrap_or_else(|| TROU.to_string());

            (Some(format!("{second}{symbole}{premier}")), apres_second)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::description_complete;
    use crate::noyau::operations::{operations_connues, Op};

    fn pile(elements: &[&str]) -> Vec<Op> {
        let connues = operations_connues();
        elements
            .iter()
            .map(|e| {
                if let Ok(valeur) = e.parse::<f64>() {
                    Op::Operande(valeur)
                } else if let Some(op) = connues.get(*e) {
                    op.clone()
                } else {
                    Op::Variable((*e).to_string())
                }
            })
            .collect()
    }

    fn rendu(elements: &[&str]) -> String {
        description_complete(&pile(elements))
    }

    #[test]
    fn pile_vide() {
        assert_eq!(rendu(&[]), "");
    }

    #[test]
    fn binaire_simple() {
        // l'opérande évalué en second s'affiche en premier : lecture
        // gauche-droite naturelle
        assert_eq!(rendu(&["3", "4", "+"]), "3+4");
        assert_eq!(rendu(&["8", "5", "−"]), "8−5");
        assert_eq!(rendu(&["10", "4", "÷"]), "10÷4");
    }

    #[test]
    fn premier_depile_compose_parenthese() {
        // [6, 3, 5, +, −] : 6 − (3 + 5)
        assert_eq!(rendu(&["6", "3", "5", "+", "−"]), "6−(3+5)");
    }

    #[test]
    fn second_depile_compose_sans_parentheses() {
        // [3, 5, +, 4, −] : le composé est à gauche, pas de parenthèses
        assert_eq!(rendu(&["3", "5", "+", "4", "−"]), "3+5−4");
    }

    #[test]
    fn unaire_toujours_parenthese() {
        assert_eq!(rendu(&["2", "√"]), "√(2)");
        assert_eq!(rendu(&["3", "4", "+", "√"]), "√(3+4)");
        assert_eq!(rendu(&["1", "±"]), "±(1)");
    }

    #[test]
    fn operandes_manquants() {
        assert_eq!(rendu(&["+"]), "?+?");
        assert_eq!(rendu(&["3", "+"]), "?+3");
        assert_eq!(rendu(&["√"]), "√(?)");
        assert_eq!(rendu(&["√", "3", "+"]), "√(?)+3");
    }

    #[test]
    fn variables_et_constantes() {
        assert_eq!(rendu(&["π", "x", "×"]), "π×x");
        assert_eq!(rendu(&["x", "√"]), "√(x)");
        assert_eq!(rendu(&["e"]), "e");
    }

    #[test]
    fn expressions_independantes_jointes() {
        assert_eq!(rendu(&["2", "3"]), "2, 3");
        assert_eq!(rendu(&["1", "2", "+", "3"]), "1+2, 3");
        assert_eq!(rendu(&["1", "2", "3"]), "1, 2, 3");
    }

    #[test]
    fn litteraux_en_conversion_par_defaut() {
        assert_eq!(rendu(&["2.5"]), "2.5");
        assert_eq!(rendu(&["-3"]), "-3");
        assert_eq!(rendu(&["0.1", "0.2", "+"]), "0.1+0.2");
    }
}
