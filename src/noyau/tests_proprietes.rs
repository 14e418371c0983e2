//! Campagne de propriétés : contrats publics du moteur.
//!
//! But : verrouiller les points historiquement fragiles sans dépendre de
//! l'interface graphique.
//! - ordre des opérandes pour − et ÷ (le point de régression n°1)
//! - absence (variable non liée, pile incomplète) = valeur absente, jamais
//!   de panique
//! - symbole inconnu = non-opération silencieuse
//! - rendu infixe exact (ordre, parenthèses, virgules)
//! - chaque poussée rend exactement l'état ré-évalué (évaluation immédiate)

use super::Moteur;

fn moteur_avec(valeurs: &[f64]) -> Moteur {
    let mut m = Moteur::new();
    for v in valeurs {
        m.pousse_operande(*v);
    }
    m
}

/// Pousse une suite mixte : nombre si ça se parse, sinon symbole.
fn moteur_sequence(elements: &[&str]) -> Moteur {
    let mut m = Moteur::new();
    for e in elements {
        match e.parse::<f64>() {
            Ok(valeur) => m.pousse_operande(valeur),
            Err(_) => m.pousse_symbole(e),
        };
    }
    m
}

fn assert_evalue(elements: &[&str], attendu: f64) {
    let m = moteur_sequence(elements);
    let resultat = m
        .evalue()
        .unwrap_or_else(|| panic!("résultat absent pour {elements:?}"));
    assert_eq!(resultat, attendu, "séquence {elements:?}");
}

fn assert_description(elements: &[&str], attendu: &str) {
    let m = moteur_sequence(elements);
    assert_eq!(m.description(), attendu, "séquence {elements:?}");
}

/* ------------------------ Ordre des opérandes (− et ÷) ------------------------ */

#[test]
fn prop_soustraction_sens_naturel() {
    // a b − = a − b, jamais b − a
    assert_evalue(&["8", "5", "−"], 3.0);
    assert_evalue(&["5", "8", "−"], -3.0);
    assert_evalue(&["0", "7", "−"], -7.0);
    assert_evalue(&["-2", "-6", "−"], 4.0);
}

#[test]
fn prop_division_sens_naturel() {
    // a b ÷ = a ÷ b, jamais b ÷ a
    assert_evalue(&["10", "4", "÷"], 2.5);
    assert_evalue(&["4", "10", "÷"], 0.4);
    assert_evalue(&["1", "8", "÷"], 0.125);
}

#[test]
fn prop_commutatives() {
    assert_evalue(&["3", "4", "+"], 7.0);
    assert_evalue(&["4", "3", "+"], 7.0);
    assert_evalue(&["3", "4", "×"], 12.0);
    assert_evalue(&["4", "3", "×"], 12.0);
}

#[test]
fn prop_composition_profonde() {
    // ((9 + 16) √) × 2 = 10
    assert_evalue(&["9", "16", "+", "√", "2", "×"], 10.0);

    // 20 − (3 × 4) = 8
    assert_evalue(&["20", "3", "4", "×", "−"], 8.0);
}

/* ------------------------ Unaires et constantes ------------------------ */

#[test]
fn prop_unaires() {
    assert_evalue(&["9", "√"], 3.0);
    assert_evalue(&["0", "sin"], 0.0);
    assert_evalue(&["0", "cos"], 1.0);
    assert_evalue(&["1", "log"], 0.0); // log = népérien
    assert_evalue(&["5", "±"], -5.0);
    assert_evalue(&["5", "±", "±"], 5.0);
}

#[test]
fn prop_constantes() {
    assert_evalue(&["π"], std::f64::consts::PI);
    assert_evalue(&["e"], std::f64::consts::E);
    assert_evalue(&["π", "cos"], -1.0);
    assert_evalue(&["π", "π", "2", "×", "÷"], 0.5); // π ÷ (π × 2)
}

/* ------------------------ IEEE-754 : rien n'est piégé ------------------------ */

#[test]
fn prop_ieee_propagation() {
    let m = moteur_sequence(&["-1", "√"]);
    assert!(m.evalue().is_some_and(f64::is_nan));

    let m = moteur_sequence(&["3", "0", "÷"]);
    assert_eq!(m.evalue(), Some(f64::INFINITY));

    let m = moteur_sequence(&["-3", "0", "÷"]);
    assert_eq!(m.evalue(), Some(f64::NEG_INFINITY));

    let m = moteur_sequence(&["0", "0", "÷"]);
    assert!(m.evalue().is_some_and(f64::is_nan));

    // le NaN traverse les opérations englobantes
    let m = moteur_sequence(&["-1", "√", "1", "+"]);
    assert!(m.evalue().is_some_and(f64::is_nan));
}

/* ------------------------ Variables ------------------------ */

#[test]
fn prop_variable_liaison_tardive() {
    let mut m = Moteur::new();
    m.pousse_variable("x");
    m.pousse_operande(3.0);
    m.pousse_symbole("×");
    assert_eq!(m.evalue(), None);

    // la liaison ne touche pas la pile ; la ré-évaluation voit la valeur
    m.fixe_variable("x", 4.0);
    assert_eq!(m.evalue(), Some(12.0));
    assert_eq!(m.description(), "x×3");

    // re-liaison : même pile, autre résultat
    m.fixe_variable("x", -1.0);
    assert_eq!(m.evalue(), Some(-3.0));
}

#[test]
fn prop_deux_variables() {
    let mut m = Moteur::new();
    m.pousse_variable("x");
    m.pousse_variable("y");
    m.pousse_symbole("−");
    m.fixe_variable("x", 10.0);
    assert_eq!(m.evalue(), None); // y manque encore

    m.fixe_variable("y", 4.0);
    assert_eq!(m.evalue(), Some(6.0));
    assert_eq!(m.description(), "x−y");
}

/* ------------------------ Remises à zéro ------------------------ */

#[test]
fn prop_vide_tout_etat_initial() {
    let mut m = moteur_avec(&[1.0, 2.0]);
    m.pousse_symbole("+");
    m.fixe_variable("x", 9.0);

    m.vide_tout();
    assert_eq!(m.evalue(), None);
    assert_eq!(m.description(), "");

    // et les liaisons sont bien parties
    m.pousse_variable("x");
    assert_eq!(m.evalue(), None);
}

#[test]
fn prop_vides_independants() {
    let mut m = moteur_avec(&[7.0]);
    m.fixe_variable("x", 1.0);

    m.vide_variables();
    assert_eq!(m.evalue(), Some(7.0)); // la pile survit

    m.pousse_variable("x");
    assert_eq!(m.evalue(), None); // liaison bien effacée

    m.vide_pile();
    m.fixe_variable("x", 2.0);
    m.pousse_variable("x");
    assert_eq!(m.evalue(), Some(2.0));
}

/* ------------------------ Rendu infixe ------------------------ */

#[test]
fn prop_description_ordre_documente() {
    assert_description(&["3", "4", "+"], "3+4");
    assert_description(&["8", "5", "−"], "8−5");
    assert_description(&["10", "4", "÷"], "10÷4");
}

#[test]
fn prop_description_parentheses() {
    assert_description(&["6", "3", "5", "+", "−"], "6−(3+5)");
    assert_description(&["3", "5", "+", "4", "−"], "3+5−4");
    assert_description(&["9", "16", "+", "√", "2", "×"], "√(9+16)×2");
}

#[test]
fn prop_description_trous() {
    assert_description(&["+"], "?+?");
    assert_description(&["3", "+"], "?+3");
    assert_description(&["cos"], "cos(?)");
}

#[test]
fn prop_description_expressions_multiples() {
    assert_description(&["2", "3"], "2, 3");
    assert_description(&["1", "2", "+", "3"], "1+2, 3");

    // seule la dernière expression porte le résultat
    let m = moteur_sequence(&["1", "2", "+", "3"]);
    assert_eq!(m.evalue(), Some(3.0));
}

/* ------------------------ Symbole inconnu ------------------------ */

#[test]
fn prop_symbole_inconnu_inerte() {
    let mut m = moteur_sequence(&["2", "3", "+"]);
    let resultat_avant = m.evalue();
    let description_avant = m.description();

    for symbole in ["tan", "%", "", "plus", "sqrt"] {
        let (resultat, description) = m.pousse_symbole(symbole);
        assert_eq!(resultat, resultat_avant, "symbole {symbole:?}");
        assert_eq!(description, description_avant, "symbole {symbole:?}");
    }

    assert_eq!(m.description(), description_avant);
}

/* ------------------------ Évaluation immédiate ------------------------ */

#[test]
fn prop_poussee_rend_etat_reevalue() {
    let mut m = Moteur::new();

    let (resultat, description) = m.pousse_operande(2.0);
    assert_eq!((resultat, description.as_str()), (m.evalue(), "2"));

    let (resultat, description) = m.pousse_variable("x");
    assert_eq!(resultat, m.evalue());
    assert_eq!(description, m.description());

    let (resultat, description) = m.pousse_symbole("+");
    assert_eq!(resultat, m.evalue());
    assert_eq!(description, m.description());
}
