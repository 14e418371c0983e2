//! Campagne de robustesse : marteler le moteur sans brûler la machine.
//!
//! - RNG déterministe (seed fixe) : toute défaillance est rejouable
//! - profondeur de pile bornée
//! - budget temps global
//! - invariants par itération :
//!   * aucune poussée ne panique, quel que soit l'ordre des jetons
//!   * ce qu'une poussée rend == l'état ré-évalué (résultat ET description)
//!   * un symbole inconnu ne change jamais la description
//!   * l'évaluation est stable (la pile n'est pas mutée en douce)

use std::time::{Duration, Instant};

use super::Moteur;

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {max:?}");
    }
}

/* ------------------------ Générateur de poussées ------------------------ */

const SYMBOLES_CONNUS: [&str; 11] = [
    "+", "−", "×", "÷", "√", "cos", "sin", "log", "±", "π", "e",
];
const SYMBOLES_INCONNUS: [&str; 4] = ["tan", "%", "exp", "mod"];
const VARIABLES: [&str; 3] = ["x", "y", "m"];

/// Une poussée pseudo-aléatoire ; rend ce que le moteur a rendu.
fn pousse_au_hasard(moteur: &mut Moteur, rng: &mut Rng) -> (Option<f64>, String) {
    match rng.pick(4) {
        0 => {
            // opérande bornée, parfois négative
            let valeur = f64::from(rng.pick(2000)) / 10.0 - 50.0;
            moteur.pousse_operande(valeur)
        }
        1 => {
            let nom = VARIABLES[rng.pick(VARIABLES.len() as u32) as usize];
            moteur.pousse_variable(nom)
        }
        2 => {
            let s = SYMBOLES_INCONNUS[rng.pick(SYMBOLES_INCONNUS.len() as u32) as usize];
            moteur.pousse_symbole(s)
        }
        _ => {
            let s = SYMBOLES_CONNUS[rng.pick(SYMBOLES_CONNUS.len() as u32) as usize];
            moteur.pousse_symbole(s)
        }
    }
}

/// Égalité de résultats où NaN == NaN (sinon l'invariant de stabilité
/// échouerait pour toute pile produisant NaN).
fn memes_resultats(a: Option<f64>, b: Option<f64>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(x), Some(y)) => x == y || (x.is_nan() && y.is_nan()),
        _ => false,
    }
}

/* ------------------------ Campagnes ------------------------ */

#[test]
fn fuzz_poussees_jamais_de_panique() {
    let t0 = Instant::now();
    let max = Duration::from_secs(2);

    let mut rng = Rng::new(0x5eed_0001);

    for _campagne in 0..50 {
        let mut moteur = Moteur::new();
        for _ in 0..120 {
            let (resultat, description) = pousse_au_hasard(&mut moteur, &mut rng);

            // cohérence immédiate : poussée == état ré-évalué
            assert!(memes_resultats(resultat, moteur.evalue()));
            assert_eq!(description, moteur.description());

            budget(t0, max);
        }
    }
}

#[test]
fn fuzz_symbole_inconnu_jamais_observable() {
    let t0 = Instant::now();
    let max = Duration::from_secs(2);

    let mut rng = Rng::new(0x5eed_0002);
    let mut moteur = Moteur::new();

    for _ in 0..400 {
        if rng.pick(3) == 0 {
            let avant = moteur.description();
            let s = SYMBOLES_INCONNUS[rng.pick(SYMBOLES_INCONNUS.len() as u32) as usize];
            let (_resultat, description) = moteur.pousse_symbole(s);
            assert_eq!(description, avant, "symbole {s:?} a modifié la pile");
        } else {
            pousse_au_hasard(&mut moteur, &mut rng);
        }
        budget(t0, max);
    }
}

#[test]
fn fuzz_evaluation_stable() {
    let t0 = Instant::now();
    let max = Duration::from_secs(2);

    let mut rng = Rng::new(0x5eed_0003);
    let mut moteur = Moteur::new();
    moteur.fixe_variable("x", 1.5);

    for _ in 0..200 {
        pousse_au_hasard(&mut moteur, &mut rng);

        // deux évaluations de suite : même résultat, même description
        let premier = moteur.evalue();
        let description = moteur.description();
        assert!(memes_resultats(premier, moteur.evalue()));
        assert_eq!(moteur.description(), description);

        budget(t0, max);
    }
}

#[test]
fn fuzz_determinisme_par_seed() {
    // Même seed => même transcription finale, résultat compris.
    let transcrit = |seed: u64| {
        let mut rng = Rng::new(seed);
        let mut moteur = Moteur::new();
        moteur.fixe_variable("x", 2.0);
        for _ in 0..150 {
            pousse_au_hasard(&mut moteur, &mut rng);
        }
        (moteur.evalue().map(f64::to_bits), moteur.description())
    };

    assert_eq!(transcrit(0x5eed_0004), transcrit(0x5eed_0004));
}

#[test]
fn fuzz_profondeur_bornee_safe() {
    // Pile volontairement profonde mais bornée (l'évaluation est récursive :
    // on vérifie qu'une profondeur raisonnable passe sans déborder).
    let t0 = Instant::now();
    let max = Duration::from_secs(2);

    let mut moteur = Moteur::new();
    moteur.pousse_operande(1.0);
    for _ in 0..300 {
        moteur.pousse_operande(1.0);
        moteur.pousse_symbole("+");
        budget(t0, max);
    }

    assert_eq!(moteur.evalue(), Some(301.0));

    // unaires empilés : même garantie
    let mut moteur = Moteur::new();
    moteur.pousse_operande(0.0);
    for _ in 0..300 {
        moteur.pousse_symbole("sin");
        budget(t0, max);
    }
    assert_eq!(moteur.evalue(), Some(0.0));
}
