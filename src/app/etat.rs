//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : porter le moteur RPN et l'état de saisie (affichage principal,
//! historique, drapeau « en cours de saisie »), et offrir les actions des
//! touches sans aucune logique d'affichage egui.
//!
//! Contrats :
//! - Aucune arithmétique ici : tout calcul passe par le moteur.
//! - Un résultat absent s'affiche comme AFFICHAGE_DEFAUT, jamais comme une
//!   erreur.
//! - L'historique reflète toujours la description du moteur ; une opération
//!   réussie y accroche un « = ».

use crate::noyau::Moteur;

/// Affichage principal quand il n'y a rien à montrer.
const AFFICHAGE_DEFAUT: &str = "0";

pub struct AppRpn {
    pub moteur: Moteur,

    // --- affichages ---
    pub affichage: String,  // valeur courante (saisie ou résultat)
    pub historique: String, // description de la pile

    // --- saisie ---
    // true tant que l'utilisateur compose un nombre touche par touche.
    pub en_saisie: bool,
}

impl Default for AppRpn {
    fn default() -> Self {
        Self {
            moteur: Moteur::new(),
            affichage: AFFICHAGE_DEFAUT.to_string(),
            historique: String::new(),
            en_saisie: false,
        }
    }
}

impl AppRpn {
    /* ------------------------ Saisie d'un nombre ------------------------ */

    /// Touche chiffre : prolonge la saisie, ou en démarre une nouvelle.
    pub fn tape_chiffre(&mut self, chiffre: char) {
        if self.en_saisie {
            self.affichage.push(chiffre);
        } else {
            self.affichage = chiffre.to_string();
            self.en_saisie = true;
        }
    }

    /// Touche point : au plus un « . » par nombre.
    pub fn tape_point(&mut self) {
        if !self.affichage.contains('.') {
            self.affichage.push('.');
            self.en_saisie = true;
        }
    }

    /// Touche ± : en cours de saisie on bascule le signe du TEXTE ;
    /// sinon c'est l'opération unaire ± sur la pile.
    pub fn bascule_signe(&mut self) {
        if self.en_saisie {
            if self.affichage.starts_with('-') {
                self.affichage.remove(0);
            } else {
                self.affichage.insert(0, '-');
            }
        } else {
            self.applique_operation("±");
        }
    }

    /// Touche retour : efface un caractère ; le dernier remet l'affichage
    /// par défaut.
    pub fn retour_arriere(&mut self) {
        if self.affichage.chars().count() > 1 {
            self.affichage.pop();
        } else {
            self.affichage = AFFICHAGE_DEFAUT.to_string();
            self.en_saisie = false;
        }
    }

    /* ------------------------ Vers le moteur ------------------------ */

    /// Touche ⏎ : pousse la saisie courante comme opérande.
    pub fn valide_entree(&mut self) {
        if let Ok(valeur) = self.affichage.parse::<f64>() {
            let (resultat, _description) = self.moteur.pousse_operande(valeur);
            self.maj_affichage(resultat);
        }
    }

    /// Touche opération : une saisie en attente est d'abord validée
    /// (comme si ⏎ avait été pressé), puis le symbole part sur la pile.
    pub fn applique_operation(&mut self, symbole: &str) {
        if self.en_saisie {
            self.valide_entree();
        }
        let (resultat, _description) = self.moteur.pousse_symbole(symbole);
        let reussie = resultat.is_some();
        self.maj_affichage(resultat);
        if reussie {
            self.historique.push('=');
        }
    }

    /// Touche variable : pousse une référence (liée ou non).
    pub fn pousse_variable(&mut self, nom: &str) {
        if self.en_saisie {
            self.valide_entree();
        }
        let (resultat, _description) = self.moteur.pousse_variable(nom);
        self.maj_affichage(resultat);
    }

    /// Touche →x : lie la valeur affichée à la variable, puis ré-évalue la
    /// pile (qui peut déjà référencer cette variable).
    pub fn memorise_variable(&mut self, nom: &str) {
        self.en_saisie = false;
        if let Ok(valeur) = self.affichage.parse::<f64>() {
            self.moteur.fixe_variable(nom, valeur);
            let resultat = self.moteur.evalue();
            self.maj_affichage(resultat);
        }
    }

    /* ------------------------ Remises à zéro ------------------------ */

    /// C : abandonne l'expression en cours (pile), garde les variables.
    pub fn vide_expression(&mut self) {
        self.moteur.vide_pile();
        self.maj_affichage(None);
    }

    /// CLR : oublie les variables, garde l'expression.
    pub fn vide_variables(&mut self) {
        self.moteur.vide_variables();
        let resultat = self.moteur.evalue();
        self.maj_affichage(resultat);
    }

    /// AC : remise à zéro totale.
    pub fn remise_a_zero(&mut self) {
        self.moteur.vide_tout();
        self.maj_affichage(None);
    }

    /* ------------------------ Affichage ------------------------ */

    /// Dépose un résultat : affichage principal (conversion f64 par défaut,
    /// sans séparateurs de groupes) + historique depuis le moteur.
    /// Absence = affichage par défaut, pas un message d'erreur.
    fn maj_affichage(&mut self, resultat: Option<f64>) {
        self.en_saisie = false;
        self.historique = self.moteur.description();
        self.affichage = match resultat {
            Some(valeur) => format!("{valeur}"),
            None => AFFICHAGE_DEFAUT.to_string(),
        };
    }
}
