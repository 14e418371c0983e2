// src/app.rs
//
// Calculatrice RPN — module App (racine)
// --------------------------------------
// Rôle :
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppRpn (pour main.rs : use crate::app::AppRpn;)
// - Fournir l'impl eframe::App
//
// Les raccourcis clavier globaux vivent ici ; les touches à l'écran sont
// câblées dans vue.rs.

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppRpn;`
pub use etat::AppRpn;

use eframe::egui;

impl eframe::App for AppRpn {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Enter = ⏎ (pousse la saisie), Escape = AC.
        let (entree, echap) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::Enter),
                i.key_pressed(egui::Key::Escape),
            )
        });
        if entree {
            self.valide_entree();
        }
        if echap {
            self.remise_a_zero();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }
}
