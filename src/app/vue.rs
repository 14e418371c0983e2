// src/app/vue.rs
//
// Vue (UI egui)
// -------------
// Objectifs :
// - double affichage : historique (description de la pile) + valeur courante
// - pavé : chiffres, point, ±, les quatre binaires
// - rangées fonctions (√ cos sin log), symboles (π e) et variable (x / →x)
// - gros boutons, info-bulles sur les actions
//
// Toute la logique d'état vit dans etat.rs ; ici on ne fait que câbler
// les touches.

use eframe::egui;

use super::etat::AppRpn;

/// Nom de la variable servie par les touches x / →x.
const NOM_VARIABLE: &str = "x";

impl AppRpn {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice RPN");
                ui.add_space(6.0);

                self.ui_affichages(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_actions(ui);
                ui.add_space(8.0);

                self.ui_pave_numerique(ui);
                ui.add_space(8.0);

                self.ui_fonctions(ui);
            });
    }

    /* ------------------------ Affichages ------------------------ */

    fn ui_affichages(&mut self, ui: &mut egui::Ui) {
        ui.label("Expression :");
        Self::champ_monospace(ui, "historique_out", &self.historique, 1);

        ui.add_space(6.0);

        ui.label("Valeur :");
        Self::champ_monospace(ui, "affichage_out", &self.affichage, 2);
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str, rows: usize) {
        // Affichage lecture seule stable, sans TextEdit interactif.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.set_min_height(
                        rows as f32 * ui.text_style_height(&egui::TextStyle::Monospace),
                    );
                    ui.monospace(contenu);
                });
            });
    }

    /* ------------------------ Rangée d'actions ------------------------ */

    fn ui_actions(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            // Contrat : C = expression seulement ; CLR = variables seulement ;
            // AC = tout.
            self.bouton_action(ui, "C", "Abandonne l'expression en cours", Action::VideExpression);
            self.bouton_action(ui, "CLR", "Oublie les variables mémorisées", Action::VideVariables);
            self.bouton_action(ui, "AC", "Remise à zéro totale", Action::RemiseAZero);

            ui.separator();

            self.bouton_action(ui, "DEL", "Efface le dernier chiffre saisi", Action::RetourArriere);
        });
    }

    /* ------------------------ Pavé numérique ------------------------ */

    fn ui_pave_numerique(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_numerique_rpn")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton_touche(ui, "7", Touche::Chiffre('7'));
                self.bouton_touche(ui, "8", Touche::Chiffre('8'));
                self.bouton_touche(ui, "9", Touche::Chiffre('9'));
                self.bouton_touche(ui, "÷", Touche::Operation("÷"));
                ui.end_row();

                self.bouton_touche(ui, "4", Touche::Chiffre('4'));
                self.bouton_touche(ui, "5", Touche::Chiffre('5'));
                self.bouton_touche(ui, "6", Touche::Chiffre('6'));
                self.bouton_touche(ui, "×", Touche::Operation("×"));
                ui.end_row();

                self.bouton_touche(ui, "1", Touche::Chiffre('1'));
                self.bouton_touche(ui, "2", Touche::Chiffre('2'));
                self.bouton_touche(ui, "3", Touche::Chiffre('3'));
                self.bouton_touche(ui, "−", Touche::Operation("−"));
                ui.end_row();

                self.bouton_touche(ui, "0", Touche::Chiffre('0'));
                self.bouton_touche(ui, ".", Touche::Point);
                self.bouton_touche(ui, "±", Touche::Signe);
                self.bouton_touche(ui, "+", Touche::Operation("+"));
                ui.end_row();
            });
    }

    /* ------------------------ Fonctions, symboles, variable ------------------------ */

    fn ui_fonctions(&mut self, ui: &mut egui::Ui) {
        ui.horizontal_wrapped(|ui| {
            self.bouton_touche(ui, "√", Touche::Operation("√"));
            self.bouton_touche(ui, "cos", Touche::Operation("cos"));
            self.bouton_touche(ui, "sin", Touche::Operation("sin"));
            self.bouton_touche(ui, "log", Touche::Operation("log"));

            ui.separator();

            self.bouton_touche(ui, "π", Touche::Operation("π"));
            self.bouton_touche(ui, "e", Touche::Operation("e"));
        });

        ui.add_space(6.0);

        ui.horizontal(|ui| {
            self.bouton_touche(ui, "x", Touche::Variable(NOM_VARIABLE));
            self.bouton_touche(ui, "→x", Touche::Memorise(NOM_VARIABLE));

            ui.add_space(10.0);

            let valider = ui
                .add_sized([96.0, 30.0], egui::Button::new("⏎"))
                .on_hover_text("Pousse la valeur saisie sur la pile");
            if valider.clicked() {
                self.valide_entree();
            }
        });
    }

    /* ------------------------ Boutons ------------------------ */

    fn bouton_action(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, action: Action) {
        let resp = ui
            .add_sized([56.0, 30.0], egui::Button::new(label))
            .on_hover_text(tip);

        if resp.clicked() {
            match action {
                Action::VideExpression => self.vide_expression(),
                Action::VideVariables => self.vide_variables(),
                Action::RemiseAZero => self.remise_a_zero(),
                Action::RetourArriere => self.retour_arriere(),
            }
        }
    }

    fn bouton_touche(&mut self, ui: &mut egui::Ui, label: &str, touche: Touche) {
        let resp = ui.add_sized([46.0, 30.0], egui::Button::new(label));
        if !resp.clicked() {
            return;
        }

        match touche {
            Touche::Chiffre(c) => self.tape_chiffre(c),
            Touche::Point => self.tape_point(),
            Touche::Signe => self.bascule_signe(),
            Touche::Operation(symbole) => self.applique_operation(symbole),
            Touche::Variable(nom) => self.pousse_variable(nom),
            Touche::Memorise(nom) => self.memorise_variable(nom),
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    VideExpression,
    VideVariables,
    RemiseAZero,
    RetourArriere,
}

#[derive(Clone, Copy, Debug)]
enum Touche {
    Chiffre(char),
    Point,
    Signe,
    Operation(&'static str),
    Variable(&'static str),
    Memorise(&'static str),
}
