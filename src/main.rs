// src/main.rs
//
// Calculatrice RPN — point d'entrée natif
// ---------------------------------------
// Le cœur (src/noyau) est une pile d'opérations RPN : chaque touche pousse
// un jeton (opérande, variable, opération) et relit résultat + description.
// L'app (src/app) n'est que le câblage des touches au-dessus.

use eframe::egui;

mod app;
mod noyau;

use app::AppRpn;

const TITRE_APP: &str = "Calculatrice RPN";

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITRE_APP)
            .with_inner_size([380.0, 560.0])
            .with_min_inner_size([320.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        TITRE_APP,
        options,
        Box::new(|_cc| Ok(Box::<AppRpn>::default())),
    )
}
