// src/gui/components/url_bar.rs
//
// Title, URL box and the SCRAPE button.

use eframe::egui;
use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("🛍️ E-commerce Web Scraper");
    ui.label("Enter a URL from an e-commerce site to scrape product names, prices, and ratings.");

    let mut submitted = false;
    ui.horizontal(|ui| {
        ui.label("Enter URL");
        let resp = ui.add(
            egui::TextEdit::singleline(&mut app.state.gui.url_text)
                .desired_width(ui.available_width() - 140.0)
                .hint_text("https://…"),
        );
        if resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            submitted = true;
        }

        let green = egui::Color32::from_rgb(76, 175, 80);
        let button_scrape = ui.add(
            egui::Button::new(egui::RichText::new("Scrape Data").color(green).strong())
                .stroke(egui::Stroke::new(1.0, green)),
        );
        if button_scrape.clicked() {
            submitted = true;
        }
    });

    if submitted {
        actions::scrape(app);
    }
    ui.add_space(4.0);
}
