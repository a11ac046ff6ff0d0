// src/gui/components/status_panel.rs
//
// Tier notices, progress bar and the status line.

use eframe::egui::{self, RichText};
use crate::{config::consts::MSG_SUCCESS, gui::app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let view = app.snapshot();

    for notice in &view.notices {
        ui.label(RichText::new(notice).italics());
    }

    if view.fraction > 0.0 {
        ui.add(egui::ProgressBar::new(view.fraction).show_percentage());
    }

    let color = if view.status == MSG_SUCCESS {
        egui::Color32::from_rgb(76, 175, 80)
    } else {
        ui.visuals().text_color()
    };
    ui.label(RichText::new(&view.status).color(color).strong());
}
