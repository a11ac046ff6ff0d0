// src/gui/components/data_table.rs
//
// Draws the live table. Purely a view.

use eframe::egui::{self, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};
use crate::gui::app::App;

const WIDTHS: [f32; 3] = [420.0, 110.0, 70.0];

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    if app.rows.is_empty() {
        ui.weak("No data yet.");
        return;
    }

    ui.label(format!("{} product(s)", app.rows.len()));

    let mut table = TableBuilder::new(ui)
        .striped(true)
        .min_scrolled_height(0.0)
        .id_salt("products");
    for (ci, w) in WIDTHS.iter().enumerate() {
        // last column takes the rest
        let col = if ci + 1 == WIDTHS.len() { Column::remainder() } else { Column::initial(*w) };
        table = table.column(col.resizable(true).clip(true).at_least(40.0));
    }

    table
        .header(24.0, |mut header| {
            for h in &app.headers {
                header.col(|ui| {
                    ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                    ui.label(RichText::new(h).strong());
                });
            }
        })
        .body(|body| {
            body.rows(20.0, app.rows.len(), |mut row| {
                let ix = row.index();
                if let Some(cells) = app.rows.get(ix) {
                    for cell in cells {
                        row.col(|ui| {
                            ui.label(cell);
                        });
                    }
                }
            });
        });
}
