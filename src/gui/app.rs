// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex},
};

use eframe::egui;

use crate::{
    config::state::AppState,
    data::{ExtractionResult, ProductRecord},
};

use super::progress::ProgressView;

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Web Scraper",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // last successful extraction, in display form
    pub records: Vec<ProductRecord>,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,

    // status/progress (the pipeline writes here through GuiProgress)
    pub view: Arc<Mutex<ProgressView>>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        logf!("Init: url={}", state.gui.url_text);

        let view = ProgressView { status: s!("Idle"), ..ProgressView::default() };

        Self {
            state,
            records: Vec::new(),
            headers: ProductRecord::headers(),
            rows: Vec::new(),
            view: Arc::new(Mutex::new(view)),
        }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut v) = self.view.lock() {
            v.status = msg.into();
        }
    }

    pub fn snapshot(&self) -> ProgressView {
        self.view.lock().map(|v| v.clone()).unwrap_or_default()
    }

    /// Replace the table with a scrape outcome. A failure clears it.
    pub fn apply_result(&mut self, res: &ExtractionResult) {
        self.records = res.records().to_vec();
        let (headers, rows) = res.to_table();
        self.headers = headers;
        self.rows = rows;
        self.status(res.message());
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("url").show(ctx, |ui| {
            crate::gui::components::url_bar::draw(ui, self);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            crate::gui::components::status_panel::draw(ui, self);

            ui.separator();

            crate::gui::components::export_bar::draw(ui, self);

            ui.separator();

            crate::gui::components::data_table::draw(ui, self);
        });
    }
}
