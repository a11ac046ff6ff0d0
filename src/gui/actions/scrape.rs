// src/gui/actions/scrape.rs
use crate::{
    gui::app::App,
    gui::progress::GuiProgress,
    scrape::scrape_url,
};

pub fn scrape(app: &mut App) {
    // Align scrape options with the URL box
    app.state.options.scrape.url = app.state.gui.url_text.trim().to_string();

    logf!("Scrape: Begin url={}", app.state.options.scrape.url);

    if let Ok(mut v) = app.view.lock() {
        v.notices.clear();
        v.fraction = 0.0;
    }
    let mut prog = GuiProgress::new(app.view.clone());

    // → This is where the scrape happens ←
    let res = scrape_url(&app.state.options.scrape, Some(&mut prog));

    app.apply_result(&res);

    if res.is_success() {
        if let Ok(mut v) = app.view.lock() {
            v.notices.push(format!("Successfully scraped {} products!", res.records().len()));
        }
    }
}
