// src/gui/actions/export.rs
use crate::{gui::app::App, file};

pub fn export(app: &mut App) {
    // normalize out_path first
    if app.state.gui.out_path_dirty {
        app.state.options.export.set_path(&app.state.gui.out_path_text);
        app.state.gui.out_path_text = app.state.options.export.out_path().to_string_lossy().into_owned();
        logf!(
            "Export: Out path set → {}",
            app.state.options.export.out_path().display()
        );
        app.state.gui.out_path_dirty = false;
    }

    if app.records.is_empty() {
        logd!("Export: Clicked, but there's nothing to export");
        app.status("Nothing to export");
        return;
    }

    match file::write_export(&app.state.options.export, &app.records) {
        Ok(path) => app.status(format!("Exported {} row(s) → {}", app.records.len(), path.display())),
        Err(e) => {
            loge!("Export: {e}");
            app.status(e.to_string());
        }
    }
}
