// src/config/state.rs
use super::options::AppOptions;

#[derive(Clone, Debug)]
pub struct GuiState {
    pub window_w: u32,
    pub window_h: u32,

    /// Text in the URL box; copied into `options.scrape.url` on Scrape.
    pub url_text: String,

    /// Text in the output path box; copied into the export options on Export.
    pub out_path_text: String,
    pub out_path_dirty: bool,
}

impl Default for GuiState {
    fn default() -> Self {
        let options = AppOptions::default();
        Self {
            window_w: 900,
            window_h: 640,
            url_text: options.scrape.url,
            out_path_text: options.export.out_path().to_string_lossy().into_owned(),
            out_path_dirty: false,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
