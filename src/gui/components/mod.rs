// src/gui/components/mod.rs
pub mod data_table;
pub mod export_bar;
pub mod status_panel;
pub mod url_bar;
