// src/gui/progress.rs
use std::sync::{ Arc, Mutex };

use crate::{data::Tier, progress::Progress};

/// What the window shows about the last/ongoing scrape.
#[derive(Clone, Debug, Default)]
pub struct ProgressView {
    pub status: String,
    /// One line per tier attempted, in order.
    pub notices: Vec<String>,
    /// 0.0..=1.0 across the tier chain.
    pub fraction: f32,
}

pub struct GuiProgress {
    view: Arc<Mutex<ProgressView>>,
    done: usize,
    total: usize,
}

impl GuiProgress {
    pub fn new(view: Arc<Mutex<ProgressView>>) -> Self {
        Self { view, done: 0, total: 0 }
    }
    fn update(&self, f: impl FnOnce(&mut ProgressView)) {
        if let Ok(mut v) = self.view.lock() {
            f(&mut v);
        }
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.update(|v| { v.notices.clear(); v.fraction = 0.0; });
    }
    fn log(&mut self, msg: &str) {
        self.update(|v| v.status = s!(msg));
    }
    fn tier_started(&mut self, tier: Tier) {
        self.update(|v| {
            v.status = s!(tier.notice());
            v.notices.push(s!(tier.notice()));
        });
    }
    fn tier_done(&mut self, _tier: Tier, _found: usize) {
        self.done += 1;
        let frac = if self.total == 0 { 1.0 } else { self.done as f32 / self.total as f32 };
        self.update(|v| v.fraction = frac);
    }
    fn finish(&mut self) {
        self.update(|v| v.fraction = 1.0);
    }
}
