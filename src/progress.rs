// src/progress.rs
use crate::data::Tier;

/// Observer for a scrape in flight. Frontends (GUI/CLI) implement this to surface status to users.
/// The pipeline never depends on what an implementation does with the calls.
pub trait Progress {
    /// Called at the start with the number of steps that may run.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// A tier is about to run. Called once per tier actually attempted.
    fn tier_started(&mut self, _tier: Tier) {}

    /// A tier returned; `found` is its record count.
    fn tier_done(&mut self, _tier: Tier, _found: usize) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
