// src/progress.rs
use crate::data::Direction;

/// Lightweight progress reporting for a crawl.
/// Frontends (CLI) implement this to surface status to users.
pub trait Progress {
    /// Called when a direction starts, with its number of letter pages.
    fn begin(&mut self, _direction: Direction, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One letter page fetched and parsed.
    fn page_done(&mut self, _url: &str, _words: usize) {}

    /// A letter page failed; the direction is about to abort.
    fn page_failed(&mut self, _url: &str) {}

    /// Called when a direction ends, successful or not.
    fn finish(&mut self, _direction: Direction) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
