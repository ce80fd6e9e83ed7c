// src/progress.rs
//! Progress observation for the two batch phases
//!
//! Both the store read and the database write report a plain
//! `(done, total)` counter after every entry. There is no backpressure
//! and no cancellation; interrupting the process aborts the whole run.

/// Observer for `(done, total)` counters.
///
/// Any `FnMut(usize, usize)` closure is an observer, so callers can
/// subscribe with an inline closure:
///
/// ```no_run
/// use pass2kdbx::StoreReader;
///
/// let reader = StoreReader::new();
/// let entries = reader.read_all(&mut |done: usize, total: usize| {
///     eprintln!("{done}/{total}");
/// });
/// ```
pub trait Progress {
    fn update(&mut self, done: usize, total: usize);
}

impl<F: FnMut(usize, usize)> Progress for F {
    fn update(&mut self, done: usize, total: usize) {
        self(done, total)
    }
}

/// Observer that drops every update, for callers without a UI.
pub fn discard() -> impl Progress {
    |_done: usize, _total: usize| {}
}
