//! Depth-indented stderr tracing, compiled in with the `layout-trace` feature.

use std::cell::Cell;

thread_local! {
    static TRACE_DEPTH: Cell<usize> = const { Cell::new(0) };
}

/// Decrements the trace depth on every return path.
pub(crate) struct DepthGuard;

impl Drop for DepthGuard {
    fn drop(&mut self) {
        TRACE_DEPTH.with(|d| d.set(d.get().saturating_sub(1)));
    }
}

/// Print one trace line at the current depth and descend one level.
pub(crate) fn enter(tag: &str, message: &str) -> DepthGuard {
    let depth = TRACE_DEPTH.with(|d| {
        let current = d.get();
        d.set(current + 1);
        current
    });
    eprintln!("{:indent$}[{tag}] {message}", "", indent = depth * 2);
    DepthGuard
}

/// Print one trace line at the current depth.
pub(crate) fn note(tag: &str, message: &str) {
    let depth = TRACE_DEPTH.with(Cell::get);
    eprintln!("{:indent$}[{tag}] {message}", "", indent = depth * 2);
}
