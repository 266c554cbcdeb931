//! Deduplicated warnings on stderr.
//!
//! A scene is usually redrawn every frame, so the same misconfiguration
//! would otherwise be reported every frame. Each distinct component and
//! message pair is printed once until [`clear_warnings`] is called.

use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

use owo_colors::OwoColorize;

/// The set of warnings printed so far. A panic while holding the lock cannot
/// leave the set inconsistent, so poisoning is ignored.
fn printed() -> MutexGuard<'static, HashSet<String>> {
    static PRINTED: OnceLock<Mutex<HashSet<String>>> = OnceLock::new();
    PRINTED
        .get_or_init(Mutex::default)
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
}

fn key(component: &str, message: &str) -> String {
    format!("{component}\u{0}{message}")
}

/// Print `message` tagged with `component`, once.
///
/// # Example
/// ```ignore
/// warn_once("style", "'font' has no effect on box elements");
/// ```
pub fn warn_once(component: &str, message: &str) {
    if printed().insert(key(component, message)) {
        eprintln!(
            "{} {message}",
            format!("[trellis {component}] ⚠").yellow().bold()
        );
    }
}

/// True if `warn_once` has printed this exact warning since the last clear.
#[must_use]
pub fn was_warned(component: &str, message: &str) -> bool {
    printed().contains(&key(component, message))
}

/// Forget every printed warning, e.g. when a new scene replaces the old one.
pub fn clear_warnings() {
    printed().clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warn_once_records_message() {
        warn_once("test", "recorded once");
        warn_once("test", "recorded once");
        assert!(was_warned("test", "recorded once"));
        assert!(!was_warned("test", "never printed"));
        assert!(!was_warned("other", "recorded once"));
    }
}
