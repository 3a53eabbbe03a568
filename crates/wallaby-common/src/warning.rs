//! Non-fatal diagnostics with colored terminal output.
//!
//! Provides deduplication to avoid spamming the same warning multiple times.
//! Used by the selector crate to flag suspicious (but accepted) input, such
//! as part tokens that are not valid CSS identifiers.

use std::collections::HashSet;
use std::sync::{LazyLock, Mutex};

/// ANSI color codes for terminal output
const YELLOW: &str = "\x1b[33m";
const RESET: &str = "\x1b[0m";

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: LazyLock<Mutex<HashSet<String>>> = LazyLock::new(|| Mutex::new(HashSet::new()));

/// Warn about suspicious input (prints once per unique message)
///
/// # Example
/// ```ignore
/// warn_once("CSS", "class name 'foo bar' is not a valid CSS identifier");
/// ```
///
/// # Panics
/// Panics if the global warning set mutex is poisoned.
pub fn warn_once(component: &str, message: &str) {
    let first_time = WARNED
        .lock()
        .unwrap()
        .insert(format!("[{component}] {message}"));

    if first_time {
        eprintln!("{YELLOW}[wallaby {component}] ⚠ {message}{RESET}");
    }
}

/// Clear all recorded warnings (call between independent runs or tests)
///
/// # Panics
/// Panics if the global warning set mutex is poisoned.
pub fn clear_warnings() {
    WARNED.lock().unwrap().clear();
}

/// Report whether a warning with this exact component/message pair has
/// already been emitted.
///
/// # Panics
/// Panics if the global warning set mutex is poisoned.
#[must_use]
pub fn has_warned(component: &str, message: &str) -> bool {
    WARNED
        .lock()
        .unwrap()
        .contains(&format!("[{component}] {message}"))
}
