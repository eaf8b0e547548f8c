//! DOM Interop Helpers
//!
//! The blocking alert wrapper; input focus is handled inline via NodeRef.

/// Blocking user-facing warning
pub fn alert(message: &str) {
    if let Some(win) = web_sys::window() {
        let _ = win.alert_with_message(message);
    }
}
