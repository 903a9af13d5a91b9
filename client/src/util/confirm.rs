//! Interactive confirmation gate for destructive actions.

/// Ask the user to confirm via `window.confirm`. Outside the browser, or if
/// the dialog cannot be shown, the answer is "no".
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
        false
    }
}
