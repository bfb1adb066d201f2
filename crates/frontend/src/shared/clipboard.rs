//! Clipboard utilities for copying text to clipboard
//!
//! Uses the Web Clipboard API; the outcome is reported through a callback.

use wasm_bindgen_futures::spawn_local;

/// Copy text to the system clipboard and report whether it worked.
///
/// Browsers reject clipboard writes outside secure contexts and user gestures,
/// so callers must be ready for `false`.
pub fn copy_to_clipboard_with_result<F>(text: &str, on_done: F)
where
    F: FnOnce(bool) + 'static,
{
    let text = text.to_owned();
    spawn_local(async move {
        let copied = match web_sys::window() {
            Some(window) => {
                let clipboard = window.navigator().clipboard();
                wasm_bindgen_futures::JsFuture::from(clipboard.write_text(&text))
                    .await
                    .is_ok()
            }
            None => false,
        };
        on_done(copied);
    });
}
