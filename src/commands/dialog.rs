//! Blocking confirmation dialog (`window.confirm`)

use cliente_core::Confirm;

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserConfirm;

impl Confirm for BrowserConfirm {
    fn confirm(&self, message: &str) -> bool {
        match web_sys::window() {
            Some(window) => window.confirm_with_message(message).unwrap_or(false),
            None => {
                log::warn!("[DIALOG] no window, treating confirmation as declined");
                false
            }
        }
    }
}
