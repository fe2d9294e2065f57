//! Window History
//!
//! Keeps the address bar in step with the visible screen.

use wasm_bindgen::JsValue;

use crate::models::Screen;

/// Screen matching the current location
pub fn current_screen() -> Screen {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .map(|path| Screen::from_path(&path))
        .unwrap_or(Screen::List)
}

/// Push a history entry for `screen`
pub fn push_screen(screen: Screen) {
    let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
        return;
    };
    if let Err(e) = history.push_state_with_url(&JsValue::NULL, "", Some(screen.path())) {
        log::warn!("[WINDOW] pushState failed: {:?}", e);
    }
}

/// Rewrite the current entry (`/` becomes `/cliente/list`)
pub fn replace_screen(screen: Screen) {
    let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
        return;
    };
    if let Err(e) = history.replace_state_with_url(&JsValue::NULL, "", Some(screen.path())) {
        log::warn!("[WINDOW] replaceState failed: {:?}", e);
    }
}
