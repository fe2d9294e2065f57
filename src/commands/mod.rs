//! Browser Command Wrappers
//!
//! Bindings between the UI and cliente-core, organized by concern.

mod cliente;
mod dialog;
mod notify;
mod window;

// Re-export all public items
pub use cliente::*;
pub use dialog::*;
pub use notify::*;
pub use window::*;
