//! Frontend Models
//!
//! Record types come from cliente-core; this adds the UI-only ones.

use cliente_core::Notice;

pub use cliente_core::{Cliente, ClienteDraft, ClienteId, DraftField};

/// A notice currently on screen
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub notice: Notice,
}

/// Which page is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    List,
    Create,
}

impl Screen {
    pub fn path(&self) -> &'static str {
        match self {
            Screen::List => "/cliente/list",
            Screen::Create => "/cliente/create",
        }
    }

    /// Unknown paths (and `/`) land on the list
    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "/cliente/create" => Screen::Create,
            _ => Screen::List,
        }
    }
}
