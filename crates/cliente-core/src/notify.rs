//! User Feedback Collaborators
//!
//! Toasts and confirmation dialogs are owned by the UI; the coordinator
//! only talks to these traits.

use std::time::Duration;

/// Default time a toast stays on screen
pub const DEFAULT_AUTO_CLOSE: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

/// Transient, user-dismissible notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
    /// How long the notice stays unless dismissed earlier
    pub auto_close: Duration,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Info, message)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Error, message)
    }

    fn new(level: NoticeLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            auto_close: DEFAULT_AUTO_CLOSE,
        }
    }
}

/// Shows notices to the user (toast container in the app)
pub trait Notifier {
    fn notify(&self, notice: Notice);
}

/// Blocking yes/no question asked before destructive calls
pub trait Confirm {
    fn confirm(&self, message: &str) -> bool;
}

// ========================
// User-facing messages
// ========================

pub mod messages {
    pub const LOADING: &str = "Cargando registros...";
    pub const EMPTY_LIST: &str = "No hay registros para ver";
    pub const LOAD_FAILED: &str = "Error al cargar los registros";
    pub const NO_SELECTION: &str = "No se ha seleccionado ningún cliente";
    pub const CONFIRM_UPDATE: &str = "¿Estás seguro de que deseas actualizar el cliente?";
    pub const UPDATED: &str = "Cliente actualizado exitosamente";
    pub const UPDATE_FAILED: &str = "Error al actualizar el cliente";
    pub const CONFIRM_DELETE: &str = "¿Está seguro de que desea eliminar este cliente?";
    pub const DELETED: &str = "Cliente eliminado exitosamente";
    pub const DELETE_FAILED: &str = "Error al eliminar el cliente";
    pub const CREATED: &str = "Formulario enviado";
    pub const CREATE_FAILED: &str = "Error al enviar el formulario";
}
