//! UI Components
//!
//! Leptos components for the list and create screens.

mod cliente_list;
mod cliente_row;
mod edit_modal;
mod log_panel;
mod new_cliente_form;
mod page_header;
mod toast_container;

pub use cliente_list::ClienteListPage;
pub use cliente_row::ClienteRow;
pub use edit_modal::EditModal;
pub use log_panel::LogPanel;
pub use new_cliente_form::NewClientePage;
pub use page_header::PageHeader;
pub use toast_container::ToastContainer;
