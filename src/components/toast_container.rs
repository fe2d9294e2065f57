//! Toast Container Component
//!
//! Bottom-left stack of notices; click one to dismiss it.

use leptos::prelude::*;

use cliente_core::NoticeLevel;
use crate::store::{store_dismiss_toast, store_toasts, use_app_store};

#[component]
pub fn ToastContainer() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="toast-container">
            <For
                each=move || store_toasts(&store)
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let class = match toast.notice.level {
                        NoticeLevel::Info => "toast info",
                        NoticeLevel::Success => "toast success",
                        NoticeLevel::Error => "toast error",
                    };
                    view! {
                        <div class=class role="alert" on:click=move |_| store_dismiss_toast(&store, id)>
                            {toast.notice.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
