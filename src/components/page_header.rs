//! Page Header Component
//!
//! Dark banner with the page title and a link to the other screen.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::Screen;

#[component]
pub fn PageHeader(
    title: &'static str,
    link_label: &'static str,
    target: Screen,
) -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <header class="page-header">
            <h1 class="title">{title}</h1>
            <a
                class="nav-link"
                href=target.path()
                on:click=move |ev| {
                    ev.prevent_default();
                    ctx.navigate(target);
                }
            >
                "+ " {link_label}
            </a>
        </header>
    }
}
