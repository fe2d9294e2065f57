//! Cliente Row Component
//!
//! One record in the list: avatar, name, email, dates and actions.

use leptos::prelude::*;
use leptos::task::spawn_local;

use cliente_core::display_date;
use crate::commands;
use crate::context::use_app_context;
use crate::models::Cliente;

#[component]
pub fn ClienteRow(cliente: Cliente) -> impl IntoView {
    let ctx = use_app_context();

    let id = cliente.id;
    let initials = cliente.initials();
    let nacimiento = display_date(&cliente.fecha_nacimiento);
    let creacion = cliente
        .fecha_creacion
        .as_deref()
        .map(display_date)
        .unwrap_or_default();

    let on_edit = move |_| {
        let coord = ctx.coordinator();
        spawn_local(async move {
            let _ = commands::edit_cliente(&coord, ctx.store, id).await;
        });
    };

    let on_delete = move |_| {
        let coord = ctx.coordinator();
        spawn_local(async move {
            let _ = commands::delete_cliente(&coord, ctx.store, id).await;
        });
    };

    view! {
        <div class="cliente-row" data-id=id.to_string()>
            <div class="cliente-main">
                {match cliente.avatar_url.clone() {
                    Some(url) => view! { <img class="avatar" src=url alt="Avatar" /> }.into_any(),
                    None => view! { <div class="avatar">{initials}</div> }.into_any(),
                }}
                <div>
                    <div class="cliente-name">{cliente.nombre_completo.clone()}</div>
                    <div class="cliente-email">{cliente.email.clone()}</div>
                </div>
            </div>
            <div class="cliente-side">
                <div class="cliente-dates">
                    <span>{nacimiento}</span>
                    <span class="sep">"|"</span>
                    <span>{creacion}</span>
                </div>
                <div class="cliente-actions">
                    <button class="edit-btn" title="Editar" on:click=on_edit>"✎"</button>
                    <button class="delete-btn" title="Eliminar" on:click=on_delete>"×"</button>
                </div>
            </div>
        </div>
    }
}
