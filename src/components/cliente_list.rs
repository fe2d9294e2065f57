//! Cliente List Page
//!
//! Search box plus the filtered record list. Loads the collection when
//! the page mounts.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::{ClienteRow, EditModal, PageHeader};
use crate::context::use_app_context;
use crate::models::Screen;
use crate::store::{store_filtered, store_record_count, store_search, store_set_search};

#[component]
pub fn ClienteListPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    // Token first, then the full fetch
    Effect::new(move |_| {
        let coord = ctx.coordinator();
        spawn_local(async move {
            commands::start_session(&coord).await;
            let _ = commands::load_clientes(&coord, store).await;
        });
    });

    let filtered = Memo::new(move |_| store_filtered(&store));

    view! {
        <PageHeader title="Listado clientes" link_label="Nuevo cliente" target=Screen::Create />
        <main class="main-content">
            <section class="card list-card">
                <div class="search-row">
                    <input
                        type="text"
                        placeholder="Buscar por nombre"
                        prop:value=move || store_search(&store)
                        on:input=move |ev| store_set_search(&store, event_target_value(&ev))
                    />
                    <span class="search-icon">"🔍"</span>
                </div>

                <Show
                    when=move || !filtered.get().is_empty()
                    fallback=move || view! { <EmptyState /> }
                >
                    <For
                        each=move || filtered.get()
                        // Whole record as key: any field change re-renders the row
                        key=|cliente| cliente.clone()
                        children=move |cliente| view! { <ClienteRow cliente=cliente /> }
                    />
                </Show>

                <p class="item-count">
                    {move || format!("{} de {} clientes", filtered.get().len(), store_record_count(&store))}
                </p>
            </section>
        </main>
        <EditModal />
    }
}

#[component]
fn EmptyState() -> impl IntoView {
    let store = use_app_context().store;

    view! {
        <div class="empty-state">
            <h3>"No hay registros disponibles"</h3>
            {move || {
                let term = store_search(&store);
                (!term.is_empty()).then(|| view! {
                    <small>{format!("No se encontraron registros para la búsqueda: \"{}\"", term)}</small>
                })
            }}
        </div>
    }
}
