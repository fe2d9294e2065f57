//! Edit Modal Component
//!
//! Shown while a record is selected for editing. Inputs edit the
//! selection locally; "Actualizar" asks for confirmation and sends it.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::context::use_app_context;
use crate::models::DraftField;
use crate::store::{store_clear_selection, store_edit_selected, store_selected};

#[component]
pub fn EditModal() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let selected = Memo::new(move |_| store_selected(&store));

    let on_update = move |_| {
        let coord = ctx.coordinator();
        spawn_local(async move {
            let _ = commands::update_cliente(&coord, store).await;
        });
    };

    view! {
        <Show when=move || selected.with(Option::is_some)>
            <div class="modal-backdrop" on:click=move |_| store_clear_selection(&store)>
                <div class="modal" on:click=|ev| ev.stop_propagation()>
                    <h2>"Editar cliente"</h2>
                    {DraftField::ALL
                        .into_iter()
                        .map(|field| {
                            let value = move || {
                                selected
                                    .with(|s| s.as_ref().map(|c| c.draft().get(field).to_string()))
                                    .unwrap_or_default()
                            };
                            view! {
                                <label class="field">
                                    <span>{field.label()}</span>
                                    <input
                                        type="text"
                                        name=field.as_str()
                                        prop:value=value
                                        on:input=move |ev| store_edit_selected(&store, field, event_target_value(&ev))
                                    />
                                </label>
                            }
                        })
                        .collect_view()}
                    <div class="modal-actions">
                        <button type="button" class="cancel-btn" on:click=move |_| store_clear_selection(&store)>
                            "Cancelar"
                        </button>
                        <button type="button" class="primary-btn" on:click=on_update>
                            "Actualizar"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
