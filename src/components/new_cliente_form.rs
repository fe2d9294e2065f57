//! New Cliente Form Component
//!
//! Create screen. Field errors show once a field was touched, or all of
//! them after a submit attempt. The form resets after a successful save.

use leptos::prelude::*;
use leptos::task::spawn_local;

use cliente_core::validation;
use crate::commands;
use crate::components::PageHeader;
use crate::context::use_app_context;
use crate::models::{ClienteDraft, DraftField, Screen};

/// Input attributes per field: (type, inputmode)
fn input_kind(field: DraftField) -> (&'static str, &'static str) {
    match field {
        DraftField::NumeroDocumento => ("text", "numeric"),
        DraftField::Email => ("email", "email"),
        DraftField::FechaNacimiento => ("date", "none"),
        DraftField::NombreCompleto => ("text", "text"),
    }
}

#[component]
pub fn NewClientePage() -> impl IntoView {
    let ctx = use_app_context();

    let (draft, set_draft) = signal(ClienteDraft::default());
    let (touched, set_touched) = signal(Vec::<DraftField>::new());
    let (submitted, set_submitted) = signal(false);
    let (saving, set_saving) = signal(false);

    let errors = Memo::new(move |_| validation::validate_new(&draft.get()).err());

    let error_for = move |field: DraftField| {
        let visible = submitted.get() || touched.with(|t| t.contains(&field));
        if !visible {
            return None;
        }
        errors.with(|e| e.as_ref().and_then(|e| e.get(field).map(str::to_string)))
    };

    let reset = move || {
        set_draft.set(ClienteDraft::default());
        set_touched.set(Vec::new());
        set_submitted.set(false);
    };

    // Token for the create call
    Effect::new(move |_| {
        let coord = ctx.coordinator();
        spawn_local(async move {
            commands::start_session(&coord).await;
        });
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_submitted.set(true);
        if errors.get_untracked().is_some() || saving.get_untracked() {
            return;
        }

        let values = draft.get_untracked();
        let coord = ctx.coordinator();
        set_saving.set(true);
        spawn_local(async move {
            if commands::create_cliente(&coord, &values).await.is_ok() {
                reset();
            }
            set_saving.set(false);
        });
    };

    view! {
        <PageHeader title="Nuevo cliente" link_label="Listado de cliente" target=Screen::List />
        <main class="main-content">
            <section class="card">
                <form class="new-cliente-form" on:submit=on_submit>
                    {DraftField::ALL
                        .into_iter()
                        .map(|field| {
                            let (input_type, input_mode) = input_kind(field);
                            view! {
                                <label class="field">
                                    <span>{field.label()}</span>
                                    <input
                                        type=input_type
                                        inputmode=input_mode
                                        name=field.as_str()
                                        id=field.as_str()
                                        class=move || if error_for(field).is_some() { "invalid" } else { "" }
                                        prop:value=move || draft.with(|d| d.get(field).to_string())
                                        on:input=move |ev| {
                                            let value = event_target_value(&ev);
                                            set_draft.update(|d| d.set(field, value));
                                        }
                                        on:blur=move |_| {
                                            set_touched.update(|t| {
                                                if !t.contains(&field) {
                                                    t.push(field);
                                                }
                                            });
                                        }
                                    />
                                    {move || error_for(field).map(|msg| view! { <small class="field-error">{msg}</small> })}
                                </label>
                            }
                        })
                        .collect_view()}

                    <hr />
                    <div class="form-actions">
                        <button
                            type="button"
                            class="cancel-btn"
                            on:click=move |_| {
                                reset();
                                ctx.navigate(Screen::List);
                            }
                        >
                            "Cancelar"
                        </button>
                        <button type="submit" class="primary-btn" disabled=move || saving.get()>
                            "Guardar"
                        </button>
                    </div>
                </form>
            </section>
        </main>
    }
}
