//! Log Panel Component
//!
//! Collapsible footer listing the newest lines kept by the in-memory
//! logger. Renders nothing when no logger buffer was provided.

use leptos::prelude::*;
use log::Level;
use rolling_logger::{LogBuffer, LogLine};

/// Lines shown when the panel opens
const SHOWN_LINES: usize = 50;

fn level_class(level: Level) -> &'static str {
    match level {
        Level::Error => "log-line error",
        Level::Warn => "log-line warn",
        _ => "log-line",
    }
}

#[component]
pub fn LogPanel() -> impl IntoView {
    let Some(buffer) = use_context::<LogBuffer>() else {
        return ().into_any();
    };
    let buffer = StoredValue::new(buffer);

    let (open, set_open) = signal(false);
    let (lines, set_lines) = signal(Vec::<LogLine>::new());

    let refresh = move || set_lines.set(buffer.with_value(|b| b.recent(SHOWN_LINES)));

    let toggle = move |_| {
        if !open.get_untracked() {
            refresh();
        }
        set_open.update(|o| *o = !*o);
    };

    let clear = move |_| {
        buffer.with_value(LogBuffer::clear);
        set_lines.set(Vec::new());
    };

    view! {
        <footer class="log-panel">
            <button class="log-toggle" on:click=toggle>
                {move || if open.get() { "Ocultar registro" } else { "Ver registro" }}
            </button>
            <Show when=move || open.get()>
                <div class="log-actions">
                    <button on:click=move |_| refresh()>"Refrescar"</button>
                    <button on:click=clear>"Limpiar"</button>
                </div>
                <div class="log-lines">
                    {move || {
                        lines
                            .get()
                            .into_iter()
                            .map(|line| view! { <div class=level_class(line.level)>{line.text}</div> })
                            .collect_view()
                    }}
                </div>
            </Show>
        </footer>
    }
    .into_any()
}
