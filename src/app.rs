//! Cliente Admin App
//!
//! Root component: provides the store and context, then shows either the
//! list screen or the create screen.

use leptos::prelude::*;
use reactive_stores::Store;
use rolling_logger::LogBuffer;

use crate::commands;
use crate::context::AppContext;
use crate::components::{ClienteListPage, LogPanel, NewClientePage, ToastContainer};
use crate::models::Screen;
use crate::store::AppState;

#[component]
pub fn App(
    /// Recent log lines, when the logger was installed
    log_buffer: Option<LogBuffer>,
) -> impl IntoView {
    let store = Store::new(AppState::new());
    provide_context(store);
    if let Some(buffer) = log_buffer {
        provide_context(buffer);
    }

    let initial = commands::current_screen();
    commands::replace_screen(initial);
    let screen = signal(initial);

    let ctx = AppContext::new(store, screen, commands::build_coordinator(store));
    provide_context(ctx);

    // Back/forward buttons
    let _ = window_event_listener(leptos::ev::popstate, move |_| ctx.sync_with_location());

    view! {
        <div class="app-layout">
            {move || match ctx.screen.get() {
                Screen::List => view! { <ClienteListPage /> }.into_any(),
                Screen::Create => view! { <NewClientePage /> }.into_any(),
            }}
            <LogPanel />
            <ToastContainer />
        </div>
    }
}
