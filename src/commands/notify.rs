//! Toast Notifier
//!
//! Pushes notices into the app store and schedules their auto-dismiss.

use std::time::Duration;

use gloo_timers::future::TimeoutFuture;
use leptos::task::spawn_local;

use cliente_core::{Notice, NoticeLevel, Notifier};
use crate::store::{store_dismiss_toast, store_push_toast, AppStore};

#[derive(Clone, Copy)]
pub struct ToastNotifier {
    store: AppStore,
}

impl ToastNotifier {
    pub fn new(store: AppStore) -> Self {
        Self { store }
    }
}

impl Notifier for ToastNotifier {
    fn notify(&self, notice: Notice) {
        match notice.level {
            NoticeLevel::Error => log::warn!("[TOAST] {}", notice.message),
            _ => log::info!("[TOAST] {}", notice.message),
        }

        let auto_close = notice.auto_close;
        let id = store_push_toast(&self.store, notice);

        let store = self.store;
        spawn_local(async move {
            TimeoutFuture::new(millis(auto_close)).await;
            store_dismiss_toast(&store, id);
        });
    }
}

fn millis(delay: Duration) -> u32 {
    u32::try_from(delay.as_millis()).unwrap_or(u32::MAX)
}
