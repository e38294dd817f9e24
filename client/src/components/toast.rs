//! Toast host: renders the transient notification queue.

use leptos::prelude::*;

use crate::state::toast::{Toast, ToastState};

/// How long a toast stays on screen before auto-dismissing.
#[cfg(feature = "hydrate")]
const TOAST_DISMISS_MS: u32 = 4000;

/// Push a toast and schedule its auto-dismissal.
pub fn show_toast(toasts: RwSignal<ToastState>, title: &str, message: &str) {
    let id = uuid::Uuid::new_v4().to_string();
    toasts.update(|state| {
        state.push(Toast { id: id.clone(), title: title.to_owned(), message: message.to_owned() });
    });

    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(TOAST_DISMISS_MS).await;
            toasts.update(|state| state.dismiss(&id));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}

/// Fixed overlay listing active toasts, newest at the bottom.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-host">
            {move || {
                toasts
                    .get()
                    .toasts
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id.clone();
                        view! {
                            <div class="toast">
                                <div class="toast__body">
                                    <div class="toast__title">{toast.title}</div>
                                    <div class="toast__message">{toast.message}</div>
                                </div>
                                <button
                                    class="toast__dismiss"
                                    on:click=move |_| toasts.update(|state| state.dismiss(&id))
                                >
                                    "\u{d7}"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
