//! Toast notice tray and the shared `notify` helper.

use leptos::prelude::*;

use crate::state::ui::{ToastKind, UiState};

/// Push a toast and schedule its timed dismissal.
///
/// Manual dismissal through the tray stays available; dismissing an already
/// dismissed id is a no-op.
pub fn notify(ui: RwSignal<UiState>, kind: ToastKind, text: impl Into<String>) {
    let text = text.into();
    let mut id = 0;
    ui.update(|u| id = u.push_toast(kind, text));

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_secs(4)).await;
        ui.update(|u| u.dismiss_toast(id));
    });
    #[cfg(not(feature = "csr"))]
    let _ = id;
}

/// Fixed-position tray rendering the active toast notices.
#[component]
pub fn ToastTray() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <div class="toast-tray" aria-live="polite">
            {move || {
                ui.get()
                    .toasts
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id;
                        let kind_class = match toast.kind {
                            ToastKind::Info => "toast--info",
                            ToastKind::Success => "toast--success",
                            ToastKind::Error => "toast--error",
                        };
                        view! {
                            <div class=format!("toast {kind_class}")>
                                <span class="toast__text">{toast.text}</span>
                                <button
                                    class="toast__dismiss"
                                    on:click=move |_| ui.update(|u| u.dismiss_toast(id))
                                >
                                    "✕"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
