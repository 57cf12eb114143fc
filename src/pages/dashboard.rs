//! Dashboard page: inventory stats, upload form, and recent documents.

use leptos::prelude::*;

use crate::components::document_upload::DocumentUpload;
#[cfg(feature = "csr")]
use crate::components::toast_tray::notify;
use crate::state::documents::DocumentsState;
use crate::state::session::Session;
use crate::state::ui::UiState;
#[cfg(feature = "csr")]
use crate::state::ui::ToastKind;
use crate::util::format::{format_date, format_file_size};
use crate::util::standards::standard_label;

/// Landing route with upload and at-a-glance inventory stats.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let session = expect_context::<RwSignal<Session>>();
    let docs = RwSignal::new(DocumentsState::default());

    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get() {
            return;
        }
        requested.set(true);
        load_recent(docs, ui);
    });

    let on_uploaded = Callback::new(move |()| load_recent(docs, ui));

    let stat = move |label: &'static str, value: String| {
        view! {
            <div class="stat-card">
                <span class="stat-card__value">{value}</span>
                <span class="stat-card__label">{label}</span>
            </div>
        }
    };

    view! {
        <div class="dashboard-page">
            <header class="page-header">
                <h1>"Compliance Dashboard"</h1>
                <label class="dashboard-page__identity">
                    "Uploading as"
                    <input
                        type="text"
                        prop:value=move || session.get().name
                        on:change=move |ev| {
                            session.update(|s| s.name = event_target_value(&ev));
                        }
                    />
                </label>
            </header>

            <div class="dashboard-page__stats">
                {move || {
                    let state = docs.get();
                    vec![
                        stat("Documents", state.items.len().to_string()),
                        stat("Uploaded", state.status_count("UPLOADED").to_string()),
                        stat("Analyzed", state.status_count("ANALYZED").to_string()),
                    ]
                }}
            </div>

            <section class="dashboard-page__upload">
                <h2>"Upload a document"</h2>
                <DocumentUpload on_uploaded=on_uploaded/>
            </section>

            <section class="dashboard-page__recent">
                <h2>"Recent documents"</h2>
                <Show when=move || docs.get().error.is_some()>
                    <p class="page-error">{move || docs.get().error.unwrap_or_default()}</p>
                </Show>
                <Show
                    when=move || !docs.get().loading
                    fallback=move || view! { <p>"Loading documents..."</p> }
                >
                    <table class="document-table">
                        <thead>
                            <tr>
                                <th>"Name"</th>
                                <th>"Standard"</th>
                                <th>"Size"</th>
                                <th>"Uploaded"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                docs.get()
                                    .items
                                    .into_iter()
                                    .map(|doc| {
                                        view! {
                                            <tr>
                                                <td>
                                                    <a href=format!("/document/{}", doc.id)>{doc.file_name.clone()}</a>
                                                </td>
                                                <td>{standard_label(&doc.standard).to_owned()}</td>
                                                <td>{format_file_size(doc.file_size)}</td>
                                                <td>{format_date(&doc.created_at).to_owned()}</td>
                                            </tr>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </tbody>
                    </table>
                </Show>
            </section>
        </div>
    }
}

fn load_recent(docs: RwSignal<DocumentsState>, ui: RwSignal<UiState>) {
    docs.update(|s| s.loading = true);
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        match crate::net::documents::fetch_recent_documents().await {
            Ok(items) => docs.update(|s| {
                s.items = items;
                s.loading = false;
                s.error = None;
            }),
            Err(error) => {
                log::warn!("recent documents unavailable: {error}");
                docs.update(|s| {
                    s.loading = false;
                    s.error = Some(error.to_string());
                });
                notify(ui, ToastKind::Error, "Could not load recent documents");
            }
        }
    });
    #[cfg(not(feature = "csr"))]
    let _ = ui;
}
