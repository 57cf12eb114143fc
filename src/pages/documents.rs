//! Documents page: full inventory with client-side filters and actions.

use leptos::prelude::*;

use crate::components::document_card::DocumentCard;
#[cfg(feature = "csr")]
use crate::components::toast_tray::notify;
use crate::state::documents::DocumentsState;
use crate::state::ui::UiState;
#[cfg(feature = "csr")]
use crate::state::ui::ToastKind;
use crate::util::standards::COMPLIANCE_STANDARDS;

/// Full document inventory with standard/status filters.
#[component]
pub fn DocumentsPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let docs = RwSignal::new(DocumentsState::default());
    let standard_filter = RwSignal::new(String::new());
    let status_filter = RwSignal::new(String::new());

    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get() {
            return;
        }
        requested.set(true);
        load_documents(docs, ui);
    });

    let visible = move || {
        let state = docs.get();
        let by_standard = standard_filter.get();
        let by_status = status_filter.get();
        state
            .items
            .into_iter()
            .filter(|d| by_standard.is_empty() || d.standard == by_standard)
            .filter(|d| by_status.is_empty() || d.status == by_status)
            .collect::<Vec<_>>()
    };

    let statuses = move || {
        let mut seen: Vec<String> = Vec::new();
        for doc in docs.get().items {
            if !seen.contains(&doc.status) {
                seen.push(doc.status);
            }
        }
        seen
    };

    let on_download = Callback::new(move |id: i64| {
        #[cfg(feature = "csr")]
        {
            let Some(doc) = docs.get_untracked().items.iter().find(|d| d.id == id).cloned() else {
                return;
            };
            leptos::task::spawn_local(async move {
                match crate::net::documents::download_document(id).await {
                    Ok(bytes) => crate::util::download::save_blob(&bytes, &doc.file_type, &doc.file_name),
                    Err(error) => notify(ui, ToastKind::Error, format!("Download failed: {error}")),
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        let _ = id;
    });

    let on_analyze = Callback::new(move |id: i64| {
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::documents::analyze_stored_document(id).await {
                Ok(updated) => {
                    docs.update(|s| {
                        if let Some(slot) = s.items.iter_mut().find(|d| d.id == updated.id) {
                            *slot = updated;
                        }
                    });
                    notify(ui, ToastKind::Success, "Analysis started");
                }
                Err(error) => notify(ui, ToastKind::Error, format!("Analysis failed: {error}")),
            }
        });
        #[cfg(not(feature = "csr"))]
        let _ = id;
    });

    let on_delete = Callback::new(move |id: i64| {
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::documents::delete_document(id).await {
                Ok(()) => {
                    docs.update(|s| s.items.retain(|d| d.id != id));
                    notify(ui, ToastKind::Info, "Document deleted");
                }
                Err(error) => notify(ui, ToastKind::Error, format!("Delete failed: {error}")),
            }
        });
        #[cfg(not(feature = "csr"))]
        let _ = id;
    });

    view! {
        <div class="documents-page">
            <header class="page-header">
                <h1>"Documents"</h1>
                <div class="documents-page__filters">
                    <select
                        prop:value=move || standard_filter.get()
                        on:change=move |ev| standard_filter.set(event_target_value(&ev))
                    >
                        <option value="">"All standards"</option>
                        {COMPLIANCE_STANDARDS
                            .iter()
                            .map(|option| {
                                view! { <option value=option.value>{option.label}</option> }
                            })
                            .collect::<Vec<_>>()}
                    </select>
                    <select
                        prop:value=move || status_filter.get()
                        on:change=move |ev| status_filter.set(event_target_value(&ev))
                    >
                        <option value="">"All statuses"</option>
                        {move || {
                            statuses()
                                .into_iter()
                                .map(|status| {
                                    view! { <option value=status.clone()>{status.clone()}</option> }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </select>
                </div>
            </header>

            <Show when=move || docs.get().error.is_some()>
                <p class="page-error">{move || docs.get().error.unwrap_or_default()}</p>
            </Show>

            <Show
                when=move || !docs.get().loading
                fallback=move || view! { <p>"Loading documents..."</p> }
            >
                <div class="documents-page__grid">
                    {move || {
                        let items = visible();
                        if items.is_empty() {
                            return view! { <p class="documents-page__empty">"No documents match."</p> }
                                .into_any();
                        }
                        items
                            .into_iter()
                            .map(|document| {
                                view! {
                                    <DocumentCard
                                        document=document
                                        on_download=on_download
                                        on_analyze=on_analyze
                                        on_delete=on_delete
                                    />
                                }
                            })
                            .collect::<Vec<_>>()
                            .into_any()
                    }}
                </div>
            </Show>
        </div>
    }
}

fn load_documents(docs: RwSignal<DocumentsState>, ui: RwSignal<UiState>) {
    docs.update(|s| s.loading = true);
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        match crate::net::documents::fetch_documents().await {
            Ok(items) => docs.update(|s| {
                s.items = items;
                s.loading = false;
                s.error = None;
            }),
            Err(error) => {
                log::warn!("document list unavailable: {error}");
                docs.update(|s| {
                    s.loading = false;
                    s.error = Some(error.to_string());
                });
                notify(ui, ToastKind::Error, "Could not load documents");
            }
        }
    });
    #[cfg(not(feature = "csr"))]
    let _ = ui;
}
