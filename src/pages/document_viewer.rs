//! Document detail page: metadata, extracted text, inline view/download.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

#[cfg(feature = "csr")]
use crate::components::toast_tray::notify;
use crate::net::types::{AuditDocument, Checklist};
use crate::state::checklists::{progress, progress_percent};
#[cfg(feature = "csr")]
use crate::state::ui::{ToastKind, UiState};
use crate::util::format::{format_date, format_file_size, humanize_label};
use crate::util::standards::standard_label;

/// Detail view for one stored document.
#[component]
pub fn DocumentViewerPage() -> impl IntoView {
    #[cfg(feature = "csr")]
    let ui = expect_context::<RwSignal<UiState>>();
    let params = use_params_map();
    let document = RwSignal::new(None::<AuditDocument>);
    let checklists = RwSignal::new(Vec::<Checklist>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    let document_id = move || params.get().get("id").and_then(|raw| raw.parse::<i64>().ok());

    let requested = RwSignal::new(None::<i64>);
    Effect::new(move || {
        let Some(id) = document_id() else {
            loading.set(false);
            error.set(Some("Invalid document id".to_owned()));
            return;
        };
        if requested.get() == Some(id) {
            return;
        }
        requested.set(Some(id));
        loading.set(true);

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::documents::fetch_document(id).await {
                Ok(doc) => {
                    document.set(Some(doc));
                    error.set(None);
                }
                Err(err) => {
                    log::warn!("document {id} unavailable: {err}");
                    error.set(Some(err.to_string()));
                }
            }
            loading.set(false);

            // Checklist history is supplementary; failures just leave it empty.
            if let Ok(items) = crate::net::checklists::fetch_checklists_for_document(id).await {
                checklists.set(items);
            }
        });
    });

    let on_open = move |_| {
        #[cfg(feature = "csr")]
        {
            let Some(doc) = document.get_untracked() else {
                return;
            };
            leptos::task::spawn_local(async move {
                match crate::net::documents::view_document(doc.id).await {
                    Ok(bytes) => crate::util::download::open_blob(&bytes, &doc.file_type),
                    Err(err) => notify(ui, ToastKind::Error, format!("View failed: {err}")),
                }
            });
        }
    };

    let on_download = move |_| {
        #[cfg(feature = "csr")]
        {
            let Some(doc) = document.get_untracked() else {
                return;
            };
            leptos::task::spawn_local(async move {
                match crate::net::documents::download_document(doc.id).await {
                    Ok(bytes) => crate::util::download::save_blob(&bytes, &doc.file_type, &doc.file_name),
                    Err(err) => notify(ui, ToastKind::Error, format!("Download failed: {err}")),
                }
            });
        }
    };

    view! {
        <div class="viewer-page">
            <Show when=move || loading.get()>
                <p>"Loading document..."</p>
            </Show>
            <Show when=move || error.get().is_some()>
                <p class="page-error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            {move || {
                document
                    .get()
                    .map(|doc| {
                        let risk_href = format!("/risk/{}", doc.id);
                        view! {
                            <header class="page-header">
                                <h1>{doc.file_name.clone()}</h1>
                                <span class="viewer-page__status">{humanize_label(&doc.status)}</span>
                            </header>
                            <p class="viewer-page__meta">
                                {standard_label(&doc.standard).to_owned()}
                                " · "
                                {format_file_size(doc.file_size)}
                                " · uploaded by "
                                {doc.uploaded_by.clone()}
                                " on "
                                {format_date(&doc.created_at).to_owned()}
                            </p>
                            <div class="viewer-page__actions">
                                <button class="btn btn--primary" on:click=on_open>
                                    "Open inline"
                                </button>
                                <button class="btn" on:click=on_download>
                                    "Download"
                                </button>
                                <a class="btn" href=risk_href>
                                    "Risk assessment"
                                </a>
                            </div>
                            <section class="viewer-page__text">
                                <h2>"Extracted text"</h2>
                                {match doc.extracted_text.clone() {
                                    Some(text) if !text.is_empty() => {
                                        view! { <pre class="viewer-page__extract">{text}</pre> }.into_any()
                                    }
                                    _ => {
                                        view! {
                                            <p class="viewer-page__empty">
                                                "No text extracted yet; run analysis first."
                                            </p>
                                        }
                                            .into_any()
                                    }
                                }}
                            </section>
                        }
                    })
            }}

            <Show when=move || !checklists.get().is_empty()>
                <section class="viewer-page__checklists">
                    <h2>"Checklists from this document"</h2>
                    {move || {
                        checklists
                            .get()
                            .into_iter()
                            .map(|checklist| {
                                let (completed, total) = progress(&checklist);
                                let percent = progress_percent(&checklist);
                                view! {
                                    <div class="risk-page__history-row">
                                        <span>{checklist.standard_name.clone()}</span>
                                        <span>{format!("{completed}/{total} · {percent}%")}</span>
                                        <span>{format_date(&checklist.created_at).to_owned()}</span>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </section>
            </Show>
        </div>
    }
}
