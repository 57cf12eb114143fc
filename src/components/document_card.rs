//! Document summary card with view/download/analyze/delete actions.

use leptos::prelude::*;

use crate::net::types::AuditDocument;
use crate::util::format::{format_date, format_file_size, humanize_label};
use crate::util::standards::standard_label;

/// One document in the inventory grid.
#[component]
pub fn DocumentCard(
    document: AuditDocument,
    on_download: Callback<i64>,
    on_analyze: Callback<i64>,
    on_delete: Callback<i64>,
) -> impl IntoView {
    let id = document.id;
    let status_class = format!(
        "document-card__status document-card__status--{}",
        document.status.to_ascii_lowercase()
    );

    view! {
        <div class="document-card">
            <div class="document-card__header">
                <a class="document-card__name" href=format!("/document/{id}")>
                    {document.file_name.clone()}
                </a>
                <span class=status_class>{humanize_label(&document.status)}</span>
            </div>
            <p class="document-card__meta">
                {standard_label(&document.standard).to_owned()}
                " · "
                {format_file_size(document.file_size)}
                " · "
                {format_date(&document.created_at).to_owned()}
            </p>
            <div class="document-card__actions">
                <a class="btn" href=format!("/document/{id}")>
                    "View"
                </a>
                <button class="btn" on:click=move |_| on_download.run(id)>
                    "Download"
                </button>
                <button class="btn" on:click=move |_| on_analyze.run(id)>
                    "Analyze"
                </button>
                <a class="btn" href=format!("/risk/{id}")>
                    "Risk"
                </a>
                <button class="btn btn--danger" on:click=move |_| on_delete.run(id)>
                    "Delete"
                </button>
            </div>
        </div>
    }
}
