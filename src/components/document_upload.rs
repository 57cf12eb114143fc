//! Document upload form: file picker, standard picker, submit.
//!
//! Validation (size cap, accepted types) runs before any request is built;
//! rejected files surface as toast notices without touching the network.

use leptos::prelude::*;

#[cfg(feature = "csr")]
use crate::components::toast_tray::notify;
#[cfg(feature = "csr")]
use crate::state::session::Session;
#[cfg(feature = "csr")]
use crate::state::ui::{ToastKind, UiState};
use crate::util::standards::COMPLIANCE_STANDARDS;

/// Upload form used by the dashboard and the documents page.
///
/// `on_uploaded` fires after a successful upload so the owner can refresh
/// its document list.
#[component]
pub fn DocumentUpload(on_uploaded: Callback<()>) -> impl IntoView {
    #[cfg(feature = "csr")]
    let ui = expect_context::<RwSignal<UiState>>();
    #[cfg(feature = "csr")]
    let session = expect_context::<RwSignal<Session>>();
    let standard = RwSignal::new("ISO_27001".to_owned());
    let busy = RwSignal::new(false);
    let file_ref = NodeRef::<leptos::html::Input>::new();

    let on_upload = move |_| {
        if busy.get() {
            return;
        }
        #[cfg(feature = "csr")]
        {
            let Some(input_el) = file_ref.get() else {
                return;
            };
            let Some(file) = input_el.files().and_then(|list| list.get(0)) else {
                notify(ui, ToastKind::Error, "Please select a document to upload");
                return;
            };
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let size = file.size() as u64;
            if let Err(message) = crate::state::documents::validate_upload(&file.name(), &file.type_(), size) {
                notify(ui, ToastKind::Error, message);
                return;
            }

            busy.set(true);
            let standard_value = standard.get();
            let current = session.get();
            let uploaded_by = current.attribution().to_owned();
            leptos::task::spawn_local(async move {
                match crate::net::documents::upload_document(&file, &standard_value, &uploaded_by).await {
                    Ok(document) => {
                        notify(ui, ToastKind::Success, format!("Uploaded {}", document.file_name));
                        input_el.set_value("");
                        on_uploaded.run(());
                    }
                    Err(error) => {
                        log::warn!("upload failed: {error}");
                        notify(ui, ToastKind::Error, format!("Upload failed: {error}"));
                    }
                }
                busy.set(false);
            });
        }
    };

    view! {
        <div class="upload-form">
            <label class="upload-form__label">
                "Document"
                <input class="upload-form__file" type="file" node_ref=file_ref/>
            </label>
            <label class="upload-form__label">
                "Standard"
                <select
                    class="upload-form__select"
                    prop:value=move || standard.get()
                    on:change=move |ev| standard.set(event_target_value(&ev))
                >
                    {COMPLIANCE_STANDARDS
                        .iter()
                        .map(|option| {
                            view! { <option value=option.value>{option.label}</option> }
                        })
                        .collect::<Vec<_>>()}
                </select>
            </label>
            <button class="btn btn--primary" on:click=on_upload disabled=move || busy.get()>
                {move || if busy.get() { "Uploading..." } else { "Upload" }}
            </button>
        </div>
    }
}
