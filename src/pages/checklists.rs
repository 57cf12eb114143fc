//! Checklists page: downloadable templates, generation from stored
//! documents, and item-level progress tracking.

use leptos::prelude::*;

use crate::components::toast_tray::notify;
use crate::net::types::ExportFormat;
use crate::state::checklists::{ChecklistsState, progress, progress_percent};
use crate::state::ui::{ToastKind, UiState};
use crate::util::standards::COMPLIANCE_STANDARDS;

/// Checklist templates and saved checklists.
#[component]
pub fn ChecklistsPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let checklists = RwSignal::new(ChecklistsState::default());
    let template_standard = RwSignal::new("ISO_27001".to_owned());
    let exporting = RwSignal::new(false);
    let document_id = RwSignal::new(String::new());
    let generating = RwSignal::new(false);

    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get() {
            return;
        }
        requested.set(true);
        load_checklists(checklists, ui);
    });

    let export_template = move |format: ExportFormat| {
        if exporting.get() {
            return;
        }
        exporting.set(true);
        #[cfg(feature = "csr")]
        {
            let standard = template_standard.get();
            leptos::task::spawn_local(async move {
                match crate::net::checklists::generate_template(&standard, format).await {
                    Ok(bytes) => {
                        let file_name = crate::state::checklists::template_file_name(&standard, format);
                        crate::util::download::save_blob(&bytes, format.mime(), &file_name);
                        notify(ui, ToastKind::Success, "Checklist downloaded");
                    }
                    Err(error) => {
                        log::warn!("template export failed: {error}");
                        notify(ui, ToastKind::Error, format!("Export failed: {error}"));
                    }
                }
                exporting.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = format;
            exporting.set(false);
        }
    };

    let on_generate = move |_| {
        if generating.get() {
            return;
        }
        let Ok(id) = document_id.get().trim().parse::<i64>() else {
            notify(ui, ToastKind::Error, "Enter a stored document id");
            return;
        };
        generating.set(true);
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::checklists::generate_checklist(id).await {
                Ok(checklist) => {
                    checklists.update(|s| s.items.insert(0, checklist));
                    notify(ui, ToastKind::Success, "Checklist generated");
                }
                Err(error) => notify(ui, ToastKind::Error, format!("Generation failed: {error}")),
            }
            generating.set(false);
        });
        #[cfg(not(feature = "csr"))]
        let _ = id;
    };

    let on_toggle = move |checklist_id: i64, item_number: i64, completed: bool| {
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::checklists::update_item_status(checklist_id, item_number, completed).await {
                Ok(updated) => checklists.update(|s| s.apply_update(updated)),
                Err(error) => notify(ui, ToastKind::Error, format!("Update failed: {error}")),
            }
        });
        #[cfg(not(feature = "csr"))]
        let _ = (checklist_id, item_number, completed);
    };

    let on_delete = move |id: i64| {
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::checklists::delete_checklist(id).await {
                Ok(()) => {
                    checklists.update(|s| s.items.retain(|c| c.id != id));
                    notify(ui, ToastKind::Info, "Checklist deleted");
                }
                Err(error) => notify(ui, ToastKind::Error, format!("Delete failed: {error}")),
            }
        });
        #[cfg(not(feature = "csr"))]
        let _ = id;
    };

    view! {
        <div class="checklists-page">
            <header class="page-header">
                <h1>"Checklists"</h1>
            </header>

            <section class="checklists-page__templates">
                <h2>"Download a template"</h2>
                <div class="checklists-page__standards">
                    {COMPLIANCE_STANDARDS
                        .iter()
                        .map(|option| {
                            let value = option.value;
                            view! {
                                <button
                                    class="standard-card"
                                    class:standard-card--selected=move || template_standard.get() == value
                                    on:click=move |_| template_standard.set(value.to_owned())
                                >
                                    <strong>{option.label}</strong>
                                    <span>{option.description}</span>
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
                <div class="checklists-page__formats">
                    <button
                        class="btn btn--primary"
                        on:click=move |_| export_template(ExportFormat::Pdf)
                        disabled=move || exporting.get()
                    >
                        "Download PDF"
                    </button>
                    <button
                        class="btn btn--primary"
                        on:click=move |_| export_template(ExportFormat::Excel)
                        disabled=move || exporting.get()
                    >
                        "Download Excel"
                    </button>
                </div>
            </section>

            <section class="checklists-page__saved">
                <h2>"Saved checklists"</h2>
                <div class="checklists-page__generate">
                    "Generate from stored document #"
                    <input
                        type="text"
                        placeholder="id"
                        prop:value=move || document_id.get()
                        on:input=move |ev| document_id.set(event_target_value(&ev))
                    />
                    <button class="btn" on:click=on_generate disabled=move || generating.get()>
                        {move || if generating.get() { "Generating..." } else { "Generate" }}
                    </button>
                </div>

                <Show when=move || checklists.get().error.is_some()>
                    <p class="page-error">{move || checklists.get().error.unwrap_or_default()}</p>
                </Show>

                <Show
                    when=move || !checklists.get().loading
                    fallback=move || view! { <p>"Loading checklists..."</p> }
                >
                    {move || {
                        checklists
                            .get()
                            .items
                            .into_iter()
                            .map(|checklist| {
                                let checklist_id = checklist.id;
                                let (completed, total) = progress(&checklist);
                                let percent = progress_percent(&checklist);
                                view! {
                                    <div class="checklist-card">
                                        <div class="checklist-card__header">
                                            <strong>{checklist.standard_name.clone()}</strong>
                                            <span>{format!("{completed}/{total} · {percent}%")}</span>
                                            <button
                                                class="btn btn--danger"
                                                on:click=move |_| on_delete(checklist_id)
                                            >
                                                "Delete"
                                            </button>
                                        </div>
                                        <div class="checklist-card__bar">
                                            <div
                                                class="checklist-card__bar-fill"
                                                style=format!("width: {percent}%")
                                            ></div>
                                        </div>
                                        <ul class="checklist-card__items">
                                            {checklist
                                                .items
                                                .iter()
                                                .map(|item| {
                                                    let item_number = item.item_number;
                                                    let next = !item.completed;
                                                    view! {
                                                        <li class="checklist-card__item">
                                                            <label>
                                                                <input
                                                                    type="checkbox"
                                                                    prop:checked=item.completed
                                                                    on:change=move |_| on_toggle(
                                                                        checklist_id,
                                                                        item_number,
                                                                        next,
                                                                    )
                                                                />
                                                                <span class="checklist-card__requirement">
                                                                    {item.requirement.clone()}
                                                                </span>
                                                                <span class="checklist-card__priority">
                                                                    {item.priority.clone()}
                                                                </span>
                                                            </label>
                                                        </li>
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </ul>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </Show>
            </section>
        </div>
    }
}

fn load_checklists(checklists: RwSignal<ChecklistsState>, ui: RwSignal<UiState>) {
    checklists.update(|s| s.loading = true);
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        match crate::net::checklists::fetch_checklists().await {
            Ok(items) => checklists.update(|s| {
                s.items = items;
                s.loading = false;
                s.error = None;
            }),
            Err(error) => {
                log::warn!("checklists unavailable: {error}");
                checklists.update(|s| {
                    s.loading = false;
                    s.error = Some(error.to_string());
                });
                notify(ui, ToastKind::Error, "Could not load checklists");
            }
        }
    });
    #[cfg(not(feature = "csr"))]
    let _ = ui;
}
