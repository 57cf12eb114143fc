//! Grammar checker page: submit text, render corrections with highlighted
//! spans over the original.

use leptos::prelude::*;

use crate::components::toast_tray::notify;
use crate::state::grammar::{GrammarState, highlight_segments};
use crate::state::ui::{ToastKind, UiState};

/// Grammar correction for policy text.
#[component]
pub fn GrammarPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let grammar = RwSignal::new(GrammarState::default());
    let text = RwSignal::new(String::new());
    let language = RwSignal::new("en".to_owned());

    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get() {
            return;
        }
        requested.set(true);
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let languages = crate::net::grammar::supported_languages().await;
            grammar.update(|s| s.languages = languages);
        });
        #[cfg(not(feature = "csr"))]
        grammar.update(|s| s.languages = vec!["en".to_owned()]);
    });

    let on_check = move |_| {
        if grammar.get().checking {
            return;
        }
        let submitted = text.get();
        if submitted.trim().is_empty() {
            notify(ui, ToastKind::Error, "Enter some text to check");
            return;
        }
        grammar.update(|s| s.checking = true);

        #[cfg(feature = "csr")]
        {
            let language_value = language.get();
            leptos::task::spawn_local(async move {
                match crate::net::grammar::correct(&submitted, &language_value).await {
                    Ok(response) => grammar.update(|s| {
                        s.response = Some(response);
                        s.error = None;
                        s.checking = false;
                    }),
                    Err(error) => {
                        log::warn!("grammar check failed: {error}");
                        grammar.update(|s| {
                            s.error = Some(error.to_string());
                            s.checking = false;
                        });
                        notify(ui, ToastKind::Error, "Grammar check failed");
                    }
                }
            });
        }
    };

    view! {
        <div class="grammar-page">
            <header class="page-header">
                <h1>"Grammar Checker"</h1>
                <select
                    prop:value=move || language.get()
                    on:change=move |ev| language.set(event_target_value(&ev))
                >
                    {move || {
                        grammar
                            .get()
                            .languages
                            .into_iter()
                            .map(|lang| view! { <option value=lang.clone()>{lang.clone()}</option> })
                            .collect::<Vec<_>>()
                    }}
                </select>
            </header>

            <textarea
                class="grammar-page__input"
                placeholder="Paste finding descriptions or policy text..."
                prop:value=move || text.get()
                on:input=move |ev| text.set(event_target_value(&ev))
            ></textarea>
            <button
                class="btn btn--primary"
                on:click=on_check
                disabled=move || grammar.get().checking
            >
                {move || if grammar.get().checking { "Checking..." } else { "Check grammar" }}
            </button>

            <Show when=move || grammar.get().error.is_some()>
                <p class="page-error">{move || grammar.get().error.unwrap_or_default()}</p>
            </Show>

            {move || {
                grammar
                    .get()
                    .response
                    .map(|response| {
                        let segments = highlight_segments(&response.original_text, &response.corrections);
                        view! {
                            <section class="grammar-page__results">
                                <h2>{format!(
                                    "{} correction(s) · {} ms",
                                    response.corrections.len(),
                                    response.processing_time_ms,
                                )}</h2>

                                <div class="grammar-page__original">
                                    {segments
                                        .into_iter()
                                        .map(|segment| {
                                            view! {
                                                <span class:grammar-highlight=segment.highlighted>
                                                    {segment.text}
                                                </span>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </div>

                                <h3>"Corrected text"</h3>
                                <p class="grammar-page__corrected">{response.corrected_text.clone()}</p>

                                <ul class="grammar-page__corrections">
                                    {response
                                        .corrections
                                        .iter()
                                        .map(|correction| {
                                            view! {
                                                <li>
                                                    <span class="grammar-page__type">
                                                        {correction.correction_type.clone()}
                                                    </span>
                                                    <del>{correction.original.clone()}</del>
                                                    " → "
                                                    <ins>{correction.corrected.clone()}</ins>
                                                    {(!correction.message.is_empty())
                                                        .then(|| format!(" — {}", correction.message))}
                                                </li>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </ul>
                            </section>
                        }
                    })
            }}
        </div>
    }
}
