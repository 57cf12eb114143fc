//! Document analyzer page: upload a file, pick a standard, render the
//! AI analysis report.

use leptos::prelude::*;

#[cfg(feature = "csr")]
use crate::components::toast_tray::notify;
use crate::net::types::AnalysisResult;
#[cfg(feature = "csr")]
use crate::state::ui::{ToastKind, UiState};
use crate::util::standards::COMPLIANCE_STANDARDS;

/// Ad-hoc analysis of a not-yet-stored document.
#[component]
pub fn AnalyzerPage() -> impl IntoView {
    #[cfg(feature = "csr")]
    let ui = expect_context::<RwSignal<UiState>>();
    let standard = RwSignal::new("ISO_27001".to_owned());
    let analyzing = RwSignal::new(false);
    let result = RwSignal::new(None::<AnalysisResult>);
    let file_ref = NodeRef::<leptos::html::Input>::new();

    let on_analyze = move |_| {
        if analyzing.get() {
            return;
        }
        #[cfg(feature = "csr")]
        {
            let Some(input_el) = file_ref.get() else {
                return;
            };
            let Some(file) = input_el.files().and_then(|list| list.get(0)) else {
                notify(ui, ToastKind::Error, "Please select a document to analyze");
                return;
            };
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let size = file.size() as u64;
            if let Err(message) = crate::state::documents::validate_upload(&file.name(), &file.type_(), size) {
                notify(ui, ToastKind::Error, message);
                return;
            }

            analyzing.set(true);
            let standard_value = standard.get();
            leptos::task::spawn_local(async move {
                match crate::net::documents::analyze_file(&file, &standard_value).await {
                    Ok(report) => result.set(Some(report)),
                    Err(error) => {
                        log::warn!("analysis failed: {error}");
                        notify(ui, ToastKind::Error, format!("Analysis failed: {error}"));
                    }
                }
                analyzing.set(false);
            });
        }
    };

    view! {
        <div class="analyzer-page">
            <header class="page-header">
                <h1>"Document Analyzer"</h1>
            </header>

            <div class="analyzer-page__form">
                <input class="upload-form__file" type="file" node_ref=file_ref/>
                <select
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
                <button class="btn btn--primary" on:click=on_analyze disabled=move || analyzing.get()>
                    {move || if analyzing.get() { "Analyzing..." } else { "Analyze" }}
                </button>
            </div>

            {move || {
                result
                    .get()
                    .map(|report| {
                        view! {
                            <section class="analyzer-page__report">
                                <div class="analyzer-page__assessment">
                                    <h2>{report.document_name.clone()}</h2>
                                    <p class="analyzer-page__score">
                                        {report.overall_assessment.score.clone()}
                                        " — "
                                        {report.overall_assessment.rating.clone()}
                                    </p>
                                    <p>{report.overall_assessment.summary.clone()}</p>
                                </div>

                                {(!report.critical_flags.is_empty())
                                    .then(|| view! { <h3>"Critical flags"</h3> })}
                                {report
                                    .critical_flags
                                    .iter()
                                    .map(|flag| {
                                        view! {
                                            <div class="analyzer-page__item analyzer-page__item--critical">
                                                <strong>{flag.title.clone()}</strong>
                                                <span class="analyzer-page__badge">{flag.severity.clone()}</span>
                                                <p>{flag.description.clone()}</p>
                                                <p class="analyzer-page__hint">{flag.recommendation.clone()}</p>
                                            </div>
                                        }
                                    })
                                    .collect::<Vec<_>>()}

                                {(!report.compliance_gaps.is_empty())
                                    .then(|| view! { <h3>"Compliance gaps"</h3> })}
                                {report
                                    .compliance_gaps
                                    .iter()
                                    .map(|gap| {
                                        view! {
                                            <div class="analyzer-page__item">
                                                <strong>{gap.control_id.clone()} " — " {gap.control_name.clone()}</strong>
                                                <p>{gap.gap.clone()}</p>
                                            </div>
                                        }
                                    })
                                    .collect::<Vec<_>>()}

                                {(!report.improvements.is_empty())
                                    .then(|| view! { <h3>"Improvements"</h3> })}
                                {report
                                    .improvements
                                    .iter()
                                    .map(|improvement| {
                                        view! {
                                            <div class="analyzer-page__item">
                                                <strong>{improvement.title.clone()}</strong>
                                                <p>{improvement.description.clone()}</p>
                                            </div>
                                        }
                                    })
                                    .collect::<Vec<_>>()}

                                {(!report.risk_areas.is_empty())
                                    .then(|| view! { <h3>"Risk areas"</h3> })}
                                {report
                                    .risk_areas
                                    .iter()
                                    .map(|area| {
                                        view! {
                                            <div class="analyzer-page__item">
                                                <strong>{area.title.clone()}</strong>
                                                <span class="analyzer-page__badge">{area.risk_level.clone()}</span>
                                                <p>{area.description.clone()}</p>
                                            </div>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </section>
                        }
                    })
            }}
        </div>
    }
}
