//! Audit findings page: generate a report from pasted text or a stored
//! document and render it with locally recomputed severity tallies.

use leptos::prelude::*;

use crate::components::toast_tray::notify;
use crate::state::findings::{FindingsState, severity_counts};
use crate::state::ui::{ToastKind, UiState};
use crate::util::standards::COMPLIANCE_STANDARDS;

/// Audit-findings generation page.
#[component]
pub fn FindingsPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let findings = RwSignal::new(FindingsState::default());
    let framework = RwSignal::new("ISO_27001".to_owned());
    let document_text = RwSignal::new(String::new());
    let document_name = RwSignal::new("pasted-document.txt".to_owned());
    let document_id = RwSignal::new(String::new());

    let on_generate_from_text = move |_| {
        if findings.get().generating {
            return;
        }
        let text = document_text.get();
        if text.trim().is_empty() {
            notify(ui, ToastKind::Error, "Paste some document text first");
            return;
        }
        findings.update(|s| s.generating = true);

        #[cfg(feature = "csr")]
        {
            let framework_value = framework.get();
            let name_value = document_name.get();
            leptos::task::spawn_local(async move {
                let outcome =
                    crate::net::findings::generate_from_text(text.trim(), &framework_value, &name_value).await;
                apply_outcome(findings, ui, outcome);
            });
        }
    };

    let on_generate_for_document = move |_| {
        if findings.get().generating {
            return;
        }
        let Ok(id) = document_id.get().trim().parse::<i64>() else {
            notify(ui, ToastKind::Error, "Enter a stored document id");
            return;
        };
        findings.update(|s| s.generating = true);

        #[cfg(feature = "csr")]
        {
            let framework_value = framework.get();
            leptos::task::spawn_local(async move {
                let outcome = crate::net::findings::generate_for_document(id, &framework_value).await;
                apply_outcome(findings, ui, outcome);
            });
        }
        #[cfg(not(feature = "csr"))]
        let _ = id;
    };

    view! {
        <div class="findings-page">
            <header class="page-header">
                <h1>"Audit Findings"</h1>
                <select
                    prop:value=move || framework.get()
                    on:change=move |ev| framework.set(event_target_value(&ev))
                >
                    {COMPLIANCE_STANDARDS
                        .iter()
                        .map(|option| {
                            view! { <option value=option.value>{option.label}</option> }
                        })
                        .collect::<Vec<_>>()}
                </select>
            </header>

            <section class="findings-page__form">
                <label class="findings-page__label">
                    "Document name"
                    <input
                        type="text"
                        prop:value=move || document_name.get()
                        on:input=move |ev| document_name.set(event_target_value(&ev))
                    />
                </label>
                <textarea
                    class="findings-page__text"
                    placeholder="Paste policy or procedure text here..."
                    prop:value=move || document_text.get()
                    on:input=move |ev| document_text.set(event_target_value(&ev))
                ></textarea>
                <div class="findings-page__actions">
                    <button
                        class="btn btn--primary"
                        on:click=on_generate_from_text
                        disabled=move || findings.get().generating
                    >
                        {move || if findings.get().generating { "Generating..." } else { "Generate from text" }}
                    </button>
                    <span class="findings-page__or">"or stored document #"</span>
                    <input
                        class="findings-page__doc-id"
                        type="text"
                        placeholder="id"
                        prop:value=move || document_id.get()
                        on:input=move |ev| document_id.set(event_target_value(&ev))
                    />
                    <button class="btn" on:click=on_generate_for_document disabled=move || findings.get().generating>
                        "Generate"
                    </button>
                </div>
            </section>

            <Show when=move || findings.get().error.is_some()>
                <p class="page-error">{move || findings.get().error.unwrap_or_default()}</p>
            </Show>

            {move || {
                findings
                    .get()
                    .report
                    .map(|report| {
                        let counts = severity_counts(&report.findings);
                        view! {
                            <section class="findings-page__report">
                                <header class="findings-page__report-header">
                                    <h2>{report.document_name.clone()}</h2>
                                    <p>
                                        {report.compliance_framework.clone()}
                                        {report
                                            .overall_risk_level
                                            .clone()
                                            .map(|level| format!(" · overall risk {level}"))}
                                    </p>
                                    <div class="findings-page__counts">
                                        <span class="risk--critical">{counts.critical} " critical"</span>
                                        <span class="risk--high">{counts.high} " high"</span>
                                        <span class="risk--medium">{counts.medium} " medium"</span>
                                        <span class="risk--low">{counts.low} " low"</span>
                                    </div>
                                </header>

                                <p class="findings-page__summary">{report.executive_summary.clone()}</p>

                                {report
                                    .findings
                                    .iter()
                                    .map(|finding| {
                                        let severity_class = format!(
                                            "finding-card finding-card--{}",
                                            finding.severity.level.to_ascii_lowercase()
                                        );
                                        view! {
                                            <div class=severity_class>
                                                <div class="finding-card__header">
                                                    <strong>{finding.title.clone()}</strong>
                                                    <span class="finding-card__severity">
                                                        {finding.severity.level.clone()}
                                                    </span>
                                                </div>
                                                <p>{finding.description.clone()}</p>
                                                {finding
                                                    .control_reference
                                                    .clone()
                                                    .map(|reference| {
                                                        view! {
                                                            <p class="finding-card__reference">"Control: " {reference}</p>
                                                        }
                                                    })}
                                                {(!finding.remediation_steps.is_empty())
                                                    .then(|| {
                                                        view! {
                                                            <ol class="finding-card__steps">
                                                                {finding
                                                                    .remediation_steps
                                                                    .iter()
                                                                    .map(|step| view! { <li>{step.action.clone()}</li> })
                                                                    .collect::<Vec<_>>()}
                                                            </ol>
                                                        }
                                                    })}
                                            </div>
                                        }
                                    })
                                    .collect::<Vec<_>>()}

                                {(!report.priority_recommendations.is_empty())
                                    .then(|| {
                                        view! {
                                            <h3>"Priority recommendations"</h3>
                                            <ul>
                                                {report
                                                    .priority_recommendations
                                                    .iter()
                                                    .map(|rec| view! { <li>{rec.clone()}</li> })
                                                    .collect::<Vec<_>>()}
                                            </ul>
                                        }
                                    })}
                            </section>
                        }
                    })
            }}
        </div>
    }
}

#[cfg(feature = "csr")]
fn apply_outcome(
    findings: RwSignal<FindingsState>,
    ui: RwSignal<UiState>,
    outcome: Result<crate::net::types::AuditFindingsReport, crate::net::error::ApiError>,
) {
    match outcome {
        Ok(report) => {
            findings.update(|s| {
                s.report = Some(report);
                s.error = None;
                s.generating = false;
            });
            notify(ui, ToastKind::Success, "Findings report generated");
        }
        Err(error) => {
            log::warn!("findings generation failed: {error}");
            findings.update(|s| {
                s.error = Some(error.to_string());
                s.generating = false;
            });
            notify(ui, ToastKind::Error, "Findings generation failed");
        }
    }
}
