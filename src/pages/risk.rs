//! Risk dashboard for one document: latest assessment, history, rerun.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

#[cfg(feature = "csr")]
use crate::components::toast_tray::notify;
use crate::state::risk::{RiskLevel, RiskState};
use crate::state::ui::UiState;
#[cfg(feature = "csr")]
use crate::state::ui::ToastKind;
use crate::util::format::format_date;

/// Risk assessment view for the document in the route.
#[component]
pub fn RiskPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let params = use_params_map();
    let risk = RwSignal::new(RiskState::default());

    let document_id = move || params.get().get("id").and_then(|raw| raw.parse::<i64>().ok());

    let requested = RwSignal::new(None::<i64>);
    Effect::new(move || {
        let Some(id) = document_id() else {
            risk.update(|s| {
                s.loading = false;
                s.error = Some("Invalid document id".to_owned());
            });
            return;
        };
        if requested.get() == Some(id) {
            return;
        }
        requested.set(Some(id));
        load_history(risk, ui, id);
    });

    let on_assess = move |_| {
        if risk.get().loading {
            return;
        }
        let Some(id) = document_id() else {
            return;
        };
        risk.update(|s| s.loading = true);
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::risk::assess_document(id).await {
                Ok(assessment) => {
                    risk.update(|s| {
                        s.history.insert(0, assessment.clone());
                        s.assessment = Some(assessment);
                        s.loading = false;
                        s.error = None;
                    });
                    notify(ui, ToastKind::Success, "Assessment complete");
                }
                Err(error) => {
                    log::warn!("risk assessment failed: {error}");
                    risk.update(|s| s.loading = false);
                    notify(ui, ToastKind::Error, format!("Assessment failed: {error}"));
                }
            }
        });
        #[cfg(not(feature = "csr"))]
        let _ = id;
    };

    view! {
        <div class="risk-page">
            <header class="page-header">
                <h1>"Risk Assessment"</h1>
                <button class="btn btn--primary" on:click=on_assess disabled=move || risk.get().loading>
                    {move || if risk.get().loading { "Working..." } else { "Run new assessment" }}
                </button>
            </header>

            <Show when=move || risk.get().error.is_some()>
                <p class="page-error">{move || risk.get().error.unwrap_or_default()}</p>
            </Show>

            {move || {
                risk.get()
                    .assessment
                    .map(|assessment| {
                        let level = RiskLevel::from_name(&assessment.overall_risk_level);
                        let score_level = RiskLevel::for_score(assessment.overall_risk_score);
                        view! {
                            <section class="risk-page__overview">
                                <div class=format!("risk-page__score {}", score_level.css_class())>
                                    <span class="risk-page__score-value">
                                        {format!("{:.0}", assessment.overall_risk_score)}
                                    </span>
                                    <span class=format!("risk-badge {}", level.css_class())>
                                        {level.label()}
                                    </span>
                                </div>
                                <p class="risk-page__summary">{assessment.summary.clone()}</p>
                                <p class="risk-page__recommendations">{assessment.recommendations.clone()}</p>
                            </section>

                            <section class="risk-page__findings">
                                <h2>"Findings"</h2>
                                <table class="risk-table">
                                    <thead>
                                        <tr>
                                            <th>"Category"</th>
                                            <th>"Finding"</th>
                                            <th>"Score"</th>
                                            <th>"Level"</th>
                                            <th>"Mitigation"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {assessment
                                            .findings
                                            .iter()
                                            .map(|finding| {
                                                let finding_level = RiskLevel::from_name(&finding.risk_level);
                                                view! {
                                                    <tr>
                                                        <td>{finding.category.clone()}</td>
                                                        <td>{finding.finding.clone()}</td>
                                                        <td>{format!("{:.0}", finding.risk_score)}</td>
                                                        <td>
                                                            <span class=format!(
                                                                "risk-badge {}",
                                                                finding_level.css_class(),
                                                            )>{finding_level.label()}</span>
                                                        </td>
                                                        <td>{finding.mitigation.clone()}</td>
                                                    </tr>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </tbody>
                                </table>
                            </section>
                        }
                    })
            }}

            <section class="risk-page__history">
                <h2>"History"</h2>
                {move || {
                    let history = risk.get().history;
                    if history.is_empty() {
                        return view! { <p>"No assessments yet; run one above."</p> }.into_any();
                    }
                    history
                        .into_iter()
                        .map(|assessment| {
                            let level = RiskLevel::from_name(&assessment.overall_risk_level);
                            view! {
                                <div class="risk-page__history-row">
                                    <span>{format_date(&assessment.created_at).to_owned()}</span>
                                    <span class=format!("risk-badge {}", level.css_class())>
                                        {level.label()}
                                    </span>
                                    <span>{format!("score {:.0}", assessment.overall_risk_score)}</span>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                        .into_any()
                }}
            </section>
        </div>
    }
}

fn load_history(risk: RwSignal<RiskState>, ui: RwSignal<UiState>, document_id: i64) {
    risk.update(|s| s.loading = true);
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        match crate::net::risk::fetch_assessments_for_document(document_id).await {
            Ok(history) => risk.update(|s| {
                s.assessment = history.first().cloned();
                s.history = history;
                s.loading = false;
                s.error = None;
            }),
            Err(error) => {
                log::warn!("risk history unavailable: {error}");
                risk.update(|s| {
                    s.loading = false;
                    s.error = Some(error.to_string());
                });
                notify(ui, ToastKind::Error, "Could not load assessments");
            }
        }
    });
    #[cfg(not(feature = "csr"))]
    let _ = (ui, document_id);
}
