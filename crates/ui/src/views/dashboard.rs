use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};
use tracing::warn;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{DashboardVm, ReportVm, map_dashboard};

#[component]
pub fn DashboardView() -> Element {
    let ctx = use_context::<AppContext>();
    let handoff = ctx.handoff();
    let navigator = use_navigator();

    let resource = use_resource(move || {
        let handoff = handoff.clone();
        async move {
            let result = handoff
                .load_result()
                .await
                .map_err(|err| ViewError::from(&err))?;
            Ok(result.as_ref().map(map_dashboard))
        }
    });

    let start_over = move |_: MouseEvent| {
        let handoff = ctx.handoff();
        spawn(async move {
            if let Err(err) = handoff.clear_all().await {
                warn!("clearing screening handoff failed: {err}");
            }
            navigator.push(Route::Screening {});
        });
    };

    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page dashboard",
            h2 { "Screening results" }

            match state {
                ViewState::Idle | ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(Some(DashboardVm::Report(report))) => rsx! {
                    ReportPanel { report }
                },
                ViewState::Ready(Some(DashboardVm::Raw(text))) => rsx! {
                    pre { class: "raw-result", "{text}" }
                },
                ViewState::Ready(None) => rsx! {
                    p { "No screening results yet." }
                    Link { to: Route::Screening {}, "Take the screening" }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "form-error", role: "alert", "{err.message()}" }
                },
            }

            div { class: "actions",
                button { onclick: start_over, "Start a new screening" }
            }
        }
    }
}

#[component]
fn ReportPanel(report: ReportVm) -> Element {
    rsx! {
        section { class: "report",
            div { class: "score-card",
                span { class: "score-label", "Score" }
                span { class: "score-value", "{report.score}" }
                span { class: "risk {report.risk_class}", "{report.risk_label} likelihood" }
            }

            h3 { "Observations" }
            if report.observations.is_empty() {
                p { "No specific concerns were flagged." }
            } else {
                ul {
                    for item in report.observations {
                        li { "{item}" }
                    }
                }
            }

            h3 { "Next steps" }
            ol {
                for step in report.next_steps {
                    li { "{step}" }
                }
            }

            p { class: "disclaimer", "{report.disclaimer}" }
        }
    }
}
