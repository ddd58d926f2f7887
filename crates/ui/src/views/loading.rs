use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};
use tracing::warn;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LoadingOutcome {
    Scored,
    NoAnswers,
}

/// Scores the answers handed off by the form, then opens the dashboard.
#[component]
pub fn LoadingView() -> Element {
    let ctx = use_context::<AppContext>();
    let pending = ctx.pending();
    let navigator = use_navigator();

    let mut resource = use_resource(move || {
        let pending = pending.clone();
        async move {
            match pending.score_pending().await {
                Ok(Some(_)) => Ok(LoadingOutcome::Scored),
                Ok(None) => Ok(LoadingOutcome::NoAnswers),
                Err(err) => {
                    warn!("scoring pending answers failed: {err}");
                    Err(ViewError::from(&err))
                }
            }
        }
    });

    use_effect(move || {
        if let Some(Ok(LoadingOutcome::Scored)) = *resource.value().read() {
            navigator.replace(Route::Dashboard {});
        }
    });

    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page loading",
            h2 { "Analyzing responses" }

            match state {
                ViewState::Idle | ViewState::Loading => rsx! {
                    div { class: "spinner" }
                    p { "Scoring your answers..." }
                },
                ViewState::Ready(LoadingOutcome::Scored) => rsx! {
                    p { "Opening your results..." }
                },
                ViewState::Ready(LoadingOutcome::NoAnswers) => rsx! {
                    p { "No screening answers found." }
                    Link { to: Route::Screening {}, "Start the screening" }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "form-error", role: "alert", "{err.message()}" }
                    div { class: "actions",
                        button { onclick: move |_| resource.restart(), "Retry" }
                        Link { to: Route::Screening {}, "Back to the questionnaire" }
                    }
                },
            }
        }
    }
}
