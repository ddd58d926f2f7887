use dioxus::prelude::*;
use dioxus_router::use_navigator;
use screening_core::model::{QuestionId, SubmissionPhase};
use tracing::{debug, warn};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::ViewError;
use crate::vm::{ANSWER_OPTIONS, FormVm};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

/// Question rows rendered by the form, in display order.
const QUESTION_ROWS: [Option<QuestionId>; 6] = [
    Some(QuestionId::Q1),
    Some(QuestionId::Q2),
    Some(QuestionId::Q3),
    Some(QuestionId::Q4),
    Some(QuestionId::Q5),
    Some(QuestionId::Q6),
];

#[component]
pub fn ScreeningFormView() -> Element {
    let attached = use_hook(|| FormVm::attach(QUESTION_ROWS));

    match attached {
        Ok(initial) => rsx! { ScreeningForm { initial } },
        Err(err) => {
            warn!("screening form could not bind its controls: {err}");
            let message = ViewError::Form.message();
            rsx! {
                div { class: "page screening",
                    h2 { "Developmental screening" }
                    p { class: "form-error", role: "alert", "{message}" }
                }
            }
        }
    }
}

#[component]
fn ScreeningForm(initial: FormVm) -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let mut vm = use_signal(|| initial);

    let submit_form = use_callback(move |()| {
        let Some(form) = vm.write().begin_submit() else {
            debug!("submission already in flight; ignoring submit");
            return;
        };
        let submission = ctx.submission();
        spawn(async move {
            let result = submission
                .submit_observed(&form, |phase| vm.write().set_phase(phase))
                .await;
            match result {
                Ok(outcome) => {
                    vm.write().set_phase(SubmissionPhase::Navigated);
                    navigator.push(Route::from(outcome.navigation));
                }
                Err(err) => vm.write().fail(ViewError::from(&err)),
            }
        });
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<FormTestHandles>() {
                handles.register(submit_form, vm);
            }
        }
    }

    let state = vm.read().clone();
    let in_flight = state.phase().is_in_flight();
    let progress = state.progress();

    rsx! {
        div { class: "page screening",
            h2 { "Developmental screening" }
            p { class: "intro",
                "Answer each question based on what you usually observe. "
                "You can leave a question unanswered."
            }
            p { class: "progress", id: "progress", "{progress}" }

            form {
                id: "screeningForm",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    submit_form.call(());
                },
                for question in state.rows().iter().copied() {
                    QuestionRow {
                        key: "{question}",
                        question,
                        value: state.value(question),
                        on_change: move |value: String| {
                            vm.write().select(question, value);
                        },
                    }
                }

                if let Some(err) = state.error() {
                    p { class: "form-error", role: "alert", "{err.message()}" }
                }

                button {
                    class: "primary",
                    r#type: "submit",
                    disabled: in_flight,
                    if in_flight { "Submitting..." } else { "See results" }
                }
            }
        }
    }
}

#[component]
fn QuestionRow(question: QuestionId, value: String, on_change: EventHandler<String>) -> Element {
    let number = question.index() + 1;
    let prompt = question.prompt();

    rsx! {
        div { class: "question",
            label { r#for: "{question}", "{number}. {prompt}" }
            select {
                id: "{question}",
                name: "{question}",
                value: "{value}",
                onchange: move |evt| on_change.call(evt.value()),
                for (option_value, label) in ANSWER_OPTIONS {
                    option {
                        value: option_value,
                        selected: option_value == value,
                        "{label}"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct FormTestHandles {
    submit: Rc<RefCell<Option<Callback<()>>>>,
    vm: Rc<RefCell<Option<Signal<FormVm>>>>,
}

#[cfg(test)]
impl FormTestHandles {
    pub(crate) fn register(&self, submit: Callback<()>, vm: Signal<FormVm>) {
        *self.submit.borrow_mut() = Some(submit);
        *self.vm.borrow_mut() = Some(vm);
    }

    pub(crate) fn submit(&self) -> Callback<()> {
        (*self.submit.borrow()).expect("form submit registered")
    }

    pub(crate) fn vm(&self) -> Signal<FormVm> {
        (*self.vm.borrow()).expect("form vm registered")
    }
}
