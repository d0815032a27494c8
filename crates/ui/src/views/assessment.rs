use dioxus::prelude::*;
use tracing::debug;

use crate::context::AppContext;
use crate::vm::{QuizIntent, QuizVm};

#[component]
pub fn AssessmentView() -> Element {
    let ctx = use_context::<AppContext>();
    let quiz = ctx.quiz();
    let vm = use_signal(|| QuizVm::new(&quiz));
    let mut answer = use_signal(String::new);

    let dispatch = use_callback(move |intent: QuizIntent| {
        let mut vm = vm;
        let mut answer = answer;
        match intent {
            QuizIntent::Submit(raw) => {
                let Some(scheduled) = vm.write().submit(&quiz, &raw) else {
                    return;
                };
                debug!(delay_ms = scheduled.delay().as_millis(), "advance scheduled");
                spawn(async move {
                    let scheduled = scheduled.elapsed().await;
                    if vm.write().apply_advance(&quiz, scheduled) {
                        answer.set(String::new());
                    }
                });
            }
            QuizIntent::Restart => {
                vm.write().restart(&quiz);
                answer.set(String::new());
            }
        }
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<AssessmentTestHandles>() {
                handles.register(dispatch);
            }
        }
    }

    let question = vm.read().question_text();
    let feedback = vm.read().feedback().cloned();
    let complete = vm.read().is_complete();

    rsx! {
        div { class: "page assessment-page",
            header { class: "view-header",
                h2 { class: "view-title", "Quiz Questions" }
            }
            div { class: "view-divider" }

            p { class: "quiz-question", "{question}" }

            div { class: "form-row",
                label { r#for: "answer-input", "Enter your answer:" }
                input {
                    id: "answer-input",
                    r#type: "text",
                    value: "{answer}",
                    disabled: complete,
                    oninput: move |evt: FormEvent| answer.set(evt.value()),
                    onkeydown: move |evt: KeyboardEvent| {
                        if evt.key() == Key::Enter {
                            dispatch.call(QuizIntent::Submit(answer()));
                        }
                    },
                }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    disabled: complete,
                    onclick: move |_| dispatch.call(QuizIntent::Submit(answer())),
                    "Submit Answer"
                }
            }

            if let Some(feedback) = feedback {
                p { class: "{feedback.class()}", "{feedback.message}" }
            }

            if complete {
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    onclick: move |_| dispatch.call(QuizIntent::Restart),
                    "Restart Assessment"
                }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct AssessmentTestHandles {
    dispatch: std::rc::Rc<std::cell::RefCell<Option<Callback<QuizIntent>>>>,
}

#[cfg(test)]
impl AssessmentTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<QuizIntent>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
    }

    pub(crate) fn dispatch(&self) -> Callback<QuizIntent> {
        (*self.dispatch.borrow()).expect("assessment dispatch registered")
    }
}
