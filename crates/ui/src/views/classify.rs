use dioxus::prelude::*;

use crate::context::AppContext;
use crate::vm::{ClassifyResultVm, NOT_LOADED_MESSAGE, map_classify_result};

pub const CLASSIFY_HEADING: &str =
    "Hate Speech, Offensive Language and Neutral Language Classification";

#[component]
pub fn ClassifyView() -> Element {
    let ctx = use_context::<AppContext>();
    let classifier = ctx.classifier();
    let mut text = use_signal(String::new);
    let mut result = use_signal(|| None::<ClassifyResultVm>);

    let loaded = classifier.is_some();
    let on_classify = move |_: MouseEvent| {
        let next = match classifier.as_ref() {
            Some(service) => map_classify_result(&service.classify(&text())),
            None => ClassifyResultVm::Error(NOT_LOADED_MESSAGE.to_owned()),
        };
        result.set(Some(next));
    };

    rsx! {
        div { class: "page classify-page",
            header { class: "view-header",
                h2 { class: "view-title", "{CLASSIFY_HEADING}" }
                p { class: "view-subtitle",
                    "Enter a tweet, and the model will classify it as "
                    em { "Hate Speech" } ", " em { "Offensive Language" } ", or " em { "Neither" } "."
                }
            }
            div { class: "view-divider" }

            if !loaded {
                p { class: "result result--error", "{NOT_LOADED_MESSAGE}" }
            }

            div { class: "form-row",
                label { r#for: "tweet-input", "Enter your tweet:" }
                input {
                    id: "tweet-input",
                    r#type: "text",
                    value: "{text}",
                    oninput: move |evt: FormEvent| text.set(evt.value()),
                }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    disabled: !loaded,
                    onclick: on_classify,
                    "Classify"
                }
            }

            match result() {
                Some(ClassifyResultVm::Success { headline, confidence }) => rsx! {
                    p { class: "result result--success", "{headline}" }
                    p { class: "result-detail", "{confidence}" }
                },
                Some(ClassifyResultVm::Warning(message)) => rsx! {
                    p { class: "result result--warning", "{message}" }
                },
                Some(ClassifyResultVm::Error(message)) => rsx! {
                    p { class: "result result--error", "{message}" }
                },
                None => rsx! {},
            }
        }
    }
}
