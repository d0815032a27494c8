use dioxus::prelude::*;
use tracing::warn;

use crate::context::AppContext;
use crate::vm::{LearningVm, shape_options};

fn select_shape(vm: &mut LearningVm, name: &str) {
    if let Err(err) = vm.select(name) {
        warn!(shape = name, error = %err, "ignored shape selection");
    }
}

#[component]
pub fn LearningView() -> Element {
    let ctx = use_context::<AppContext>();
    let advisor = ctx.advisor();
    let opener = ctx.link_opener();
    let mut vm = use_signal(LearningVm::default);

    let selected = vm.read().selected().name();
    let sheet = vm.read().sheet().cloned();
    let inputs = vm.read().inputs().to_vec();
    let result = vm.read().result().cloned();

    rsx! {
        div { class: "page learning-page",
            header { class: "view-header",
                h2 { class: "view-title", "Learning" }
            }
            div { class: "view-divider" }

            div { class: "form-row",
                label { r#for: "shape-select", "Select a shape:" }
                select {
                    id: "shape-select",
                    value: "{selected}",
                    onchange: move |evt: FormEvent| {
                        select_shape(&mut vm.write(), &evt.value());
                    },
                    for name in shape_options() {
                        option { value: "{name}", selected: name == selected, "{name}" }
                    }
                }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| vm.write().show_formula(&advisor),
                    "Get Formula"
                }
            }

            if let Some(sheet) = sheet {
                div { class: "formula-sheet",
                    p { class: "formula-text", "{sheet.formula_text}" }
                    button {
                        class: "link-button",
                        r#type: "button",
                        onclick: move |_| opener.open_url(sheet.link_url),
                        "{sheet.link_label}"
                    }
                    for (idx, label) in sheet.input_labels.iter().copied().enumerate() {
                        div { key: "{label}", class: "form-row",
                            label { "{label}" }
                            input {
                                r#type: "text",
                                value: inputs.get(idx).cloned().unwrap_or_default(),
                                oninput: move |evt: FormEvent| vm.write().set_input(idx, evt.value()),
                            }
                        }
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        onclick: move |_| vm.write().calculate(&advisor),
                        "Calculate Area"
                    }
                }
            }

            if let Some(result) = result {
                p {
                    class: if result.is_warning { "result result--warning" } else { "result" },
                    "{result.text}"
                }
            }
        }
    }
}
