use dioxus::prelude::*;
use dioxus_router::Router;

use crate::routes::Route;
use crate::views::ClassifyView;

pub const WINDOW_TITLE: &str =
    "Intelligent Tutoring System For Mathematics (Area Calculation of Geometrics Shapes)";
pub const CLASSIFIER_TITLE: &str = "Tweet Classifier";

#[component]
fn FatalBoundary(children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: |errors: ErrorContext| rsx! {
                div { class: "fatal",
                    h1 { "Something went wrong" }
                    pre { "{errors:?}" }
                }
            },
            {children}
        }
    }
}

/// Root of the tutor window: Learning and Assessment tabs.
#[component]
pub fn TutorApp() -> Element {
    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }
        document::Title { "{WINDOW_TITLE}" }

        div { class: "app-root",
            FatalBoundary { Router::<Route> {} }
        }
    }
}

/// Root of the classifier window: a single form.
#[component]
pub fn ClassifierApp() -> Element {
    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }
        document::Title { "{CLASSIFIER_TITLE}" }

        div { class: "app-root",
            FatalBoundary {
                main { class: "content", ClassifyView {} }
            }
        }
    }
}
