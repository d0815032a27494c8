use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{AssessmentView, LearningView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", LearningView)] Learning {},
        #[route("/assessment", AssessmentView)] Assessment {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Sidebar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Sidebar() -> Element {
    rsx! {
        nav { class: "sidebar",
            h1 { "Area Tutor" }
            ul {
                li { Link { to: Route::Learning {}, "Learning" } }
                li { Link { to: Route::Assessment {}, "Assessment" } }
            }
        }
    }
}
