use std::sync::Arc;
use std::time::Duration;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use services::{ClassificationService, QuizService, ShapeAdvisorService};

use crate::context::{UiApp, build_app_context};
use crate::platform::{LinkOpenerRef, UiLinkOpener};
use crate::views::assessment::AssessmentTestHandles;
use crate::views::{AssessmentView, ClassifyView, LearningView};

struct NoopLinkOpener;

impl UiLinkOpener for NoopLinkOpener {
    fn open_url(&self, _url: &str) {}
}

struct TestApp {
    quiz: QuizService,
    classifier: Option<Arc<ClassificationService>>,
}

impl UiApp for TestApp {
    fn advisor(&self) -> ShapeAdvisorService {
        ShapeAdvisorService::new()
    }

    fn quiz(&self) -> QuizService {
        self.quiz
    }

    fn classifier(&self) -> Option<Arc<ClassificationService>> {
        self.classifier.clone()
    }

    fn link_opener(&self) -> LinkOpenerRef {
        Arc::new(NoopLinkOpener)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Learning,
    Assessment,
    Classify,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    assessment_handles: AssessmentTestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewHarnessRoot(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.assessment_handles.clone());
    match props.view {
        ViewKind::Learning => rsx! { LearningView {} },
        ViewKind::Assessment => rsx! { AssessmentView {} },
        ViewKind::Classify => rsx! { ClassifyView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub assessment_handles: AssessmentTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(Duration::from_millis(50), self.dom.wait_for_work()).await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(
    view: ViewKind,
    advance_delay: Duration,
    classifier: Option<ClassificationService>,
) -> ViewHarness {
    let app = Arc::new(TestApp {
        quiz: QuizService::new(advance_delay),
        classifier: classifier.map(Arc::new),
    });
    let assessment_handles = AssessmentTestHandles::default();

    let dom = VirtualDom::new_with_props(
        ViewHarnessRoot,
        ViewHarnessProps {
            app,
            view,
            assessment_handles: assessment_handles.clone(),
        },
    );

    ViewHarness {
        dom,
        assessment_handles,
    }
}
