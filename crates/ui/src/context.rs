use std::sync::Arc;

use services::{ClassificationService, QuizService, ShapeAdvisorService};

use crate::platform::LinkOpenerRef;

/// What the composition root hands to the views.
pub trait UiApp: Send + Sync {
    fn advisor(&self) -> ShapeAdvisorService;
    fn quiz(&self) -> QuizService;
    /// `None` when the window was launched without classifier artifacts.
    fn classifier(&self) -> Option<Arc<ClassificationService>>;
    fn link_opener(&self) -> LinkOpenerRef;
}

#[derive(Clone)]
pub struct AppContext {
    advisor: ShapeAdvisorService,
    quiz: QuizService,
    classifier: Option<Arc<ClassificationService>>,
    link_opener: LinkOpenerRef,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            advisor: app.advisor(),
            quiz: app.quiz(),
            classifier: app.classifier(),
            link_opener: app.link_opener(),
        }
    }

    #[must_use]
    pub fn advisor(&self) -> ShapeAdvisorService {
        self.advisor
    }

    #[must_use]
    pub fn quiz(&self) -> QuizService {
        self.quiz
    }

    #[must_use]
    pub fn classifier(&self) -> Option<Arc<ClassificationService>> {
        self.classifier.clone()
    }

    #[must_use]
    pub fn link_opener(&self) -> LinkOpenerRef {
        Arc::clone(&self.link_opener)
    }
}

// Provided by the composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
