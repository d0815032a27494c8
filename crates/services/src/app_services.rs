use std::sync::Arc;
use std::time::Duration;

use storage::ArtifactRepository;

use crate::advisor_service::ShapeAdvisorService;
use crate::classification_service::ClassificationService;
use crate::error::ArtifactLoadError;
use crate::quiz_service::QuizService;

/// Assembles the app-facing services.
#[derive(Clone)]
pub struct AppServices {
    advisor: ShapeAdvisorService,
    quiz: QuizService,
    classifier: Option<Arc<ClassificationService>>,
}

impl AppServices {
    /// Services for the tutor only.
    #[must_use]
    pub fn tutor(advance_delay: Duration) -> Self {
        Self {
            advisor: ShapeAdvisorService::new(),
            quiz: QuizService::new(advance_delay),
            classifier: None,
        }
    }

    /// Tutor services plus a classifier loaded from `repo`.
    ///
    /// # Errors
    ///
    /// Returns `ArtifactLoadError` if the artifacts cannot be loaded.
    pub async fn with_classifier(
        advance_delay: Duration,
        repo: &dyn ArtifactRepository,
    ) -> Result<Self, ArtifactLoadError> {
        let classifier = ClassificationService::load(repo).await?;
        Ok(Self {
            classifier: Some(Arc::new(classifier)),
            ..Self::tutor(advance_delay)
        })
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
}
