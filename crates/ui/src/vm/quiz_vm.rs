use services::{QuizService, ScheduledAdvance};
use tutor_core::model::{
    AnswerFeedback, COMPLETION_BANNER, COMPLETION_NOTE, FeedbackTone, QuizSession,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    Submit(String),
    Restart,
}

#[must_use]
pub fn tone_class(tone: FeedbackTone) -> &'static str {
    match tone {
        FeedbackTone::Success => "feedback feedback--success",
        FeedbackTone::Error => "feedback feedback--error",
        FeedbackTone::Warning => "feedback feedback--warning",
        FeedbackTone::Info => "feedback feedback--info",
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedbackVm {
    pub message: String,
    pub tone: FeedbackTone,
}

impl FeedbackVm {
    #[must_use]
    pub fn class(&self) -> &'static str {
        tone_class(self.tone)
    }
}

impl From<&AnswerFeedback> for FeedbackVm {
    fn from(feedback: &AnswerFeedback) -> Self {
        Self {
            message: feedback.message(),
            tone: feedback.tone(),
        }
    }
}

/// State of the Assessment tab.
#[derive(Clone, Debug, PartialEq)]
pub struct QuizVm {
    session: QuizSession,
    feedback: Option<FeedbackVm>,
}

impl QuizVm {
    #[must_use]
    pub fn new(service: &QuizService) -> Self {
        Self {
            session: service.start(),
            feedback: None,
        }
    }

    #[must_use]
    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.session.is_complete()
    }

    #[must_use]
    pub fn question_text(&self) -> String {
        match self.session.current_question() {
            Some(question) => format!("Question {}: {}", self.session.level(), question.prompt()),
            None => COMPLETION_BANNER.to_owned(),
        }
    }

    #[must_use]
    pub fn feedback(&self) -> Option<&FeedbackVm> {
        self.feedback.as_ref()
    }

    /// Submit an answer; returns the advance to schedule, if any.
    pub fn submit(&mut self, service: &QuizService, raw: &str) -> Option<ScheduledAdvance> {
        let step = service.submit(self.session.clone(), raw);
        self.session = step.session;
        self.feedback = Some(FeedbackVm::from(&step.feedback));
        step.advance
    }

    /// Apply a scheduled advance; returns whether the level moved.
    pub fn apply_advance(&mut self, service: &QuizService, scheduled: ScheduledAdvance) -> bool {
        let before = self.session.level();
        self.session = service.advance(self.session.clone(), scheduled);
        let moved = self.session.level() != before;
        if moved {
            self.feedback = self.session.is_complete().then(|| FeedbackVm {
                message: COMPLETION_NOTE.to_owned(),
                tone: FeedbackTone::Success,
            });
        }
        moved
    }

    pub fn restart(&mut self, service: &QuizService) {
        self.session = service.restart(self.session.clone());
        self.feedback = None;
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use tutor_core::model::INVALID_NUMBER_MESSAGE;

    fn service() -> QuizService {
        QuizService::new(Duration::ZERO)
    }

    #[test]
    fn shows_numbered_question() {
        let vm = QuizVm::new(&service());
        assert_eq!(
            vm.question_text(),
            "Question 1: What is the area of a rectangle with length 40 cm and breadth 20 cm?"
        );
        assert!(vm.feedback().is_none());
    }

    #[test]
    fn invalid_answer_is_a_warning() {
        let mut vm = QuizVm::new(&service());
        assert!(vm.submit(&service(), "abc").is_none());
        let feedback = vm.feedback().unwrap();
        assert_eq!(feedback.message, INVALID_NUMBER_MESSAGE);
        assert_eq!(feedback.class(), "feedback feedback--warning");
    }

    #[test]
    fn advance_clears_feedback_and_moves_on() {
        let service = service();
        let mut vm = QuizVm::new(&service);
        let scheduled = vm.submit(&service, "800").unwrap();
        assert_eq!(vm.feedback().unwrap().tone, FeedbackTone::Success);

        assert!(vm.apply_advance(&service, scheduled));
        assert!(vm.feedback().is_none());
        assert!(vm.question_text().starts_with("Question 2: "));
        assert!(!vm.apply_advance(&service, scheduled));
    }

    #[test]
    fn completing_shows_banner_and_note() {
        let service = service();
        let mut vm = QuizVm::new(&service);
        for answer in ["800", "25", "153.86", "36", "96"] {
            let scheduled = vm.submit(&service, answer).unwrap();
            vm.apply_advance(&service, scheduled);
        }
        assert!(vm.is_complete());
        assert_eq!(vm.question_text(), COMPLETION_BANNER);
        assert_eq!(vm.feedback().unwrap().message, COMPLETION_NOTE);

        vm.restart(&service);
        assert!(!vm.is_complete());
        assert!(vm.feedback().is_none());
    }
}
