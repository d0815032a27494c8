use crate::model::quiz::{QuizError, QuizQuestion, explanation_for_level, standard_questions};
use crate::number::parse_number;

pub const CORRECT_MESSAGE: &str = "✅ Congratulations, correct answer!";
pub const INVALID_NUMBER_MESSAGE: &str = "⚠️ Please enter a valid numerical answer.";
pub const COMPLETED_MESSAGE: &str = "🎉 Great job! You've completed the assessment.";
pub const COMPLETION_BANNER: &str = "🎉 Congratulations! You've completed all the questions.";
pub const COMPLETION_NOTE: &str = "Great job! You’ve successfully completed the assessment.";

//
// ─── STATE ─────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizState {
    InProgress { level: u32 },
    Completed,
}

/// How a feedback message should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackTone {
    Success,
    Error,
    Warning,
    Info,
}

/// Outcome of submitting an answer.
#[derive(Debug, Clone, PartialEq)]
pub enum AnswerFeedback {
    /// Correct answer; the session now waits for `QuizSession::advance`.
    Correct { level: u32 },
    Incorrect {
        level: u32,
        correct_answer: f64,
        explanation: String,
    },
    InvalidNumber,
    /// An earlier correct answer is still waiting for its advance.
    AwaitingNext { level: u32 },
    Completed,
}

impl AnswerFeedback {
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Correct { .. } | Self::AwaitingNext { .. } => CORRECT_MESSAGE.to_owned(),
            Self::Incorrect {
                correct_answer,
                explanation,
                ..
            } => format!(
                "❌ Wrong answer. The correct answer is {correct_answer}. {explanation}"
            ),
            Self::InvalidNumber => INVALID_NUMBER_MESSAGE.to_owned(),
            Self::Completed => COMPLETED_MESSAGE.to_owned(),
        }
    }

    #[must_use]
    pub fn tone(&self) -> FeedbackTone {
        match self {
            Self::Correct { .. } | Self::AwaitingNext { .. } => FeedbackTone::Success,
            Self::Incorrect { .. } => FeedbackTone::Error,
            Self::InvalidNumber => FeedbackTone::Warning,
            Self::Completed => FeedbackTone::Info,
        }
    }

    /// True when the caller should schedule `QuizSession::advance`.
    #[must_use]
    pub fn schedules_advance(&self) -> bool {
        matches!(self, Self::Correct { .. })
    }
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// Progress through an ordered list of questions.
///
/// Transitions consume the session and hand back the next one, so the whole
/// state machine can be driven without a UI. `level` is 1-based, only grows,
/// and stops at `questions.len() + 1` (completed).
#[derive(Debug, Clone, PartialEq)]
pub struct QuizSession {
    questions: Vec<QuizQuestion>,
    level: u32,
    advance_pending: bool,
}

impl QuizSession {
    /// # Errors
    ///
    /// Returns `QuizError::NoQuestions` if `questions` is empty.
    pub fn new(questions: Vec<QuizQuestion>) -> Result<Self, QuizError> {
        if questions.is_empty() {
            return Err(QuizError::NoQuestions);
        }
        Ok(Self {
            questions,
            level: 1,
            advance_pending: false,
        })
    }

    /// Session over the built-in five-level assessment.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            questions: standard_questions(),
            level: 1,
            advance_pending: false,
        }
    }

    #[must_use]
    pub fn level(&self) -> u32 {
        self.level
    }

    #[must_use]
    pub fn total_levels(&self) -> u32 {
        u32::try_from(self.questions.len()).unwrap_or(u32::MAX)
    }

    #[must_use]
    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    #[must_use]
    pub fn state(&self) -> QuizState {
        if self.level > self.total_levels() {
            QuizState::Completed
        } else {
            QuizState::InProgress { level: self.level }
        }
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.state() == QuizState::Completed
    }

    #[must_use]
    pub fn is_advance_pending(&self) -> bool {
        self.advance_pending
    }

    /// The question being asked, or `None` once every level is done.
    #[must_use]
    pub fn current_question(&self) -> Option<&QuizQuestion> {
        let idx = usize::try_from(self.level.checked_sub(1)?).ok()?;
        self.questions.get(idx)
    }

    /// Check a raw answer against the current question.
    ///
    /// Only a correct answer changes the session, and only by marking the
    /// advance as pending; the level moves when `advance` is applied.
    #[must_use]
    pub fn submit_answer(mut self, raw: &str) -> (Self, AnswerFeedback) {
        let level = self.level;
        if self.advance_pending {
            return (self, AnswerFeedback::AwaitingNext { level });
        }
        let Some(question) = self.current_question().cloned() else {
            return (self, AnswerFeedback::Completed);
        };
        let Ok(candidate) = parse_number(raw) else {
            return (self, AnswerFeedback::InvalidNumber);
        };

        if question.accepts(candidate) {
            self.advance_pending = true;
            return (self, AnswerFeedback::Correct { level });
        }

        let correct_answer = question.answer();
        let feedback = AnswerFeedback::Incorrect {
            level,
            correct_answer,
            explanation: explanation_for_level(level, correct_answer),
        };
        (self, feedback)
    }

    /// Move to the next level after a correct answer.
    ///
    /// Without a pending advance this is a no-op.
    #[must_use]
    pub fn advance(mut self) -> Self {
        if self.advance_pending && !self.is_complete() {
            self.level += 1;
        }
        self.advance_pending = false;
        self
    }

    /// Start over from level 1 with the same questions.
    #[must_use]
    pub fn restart(mut self) -> Self {
        self.level = 1;
        self.advance_pending = false;
        self
    }
}
