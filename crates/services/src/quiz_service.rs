use std::time::Duration;

use tracing::{debug, info};
use tutor_core::model::{AnswerFeedback, QuizSession};

/// Pause between a correct answer and the next question.
pub const DEFAULT_ADVANCE_DELAY: Duration = Duration::from_secs(2);

//
// ─── DEFERRED ADVANCE ──────────────────────────────────────────────────────────
//

/// A level change that should happen once `delay` has passed.
///
/// It remembers which level it was issued for, so applying it to a session
/// that has since moved on (or restarted) changes nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledAdvance {
    from_level: u32,
    delay: Duration,
}

impl ScheduledAdvance {
    #[must_use]
    pub fn new(from_level: u32, delay: Duration) -> Self {
        Self { from_level, delay }
    }

    #[must_use]
    pub fn from_level(&self) -> u32 {
        self.from_level
    }

    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Wait out the delay on the tokio clock.
    pub async fn elapsed(self) -> Self {
        tokio::time::sleep(self.delay).await;
        self
    }

    #[must_use]
    pub fn is_stale(&self, session: &QuizSession) -> bool {
        !session.is_advance_pending() || session.level() != self.from_level
    }

    /// Advance `session` unless this schedule is stale for it.
    #[must_use]
    pub fn apply(&self, session: QuizSession) -> QuizSession {
        if self.is_stale(&session) {
            debug!(from_level = self.from_level, level = session.level(), "ignored stale advance");
            return session;
        }
        session.advance()
    }
}

//
// ─── SERVICE ───────────────────────────────────────────────────────────────────
//

/// Result of one answer submission.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizStep {
    pub session: QuizSession,
    pub feedback: AnswerFeedback,
    pub advance: Option<ScheduledAdvance>,
}

/// Drives the assessment and decides when the next question appears.
#[derive(Debug, Clone, Copy)]
pub struct QuizService {
    advance_delay: Duration,
}

impl Default for QuizService {
    fn default() -> Self {
        Self::new(DEFAULT_ADVANCE_DELAY)
    }
}

impl QuizService {
    #[must_use]
    pub fn new(advance_delay: Duration) -> Self {
        Self { advance_delay }
    }

    #[must_use]
    pub fn advance_delay(&self) -> Duration {
        self.advance_delay
    }

    #[must_use]
    pub fn start(&self) -> QuizSession {
        let session = QuizSession::standard();
        info!(levels = session.total_levels(), "quiz started");
        session
    }

    /// Check `raw` against the current question.
    ///
    /// A correct answer comes back with a `ScheduledAdvance`; every other
    /// outcome leaves the level where it was.
    #[must_use]
    pub fn submit(&self, session: QuizSession, raw: &str) -> QuizStep {
        let (session, feedback) = session.submit_answer(raw);
        debug!(level = session.level(), ?feedback, "answer submitted");

        let advance = feedback
            .schedules_advance()
            .then(|| ScheduledAdvance::new(session.level(), self.advance_delay));
        QuizStep {
            session,
            feedback,
            advance,
        }
    }

    /// Apply a scheduled advance and log completion.
    #[must_use]
    pub fn advance(&self, session: QuizSession, scheduled: ScheduledAdvance) -> QuizSession {
        let was_complete = session.is_complete();
        let session = scheduled.apply(session);
        if session.is_complete() && !was_complete {
            info!(levels = session.total_levels(), "quiz completed");
        }
        session
    }

    #[must_use]
    pub fn restart(&self, session: QuizSession) -> QuizSession {
        info!(from_level = session.level(), "quiz restarted");
        session.restart()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn correct_answer_schedules_with_configured_delay() {
        let service = QuizService::new(Duration::from_millis(250));
        let step = service.submit(service.start(), "800");
        assert_eq!(
            step.advance,
            Some(ScheduledAdvance::new(1, Duration::from_millis(250)))
        );
        assert_eq!(step.session.level(), 1);
    }

    #[test]
    fn wrong_or_invalid_answers_schedule_nothing() {
        let service = QuizService::default();
        assert!(service.submit(service.start(), "1").advance.is_none());
        assert!(service.submit(service.start(), "abc").advance.is_none());
    }

    #[test]
    fn stale_advance_is_ignored_after_restart() {
        let service = QuizService::default();
        let step = service.submit(service.start(), "800");
        let scheduled = step.advance.unwrap();
        let restarted = service.restart(step.session);
        assert!(scheduled.is_stale(&restarted));
        assert_eq!(service.advance(restarted, scheduled).level(), 1);
    }

    #[test]
    fn advance_applies_only_once() {
        let service = QuizService::default();
        let step = service.submit(service.start(), "800");
        let scheduled = step.advance.unwrap();
        let once = service.advance(step.session, scheduled);
        let twice = service.advance(once.clone(), scheduled);
        assert_eq!(once.level(), 2);
        assert_eq!(twice.level(), 2);
    }
}
