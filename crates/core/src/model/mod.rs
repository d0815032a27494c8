pub mod quiz;
mod session;
mod shape;

pub use quiz::{
    ANSWER_TOLERANCE, NO_EXPLANATION, QuizError, QuizQuestion, explanation_for_level,
    standard_questions,
};
pub use session::{
    AnswerFeedback, COMPLETED_MESSAGE, COMPLETION_BANNER, COMPLETION_NOTE, CORRECT_MESSAGE,
    FeedbackTone, INVALID_NUMBER_MESSAGE, QuizSession, QuizState,
};
pub use shape::{
    Measure, PI_APPROX, Shape, ShapeError, ShapeSpec, compute_area, get_formula, list_shapes,
};
