use thiserror::Error;

/// Maximum distance between a submitted and a correct answer that still counts.
pub const ANSWER_TOLERANCE: f64 = 0.01;

/// Fallback used when a level has no canned walkthrough.
pub const NO_EXPLANATION: &str = "No step-by-step explanation is available for this question.";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("a quiz needs at least one question")]
    NoQuestions,
}

/// A single quiz prompt and the numeric answer it expects.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizQuestion {
    prompt: String,
    answer: f64,
}

impl QuizQuestion {
    #[must_use]
    pub fn new(prompt: impl Into<String>, answer: f64) -> Self {
        Self {
            prompt: prompt.into(),
            answer,
        }
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn answer(&self) -> f64 {
        self.answer
    }

    /// Whether `candidate` is within `ANSWER_TOLERANCE` of the answer.
    ///
    /// The difference is rounded to nine decimals first, so an answer that is
    /// 0.01 away in decimal terms is rejected even when the float subtraction
    /// comes out a hair below 0.01.
    #[must_use]
    pub fn accepts(&self, candidate: f64) -> bool {
        let diff = ((candidate - self.answer).abs() * 1e9).round() / 1e9;
        diff < ANSWER_TOLERANCE
    }
}

/// The five-level assessment, easiest first.
#[must_use]
pub fn standard_questions() -> Vec<QuizQuestion> {
    vec![
        QuizQuestion::new(
            "What is the area of a rectangle with length 40 cm and breadth 20 cm?",
            800.0,
        ),
        QuizQuestion::new(
            "What is the area of a triangle with base 10 cm and height 5 cm?",
            25.0,
        ),
        QuizQuestion::new(
            "What is the area of a circle with radius 7 cm? (Use π = 3.14)",
            153.86,
        ),
        QuizQuestion::new("What is the area of a square with side 6 cm?", 36.0),
        QuizQuestion::new("What is the surface area of a cube with side 4 cm?", 96.0),
    ]
}

/// Step-by-step correction shown after a wrong answer at `level` (1-based).
#[must_use]
pub fn explanation_for_level(level: u32, answer: f64) -> String {
    match level {
        1 => format!("Area = length * breadth = 40 cm * 20 cm = {answer} cm²"),
        2 => format!("Area = 0.5 * base * height = 0.5 * 10 cm * 5 cm = {answer} cm²"),
        3 => format!("Area = π * r² = 3.14 * (7 cm)² = {answer} cm²"),
        4 => format!("Area = side² = (6 cm)² = {answer} cm²"),
        5 => format!("Surface Area = 6 * side² = 6 * (4 cm)² = {answer} cm²"),
        _ => NO_EXPLANATION.to_owned(),
    }
}
