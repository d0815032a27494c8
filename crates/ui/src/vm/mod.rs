mod classify_vm;
mod learning_vm;
mod quiz_vm;

pub use classify_vm::{ClassifyResultVm, NOT_LOADED_MESSAGE, map_classify_result};
pub use learning_vm::{FormulaSheetVm, LearningVm, ResultLineVm, shape_options};
pub use quiz_vm::{FeedbackVm, QuizIntent, QuizVm, tone_class};
