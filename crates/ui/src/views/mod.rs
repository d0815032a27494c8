mod assessment;
mod classify;
mod learning;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use assessment::AssessmentView;
pub use classify::ClassifyView;
pub use learning::LearningView;
