pub mod app;
pub mod context;
pub mod platform;
pub mod routes;
pub mod views;
pub mod vm;

pub use app::{ClassifierApp, TutorApp, WINDOW_TITLE};
pub use context::{AppContext, UiApp, build_app_context};
