pub mod fenced;
pub mod generator;
pub mod metrics;
pub mod providers;
pub mod store;

pub use generator::{GenerationOutcome, LessonGenerator};
pub use metrics::{get_metrics, init_metrics};
pub use providers::TextProvider;
pub use store::CourseStore;
