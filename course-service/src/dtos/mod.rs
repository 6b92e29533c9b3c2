pub mod lessons;
pub mod modules;

pub use lessons::CreateLessonRequest;
pub use modules::CreateModuleRequest;
