//! Domain models for the course service.

pub mod lesson;
pub mod module;

pub use lesson::{Activity, KeyConcept, Lesson, LessonContent, LessonPatch, NO_RESOURCES};
pub use module::{Difficulty, Module};
