//! In-memory lesson and module collections.
//!
//! Each collection sits behind its own `RwLock`; a create is one append under
//! the write lock, an update is one scan-and-merge under it. Nothing is
//! persisted.

use crate::models::{Lesson, LessonPatch, Module};
use tokio::sync::RwLock;

#[derive(Debug, Default)]
pub struct CourseStore {
    lessons: RwLock<Vec<Lesson>>,
    modules: RwLock<Vec<Module>>,
}

impl CourseStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert_lesson(&self, lesson: Lesson) -> Lesson {
        self.lessons.write().await.push(lesson.clone());
        lesson
    }

    /// All lessons in insertion order.
    pub async fn list_lessons(&self) -> Vec<Lesson> {
        self.lessons.read().await.clone()
    }

    /// Merge `patch` into the first lesson with `id`; `None` when absent.
    pub async fn update_lesson(&self, id: &str, patch: LessonPatch) -> Option<Lesson> {
        let mut lessons = self.lessons.write().await;
        let lesson = lessons.iter_mut().find(|lesson| lesson.id == id)?;
        lesson.merge(patch);
        Some(lesson.clone())
    }

    pub async fn insert_module(&self, module: Module) -> Module {
        self.modules.write().await.push(module.clone());
        module
    }

    /// All modules in insertion order.
    pub async fn list_modules(&self) -> Vec<Module> {
        self.modules.read().await.clone()
    }

    pub async fn lesson_count(&self) -> usize {
        self.lessons.read().await.len()
    }

    pub async fn module_count(&self) -> usize {
        self.modules.read().await.len()
    }
}
