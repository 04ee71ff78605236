//! The static curriculum: modules and lessons.
//!
//! Read-only data injected at startup; nothing here is mutated at runtime.
//! Ids are unique within their parent, lessons are addressed by 0-based
//! position, and the content endpoint speaks 1-based lesson numbers (the
//! shell converts).

use serde::{Deserialize, Serialize};

/// One lesson within a module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lesson {
    /// Id unique within the parent module.
    pub id: u32,
    /// Display title.
    pub title: String,
}

impl Lesson {
    pub fn new(id: u32, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
        }
    }
}

/// One module of the curriculum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Module {
    /// Id unique within the catalog.
    pub id: u32,
    /// Display title.
    pub title: String,
    /// Lessons, in curriculum order.
    pub lessons: Vec<Lesson>,
}

impl Module {
    pub fn new(id: u32, title: impl Into<String>, lessons: Vec<Lesson>) -> Self {
        Self {
            id,
            title: title.into(),
            lessons,
        }
    }
}

/// The full curriculum.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    modules: Vec<Module>,
}

impl Catalog {
    /// Create a catalog from its modules.
    pub fn new(modules: Vec<Module>) -> Self {
        Self { modules }
    }

    /// All modules, in curriculum order.
    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    /// Find a module by id.
    pub fn module(&self, id: u32) -> Option<&Module> {
        self.modules.iter().find(|m| m.id == id)
    }

    /// Find a lesson by module id and 0-based position.
    pub fn lesson(&self, module_id: u32, index: usize) -> Option<&Lesson> {
        self.module(module_id)?.lessons.get(index)
    }
}
