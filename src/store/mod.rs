//! In-memory mock persistence for templates and rubrics.
//!
//! This is a stand-in, not a storage engine: entities live in a map behind a
//! mutex and vanish with the process. The shape mirrors what a real store
//! would expose so the studio's save calls have something to talk to.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::Utc;
use uuid::Uuid;

use crate::models::{ExamTemplate, Rubric, SavedRubric, SavedTemplate};

#[derive(Default)]
struct StoreInner {
    templates: HashMap<Uuid, SavedTemplate>,
    rubrics: HashMap<Uuid, SavedRubric>,
}

/// Shared handle to the mock store. Cloning is cheap; all clones see the same
/// data.
#[derive(Clone, Default)]
pub struct Store {
    inner: Arc<Mutex<StoreInner>>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn save_template(&self, template: ExamTemplate) -> SavedTemplate {
        let now = Utc::now();
        let saved = SavedTemplate {
            id: Uuid::new_v4(),
            template,
            created_at: now,
            updated_at: now,
        };
        let mut inner = self.inner.lock().expect("store lock poisoned");
        inner.templates.insert(saved.id, saved.clone());
        saved
    }

    pub fn get_template(&self, id: Uuid) -> Option<SavedTemplate> {
        let inner = self.inner.lock().expect("store lock poisoned");
        inner.templates.get(&id).cloned()
    }

    /// All templates, newest first.
    pub fn list_templates(&self) -> Vec<SavedTemplate> {
        let inner = self.inner.lock().expect("store lock poisoned");
        let mut templates: Vec<_> = inner.templates.values().cloned().collect();
        templates.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        templates
    }

    pub fn save_rubric(&self, rubric: Rubric) -> SavedRubric {
        let now = Utc::now();
        let saved = SavedRubric {
            id: Uuid::new_v4(),
            rubric,
            created_at: now,
            updated_at: now,
        };
        let mut inner = self.inner.lock().expect("store lock poisoned");
        inner.rubrics.insert(saved.id, saved.clone());
        saved
    }

    pub fn get_rubric(&self, id: Uuid) -> Option<SavedRubric> {
        let inner = self.inner.lock().expect("store lock poisoned");
        inner.rubrics.get(&id).cloned()
    }

    /// All rubrics, newest first.
    pub fn list_rubrics(&self) -> Vec<SavedRubric> {
        let inner = self.inner.lock().expect("store lock poisoned");
        let mut rubrics: Vec<_> = inner.rubrics.values().cloned().collect();
        rubrics.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        rubrics
    }
}
