// src/models/guide.rs

//! User guide walkthrough steps and reader progress.

use serde::{Deserialize, Serialize};

/// One step of the user guide.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GuideStep {
    pub number: u32,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub content: Vec<String>,
}

/// Tracks which guide step is expanded and which are done.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuideProgress {
    active: Option<u32>,
    completed: Vec<u32>,
}

impl GuideProgress {
    pub fn new() -> Self {
        Self::default()
    }

    /// Expand a step, or collapse it if it is already expanded.
    pub fn toggle(&mut self, step: u32) {
        self.active = if self.active == Some(step) {
            None
        } else {
            Some(step)
        };
    }

    /// Mark a step as completed. Repeated calls have no effect.
    pub fn mark_complete(&mut self, step: u32) {
        if !self.completed.contains(&step) {
            self.completed.push(step);
        }
    }

    pub fn active(&self) -> Option<u32> {
        self.active
    }

    pub fn is_complete(&self, step: u32) -> bool {
        self.completed.contains(&step)
    }

    /// Completed steps in the order they were completed.
    pub fn completed(&self) -> &[u32] {
        &self.completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_opens_and_closes() {
        let mut progress = GuideProgress::new();
        progress.toggle(2);
        assert_eq!(progress.active(), Some(2));
        progress.toggle(3);
        assert_eq!(progress.active(), Some(3));
        progress.toggle(3);
        assert_eq!(progress.active(), None);
    }

    #[test]
    fn test_mark_complete_is_idempotent() {
        let mut progress = GuideProgress::new();
        progress.mark_complete(4);
        progress.mark_complete(1);
        progress.mark_complete(4);
        assert_eq!(progress.completed(), &[4, 1]);
        assert!(progress.is_complete(1));
        assert!(!progress.is_complete(2));
    }
}
