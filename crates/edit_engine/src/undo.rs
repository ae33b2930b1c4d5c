//! Undo/redo history with edit batching
//!
//! Entries are document snapshots taken before each successful change.

use crate::{EditError, Result};
use std::time::{Duration, Instant};
use template_model::TemplateDocument;

/// Default number of undo entries kept per session
pub const DEFAULT_MAX_ENTRIES: usize = 100;

/// An entry in the undo or redo stack
#[derive(Debug, Clone)]
struct UndoEntry {
    /// What the change was, for menu labels
    label: String,
    /// The document as it was on the other side of the change
    snapshot: TemplateDocument,
    /// Edits with the same key inside the batch window collapse into one entry
    merge_key: Option<String>,
    timestamp: Instant,
}

/// Manages undo and redo stacks
#[derive(Debug, Clone)]
pub struct UndoManager {
    undo_stack: Vec<UndoEntry>,
    redo_stack: Vec<UndoEntry>,
    max_entries: usize,
    /// Consecutive edits with the same merge key within this window are merged
    batch_threshold: Duration,
}

impl UndoManager {
    pub fn new() -> Self {
        Self::with_limits(DEFAULT_MAX_ENTRIES, Duration::from_millis(500))
    }

    /// Create with custom limits
    pub fn with_limits(max_entries: usize, batch_threshold: Duration) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_entries,
            batch_threshold,
        }
    }

    /// Record the document state from before a change
    pub fn push(&mut self, label: impl Into<String>, before: TemplateDocument, merge_key: Option<String>) {
        self.redo_stack.clear();
        let now = Instant::now();

        if let (Some(last), Some(key)) = (self.undo_stack.last_mut(), merge_key.as_ref()) {
            if last.merge_key.as_ref() == Some(key)
                && now.duration_since(last.timestamp) < self.batch_threshold
            {
                // keep the older snapshot so one undo reverts the whole batch
                last.timestamp = now;
                return;
            }
        }

        self.undo_stack.push(UndoEntry {
            label: label.into(),
            snapshot: before,
            merge_key,
            timestamp: now,
        });

        while self.undo_stack.len() > self.max_entries {
            self.undo_stack.remove(0);
        }
    }

    /// Swap `current` for the most recent undo snapshot
    pub fn pop_undo(&mut self, current: TemplateDocument) -> Result<TemplateDocument> {
        let entry = self.undo_stack.pop().ok_or(EditError::UndoStackEmpty)?;
        self.redo_stack.push(UndoEntry {
            label: entry.label,
            snapshot: current,
            merge_key: None,
            timestamp: Instant::now(),
        });
        Ok(entry.snapshot)
    }

    /// Swap `current` for the most recent redo snapshot
    pub fn pop_redo(&mut self, current: TemplateDocument) -> Result<TemplateDocument> {
        let entry = self.redo_stack.pop().ok_or(EditError::RedoStackEmpty)?;
        self.undo_stack.push(UndoEntry {
            label: entry.label,
            snapshot: current,
            merge_key: None,
            timestamp: Instant::now(),
        });
        Ok(entry.snapshot)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_label(&self) -> Option<&str> {
        self.undo_stack.last().map(|e| e.label.as_str())
    }

    pub fn redo_label(&self) -> Option<&str> {
        self.redo_stack.last().map(|e| e.label.as_str())
    }

    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    /// Clear all undo/redo history
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

impl Default for UndoManager {
    fn default() -> Self {
        Self::new()
    }
}
