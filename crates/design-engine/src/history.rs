use std::collections::VecDeque;

use studio_types::DesignState;

/// Default bound on the undo log.
pub const DEFAULT_MAX_HISTORY: usize = 20;

/// Linear undo/redo log over whole-document snapshots.
///
/// `past` holds older checkpoints (oldest at the front), `present` the
/// checkpoint matching the live document, `future` the redo chain
/// (nearest redo at the front). Snapshots are owned deep copies: the log
/// never aliases the live document or values returned to the caller.
#[derive(Debug, Clone)]
pub struct DesignHistory {
    past: VecDeque<DesignState>,
    present: Option<DesignState>,
    future: VecDeque<DesignState>,
    max_history: usize,
}

impl DesignHistory {
    pub fn new() -> Self {
        Self::with_max_history(DEFAULT_MAX_HISTORY)
    }

    pub fn with_max_history(max_history: usize) -> Self {
        Self {
            past: VecDeque::new(),
            present: None,
            future: VecDeque::new(),
            max_history,
        }
    }

    /// Checkpoint the document as it is right now, making it the new
    /// `present`.
    ///
    /// The previous `present` moves into `past` (evicting the oldest
    /// entry once the bound is exceeded — never the entry just pushed),
    /// and any pending redo chain is discarded: a new edit after undo
    /// starts a fresh branch.
    pub fn push_state(&mut self, current: &DesignState) {
        if let Some(present) = self.present.take() {
            self.past.push_back(present);
            if self.past.len() > self.max_history {
                self.past.pop_front();
            }
        }
        self.present = Some(current.clone());
        self.future.clear();
    }

    /// Step back one checkpoint. Returns the restored snapshot, or None
    /// (with no state change) when there is nothing to undo.
    pub fn undo(&mut self) -> Option<DesignState> {
        let previous = self.past.pop_back()?;
        if let Some(present) = self.present.replace(previous.clone()) {
            self.future.push_front(present);
        }
        Some(previous)
    }

    /// Step forward one checkpoint. Returns the restored snapshot, or
    /// None (with no state change) when there is nothing to redo.
    pub fn redo(&mut self) -> Option<DesignState> {
        let next = self.future.pop_front()?;
        if let Some(present) = self.present.replace(next.clone()) {
            self.past.push_back(present);
        }
        Some(next)
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// Number of checkpoints reachable by undo.
    pub fn undo_depth(&self) -> usize {
        self.past.len()
    }

    /// Number of checkpoints reachable by redo.
    pub fn redo_depth(&self) -> usize {
        self.future.len()
    }

    pub fn max_history(&self) -> usize {
        self.max_history
    }
}

impl Default for DesignHistory {
    fn default() -> Self {
        Self::new()
    }
}
