// Prompt lock state - arbitrates auto-derived vs user-authored text

/// Whether the visible prompt tracks the styling controls or a manual edit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PromptMode {
    /// Recomputed from the styling controls on every input change
    #[default]
    Auto,
    /// Edited by hand or enhanced; recomputation is suppressed
    Manual,
}

/// The visible prompt text together with its lock mode
#[derive(Debug, Clone, Default)]
pub struct PromptState {
    text: String,
    mode: PromptMode,
}

impl PromptState {
    /// Start in `Auto` with the given composed text
    pub fn new(composed: String) -> Self {
        Self {
            text: composed,
            mode: PromptMode::Auto,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn mode(&self) -> PromptMode {
        self.mode
    }

    pub fn is_locked(&self) -> bool {
        self.mode == PromptMode::Manual
    }

    /// Input change: adopt freshly composed text in `Auto`, ignore it in `Manual`
    pub fn sync(&mut self, composed: String) {
        if self.mode == PromptMode::Auto {
            self.text = composed;
        }
    }

    /// Direct user edit: take the text verbatim and lock
    pub fn edit(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.mode = PromptMode::Manual;
    }

    /// Enhancement success: adopt the enhanced text and lock, so a stale
    /// auto-recompute cannot replace it
    pub fn apply_enhanced(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.mode = PromptMode::Manual;
    }

    /// Explicit unlock: back to `Auto`, overwriting with freshly composed text
    pub fn reset(&mut self, composed: String) {
        self.mode = PromptMode::Auto;
        self.text = composed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_unlocked() {
        let state = PromptState::new("composed".into());
        assert_eq!(state.mode(), PromptMode::Auto);
        assert_eq!(state.text(), "composed");
    }

    #[test]
    fn test_sync_updates_while_auto() {
        let mut state = PromptState::new("old".into());
        state.sync("new".into());
        assert_eq!(state.text(), "new");
        assert_eq!(state.mode(), PromptMode::Auto);
    }

    #[test]
    fn test_sync_ignored_while_manual() {
        let mut state = PromptState::new("composed".into());
        state.edit("my own words");
        state.sync("recomputed".into());
        assert_eq!(state.text(), "my own words");
        assert!(state.is_locked());
    }

    #[test]
    fn test_edit_locks_and_keeps_text_verbatim() {
        let mut state = PromptState::new("composed".into());
        state.edit("  exact text  ");
        assert_eq!(state.text(), "  exact text  ");
        assert_eq!(state.mode(), PromptMode::Manual);
    }

    #[test]
    fn test_enhancement_locks() {
        let mut state = PromptState::new("composed".into());
        state.apply_enhanced("a masterfully crafted prompt");
        assert!(state.is_locked());
        state.sync("recomputed".into());
        assert_eq!(state.text(), "a masterfully crafted prompt");
    }

    #[test]
    fn test_reset_unlocks_and_recomputes() {
        let mut state = PromptState::new("composed".into());
        state.edit("manual");
        state.reset("recomputed".into());
        assert_eq!(state.mode(), PromptMode::Auto);
        assert_eq!(state.text(), "recomputed");
        state.sync("synced again".into());
        assert_eq!(state.text(), "synced again");
    }
}
