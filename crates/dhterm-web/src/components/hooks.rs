//! Custom hooks for terminal components.

use leptos::prelude::*;

/// State for ghost text hints shown while typing.
#[derive(Clone, Copy)]
pub struct HintState {
    /// Suffix shown dimmed after the user's input.
    pub hint: RwSignal<Option<String>>,
}

impl HintState {
    pub fn new() -> Self {
        Self {
            hint: RwSignal::new(None),
        }
    }

    pub fn get(&self) -> Option<String> {
        self.hint.get_untracked()
    }

    pub fn set(&self, value: Option<String>) {
        self.hint.set(value);
    }

    pub fn clear(&self) {
        self.hint.set(None);
    }
}

impl Default for HintState {
    fn default() -> Self {
        Self::new()
    }
}
