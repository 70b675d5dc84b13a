//! Keyboard focus tracking shared by every widget in a frame.
//!
//! Widgets never hold focus themselves. They ask the store, through the frame
//! context, whether one of their tags is focused, and issue a
//! [`FocusCommand`] when a pointer press should move focus to them. The
//! store is the single source of truth for which tag currently receives key
//! events.

use tracing::debug;

use crate::ui::host::events::Tag;

/// Request to move keyboard focus to `tag`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusCommand {
    pub tag: Tag,
}

/// Minimal focus store: at most one focused tag at a time.
#[derive(Debug, Default)]
pub struct FocusStore {
    current: Option<Tag>,
}

impl FocusStore {
    pub fn new() -> Self {
        Self { current: None }
    }

    /// Returns the currently focused tag, if any.
    pub fn current(&self) -> Option<Tag> {
        self.current
    }

    /// Moves focus to `tag`.
    pub fn request(&mut self, tag: Tag) {
        if self.current != Some(tag) {
            debug!(?tag, previous = ?self.current, "focus moved");
        }
        self.current = Some(tag);
    }

    /// Applies a focus command issued during layout.
    pub fn execute(&mut self, command: FocusCommand) {
        self.request(command.tag);
    }

    /// Drops focus entirely.
    pub fn clear(&mut self) {
        if let Some(previous) = self.current.take() {
            debug!(?previous, "focus cleared");
        }
    }

    /// Checks whether the given tag is currently focused.
    pub fn is_focused(&self, tag: Tag) -> bool {
        self.current == Some(tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_replaces_previous_focus() {
        let first = Tag::next();
        let second = Tag::next();
        let mut store = FocusStore::new();

        store.request(first);
        assert!(store.is_focused(first));

        store.execute(FocusCommand { tag: second });
        assert!(!store.is_focused(first));
        assert!(store.is_focused(second));

        store.clear();
        assert_eq!(store.current(), None);
    }
}
