//! Expand/collapse state for informational cards.
//!
//! One configurable type serves every card on the site; each card owns its
//! own [`CardToggle`] and nothing coordinates between them.

#[cfg(test)]
#[path = "cards_test.rs"]
mod cards_test;

/// Per-card-family settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CardToggleConfig {
    pub expand_ms: u32,
    pub collapse_ms: u32,
    /// Refuse to expand when the body is whitespace-only.
    pub guard_empty: bool,
}

impl Default for CardToggleConfig {
    fn default() -> Self {
        Self { expand_ms: 300, collapse_ms: 300, guard_empty: true }
    }
}

impl CardToggleConfig {
    /// Inline transition for the card body.
    #[must_use]
    pub fn transition_style(&self, expanded: bool) -> String {
        let ms = if expanded { self.expand_ms } else { self.collapse_ms };
        format!("transition: all {ms}ms ease")
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CardToggle {
    pub expanded: bool,
    pub config: CardToggleConfig,
}

impl CardToggle {
    #[must_use]
    pub fn new(config: CardToggleConfig) -> Self {
        Self { expanded: false, config }
    }

    /// Flip the card. Expansion is refused for empty content; collapse never is.
    ///
    /// Returns the resulting expanded flag.
    pub fn toggle(&mut self, content: &str) -> bool {
        if self.expanded {
            self.expanded = false;
        } else if self.can_expand(content) {
            self.expanded = true;
        }
        self.expanded
    }

    #[must_use]
    pub fn can_expand(&self, content: &str) -> bool {
        !self.config.guard_empty || !content.trim().is_empty()
    }

    #[must_use]
    pub fn aria_expanded(&self) -> &'static str {
        if self.expanded { "true" } else { "false" }
    }

    #[must_use]
    pub fn icon_class(&self) -> &'static str {
        if self.expanded { "icon rotated" } else { "icon" }
    }
}

/// Keys that toggle a focused card header.
#[must_use]
pub fn is_toggle_key(key: &str) -> bool {
    matches!(key, "Enter" | " " | "Spacebar")
}
