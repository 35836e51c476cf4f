//! # Input State Helper
//!
//! Per-field input state with an explicit "touched" flag.
//!
//! ## Why This Exists
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                  Placeholder-as-Empty Convention                        │
//! │                                                                         │
//! │  The legacy UI gave each text box instructional placeholder text       │
//! │  ("Enter Product Name") and detected "empty" by comparing the          │
//! │  rendered text against the placeholder string, or by checking the      │
//! │  foreground color. UI styling doubled as data typing.                  │
//! │                                                                         │
//! │  FieldInput replaces that with explicit state:                         │
//! │                                                                         │
//! │    { placeholder, raw, touched }                                       │
//! │                                                                         │
//! │  • untouched            → display placeholder, value() = None          │
//! │  • touched, blank text  → value() = None                               │
//! │  • touched, real text   → value() = Some(trimmed)                      │
//! │                                                                         │
//! │  No color comparison, no sentinel string comparison, same behavior.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The invariant carried through the whole application: a field showing its
//! placeholder is never treated as user-supplied data.

use serde::Serialize;

/// A single text input with placeholder semantics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldInput {
    /// Instructional text shown while the field is untouched.
    placeholder: &'static str,

    /// The text as entered (or loaded from a selected row).
    raw: String,

    /// Whether the field currently holds real data rather than the
    /// placeholder. Cleared by `reset`, set by `set` and `fill(Some)`.
    touched: bool,
}

impl FieldInput {
    /// Creates an untouched field with the given placeholder text.
    pub fn new(placeholder: &'static str) -> Self {
        FieldInput {
            placeholder,
            raw: String::new(),
            touched: false,
        }
    }

    /// The placeholder text for this field.
    pub fn placeholder(&self) -> &'static str {
        self.placeholder
    }

    /// What a UI would render: the placeholder while untouched, the raw
    /// text once the field holds data.
    pub fn display_text(&self) -> &str {
        if self.touched {
            &self.raw
        } else {
            self.placeholder
        }
    }

    /// Whether the field is currently in placeholder state.
    pub fn is_placeholder(&self) -> bool {
        !self.touched
    }

    /// The effective user-supplied value.
    ///
    /// `None` while the field is untouched or holds only whitespace; the
    /// trimmed text otherwise. Placeholder text never leaks out of here.
    pub fn value(&self) -> Option<&str> {
        if !self.touched {
            return None;
        }
        let trimmed = self.raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed)
        }
    }

    /// Replaces the field's text with user input, marking it touched.
    pub fn set(&mut self, text: impl Into<String>) {
        self.raw = text.into();
        self.touched = true;
    }

    /// Loads a store value into the field.
    ///
    /// A `None` (a NULL cell in the clicked row) resets this one field back
    /// to its placeholder instead of showing an empty box.
    pub fn fill<T: ToString>(&mut self, value: Option<T>) {
        match value {
            Some(v) => self.set(v.to_string()),
            None => self.reset(),
        }
    }

    /// Returns the field to placeholder state, discarding any text.
    pub fn reset(&mut self) {
        self.raw.clear();
        self.touched = false;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_in_placeholder_state() {
        let field = FieldInput::new("Enter Product Name");
        assert!(field.is_placeholder());
        assert_eq!(field.display_text(), "Enter Product Name");
        assert_eq!(field.value(), None);
    }

    #[test]
    fn test_set_marks_touched() {
        let mut field = FieldInput::new("Enter Price");
        field.set("50");
        assert!(!field.is_placeholder());
        assert_eq!(field.display_text(), "50");
        assert_eq!(field.value(), Some("50"));
    }

    #[test]
    fn test_blank_text_counts_as_empty() {
        let mut field = FieldInput::new("Enter Packing");
        field.set("   ");
        assert_eq!(field.value(), None);
    }

    #[test]
    fn test_value_is_trimmed() {
        let mut field = FieldInput::new("Enter Product Name");
        field.set("  Milk  ");
        assert_eq!(field.value(), Some("Milk"));
    }

    #[test]
    fn test_typing_the_placeholder_text_is_real_data() {
        // With an explicit touched flag, text that happens to equal the
        // placeholder is still user data. The color-comparison convention
        // could not distinguish the two.
        let mut field = FieldInput::new("Enter Packing");
        field.set("Enter Packing");
        assert_eq!(field.value(), Some("Enter Packing"));
    }

    #[test]
    fn test_reset_restores_placeholder() {
        let mut field = FieldInput::new("Enter Quantity");
        field.set("10");
        field.reset();
        assert!(field.is_placeholder());
        assert_eq!(field.display_text(), "Enter Quantity");
        assert_eq!(field.value(), None);
    }

    #[test]
    fn test_fill_some_loads_value() {
        let mut field = FieldInput::new("Enter Price");
        field.fill(Some(50));
        assert_eq!(field.value(), Some("50"));
    }

    #[test]
    fn test_fill_none_resets_to_placeholder() {
        let mut field = FieldInput::new("Enter Packing");
        field.set("1L");
        field.fill(None::<String>);
        assert!(field.is_placeholder());
    }
}
