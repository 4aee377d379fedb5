//! Button widget for user interactions.

use serde::{Deserialize, Serialize};

/// Message emitted when the button is pressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonPressed;

/// Headless button: a label, an enabled flag and a press transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Button {
    /// Button label
    label: String,
    /// Whether the button is disabled
    disabled: bool,
}

impl Default for Button {
    fn default() -> Self {
        Self::new("Button")
    }
}

impl Button {
    /// Create a new button with label.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            disabled: false,
        }
    }

    /// Set disabled state.
    #[must_use]
    pub const fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Button label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Whether the button is disabled.
    #[must_use]
    pub const fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Press the button. Yields nothing when disabled.
    #[must_use]
    pub fn press(&self) -> Option<ButtonPressed> {
        if self.disabled {
            None
        } else {
            Some(ButtonPressed)
        }
    }
}
