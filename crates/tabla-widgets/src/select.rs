//! Select/Dropdown widget for choosing from options.
//!
//! Headless controlled component: the host owns the value, the widget
//! owns the transient dropdown state (visibility, search query,
//! highlight) and emits [`SelectionChanged`] when an option is chosen.

use serde::{Deserialize, Serialize};

/// A selectable option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    /// Unique value for this option
    pub value: String,
    /// Display label
    pub label: String,
    /// Whether this option is disabled
    pub disabled: bool,
}

impl SelectOption {
    /// Create a new option.
    #[must_use]
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            disabled: false,
        }
    }

    /// Create an option where value equals label.
    #[must_use]
    pub fn simple(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            value: text.clone(),
            label: text,
            disabled: false,
        }
    }

    /// Set disabled state.
    #[must_use]
    pub const fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

/// Message emitted when selection changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionChanged {
    /// The newly selected value
    pub value: String,
    /// Index of the selected option in the full option list
    pub index: usize,
}

/// Select/Dropdown widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Select {
    /// Available options
    options: Vec<SelectOption>,
    /// Controlled value (None for no selection)
    value: Option<String>,
    /// Placeholder text when nothing is selected
    placeholder: String,
    /// Whether typing filters the option list
    searchable: bool,
    /// Current search query
    #[serde(skip)]
    query: String,
    /// Whether the dropdown is currently open
    #[serde(skip)]
    open: bool,
    /// Highlighted index into the visible option list
    #[serde(skip)]
    highlighted: Option<usize>,
}

impl Default for Select {
    fn default() -> Self {
        Self::new()
    }
}

impl Select {
    /// Create a new select widget.
    #[must_use]
    pub fn new() -> Self {
        Self {
            options: Vec::new(),
            value: None,
            placeholder: "Select...".to_string(),
            searchable: false,
            query: String::new(),
            open: false,
            highlighted: None,
        }
    }

    /// Add an option.
    #[must_use]
    pub fn option(mut self, opt: SelectOption) -> Self {
        self.options.push(opt);
        self
    }

    /// Add multiple options.
    #[must_use]
    pub fn options(mut self, opts: impl IntoIterator<Item = SelectOption>) -> Self {
        self.options.extend(opts);
        self
    }

    /// Set placeholder text.
    #[must_use]
    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = text.into();
        self
    }

    /// Set the controlled value.
    #[must_use]
    pub fn value(mut self, value: Option<impl Into<String>>) -> Self {
        self.value = value.map(Into::into);
        self
    }

    /// Enable search filtering.
    #[must_use]
    pub const fn searchable(mut self, searchable: bool) -> Self {
        self.searchable = searchable;
        self
    }

    /// Label shown in the input: the selected option's label, or the
    /// placeholder when the value matches no option.
    #[must_use]
    pub fn display_label(&self) -> &str {
        self.value
            .as_deref()
            .and_then(|value| self.options.iter().find(|o| o.value == value))
            .map_or(&self.placeholder, |option| &option.label)
    }

    /// Currently selected value.
    #[must_use]
    pub fn selected_value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Whether the dropdown is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Current search query.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Highlighted index into [`Self::visible_options`].
    #[must_use]
    pub const fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    /// Options matching the current query: all of them when search is
    /// disabled or the query is empty, case-insensitive label substring
    /// match otherwise.
    #[must_use]
    pub fn visible_options(&self) -> Vec<&SelectOption> {
        if !self.searchable || self.query.is_empty() {
            return self.options.iter().collect();
        }
        let needle = self.query.to_lowercase();
        self.options
            .iter()
            .filter(|o| o.label.to_lowercase().contains(&needle))
            .collect()
    }

    /// Open the dropdown.
    pub fn show(&mut self) {
        self.open = true;
    }

    /// Close the dropdown and clear the transient search state.
    pub fn dismiss(&mut self) {
        self.open = false;
        self.query.clear();
        self.highlighted = None;
    }

    /// Set the search query, resetting the highlight to the first
    /// visible option. Ignored when search is disabled.
    pub fn set_query(&mut self, query: impl Into<String>) {
        if !self.searchable {
            return;
        }
        self.query = query.into();
        self.highlighted = if self.visible_options().is_empty() {
            None
        } else {
            Some(0)
        };
    }

    /// Move the highlight down the visible list, clamped at the end.
    pub fn highlight_next(&mut self) {
        let visible = self.visible_options().len();
        if visible == 0 {
            self.highlighted = None;
            return;
        }
        self.highlighted = Some(match self.highlighted {
            Some(index) => (index + 1).min(visible - 1),
            None => 0,
        });
    }

    /// Move the highlight up the visible list, clamped at the start.
    pub fn highlight_previous(&mut self) {
        let visible = self.visible_options().len();
        if visible == 0 {
            self.highlighted = None;
            return;
        }
        self.highlighted = Some(self.highlighted.map_or(0, |index| index.saturating_sub(1)));
    }

    /// Select an option by value. Closes the dropdown and clears the
    /// query. Yields nothing for unknown or disabled options.
    #[must_use]
    pub fn select(&mut self, value: &str) -> Option<SelectionChanged> {
        let (index, option) = self
            .options
            .iter()
            .enumerate()
            .find(|(_, o)| o.value == value)?;
        if option.disabled {
            return None;
        }
        let changed = SelectionChanged {
            value: option.value.clone(),
            index,
        };
        self.value = Some(option.value.clone());
        self.dismiss();
        Some(changed)
    }

    /// Select the highlighted option.
    #[must_use]
    pub fn commit_highlighted(&mut self) -> Option<SelectionChanged> {
        let index = self.highlighted?;
        let value = self.visible_options().get(index)?.value.clone();
        self.select(&value)
    }
}
