//! Filter cycling for TUI selectors.
//!
//! Two kinds of selector exist: enum-backed ones with a fixed set of values
//! ([`CycleFilter`]) and ones whose options are only known once a dataset is
//! loaded, like vendor names ([`OptionCycle`]).

use crate::filter::ProductSortKey;

/// Trait for filter types that can cycle through options.
pub trait CycleFilter: Clone + Copy + Default {
    /// Get the next filter in the cycle.
    #[must_use]
    fn next(&self) -> Self;

    /// Get the previous filter in the cycle.
    #[must_use]
    fn prev(&self) -> Self;

    /// Get a display name for the filter.
    fn display_name(&self) -> &str;
}

impl CycleFilter for ProductSortKey {
    fn next(&self) -> Self {
        ProductSortKey::next(*self)
    }

    fn prev(&self) -> Self {
        let mut key = *self;
        for _ in 1..Self::ALL.len() {
            key = ProductSortKey::next(key);
        }
        key
    }

    fn display_name(&self) -> &str {
        self.label()
    }
}

/// Cycles a string selection through `"" (All) → options[0] → … → "" `.
///
/// The empty string stands for "no constraint".
pub struct OptionCycle;

impl OptionCycle {
    /// Value after `current`. A value missing from `options` restarts at "All".
    #[must_use]
    pub fn next(current: &str, options: &[String]) -> String {
        if options.is_empty() {
            return String::new();
        }
        if current.is_empty() {
            return options[0].clone();
        }
        match options.iter().position(|o| o == current) {
            Some(i) if i + 1 < options.len() => options[i + 1].clone(),
            _ => String::new(),
        }
    }

    /// Value before `current`.
    #[must_use]
    pub fn prev(current: &str, options: &[String]) -> String {
        let Some(last) = options.last() else {
            return String::new();
        };
        if current.is_empty() {
            return last.clone();
        }
        match options.iter().position(|o| o == current) {
            Some(0) | None => String::new(),
            Some(i) => options[i - 1].clone(),
        }
    }

    /// Label for a selector value.
    #[must_use]
    pub fn display(current: &str) -> &str {
        if current.is_empty() {
            "All"
        } else {
            current
        }
    }
}

/// Cursor over the rows of a multi-select picker.
#[derive(Debug, Clone, Copy, Default)]
pub struct PickerState {
    pub cursor: usize,
}

impl PickerState {
    pub fn down(&mut self, len: usize) {
        if len > 0 && self.cursor + 1 < len {
            self.cursor += 1;
        }
    }

    pub fn up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Keep the cursor on a valid row after the option list changes.
    pub fn clamp(&mut self, len: usize) {
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }

    pub fn reset(&mut self) {
        self.cursor = 0;
    }
}
