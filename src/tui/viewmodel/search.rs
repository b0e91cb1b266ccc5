//! Search prompt state.

/// Active flag and query of the `/` search prompt.
///
/// The query is applied live as a filter, so there is no result list here;
/// the owning tab re-filters after each edit.
#[derive(Debug, Clone, Default)]
pub struct SearchInput {
    /// Whether the prompt is capturing keystrokes
    pub active: bool,
    /// Current query
    pub query: String,
}

impl SearchInput {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the prompt, keeping `existing` as the starting query.
    pub fn start(&mut self, existing: &str) {
        self.active = true;
        self.query = existing.to_string();
    }

    /// Close the prompt, keeping the query.
    pub const fn stop(&mut self) {
        self.active = false;
    }

    /// Close the prompt and drop the query.
    pub fn cancel(&mut self) {
        self.active = false;
        self.query.clear();
    }

    pub fn push_char(&mut self, c: char) {
        self.query.push(c);
    }

    pub fn pop_char(&mut self) {
        self.query.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_cycle() {
        let mut search = SearchInput::new();
        search.start("ro");
        search.push_char('o');
        search.push_char('t');
        assert_eq!(search.query, "root");
        search.pop_char();
        assert_eq!(search.query, "roo");

        search.stop();
        assert!(!search.active);
        assert_eq!(search.query, "roo");

        search.start(&search.query.clone());
        search.cancel();
        assert!(search.query.is_empty());
    }
}
