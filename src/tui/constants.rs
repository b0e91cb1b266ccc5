//! Named constants for TUI layout and navigation.

/// Number of rows to move per page-up/page-down action.
pub(crate) const PAGE_SIZE: usize = 10;

/// Lines scrolled per page key inside a details modal.
pub(crate) const DETAIL_PAGE_LINES: u16 = 10;

/// Details modal size as a percentage of the terminal.
pub(crate) const MODAL_WIDTH_PERCENT: u16 = 80;
pub(crate) const MODAL_HEIGHT_PERCENT: u16 = 85;

/// How long transient status messages stay visible, in seconds.
pub(crate) const STATUS_MESSAGE_SECS: u64 = 4;

/// Shown in place of a table with no rows.
pub(crate) const EMPTY_LIST_MESSAGE: &str = "No items match";
