//! Shared `ViewModel` layer for the explorer tabs.
//!
//! # Components
//!
//! - [`SearchInput`] - Search prompt state (active flag and query)
//! - [`OverlayState`] - Mutually exclusive overlays (help, details, pickers)
//! - [`StatusMessage`] - Temporary status message display
//! - [`CycleFilter`] / [`OptionCycle`] - Cycling through enum values or
//!   runtime option lists such as vendor names
//! - [`PickerState`] - Cursor over a multi-select list
//!
//! Each tab embeds these instead of carrying loose booleans:
//!
//! ```ignore
//! pub struct ExplorerApp {
//!     pub overlays: OverlayState,
//!     pub search: SearchInput,
//!     pub status: StatusMessage,
//! }
//! ```

mod filter;
mod overlay;
mod search;
mod status;

pub use filter::{CycleFilter, OptionCycle, PickerState};
pub use overlay::{OverlayKind, OverlayState};
pub use search::SearchInput;
pub use status::StatusMessage;
