//! Client-side state.
//!
//! The comment panel is the only stateful piece of the page; everything in
//! `display` renders once and keeps nothing.

pub mod comments;
pub mod preference;

pub use comments::{CommentPanel, DeleteOutcome, LoadOutcome, SubmitOutcome};
pub use preference::DisplayPreference;
