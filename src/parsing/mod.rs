//! Text-level stages of the talk history pipeline.
//!
//! These are pure functions over strings, shared by [`TalkParser`](crate::TalkParser)
//! and usable on their own:
//!
//! - [`normalize`] - drop remittance notices and rejoin wrapped lines
//! - [`split_records`] - one logical line per element, title line removed
//! - [`classify_message`] - map a message field to its [`MessageType`](crate::MessageType)

pub mod classify;
pub mod normalize;

pub use classify::classify_message;
pub use normalize::{
    DATE_HEADER_PATTERN, REMITTANCE_PATTERN, TIME_PATTERN, collapse_wrapped_lines, normalize,
    remove_remittances, split_records,
};
