//! Message-type classification.

use crate::config::MessageMarkers;
use crate::message::MessageType;

/// Maps a message field to its payload type.
///
/// Checked in priority order: stamp and picture markers must be the whole
/// field, album and note markers only its prefix. Anything else is a plain
/// message, so a marker buried inside longer text never matches.
///
/// # Example
///
/// ```rust
/// use talkboard::config::MessageMarkers;
/// use talkboard::parsing::classify_message;
/// use talkboard::MessageType;
///
/// let markers = MessageMarkers::default();
/// assert_eq!(classify_message("[スタンプ]", &markers), MessageType::Stamp);
/// assert_eq!(classify_message("[アルバム] 旅行", &markers), MessageType::Album);
/// assert_eq!(classify_message("見て[写真]", &markers), MessageType::Message);
/// ```
pub fn classify_message(field: &str, markers: &MessageMarkers) -> MessageType {
    if field == markers.stamp {
        MessageType::Stamp
    } else if field == markers.picture {
        MessageType::Picture
    } else if field.starts_with(markers.album.as_str()) {
        MessageType::Album
    } else if field.starts_with(markers.note.as_str()) {
        MessageType::Note
    } else {
        MessageType::Message
    }
}
