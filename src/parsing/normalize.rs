//! Raw log normalization and record splitting.
//!
//! The exporter breaks long messages across physical lines and inserts
//! remittance notices that straddle a line break. Both are undone here before
//! any line is interpreted:
//!
//! 1. `\r\n` and lone `\r` line endings are folded to `\n`
//! 2. remittance notices are removed together with the newline before them
//! 3. every newline that is not followed by a date header or a time token is
//!    dropped, so each logical line is one date header or one message
//!
//! Step 2 must run before step 3: the notice is anchored on the newline that
//! step 3 would otherwise delete.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

/// Date header: `2023/01/01(日)`.
pub const DATE_HEADER_PATTERN: &str = r"^(\d{4})/(\d{2})/(\d{2})\([日月火水木金土]\)";

/// Time prefix of a message line: `09:00`.
pub const TIME_PATTERN: &str = r"^\d{2}:\d{2}";

/// Remittance notice, including the newline that precedes it.
pub const REMITTANCE_PATTERN: &str = r"\n(.+)[がに][\d,]*(\d) 円[をの]送金(を依頼)*しました。";

static REMITTANCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(REMITTANCE_PATTERN).expect("remittance pattern is valid"));

static LOGICAL_LINE_START: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:\d{4}/\d{2}/\d{2}\([日月火水木金土]\)|\d{2}:\d{2})")
        .expect("line start pattern is valid")
});

/// Removes every remittance notice.
///
/// # Example
///
/// ```rust
/// use talkboard::parsing::remove_remittances;
///
/// let text = "09:00\tAlice\tHi\nAliceがBobに1,000 円を送金しました。\n09:01\tBob\tThanks";
/// assert_eq!(remove_remittances(text), "09:00\tAlice\tHi\n09:01\tBob\tThanks");
/// ```
pub fn remove_remittances(text: &str) -> Cow<'_, str> {
    REMITTANCE.replace_all(text, "")
}

/// Drops every newline that does not start a date header or a message line.
///
/// # Example
///
/// ```rust
/// use talkboard::parsing::collapse_wrapped_lines;
///
/// let text = "09:00\tAlice\tfirst half\nsecond half\n09:01\tBob\tok";
/// assert_eq!(
///     collapse_wrapped_lines(text),
///     "09:00\tAlice\tfirst halfsecond half\n09:01\tBob\tok"
/// );
/// ```
pub fn collapse_wrapped_lines(text: &str) -> String {
    let mut out = String::with_capacity(text.len());

    for (i, line) in text.split('\n').enumerate() {
        if i > 0 && LOGICAL_LINE_START.is_match(line) {
            out.push('\n');
        }
        out.push_str(line);
    }

    out
}

/// Runs the full normalization: line endings, remittances, wrapped lines.
pub fn normalize(raw: &str) -> String {
    let unix: Cow<'_, str> = if raw.contains('\r') {
        Cow::Owned(raw.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(raw)
    };

    let without_remittances = remove_remittances(&unix);
    collapse_wrapped_lines(&without_remittances)
}

/// Splits normalized text into logical lines.
///
/// Double quotes are removed wherever they occur (the exporter quotes
/// multi-line bodies in the middle of the line), trailing whitespace is
/// trimmed, and the first line, the export title, is dropped.
pub fn split_records(text: &str) -> Vec<String> {
    text.lines()
        .skip(1)
        .map(|line| line.replace('"', "").trim_end().to_string())
        .collect()
}
