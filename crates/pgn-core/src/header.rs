//! PGN header-line helpers — byte-exact, zero-copy.
//!
//! Archive files in the wild carry headers in arbitrary encodings, so
//! everything here works on raw bytes and never validates UTF-8.

/// Prefix of an Event header line, including the opening quote.
pub const EVENT_PREFIX: &[u8] = b"[Event \"";

/// Extract the tournament name from an Event header line.
///
/// The line must start with `[Event "`; the name runs from there to the
/// *last* `"` on the line, which must sit strictly after the prefix.
/// Anything past that quote (normally the closing `]`) is ignored.
/// Returns `None` for anything else, including an empty name
/// (`[Event ""]`) and a missing closing quote.
pub fn event_name(line: &[u8]) -> Option<&[u8]> {
    if !line.starts_with(EVENT_PREFIX) {
        return None;
    }
    let start = EVENT_PREFIX.len();
    let end = line.iter().rposition(|&b| b == b'"')?;
    if end > start {
        Some(&line[start..end])
    } else {
        None
    }
}

/// Strip a single trailing `\n`, if present.
///
/// A carriage return before it stays put: lines are split on `\n`
/// only, so a `\r` left behind by CRLF input counts as payload.
pub fn strip_newline(line: &[u8]) -> &[u8] {
    match line {
        [rest @ .., b'\n'] => rest,
        _ => line,
    }
}
