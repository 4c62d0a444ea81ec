//! Keeps raw player input on one log line.

/// Characters of a command echoed into the log; anything after is elided.
const MAX_PREVIEW: usize = 80;

/// Render one command line as typed at the prompt for a `debug!` record.
///
/// The line terminator the reader left on the line (`\n` or `\r\n`) is
/// dropped, so `"m 5\n"` logs as `m 5`. What remains is quoted so that
/// blank lines and stray spaces stay visible. Inside the quotes, bytes that
/// were not valid UTF-8 show as `\?` and other control characters as
/// `\xNN`. Pasted junk longer than [`MAX_PREVIEW`] characters is cut with
/// an ellipsis.
pub fn escape_input(line: &str) -> String {
    use std::fmt::Write;
    let cmd = line
        .strip_suffix('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .unwrap_or(line);
    let mut out = String::with_capacity(cmd.len().min(MAX_PREVIEW) + 4);
    out.push('"');
    for (count, ch) in cmd.chars().enumerate() {
        if count == MAX_PREVIEW {
            out.push('…');
            break;
        }
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            '\n' => out.push_str("\\n"),
            char::REPLACEMENT_CHARACTER => out.push_str("\\?"),
            c if c.is_control() => {
                let _ = write!(&mut out, "\\x{:02X}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
