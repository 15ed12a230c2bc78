//! # Escape Expansion
//!
//! Lets a user typing into a single-line terminal encode multi-line text with
//! the two-character sequences `\n` and `\t` (a backslash followed by a letter,
//! not real control characters).
//!
//! Expansion runs in two passes. The first splits on `\n` and joins the pieces
//! with real newlines, placing one in front of the first piece as well. The
//! second does the same over that result for `\t` and tabs. Every expanded
//! string therefore begins with a tab and a newline.
//!
//! ```rust
//! use clitext::utils::expand;
//!
//! assert_eq!(expand(r"a\nb"), "\t\na\nb");
//! assert_eq!(expand("plain"), "\t\nplain");
//! ```

const NEWLINE_ESCAPE: &str = "\\n";
const TAB_ESCAPE: &str = "\\t";

/// Replaces every literal `\n` and `\t` in `raw` with a real newline and tab.
pub fn expand(raw: &str) -> String {
    let newlined = join_prefixed(raw, NEWLINE_ESCAPE, '\n');
    join_prefixed(&newlined, TAB_ESCAPE, '\t')
}

fn join_prefixed(input: &str, pattern: &str, separator: char) -> String {
    let mut result = String::with_capacity(input.len() + 1);

    for piece in input.split(pattern) {
        result.push(separator);
        result.push_str(piece);
    }

    result
}
