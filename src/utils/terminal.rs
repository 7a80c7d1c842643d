//! Terminal output sanitization.
//!
//! Converted text comes straight from a remote model and is echoed to the
//! terminal, both by the TUI and by `uni-bijoy convert`. Escape sequences in
//! that text could move the cursor, recolor the screen or set the window title,
//! so they are removed before display.

const ESC: char = '\x1b';
const BEL: char = '\x07';

/// Remove ANSI escape sequences and control characters from `text`.
///
/// Handles CSI (`ESC [ ... final`) and OSC (`ESC ] ... BEL` or `ESC ] ... ESC \`)
/// sequences and drops any other two-character escape. Tab, newline and carriage
/// return are kept so that line structure survives.
///
/// # Examples
///
/// ```
/// use uni_bijoy::utils::terminal::sanitize_for_display;
///
/// assert_eq!(sanitize_for_display("\x1b[31mAvwg\x1b[0m"), "Avwg");
/// ```
pub fn sanitize_for_display(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == ESC {
            match chars.next() {
                // CSI: parameters then a final byte in '@'..='~'
                Some('[') => {
                    for c in chars.by_ref() {
                        if ('@'..='~').contains(&c) {
                            break;
                        }
                    }
                }
                // OSC: terminated by BEL or ST (ESC \)
                Some(']') => {
                    while let Some(c) = chars.next() {
                        if c == BEL {
                            break;
                        }
                        if c == ESC && chars.peek() == Some(&'\\') {
                            chars.next();
                            break;
                        }
                    }
                }
                _ => {}
            }
            continue;
        }

        if ch.is_control() && !matches!(ch, '\t' | '\n' | '\r') {
            continue;
        }

        out.push(ch);
    }

    out
}
