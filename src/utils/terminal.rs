//! Sanitizing user-controlled text before it reaches the terminal
//!
//! Thread messages, reply authors and revision authors come straight from catalog
//! exports. Escape sequences embedded in them could clear the screen, move the cursor
//! or retitle the terminal, so every printed or rendered user string goes through
//! [`strip_ansi_codes`].

const ESC: char = '\x1b';
const BEL: char = '\x07';

/// Remove ANSI escape sequences and stray control characters
///
/// Handles CSI sequences (`ESC [ ... final`), OSC sequences (`ESC ] ... BEL` or
/// `ESC ] ... ESC \`) and bare two-character escapes. Tabs and line breaks survive.
///
/// ```
/// use catalog_timeline::utils::strip_ansi_codes;
///
/// assert_eq!(strip_ansi_codes("\x1b[1mlooks good\x1b[0m"), "looks good");
/// ```
pub fn strip_ansi_codes(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == ESC {
            match chars.next() {
                Some('[') => {
                    // Parameters and intermediates run until a byte in 0x40..=0x7e
                    for c in chars.by_ref() {
                        if ('\x40'..='\x7e').contains(&c) {
                            break;
                        }
                    }
                }
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
