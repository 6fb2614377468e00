//! Kick message rendering
//!
//! Templates are lists of lines. Placeholders are substituted in a single pass, so
//! text coming from the feed is never itself scanned for placeholders.

use ubl_core::BanRecord;

/// Shown for `{banLength}` when the ban has no length
pub const FOREVER: &str = "Forever";

/// Shown for `{expireDate}` when the ban never expires
pub const NEVER: &str = "Never";

const ALT_COLOR_CHAR: char = '&';
const COLOR_CHAR: char = '\u{00A7}';

/// Render a template for a ban record
///
/// Each line has its placeholders substituted and its `&` color codes translated.
/// Lines are joined with `\n`.
pub fn render_kick_message(template: &[String], record: &BanRecord) -> String {
    template
        .iter()
        .map(|line| translate_color_codes(&substitute(line, |name| placeholder(record, name))))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render a template that has no record behind it
pub fn render_plain(template: &[String]) -> String {
    template
        .iter()
        .map(|line| translate_color_codes(line))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Translate `&x` color codes into `§x`
///
/// Only valid codes (`0-9`, `a-f`, `k-o`, `r`, either case) are translated, and the
/// code character is lowercased. Any other `&` is left as is.
pub fn translate_color_codes(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match chars.peek() {
            Some(&code) if c == ALT_COLOR_CHAR && is_color_code(code) => {
                out.push(COLOR_CHAR);
                out.push(code.to_ascii_lowercase());
                chars.next();
            }
            _ => out.push(c),
        }
    }

    out
}

fn is_color_code(c: char) -> bool {
    matches!(c.to_ascii_lowercase(), '0'..='9' | 'a'..='f' | 'k'..='o' | 'r')
}

fn placeholder(record: &BanRecord, name: &str) -> Option<String> {
    let value = match name {
        "reason" => record.reason().to_string(),
        "banDate" => record.ban_date().to_string(),
        "banLength" => record
            .duration()
            .map_or_else(|| FOREVER.to_string(), |length| length.to_string()),
        "expireDate" => record
            .expiry_date()
            .map_or_else(|| NEVER.to_string(), |date| date.to_string()),
        "case" => record.case_reference().to_string(),
        _ => return None,
    };
    Some(value)
}

/// Replace every `{name}` the lookup knows; unknown placeholders are kept verbatim
fn substitute(line: &str, lookup: impl Fn(&str) -> Option<String>) -> String {
    let mut out = String::with_capacity(line.len());
    let mut rest = line;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open..];

        match after.find('}') {
            Some(close) => match lookup(&after[1..close]) {
                Some(value) => {
                    out.push_str(&value);
                    rest = &after[close + 1..];
                }
                None => {
                    out.push('{');
                    rest = &after[1..];
                }
            },
            None => {
                out.push_str(after);
                rest = "";
            }
        }
    }

    out.push_str(rest);
    out
}
