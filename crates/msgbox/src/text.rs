use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Placeholder used when a title or message is missing, so the row keeps its height.
pub const BLANK: &str = "\u{a0}";

pub fn char_width(ch: char) -> usize {
    UnicodeWidthChar::width(ch).unwrap_or(0).max(1)
}

pub fn display_width(value: &str) -> u16 {
    u16::try_from(UnicodeWidthStr::width(value)).unwrap_or(u16::MAX)
}

/// Natural width of a block of text: its widest line.
pub fn block_width(value: &str) -> u16 {
    value.lines().map(display_width).max().unwrap_or(0)
}

pub fn wrap_line(line: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;
    for ch in line.chars() {
        let ch_width = char_width(ch);
        if current_width + ch_width > width && !current.is_empty() {
            lines.push(current);
            current = String::new();
            current_width = 0;
        }
        current.push(ch);
        current_width += ch_width;
    }
    lines.push(current);
    lines
}

pub fn wrap_block(value: &str, width: usize) -> Vec<String> {
    if value.is_empty() {
        return vec![String::new()];
    }
    value
        .lines()
        .flat_map(|line| wrap_line(line, width))
        .collect()
}

/// Keeps the tail of `value` that fits in `width` cells, so the caret end stays visible.
pub fn tail_to_width(value: &str, width: usize) -> String {
    let mut out: Vec<char> = Vec::new();
    let mut used = 0;
    for ch in value.chars().rev() {
        let ch_width = char_width(ch);
        if used + ch_width > width {
            break;
        }
        out.push(ch);
        used += ch_width;
    }
    out.into_iter().rev().collect()
}
