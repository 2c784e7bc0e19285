//! Low-level PDF content-stream writer.
//!
//! Emits text and path operations against the standard Type1 Helvetica
//! faces with WinAnsi encoding. Glyph widths come from the Helvetica AFM
//! metrics, so wrapping and right-alignment are accurate without embedding
//! a font program.

use lopdf::content::Operation;
use lopdf::{Object, StringFormat};

/// Page fonts by resource name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Font {
    Regular,
    Bold,
}

impl Font {
    pub(crate) fn resource(self) -> &'static str {
        match self {
            Self::Regular => "F1",
            Self::Bold => "F2",
        }
    }

    pub(crate) fn base_font(self) -> &'static str {
        match self {
            Self::Regular => "Helvetica",
            Self::Bold => "Helvetica-Bold",
        }
    }
}

/// Accumulates content-stream operations for one page.
///
/// Coordinates are PDF points with the origin at the bottom-left corner;
/// the composer converts from its top-down millimeter cursor before
/// calling in.
pub(crate) struct PageWriter {
    ops: Vec<Operation>,
}

impl PageWriter {
    pub(crate) fn new() -> Self {
        Self { ops: Vec::new() }
    }

    pub(crate) fn into_operations(self) -> Vec<Operation> {
        self.ops
    }

    /// Draw `text` with its baseline starting at `(x, y)`.
    pub(crate) fn text(&mut self, font: Font, size: f32, x: f32, y: f32, text: &str) {
        if text.is_empty() {
            return;
        }
        self.ops.push(Operation::new("BT", vec![]));
        self.ops.push(Operation::new(
            "Tf",
            vec![font.resource().into(), size.into()],
        ));
        self.ops
            .push(Operation::new("Td", vec![x.into(), y.into()]));
        self.ops.push(Operation::new(
            "Tj",
            vec![Object::String(
                encode_win_ansi(text),
                StringFormat::Literal,
            )],
        ));
        self.ops.push(Operation::new("ET", vec![]));
    }

    /// Draw `text` so its right edge ends at `right`.
    pub(crate) fn text_right(&mut self, font: Font, size: f32, right: f32, y: f32, text: &str) {
        let x = right - text_width(text, size);
        self.text(font, size, x, y, text);
    }

    /// Draw `text` centered between `left` and `right`.
    pub(crate) fn text_centered(
        &mut self,
        font: Font,
        size: f32,
        left: f32,
        right: f32,
        y: f32,
        text: &str,
    ) {
        let x = left + (right - left - text_width(text, size)) / 2.0;
        self.text(font, size, x, y, text);
    }

    /// Stroke a straight line.
    pub(crate) fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, width: f32) {
        self.ops.push(Operation::new("w", vec![width.into()]));
        self.ops
            .push(Operation::new("m", vec![x1.into(), y1.into()]));
        self.ops
            .push(Operation::new("l", vec![x2.into(), y2.into()]));
        self.ops.push(Operation::new("S", vec![]));
    }

    /// Fill a rectangle with a gray level (0 = black, 1 = white).
    /// `(x, y)` is the lower-left corner.
    pub(crate) fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, gray: f32) {
        self.ops.push(Operation::new("g", vec![gray.into()]));
        self.ops.push(Operation::new(
            "re",
            vec![x.into(), y.into(), w.into(), h.into()],
        ));
        self.ops.push(Operation::new("f", vec![]));
        self.ops.push(Operation::new("g", vec![0.0_f32.into()]));
    }
}

/// Encode text for the WinAnsi (CP-1252) code page. Characters outside the
/// code page degrade to '?'.
pub(crate) fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c as u32 {
            0x00..=0x7f => c as u8,
            0xa0..=0xff => c as u8,
            _ => match c {
                '\u{20ac}' => 0x80, // €
                '\u{201a}' => 0x82,
                '\u{201e}' => 0x84,
                '\u{2026}' => 0x85, // …
                '\u{2018}' => 0x91,
                '\u{2019}' => 0x92, // ’
                '\u{201c}' => 0x93,
                '\u{201d}' => 0x94,
                '\u{2013}' => 0x96, // –
                '\u{2014}' => 0x97,
                '\u{2122}' => 0x99,
                _ => b'?',
            },
        })
        .collect()
}

/// Width of `text` in points at the given size, from Helvetica AFM metrics.
pub(crate) fn text_width(text: &str, size: f32) -> f32 {
    let millis: u32 = text.chars().map(glyph_width_millis).sum();
    millis as f32 * size / 1000.0
}

/// Helvetica glyph advance in 1/1000 em. Latin-1 letters outside the table
/// use the average lowercase advance.
fn glyph_width_millis(c: char) -> u32 {
    match c {
        ' ' | ',' | '.' | '/' | ':' | ';' | '!' | '|' => 278,
        '"' => 355,
        '\'' => 191,
        '(' | ')' | '[' | ']' | '-' | '`' | 'r' => 333,
        '*' => 389,
        '+' | '<' | '=' | '>' | '~' => 584,
        '0'..='9' | '#' | '$' | '?' | '_' => 556,
        '%' => 889,
        '&' | 'A' | 'B' | 'E' | 'K' | 'V' | 'X' | 'Y' => 667,
        '@' => 1015,
        'C' | 'D' | 'H' | 'N' | 'R' | 'U' => 722,
        'F' | 'T' | 'Z' => 611,
        'G' | 'O' | 'P' | 'Q' => 778,
        'I' | '\\' => 278,
        'J' | 'c' | 'k' | 's' | 'v' | 'x' | 'y' | 'z' => 500,
        'L' => 556,
        'M' | 'm' => 833,
        'S' => 667,
        'W' => 944,
        'a' | 'b' | 'd' | 'e' | 'g' | 'h' | 'n' | 'o' | 'p' | 'q' | 'u' => 556,
        'f' | 't' => 278,
        'i' | 'j' | 'l' => 222,
        'w' => 722,
        '{' | '}' => 334,
        '^' => 469,
        _ => 556,
    }
}

/// Greedy word wrap to a maximum line width in points.
///
/// Words longer than the line are broken hard so a pathological token can
/// never push past the column edge. Blank input yields no lines.
pub(crate) fn wrap_text(text: &str, size: f32, max_width: f32) -> Vec<String> {
    let mut lines = Vec::new();
    if text.trim().is_empty() {
        return lines;
    }

    let mut current = String::new();
    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };
        if text_width(&candidate, size) <= max_width {
            current = candidate;
            continue;
        }
        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        // The word alone may still be too wide.
        let mut rest = word;
        while text_width(rest, size) > max_width && rest.chars().count() > 1 {
            let split = longest_fitting_prefix(rest, size, max_width);
            let (head, tail) = rest.split_at(split);
            lines.push(head.to_string());
            rest = tail;
        }
        current = rest.to_string();
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

fn longest_fitting_prefix(word: &str, size: f32, max_width: f32) -> usize {
    let mut end = 0;
    for (idx, c) in word.char_indices() {
        let next = idx + c.len_utf8();
        if text_width(&word[..next], size) > max_width && end > 0 {
            break;
        }
        end = next;
    }
    end
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_passes_through() {
        assert_eq!(encode_win_ansi("Order B-42"), b"Order B-42".to_vec());
    }

    #[test]
    fn latin1_and_cp1252_specials() {
        assert_eq!(encode_win_ansi("½"), vec![0xbd]);
        assert_eq!(encode_win_ansi("ñ"), vec![0xf1]);
        assert_eq!(encode_win_ansi("€"), vec![0x80]);
        assert_eq!(encode_win_ansi("→"), vec![b'?']);
    }

    #[test]
    fn widths_scale_with_size() {
        let narrow = text_width("iii", 8.0);
        let wide = text_width("MMM", 8.0);
        assert!(wide > narrow);
        assert!((text_width("0", 10.0) - 5.56).abs() < 1e-3);
    }

    #[test]
    fn wrap_respects_width() {
        let lines = wrap_text("Bins, Mod. BI-565, (EPE), Blue", 8.0, 60.0);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(text_width(line, 8.0) <= 60.0 + 1e-3, "line too wide: {line}");
        }
    }

    #[test]
    fn wrap_blank_is_empty() {
        assert!(wrap_text("", 8.0, 100.0).is_empty());
        assert!(wrap_text("   ", 8.0, 100.0).is_empty());
    }

    #[test]
    fn wrap_breaks_overlong_words() {
        let lines = wrap_text("XXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXX", 8.0, 30.0);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(text_width(line, 8.0) <= 30.0 + 1e-3);
        }
    }
}
