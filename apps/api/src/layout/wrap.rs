//! Greedy word-wrap against the static font metrics.
//!
//! The wrap here is the measurement every renderer primitive trusts: a block's
//! height is `lines.len() * leading`, so the same function decides both where
//! the text breaks and how far the cursor moves.

use crate::layout::font_metrics::{get_metrics, FontFamily, FontMetricTable};

/// One wrapped line and its measured width in points.
#[derive(Debug, Clone, PartialEq)]
pub struct WrappedLine {
    pub text: String,
    pub width: f32,
    /// False for the last line of a paragraph (not stretched when justified).
    pub breaks_inside_paragraph: bool,
}

/// Wraps `text` into lines no wider than `max_width` points.
///
/// Explicit newlines start a new paragraph; blank paragraphs are dropped.
/// A single word wider than the line is split by characters so nothing ever
/// overflows the column. An empty string returns no lines.
pub fn wrap_text(text: &str, font: FontFamily, size: f32, max_width: f32) -> Vec<WrappedLine> {
    let metrics = get_metrics(font);
    let mut lines = Vec::new();

    for paragraph in text.lines() {
        let words: Vec<&str> = paragraph.split_whitespace().collect();
        if words.is_empty() {
            continue;
        }
        wrap_words(&words, metrics, size, max_width, &mut lines);
        if let Some(last) = lines.last_mut() {
            last.breaks_inside_paragraph = false;
        }
    }

    lines
}

/// Number of printed lines `text` occupies.
pub fn line_count(text: &str, font: FontFamily, size: f32, max_width: f32) -> usize {
    wrap_text(text, font, size, max_width).len()
}

/// Cuts `text` so that it fits `max_width`, appending an ellipsis when shortened.
pub fn truncate_to_width(text: &str, font: FontFamily, size: f32, max_width: f32) -> String {
    let metrics = get_metrics(font);
    if metrics.measure_str(text, size) <= max_width {
        return text.to_string();
    }
    let ellipsis = "...";
    let budget = max_width - metrics.measure_str(ellipsis, size);
    let mut out = String::new();
    let mut width = 0.0;
    for c in text.chars() {
        let w = metrics.char_width(c) as f32 * size / 1000.0;
        if width + w > budget {
            break;
        }
        width += w;
        out.push(c);
    }
    format!("{}{ellipsis}", out.trim_end())
}

fn wrap_words(
    words: &[&str],
    metrics: &FontMetricTable,
    size: f32,
    max_width: f32,
    lines: &mut Vec<WrappedLine>,
) {
    let space_w = metrics.space_width(size);
    let mut current = String::new();
    let mut current_width = 0.0_f32;

    for word in words {
        let word_w = metrics.measure_str(word, size);

        if word_w > max_width {
            // Flush what we have, then hard-break the oversized word.
            if !current.is_empty() {
                lines.push(line(std::mem::take(&mut current), current_width));
                current_width = 0.0;
            }
            for piece in split_long_word(word, metrics, size, max_width) {
                let piece_w = metrics.measure_str(&piece, size);
                lines.push(line(piece, piece_w));
            }
            // The last piece becomes the start of the next line.
            if let Some(last) = lines.pop() {
                current = last.text;
                current_width = last.width;
            }
            continue;
        }

        if current.is_empty() {
            current.push_str(word);
            current_width = word_w;
        } else if current_width + space_w + word_w > max_width {
            lines.push(line(std::mem::take(&mut current), current_width));
            current.push_str(word);
            current_width = word_w;
        } else {
            current.push(' ');
            current.push_str(word);
            current_width += space_w + word_w;
        }
    }

    if !current.is_empty() {
        lines.push(line(current, current_width));
    }
}

fn split_long_word(word: &str, metrics: &FontMetricTable, size: f32, max_width: f32) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut piece = String::new();
    let mut width = 0.0_f32;
    for c in word.chars() {
        let w = metrics.char_width(c) as f32 * size / 1000.0;
        if !piece.is_empty() && width + w > max_width {
            pieces.push(std::mem::take(&mut piece));
            width = 0.0;
        }
        piece.push(c);
        width += w;
    }
    if !piece.is_empty() {
        pieces.push(piece);
    }
    pieces
}

fn line(text: String, width: f32) -> WrappedLine {
    WrappedLine {
        text,
        width,
        breaks_inside_paragraph: true,
    }
}
