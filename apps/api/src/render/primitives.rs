//! Section renderer primitives.
//!
//! Every flowing primitive takes a [`Cursor`] and returns the cursor below
//! what it drew, so a template composes sections by threading one value
//! through calls. Primitives never fail on content; the only error they pass
//! on is the page ceiling from [`Column::ensure`].

use crate::layout::wrap::{line_count, truncate_to_width, wrap_text};
use crate::render::canvas::{Layer, PageCanvas, TextStyle};
use crate::render::color::Color;
use crate::render::flow::{Column, Cursor};
use crate::render::text::{list_items, looks_like_heading_line, split_title_body};
use crate::render::RenderError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
    Justify,
}

/// How a section title is set off from its content.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RuleStyle {
    /// Title only.
    Plain,
    /// Thin rule across the column under the title.
    Underline { color: Color, width: f32 },
    /// Short thick bar under the title.
    ShortBar { color: Color, length: f32, thickness: f32 },
    /// Filled bar to the left of the title.
    SideBar { color: Color, width: f32 },
    /// Centred title with a rule on each side.
    Flanked { color: Color },
    /// Filled strip behind the whole title row.
    Band { fill: Color },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BulletGlyph {
    Text(&'static str),
    Dot,
    Square,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BulletStyle {
    pub glyph: BulletGlyph,
    pub color: Color,
    /// Distance from the glyph to the item text.
    pub indent: f32,
    pub item_gap: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimelineStyle {
    pub dot_radius: f32,
    pub dot_color: Color,
    pub line_color: Color,
    pub line_width: f32,
    /// Dot centre, measured from the cursor's x.
    pub dot_offset: f32,
    /// Text start, measured from the cursor's x.
    pub text_offset: f32,
    /// Minimum vertical distance between entries.
    pub step: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardStyle {
    pub fill: Color,
    pub title: TextStyle,
    pub body: TextStyle,
    pub height: f32,
    pub radius: f32,
    pub padding: f32,
    pub gap: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChipStyle {
    pub fill: Color,
    pub text: TextStyle,
    pub pad_x: f32,
    pub height: f32,
    pub gap: f32,
    pub radius: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CodeBlockStyle {
    pub fill: Color,
    pub bar: Color,
    pub padding: f32,
    pub gap: f32,
}

// ────────────────────────────────────────────────────────────────────────────
// Bands
// ────────────────────────────────────────────────────────────────────────────

/// Smallest scale a band line may shrink to before it is truncated instead.
const MIN_BAND_SCALE: f32 = 0.7;

/// Full-width filled rectangle with one line of text centred vertically.
///
/// Text wider than the band between the insets is shrunk, down to
/// [`MIN_BAND_SCALE`] of its size, and then truncated with an ellipsis.
#[allow(clippy::too_many_arguments)]
pub fn header_band(
    canvas: &mut PageCanvas,
    page: usize,
    y: f32,
    height: f32,
    fill: Color,
    text: &str,
    style: &TextStyle,
    align: Align,
    inset: f32,
) {
    let width = canvas.width();
    canvas.fill_rect(page, Layer::Content, 0.0, y, width, height, fill);

    let available = width - 2.0 * inset;
    let natural = style.measure(text);
    let style = if natural > available {
        style.with_size((style.size * available / natural).max(style.size * MIN_BAND_SCALE))
    } else {
        *style
    };
    let text = truncate_to_width(text, style.font, style.size, available);

    let text_y = y + (height - style.size) / 2.0;
    let x = aligned_x(inset, available, style.measure(&text), align);
    canvas.text(page, Layer::Content, x, text_y, &text, &style);
}

/// The three footer slots, left to right.
#[derive(Debug, Clone, Copy)]
pub struct FooterText<'a> {
    pub left: &'a str,
    pub center: &'a str,
    pub right: &'a str,
}

/// Band across the bottom of a page. `fill: None` draws a hairline instead.
/// Text is laid out between `span.0` and `span.1`.
pub fn footer_band(
    canvas: &mut PageCanvas,
    page: usize,
    span: (f32, f32),
    height: f32,
    fill: Option<Color>,
    style: &TextStyle,
    text: FooterText<'_>,
) {
    let (width, page_height) = (canvas.width(), canvas.height());
    let (left, right) = span;
    let top = page_height - height;
    match fill {
        Some(color) => canvas.fill_rect(page, Layer::Content, 0.0, top, width, height, color),
        None => canvas.line(page, Layer::Content, (left, top), (right, top), style.color, 0.5),
    }
    let y = top + (height - style.size) / 2.0;
    canvas.text(page, Layer::Content, left, y, text.left, style);
    let center_w = style.measure(text.center);
    canvas.text(page, Layer::Content, left + (right - left - center_w) / 2.0, y, text.center, style);
    let right_w = style.measure(text.right);
    canvas.text(page, Layer::Content, right - right_w, y, text.right, style);
}

// ────────────────────────────────────────────────────────────────────────────
// Titles and text
// ────────────────────────────────────────────────────────────────────────────

/// Section title plus its rule. Keeps at least two body lines' worth of room
/// after the title on the same page.
pub fn section_title(
    canvas: &mut PageCanvas,
    column: &Column,
    cursor: Cursor,
    title: &str,
    style: &TextStyle,
    rule: RuleStyle,
) -> Result<Cursor, RenderError> {
    let cursor = column.ensure(canvas, cursor, style.leading() * 3.0)?;
    let (page, x, y) = (cursor.page, cursor.x, cursor.y);
    let leading = style.leading();
    let width = column.available(&cursor);

    let advance = match rule {
        RuleStyle::Plain => {
            canvas.text(page, Layer::Content, x, y, title, style);
            leading
        }
        RuleStyle::Underline { color, width: line_width } => {
            canvas.text(page, Layer::Content, x, y, title, style);
            let rule_y = y + leading + 1.0;
            canvas.line(page, Layer::Content, (x, rule_y), (x + width, rule_y), color, line_width);
            leading + 6.0
        }
        RuleStyle::ShortBar { color, length, thickness } => {
            canvas.text(page, Layer::Content, x, y, title, style);
            canvas.fill_rect(page, Layer::Content, x, y + leading + 1.0, length.min(width), thickness, color);
            leading + thickness + 6.0
        }
        RuleStyle::SideBar { color, width: bar_width } => {
            canvas.fill_rect(page, Layer::Content, x, y, bar_width, style.size * 1.1, color);
            canvas.text(page, Layer::Content, x + bar_width + 6.0, y, title, style);
            leading + 3.0
        }
        RuleStyle::Flanked { color } => {
            let title_w = style.measure(title);
            let title_x = x + (width - title_w) / 2.0;
            canvas.text(page, Layer::Content, title_x, y, title, style);
            let mid = y + style.size * 0.55;
            if title_x - 10.0 > x {
                canvas.line(page, Layer::Content, (x, mid), (title_x - 10.0, mid), color, 0.75);
                canvas.line(page, Layer::Content, (title_x + title_w + 10.0, mid), (x + width, mid), color, 0.75);
            }
            leading + 4.0
        }
        RuleStyle::Band { fill } => {
            canvas.fill_rect(page, Layer::Content, x, y - 2.0, width, leading + 2.0, fill);
            canvas.text(page, Layer::Content, x + 6.0, y, title, style);
            leading + 6.0
        }
    };

    Ok(cursor.down(advance))
}

/// Height `text` takes when flowed at `width` in `style`.
pub fn measure_paragraph(text: &str, style: &TextStyle, width: f32) -> f32 {
    line_count(text, style.font, style.size, width) as f32 * style.leading()
}

/// Flows wrapped text from the cursor to the column's right edge.
pub fn paragraph(
    canvas: &mut PageCanvas,
    column: &Column,
    cursor: Cursor,
    text: &str,
    style: &TextStyle,
    align: Align,
) -> Result<Cursor, RenderError> {
    let width = column.available(&cursor);
    let mut cursor = cursor;

    for line in wrap_text(text, style.font, style.size, width) {
        cursor = column.ensure(canvas, cursor, style.leading())?;
        let spaces = line.text.matches(' ').count();
        if align == Align::Justify && line.breaks_inside_paragraph && spaces > 0 {
            let word_spacing = (width - line.width) / spaces as f32;
            canvas.spaced_text(cursor.page, Layer::Content, cursor.x, cursor.y, &line.text, style, word_spacing);
        } else {
            let x = aligned_x(cursor.x, width, line.width, align);
            canvas.text(cursor.page, Layer::Content, x, cursor.y, &line.text, style);
        }
        cursor = cursor.down(style.leading());
    }

    Ok(cursor)
}

/// One item per entry, each prefixed with the template's own glyph.
pub fn bullet_list(
    canvas: &mut PageCanvas,
    column: &Column,
    cursor: Cursor,
    text: &str,
    style: &TextStyle,
    bullet: &BulletStyle,
) -> Result<Cursor, RenderError> {
    let mut cursor = cursor;
    for item in list_items(text) {
        cursor = bullet_item(canvas, column, cursor, item, style, bullet)?;
    }
    Ok(cursor)
}

/// Bullet list that promotes institution/employer lines to bold, unbulleted headings.
pub fn entry_list(
    canvas: &mut PageCanvas,
    column: &Column,
    cursor: Cursor,
    text: &str,
    style: &TextStyle,
    heading: &TextStyle,
    bullet: &BulletStyle,
) -> Result<Cursor, RenderError> {
    let mut cursor = cursor;
    for (i, item) in list_items(text).into_iter().enumerate() {
        if looks_like_heading_line(item) {
            if i > 0 {
                cursor = cursor.down(style.size * 0.4);
            }
            cursor = paragraph(canvas, column, cursor, item, heading, Align::Left)?;
            cursor = cursor.down(1.0);
        } else {
            cursor = bullet_item(canvas, column, cursor, item, style, bullet)?;
        }
    }
    Ok(cursor)
}

fn bullet_item(
    canvas: &mut PageCanvas,
    column: &Column,
    cursor: Cursor,
    item: &str,
    style: &TextStyle,
    bullet: &BulletStyle,
) -> Result<Cursor, RenderError> {
    let start = column.ensure(canvas, cursor, style.leading())?;
    // Vertical centre of lower-case letters on the first line.
    let mid = start.y + style.font.ascent() * style.size - style.size * 0.28;
    match bullet.glyph {
        BulletGlyph::Text(glyph) => {
            let glyph_style = style.with_color(bullet.color);
            canvas.text(start.page, Layer::Content, start.x, start.y, glyph, &glyph_style);
        }
        BulletGlyph::Dot => {
            let r = style.size * 0.17;
            canvas.fill_circle(start.page, Layer::Content, start.x + r, mid, r, bullet.color);
        }
        BulletGlyph::Square => {
            let side = style.size * 0.32;
            canvas.fill_rect(start.page, Layer::Content, start.x, mid - side / 2.0, side, side, bullet.color);
        }
    }
    let end = paragraph(canvas, column, start.at_x(start.x + bullet.indent), item, style, Align::Left)?;
    Ok(end.at_x(start.x).down(bullet.item_gap))
}

// ────────────────────────────────────────────────────────────────────────────
// Timeline
// ────────────────────────────────────────────────────────────────────────────

/// Dots down a fixed left offset, one per entry, joined by connectors.
/// The last dot has no connector below it.
pub fn timeline(
    canvas: &mut PageCanvas,
    column: &Column,
    cursor: Cursor,
    text: &str,
    style: &TextStyle,
    timeline: &TimelineStyle,
) -> Result<Cursor, RenderError> {
    let origin_x = cursor.x;
    let dot_x = origin_x + timeline.dot_offset;
    let mut cursor = cursor;
    let mut dots: Vec<(usize, f32)> = Vec::new();

    for item in list_items(text) {
        cursor = column.ensure(canvas, cursor, timeline.step.max(style.leading()))?;
        let dot_y = cursor.y + style.leading() / 2.0 - style.size * 0.1;
        canvas.fill_circle(cursor.page, Layer::Content, dot_x, dot_y, timeline.dot_radius, timeline.dot_color);
        dots.push((cursor.page, dot_y));

        let end = paragraph(
            canvas,
            column,
            cursor.at_x(origin_x + timeline.text_offset),
            item,
            style,
            Align::Left,
        )?;
        cursor = Cursor::lowest(cursor.down(timeline.step), end.down(style.size * 0.3)).at_x(origin_x);
    }

    let r = timeline.dot_radius;
    for pair in dots.windows(2) {
        let ((page, from), (next_page, to)) = (pair[0], pair[1]);
        let end_y = if page == next_page { to - r } else { column.bottom };
        canvas.line(
            page,
            Layer::Content,
            (dot_x, from + r),
            (dot_x, end_y),
            timeline.line_color,
            timeline.line_width,
        );
    }

    Ok(cursor)
}

// ────────────────────────────────────────────────────────────────────────────
// Cards, chips, code blocks
// ────────────────────────────────────────────────────────────────────────────

/// Fixed-height rounded card with a title line and as much body as fits.
pub fn card(
    canvas: &mut PageCanvas,
    column: &Column,
    cursor: Cursor,
    title: &str,
    body: &str,
    style: &CardStyle,
) -> Result<Cursor, RenderError> {
    let cursor = column.ensure(canvas, cursor, style.height)?;
    let width = column.available(&cursor);
    let inner_x = cursor.x + style.padding;
    let inner_w = (width - 2.0 * style.padding).max(1.0);

    canvas.fill_rounded_rect(
        cursor.page,
        Layer::Content,
        cursor.x,
        cursor.y,
        width,
        style.height,
        style.radius,
        style.fill,
    );

    let title_line = truncate_to_width(title, style.title.font, style.title.size, inner_w);
    let mut y = cursor.y + style.padding;
    canvas.text(cursor.page, Layer::Content, inner_x, y, &title_line, &style.title);
    y += style.title.leading();

    let room = style.height - 2.0 * style.padding - style.title.leading();
    let max_lines = (room / style.body.leading()).floor().max(0.0) as usize;
    let lines = wrap_text(body, style.body.font, style.body.size, inner_w);
    let truncated = lines.len() > max_lines;
    for (i, line) in lines.iter().take(max_lines).enumerate() {
        let text = if truncated && i + 1 == max_lines {
            let marked = format!("{}...", line.text.trim_end_matches('.'));
            truncate_to_width(&marked, style.body.font, style.body.size, inner_w)
        } else {
            line.text.clone()
        };
        canvas.text(cursor.page, Layer::Content, inner_x, y, &text, &style.body);
        y += style.body.leading();
    }

    Ok(cursor.down(style.height + style.gap))
}

/// One card per entry, split into title and body at the first separator.
pub fn card_list(
    canvas: &mut PageCanvas,
    column: &Column,
    cursor: Cursor,
    text: &str,
    style: &CardStyle,
) -> Result<Cursor, RenderError> {
    let mut cursor = cursor;
    for item in list_items(text) {
        let (title, body) = split_title_body(item);
        cursor = card(canvas, column, cursor, title, body, style)?;
    }
    Ok(cursor)
}

/// Where one chip goes inside a chip block.
#[derive(Debug, Clone, PartialEq)]
pub struct ChipPlacement {
    pub row: usize,
    pub x: f32,
    pub width: f32,
    pub label: String,
}

/// Lays chips left to right, starting a new row when `x + chip_width` would
/// pass `available`. `x` is relative to the block's left edge.
pub fn layout_chips(items: &[&str], style: &ChipStyle, available: f32) -> Vec<ChipPlacement> {
    let mut placements = Vec::with_capacity(items.len());
    let max_label = (available - 2.0 * style.pad_x).max(1.0);
    let (mut row, mut x) = (0usize, 0.0_f32);

    for item in items {
        let label = truncate_to_width(item, style.text.font, style.text.size, max_label);
        let width = style.text.measure(&label) + 2.0 * style.pad_x;
        if x > 0.0 && x + width > available {
            row += 1;
            x = 0.0;
        }
        placements.push(ChipPlacement {
            row,
            x,
            width,
            label,
        });
        x += width + style.gap;
    }

    placements
}

/// Draws a wrapped block of tag chips.
pub fn chip_row(
    canvas: &mut PageCanvas,
    column: &Column,
    cursor: Cursor,
    items: &[&str],
    style: &ChipStyle,
) -> Result<Cursor, RenderError> {
    if items.is_empty() {
        return Ok(cursor);
    }
    let left = cursor.x;
    let row_step = style.height + style.gap;
    let placements = layout_chips(items, style, column.available(&cursor));

    let mut row_cursor = column.ensure(canvas, cursor, style.height)?;
    let mut current_row = 0;
    for chip in &placements {
        if chip.row != current_row {
            current_row = chip.row;
            row_cursor = column.ensure(canvas, row_cursor.down(row_step), style.height)?;
        }
        let x = left + chip.x;
        canvas.fill_rounded_rect(
            row_cursor.page,
            Layer::Content,
            x,
            row_cursor.y,
            chip.width,
            style.height,
            style.radius,
            style.fill,
        );
        let baseline = row_cursor.y + style.height / 2.0 + style.text.size * 0.35;
        let text_top = baseline - style.text.font.ascent() * style.text.size;
        canvas.text(row_cursor.page, Layer::Content, x + style.pad_x, text_top, &chip.label, &style.text);
    }

    Ok(row_cursor.down(row_step).at_x(left))
}

/// Monospaced lines on a shaded strip with an accent bar, one strip per wrapped line
/// so the block can break across pages.
pub fn code_block(
    canvas: &mut PageCanvas,
    column: &Column,
    cursor: Cursor,
    text: &str,
    style: &TextStyle,
    block: &CodeBlockStyle,
) -> Result<Cursor, RenderError> {
    let left = cursor.x;
    let width = column.available(&cursor);
    let text_w = (width - 2.0 * block.padding - 3.0).max(1.0);
    let leading = style.leading();
    let mut cursor = cursor;

    for item in list_items(text) {
        for line in wrap_text(item, style.font, style.size, text_w) {
            cursor = column.ensure(canvas, cursor, leading)?;
            canvas.fill_rect(cursor.page, Layer::Content, left, cursor.y, width, leading, block.fill);
            canvas.fill_rect(cursor.page, Layer::Content, left, cursor.y, 3.0, leading, block.bar);
            let y = cursor.y + (leading - style.size) / 2.0;
            canvas.text(cursor.page, Layer::Content, left + 3.0 + block.padding, y, &line.text, style);
            cursor = cursor.down(leading);
        }
        cursor = cursor.down(block.gap);
    }

    Ok(cursor)
}

// ────────────────────────────────────────────────────────────────────────────
// Rotated label, columns
// ────────────────────────────────────────────────────────────────────────────

/// Label rotated 90° anti-clockwise whose upper end sits at `top`.
/// Returns the label length along the rotated axis.
pub fn vertical_label(
    canvas: &mut PageCanvas,
    page: usize,
    x: f32,
    top: f32,
    text: &str,
    style: &TextStyle,
) -> f32 {
    let length = style.measure(text);
    // The rotated baseline runs upward from the pivot; push the pivot right by
    // the ascent so the glyphs sit to the left of `x + size`.
    let pivot_x = x + style.font.ascent() * style.size;
    canvas.rotated_text(page, Layer::Content, pivot_x, top + length, text, style);
    length
}

/// Renders two blocks side by side from the same `y` and resumes below the
/// longer one.
pub fn two_columns<L, R>(
    canvas: &mut PageCanvas,
    column: &Column,
    cursor: Cursor,
    gutter: f32,
    left: L,
    right: R,
) -> Result<Cursor, RenderError>
where
    L: FnOnce(&mut PageCanvas, &Column, Cursor) -> Result<Cursor, RenderError>,
    R: FnOnce(&mut PageCanvas, &Column, Cursor) -> Result<Cursor, RenderError>,
{
    let column_width = (column.width() - gutter) / 2.0;
    let left_col = column.span(column.left, column.left + column_width)?;
    let right_col = column.span(column.right - column_width, column.right)?;

    let left_end = left(canvas, &left_col, cursor.at_x(left_col.left))?;
    let right_end = right(canvas, &right_col, cursor.at_x(right_col.left))?;

    Ok(Cursor::lowest(left_end, right_end).at_x(column.left))
}

fn aligned_x(x: f32, width: f32, text_width: f32, align: Align) -> f32 {
    match align {
        Align::Left | Align::Justify => x,
        Align::Center => x + (width - text_width) / 2.0,
        Align::Right => x + width - text_width,
    }
}
