//! The shared layout pass every template goes through.
//!
//! 1. header / identity block on page 0
//! 2. sections in template order, skipping empty fields
//! 3. page decorations and footers once the page count is known
//! 4. serialization

use chrono::Local;
use tracing::debug;

use crate::layout::font_metrics::FontFamily;
use crate::layout::page::PageGeometry;
use crate::models::{ContentField, LayoutMode, ResumeContent, StudentIdentity};
use crate::render::canvas::{DocumentInfo, Layer, PageCanvas, TextStyle};
use crate::render::color::Color;
use crate::render::flow::{Column, Cursor};
use crate::render::primitives::{
    bullet_list, card_list, chip_row, code_block, entry_list, footer_band, header_band, paragraph,
    section_title, timeline, two_columns, vertical_label, Align, BulletStyle, CardStyle, ChipStyle,
    CodeBlockStyle, FooterText, RuleStyle, TimelineStyle,
};
use crate::render::templates::{Decoration, HeaderStyle, SectionMode, SectionSpec, SidebarSpec, TemplateSpec};
use crate::render::text::{chip_items, initials};
use crate::render::RenderError;

/// Space between the two halves of a side-by-side pair.
const PAIR_GUTTER: f32 = 24.0;
/// Horizontal padding inside the sidebar strip.
const SIDEBAR_PAD: f32 = 22.0;

/// Text and block styles resolved against one colour context.
struct Styles {
    name: TextStyle,
    contact: TextStyle,
    title: TextStyle,
    title_rule: RuleStyle,
    body: TextStyle,
    entry_heading: TextStyle,
    code: TextStyle,
    bullet: BulletStyle,
    timeline: TimelineStyle,
    chip: ChipStyle,
    card: CardStyle,
    code_block: CodeBlockStyle,
}

impl Styles {
    fn main(spec: &TemplateSpec) -> Self {
        let p = &spec.palette;
        Self::build(spec, p.primary, p.text, p.muted, p.accent, spec.title_rule)
    }

    fn sidebar(spec: &TemplateSpec, sidebar: &SidebarSpec) -> Self {
        let rule = RuleStyle::Underline {
            color: sidebar.accent,
            width: 0.8,
        };
        let mut styles = Self::build(spec, sidebar.text, sidebar.text, sidebar.text, sidebar.accent, rule);
        styles.title = styles.title.with_size(spec.typography.title_size - 1.0);
        styles.body = styles.body.with_size(spec.typography.body_size - 0.5);
        styles
    }

    fn build(spec: &TemplateSpec, title: Color, text: Color, muted: Color, accent: Color, rule: RuleStyle) -> Self {
        let t = &spec.typography;
        let p = &spec.palette;
        let body = TextStyle::new(t.body, t.body_size, text);
        Self {
            name: TextStyle::new(t.name, t.name_size, title).with_line_height(1.15),
            contact: TextStyle::new(t.contact, t.body_size, muted),
            title: TextStyle::new(t.heading, t.title_size, title),
            title_rule: rule,
            body,
            entry_heading: body.with_font(bold_of(t.body)).with_color(title),
            code: TextStyle::new(FontFamily::Courier, t.body_size - 0.5, text).with_line_height(1.6),
            bullet: BulletStyle {
                glyph: spec.bullet,
                color: accent,
                indent: t.body_size * 1.2,
                item_gap: t.body_size * 0.25,
            },
            timeline: TimelineStyle {
                dot_radius: 3.5,
                dot_color: accent,
                line_color: muted,
                line_width: 0.8,
                dot_offset: 5.0,
                text_offset: 18.0,
                step: t.body_size * 2.0,
            },
            chip: ChipStyle {
                fill: accent,
                text: TextStyle::new(t.body, t.body_size - 1.0, p.on_primary),
                pad_x: 8.0,
                height: t.body_size + 8.0,
                gap: 5.0,
                radius: (t.body_size + 8.0) / 2.0,
            },
            card: CardStyle {
                fill: p.surface,
                title: TextStyle::new(bold_of(t.body), t.body_size + 0.5, title),
                body: TextStyle::new(t.body, t.body_size - 0.5, text),
                height: 62.0,
                radius: 6.0,
                padding: 9.0,
                gap: 8.0,
            },
            code_block: CodeBlockStyle {
                fill: p.surface,
                bar: accent,
                padding: 6.0,
                gap: 3.0,
            },
        }
    }
}

fn bold_of(font: FontFamily) -> FontFamily {
    match font {
        FontFamily::Helvetica | FontFamily::HelveticaOblique => FontFamily::HelveticaBold,
        FontFamily::TimesRoman => FontFamily::TimesBold,
        FontFamily::Courier => FontFamily::CourierBold,
        other => other,
    }
}

/// Renders `content` with `spec` and returns the finished PDF bytes.
pub fn render_layout(
    spec: &TemplateSpec,
    content: &ResumeContent,
    identity: &StudentIdentity,
    layout: LayoutMode,
) -> Result<Vec<u8>, RenderError> {
    let mut canvas = PageCanvas::a4();
    let geometry = PageGeometry::a4(spec.margins);
    let bottom = geometry.height - spec.margins.bottom;
    let styles = Styles::main(spec);

    let text_span = match &spec.sidebar {
        Some(sidebar) => {
            let side_col = Column::new(SIDEBAR_PAD, sidebar.width - SIDEBAR_PAD, spec.margins.top, bottom)?;
            let main_col = Column::new(
                sidebar.width + spec.margins.left,
                geometry.content_right(),
                spec.margins.top,
                bottom,
            )?;
            let side_styles = Styles::sidebar(spec, sidebar);
            let side = sidebar_identity(&mut canvas, &side_col, &side_styles, identity, sidebar)?;
            render_sections(&mut canvas, spec, &side_styles, content, layout, &side_col, side, sidebar.sections)?;
            let main = main_col.start(0, main_col.top);
            render_sections(&mut canvas, spec, &styles, content, layout, &main_col, main, spec.sections)?;
            (main_col.left, main_col.right)
        }
        None => {
            let frame = Column::new(geometry.content_left(), geometry.content_right(), spec.margins.top, bottom)?;
            let start = draw_header(&mut canvas, spec, &styles, identity, &frame)?;
            let flow = match spec.label_gutter {
                Some(gutter) => frame.span(frame.left + gutter, frame.right)?,
                None => frame,
            };
            render_sections(&mut canvas, spec, &styles, content, layout, &flow, start.at_x(flow.left), spec.sections)?;
            (frame.left, frame.right)
        }
    };

    let pages = canvas.page_count();
    paint_decorations(&mut canvas, spec, identity, pages);
    draw_footers(&mut canvas, spec, identity, text_span, pages);
    debug!(template = spec.name, pages, "layout complete");

    let title = format!("{} - Resume", identity.name);
    canvas.into_pdf(&DocumentInfo {
        title: &title,
        author: &identity.name,
        subject: spec.label,
    })
}

fn display_name(spec: &TemplateSpec, identity: &StudentIdentity) -> String {
    if spec.uppercase_name {
        identity.name.to_uppercase()
    } else {
        identity.name.clone()
    }
}

fn section_label(spec: &TemplateSpec, title: &str) -> String {
    if spec.uppercase_titles {
        title.to_uppercase()
    } else {
        title.to_string()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Header
// ────────────────────────────────────────────────────────────────────────────

/// Draws the identity block and returns where the first section starts.
fn draw_header(
    canvas: &mut PageCanvas,
    spec: &TemplateSpec,
    styles: &Styles,
    identity: &StudentIdentity,
    frame: &Column,
) -> Result<Cursor, RenderError> {
    let name = display_name(spec, identity);
    let contact = identity.contact_parts().join(spec.separator);
    let p = &spec.palette;
    let width = canvas.width();
    let top = frame.start(0, frame.top);

    let cursor = match spec.header {
        HeaderStyle::Rule => {
            let cursor = paragraph(canvas, frame, top, &name, &styles.name, Align::Left)?;
            let cursor = paragraph(canvas, frame, cursor.down(2.0), &contact, &styles.contact, Align::Left)?;
            let rule_y = cursor.y + 4.0;
            canvas.line(0, Layer::Content, (frame.left, rule_y), (frame.right, rule_y), p.primary, 1.5);
            cursor.down(18.0)
        }
        HeaderStyle::Centered => {
            let cursor = paragraph(canvas, frame, top, &name, &styles.name, Align::Center)?;
            let cursor = paragraph(canvas, frame, cursor.down(3.0), &contact, &styles.contact, Align::Center)?;
            let rule_y = cursor.y + 5.0;
            canvas.line(0, Layer::Content, (frame.left, rule_y), (frame.right, rule_y), p.accent, 1.2);
            canvas.line(
                0,
                Layer::Content,
                (frame.left, rule_y + 2.5),
                (frame.right, rule_y + 2.5),
                p.accent,
                0.4,
            );
            cursor.down(22.0)
        }
        HeaderStyle::Band { height } => {
            let split = height * 0.62;
            let on_band = styles.name.with_color(p.on_primary);
            let contact_style = styles.contact.with_color(p.on_primary);
            header_band(canvas, 0, 0.0, split, p.primary, &name, &on_band, Align::Left, frame.left);
            header_band(
                canvas,
                0,
                split,
                height - split,
                p.primary,
                &contact,
                &contact_style,
                Align::Right,
                frame.left,
            );
            canvas.fill_rect(0, Layer::Content, 0.0, height, width, 3.0, p.accent);
            top.at_y((height + 24.0).max(frame.top))
        }
        HeaderStyle::Banner { height } => {
            canvas.fill_polygon(
                0,
                Layer::Background,
                &[(0.0, 0.0), (width, 0.0), (width, height * 0.72), (0.0, height)],
                p.primary,
            );
            canvas.fill_polygon(
                0,
                Layer::Background,
                &[
                    (0.0, height),
                    (width, height * 0.72),
                    (width, height * 0.72 + 7.0),
                    (0.0, height + 7.0),
                ],
                p.accent,
            );
            let banner_col = frame.span(frame.left, frame.right - 60.0)?;
            let name_style = styles.name.with_color(p.on_primary);
            let cursor = paragraph(canvas, &banner_col, top.at_y(height * 0.26), &name, &name_style, Align::Left)?;
            paragraph(
                canvas,
                &banner_col,
                cursor.down(4.0),
                &contact,
                &styles.contact.with_color(p.on_primary),
                Align::Left,
            )?;
            top.at_y(height + 28.0)
        }
        HeaderStyle::Terminal { height } => {
            let window_w = frame.width();
            canvas.fill_rounded_rect(0, Layer::Content, frame.left, frame.top, window_w, height, 6.0, p.primary);
            for (i, dot) in [0xFF5F56, 0xFFBD2E, 0x27C93F].into_iter().enumerate() {
                canvas.fill_circle(
                    0,
                    Layer::Content,
                    frame.left + 14.0 + i as f32 * 13.0,
                    frame.top + 12.0,
                    4.0,
                    Color::hex(dot),
                );
            }
            let inner = frame.span(frame.left + 14.0, frame.right - 14.0)?;
            let prompt = TextStyle::new(FontFamily::Courier, 9.5, p.accent);
            let cursor = paragraph(canvas, &inner, inner.start(0, frame.top + 24.0), "$ whoami", &prompt, Align::Left)?;
            let name_style = styles.name.with_color(p.on_primary);
            let cursor = paragraph(canvas, &inner, cursor, &name, &name_style, Align::Left)?;
            if !contact.is_empty() {
                let cursor = paragraph(canvas, &inner, cursor.down(2.0), "$ cat contact.txt", &prompt, Align::Left)?;
                let contact_style = TextStyle::new(FontFamily::Courier, 9.0, p.on_primary);
                paragraph(canvas, &inner, cursor, &contact, &contact_style, Align::Left)?;
            }
            top.at_y(frame.top + height + 18.0)
        }
        HeaderStyle::Minimal => {
            let cursor = paragraph(canvas, frame, top, &name, &styles.name, Align::Left)?;
            let cursor = paragraph(canvas, frame, cursor.down(4.0), &contact, &styles.contact, Align::Left)?;
            cursor.down(30.0)
        }
        // Identity is drawn inside the sidebar column.
        HeaderStyle::Sidebar => top,
    };

    Ok(cursor)
}

/// Initials disc, name and one contact part per line at the top of the sidebar.
fn sidebar_identity(
    canvas: &mut PageCanvas,
    column: &Column,
    styles: &Styles,
    identity: &StudentIdentity,
    sidebar: &SidebarSpec,
) -> Result<Cursor, RenderError> {
    let center_x = (column.left + column.right) / 2.0;
    let disc_r = 32.0;
    let disc_y = column.top + disc_r;
    canvas.fill_circle(0, Layer::Content, center_x, disc_y, disc_r, sidebar.accent);

    let letters = initials(&identity.name);
    let letter_style = TextStyle::new(FontFamily::HelveticaBold, 22.0, sidebar.fill);
    let letters_w = letter_style.measure(&letters);
    let letters_top = disc_y - FontFamily::HelveticaBold.ascent() * 22.0 / 2.0 - 1.0;
    canvas.text(0, Layer::Content, center_x - letters_w / 2.0, letters_top, &letters, &letter_style);

    let name_style = styles.name.with_size(styles.name.size.min(18.0));
    let mut cursor = column.start(0, column.top + disc_r * 2.0 + 14.0);
    cursor = paragraph(canvas, column, cursor, &identity.name, &name_style, Align::Center)?;
    cursor = cursor.down(4.0);
    let contact_style = styles.contact.with_size(styles.contact.size - 1.0);
    for part in identity.contact_parts() {
        cursor = paragraph(canvas, column, cursor, part, &contact_style, Align::Center)?;
    }
    Ok(cursor.down(18.0))
}

// ────────────────────────────────────────────────────────────────────────────
// Sections
// ────────────────────────────────────────────────────────────────────────────

#[allow(clippy::too_many_arguments)]
fn render_sections(
    canvas: &mut PageCanvas,
    spec: &TemplateSpec,
    styles: &Styles,
    content: &ResumeContent,
    layout: LayoutMode,
    column: &Column,
    cursor: Cursor,
    sections: &[SectionSpec],
) -> Result<Cursor, RenderError> {
    let mut cursor = cursor;
    let mut placed: Vec<ContentField> = Vec::new();

    for section in sections {
        if placed.contains(&section.field) || !content.has(section.field) {
            continue;
        }
        placed.push(section.field);

        let partner = spec
            .pair_partner(section.field, layout)
            .filter(|partner| content.has(*partner) && !placed.contains(partner))
            .and_then(|partner| sections.iter().find(|s| s.field == partner));

        cursor = match partner {
            Some(right) => {
                placed.push(right.field);
                let start = column.ensure(canvas, cursor, styles.title.leading() * 3.0)?;
                two_columns(
                    canvas,
                    column,
                    start,
                    PAIR_GUTTER,
                    |canvas, col, at| render_section(canvas, spec, styles, content, col, at, section),
                    |canvas, col, at| render_section(canvas, spec, styles, content, col, at, right),
                )?
            }
            None => render_section(canvas, spec, styles, content, column, cursor, section)?,
        };
        cursor = cursor.down(spec.section_gap);
    }

    Ok(cursor)
}

fn render_section(
    canvas: &mut PageCanvas,
    spec: &TemplateSpec,
    styles: &Styles,
    content: &ResumeContent,
    column: &Column,
    cursor: Cursor,
    section: &SectionSpec,
) -> Result<Cursor, RenderError> {
    let text = content.field(section.field);
    let label = section_label(spec, section.title);

    match spec.label_gutter {
        Some(gutter) => {
            let needed = (styles.body.leading() * 2.0).max(styles.title.measure(&label));
            let start = column.ensure(canvas, cursor, needed)?;
            let label_len = vertical_label(canvas, start.page, column.left - gutter, start.y, &label, &styles.title);
            let end = render_body(canvas, styles, spec.paragraph_align, column, start, section.mode, text)?;
            if end.page == start.page {
                Ok(Cursor::lowest(end, start.down(label_len)))
            } else {
                Ok(end)
            }
        }
        None => {
            let start = section_title(canvas, column, cursor, &label, &styles.title, styles.title_rule)?;
            render_body(canvas, styles, spec.paragraph_align, column, start, section.mode, text)
        }
    }
}

fn render_body(
    canvas: &mut PageCanvas,
    styles: &Styles,
    align: Align,
    column: &Column,
    cursor: Cursor,
    mode: SectionMode,
    text: &str,
) -> Result<Cursor, RenderError> {
    match mode {
        SectionMode::Paragraph => paragraph(canvas, column, cursor, text, &styles.body, align),
        SectionMode::Bullets => bullet_list(canvas, column, cursor, text, &styles.body, &styles.bullet),
        SectionMode::Entries => entry_list(
            canvas,
            column,
            cursor,
            text,
            &styles.body,
            &styles.entry_heading,
            &styles.bullet,
        ),
        SectionMode::Timeline => timeline(canvas, column, cursor, text, &styles.body, &styles.timeline),
        SectionMode::Chips => chip_row(canvas, column, cursor, &chip_items(text), &styles.chip),
        SectionMode::Cards => card_list(canvas, column, cursor, text, &styles.card),
        SectionMode::Code => code_block(canvas, column, cursor, text, &styles.code, &styles.code_block),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Page furniture
// ────────────────────────────────────────────────────────────────────────────

fn paint_decorations(canvas: &mut PageCanvas, spec: &TemplateSpec, identity: &StudentIdentity, pages: usize) {
    let (width, height) = (canvas.width(), canvas.height());
    let watermark_text = initials(&identity.name);

    for page in 0..pages {
        for decoration in spec.decorations {
            match *decoration {
                Decoration::PageFill => {
                    canvas.fill_rect(page, Layer::Background, 0.0, 0.0, width, height, spec.palette.background)
                }
                Decoration::Border { inset, color, width: line_width } => canvas.stroke_rect(
                    page,
                    Layer::Background,
                    inset,
                    inset,
                    width - 2.0 * inset,
                    height - 2.0 * inset,
                    color,
                    line_width,
                ),
                Decoration::Watermark { alpha, size } => {
                    if watermark_text.is_empty() {
                        continue;
                    }
                    let style = TextStyle::new(spec.typography.heading, size, spec.palette.primary);
                    canvas.begin_opacity(page, Layer::Background, alpha);
                    canvas.angled_text(page, Layer::Background, width / 2.0, height / 2.0, 45.0, &watermark_text, &style);
                    canvas.end_opacity(page, Layer::Background);
                }
                Decoration::Circle { cx, cy, r, color, alpha } => {
                    canvas.begin_opacity(page, Layer::Background, alpha);
                    canvas.fill_circle(page, Layer::Background, cx, cy, r, color);
                    canvas.end_opacity(page, Layer::Background);
                }
            }
        }
        if let Some(sidebar) = &spec.sidebar {
            canvas.fill_rect(page, Layer::Background, 0.0, 0.0, sidebar.width, height, sidebar.fill);
        }
    }
}

fn draw_footers(
    canvas: &mut PageCanvas,
    spec: &TemplateSpec,
    identity: &StudentIdentity,
    span: (f32, f32),
    pages: usize,
) {
    let p = &spec.palette;
    let (fill, color) = if spec.footer.filled {
        (Some(p.primary), p.on_primary)
    } else {
        (None, p.muted)
    };
    let style = TextStyle::new(spec.typography.body, 8.0, color);
    let center = format!("{} · {}", spec.label, Local::now().format("%d %B %Y"));

    for page in 0..pages {
        let number = format!("Page {} of {}", page + 1, pages);
        footer_band(
            canvas,
            page,
            span,
            spec.footer.height,
            fill,
            &style,
            FooterText {
                left: &identity.name,
                center: &center,
                right: &number,
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::page::A4_WIDTH;
    use crate::render::templates::{
        ACADEMIC, CLASSIC, CREATIVE, ELEGANT, EXECUTIVE, MINIMALIST, PROFESSIONAL, TEMPLATES,
    };
    use lopdf::{Document, Object};

    fn identity() -> StudentIdentity {
        StudentIdentity {
            name: "Asha Rao".to_string(),
            email: "a@x.edu".to_string(),
            branch: "CS".to_string(),
        }
    }

    fn full_content() -> ResumeContent {
        ResumeContent {
            objective: "Final-year student looking for a backend engineering role.".to_string(),
            education: "Anna University, B.E. CSE, 2021-2025\nPSG College, Higher Secondary".to_string(),
            skills: "Python\nSQL\nRust".to_string(),
            languages: "English\nTamil".to_string(),
            experience: "Intern, Acme Company\n- Built an ingestion service".to_string(),
            projects: "Portal: campus helpdesk app\nChatbot - FAQ assistant".to_string(),
            certifications: "AWS Cloud Practitioner".to_string(),
            achievements: "Hackathon winner 2024".to_string(),
            references_info: "Available on request".to_string(),
            additional_info: "Volunteer at the coding club".to_string(),
        }
    }

    fn contains(haystack: &[u8], needle: &str) -> bool {
        haystack.windows(needle.len()).any(|w| w == needle.as_bytes())
    }

    fn page_count(bytes: &[u8]) -> usize {
        Document::load_mem(bytes).unwrap().get_pages().len()
    }

    /// A `Tj` as placed on the page: its text matrix and measured width.
    struct PlacedText {
        text: String,
        matrix: Vec<f32>,
        width: f32,
    }

    fn placed_text(bytes: &[u8]) -> Vec<PlacedText> {
        let doc = Document::load_mem(bytes).unwrap();
        let mut placed = Vec::new();
        for (_, page_id) in doc.get_pages() {
            let mut style = TextStyle::new(FontFamily::Helvetica, 10.0, Color::BLACK);
            let mut matrix = Vec::new();
            for op in doc.get_and_decode_page_content(page_id).unwrap().operations {
                match op.operator.as_str() {
                    "Tf" => {
                        let resource = op.operands[0].as_name().unwrap();
                        let font = FontFamily::ALL
                            .into_iter()
                            .find(|f| f.resource_name().as_bytes() == resource)
                            .unwrap();
                        style = TextStyle::new(font, op.operands[1].as_float().unwrap(), Color::BLACK);
                    }
                    "Tm" => matrix = op.operands.iter().map(|o| o.as_float().unwrap()).collect(),
                    "Tj" => {
                        if let Object::String(raw, _) = &op.operands[0] {
                            let text = String::from_utf8_lossy(raw).to_string();
                            placed.push(PlacedText {
                                width: style.measure(&text),
                                text,
                                matrix: matrix.clone(),
                            });
                        }
                    }
                    _ => {}
                }
            }
        }
        placed
    }

    #[test]
    fn test_long_name_stays_on_the_page_for_every_header() {
        let long = StudentIdentity {
            name: "Venkata Subramanian Ramachandran Iyer".to_string(),
            email: "venkata.subramanian.ramachandran@students.example.edu".to_string(),
            branch: "Electronics and Communication Engineering".to_string(),
        };
        for spec in TEMPLATES {
            let bytes = render_layout(spec, &full_content(), &long, LayoutMode::SingleColumn).unwrap();
            for text in placed_text(&bytes).into_iter().filter(|t| t.matrix[..4] == [1.0, 0.0, 0.0, 1.0]) {
                let (x, right) = (text.matrix[4], text.matrix[4] + text.width);
                assert!(
                    x >= 0.0 && right <= A4_WIDTH + 0.5,
                    "{}: {:?} spans {x}..{right}",
                    spec.name,
                    text.text
                );
            }
        }
    }

    #[test]
    fn test_band_header_shrinks_long_name_inside_margins() {
        let long = StudentIdentity {
            name: "Venkata Subramanian Ramachandran Iyer".to_string(),
            ..identity()
        };
        let bytes = render_layout(&EXECUTIVE, &ResumeContent::default(), &long, LayoutMode::SingleColumn).unwrap();
        let name = placed_text(&bytes)
            .into_iter()
            .find(|t| t.text.starts_with("VENKATA"))
            .unwrap();
        assert!(name.matrix[4] + name.width <= A4_WIDTH - EXECUTIVE.margins.left + 0.5);
    }

    #[test]
    fn test_rotated_label_never_crosses_bottom_margin() {
        for filler in 38..56 {
            let content = ResumeContent {
                objective: (0..filler).map(|i| format!("Filler line {i}")).collect::<Vec<_>>().join("\n"),
                certifications: "AWS Cloud Practitioner".to_string(),
                ..Default::default()
            };
            let bytes = render_layout(&MINIMALIST, &content, &identity(), LayoutMode::SingleColumn).unwrap();
            let label = placed_text(&bytes)
                .into_iter()
                .find(|t| t.text == "CERTIFICATIONS")
                .unwrap();
            // Rotated baseline starts at the label's bottom end.
            assert_eq!(label.matrix[..4], [0.0, 1.0, -1.0, 0.0]);
            assert!(
                label.matrix[5] >= MINIMALIST.margins.bottom - 0.5,
                "{filler} filler lines: label bottom at {}",
                label.matrix[5]
            );
        }
    }

    #[test]
    fn test_every_template_renders_full_content() {
        for spec in TEMPLATES {
            let bytes = render_layout(spec, &full_content(), &identity(), LayoutMode::TwoColumn).unwrap();
            assert!(bytes.starts_with(b"%PDF-"), "{}", spec.name);
            assert!(page_count(&bytes) >= 1, "{}", spec.name);
        }
    }

    #[test]
    fn test_empty_content_renders_one_page_without_section_titles() {
        for spec in TEMPLATES {
            let bytes =
                render_layout(spec, &ResumeContent::default(), &identity(), LayoutMode::SingleColumn).unwrap();
            assert_eq!(page_count(&bytes), 1, "{}", spec.name);
            let mut titles: Vec<&str> = spec.sections.iter().map(|s| s.title).collect();
            if let Some(sidebar) = &spec.sidebar {
                titles.extend(sidebar.sections.iter().map(|s| s.title));
            }
            for title in titles {
                let label = section_label(spec, title);
                assert!(!contains(&bytes, &format!("({label})")), "{} emitted {label}", spec.name);
            }
            assert!(contains(&bytes, "Page 1 of 1"), "{}", spec.name);
        }
    }

    #[test]
    fn test_name_casing_follows_template() {
        let bytes = render_layout(&EXECUTIVE, &ResumeContent::default(), &identity(), LayoutMode::SingleColumn).unwrap();
        assert!(contains(&bytes, "(ASHA RAO)"));
        let bytes = render_layout(&CLASSIC, &ResumeContent::default(), &identity(), LayoutMode::SingleColumn).unwrap();
        assert!(contains(&bytes, "(Asha Rao)"));
    }

    #[test]
    fn test_sparse_rendering_only_emits_filled_sections() {
        let content = ResumeContent {
            skills: "Python".to_string(),
            ..Default::default()
        };
        let bytes = render_layout(&CLASSIC, &content, &identity(), LayoutMode::SingleColumn).unwrap();
        assert!(contains(&bytes, "(SKILLS)"));
        assert!(!contains(&bytes, "(EDUCATION)"));
        assert!(!contains(&bytes, "(LANGUAGES)"));
    }

    #[test]
    fn test_long_content_paginates() {
        let content = ResumeContent {
            experience: (1..=150)
                .map(|i| format!("Delivered milestone {i} for the placement cell"))
                .collect::<Vec<_>>()
                .join("\n"),
            ..Default::default()
        };
        let bytes = render_layout(&CLASSIC, &content, &identity(), LayoutMode::SingleColumn).unwrap();
        let pages = page_count(&bytes);
        assert!(pages > 1);
        assert!(contains(&bytes, &format!("Page {pages} of {pages}")));
    }

    #[test]
    fn test_runaway_content_hits_page_ceiling() {
        let content = ResumeContent {
            additional_info: "line\n".repeat(5_000),
            ..Default::default()
        };
        let err = render_layout(&CLASSIC, &content, &identity(), LayoutMode::SingleColumn).unwrap_err();
        assert!(matches!(err, RenderError::PageLimit { .. }));
    }

    #[test]
    fn test_sidebar_sections_render_in_sidebar() {
        let content = ResumeContent {
            skills: "Python".to_string(),
            objective: "Backend roles".to_string(),
            ..Default::default()
        };
        let bytes = render_layout(&PROFESSIONAL, &content, &identity(), LayoutMode::TwoColumn).unwrap();
        assert!(contains(&bytes, "(SKILLS)"));
        assert!(contains(&bytes, "(PROFILE)"));
        assert!(contains(&bytes, "(AR)"));
    }

    #[test]
    fn test_decorations_land_on_every_page() {
        let content = ResumeContent {
            objective: "word ".repeat(1_500),
            ..Default::default()
        };
        for (spec, marker) in [(&ELEGANT, "gs"), (&ACADEMIC, "re"), (&CREATIVE, "gs")] {
            let bytes = render_layout(spec, &content, &identity(), LayoutMode::SingleColumn).unwrap();
            let doc = Document::load_mem(&bytes).unwrap();
            let pages = doc.get_pages();
            assert!(pages.len() > 1, "{}", spec.name);
            for (_, page_id) in pages {
                let ops = doc.get_and_decode_page_content(page_id).unwrap().operations;
                assert!(
                    ops.iter().any(|op| op.operator == marker),
                    "{} page without decoration",
                    spec.name
                );
            }
        }
    }
}
