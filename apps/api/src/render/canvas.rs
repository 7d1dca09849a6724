//! Page canvas: collects drawing operations per page and serializes them with `lopdf`.
//!
//! Callers work in top-down page coordinates (origin at the top-left corner,
//! `y` growing downward), the way the layout flows. The canvas flips to PDF's
//! bottom-up space when it emits operators.
//!
//! Each page has two layers. Background operations are written before content
//! operations regardless of call order, which lets page-wide decorations
//! (sidebar fills, borders, watermarks) be painted after the flow has decided
//! how many pages exist.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document, Object, Stream, StringFormat};

use crate::layout::font_metrics::{get_metrics, FontFamily};
use crate::layout::page::{A4_HEIGHT, A4_WIDTH};
use crate::render::color::Color;
use crate::render::text::encode_win_ansi;
use crate::render::RenderError;

/// Hard ceiling on pages per document. Runaway input fails the render instead
/// of producing an unbounded file.
pub const MAX_PAGES: usize = 40;

/// Bezier control-point factor for quarter circles.
const KAPPA: f32 = 0.552_284_8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    Background,
    Content,
}

/// Font, size, colour and line spacing for a run of text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub font: FontFamily,
    pub size: f32,
    pub color: Color,
    /// Leading as a multiple of the font size.
    pub line_height: f32,
}

impl TextStyle {
    pub const fn new(font: FontFamily, size: f32, color: Color) -> Self {
        Self {
            font,
            size,
            color,
            line_height: 1.35,
        }
    }

    pub const fn with_color(self, color: Color) -> Self {
        Self { color, ..self }
    }

    pub const fn with_font(self, font: FontFamily) -> Self {
        Self { font, ..self }
    }

    pub const fn with_size(self, size: f32) -> Self {
        Self { size, ..self }
    }

    pub const fn with_line_height(self, line_height: f32) -> Self {
        Self {
            line_height,
            ..self
        }
    }

    /// Vertical distance between consecutive baselines.
    pub fn leading(&self) -> f32 {
        self.size * self.line_height
    }

    pub fn measure(&self, text: &str) -> f32 {
        get_metrics(self.font).measure_str(text, self.size)
    }
}

/// Metadata written to the document information dictionary.
#[derive(Debug, Clone, Copy)]
pub struct DocumentInfo<'a> {
    pub title: &'a str,
    pub author: &'a str,
    pub subject: &'a str,
}

#[derive(Debug, Default)]
struct PageLayers {
    background: Vec<Operation>,
    content: Vec<Operation>,
}

/// In-memory page set for one render call.
#[derive(Debug)]
pub struct PageCanvas {
    width: f32,
    height: f32,
    pages: Vec<PageLayers>,
    /// Registered fill/stroke alphas; index `i` is `/GS{i}`.
    opacities: Vec<f32>,
    max_pages: usize,
}

impl PageCanvas {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            pages: vec![PageLayers::default()],
            opacities: Vec::new(),
            max_pages: MAX_PAGES,
        }
    }

    pub fn a4() -> Self {
        Self::new(A4_WIDTH, A4_HEIGHT)
    }

    pub fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = max_pages.max(1);
        self
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Makes sure page `index` exists, failing once the page ceiling is hit.
    pub fn ensure_page(&mut self, index: usize) -> Result<(), RenderError> {
        if index >= self.max_pages {
            return Err(RenderError::PageLimit {
                limit: self.max_pages,
            });
        }
        while self.pages.len() <= index {
            self.pages.push(PageLayers::default());
        }
        Ok(())
    }

    #[cfg(test)]
    pub fn operations(&self, page: usize, layer: Layer) -> &[Operation] {
        match layer {
            Layer::Background => &self.pages[page].background,
            Layer::Content => &self.pages[page].content,
        }
    }

    fn ops(&mut self, page: usize, layer: Layer) -> &mut Vec<Operation> {
        // Drawing never fails; pagination limits are enforced by `ensure_page`.
        while self.pages.len() <= page {
            self.pages.push(PageLayers::default());
        }
        let layers = &mut self.pages[page];
        match layer {
            Layer::Background => &mut layers.background,
            Layer::Content => &mut layers.content,
        }
    }

    fn flip(&self, y: f32) -> f32 {
        self.height - y
    }

    // ────────────────────────────────────────────────────────────────────────
    // Shapes
    // ────────────────────────────────────────────────────────────────────────

    pub fn fill_rect(&mut self, page: usize, layer: Layer, x: f32, y: f32, w: f32, h: f32, color: Color) {
        let by = self.flip(y + h);
        let ops = self.ops(page, layer);
        ops.push(fill_color(color));
        ops.push(Operation::new("re", nums(&[x, by, w, h])));
        ops.push(Operation::new("f", vec![]));
    }

    #[allow(clippy::too_many_arguments)]
    pub fn stroke_rect(
        &mut self,
        page: usize,
        layer: Layer,
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        color: Color,
        line_width: f32,
    ) {
        let by = self.flip(y + h);
        let ops = self.ops(page, layer);
        ops.push(stroke_color(color));
        ops.push(Operation::new("w", nums(&[line_width])));
        ops.push(Operation::new("re", nums(&[x, by, w, h])));
        ops.push(Operation::new("S", vec![]));
    }

    #[allow(clippy::too_many_arguments)]
    pub fn fill_rounded_rect(
        &mut self,
        page: usize,
        layer: Layer,
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        radius: f32,
        color: Color,
    ) {
        let r = radius.min(w / 2.0).min(h / 2.0).max(0.0);
        let k = r * KAPPA;
        let (left, bottom) = (x, self.flip(y + h));
        let (right, top) = (x + w, bottom + h);
        let ops = self.ops(page, layer);
        ops.push(fill_color(color));
        ops.push(Operation::new("m", nums(&[left + r, bottom])));
        ops.push(Operation::new("l", nums(&[right - r, bottom])));
        ops.push(Operation::new(
            "c",
            nums(&[right - r + k, bottom, right, bottom + r - k, right, bottom + r]),
        ));
        ops.push(Operation::new("l", nums(&[right, top - r])));
        ops.push(Operation::new(
            "c",
            nums(&[right, top - r + k, right - r + k, top, right - r, top]),
        ));
        ops.push(Operation::new("l", nums(&[left + r, top])));
        ops.push(Operation::new(
            "c",
            nums(&[left + r - k, top, left, top - r + k, left, top - r]),
        ));
        ops.push(Operation::new("l", nums(&[left, bottom + r])));
        ops.push(Operation::new(
            "c",
            nums(&[left, bottom + r - k, left + r - k, bottom, left + r, bottom]),
        ));
        ops.push(Operation::new("h", vec![]));
        ops.push(Operation::new("f", vec![]));
    }

    #[allow(clippy::too_many_arguments)]
    pub fn line(
        &mut self,
        page: usize,
        layer: Layer,
        from: (f32, f32),
        to: (f32, f32),
        color: Color,
        line_width: f32,
    ) {
        let (fy, ty) = (self.flip(from.1), self.flip(to.1));
        let ops = self.ops(page, layer);
        ops.push(stroke_color(color));
        ops.push(Operation::new("w", nums(&[line_width])));
        ops.push(Operation::new("m", nums(&[from.0, fy])));
        ops.push(Operation::new("l", nums(&[to.0, ty])));
        ops.push(Operation::new("S", vec![]));
    }

    pub fn fill_circle(&mut self, page: usize, layer: Layer, cx: f32, cy: f32, r: f32, color: Color) {
        let cy = self.flip(cy);
        let k = r * KAPPA;
        let ops = self.ops(page, layer);
        ops.push(fill_color(color));
        ops.push(Operation::new("m", nums(&[cx + r, cy])));
        ops.push(Operation::new("c", nums(&[cx + r, cy + k, cx + k, cy + r, cx, cy + r])));
        ops.push(Operation::new("c", nums(&[cx - k, cy + r, cx - r, cy + k, cx - r, cy])));
        ops.push(Operation::new("c", nums(&[cx - r, cy - k, cx - k, cy - r, cx, cy - r])));
        ops.push(Operation::new("c", nums(&[cx + k, cy - r, cx + r, cy - k, cx + r, cy])));
        ops.push(Operation::new("f", vec![]));
    }

    pub fn fill_polygon(&mut self, page: usize, layer: Layer, points: &[(f32, f32)], color: Color) {
        if points.len() < 3 {
            return;
        }
        let flipped: Vec<(f32, f32)> = points.iter().map(|&(x, y)| (x, self.flip(y))).collect();
        let ops = self.ops(page, layer);
        ops.push(fill_color(color));
        ops.push(Operation::new("m", nums(&[flipped[0].0, flipped[0].1])));
        for &(x, y) in &flipped[1..] {
            ops.push(Operation::new("l", nums(&[x, y])));
        }
        ops.push(Operation::new("h", vec![]));
        ops.push(Operation::new("f", vec![]));
    }

    /// Wraps subsequent operations on this page/layer in a reduced-alpha state.
    /// Must be paired with [`PageCanvas::end_opacity`].
    pub fn begin_opacity(&mut self, page: usize, layer: Layer, alpha: f32) {
        let alpha = alpha.clamp(0.0, 1.0);
        let index = match self.opacities.iter().position(|a| (a - alpha).abs() < 1e-4) {
            Some(i) => i,
            None => {
                self.opacities.push(alpha);
                self.opacities.len() - 1
            }
        };
        let ops = self.ops(page, layer);
        ops.push(Operation::new("q", vec![]));
        ops.push(Operation::new("gs", vec![Object::Name(format!("GS{index}").into_bytes())]));
    }

    pub fn end_opacity(&mut self, page: usize, layer: Layer) {
        self.ops(page, layer).push(Operation::new("Q", vec![]));
    }

    // ────────────────────────────────────────────────────────────────────────
    // Text
    // ────────────────────────────────────────────────────────────────────────

    /// Draws one line of text whose line box starts at `y` (top-down).
    pub fn text(&mut self, page: usize, layer: Layer, x: f32, y: f32, text: &str, style: &TextStyle) {
        self.spaced_text(page, layer, x, y, text, style, 0.0);
    }

    /// Like [`PageCanvas::text`] with extra space after each word (`Tw`), for justification.
    #[allow(clippy::too_many_arguments)]
    pub fn spaced_text(
        &mut self,
        page: usize,
        layer: Layer,
        x: f32,
        y: f32,
        text: &str,
        style: &TextStyle,
        word_spacing: f32,
    ) {
        let baseline = self.flip(y + style.font.ascent() * style.size);
        self.text_with_matrix(page, layer, [1.0, 0.0, 0.0, 1.0, x, baseline], text, style, word_spacing);
    }

    /// Draws text rotated 90° anti-clockwise; the baseline starts at the pivot
    /// and the text reads upward.
    pub fn rotated_text(
        &mut self,
        page: usize,
        layer: Layer,
        pivot_x: f32,
        pivot_y: f32,
        text: &str,
        style: &TextStyle,
    ) {
        let py = self.flip(pivot_y);
        self.text_with_matrix(page, layer, [0.0, 1.0, -1.0, 0.0, pivot_x, py], text, style, 0.0);
    }

    /// Draws text rotated by `degrees` (anti-clockwise) around its own centre at (`cx`, `cy`).
    #[allow(clippy::too_many_arguments)]
    pub fn angled_text(
        &mut self,
        page: usize,
        layer: Layer,
        cx: f32,
        cy: f32,
        degrees: f32,
        text: &str,
        style: &TextStyle,
    ) {
        let (sin, cos) = degrees.to_radians().sin_cos();
        let half_w = style.measure(text) / 2.0;
        let half_h = style.font.ascent() * style.size / 2.0;
        let cy = self.flip(cy);
        // Shift the origin so the text box is centred on (cx, cy) after rotation.
        let ox = cx - (half_w * cos - half_h * sin);
        let oy = cy - (half_w * sin + half_h * cos);
        self.text_with_matrix(page, layer, [cos, sin, -sin, cos, ox, oy], text, style, 0.0);
    }

    fn text_with_matrix(
        &mut self,
        page: usize,
        layer: Layer,
        matrix: [f32; 6],
        text: &str,
        style: &TextStyle,
        word_spacing: f32,
    ) {
        if text.is_empty() {
            return;
        }
        let ops = self.ops(page, layer);
        ops.push(Operation::new("BT", vec![]));
        ops.push(Operation::new(
            "Tf",
            vec![
                Object::Name(style.font.resource_name().as_bytes().to_vec()),
                style.size.into(),
            ],
        ));
        ops.push(fill_color(style.color));
        ops.push(Operation::new("Tw", nums(&[word_spacing])));
        ops.push(Operation::new("Tm", nums(&matrix)));
        ops.push(Operation::new(
            "Tj",
            vec![Object::String(encode_win_ansi(text), StringFormat::Literal)],
        ));
        ops.push(Operation::new("ET", vec![]));
    }

    // ────────────────────────────────────────────────────────────────────────
    // Serialization
    // ────────────────────────────────────────────────────────────────────────

    /// Serializes every page into a complete PDF file.
    pub fn into_pdf(self, info: &DocumentInfo<'_>) -> Result<Vec<u8>, RenderError> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let mut fonts = Dictionary::new();
        for font in FontFamily::ALL {
            fonts.set(
                font.resource_name(),
                dictionary! {
                    "Type" => "Font",
                    "Subtype" => "Type1",
                    "BaseFont" => font.base_font(),
                    "Encoding" => "WinAnsiEncoding",
                },
            );
        }

        let mut graphics_states = Dictionary::new();
        for (i, alpha) in self.opacities.iter().enumerate() {
            graphics_states.set(
                format!("GS{i}"),
                dictionary! {
                    "Type" => "ExtGState",
                    "ca" => *alpha,
                    "CA" => *alpha,
                },
            );
        }

        let resources_id = doc.add_object(dictionary! {
            "Font" => fonts,
            "ExtGState" => graphics_states,
        });

        let mut kids: Vec<Object> = Vec::with_capacity(self.pages.len());
        for layers in self.pages {
            let mut operations = layers.background;
            operations.extend(layers.content);
            let encoded = Content { operations }
                .encode()
                .map_err(|e| RenderError::Pdf(e.to_string()))?;
            let content_id = doc.add_object(Stream::new(Dictionary::new(), encoded));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "MediaBox" => vec![0.0_f32.into(), 0.0_f32.into(), self.width.into(), self.height.into()],
                "Contents" => content_id,
                "Resources" => resources_id,
            });
            kids.push(page_id.into());
        }

        let page_count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => page_count,
            }),
        );

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        let info_id = doc.add_object(dictionary! {
            "Title" => info_string(info.title),
            "Author" => info_string(info.author),
            "Subject" => info_string(info.subject),
            "Producer" => info_string(concat!("portal-api ", env!("CARGO_PKG_VERSION"))),
            "CreationDate" => info_string(&chrono::Local::now().format("D:%Y%m%d%H%M%S").to_string()),
        });
        doc.trailer.set("Root", catalog_id);
        doc.trailer.set("Info", info_id);

        let mut buffer = Vec::new();
        doc.save_to(&mut buffer)
            .map_err(|e| RenderError::Pdf(e.to_string()))?;
        Ok(buffer)
    }
}

fn info_string(value: &str) -> Object {
    Object::String(encode_win_ansi(value), StringFormat::Literal)
}

fn nums(values: &[f32]) -> Vec<Object> {
    values.iter().map(|v| (*v).into()).collect()
}

fn fill_color(color: Color) -> Operation {
    Operation::new("rg", nums(&color.components()))
}

fn stroke_color(color: Color) -> Operation {
    Operation::new("RG", nums(&color.components()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn operators(canvas: &PageCanvas, page: usize, layer: Layer) -> Vec<String> {
        canvas
            .operations(page, layer)
            .iter()
            .map(|op| op.operator.clone())
            .collect()
    }

    #[test]
    fn test_new_canvas_has_one_page() {
        let canvas = PageCanvas::a4();
        assert_eq!(canvas.page_count(), 1);
        assert_eq!(canvas.width(), A4_WIDTH);
    }

    #[test]
    fn test_ensure_page_respects_ceiling() {
        let mut canvas = PageCanvas::a4().with_max_pages(3);
        assert!(canvas.ensure_page(2).is_ok());
        assert_eq!(canvas.page_count(), 3);
        let err = canvas.ensure_page(3).unwrap_err();
        assert!(matches!(err, RenderError::PageLimit { limit: 3 }));
    }

    #[test]
    fn test_text_emits_text_object() {
        let mut canvas = PageCanvas::a4();
        let style = TextStyle::new(FontFamily::Helvetica, 12.0, Color::BLACK);
        canvas.text(0, Layer::Content, 50.0, 50.0, "Asha Rao", &style);
        assert_eq!(
            operators(&canvas, 0, Layer::Content),
            vec!["BT", "Tf", "rg", "Tw", "Tm", "Tj", "ET"]
        );
    }

    #[test]
    fn test_empty_text_draws_nothing() {
        let mut canvas = PageCanvas::a4();
        let style = TextStyle::new(FontFamily::Helvetica, 12.0, Color::BLACK);
        canvas.text(0, Layer::Content, 50.0, 50.0, "", &style);
        assert!(canvas.operations(0, Layer::Content).is_empty());
    }

    #[test]
    fn test_layers_are_separate() {
        let mut canvas = PageCanvas::a4();
        canvas.fill_rect(0, Layer::Content, 0.0, 0.0, 10.0, 10.0, Color::BLACK);
        canvas.fill_rect(0, Layer::Background, 0.0, 0.0, 10.0, 10.0, Color::WHITE);
        assert_eq!(operators(&canvas, 0, Layer::Background), vec!["rg", "re", "f"]);
        assert_eq!(operators(&canvas, 0, Layer::Content), vec!["rg", "re", "f"]);
    }

    #[test]
    fn test_opacity_states_are_reused() {
        let mut canvas = PageCanvas::a4();
        canvas.begin_opacity(0, Layer::Background, 0.1);
        canvas.end_opacity(0, Layer::Background);
        canvas.begin_opacity(0, Layer::Background, 0.1);
        canvas.end_opacity(0, Layer::Background);
        assert_eq!(canvas.opacities.len(), 1);
    }

    #[test]
    fn test_into_pdf_produces_loadable_document() {
        let mut canvas = PageCanvas::a4();
        let style = TextStyle::new(FontFamily::TimesBold, 14.0, Color::BLACK);
        canvas.text(0, Layer::Content, 50.0, 50.0, "Resume", &style);
        canvas.ensure_page(1).unwrap();
        canvas.fill_circle(1, Layer::Content, 100.0, 100.0, 4.0, Color::BLACK);

        let bytes = canvas
            .into_pdf(&DocumentInfo {
                title: "Resume",
                author: "Asha Rao",
                subject: "test",
            })
            .unwrap();

        assert!(bytes.starts_with(b"%PDF-"));
        let doc = Document::load_mem(&bytes).unwrap();
        assert_eq!(doc.get_pages().len(), 2);
    }
}
