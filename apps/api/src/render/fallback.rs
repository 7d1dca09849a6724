//! Single-page error document written when a template fails.

use tracing::error;

use crate::layout::font_metrics::FontFamily;
use crate::layout::page::{A4_HEIGHT, A4_WIDTH};
use crate::layout::wrap::wrap_text;
use crate::render::canvas::{DocumentInfo, PageCanvas, TextStyle};
use crate::render::color::Color;
use crate::render::flow::Column;
use crate::render::primitives::{measure_paragraph, paragraph, Align};
use crate::render::RenderError;

pub const ERROR_TITLE: &str = "Error Generating Resume PDF";

/// Longest message shown on the page before line fitting.
const MAX_MESSAGE_CHARS: usize = 1_200;

/// Gap between the title and the message.
const TITLE_GAP: f32 = 18.0;

/// Last resort when even the error page cannot be built. Offsets in the
/// xref table are exact for these bytes.
const MINIMAL_PDF: &[u8] = concat!(
    "%PDF-1.4\n",
    "1 0 obj\n<< /Type /Catalog /Pages 2 0 R >>\nendobj\n",
    "2 0 obj\n<< /Type /Pages /Kids [3 0 R] /Count 1 >>\nendobj\n",
    "3 0 obj\n<< /Type /Page /Parent 2 0 R /MediaBox [0 0 595.28 841.89] /Contents 4 0 R ",
    "/Resources << /Font << /F1 5 0 R >> >> >>\nendobj\n",
    "4 0 obj\n<< /Length 58 >>\nstream\n",
    "BT /F1 18 Tf 72 770 Td (Error Generating Resume PDF) Tj ET",
    "\nendstream\nendobj\n",
    "5 0 obj\n<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>\nendobj\n",
    "xref\n0 6\n",
    "0000000000 65535 f \n",
    "0000000009 00000 n \n",
    "0000000058 00000 n \n",
    "0000000115 00000 n \n",
    "0000000247 00000 n \n",
    "0000000355 00000 n \n",
    "trailer\n<< /Size 6 /Root 1 0 R >>\nstartxref\n425\n%%EOF\n",
)
.as_bytes();

/// Builds the error document for `message`. Never fails.
pub fn error_document(message: &str) -> Vec<u8> {
    match build(message) {
        Ok(bytes) => bytes,
        Err(e) => {
            error!(error = %e, "failed to build error document; writing minimal PDF");
            MINIMAL_PDF.to_vec()
        }
    }
}

fn build(message: &str) -> Result<Vec<u8>, RenderError> {
    let mut canvas = PageCanvas::a4().with_max_pages(1);
    let column = Column::new(60.0, A4_WIDTH - 60.0, 60.0, A4_HEIGHT - 60.0)?;

    let title = TextStyle::new(FontFamily::HelveticaBold, 20.0, Color::hex(0xB00020));
    let body = TextStyle::new(FontFamily::Helvetica, 11.0, Color::hex(0x333333));

    let title_h = measure_paragraph(ERROR_TITLE, &title, column.width());
    let room = column.bottom - column.top - title_h - TITLE_GAP - 1.0;
    let shown = fit_message(message, &body, column.width(), room);
    let block = title_h + TITLE_GAP + measure_paragraph(&shown, &body, column.width());
    let top = (A4_HEIGHT * 0.4 - block / 2.0).max(column.top);

    let cursor = paragraph(&mut canvas, &column, column.start(0, top), ERROR_TITLE, &title, Align::Center)?;
    paragraph(&mut canvas, &column, cursor.down(TITLE_GAP), &shown, &body, Align::Center)?;

    canvas.into_pdf(&DocumentInfo {
        title: ERROR_TITLE,
        author: "portal-api",
        subject: "render failure",
    })
}

/// Keeps as many wrapped lines of `message` as fit in `height`, marking a cut
/// with an ellipsis. Line breaks in the message are kept.
fn fit_message(message: &str, style: &TextStyle, width: f32, height: f32) -> String {
    let clipped: String = message.chars().take(MAX_MESSAGE_CHARS).collect();
    let lines = wrap_text(&clipped, style.font, style.size, width);
    let max_lines = (height / style.leading()).floor().max(1.0) as usize;
    if lines.len() <= max_lines {
        return clipped;
    }

    let mut kept: Vec<String> = lines.into_iter().take(max_lines).map(|line| line.text).collect();
    if let Some(last) = kept.last_mut() {
        let ellipsis_w = style.measure("...");
        while !last.is_empty() && style.measure(last) + ellipsis_w > width {
            last.pop();
        }
        last.push_str("...");
    }
    kept.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::Document;

    fn contains(haystack: &[u8], needle: &str) -> bool {
        haystack.windows(needle.len()).any(|w| w == needle.as_bytes())
    }

    #[test]
    fn test_error_document_states_title_and_message() {
        let bytes = error_document("font table missing");
        assert!(bytes.starts_with(b"%PDF-"));
        assert!(contains(&bytes, ERROR_TITLE));
        assert!(contains(&bytes, "font table missing"));
        assert_eq!(Document::load_mem(&bytes).unwrap().get_pages().len(), 1);
    }

    #[test]
    fn test_huge_message_still_fits_one_page() {
        let bytes = error_document(&"overflow ".repeat(10_000));
        assert_eq!(Document::load_mem(&bytes).unwrap().get_pages().len(), 1);
    }

    #[test]
    fn test_multi_line_message_keeps_its_first_lines() {
        let message = format!("boom{}", "\nframe".repeat(80));
        let bytes = error_document(&message);
        assert_ne!(bytes, MINIMAL_PDF);
        assert!(contains(&bytes, "(boom)"));
        assert!(contains(&bytes, "(frame)"));
        assert!(contains(&bytes, "..."));
        assert_eq!(Document::load_mem(&bytes).unwrap().get_pages().len(), 1);
    }

    #[test]
    fn test_short_message_is_not_cut() {
        let body = TextStyle::new(FontFamily::Helvetica, 11.0, Color::BLACK);
        assert_eq!(fit_message("line one\nline two", &body, 400.0, 600.0), "line one\nline two");
    }

    #[test]
    fn test_minimal_pdf_is_well_formed() {
        assert!(MINIMAL_PDF.ends_with(b"%%EOF\n"));
        let doc = Document::load_mem(MINIMAL_PDF).unwrap();
        assert_eq!(doc.get_pages().len(), 1);
        let xref_at = MINIMAL_PDF.windows(4).position(|w| w == b"xref").unwrap();
        assert!(contains(MINIMAL_PDF, &format!("startxref\n{xref_at}\n")));
    }
}
