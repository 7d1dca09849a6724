//! Explicit vertical flow: a cursor value threaded through every primitive,
//! and the column it flows in.

use crate::render::canvas::PageCanvas;
use crate::render::RenderError;

/// Where the next block starts. Primitives take one and return the next.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cursor {
    pub page: usize,
    pub x: f32,
    pub y: f32,
}

impl Cursor {
    pub const fn new(page: usize, x: f32, y: f32) -> Self {
        Self { page, x, y }
    }

    pub fn at_x(self, x: f32) -> Self {
        Self { x, ..self }
    }

    pub fn at_y(self, y: f32) -> Self {
        Self { y, ..self }
    }

    pub fn down(self, dy: f32) -> Self {
        Self {
            y: self.y + dy,
            ..self
        }
    }

    /// True when `self` is further along the flow than `other`.
    pub fn is_after(&self, other: &Cursor) -> bool {
        self.page > other.page || (self.page == other.page && self.y > other.y)
    }

    /// The later of two cursors: where flow resumes after side-by-side blocks.
    pub fn lowest(a: Cursor, b: Cursor) -> Cursor {
        if b.is_after(&a) {
            b
        } else {
            a
        }
    }
}

/// A vertical strip of the page that content flows down.
///
/// The first page's start is wherever the caller's cursor is (below the
/// header); continuation pages start at `top`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Column {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Column {
    pub fn new(left: f32, right: f32, top: f32, bottom: f32) -> Result<Self, RenderError> {
        if right - left < 1.0 || bottom - top < 1.0 {
            return Err(RenderError::Geometry(format!(
                "column {left:.1}..{right:.1} x {top:.1}..{bottom:.1} has no room for content"
            )));
        }
        Ok(Self {
            left,
            right,
            top,
            bottom,
        })
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    /// Same vertical extent, different horizontal span.
    pub fn span(&self, left: f32, right: f32) -> Result<Self, RenderError> {
        Column::new(left, right, self.top, self.bottom)
    }

    /// Cursor at the left edge of this column at height `y`.
    pub fn start(&self, page: usize, y: f32) -> Cursor {
        Cursor::new(page, self.left, y)
    }

    /// Width available to a block that starts at `cursor`.
    pub fn available(&self, cursor: &Cursor) -> f32 {
        (self.right - cursor.x).max(0.0)
    }

    /// Returns a cursor with at least `needed` points of room below it,
    /// moving to the top of the next page when the current page is full.
    ///
    /// A block taller than a whole page is placed at the top of a page and
    /// allowed to run past the bottom rather than paging forever.
    pub fn ensure(&self, canvas: &mut PageCanvas, cursor: Cursor, needed: f32) -> Result<Cursor, RenderError> {
        if cursor.y + needed <= self.bottom || cursor.y <= self.top {
            return Ok(cursor);
        }
        let next = cursor.page + 1;
        canvas.ensure_page(next)?;
        Ok(Cursor::new(next, cursor.x, self.top))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowest_prefers_later_page() {
        let a = Cursor::new(0, 10.0, 700.0);
        let b = Cursor::new(1, 10.0, 80.0);
        assert_eq!(Cursor::lowest(a, b), b);
        assert_eq!(Cursor::lowest(b, a), b);
    }

    #[test]
    fn test_lowest_on_same_page_uses_y() {
        let a = Cursor::new(0, 10.0, 300.0);
        let b = Cursor::new(0, 200.0, 250.0);
        assert_eq!(Cursor::lowest(a, b), a);
    }

    #[test]
    fn test_column_rejects_degenerate_geometry() {
        assert!(Column::new(100.0, 100.0, 0.0, 800.0).is_err());
        assert!(Column::new(0.0, 100.0, 500.0, 400.0).is_err());
        assert!(Column::new(40.0, 500.0, 40.0, 800.0).is_ok());
    }

    #[test]
    fn test_ensure_keeps_cursor_when_room_left() {
        let mut canvas = PageCanvas::a4();
        let column = Column::new(40.0, 500.0, 40.0, 800.0).unwrap();
        let cursor = Cursor::new(0, 40.0, 700.0);
        assert_eq!(column.ensure(&mut canvas, cursor, 50.0).unwrap(), cursor);
        assert_eq!(canvas.page_count(), 1);
    }

    #[test]
    fn test_ensure_breaks_to_next_page() {
        let mut canvas = PageCanvas::a4();
        let column = Column::new(40.0, 500.0, 40.0, 800.0).unwrap();
        let moved = column
            .ensure(&mut canvas, Cursor::new(0, 60.0, 790.0), 20.0)
            .unwrap();
        assert_eq!(moved, Cursor::new(1, 60.0, 40.0));
        assert_eq!(canvas.page_count(), 2);
    }

    #[test]
    fn test_ensure_fails_past_page_ceiling() {
        let mut canvas = PageCanvas::a4().with_max_pages(1);
        let column = Column::new(40.0, 500.0, 40.0, 800.0).unwrap();
        let result = column.ensure(&mut canvas, Cursor::new(0, 40.0, 790.0), 20.0);
        assert!(matches!(result, Err(RenderError::PageLimit { limit: 1 })));
    }
}
