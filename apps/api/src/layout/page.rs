//! A4 page geometry shared by every template.

use serde::Serialize;

/// A4 in PDF points (1/72 in).
pub const A4_WIDTH: f32 = 595.28;
pub const A4_HEIGHT: f32 = 841.89;

/// Page margins in points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Margins {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Margins {
    pub const fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }
}

/// Page size plus margins for one template.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PageGeometry {
    pub width: f32,
    pub height: f32,
    pub margins: Margins,
}

impl PageGeometry {
    pub const fn a4(margins: Margins) -> Self {
        Self {
            width: A4_WIDTH,
            height: A4_HEIGHT,
            margins,
        }
    }

    pub fn content_left(&self) -> f32 {
        self.margins.left
    }

    pub fn content_right(&self) -> f32 {
        self.width - self.margins.right
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_edges_follow_margins() {
        let page = PageGeometry::a4(Margins::new(40.0, 30.0, 40.0, 50.0));
        assert_eq!(page.content_left(), 50.0);
        assert!((page.content_right() - (A4_WIDTH - 30.0)).abs() < 1e-3);
        assert_eq!(page.height, A4_HEIGHT);
    }
}
