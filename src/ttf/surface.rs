//! Drawing targets for [`FontBackend`](super::FontBackend)

use kurbo::{BezPath, Rect, Shape};

/// Something glyph outlines and rules can be filled onto.
///
/// Coordinates are device pixels with y growing downwards.
pub trait Surface {
    fn fill_path(&mut self, path: &BezPath);
    fn fill_rect(&mut self, rect: Rect);
}

/// One filled item on a [`Canvas`].
#[derive(Debug, Clone, PartialEq)]
pub enum Mark {
    Path(BezPath),
    Rect(Rect),
}

/// A surface that keeps everything drawn on it, in order.
#[derive(Debug, Clone, Default)]
pub struct Canvas {
    pub marks: Vec<Mark>,
}

impl Canvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Union of the bounding boxes of every mark, or `None` on an empty canvas.
    pub fn bounds(&self) -> Option<Rect> {
        self.marks
            .iter()
            .map(|mark| match mark {
                Mark::Path(path) => path.bounding_box(),
                Mark::Rect(rect) => *rect,
            })
            .reduce(|a, b| a.union(b))
    }
}

impl Surface for Canvas {
    fn fill_path(&mut self, path: &BezPath) {
        self.marks.push(Mark::Path(path.clone()));
    }

    fn fill_rect(&mut self, rect: Rect) {
        self.marks.push(Mark::Rect(rect));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_canvas_has_no_bounds() {
        assert_eq!(Canvas::new().bounds(), None);
    }

    #[test]
    fn test_bounds_cover_all_marks() {
        let mut canvas = Canvas::new();
        canvas.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0));

        let mut path = BezPath::new();
        path.move_to((4.0, 5.0));
        path.line_to((6.0, 2.0));
        path.close_path();
        canvas.fill_path(&path);

        assert_eq!(canvas.marks.len(), 2);
        assert_eq!(canvas.bounds(), Some(Rect::new(0.0, 0.0, 6.0, 5.0)));
    }
}
