//! Recording draw surface
//!
//! Keeps every draw call of a frame in order instead of rasterizing it.
//! Useful for tests and for surfaces that forward frames elsewhere.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::backend::{Color, DrawSurface, IconHandle, Point, Rect, SurfaceError, TextPaint};

/// A single recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// Solid rectangle fill
    Fill { rect: Rect, color: Color },
    /// One line of text
    Text {
        text: String,
        origin: Point,
        paint: TextPaint,
    },
    /// Icon scaled into a frame
    Icon { icon: IconHandle, frame: Rect },
}

/// Draw surface that records calls in painter's order
#[derive(Debug, Clone, Default)]
pub struct FrameRecorder {
    ops: Vec<DrawOp>,
    /// Reject icon draws, as a surface that cannot decode a bitmap would
    reject_icons: bool,
}

impl FrameRecorder {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a recorder whose icon draws fail with `UnsupportedIcon`
    pub fn rejecting_icons() -> Self {
        Self {
            ops: Vec::new(),
            reject_icons: true,
        }
    }

    /// Forget everything recorded so far
    pub fn clear(&mut self) {
        self.ops.clear();
    }

    /// All recorded calls
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Text of every recorded text call, in draw order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Paints of every recorded text call, in draw order
    pub fn text_paints(&self) -> impl Iterator<Item = &TextPaint> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text { paint, .. } => Some(paint),
            _ => None,
        })
    }

    /// Handles of every recorded icon call
    pub fn icons(&self) -> impl Iterator<Item = IconHandle> + '_ {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Icon { icon, .. } => Some(*icon),
            _ => None,
        })
    }

    /// Colour of the first fill, i.e. the background
    pub fn background(&self) -> Option<Color> {
        self.ops.iter().find_map(|op| match op {
            DrawOp::Fill { color, .. } => Some(*color),
            _ => None,
        })
    }
}

impl DrawSurface for FrameRecorder {
    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), SurfaceError> {
        self.ops.push(DrawOp::Fill { rect, color });
        Ok(())
    }

    fn draw_text(
        &mut self,
        text: &str,
        origin: Point,
        paint: &TextPaint,
    ) -> Result<(), SurfaceError> {
        self.ops.push(DrawOp::Text {
            text: text.to_string(),
            origin,
            paint: *paint,
        });
        Ok(())
    }

    fn draw_icon(&mut self, icon: IconHandle, frame: Rect) -> Result<(), SurfaceError> {
        if self.reject_icons {
            return Err(SurfaceError::UnsupportedIcon);
        }
        self.ops.push(DrawOp::Icon { icon, frame });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order() {
        let mut recorder = FrameRecorder::new();
        let paint = TextPaint::new(Color::WHITE, 20.0);

        recorder
            .fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Color::BLACK)
            .unwrap();
        recorder
            .draw_text("9:05", Point::new(1.0, 2.0), &paint)
            .unwrap();
        recorder
            .draw_icon(IconHandle(3), Rect::new(0.0, 0.0, 70.0, 55.0))
            .unwrap();

        assert_eq!(recorder.ops().len(), 3);
        assert_eq!(recorder.background(), Some(Color::BLACK));
        assert!(recorder.texts().eq(["9:05"]));
        assert!(recorder.icons().eq([IconHandle(3)]));
    }

    #[test]
    fn test_rejecting_icons() {
        let mut recorder = FrameRecorder::rejecting_icons();
        let result = recorder.draw_icon(IconHandle(1), Rect::default());
        assert_eq!(result, Err(SurfaceError::UnsupportedIcon));
        assert_eq!(recorder.icons().count(), 0);
    }

    #[test]
    fn test_clear() {
        let mut recorder = FrameRecorder::new();
        recorder.fill_rect(Rect::default(), Color::WHITE).unwrap();
        recorder.clear();
        assert!(recorder.ops().is_empty());
        assert_eq!(recorder.background(), None);
    }
}
