//! Draw surface trait
//!
//! Defines the interface the face renderer draws through.

/// Draw surface errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SurfaceError {
    /// Surface is not available (released, not yet attached)
    #[error("draw surface unavailable")]
    Unavailable,
    /// Icon handle could not be decoded or drawn
    #[error("icon cannot be drawn")]
    UnsupportedIcon,
}

/// 32-bit ARGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Color(pub u32);

impl Color {
    pub const BLACK: Color = Color(0xFF00_0000);
    pub const WHITE: Color = Color(0xFFFF_FFFF);
}

/// A point in surface pixels (fractional positions allowed)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle in surface pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Pixel size of the area handed to a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Bounds {
    pub width: u32,
    pub height: u32,
}

impl Bounds {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// The whole area as a rectangle anchored at the origin
    pub fn to_rect(self) -> Rect {
        Rect::new(0.0, 0.0, self.width as f32, self.height as f32)
    }
}

/// How a string of text is drawn
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextPaint {
    /// Text colour
    pub color: Color,
    /// Text size in pixels
    pub size: f32,
    /// Smooth glyph edges; low-bit ambient displays turn this off
    pub anti_alias: bool,
}

impl TextPaint {
    /// A paint with anti-aliasing enabled
    pub const fn new(color: Color, size: f32) -> Self {
        Self {
            color,
            size,
            anti_alias: true,
        }
    }
}

/// Opaque reference to an icon bitmap owned by the platform's assets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct IconHandle(pub u16);

/// Something the face can be drawn onto
///
/// Implementations handle fonts, bitmaps and the pixel format. Calls arrive
/// in painter's order; later calls draw over earlier ones.
pub trait DrawSurface {
    /// Fill a rectangle with a solid colour
    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), SurfaceError>;

    /// Draw a single line of text with its baseline starting at `origin`
    fn draw_text(&mut self, text: &str, origin: Point, paint: &TextPaint)
        -> Result<(), SurfaceError>;

    /// Draw an icon scaled to fill `frame`
    fn draw_icon(&mut self, icon: IconHandle, frame: Rect) -> Result<(), SurfaceError>;
}

impl<S: DrawSurface + ?Sized> DrawSurface for &mut S {
    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), SurfaceError> {
        (**self).fill_rect(rect, color)
    }

    fn draw_text(
        &mut self,
        text: &str,
        origin: Point,
        paint: &TextPaint,
    ) -> Result<(), SurfaceError> {
        (**self).draw_text(text, origin, paint)
    }

    fn draw_icon(&mut self, icon: IconHandle, frame: Rect) -> Result<(), SurfaceError> {
        (**self).draw_icon(icon, frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_rect() {
        let rect = Bounds::new(320, 290).to_rect();
        assert_eq!(rect, Rect::new(0.0, 0.0, 320.0, 290.0));
    }

    #[test]
    fn test_text_paint_defaults_to_anti_alias() {
        assert!(TextPaint::new(Color::WHITE, 12.0).anti_alias);
    }
}
