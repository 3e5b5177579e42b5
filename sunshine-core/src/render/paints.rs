//! Text paints
//!
//! One paint per text element, with dimmer ambient variants for the date
//! and temperatures. The time string keeps a single paint in both modes.

use sunshine_display::{Color, TextPaint};

use crate::config::{Layout, Palette};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaintSet {
    pub time: TextPaint,
    pub date: TextPaint,
    pub date_ambient: TextPaint,
    pub high: TextPaint,
    pub high_ambient: TextPaint,
    pub low: TextPaint,
    pub low_ambient: TextPaint,
}

impl PaintSet {
    /// Build the paints for a square screen with anti-aliasing on
    pub fn new(palette: &Palette, layout: &Layout) -> Self {
        let date_size = layout.date_text_size;
        let temp_size = layout.temperature_text_size;
        Self {
            time: TextPaint::new(Color(palette.time_text), layout.time_text_size),
            date: TextPaint::new(Color(palette.date_text), date_size),
            date_ambient: TextPaint::new(Color(palette.date_text_ambient), date_size),
            high: TextPaint::new(Color(palette.high_text), temp_size),
            high_ambient: TextPaint::new(Color(palette.high_text_ambient), temp_size),
            low: TextPaint::new(Color(palette.low_text), temp_size),
            low_ambient: TextPaint::new(Color(palette.low_text_ambient), temp_size),
        }
    }

    fn iter_mut(&mut self) -> impl Iterator<Item = &mut TextPaint> {
        [
            &mut self.time,
            &mut self.date,
            &mut self.date_ambient,
            &mut self.high,
            &mut self.high_ambient,
            &mut self.low,
            &mut self.low_ambient,
        ]
        .into_iter()
    }

    /// Every paint in the set
    pub fn iter(&self) -> impl Iterator<Item = &TextPaint> {
        [
            &self.time,
            &self.date,
            &self.date_ambient,
            &self.high,
            &self.high_ambient,
            &self.low,
            &self.low_ambient,
        ]
        .into_iter()
    }

    /// Switch anti-aliasing on every paint
    pub fn set_anti_alias(&mut self, anti_alias: bool) {
        for paint in self.iter_mut() {
            paint.anti_alias = anti_alias;
        }
    }

    pub fn set_time_size(&mut self, size: f32) {
        self.time.size = size;
    }

    pub fn date_for(&self, ambient: bool) -> &TextPaint {
        if ambient {
            &self.date_ambient
        } else {
            &self.date
        }
    }

    pub fn high_for(&self, ambient: bool) -> &TextPaint {
        if ambient {
            &self.high_ambient
        } else {
            &self.high
        }
    }

    pub fn low_for(&self, ambient: bool) -> &TextPaint {
        if ambient {
            &self.low_ambient
        } else {
            &self.low
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anti_alias_toggles_all() {
        let mut paints = PaintSet::new(&Palette::default(), &Layout::default());
        assert!(paints.iter().all(|p| p.anti_alias));

        paints.set_anti_alias(false);
        assert!(paints.iter().all(|p| !p.anti_alias));
        assert_eq!(paints.iter().count(), 7);

        paints.set_anti_alias(true);
        assert!(paints.iter().all(|p| p.anti_alias));
    }

    #[test]
    fn test_sizes_and_variants() {
        let palette = Palette::default();
        let paints = PaintSet::new(&palette, &Layout::default());
        assert_eq!(paints.date.size, 25.0);
        assert_eq!(paints.high.size, 35.0);
        assert_eq!(paints.low_ambient.size, 35.0);
        assert_eq!(paints.date_for(true).color, Color(palette.date_text_ambient));
        assert_eq!(paints.high_for(false).color, Color(palette.high_text));
    }
}
