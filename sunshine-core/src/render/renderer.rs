//! Frame drawing
//!
//! Draw order is fixed: background, time, date, high, low, icon. Any
//! icon problem is logged and skipped; the text elements are drawn
//! first so they are on the surface no matter what happens to the icon.

use sunshine_display::{Bounds, DrawSurface, IconHandle, Point, Rect, SurfaceError};

use super::format::{format_date, format_temperature, format_time};
use super::paints::PaintSet;
use crate::config::{FaceConfig, Layout, Palette, TemperatureFormat};
use crate::state::{DisplayState, WindowInsets};
use crate::traits::{AssetError, IconAssets};
use crate::{error, trace, warn};

/// What happened to the weather icon in a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IconOutcome {
    Drawn(IconHandle),
    /// No condition id in the current forecast
    NoCondition,
    /// Icons are not drawn in ambient mode
    Suppressed,
    Unrecognized,
    Missing,
    /// Surface could not draw the bitmap
    SurfaceRejected,
}

/// Summary of a drawn frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FrameReport {
    pub icon: IconOutcome,
}

/// Draws the face
#[derive(Debug, Clone)]
pub struct Renderer {
    palette: Palette,
    layout: Layout,
    temperature: TemperatureFormat,
    paints: PaintSet,
    is_round: bool,
}

impl Renderer {
    /// Create a renderer for a square screen, anti-aliasing on
    pub fn new(config: &FaceConfig) -> Self {
        Self {
            palette: config.palette,
            layout: config.layout,
            temperature: config.temperature.clone(),
            paints: PaintSet::new(&config.palette, &config.layout),
            is_round: false,
        }
    }

    /// Pick offsets and time text size for the window shape
    pub fn apply_insets(&mut self, insets: WindowInsets) {
        self.is_round = insets.is_round;
        self.paints
            .set_time_size(self.layout.time_text_size_for(insets.is_round));
    }

    /// Switch anti-aliasing on every text paint
    pub fn set_ambient_hints(&mut self, anti_alias: bool) {
        self.paints.set_anti_alias(anti_alias);
    }

    pub fn paints(&self) -> &PaintSet {
        &self.paints
    }

    pub fn is_round(&self) -> bool {
        self.is_round
    }

    /// Draw one frame
    ///
    /// Background and text failures abort the frame; icon failures never do.
    pub fn draw<S, A>(
        &self,
        state: &DisplayState,
        assets: &A,
        surface: &mut S,
        bounds: Bounds,
    ) -> Result<FrameReport, SurfaceError>
    where
        S: DrawSurface + ?Sized,
        A: IconAssets + ?Sized,
    {
        let ambient = state.is_ambient();
        let layout = &self.layout;
        let x = layout.x_offset_for(self.is_round);
        let y = layout.y_offset;
        let now = state.now();

        let background = self
            .palette
            .background_for(ambient, state.uses_alternate_background());
        surface.fill_rect(bounds.to_rect(), background)?;

        surface.draw_text(
            &format_time(&now, ambient),
            Point::new(x, y),
            &self.paints.time,
        )?;

        surface.draw_text(
            &format_date(&now),
            Point::new(x + layout.date.x, y + layout.date.y),
            self.paints.date_for(ambient),
        )?;

        surface.draw_text(
            &format_temperature(state.high_temp(), &self.temperature),
            Point::new(x + layout.high.x, y + layout.high.y),
            self.paints.high_for(ambient),
        )?;

        surface.draw_text(
            &format_temperature(state.low_temp(), &self.temperature),
            Point::new(x + layout.low.x, y + layout.low.y),
            self.paints.low_for(ambient),
        )?;

        let icon = self.draw_icon(state, assets, surface, Point::new(x, y));
        Ok(FrameReport { icon })
    }

    fn draw_icon<S, A>(
        &self,
        state: &DisplayState,
        assets: &A,
        surface: &mut S,
        origin: Point,
    ) -> IconOutcome
    where
        S: DrawSurface + ?Sized,
        A: IconAssets + ?Sized,
    {
        let Some(condition) = state.condition_id() else {
            return IconOutcome::NoCondition;
        };
        if state.is_ambient() {
            return IconOutcome::Suppressed;
        }

        let icon = match assets.icon_for(condition) {
            Ok(icon) => icon,
            Err(AssetError::Unrecognized) => {
                warn!("unrecognized condition id {:?}, skipping icon", condition);
                return IconOutcome::Unrecognized;
            }
            Err(AssetError::Missing) => {
                error!("icon for {:?} missing, skipping icon", condition);
                return IconOutcome::Missing;
            }
        };

        let frame = Rect::new(
            origin.x + self.layout.icon.x,
            origin.y + self.layout.icon.y,
            self.layout.icon_width,
            self.layout.icon_height,
        );
        match surface.draw_icon(icon, frame) {
            Ok(()) => {
                trace!("icon {} drawn for {:?}", icon.0, condition);
                IconOutcome::Drawn(icon)
            }
            Err(e) => {
                error!("drawing icon for {:?} failed: {}", condition, e);
                IconOutcome::SurfaceRejected
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Forecast;
    use crate::traits::IconTable;
    use jiff::civil::date;
    use sunshine_display::{Color, DrawOp, FrameRecorder};
    use sunshine_protocol::WeatherUpdate;

    const BOUNDS: Bounds = Bounds::new(320, 320);

    fn state_with(high: f64, low: f64, condition: &str) -> DisplayState {
        let mut state = DisplayState::new();
        state.apply_forecast(Forecast::from(
            WeatherUpdate::new(high, low, condition).unwrap(),
        ));
        state.set_visible(true);
        state.set_now(date(2026, 10, 16).at(9, 5, 3, 0));
        state
    }

    #[test]
    fn test_interactive_frame() {
        let renderer = Renderer::new(&FaceConfig::default());
        let state = state_with(72.0, 58.0, "clear");
        let mut surface = FrameRecorder::new();

        let report = renderer
            .draw(&state, &IconTable::complete(), &mut surface, BOUNDS)
            .unwrap();

        assert!(surface
            .texts()
            .eq(["9:05:03", "Fri,Oct 16 2026", "72°", "58°"]));
        assert_eq!(report.icon, IconOutcome::Drawn(IconHandle(5)));
        assert_eq!(surface.background(), Some(Color(Palette::default().background)));

        // Background first, icon last
        assert!(matches!(surface.ops().first(), Some(DrawOp::Fill { .. })));
        assert!(matches!(surface.ops().last(), Some(DrawOp::Icon { .. })));
    }

    #[test]
    fn test_ambient_frame_omits_seconds_and_icon() {
        let renderer = Renderer::new(&FaceConfig::default());
        let mut state = state_with(80.0, 65.0, "storm");
        state.set_ambient(true);
        let mut surface = FrameRecorder::new();

        let report = renderer
            .draw(&state, &IconTable::complete(), &mut surface, BOUNDS)
            .unwrap();

        assert_eq!(surface.texts().next(), Some("9:05"));
        assert_eq!(report.icon, IconOutcome::Suppressed);
        assert_eq!(surface.icons().count(), 0);
        assert_eq!(
            surface.background(),
            Some(Color(Palette::default().ambient_background))
        );
    }

    #[test]
    fn test_icon_failures_keep_text() {
        let renderer = Renderer::new(&FaceConfig::default());
        let mut surface = FrameRecorder::new();

        let report = renderer
            .draw(
                &state_with(1.0, 0.0, "hail"),
                &IconTable::complete(),
                &mut surface,
                BOUNDS,
            )
            .unwrap();
        assert_eq!(report.icon, IconOutcome::Unrecognized);
        assert_eq!(surface.texts().count(), 4);

        surface.clear();
        let report = renderer
            .draw(
                &state_with(1.0, 0.0, "fog"),
                &IconTable::complete().without("fog"),
                &mut surface,
                BOUNDS,
            )
            .unwrap();
        assert_eq!(report.icon, IconOutcome::Missing);
        assert_eq!(surface.texts().count(), 4);

        let mut rejecting = FrameRecorder::rejecting_icons();
        let report = renderer
            .draw(
                &state_with(1.0, 0.0, "fog"),
                &IconTable::complete(),
                &mut rejecting,
                BOUNDS,
            )
            .unwrap();
        assert_eq!(report.icon, IconOutcome::SurfaceRejected);
        assert_eq!(rejecting.texts().count(), 4);
    }

    #[test]
    fn test_no_condition() {
        let renderer = Renderer::new(&FaceConfig::default());
        let mut surface = FrameRecorder::new();
        let report = renderer
            .draw(
                &state_with(1.0, 0.0, ""),
                &IconTable::complete(),
                &mut surface,
                BOUNDS,
            )
            .unwrap();
        assert_eq!(report.icon, IconOutcome::NoCondition);
    }

    #[test]
    fn test_alternate_background_after_tap() {
        let renderer = Renderer::new(&FaceConfig::default());
        let mut state = state_with(1.0, 0.0, "");
        state.record_tap();
        let mut surface = FrameRecorder::new();

        renderer
            .draw(&state, &IconTable::complete(), &mut surface, BOUNDS)
            .unwrap();
        assert_eq!(
            surface.background(),
            Some(Color(Palette::default().background_alt))
        );
    }

    #[test]
    fn test_round_insets() {
        let config = FaceConfig::default();
        let mut renderer = Renderer::new(&config);
        renderer.apply_insets(WindowInsets { is_round: true });
        let mut surface = FrameRecorder::new();

        renderer
            .draw(
                &state_with(1.0, 0.0, "clear"),
                &IconTable::complete(),
                &mut surface,
                BOUNDS,
            )
            .unwrap();

        let Some(DrawOp::Text { origin, paint, .. }) = surface.ops().get(1) else {
            panic!("expected time text");
        };
        assert_eq!(origin.x, config.layout.x_offset_round);
        assert_eq!(paint.size, config.layout.time_text_size_round);

        let Some(DrawOp::Icon { frame, .. }) = surface.ops().last() else {
            panic!("expected icon");
        };
        assert_eq!(frame.width, 70.0);
        assert_eq!(frame.height, 55.0);
        assert_eq!(frame.x, config.layout.x_offset_round + config.layout.icon.x);
    }

    #[test]
    fn test_ambient_hints() {
        let mut renderer = Renderer::new(&FaceConfig::default());
        renderer.set_ambient_hints(false);
        let mut state = state_with(1.0, 0.0, "");
        state.set_ambient(true);
        let mut surface = FrameRecorder::new();

        renderer
            .draw(&state, &IconTable::complete(), &mut surface, BOUNDS)
            .unwrap();
        assert!(surface.text_paints().all(|p| !p.anti_alias));
    }
}
