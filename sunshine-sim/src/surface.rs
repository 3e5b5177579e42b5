//! Terminal draw surface
//!
//! Records each frame's draw calls and prints a one-line summary.

use log::{info, warn};

use sunshine_core::render::{FrameReport, IconOutcome};
use sunshine_core::traits::KNOWN_CONDITIONS;
use sunshine_display::{
    Color, DrawSurface, FrameRecorder, IconHandle, Point, Rect, SurfaceError, TextPaint,
};

#[derive(Default)]
pub struct TerminalSurface {
    recorder: FrameRecorder,
    frames: u32,
}

impl TerminalSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop the previous frame's calls
    pub fn begin_frame(&mut self) {
        self.recorder.clear();
    }

    /// Print the frame just drawn
    pub fn present(&mut self, report: &FrameReport) {
        self.frames += 1;

        let background = self.recorder.background().unwrap_or(Color::BLACK);
        let texts: Vec<&str> = self.recorder.texts().collect();
        let aliased = self.recorder.text_paints().any(|paint| !paint.anti_alias);
        let icon = match report.icon {
            IconOutcome::Drawn(handle) => icon_name(handle),
            IconOutcome::NoCondition => "-",
            IconOutcome::Suppressed => "(ambient)",
            IconOutcome::Unrecognized => "(unknown)",
            IconOutcome::Missing => "(missing)",
            IconOutcome::SurfaceRejected => "(failed)",
        };

        info!(
            "frame {:>4} bg=#{:06X} {} icon={}{}",
            self.frames,
            background.0 & 0x00FF_FFFF,
            texts.join(" | "),
            icon,
            if aliased { " [no-aa]" } else { "" }
        );
    }

    pub fn frames(&self) -> u32 {
        self.frames
    }
}

fn icon_name(handle: IconHandle) -> &'static str {
    KNOWN_CONDITIONS
        .get(handle.0 as usize)
        .copied()
        .unwrap_or("?")
}

impl DrawSurface for TerminalSurface {
    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), SurfaceError> {
        self.recorder.fill_rect(rect, color)
    }

    fn draw_text(
        &mut self,
        text: &str,
        origin: Point,
        paint: &TextPaint,
    ) -> Result<(), SurfaceError> {
        self.recorder.draw_text(text, origin, paint)
    }

    fn draw_icon(&mut self, icon: IconHandle, frame: Rect) -> Result<(), SurfaceError> {
        if icon.0 as usize >= KNOWN_CONDITIONS.len() {
            warn!("No bitmap for icon handle {}", icon.0);
            return Err(SurfaceError::UnsupportedIcon);
        }
        self.recorder.draw_icon(icon, frame)
    }
}
