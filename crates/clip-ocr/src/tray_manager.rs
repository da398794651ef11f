//! Menu-bar status marker.
//!
//! One tray icon slot: amber while processing, green on success, red on
//! failure, and no icon at all when idle. Showing a new state swaps the icon
//! in place, so two markers are never visible together.

use crate::{AppError, AppResult};

use clip_ocr_core::StatusState;

use std::panic::Location;

use error_location::ErrorLocation;
use image::{Rgba, RgbaImage};
use tracing::{debug, instrument};
use tray_icon::{Icon, TrayIcon, TrayIconBuilder};

/// Marker edge length in pixels (menu bar icons are 18pt, drawn at 2x).
pub(crate) const MARKER_SIZE: u32 = 36;

const AMBER: Rgba<u8> = Rgba([255, 191, 0, 255]);
const GREEN: Rgba<u8> = Rgba([52, 199, 89, 255]);
const RED: Rgba<u8> = Rgba([255, 59, 48, 255]);
const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// System tray marker manager.
#[derive(Default)]
pub struct TrayManager {
    tray_icon: Option<TrayIcon>,
    shown: StatusState,
}

impl TrayManager {
    /// Create a manager with nothing shown.
    pub fn new() -> Self {
        Self::default()
    }

    /// Show the marker for `state`, replacing any marker already visible.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn show(&mut self, state: StatusState) -> AppResult<()> {
        let Some(color) = marker_color(state) else {
            self.clear();
            return Ok(());
        };

        let icon = Self::marker_icon(color)?;
        let tooltip = tooltip(state);

        match &self.tray_icon {
            Some(tray_icon) => {
                tray_icon
                    .set_icon(Some(icon))
                    .map_err(|e| AppError::TrayError {
                        reason: format!("Failed to update icon: {}", e),
                        location: ErrorLocation::from(Location::caller()),
                    })?;

                tray_icon
                    .set_tooltip(Some(tooltip))
                    .map_err(|e| AppError::TrayError {
                        reason: format!("Failed to update tooltip: {}", e),
                        location: ErrorLocation::from(Location::caller()),
                    })?;
            }
            None => {
                let tray_icon = TrayIconBuilder::new()
                    .with_tooltip(tooltip)
                    .with_icon(icon)
                    .build()
                    .map_err(|e| AppError::TrayError {
                        reason: format!("Failed to create tray icon: {}", e),
                        location: ErrorLocation::from(Location::caller()),
                    })?;
                self.tray_icon = Some(tray_icon);
            }
        }

        self.shown = state;
        debug!(state = ?state, "Marker shown");

        Ok(())
    }

    /// Remove the marker from the menu bar. No-op when nothing is shown.
    pub fn clear(&mut self) {
        // Dropping the TrayIcon removes it from the menu bar.
        if self.tray_icon.take().is_some() {
            debug!(state = ?self.shown, "Marker removed");
        }
        self.shown = StatusState::Idle;
    }

    /// State of the marker currently visible.
    pub fn shown(&self) -> StatusState {
        self.shown
    }

    #[track_caller]
    fn marker_icon(color: Rgba<u8>) -> AppResult<Icon> {
        let rgba = render_marker(color);
        let (width, height) = (rgba.width(), rgba.height());

        Icon::from_rgba(rgba.into_raw(), width, height).map_err(|e| AppError::TrayError {
            reason: format!("Failed to create icon from RGBA: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}

/// Fill color for a state, `None` for Idle.
pub(crate) fn marker_color(state: StatusState) -> Option<Rgba<u8>> {
    match state {
        StatusState::Idle => None,
        StatusState::Processing => Some(AMBER),
        StatusState::Success => Some(GREEN),
        StatusState::Failure => Some(RED),
    }
}

fn tooltip(state: StatusState) -> &'static str {
    match state {
        StatusState::Idle => "Clip-OCR",
        StatusState::Processing => "Clip-OCR - Reading clipboard image...",
        StatusState::Success => "Clip-OCR - Text copied",
        StatusState::Failure => "Clip-OCR - No text extracted",
    }
}

/// Solid circle of `color` on a transparent square.
pub(crate) fn render_marker(color: Rgba<u8>) -> RgbaImage {
    let radius = MARKER_SIZE as f32 / 2.0 - 2.0;
    let center = MARKER_SIZE as f32 / 2.0;

    RgbaImage::from_fn(MARKER_SIZE, MARKER_SIZE, |x, y| {
        let dx = x as f32 + 0.5 - center;
        let dy = y as f32 + 0.5 - center;
        if dx * dx + dy * dy <= radius * radius {
            color
        } else {
            TRANSPARENT
        }
    })
}
