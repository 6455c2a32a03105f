use std::ops::RangeInclusive;

use egui::Color32;

use crate::canvas::MAX_SECTOR_COUNT;
use crate::error::{DoilyError, DoilyResult};

/// Tunable defaults and limits for the application.
///
/// Everything here is read once at start-up; nothing is written back to disk.
#[derive(Debug, Clone, PartialEq)]
pub struct DoilyConfig {
    /// Number of sectors a fresh canvas starts with
    pub initial_sectors: u32,
    /// Range offered by the sector slider
    pub sector_range: RangeInclusive<u32>,
    /// Brush size a fresh canvas starts with
    pub brush_size: u32,
    /// Range offered by the brush size slider
    pub brush_range: RangeInclusive<u32>,
    pub brush_color: Color32,
    pub background_color: Color32,
    pub guide_color: Color32,
    /// Guide length as a fraction of the canvas height
    pub guide_length_ratio: f32,
    pub show_sector_guides: bool,
    pub reflection_enabled: bool,
    /// Smallest edge the live canvas is laid out with
    pub min_canvas_size: u32,
    /// Width of the gallery side panel in pixels
    pub gallery_width: u32,
    /// Horizontal room left for the gallery's vertical scroll bar
    pub gallery_scroll_bar_allowance: u32,
    /// Maximum number of saved drawings
    pub gallery_capacity: usize,
    /// Width of the cross drawn over selected thumbnails
    pub selection_stroke_width: f32,
    pub window_size: [f32; 2],
    pub min_window_size: [f32; 2],
}

impl Default for DoilyConfig {
    fn default() -> Self {
        Self {
            initial_sectors: 12,
            sector_range: 1..=30,
            brush_size: 5,
            brush_range: 2..=30,
            brush_color: Color32::WHITE,
            background_color: Color32::BLACK,
            guide_color: Color32::WHITE,
            guide_length_ratio: 1.0 / 3.0,
            show_sector_guides: true,
            reflection_enabled: false,
            min_canvas_size: 200,
            gallery_width: 200,
            gallery_scroll_bar_allowance: 20,
            gallery_capacity: 12,
            selection_stroke_width: 5.0,
            window_size: [1000.0, 500.0],
            min_window_size: [750.0, 300.0],
        }
    }
}

impl DoilyConfig {
    /// Width thumbnails are scaled to so they fit beside the scroll bar
    pub fn thumbnail_width(&self) -> u32 {
        self.gallery_width
            .saturating_sub(self.gallery_scroll_bar_allowance)
            .max(1)
    }

    /// Check that the values are usable together
    pub fn validate(&self) -> DoilyResult<()> {
        if *self.sector_range.start() < 1 {
            return Err(DoilyError::invalid(
                "sector_range",
                "must not include 0 sectors",
            ));
        }
        if *self.sector_range.end() > MAX_SECTOR_COUNT {
            return Err(DoilyError::invalid(
                "sector_range",
                format!("must not go beyond {MAX_SECTOR_COUNT} sectors"),
            ));
        }
        if !self.sector_range.contains(&self.initial_sectors) {
            return Err(DoilyError::invalid(
                "initial_sectors",
                format!(
                    "{} lies outside {:?}",
                    self.initial_sectors, self.sector_range
                ),
            ));
        }
        if *self.brush_range.start() < 1 {
            return Err(DoilyError::invalid(
                "brush_range",
                "must not include a zero brush size",
            ));
        }
        if !self.brush_range.contains(&self.brush_size) {
            return Err(DoilyError::invalid(
                "brush_size",
                format!("{} lies outside {:?}", self.brush_size, self.brush_range),
            ));
        }
        if !(self.guide_length_ratio > 0.0 && self.guide_length_ratio <= 0.5) {
            return Err(DoilyError::invalid(
                "guide_length_ratio",
                "must lie in (0, 0.5]",
            ));
        }
        if self.min_canvas_size == 0 {
            return Err(DoilyError::invalid("min_canvas_size", "must be positive"));
        }
        if self.gallery_width <= self.gallery_scroll_bar_allowance {
            return Err(DoilyError::invalid(
                "gallery_width",
                "leaves no room for thumbnails",
            ));
        }
        if self.gallery_capacity == 0 {
            return Err(DoilyError::invalid("gallery_capacity", "must be positive"));
        }
        if self.selection_stroke_width <= 0.0 {
            return Err(DoilyError::invalid(
                "selection_stroke_width",
                "must be positive",
            ));
        }
        Ok(())
    }
}
