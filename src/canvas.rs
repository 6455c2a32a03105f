use egui::{Color32, Pos2, Vec2};
use std::f32::consts::TAU;

use crate::error::{DoilyError, DoilyResult};

/// Upper bound on sectors; every stroke is drawn once per sector on each redraw
pub const MAX_SECTOR_COUNT: u32 = 360;

/// Geometry and sector settings the renderer reads on every pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasParams {
    sector_count: u32,
    pub show_sector_guides: bool,
    width: u32,
    height: u32,
}

impl CanvasParams {
    pub fn new(sector_count: u32, show_sector_guides: bool, width: u32, height: u32) -> DoilyResult<Self> {
        let mut params = Self {
            sector_count: 1,
            show_sector_guides,
            width: 1,
            height: 1,
        };
        params.set_sector_count(sector_count)?;
        params.set_size(width, height)?;
        Ok(params)
    }

    pub fn sector_count(&self) -> u32 {
        self.sector_count
    }

    /// Accepts `1..=MAX_SECTOR_COUNT`; anything else is refused and the old count kept
    pub fn set_sector_count(&mut self, n: u32) -> DoilyResult<()> {
        if n < 1 {
            return Err(DoilyError::invalid("sector_count", "must be at least 1"));
        }
        if n > MAX_SECTOR_COUNT {
            return Err(DoilyError::invalid(
                "sector_count",
                format!("{n} exceeds the limit of {MAX_SECTOR_COUNT}"),
            ));
        }
        self.sector_count = n;
        Ok(())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn set_size(&mut self, width: u32, height: u32) -> DoilyResult<()> {
        check_dimensions(width, height)?;
        self.width = width;
        self.height = height;
        Ok(())
    }

    /// Same parameters at another size, used for offscreen export
    pub fn with_size(&self, width: u32, height: u32) -> DoilyResult<Self> {
        let mut params = *self;
        params.set_size(width, height)?;
        Ok(params)
    }

    pub fn center(&self) -> Pos2 {
        Pos2::new(self.width as f32 / 2.0, self.height as f32 / 2.0)
    }

    /// Angle between neighbouring sectors, in radians
    pub fn sector_angle(&self) -> f32 {
        TAU / self.sector_count as f32
    }

    /// One transform per sector, the i-th rotated by `i * 2π / n` about the centre
    pub fn sector_transforms(&self) -> impl Iterator<Item = SectorTransform> + '_ {
        let step = self.sector_angle();
        let origin = self.center();
        (0..self.sector_count).map(move |i| SectorTransform {
            angle: step * i as f32,
            origin,
        })
    }

    /// Convert a canvas pixel position into centre-relative coordinates
    pub fn to_centered(&self, x: f32, y: f32) -> Vec2 {
        Vec2::new(x, y) - self.center().to_vec2()
    }
}

pub(crate) fn check_dimensions(width: u32, height: u32) -> DoilyResult<()> {
    if width == 0 || height == 0 {
        return Err(DoilyError::invalid(
            "dimensions",
            format!("{width}x{height} must both be positive"),
        ));
    }
    Ok(())
}

/// Rotation about the canvas centre applied to centre-relative geometry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectorTransform {
    /// Clockwise on screen, in radians
    pub angle: f32,
    /// Canvas centre in pixel space
    pub origin: Pos2,
}

impl SectorTransform {
    /// Map a centre-relative point to canvas pixel space
    pub fn apply(&self, p: Pos2) -> Pos2 {
        let (sin, cos) = self.angle.sin_cos();
        Pos2::new(
            self.origin.x + p.x * cos - p.y * sin,
            self.origin.y + p.x * sin + p.y * cos,
        )
    }
}

/// Current tool settings, read when a stroke starts
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrushState {
    size: u32,
    pub color: Color32,
    pub reflection_enabled: bool,
}

impl BrushState {
    pub fn new(size: u32, color: Color32, reflection_enabled: bool) -> DoilyResult<Self> {
        let mut brush = Self {
            size: 1,
            color,
            reflection_enabled,
        };
        brush.set_size(size)?;
        Ok(brush)
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn set_size(&mut self, size: u32) -> DoilyResult<()> {
        if size == 0 {
            return Err(DoilyError::invalid("brush_size", "must be positive"));
        }
        self.size = size;
        Ok(())
    }
}
