use egui::{Color32, Pos2};

use crate::canvas::{CanvasParams, SectorTransform};
use crate::config::DoilyConfig;
use crate::stroke::{StrokeRef, StrokeView};

/// Width and colour of a drawn line
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pen {
    pub width: f32,
    pub color: Color32,
}

/// Backend the renderer draws into.
///
/// Geometry is passed centre-relative; the target maps it to pixels through
/// the given sector transform. Lines use round caps and round joins.
pub trait DrawTarget {
    /// Fill the whole surface
    fn clear(&mut self, color: Color32);

    /// Draw connected line segments through `points`
    fn stroke_polyline(&mut self, points: &[Pos2], pen: Pen, transform: SectorTransform);

    /// Fill a circle centred on `center`
    fn fill_dot(&mut self, center: Pos2, diameter: f32, color: Color32, transform: SectorTransform);
}

/// Everything one render pass reads
#[derive(Debug, Clone, Copy)]
pub struct Scene<'a> {
    /// Committed strokes, oldest first
    pub strokes: &'a [StrokeRef],
    /// Stroke still being drawn, composited last
    pub active: Option<StrokeView<'a>>,
    pub params: &'a CanvasParams,
}

/// Draws strokes once per sector, plus their mirror images when reflected.
///
/// Holds only colours; all drawing state comes in through [`Scene`].
#[derive(Debug, Clone, PartialEq)]
pub struct SymmetryRenderer {
    background: Color32,
    guide_color: Color32,
    guide_length_ratio: f32,
}

const GUIDE_WIDTH: f32 = 1.0;

impl SymmetryRenderer {
    pub fn new(config: &DoilyConfig) -> Self {
        Self {
            background: config.background_color,
            guide_color: config.guide_color,
            guide_length_ratio: config.guide_length_ratio,
        }
    }

    pub fn background(&self) -> Color32 {
        self.background
    }

    /// Render a full frame into `target`
    pub fn render<T: DrawTarget + ?Sized>(&self, scene: &Scene<'_>, target: &mut T) {
        target.clear(self.background);

        if scene.params.show_sector_guides {
            self.draw_guides(scene.params, target);
        }

        for stroke in scene.strokes {
            Self::draw_stroke(stroke.view(), scene.params, target);
        }
        if let Some(active) = scene.active {
            Self::draw_stroke(active, scene.params, target);
        }
    }

    fn draw_guides<T: DrawTarget + ?Sized>(&self, params: &CanvasParams, target: &mut T) {
        let length = params.height() as f32 * self.guide_length_ratio;
        let guide = [Pos2::ZERO, Pos2::new(0.0, -length)];
        let pen = Pen {
            width: GUIDE_WIDTH,
            color: self.guide_color,
        };
        for transform in params.sector_transforms() {
            target.stroke_polyline(&guide, pen, transform);
        }
    }

    fn draw_stroke<T: DrawTarget + ?Sized>(view: StrokeView<'_>, params: &CanvasParams, target: &mut T) {
        if view.points.is_empty() {
            return;
        }

        let width = view.style.brush_width as f32;
        let color = view.style.color;

        // Zero-length paths would vanish, so they become dots
        if view.is_dot() {
            let center = view.points[0].position();
            let mirror = view.points[0].mirror().filter(|_| view.style.reflected);
            for transform in params.sector_transforms() {
                target.fill_dot(center, width, color, transform);
                if let Some(mirror) = mirror {
                    target.fill_dot(mirror, width, color, transform);
                }
            }
            return;
        }

        let pen = Pen { width, color };
        let path: Vec<Pos2> = view.positions().collect();
        let mirrored: Vec<Pos2> = if view.style.reflected {
            view.mirrors().collect()
        } else {
            Vec::new()
        };

        for transform in params.sector_transforms() {
            target.stroke_polyline(&path, pen, transform);
            if !mirrored.is_empty() {
                target.stroke_polyline(&mirrored, pen, transform);
            }
        }
    }
}
