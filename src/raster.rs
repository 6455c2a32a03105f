//! Bitmap backend for the symmetry renderer.
//!
//! Frames are drawn with tiny-skia (anti-aliased, round caps and joins) and
//! handed out as straight-alpha `image::RgbaImage`s.

use egui::{Color32, ColorImage, Pos2};
use image::RgbaImage;
use tiny_skia::{
    ColorU8, FillRule, LineCap, LineJoin, Paint, PathBuilder, Pixmap, Stroke, Transform,
};

use crate::canvas::{SectorTransform, check_dimensions};
use crate::error::{DoilyError, DoilyResult};
use crate::renderer::{DrawTarget, Pen, Scene, SymmetryRenderer};

/// Largest raster handed to tiny-skia or `image`, in pixels (8192 x 8192)
pub const MAX_RASTER_PIXELS: u64 = 1 << 26;

/// Reject sizes that are empty or too large to allocate sensibly
pub(crate) fn check_raster_size(width: u32, height: u32) -> DoilyResult<()> {
    check_dimensions(width, height)?;
    if u64::from(width) * u64::from(height) > MAX_RASTER_PIXELS {
        log::warn!("Refusing to allocate a {width}x{height} raster");
        return Err(DoilyError::RasterAllocation { width, height });
    }
    Ok(())
}

/// A tiny-skia pixmap the renderer can draw into
pub struct PixmapTarget {
    pixmap: Pixmap,
}

impl PixmapTarget {
    pub fn new(width: u32, height: u32) -> DoilyResult<Self> {
        check_raster_size(width, height)?;
        let pixmap = Pixmap::new(width, height)
            .ok_or(DoilyError::RasterAllocation { width, height })?;
        Ok(Self { pixmap })
    }

    /// Start from an existing bitmap, e.g. to draw an overlay on it
    pub fn from_image(image: &RgbaImage) -> DoilyResult<Self> {
        let mut target = Self::new(image.width(), image.height())?;
        for (dst, src) in target.pixmap.pixels_mut().iter_mut().zip(image.pixels()) {
            let [r, g, b, a] = src.0;
            *dst = ColorU8::from_rgba(r, g, b, a).premultiply();
        }
        Ok(target)
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Convert to a straight-alpha bitmap
    pub fn into_image(self) -> DoilyResult<RgbaImage> {
        let (width, height) = (self.pixmap.width(), self.pixmap.height());
        let data: Vec<u8> = self
            .pixmap
            .pixels()
            .iter()
            .flat_map(|p| {
                let c = p.demultiply();
                [c.red(), c.green(), c.blue(), c.alpha()]
            })
            .collect();
        RgbaImage::from_raw(width, height, data).ok_or(DoilyError::RasterAllocation { width, height })
    }
}

fn paint(color: Color32) -> Paint<'static> {
    let [r, g, b, a] = color.to_srgba_unmultiplied();
    let mut paint = Paint::default();
    paint.set_color_rgba8(r, g, b, a);
    paint.anti_alias = true;
    paint
}

fn to_skia(transform: SectorTransform) -> Transform {
    Transform::from_rotate(transform.angle.to_degrees())
        .post_translate(transform.origin.x, transform.origin.y)
}

impl DrawTarget for PixmapTarget {
    fn clear(&mut self, color: Color32) {
        let [r, g, b, a] = color.to_srgba_unmultiplied();
        self.pixmap.fill(tiny_skia::Color::from_rgba8(r, g, b, a));
    }

    fn stroke_polyline(&mut self, points: &[Pos2], pen: Pen, transform: SectorTransform) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        let mut builder = PathBuilder::new();
        builder.move_to(first.x, first.y);
        for p in rest {
            builder.line_to(p.x, p.y);
        }
        let Some(path) = builder.finish() else {
            log::trace!("Skipping degenerate path of {} points", points.len());
            return;
        };

        let stroke = Stroke {
            width: pen.width,
            line_cap: LineCap::Round,
            line_join: LineJoin::Round,
            ..Stroke::default()
        };
        self.pixmap
            .stroke_path(&path, &paint(pen.color), &stroke, to_skia(transform), None);
    }

    fn fill_dot(&mut self, center: Pos2, diameter: f32, color: Color32, transform: SectorTransform) {
        let Some(path) = PathBuilder::from_circle(center.x, center.y, diameter / 2.0) else {
            log::trace!("Skipping dot of diameter {diameter}");
            return;
        };
        self.pixmap.fill_path(
            &path,
            &paint(color),
            FillRule::Winding,
            to_skia(transform),
            None,
        );
    }
}

/// Render a scene at the size held in its canvas parameters
pub fn rasterize(renderer: &SymmetryRenderer, scene: &Scene<'_>) -> DoilyResult<RgbaImage> {
    let mut target = PixmapTarget::new(scene.params.width(), scene.params.height())?;
    renderer.render(scene, &mut target);
    target.into_image()
}

/// Convert a bitmap for upload as an egui texture
pub fn to_color_image(image: &RgbaImage) -> ColorImage {
    ColorImage::from_rgba_unmultiplied(
        [image.width() as usize, image.height() as usize],
        image.as_raw(),
    )
}
