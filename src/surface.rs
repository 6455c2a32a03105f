use egui::Color32;
use image::RgbaImage;

use crate::canvas::{BrushState, CanvasParams};
use crate::config::DoilyConfig;
use crate::error::DoilyResult;
use crate::history::History;
use crate::raster;
use crate::renderer::{Scene, SymmetryRenderer};
use crate::stroke::{StrokeBuilder, StrokeStyle};

/// Whether a pointer drag is in progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SurfaceState {
    #[default]
    Idle,
    Drawing,
}

/// Owns the drawing: committed strokes, the stroke being drawn, canvas
/// parameters and brush settings.
///
/// Every mutation re-renders the whole canvas before returning, so
/// [`DrawingSurface::frame`] always reflects the current state.
pub struct DrawingSurface {
    history: History,
    active: Option<StrokeBuilder>,
    params: CanvasParams,
    brush: BrushState,
    renderer: SymmetryRenderer,
    frame: RgbaImage,
    revision: u64,
}

impl std::fmt::Debug for DrawingSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DrawingSurface")
            .field("strokes", &self.history.len())
            .field("state", &self.state())
            .field("params", &self.params)
            .field("brush", &self.brush)
            .field("revision", &self.revision)
            .finish()
    }
}

impl DrawingSurface {
    /// Create a surface of the given size using the config's initial settings
    pub fn new(config: &DoilyConfig, width: u32, height: u32) -> DoilyResult<Self> {
        let params = CanvasParams::new(
            config.initial_sectors,
            config.show_sector_guides,
            width,
            height,
        )?;
        let brush = BrushState::new(
            config.brush_size,
            config.brush_color,
            config.reflection_enabled,
        )?;
        let renderer = SymmetryRenderer::new(config);
        let history = History::new();
        let frame = raster::rasterize(
            &renderer,
            &Scene {
                strokes: history.strokes(),
                active: None,
                params: &params,
            },
        )?;

        Ok(Self {
            history,
            active: None,
            params,
            brush,
            renderer,
            frame,
            revision: 0,
        })
    }

    pub fn state(&self) -> SurfaceState {
        if self.active.is_some() {
            SurfaceState::Drawing
        } else {
            SurfaceState::Idle
        }
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn active_stroke(&self) -> Option<&StrokeBuilder> {
        self.active.as_ref()
    }

    pub fn params(&self) -> &CanvasParams {
        &self.params
    }

    pub fn brush(&self) -> &BrushState {
        &self.brush
    }

    /// The most recently rendered frame, including any stroke in progress
    pub fn frame(&self) -> &RgbaImage {
        &self.frame
    }

    /// Bumped each time the frame is re-rendered
    pub fn revision(&self) -> u64 {
        self.revision
    }

    // --- stroke capture ---

    /// Begin a stroke at canvas pixel position `(x, y)`
    pub fn on_pointer_down(&mut self, x: f32, y: f32) {
        if self.active.is_some() {
            // A release went missing; keep what was drawn so far
            log::debug!("Pointer pressed while drawing, committing previous stroke");
            self.commit_active();
        }

        let mut stroke = StrokeBuilder::new(StrokeStyle {
            brush_width: self.brush.size(),
            color: self.brush.color,
            reflected: self.brush.reflection_enabled,
        });
        let p = self.params.to_centered(x, y);
        stroke.add_point(p.x, p.y);
        log::debug!(
            "Stroke started at ({:.1}, {:.1}), width {}, reflected {}",
            p.x,
            p.y,
            stroke.style().brush_width,
            stroke.style().reflected
        );
        self.active = Some(stroke);
        self.redraw();
    }

    /// Extend the active stroke; ignored when no stroke is in progress
    pub fn on_pointer_move(&mut self, x: f32, y: f32) {
        let p = self.params.to_centered(x, y);
        let Some(stroke) = self.active.as_mut() else {
            log::trace!("Ignoring pointer move without an active stroke");
            return;
        };
        stroke.add_point(p.x, p.y);
        self.redraw();
    }

    /// Commit the active stroke to history
    pub fn on_pointer_up(&mut self) {
        if self.active.is_none() {
            log::trace!("Ignoring pointer release without an active stroke");
            return;
        }
        self.commit_active();
        self.redraw();
    }

    fn commit_active(&mut self) {
        let Some(builder) = self.active.take() else {
            return;
        };
        match builder.finish() {
            Some(stroke) => {
                log::debug!("Committed stroke with {} points", stroke.points().len());
                self.history.push(stroke);
            }
            None => log::debug!("Discarded empty stroke"),
        }
    }

    // --- canvas parameters ---

    pub fn sector_count(&self) -> u32 {
        self.params.sector_count()
    }

    /// Change the number of sectors; zero is rejected and the old count kept
    pub fn set_sector_count(&mut self, n: u32) -> DoilyResult<()> {
        if let Err(err) = self.params.set_sector_count(n) {
            log::warn!("Rejected sector count {n}: {err}");
            return Err(err);
        }
        self.redraw();
        Ok(())
    }

    pub fn sector_guides_shown(&self) -> bool {
        self.params.show_sector_guides
    }

    pub fn toggle_sector_guides(&mut self) {
        self.params.show_sector_guides = !self.params.show_sector_guides;
        self.redraw();
    }

    /// Resize the live canvas; strokes stay centred
    pub fn resize(&mut self, width: u32, height: u32) -> DoilyResult<()> {
        if (width, height) == (self.params.width(), self.params.height()) {
            return Ok(());
        }
        raster::check_raster_size(width, height)?;
        self.params.set_size(width, height)?;
        log::debug!("Canvas resized to {width}x{height}");
        self.redraw();
        Ok(())
    }

    // --- brush ---

    pub fn brush_size(&self) -> u32 {
        self.brush.size()
    }

    pub fn set_brush_size(&mut self, n: u32) -> DoilyResult<()> {
        if let Err(err) = self.brush.set_size(n) {
            log::warn!("Rejected brush size {n}: {err}");
            return Err(err);
        }
        self.redraw();
        Ok(())
    }

    pub fn brush_color(&self) -> Color32 {
        self.brush.color
    }

    pub fn set_brush_color(&mut self, color: Color32) {
        self.brush.color = color;
        self.redraw();
    }

    pub fn reflection_enabled(&self) -> bool {
        self.brush.reflection_enabled
    }

    /// Only affects strokes started after this call
    pub fn toggle_reflection_enabled(&mut self) {
        self.brush.reflection_enabled = !self.brush.reflection_enabled;
        self.redraw();
    }

    // --- history ---

    /// Remove the most recent stroke; a no-op on an empty history
    pub fn undo(&mut self) {
        if let Some(stroke) = self.history.pop() {
            log::debug!("Undid stroke with {} points", stroke.points().len());
            self.redraw();
        }
    }

    /// Drop every stroke, including one in progress
    pub fn clear(&mut self) {
        log::info!("Clearing {} strokes", self.history.len());
        self.history.clear();
        self.active = None;
        self.redraw();
    }

    // --- export ---

    /// Render the committed drawing offscreen at `width` x `height`.
    ///
    /// A stroke still being drawn is left out.
    pub fn export_bitmap(&self, width: u32, height: u32) -> DoilyResult<RgbaImage> {
        let params = self.params.with_size(width, height)?;
        let image = raster::rasterize(
            &self.renderer,
            &Scene {
                strokes: self.history.strokes(),
                active: None,
                params: &params,
            },
        )?;
        log::info!(
            "Exported {width}x{height} bitmap of {} strokes",
            self.history.len()
        );
        Ok(image)
    }

    fn redraw(&mut self) {
        let scene = Scene {
            strokes: self.history.strokes(),
            active: self.active.as_ref().map(StrokeBuilder::view),
            params: &self.params,
        };
        match raster::rasterize(&self.renderer, &scene) {
            Ok(frame) => {
                self.frame = frame;
                self.revision += 1;
            }
            Err(err) => log::error!("Failed to render canvas: {err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DoilyError;

    fn surface() -> DrawingSurface {
        DrawingSurface::new(&DoilyConfig::default(), 64, 64).unwrap()
    }

    #[test]
    fn test_state_machine() {
        let mut surface = surface();
        assert_eq!(surface.state(), SurfaceState::Idle);

        surface.on_pointer_down(10.0, 10.0);
        assert_eq!(surface.state(), SurfaceState::Drawing);
        assert!(surface.history().is_empty());

        surface.on_pointer_up();
        assert_eq!(surface.state(), SurfaceState::Idle);
        assert_eq!(surface.history().len(), 1);
    }

    #[test]
    fn test_points_are_centre_relative() {
        let mut surface = surface();
        surface.on_pointer_down(32.0, 12.0);
        let p = surface.active_stroke().unwrap().points()[0].position();
        assert_eq!((p.x, p.y), (0.0, -20.0));
    }

    #[test]
    fn test_move_without_press_is_ignored() {
        let mut surface = surface();
        let revision = surface.revision();
        surface.on_pointer_move(5.0, 5.0);
        surface.on_pointer_up();
        assert_eq!(surface.state(), SurfaceState::Idle);
        assert!(surface.history().is_empty());
        assert_eq!(surface.revision(), revision);
    }

    #[test]
    fn test_press_while_drawing_commits_previous() {
        let mut surface = surface();
        surface.on_pointer_down(1.0, 1.0);
        surface.on_pointer_move(2.0, 2.0);
        surface.on_pointer_down(30.0, 30.0);
        assert_eq!(surface.history().len(), 1);
        assert_eq!(surface.active_stroke().unwrap().points().len(), 1);
    }

    #[test]
    fn test_mutations_bump_revision() {
        let mut surface = surface();
        let start = surface.revision();
        surface.set_sector_count(3).unwrap();
        surface.toggle_sector_guides();
        surface.set_brush_color(Color32::RED);
        assert_eq!(surface.revision(), start + 3);
    }

    #[test]
    fn test_undo_on_empty_does_not_redraw() {
        let mut surface = surface();
        let revision = surface.revision();
        surface.undo();
        assert_eq!(surface.revision(), revision);
    }

    #[test]
    fn test_resize_rejects_zero() {
        let mut surface = surface();
        assert!(surface.resize(0, 10).is_err());
        assert_eq!(surface.frame().dimensions(), (64, 64));

        surface.resize(80, 40).unwrap();
        assert_eq!(surface.frame().dimensions(), (80, 40));
    }

    #[test]
    fn test_oversized_resize_keeps_old_size() {
        let mut surface = surface();
        assert!(matches!(
            surface.resize(200_000, 200_000),
            Err(DoilyError::RasterAllocation { .. })
        ));
        assert_eq!((surface.params().width(), surface.params().height()), (64, 64));
        assert!(matches!(
            surface.export_bitmap(u32::MAX, u32::MAX),
            Err(DoilyError::RasterAllocation { .. })
        ));
    }

    #[test]
    fn test_rejected_brush_size_keeps_old_value() {
        let mut surface = surface();
        assert!(surface.set_brush_size(0).is_err());
        assert_eq!(surface.brush_size(), 5);
    }
}
