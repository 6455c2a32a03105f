use egui::{Color32, Rect, Sense, pos2};

use crate::config::DoilyConfig;
use crate::input::{self, InputHandler};
use crate::surface::DrawingSurface;
use crate::texture_manager::TextureManager;

const CURSOR_ALPHA: u8 = 150;

/// The live drawing area: feeds pointer input to the surface and shows its frame
pub fn canvas_panel(
    ui: &mut egui::Ui,
    surface: &mut DrawingSurface,
    input_handler: &mut InputHandler,
    textures: &mut TextureManager,
    config: &DoilyConfig,
) {
    let min = config.min_canvas_size as f32;
    let available = ui.available_size().max(egui::vec2(min, min));
    let (rect, _response) = ui.allocate_exact_size(available.floor(), Sense::drag());

    // The frame is rendered in physical pixels and shown scaled to `rect`
    let pixels_per_point = ui.ctx().pixels_per_point();
    let pixel_size = rect.size() * pixels_per_point;
    if let Err(err) = surface.resize(pixel_size.x.round() as u32, pixel_size.y.round() as u32) {
        log::error!("Could not resize canvas to {pixel_size:?}: {err}");
    }

    input_handler.set_canvas_rect(rect);
    input_handler.set_canvas_layer(ui.layer_id());
    input_handler.set_pixels_per_point(pixels_per_point);
    for event in input_handler.process_input(ui.ctx()) {
        input::route_event(&event, surface);
    }

    let texture = textures.canvas_texture(ui.ctx(), surface);
    let painter = ui.painter_at(rect);
    painter.image(
        texture,
        rect,
        Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0)),
        Color32::WHITE,
    );

    // Brush preview; an overlay only, never part of the frame
    if !input_handler.is_dragging() {
        if let Some(hover) = input_handler.hover_location(ui.ctx()) {
            let [r, g, b, _] = surface.brush_color().to_srgba_unmultiplied();
            painter.circle_filled(
                rect.min + hover.position.to_vec2() / pixels_per_point,
                surface.brush_size() as f32 / 2.0 / pixels_per_point,
                Color32::from_rgba_unmultiplied(r, g, b, CURSOR_ALPHA),
            );
        }
    }
}
