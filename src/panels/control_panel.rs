use egui::color_picker::{self, Alpha};

use crate::command::Command;
use crate::config::DoilyConfig;
use crate::gallery::Gallery;
use crate::surface::DrawingSurface;

/// Buttons and sliders for the drawing. Returns the commands the user issued this frame.
pub fn control_panel(
    ui: &mut egui::Ui,
    surface: &DrawingSurface,
    gallery: &Gallery,
    config: &DoilyConfig,
    status: Option<&str>,
) -> Vec<Command> {
    let mut commands = Vec::new();

    ui.heading("Digital Doilies");
    ui.separator();

    ui.horizontal(|ui| {
        if ui
            .add_enabled(!surface.history().is_empty(), egui::Button::new("Undo"))
            .clicked()
        {
            commands.push(Command::Undo);
        }
        if ui.button("Clear").clicked() {
            commands.push(Command::Clear);
        }
    });

    ui.separator();

    let mut sectors = surface.sector_count();
    ui.label(format!("Number of sectors ({sectors})"));
    if ui
        .add(egui::Slider::new(&mut sectors, config.sector_range.clone()).show_value(false))
        .changed()
    {
        commands.push(Command::SetSectorCount(sectors));
    }

    let mut brush_size = surface.brush_size();
    ui.label(format!("Brush size ({brush_size})"));
    if ui
        .add(egui::Slider::new(&mut brush_size, config.brush_range.clone()).show_value(false))
        .changed()
    {
        commands.push(Command::SetBrushSize(brush_size));
    }

    ui.separator();

    let mut reflect = surface.reflection_enabled();
    if ui.toggle_value(&mut reflect, "Reflect").changed() {
        commands.push(Command::ToggleReflection);
    }

    let mut show_sectors = surface.sector_guides_shown();
    if ui.toggle_value(&mut show_sectors, "Show sectors").changed() {
        commands.push(Command::ToggleSectorGuides);
    }

    ui.horizontal(|ui| {
        ui.label("Brush colour:");
        let mut color = surface.brush_color();
        if color_picker::color_edit_button_srgba(ui, &mut color, Alpha::Opaque).changed() {
            commands.push(Command::SetBrushColor(color));
        }
    });

    ui.separator();

    let save = ui
        .add_enabled(!gallery.is_full(), egui::Button::new("Save"))
        .on_disabled_hover_text("The gallery is full");
    if save.clicked() {
        commands.push(Command::SaveToGallery);
    }
    ui.label(format!("Saved {}/{}", gallery.len(), gallery.capacity()));

    if let Some(status) = status {
        ui.separator();
        ui.colored_label(ui.visuals().warn_fg_color, status);
    }

    commands
}
