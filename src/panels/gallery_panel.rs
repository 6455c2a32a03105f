use egui::load::SizedTexture;

use crate::command::Command;
use crate::gallery::Gallery;
use crate::texture_manager::TextureManager;

/// Saved drawings as clickable thumbnails with a delete button underneath
pub fn gallery_panel(
    ui: &mut egui::Ui,
    gallery: &Gallery,
    textures: &mut TextureManager,
) -> Vec<Command> {
    let mut commands = Vec::new();

    ui.with_layout(egui::Layout::bottom_up(egui::Align::Center), |ui| {
        let any_selected = gallery.entries().iter().any(|e| e.is_selected());
        if ui
            .add_enabled(any_selected, egui::Button::new("Delete"))
            .clicked()
        {
            commands.push(Command::DeleteSelectedFromGallery);
        }
        ui.separator();

        ui.with_layout(egui::Layout::top_down(egui::Align::Center), |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    for entry in gallery.entries() {
                        let image = entry.display_image();
                        let size = egui::vec2(image.width() as f32, image.height() as f32);
                        let texture = textures.thumbnail_texture(ui.ctx(), entry);
                        let button = egui::ImageButton::new(egui::Image::from_texture(
                            SizedTexture::new(texture, size),
                        ))
                        .selected(entry.is_selected());

                        if ui.add(button).clicked() {
                            commands.push(Command::ToggleGallerySelection(entry.id()));
                        }
                    }
                });
        });
    });

    commands
}
