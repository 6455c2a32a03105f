use super::{CommandContext, CommandResult};
use egui::Color32;
use uuid::Uuid;

/// Actions issued by the control and gallery panels
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Change the number of rotational sectors
    SetSectorCount(u32),

    /// Change the width of strokes started from now on
    SetBrushSize(u32),

    /// Change the colour of strokes started from now on
    SetBrushColor(Color32),

    /// Toggle mirroring for strokes started from now on
    ToggleReflection,

    /// Show or hide the sector guide lines
    ToggleSectorGuides,

    /// Remove the most recent stroke
    Undo,

    /// Remove every stroke
    Clear,

    /// Export the drawing at the live canvas size and store it in the gallery
    SaveToGallery,

    /// Select or deselect a saved drawing
    ToggleGallerySelection(Uuid),

    /// Remove all selected drawings from the gallery
    DeleteSelectedFromGallery,
}

impl Command {
    pub fn execute(&self, ctx: &mut CommandContext<'_>) -> CommandResult {
        match self {
            Command::SetSectorCount(n) => ctx.surface.set_sector_count(*n)?,
            Command::SetBrushSize(n) => ctx.surface.set_brush_size(*n)?,
            Command::SetBrushColor(color) => ctx.surface.set_brush_color(*color),
            Command::ToggleReflection => ctx.surface.toggle_reflection_enabled(),
            Command::ToggleSectorGuides => ctx.surface.toggle_sector_guides(),
            Command::Undo => ctx.surface.undo(),
            Command::Clear => ctx.surface.clear(),
            Command::SaveToGallery => {
                let params = ctx.surface.params();
                let image = ctx.surface.export_bitmap(params.width(), params.height())?;
                ctx.gallery.add(&image)?;
            }
            Command::ToggleGallerySelection(id) => {
                if !ctx.gallery.toggle_selected(*id) {
                    log::warn!("No gallery entry with id {id}");
                }
            }
            Command::DeleteSelectedFromGallery => {
                ctx.gallery.delete_selected();
            }
        }
        Ok(())
    }
}
