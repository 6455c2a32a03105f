use std::collections::HashMap;

use egui::{Context, TextureHandle, TextureId, TextureOptions};
use uuid::Uuid;

use crate::gallery::{Gallery, GalleryEntry};
use crate::raster;
use crate::surface::DrawingSurface;

/// Keeps GPU copies of the canvas frame and the gallery thumbnails in sync
/// with the images they are made from
#[derive(Default)]
pub struct TextureManager {
    /// Canvas texture and the surface revision it was uploaded from
    canvas: Option<(u64, TextureHandle)>,
    /// Thumbnail textures by (entry id, selected)
    thumbnails: HashMap<(Uuid, bool), TextureHandle>,
}

impl TextureManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Texture for the surface's current frame, re-uploaded only when the frame changed
    pub fn canvas_texture(&mut self, ctx: &Context, surface: &DrawingSurface) -> TextureId {
        let revision = surface.revision();
        match &mut self.canvas {
            Some((uploaded, handle)) => {
                if *uploaded != revision {
                    handle.set(raster::to_color_image(surface.frame()), TextureOptions::LINEAR);
                    *uploaded = revision;
                }
                handle.id()
            }
            None => {
                let handle = ctx.load_texture(
                    "doily_canvas",
                    raster::to_color_image(surface.frame()),
                    TextureOptions::LINEAR,
                );
                let id = handle.id();
                self.canvas = Some((revision, handle));
                id
            }
        }
    }

    /// Texture for the thumbnail an entry currently shows
    pub fn thumbnail_texture(&mut self, ctx: &Context, entry: &GalleryEntry) -> TextureId {
        let key = (entry.id(), entry.is_selected());
        self.thumbnails
            .entry(key)
            .or_insert_with(|| {
                let name = format!("gallery_{}_{}", entry.id(), entry.is_selected());
                ctx.load_texture(
                    name,
                    raster::to_color_image(entry.display_image()),
                    TextureOptions::LINEAR,
                )
            })
            .id()
    }

    /// Drop textures for entries no longer in the gallery
    pub fn retain_gallery(&mut self, gallery: &Gallery) {
        self.thumbnails.retain(|(id, _), _| gallery.get(*id).is_some());
    }

    /// Returns the number of thumbnail textures currently held
    pub fn thumbnail_count(&self) -> usize {
        self.thumbnails.len()
    }
}
