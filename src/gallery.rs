use egui::{Color32, Pos2};
use image::RgbaImage;
use image::imageops::{self, FilterType};
use uuid::Uuid;

use crate::canvas::SectorTransform;
use crate::config::DoilyConfig;
use crate::error::{DoilyError, DoilyResult};
use crate::raster::{self, PixmapTarget};
use crate::renderer::{DrawTarget, Pen};

const SELECTION_COLOR: Color32 = Color32::RED;

/// A saved drawing, scaled for the side panel
#[derive(Debug, Clone)]
pub struct GalleryEntry {
    id: Uuid,
    thumbnail: RgbaImage,
    /// Thumbnail with a cross drawn over it, shown while selected
    selected_thumbnail: RgbaImage,
    selected: bool,
}

impl GalleryEntry {
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn thumbnail(&self) -> &RgbaImage {
        &self.thumbnail
    }

    pub fn selected_thumbnail(&self) -> &RgbaImage {
        &self.selected_thumbnail
    }

    /// The image to show for the current selection state
    pub fn display_image(&self) -> &RgbaImage {
        if self.selected {
            &self.selected_thumbnail
        } else {
            &self.thumbnail
        }
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }
}

/// Bounded, in-memory list of saved drawings
#[derive(Debug, Clone)]
pub struct Gallery {
    entries: Vec<GalleryEntry>,
    capacity: usize,
    thumbnail_width: u32,
    cross_width: f32,
}

impl Gallery {
    pub fn new(config: &DoilyConfig) -> Self {
        Self {
            entries: Vec::new(),
            capacity: config.gallery_capacity,
            thumbnail_width: config.thumbnail_width(),
            cross_width: config.selection_stroke_width,
        }
    }

    /// Store a drawing, returning the id of the new entry.
    ///
    /// Fails once the gallery holds `capacity` drawings.
    pub fn add(&mut self, image: &RgbaImage) -> DoilyResult<Uuid> {
        if self.is_full() {
            log::warn!("Gallery full, not saving drawing");
            return Err(DoilyError::GalleryFull {
                capacity: self.capacity,
            });
        }
        if image.width() == 0 || image.height() == 0 {
            return Err(DoilyError::invalid("image", "cannot save an empty bitmap"));
        }

        let width = self.thumbnail_width;
        let height = (u64::from(width) * u64::from(image.height()) / u64::from(image.width()))
            .clamp(1, u64::from(u32::MAX)) as u32;
        raster::check_raster_size(width, height)?;
        let thumbnail = imageops::resize(image, width, height, FilterType::Triangle);
        let selected_thumbnail = self.draw_cross(&thumbnail)?;

        let id = Uuid::new_v4();
        self.entries.push(GalleryEntry {
            id,
            thumbnail,
            selected_thumbnail,
            selected: false,
        });
        log::info!(
            "Saved drawing {id} to gallery ({}/{})",
            self.entries.len(),
            self.capacity
        );
        Ok(id)
    }

    fn draw_cross(&self, thumbnail: &RgbaImage) -> DoilyResult<RgbaImage> {
        let mut target = PixmapTarget::from_image(thumbnail)?;
        let (w, h) = (target.width() as f32, target.height() as f32);
        let pen = Pen {
            width: self.cross_width,
            color: SELECTION_COLOR,
        };
        let identity = SectorTransform {
            angle: 0.0,
            origin: Pos2::ZERO,
        };
        target.stroke_polyline(&[Pos2::new(0.0, 0.0), Pos2::new(w, h)], pen, identity);
        target.stroke_polyline(&[Pos2::new(w, 0.0), Pos2::new(0.0, h)], pen, identity);
        target.into_image()
    }

    pub fn entries(&self) -> &[GalleryEntry] {
        &self.entries
    }

    pub fn get(&self, id: Uuid) -> Option<&GalleryEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Flip the selection of an entry. Returns false for unknown ids.
    pub fn toggle_selected(&mut self, id: Uuid) -> bool {
        match self.entries.iter_mut().find(|e| e.id == id) {
            Some(entry) => {
                entry.selected = !entry.selected;
                true
            }
            None => false,
        }
    }

    pub fn is_selected(&self, id: Uuid) -> bool {
        self.get(id).is_some_and(GalleryEntry::is_selected)
    }

    /// Remove every selected entry, returning how many were removed
    pub fn delete_selected(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|e| !e.selected);
        let removed = before - self.entries.len();
        if removed > 0 {
            log::info!("Deleted {removed} drawings from gallery");
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
