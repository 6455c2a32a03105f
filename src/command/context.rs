use crate::gallery::Gallery;
use crate::surface::DrawingSurface;

/// What commands act on: the drawing surface and the gallery it saves into
#[derive(Debug)]
pub struct CommandContext<'a> {
    pub surface: &'a mut DrawingSurface,
    pub gallery: &'a mut Gallery,
}

impl<'a> CommandContext<'a> {
    pub fn new(surface: &'a mut DrawingSurface, gallery: &'a mut Gallery) -> Self {
        Self { surface, gallery }
    }
}
