use egui::Pos2;

/// A captured point, relative to the canvas centre.
///
/// When the owning stroke is reflected the mirror image is computed once here
/// and never touched again.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    position: Pos2,
    mirror: Option<Pos2>,
}

impl Coordinate {
    /// A point without a reflection
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            position: Pos2::new(x, y),
            mirror: None,
        }
    }

    /// A point paired with its reflection about the vertical centre axis
    pub fn reflected(x: f32, y: f32) -> Self {
        Self {
            position: Pos2::new(x, y),
            mirror: Some(Pos2::new(-x, y)),
        }
    }

    pub fn position(&self) -> Pos2 {
        self.position
    }

    pub fn mirror(&self) -> Option<Pos2> {
        self.mirror
    }
}
