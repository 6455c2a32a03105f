use egui::{Color32, Pos2};
use std::sync::Arc;

use crate::point::Coordinate;

/// Brush settings frozen into a stroke when it starts
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    pub brush_width: u32,
    pub color: Color32,
    pub reflected: bool,
}

// Immutable stroke for sharing
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    points: Vec<Coordinate>,
    style: StrokeStyle,
}

// Stroke still being captured
#[derive(Debug, Clone)]
pub struct StrokeBuilder {
    points: Vec<Coordinate>,
    style: StrokeStyle,
}

// Define a reference-counted type alias for Stroke
pub type StrokeRef = Arc<Stroke>;

/// Borrowed view the renderer draws from, shared by committed and in-progress strokes
#[derive(Debug, Clone, Copy)]
pub struct StrokeView<'a> {
    pub points: &'a [Coordinate],
    pub style: StrokeStyle,
}

impl StrokeView<'_> {
    /// True when the stroke has no extent and must be drawn as a dot
    pub fn is_dot(&self) -> bool {
        match self.points.split_first() {
            Some((first, rest)) => rest.iter().all(|p| p.position() == first.position()),
            None => false,
        }
    }

    pub fn positions(&self) -> impl Iterator<Item = Pos2> + '_ {
        self.points.iter().map(Coordinate::position)
    }

    /// Mirrored points; empty unless the stroke is reflected
    pub fn mirrors(&self) -> impl Iterator<Item = Pos2> + '_ {
        self.points.iter().filter_map(Coordinate::mirror)
    }
}

impl Stroke {
    pub fn points(&self) -> &[Coordinate] {
        &self.points
    }

    pub fn style(&self) -> StrokeStyle {
        self.style
    }

    pub fn brush_width(&self) -> u32 {
        self.style.brush_width
    }

    pub fn color(&self) -> Color32 {
        self.style.color
    }

    pub fn is_reflected(&self) -> bool {
        self.style.reflected
    }

    pub fn view(&self) -> StrokeView<'_> {
        StrokeView {
            points: &self.points,
            style: self.style,
        }
    }
}

impl StrokeBuilder {
    pub fn new(style: StrokeStyle) -> Self {
        Self {
            points: Vec::new(),
            style,
        }
    }

    /// Append a centre-relative point, capturing its mirror if the stroke is reflected
    pub fn add_point(&mut self, x: f32, y: f32) {
        let coordinate = if self.style.reflected {
            Coordinate::reflected(x, y)
        } else {
            Coordinate::new(x, y)
        };
        self.points.push(coordinate);
    }

    pub fn points(&self) -> &[Coordinate] {
        &self.points
    }

    pub fn style(&self) -> StrokeStyle {
        self.style
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn view(&self) -> StrokeView<'_> {
        StrokeView {
            points: &self.points,
            style: self.style,
        }
    }

    /// Freeze into a committed stroke. Empty strokes yield `None`.
    pub fn finish(self) -> Option<StrokeRef> {
        if self.points.is_empty() {
            return None;
        }
        Some(Arc::new(Stroke {
            points: self.points,
            style: self.style,
        }))
    }
}
