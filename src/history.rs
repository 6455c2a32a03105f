use crate::stroke::StrokeRef;

/// Committed strokes, oldest at the bottom
#[derive(Debug, Default, Clone)]
pub struct History {
    strokes: Vec<StrokeRef>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, stroke: StrokeRef) {
        self.strokes.push(stroke);
    }

    pub fn strokes(&self) -> &[StrokeRef] {
        &self.strokes
    }

    /// Remove the most recent stroke, if any
    pub fn pop(&mut self) -> Option<StrokeRef> {
        self.strokes.pop()
    }

    pub fn clear(&mut self) {
        self.strokes.clear();
    }

    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stroke::{StrokeBuilder, StrokeStyle};
    use egui::Color32;

    fn stroke(x: f32) -> StrokeRef {
        let mut builder = StrokeBuilder::new(StrokeStyle {
            brush_width: 2,
            color: Color32::RED,
            reflected: false,
        });
        builder.add_point(x, 0.0);
        builder.finish().unwrap()
    }

    #[test]
    fn test_pop_returns_most_recent() {
        let mut history = History::new();
        history.push(stroke(1.0));
        history.push(stroke(2.0));

        let top = history.pop().unwrap();
        assert_eq!(top.points()[0].position().x, 2.0);
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_pop_on_empty_is_none() {
        let mut history = History::new();
        assert!(history.pop().is_none());
        assert!(history.is_empty());
    }
}
