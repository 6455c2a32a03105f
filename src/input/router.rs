use crate::surface::DrawingSurface;

use super::InputEvent;

/// Forward a canvas pointer event to the drawing surface
pub fn route_event(event: &InputEvent, surface: &mut DrawingSurface) {
    match event {
        InputEvent::PointerDown { location } => {
            surface.on_pointer_down(location.position.x, location.position.y);
        }
        InputEvent::PointerMove { location } => {
            surface.on_pointer_move(location.position.x, location.position.y);
        }
        InputEvent::PointerUp => surface.on_pointer_up(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DoilyConfig;
    use crate::input::InputLocation;
    use egui::Pos2;

    fn at(x: f32, y: f32) -> InputLocation {
        InputLocation {
            position: Pos2::new(x, y),
            is_in_canvas: true,
        }
    }

    #[test]
    fn test_drag_sequence_commits_stroke() {
        let mut surface = DrawingSurface::new(&DoilyConfig::default(), 100, 100).unwrap();
        for event in [
            InputEvent::PointerDown { location: at(50.0, 0.0) },
            InputEvent::PointerMove { location: at(50.0, 10.0) },
            InputEvent::PointerMove { location: at(55.0, 10.0) },
            InputEvent::PointerUp,
        ] {
            route_event(&event, &mut surface);
        }

        assert_eq!(surface.history().len(), 1);
        let points = surface.history().strokes()[0].points();
        assert_eq!(points.len(), 3);
        assert_eq!(points[0].position(), Pos2::new(0.0, -50.0));
    }
}
