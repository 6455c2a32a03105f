use egui::{Context, LayerId, Pos2, Rect};

mod router;
pub use router::route_event;

/// Where an input event happened, relative to the canvas' top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputLocation {
    /// Canvas-local position in physical pixels
    pub position: Pos2,
    /// Whether this position is within the canvas bounds
    pub is_in_canvas: bool,
}

/// Pointer activity on the drawing canvas
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Primary button pressed inside the canvas
    PointerDown { location: InputLocation },
    /// Pointer moved while a press that began in the canvas is held
    PointerMove { location: InputLocation },
    /// Primary button released after a canvas press
    PointerUp,
}

/// Handles converting raw egui input into canvas pointer events
pub struct InputHandler {
    last_pointer_pos: Option<Pos2>,
    canvas_rect: Rect,
    /// Layer the canvas is painted on; presses over any other layer are not ours
    canvas_layer: LayerId,
    /// Physical pixels per egui point
    pixels_per_point: f32,
    dragging: bool,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new(Rect::NOTHING)
    }
}

impl InputHandler {
    pub fn new(canvas_rect: Rect) -> Self {
        Self {
            last_pointer_pos: None,
            canvas_rect,
            canvas_layer: LayerId::background(),
            pixels_per_point: 1.0,
            dragging: false,
        }
    }

    /// Update the canvas rectangle (e.g. if window is resized)
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    pub fn set_canvas_layer(&mut self, layer: LayerId) {
        self.canvas_layer = layer;
    }

    pub fn set_pixels_per_point(&mut self, pixels_per_point: f32) {
        self.pixels_per_point = pixels_per_point;
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Creates an InputLocation from a screen position
    fn make_location(&self, pos: Pos2) -> InputLocation {
        InputLocation {
            position: ((pos - self.canvas_rect.min) * self.pixels_per_point).to_pos2(),
            is_in_canvas: self.canvas_rect.contains(pos),
        }
    }

    /// True when nothing is layered above the canvas at `pos` (popups, windows)
    fn canvas_on_top(&self, ctx: &Context, pos: Pos2) -> bool {
        ctx.layer_id_at(pos)
            .is_none_or(|layer| layer == self.canvas_layer)
    }

    /// Canvas-local hover position when the pointer is over the canvas
    pub fn hover_location(&self, ctx: &Context) -> Option<InputLocation> {
        ctx.input(|input| input.pointer.hover_pos())
            .filter(|pos| self.canvas_on_top(ctx, *pos))
            .map(|pos| self.make_location(pos))
            .filter(|location| location.is_in_canvas)
    }

    /// Process raw egui input and generate our InputEvents
    pub fn process_input(&mut self, ctx: &Context) -> Vec<InputEvent> {
        let mut events = Vec::new();
        let (pos, pressed, released, down) = ctx.input(|input| {
            (
                input.pointer.interact_pos().or(input.pointer.hover_pos()),
                input.pointer.primary_pressed(),
                input.pointer.primary_released(),
                input.pointer.primary_down(),
            )
        });

        if pressed {
            if let Some(pos) = pos {
                let location = self.make_location(pos);
                if location.is_in_canvas && self.canvas_on_top(ctx, pos) {
                    events.push(InputEvent::PointerDown { location });
                    self.dragging = true;
                    self.last_pointer_pos = Some(pos);
                }
            }
        }

        if self.dragging {
            // Drags keep going outside the canvas until released
            if let Some(pos) = pos {
                if Some(pos) != self.last_pointer_pos {
                    events.push(InputEvent::PointerMove {
                        location: self.make_location(pos),
                    });
                    self.last_pointer_pos = Some(pos);
                }
            }

            if released || !down {
                events.push(InputEvent::PointerUp);
                self.dragging = false;
                self.last_pointer_pos = None;
            }
        }

        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{Event, Modifiers, PointerButton, RawInput, vec2};

    fn canvas_handler() -> InputHandler {
        InputHandler::new(Rect::from_min_size(Pos2::new(100.0, 0.0), vec2(300.0, 300.0)))
    }

    fn moved(x: f32, y: f32) -> Event {
        Event::PointerMoved(Pos2::new(x, y))
    }

    fn button(x: f32, y: f32, pressed: bool) -> Event {
        Event::PointerButton {
            pos: Pos2::new(x, y),
            button: PointerButton::Primary,
            pressed,
            modifiers: Modifiers::default(),
        }
    }

    /// Run one egui frame: lay out `show`, then let the handler read the input
    fn run_frame(
        ctx: &Context,
        handler: &mut InputHandler,
        events: Vec<Event>,
        show: impl Fn(&Context),
    ) -> Vec<InputEvent> {
        let raw = RawInput {
            screen_rect: Some(Rect::from_min_size(Pos2::ZERO, vec2(800.0, 600.0))),
            events,
            ..Default::default()
        };
        let mut produced = Vec::new();
        let _ = ctx.run(raw, |ctx| {
            show(ctx);
            produced = handler.process_input(ctx);
        });
        produced
    }

    fn no_overlay(_ctx: &Context) {}

    fn popup(ctx: &Context) {
        egui::Area::new(egui::Id::new("colour_popup"))
            .order(egui::Order::Foreground)
            .fixed_pos(Pos2::new(200.0, 100.0))
            .show(ctx, |ui| {
                ui.set_min_size(vec2(200.0, 200.0));
            });
    }

    fn down_at(x: f32, y: f32) -> InputEvent {
        InputEvent::PointerDown {
            location: InputLocation {
                position: Pos2::new(x, y),
                is_in_canvas: true,
            },
        }
    }

    #[test]
    fn test_location_is_canvas_local() {
        let handler = InputHandler::new(Rect::from_min_size(
            Pos2::new(100.0, 50.0),
            egui::vec2(200.0, 200.0),
        ));
        let location = handler.make_location(Pos2::new(150.0, 60.0));
        assert_eq!(location.position, Pos2::new(50.0, 10.0));
        assert!(location.is_in_canvas);

        let outside = handler.make_location(Pos2::new(10.0, 10.0));
        assert!(!outside.is_in_canvas);
    }

    #[test]
    fn test_location_scaled_to_physical_pixels() {
        let mut handler = InputHandler::new(Rect::from_min_size(
            Pos2::new(100.0, 50.0),
            egui::vec2(200.0, 200.0),
        ));
        handler.set_pixels_per_point(2.0);
        let location = handler.make_location(Pos2::new(150.0, 60.0));
        assert_eq!(location.position, Pos2::new(100.0, 20.0));
    }

    #[test]
    fn test_press_outside_canvas_ignored() {
        let ctx = Context::default();
        let mut handler = canvas_handler();

        let events = run_frame(&ctx, &mut handler, vec![moved(50.0, 50.0), button(50.0, 50.0, true)], no_overlay);
        assert!(events.is_empty());
        assert!(!handler.is_dragging());

        let events = run_frame(&ctx, &mut handler, vec![button(50.0, 50.0, false)], no_overlay);
        assert!(events.is_empty());
    }

    #[test]
    fn test_drag_continues_outside_canvas_until_release() {
        let ctx = Context::default();
        let mut handler = canvas_handler();

        let events = run_frame(&ctx, &mut handler, vec![moved(150.0, 50.0), button(150.0, 50.0, true)], no_overlay);
        assert_eq!(events, vec![down_at(50.0, 50.0)]);
        assert!(handler.is_dragging());

        let events = run_frame(&ctx, &mut handler, vec![moved(500.0, 400.0)], no_overlay);
        assert_eq!(
            events,
            vec![InputEvent::PointerMove {
                location: InputLocation {
                    position: Pos2::new(400.0, 400.0),
                    is_in_canvas: false,
                },
            }]
        );

        let events = run_frame(&ctx, &mut handler, vec![button(500.0, 400.0, false)], no_overlay);
        assert_eq!(events, vec![InputEvent::PointerUp]);
        assert!(!handler.is_dragging());
    }

    #[test]
    fn test_unchanged_position_sends_no_move() {
        let ctx = Context::default();
        let mut handler = canvas_handler();

        run_frame(&ctx, &mut handler, vec![moved(150.0, 50.0), button(150.0, 50.0, true)], no_overlay);
        let events = run_frame(&ctx, &mut handler, vec![], no_overlay);
        assert!(events.is_empty());
        assert!(handler.is_dragging());
    }

    #[test]
    fn test_missed_release_still_ends_drag() {
        let ctx = Context::default();
        let mut handler = canvas_handler();

        run_frame(&ctx, &mut handler, vec![moved(150.0, 50.0), button(150.0, 50.0, true)], no_overlay);
        // Release arrives on a frame where the canvas did not read input
        let _ = ctx.run(
            RawInput {
                events: vec![button(150.0, 50.0, false)],
                ..Default::default()
            },
            |_| {},
        );

        let events = run_frame(&ctx, &mut handler, vec![], no_overlay);
        assert_eq!(events, vec![InputEvent::PointerUp]);
        assert!(!handler.is_dragging());
    }

    #[test]
    fn test_press_on_overlapping_popup_ignored() {
        let ctx = Context::default();
        let mut handler = canvas_handler();
        for _ in 0..2 {
            run_frame(&ctx, &mut handler, vec![], popup);
        }

        let events = run_frame(&ctx, &mut handler, vec![moved(250.0, 150.0), button(250.0, 150.0, true)], popup);
        assert!(events.is_empty());
        assert!(!handler.is_dragging());
        assert!(handler.hover_location(&ctx).is_none());

        let events = run_frame(&ctx, &mut handler, vec![button(250.0, 150.0, false)], popup);
        assert!(events.is_empty());

        // Same canvas, beside the popup
        let events = run_frame(&ctx, &mut handler, vec![moved(150.0, 250.0), button(150.0, 250.0, true)], popup);
        assert_eq!(events, vec![down_at(50.0, 250.0)]);
    }
}
