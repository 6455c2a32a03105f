use digital_doilies::{DoilyConfig, DoilyError, DrawingSurface};

fn surface_with_drawing() -> DrawingSurface {
    let mut surface = DrawingSurface::new(&DoilyConfig::default(), 160, 120).unwrap();
    surface.set_sector_count(6).unwrap();
    surface.toggle_reflection_enabled();
    surface.on_pointer_down(90.0, 30.0);
    surface.on_pointer_move(100.0, 40.0);
    surface.on_pointer_move(95.0, 50.0);
    surface.on_pointer_up();
    surface
}

#[test]
fn test_export_is_deterministic() {
    let surface = surface_with_drawing();
    let first = surface.export_bitmap(160, 120).unwrap();
    let second = surface.export_bitmap(160, 120).unwrap();
    assert_eq!(first.as_raw(), second.as_raw());
}

#[test]
fn test_export_matches_live_frame() {
    let surface = surface_with_drawing();
    let exported = surface.export_bitmap(160, 120).unwrap();
    assert_eq!(exported.as_raw(), surface.frame().as_raw());
}

#[test]
fn test_export_at_other_size() {
    let surface = surface_with_drawing();
    let image = surface.export_bitmap(300, 40).unwrap();
    assert_eq!(image.dimensions(), (300, 40));
}

#[test]
fn test_export_leaves_out_stroke_in_progress() {
    let mut surface = surface_with_drawing();
    let before = surface.export_bitmap(160, 120).unwrap();

    surface.on_pointer_down(20.0, 20.0);
    surface.on_pointer_move(40.0, 30.0);
    let during = surface.export_bitmap(160, 120).unwrap();

    assert_eq!(before.as_raw(), during.as_raw());
    assert_ne!(during.as_raw(), surface.frame().as_raw());
}

#[test]
fn test_export_follows_guide_visibility() {
    let mut surface = DrawingSurface::new(&DoilyConfig::default(), 100, 100).unwrap();
    let with_guides = surface.export_bitmap(100, 100).unwrap();
    surface.toggle_sector_guides();
    let without_guides = surface.export_bitmap(100, 100).unwrap();

    assert_ne!(with_guides.as_raw(), without_guides.as_raw());
    assert!(without_guides.pixels().all(|p| p.0 == [0, 0, 0, 255]));
}

#[test]
fn test_export_rejects_zero_dimensions() {
    let surface = surface_with_drawing();
    for (w, h) in [(0, 10), (10, 0), (0, 0)] {
        assert!(matches!(
            surface.export_bitmap(w, h),
            Err(DoilyError::InvalidParameter { .. })
        ));
    }
}
