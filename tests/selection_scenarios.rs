//! End-to-end selection scenarios: parse an attribute string, select
//! against a viewport, check the winner.

use srcset_shim::{parse_srcset, select_best, Viewport};

fn viewport(width: u32, height: u32, pixel_ratio: f32) -> Viewport {
    Viewport::new(width, height, pixel_ratio).expect("valid viewport")
}

fn winner(attr: &str, vp: &Viewport) -> Option<String> {
    select_best(parse_srcset(attr), vp).map(|c| c.source)
}

#[test]
fn smallest_width_at_or_above_viewport_wins() {
    let vp = viewport(600, 400, 1.0);
    assert_eq!(
        winner("a.jpg 320w, b.jpg 640w, c.jpg 1280w", &vp).as_deref(),
        Some("b.jpg")
    );
}

#[test]
fn all_too_small_recovers_with_greatest_width() {
    let vp = viewport(1000, 400, 1.0);
    assert_eq!(winner("a.jpg 320w, b.jpg 640w", &vp).as_deref(), Some("b.jpg"));
}

#[test]
fn density_descriptor_matches_retina_viewport() {
    let vp = viewport(800, 600, 2.0);
    assert_eq!(winner("a.jpg 1x, b.jpg 2x", &vp).as_deref(), Some("b.jpg"));
}

#[test]
fn descriptorless_candidate_survives_all_passes() {
    let vp = viewport(1920, 1080, 3.0);
    assert_eq!(winner("a.jpg", &vp).as_deref(), Some("a.jpg"));
}

#[test]
fn empty_attribute_selects_nothing() {
    let vp = viewport(800, 600, 1.0);
    assert_eq!(winner("", &vp), None);
}

#[test]
fn selection_is_total_on_non_empty_sets() {
    let attrs = [
        "a.jpg 320w, b.jpg 640w, c.jpg 1280w",
        "a.jpg 1x, b.jpg 2x, c.jpg 3x",
        "a.jpg 100h, b.jpg 400h",
        "a.jpg, b.jpg 10w 10h 0.5x",
        "a.jpg 320w 2x, b.jpg 640h",
    ];
    let viewports = [
        viewport(1, 1, 1.0),
        viewport(320, 240, 1.0),
        viewport(1366, 768, 1.5),
        viewport(3840, 2160, 2.0),
        viewport(10_000, 10_000, 4.0),
    ];
    for attr in &attrs {
        for vp in &viewports {
            assert!(
                winner(attr, vp).is_some(),
                "no winner for {:?} at {}x{} ratio {}",
                attr,
                vp.width,
                vp.height,
                vp.pixel_ratio
            );
        }
    }
}

#[test]
fn repeated_selection_returns_the_same_winner() {
    let attr = "a.jpg 320w 1x, b.jpg 640w 1.5x, c.jpg 1280w 2x";
    let vp = viewport(700, 500, 1.5);
    let first = winner(attr, &vp);
    for _ in 0..10 {
        assert_eq!(winner(attr, &vp), first);
    }
}

#[test]
fn mixed_dimension_descriptors_narrow_consistently() {
    // b.jpg satisfies both the width and height bounds; a.jpg fails the
    // height bound and c.jpg is larger than needed.
    let attr = "a.jpg 640w 300h, b.jpg 640w 480h, c.jpg 1280w 960h";
    let vp = viewport(600, 400, 1.0);
    assert_eq!(winner(attr, &vp).as_deref(), Some("b.jpg"));
}

#[test]
fn entries_with_missing_sources_contribute_nothing() {
    let vp = viewport(800, 600, 1.0);
    // Blank entries between commas are dropped; the remaining one wins
    assert_eq!(winner(" , b.jpg 640w, ", &vp).as_deref(), Some("b.jpg"));
}
