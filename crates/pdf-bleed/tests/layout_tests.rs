use pdf_bleed::layout::*;
use pdf_bleed::{BleedMargins, FinishingOptions, GrommetOptions, GrommetSpacingPolicy};

const EPS: f32 = 1e-3;

fn letter_geometry(margins: BleedMargins) -> PageGeometry {
    resolve_geometry(&[None, None, Some(Rect::new(0.0, 0.0, 612.0, 792.0))], margins).unwrap()
}

fn assert_close(actual: &[f32], expected: &[f32]) {
    assert_eq!(actual.len(), expected.len(), "{:?} vs {:?}", actual, expected);
    for (a, e) in actual.iter().zip(expected) {
        assert!((a - e).abs() < EPS, "{:?} vs {:?}", actual, expected);
    }
}

// =============================================================================
// Grommet placement
// =============================================================================

#[test]
fn test_grommet_scenario_distribute() {
    let positions = axis_positions(100.0, 30.0, 10.0, GrommetSpacingPolicy::Distribute);
    assert_close(&positions, &[10.0, 36.667, 63.333, 90.0]);
}

#[test]
fn test_grommet_scenario_fixed_step() {
    let positions = axis_positions(100.0, 30.0, 10.0, GrommetSpacingPolicy::FixedStep);
    assert_close(&positions, &[10.0, 40.0, 70.0]);
}

#[test]
fn test_distribute_properties() {
    let cases = [
        (100.0, 30.0, 10.0),
        (1728.0, 144.0, 36.0),
        (500.0, 7.5, 0.0),
        (333.3, 100.0, 50.0),
        (90.0, 1000.0, 5.0),
    ];

    for (distance, spacing, offset) in cases {
        let positions = axis_positions(distance, spacing, offset, GrommetSpacingPolicy::Distribute);
        assert!(positions.len() >= 2);
        assert!((positions[0] - offset).abs() < EPS);
        assert!((positions[positions.len() - 1] - (distance - offset)).abs() < EPS);

        let first_gap = positions[1] - positions[0];
        assert!(first_gap <= spacing + EPS);
        for pair in positions.windows(2) {
            assert!(((pair[1] - pair[0]) - first_gap).abs() < EPS);
        }
    }
}

#[test]
fn test_fixed_step_properties() {
    let cases = [
        (100.0, 30.0, 10.0),
        (1728.0, 144.0, 36.0),
        (500.0, 7.5, 0.0),
        (333.3, 100.0, 50.0),
    ];

    for (distance, spacing, offset) in cases {
        let positions = axis_positions(distance, spacing, offset, GrommetSpacingPolicy::FixedStep);
        assert!(!positions.is_empty());
        assert!((positions[0] - offset).abs() < EPS);
        for pair in positions.windows(2) {
            assert!(((pair[1] - pair[0]) - spacing).abs() < EPS);
        }
        let last = positions[positions.len() - 1];
        assert!(last <= distance - offset + EPS);
        // One more step would overshoot
        assert!(last + spacing > distance - offset + EPS);
    }
}

#[test]
fn test_fixed_step_hits_far_offset_when_divisible() {
    // 1728 - 2*36 = 1656 = 11.5 * 144: not divisible, last mark short of far offset
    let uneven = axis_positions(1728.0, 144.0, 36.0, GrommetSpacingPolicy::FixedStep);
    assert!((uneven[uneven.len() - 1] - 1620.0).abs() < EPS);

    // 1800 - 2*36 = 1728 = 12 * 144: the far offset gets a mark
    let even = axis_positions(1800.0, 144.0, 36.0, GrommetSpacingPolicy::FixedStep);
    assert_eq!(even.len(), 13);
    assert!((even[12] - 1764.0).abs() < EPS);
}

#[test]
fn test_non_positive_spacing_disables_grommets() {
    for policy in [GrommetSpacingPolicy::Distribute, GrommetSpacingPolicy::FixedStep] {
        for spacing in [0.0, -12.0] {
            let positions = plan_grommets(500.0, 300.0, spacing, 10.0, policy);
            assert!(positions.x.is_empty());
            assert!(positions.y.is_empty());
        }
    }
}

#[test]
fn test_offset_without_usable_span_disables_axis() {
    for policy in [GrommetSpacingPolicy::Distribute, GrommetSpacingPolicy::FixedStep] {
        // Exactly half the distance: no span left
        assert!(axis_positions(100.0, 10.0, 50.0, policy).is_empty());
        assert!(axis_positions(100.0, 10.0, 80.0, policy).is_empty());

        // Only the short axis is disabled
        let positions = plan_grommets(400.0, 60.0, 20.0, 30.0, policy);
        assert!(!positions.x.is_empty());
        assert!(positions.y.is_empty());
    }
}

#[test]
fn test_grommet_marks_stay_on_perimeter() {
    let geometry = letter_geometry(BleedMargins::uniform(18.0));
    let content = geometry.content_on_canvas();
    let offset = 36.0;
    let positions = plan_grommets(612.0, 792.0, 144.0, offset, GrommetSpacingPolicy::Distribute);
    let marks = grommet_marks(&geometry, &positions, offset);

    assert_eq!(marks.len(), 2 * (positions.x.len() + positions.y.len()));
    for mark in &marks {
        let c = mark.center;
        match mark.edge {
            Edge::Top => assert!((c.y - (content.top() - offset)).abs() < EPS),
            Edge::Bottom => assert!((c.y - (content.y + offset)).abs() < EPS),
            Edge::Left => assert!((c.x - (content.x + offset)).abs() < EPS),
            Edge::Right => assert!((c.x - (content.right() - offset)).abs() < EPS),
        }
    }

    // The first X position sits at the inset corner
    assert!((marks[0].center.x - (content.x + offset)).abs() < EPS);
}

// =============================================================================
// Geometry and mirroring
// =============================================================================

#[test]
fn test_canvas_scenario_all_edges() {
    let geometry = letter_geometry(BleedMargins::new(72.0, 72.0, 36.0, 36.0));
    assert_eq!(geometry.canvas.width, 756.0);
    assert_eq!(geometry.canvas.height, 864.0);

    let mirrors = plan_mirrors(&geometry);
    assert_eq!(mirrors.len(), 4);

    let crop = plan_crop_marks(&geometry, 1.0);
    assert_eq!(crop.len(), 8);
}

#[test]
fn test_no_usable_box() {
    let candidates = [Some(Rect::new(0.0, 0.0, 0.0, 100.0)), None, None];
    assert!(resolve_geometry(&candidates, BleedMargins::uniform(9.0)).is_none());
    assert!(resolve_geometry(&[], BleedMargins::uniform(9.0)).is_none());
}

#[test]
fn test_canvas_never_smaller_than_content() {
    let geometry = letter_geometry(BleedMargins::new(-10.0, -1.0, -0.5, -100.0));
    assert_eq!(geometry.canvas.width, 612.0);
    assert_eq!(geometry.canvas.height, 792.0);
    assert!(plan_mirrors(&geometry).is_empty());
    assert!(plan_crop_marks(&geometry, 1.0).is_empty());
}

#[test]
fn test_mirror_is_its_own_inverse() {
    let geometry = letter_geometry(BleedMargins::new(72.0, 36.0, 18.0, 9.0));
    let content = geometry.content_on_canvas();
    let origin = Point::new(content.x, content.y);

    let boundary = [
        Point::new(content.x, content.y + 100.0),
        Point::new(content.right(), content.y + 400.0),
        Point::new(content.x + 300.0, content.top()),
        Point::new(content.x + 10.0, content.y),
        Point::new(content.right(), content.top()),
    ];

    for region in plan_mirrors(&geometry) {
        let transform = region.canvas_transform(origin);
        for p in boundary {
            let back = transform.apply(transform.apply(p));
            assert!((back.x - p.x).abs() < EPS, "{:?}: {:?} -> {:?}", region.edge, p, back);
            assert!((back.y - p.y).abs() < EPS, "{:?}: {:?} -> {:?}", region.edge, p, back);
        }
    }
}

#[test]
fn test_mirror_is_continuous_across_trim_line() {
    let geometry = letter_geometry(BleedMargins::new(72.0, 36.0, 18.0, 9.0));
    let content = geometry.content_on_canvas();
    let origin = Point::new(content.x, content.y);

    for region in plan_mirrors(&geometry) {
        let transform = region.canvas_transform(origin);
        // A point just inside the trim line maps to just outside it
        let (inside, outside) = match region.edge {
            Edge::Left => (
                Point::new(content.x + 1.0, content.y + 5.0),
                Point::new(content.x - 1.0, content.y + 5.0),
            ),
            Edge::Right => (
                Point::new(content.right() - 1.0, content.y + 5.0),
                Point::new(content.right() + 1.0, content.y + 5.0),
            ),
            Edge::Bottom => (
                Point::new(content.x + 5.0, content.y + 1.0),
                Point::new(content.x + 5.0, content.y - 1.0),
            ),
            Edge::Top => (
                Point::new(content.x + 5.0, content.top() - 1.0),
                Point::new(content.x + 5.0, content.top() + 1.0),
            ),
        };
        let mapped = transform.apply(inside);
        assert!((mapped.x - outside.x).abs() < EPS, "{:?}", region.edge);
        assert!((mapped.y - outside.y).abs() < EPS, "{:?}", region.edge);
    }
}

#[test]
fn test_mirror_clips_stay_outside_content() {
    let geometry = letter_geometry(BleedMargins::new(72.0, 36.0, 18.0, 9.0));
    let content = geometry.content_on_canvas();
    for region in plan_mirrors(&geometry) {
        assert!(!region.clip.overlaps(&content), "{:?}", region.edge);
        let margin = geometry.margins.get(region.edge);
        if region.edge.is_vertical() {
            assert_eq!(region.clip.width, margin);
            assert_eq!(region.clip.height, content.height);
        } else {
            assert_eq!(region.clip.width, content.width);
            assert_eq!(region.clip.height, margin);
        }
    }
}

#[test]
fn test_zero_left_bleed_drops_left_edge() {
    let geometry = letter_geometry(BleedMargins::new(0.0, 72.0, 36.0, 36.0));

    let mirrors = plan_mirrors(&geometry);
    assert_eq!(mirrors.len(), 3);
    assert!(mirrors.iter().all(|m| m.edge != Edge::Left));

    let crop = plan_crop_marks(&geometry, 1.0);
    assert_eq!(crop.len(), 6);
    assert!(crop.iter().all(|s| s.edge != Edge::Left));
}

#[test]
fn test_degenerate_height_skips_side_mirrors() {
    let candidates = [Some(Rect::new(0.0, 0.0, 200.0, 0.0))];
    let geometry = resolve_geometry(&candidates, BleedMargins::uniform(10.0)).unwrap();
    let edges: Vec<Edge> = plan_mirrors(&geometry).iter().map(|m| m.edge).collect();
    assert_eq!(edges, vec![Edge::Top, Edge::Bottom]);
}

// =============================================================================
// Crop marks and scaling
// =============================================================================

#[test]
fn test_crop_marks_clamped_to_bleed() {
    let geometry = letter_geometry(BleedMargins::new(72.0, 5.0, 36.0, 2.0));
    for scale in [1.0, 0.5, 4.0] {
        for segment in plan_crop_marks(&geometry, scale) {
            let margin = geometry.margins.get(segment.edge);
            let expected = (pdf_bleed::constants::CROP_MARK_LENGTH * scale).min(margin);
            assert!((segment.length() - expected).abs() < EPS);
            assert!(segment.length() <= margin + EPS);
        }
    }
}

#[test]
fn test_crop_marks_start_at_corners_and_point_outward() {
    let geometry = letter_geometry(BleedMargins::uniform(36.0));
    let content = geometry.content_on_canvas();
    for segment in plan_crop_marks(&geometry, 1.0) {
        let s = segment.start;
        assert!(s.x == content.x || s.x == content.right());
        assert!(s.y == content.y || s.y == content.top());
        match segment.edge {
            Edge::Left => assert!(segment.end.x < s.x && segment.end.y == s.y),
            Edge::Right => assert!(segment.end.x > s.x && segment.end.y == s.y),
            Edge::Top => assert!(segment.end.y > s.y && segment.end.x == s.x),
            Edge::Bottom => assert!(segment.end.y < s.y && segment.end.x == s.x),
        }
    }
}

#[test]
fn test_plan_page_scales_grommet_inputs() {
    let options = FinishingOptions {
        margins: BleedMargins::uniform(18.0),
        grommets: Some(GrommetOptions {
            spacing_in: 2.0,
            offset_in: 0.5,
            policy: GrommetSpacingPolicy::FixedStep,
        }),
        ..Default::default()
    };
    let candidates = [Some(Rect::new(0.0, 0.0, 612.0, 792.0))];

    let plan = plan_page(&candidates, &options, 1.0).unwrap();
    let bottom: Vec<f32> = plan
        .grommets
        .iter()
        .filter(|m| m.edge == Edge::Bottom)
        .map(|m| m.center.x - 18.0)
        .collect();
    // 36pt inset, then every 144pt up to 612 - 36
    assert_close(&bottom, &[36.0, 180.0, 324.0, 468.0]);

    // Half the unit scale halves the page-unit spacing and inset
    let plan = plan_page(&candidates, &options, 0.5).unwrap();
    let first_bottom = plan.grommets.iter().find(|m| m.edge == Edge::Bottom).unwrap();
    assert!((first_bottom.center.y - (18.0 + 18.0)).abs() < EPS);
}

#[test]
fn test_plan_page_honors_feature_toggles() {
    let options = FinishingOptions {
        margins: BleedMargins::uniform(18.0),
        mirror_bleed: false,
        crop_marks: false,
        ..Default::default()
    };
    let plan = plan_page(&[Some(Rect::new(0.0, 0.0, 100.0, 100.0))], &options, 1.0).unwrap();
    assert!(plan.mirrors.is_empty());
    assert!(plan.crop_marks.is_empty());
    assert!(plan.grommets.is_empty());
    assert_eq!(plan.geometry.canvas.width, 136.0);
}

#[test]
fn test_tiny_spacing_skips_axis() {
    for policy in [GrommetSpacingPolicy::Distribute, GrommetSpacingPolicy::FixedStep] {
        assert!(axis_positions(100.0, 1e-30, 10.0, policy).is_empty());
        assert!(axis_positions(1728.0, 1e-7, 36.0, policy).is_empty());
    }
}

#[test]
fn test_spacing_at_mark_limit_still_plans() {
    // 9999 intervals fit under the limit: 10000 positions
    let positions = axis_positions(9999.0 + 20.0, 1.0, 10.0, GrommetSpacingPolicy::Distribute);
    assert_eq!(positions.len(), 10_000);

    let positions = axis_positions(9999.0 + 20.0, 1.0, 10.0, GrommetSpacingPolicy::FixedStep);
    assert_eq!(positions.len(), 10_000);
}

#[test]
fn test_plan_page_with_tiny_spacing_keeps_other_marks() {
    let options = FinishingOptions {
        margins: BleedMargins::uniform(18.0),
        grommets: Some(GrommetOptions::every(1e-30)),
        ..Default::default()
    };
    let plan = plan_page(&[Some(Rect::new(0.0, 0.0, 612.0, 792.0))], &options, 1.0).unwrap();
    assert!(plan.grommets.is_empty());
    assert_eq!(plan.mirrors.len(), 4);
    assert_eq!(plan.crop_marks.len(), 8);
}
