//! Bleed mirroring
//!
//! Each bleed strip is filled with a reflected copy of the content so the
//! page looks like it continues past the trim line and bounces back.
//!
//! The reflection pivots differ by edge. Left and bottom strips flip around
//! the canvas origin and redraw the content offset by the margin. Right and
//! top strips flip around the far canvas edge and redraw the content offset
//! by `content dimension - margin`. Either way, the content pixel touching
//! the trim line ends up touching it from the outside.

use super::{Affine, Edge, MirrorRegion, PageGeometry, Point, Rect};

/// Plan the mirrored strips for a page, zero to four entries.
///
/// Edges with no bleed are skipped, as are strips that would have no
/// extent because the adjoining content dimension is not positive.
pub fn plan_mirrors(geometry: &PageGeometry) -> Vec<MirrorRegion> {
    Edge::ALL
        .into_iter()
        .filter_map(|edge| plan_edge(geometry, edge))
        .collect()
}

fn plan_edge(geometry: &PageGeometry, edge: Edge) -> Option<MirrorRegion> {
    let margins = &geometry.margins;
    let margin = margins.get(edge);
    if margin <= 0.0 {
        log::debug!("No bleed on {:?} edge, skipping mirror", edge);
        return None;
    }

    let content = geometry.content_on_canvas();
    let span = if edge.is_vertical() {
        content.height
    } else {
        content.width
    };
    if span <= 0.0 {
        log::debug!("Degenerate content along {:?} edge, skipping mirror", edge);
        return None;
    }

    let canvas = geometry.canvas;
    let region = match edge {
        Edge::Left => MirrorRegion {
            edge,
            clip: Rect::new(0.0, content.y, margin, content.height),
            reflection: Affine::flip_horizontal(0.0),
            placement: Point::new(-margin, content.y),
        },
        Edge::Right => MirrorRegion {
            edge,
            clip: Rect::new(content.right(), content.y, margin, content.height),
            reflection: Affine::flip_horizontal(canvas.width),
            placement: Point::new(-(content.width - margin), content.y),
        },
        Edge::Bottom => MirrorRegion {
            edge,
            clip: Rect::new(content.x, 0.0, content.width, margin),
            reflection: Affine::flip_vertical(0.0),
            placement: Point::new(content.x, -margin),
        },
        Edge::Top => MirrorRegion {
            edge,
            clip: Rect::new(content.x, content.top(), content.width, margin),
            reflection: Affine::flip_vertical(canvas.height),
            placement: Point::new(content.x, -(content.height - margin)),
        },
    };

    Some(region)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::resolve_geometry;
    use crate::types::BleedMargins;

    fn geometry(margins: BleedMargins) -> PageGeometry {
        resolve_geometry(&[Some(Rect::new(0.0, 0.0, 100.0, 50.0))], margins).unwrap()
    }

    #[test]
    fn test_right_edge_pivots_on_far_boundary() {
        let geometry = geometry(BleedMargins::uniform(10.0));
        let right = plan_mirrors(&geometry)
            .into_iter()
            .find(|m| m.edge == Edge::Right)
            .unwrap();

        assert_eq!(right.reflection.e, 120.0);
        assert_eq!(right.placement.x, -90.0);

        // The rightmost content column lands right next to the trim line
        let origin = Point::new(10.0, 10.0);
        let mapped = right.canvas_transform(origin).apply(Point::new(109.0, 30.0));
        assert!((mapped.x - 111.0).abs() < 1e-4);
        assert!((mapped.y - 30.0).abs() < 1e-4);
    }

    #[test]
    fn test_bottom_edge_pivots_on_origin() {
        let geometry = geometry(BleedMargins::uniform(10.0));
        let bottom = plan_mirrors(&geometry)
            .into_iter()
            .find(|m| m.edge == Edge::Bottom)
            .unwrap();

        assert_eq!(bottom.reflection.f, 0.0);
        assert_eq!(bottom.placement.y, -10.0);

        let mapped = bottom
            .canvas_transform(Point::new(10.0, 10.0))
            .apply(Point::new(40.0, 12.0));
        assert!((mapped.y - 8.0).abs() < 1e-4);
    }
}
