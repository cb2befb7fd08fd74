//! Scene composition: one traversal, filled faces, then outer outlines

use std::collections::BTreeMap;

use serde::Serialize;

use super::canvas::Canvas;
use super::geometry::cube;
use crate::config::RenderConfig;
use crate::domain::{Point2, ShapeColor};
use crate::fractal::{EdgeLedger, generate};

/// Counters describing a finished render
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SceneStats {
    pub depth: u32,
    pub leaves: usize,
    /// Edge records made during traversal (12 per leaf)
    pub raw_edges: usize,
    pub unique_edges: usize,
    /// Edges drawn as outlines
    pub outer_edges: usize,
    /// Recorded multiplicity -> number of distinct edges
    pub multiplicity: BTreeMap<u32, usize>,
}

/// Draw the fractal described by `config` onto `canvas`
///
/// Every leaf is filled as soon as it is reached. Outlines need the full
/// ledger, so they are stroked only after the traversal completes.
pub fn render_scene(config: &RenderConfig, canvas: &mut impl Canvas) -> SceneStats {
    let view = config.view();
    let mut ledger = EdgeLedger::new(config.edge_quantization_precision);
    let mut leaves = 0usize;

    generate(config.root(), config.recursion_depth, &mut |leaf| {
        let corners = view.cube_corners(&leaf);
        for face in cube::FACES {
            let quad: [Point2; 4] = face.map(|i| corners[i]);
            canvas.fill_polygon(&quad, ShapeColor::LIGHT_BLUE);
        }
        ledger.record_cube(&leaf);
        leaves += 1;
    });
    log::debug!(
        "Traversal done: {} leaves, {} edge records, {} distinct edges",
        leaves,
        ledger.recorded(),
        ledger.unique()
    );

    let outer = ledger.outer_edges();
    for (a, b) in &outer {
        canvas.draw_segment(view.apply(*a), view.apply(*b), ShapeColor::BLACK);
    }

    let stats = SceneStats {
        depth: config.recursion_depth,
        leaves,
        raw_edges: ledger.recorded(),
        unique_edges: ledger.unique(),
        outer_edges: outer.len(),
        multiplicity: ledger.histogram(),
    };
    log::info!(
        "Rendered depth {}: {} leaves, {} of {} distinct edges on the outer shell",
        stats.depth,
        stats.leaves,
        stats.outer_edges,
        stats.unique_edges
    );
    stats
}

#[cfg(test)]
mod tests {
    use super::*;

    /// One recorded draw call
    #[derive(Debug, Clone, PartialEq)]
    enum DrawOp {
        Fill(Vec<Point2>, ShapeColor),
        Segment(Point2, Point2, ShapeColor),
    }

    /// Canvas that only remembers what it was asked to draw, in call order
    #[derive(Default)]
    struct RecordingCanvas {
        ops: Vec<DrawOp>,
    }

    impl RecordingCanvas {
        fn polygons(&self) -> Vec<(&[Point2], ShapeColor)> {
            self.ops
                .iter()
                .filter_map(|op| match op {
                    DrawOp::Fill(pts, c) => Some((pts.as_slice(), *c)),
                    DrawOp::Segment(..) => None,
                })
                .collect()
        }

        fn segments(&self) -> Vec<(Point2, Point2, ShapeColor)> {
            self.ops
                .iter()
                .filter_map(|op| match op {
                    DrawOp::Segment(a, b, c) => Some((*a, *b, *c)),
                    DrawOp::Fill(..) => None,
                })
                .collect()
        }
    }

    impl Canvas for RecordingCanvas {
        fn fill_polygon(&mut self, points: &[Point2], color: ShapeColor) {
            self.ops.push(DrawOp::Fill(points.to_vec(), color));
        }

        fn draw_segment(&mut self, a: Point2, b: Point2, color: ShapeColor) {
            self.ops.push(DrawOp::Segment(a, b, color));
        }
    }

    fn config(depth: u32) -> RenderConfig {
        RenderConfig {
            recursion_depth: depth,
            ..Default::default()
        }
    }

    #[test]
    fn test_single_cube_draws_all_edges() {
        let mut canvas = RecordingCanvas::default();
        let stats = render_scene(&config(0), &mut canvas);

        assert_eq!(stats.leaves, 1);
        assert_eq!(stats.raw_edges, 12);
        assert_eq!(stats.outer_edges, 12);
        assert_eq!(canvas.polygons().len(), 6);
        assert_eq!(canvas.segments().len(), 12);
        assert!(canvas.polygons().iter().all(|(pts, _)| pts.len() == 4));
    }

    #[test]
    fn test_depth_one_suppresses_shared_edges() {
        let mut canvas = RecordingCanvas::default();
        let stats = render_scene(&config(1), &mut canvas);

        assert_eq!(stats.leaves, 20);
        assert_eq!(stats.raw_edges, 240);
        assert!(stats.outer_edges > 0 && stats.outer_edges < 240);
        assert_eq!(stats.unique_edges, 144);
        assert_eq!(stats.outer_edges, 72);
        assert_eq!(
            stats.multiplicity,
            BTreeMap::from([(1, 72), (2, 48), (3, 24)])
        );
        assert_eq!(canvas.polygons().len(), 20 * 6);
        assert_eq!(canvas.segments().len(), 72);
    }

    #[test]
    fn test_depth_two_counts() {
        let mut canvas = RecordingCanvas::default();
        let stats = render_scene(&config(2), &mut canvas);

        assert_eq!(stats.leaves, 400);
        assert_eq!(stats.raw_edges, 4800);
        assert_eq!(stats.unique_edges, 2304);
        assert_eq!(stats.outer_edges, 744);
    }

    #[test]
    fn test_faces_filled_before_outlines_in_palette_colors() {
        let mut canvas = RecordingCanvas::default();
        render_scene(&config(1), &mut canvas);

        let first_segment = canvas
            .ops
            .iter()
            .position(|op| matches!(op, DrawOp::Segment(..)))
            .unwrap();
        assert_eq!(first_segment, 20 * 6);
        assert!(
            canvas.ops[first_segment..]
                .iter()
                .all(|op| matches!(op, DrawOp::Segment(..)))
        );

        assert!(
            canvas
                .polygons()
                .iter()
                .all(|(_, c)| *c == ShapeColor::LIGHT_BLUE)
        );
        assert!(canvas.segments().iter().all(|(_, _, c)| *c == ShapeColor::BLACK));
    }

    #[test]
    fn test_outlines_stay_inside_default_window() {
        let mut canvas = RecordingCanvas::default();
        let cfg = config(1);
        render_scene(&cfg, &mut canvas);

        for (a, b, _) in &canvas.segments() {
            for p in [a, b] {
                assert!(p.x.abs() < cfg.world_extent && p.y.abs() < cfg.world_extent);
            }
        }
    }

    #[test]
    fn test_stats_serialize_to_json() {
        let mut canvas = RecordingCanvas::default();
        let stats = render_scene(&config(0), &mut canvas);
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["leaves"], 1);
        assert_eq!(json["outer_edges"], 12);
        assert_eq!(json["multiplicity"]["1"], 12);
    }
}
