//! Image rendering using tiny-skia
//!
//! `PixmapCanvas` rasterizes projected faces and outlines into an
//! offscreen pixmap that is later saved to disk.

use anyhow::Context;
use image::RgbaImage;
use tiny_skia::{FillRule, LineCap, LineJoin, Paint, Path, PathBuilder, Pixmap, Stroke, Transform};

use super::canvas::Canvas;
use super::geometry::ScreenMapping;
use crate::domain::{Point2, ShapeColor};

/// Offscreen raster canvas
pub struct PixmapCanvas {
    pixmap: Pixmap,
    mapping: ScreenMapping,
    line_width: f32,
}

impl PixmapCanvas {
    /// Create a canvas cleared to `background`
    pub fn new(
        mapping: ScreenMapping,
        line_width: f32,
        background: ShapeColor,
    ) -> anyhow::Result<Self> {
        let mut pixmap = Pixmap::new(mapping.width, mapping.height).with_context(|| {
            format!("Failed to allocate {}x{} pixmap", mapping.width, mapping.height)
        })?;
        let [r, g, b, a] = background.to_rgba_u8();
        pixmap.fill(tiny_skia::Color::from_rgba8(r, g, b, a));

        Ok(Self {
            pixmap,
            mapping,
            line_width,
        })
    }

    /// Get the width of the canvas in pixels
    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    /// Get the height of the canvas in pixels
    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Hand the pixels over as an RgbaImage
    ///
    /// Everything drawn is opaque, so the premultiplied pixmap data is
    /// already straight RGBA.
    pub fn into_image(self) -> anyhow::Result<RgbaImage> {
        let (w, h) = (self.pixmap.width(), self.pixmap.height());
        RgbaImage::from_raw(w, h, self.pixmap.take())
            .ok_or_else(|| anyhow::anyhow!("Pixmap had incorrect size"))
    }

    fn build_polygon_path(&self, points: &[Point2]) -> Option<Path> {
        let (first, rest) = points.split_first()?;
        let mut pb = PathBuilder::new();

        let (x, y) = self.mapping.to_pixel(*first);
        pb.move_to(x, y);
        for p in rest {
            let (x, y) = self.mapping.to_pixel(*p);
            pb.line_to(x, y);
        }

        pb.close();
        pb.finish()
    }

    fn stroke(&self) -> Stroke {
        Stroke {
            width: self.line_width,
            line_cap: LineCap::Round,
            line_join: LineJoin::Round,
            ..Default::default()
        }
    }
}

fn paint_for(color: ShapeColor) -> Paint<'static> {
    let [r, g, b, a] = color.to_rgba_u8();
    let mut paint = Paint::default();
    paint.set_color_rgba8(r, g, b, a);
    paint.anti_alias = true;
    paint
}

impl Canvas for PixmapCanvas {
    fn fill_polygon(&mut self, points: &[Point2], color: ShapeColor) {
        if points.len() < 3 {
            return;
        }
        let Some(path) = self.build_polygon_path(points) else {
            return;
        };

        let paint = paint_for(color);
        self.pixmap
            .fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);

        // Same-color outline hides the anti-aliased gap between abutting faces
        let stroke = self.stroke();
        self.pixmap
            .stroke_path(&path, &paint, &stroke, Transform::identity(), None);
    }

    fn draw_segment(&mut self, a: Point2, b: Point2, color: ShapeColor) {
        let (x1, y1) = self.mapping.to_pixel(a);
        let (x2, y2) = self.mapping.to_pixel(b);

        let mut pb = PathBuilder::new();
        pb.move_to(x1, y1);
        pb.line_to(x2, y2);
        let Some(path) = pb.finish() else {
            return;
        };

        let paint = paint_for(color);
        let stroke = self.stroke();
        self.pixmap
            .stroke_path(&path, &paint, &stroke, Transform::identity(), None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas() -> PixmapCanvas {
        let mapping = ScreenMapping {
            extent: 100.0,
            width: 200,
            height: 200,
        };
        PixmapCanvas::new(mapping, 1.0, ShapeColor::WHITE).unwrap()
    }

    #[test]
    fn test_new_canvas_is_background() {
        let img = canvas().into_image().unwrap();
        assert_eq!((img.width(), img.height()), (200, 200));
        assert!(img.pixels().all(|p| p.0 == [255, 255, 255, 255]));
    }

    #[test]
    fn test_fill_polygon_covers_interior() {
        let mut c = canvas();
        let square = [
            Point2::new(-50.0, -50.0),
            Point2::new(50.0, -50.0),
            Point2::new(50.0, 50.0),
            Point2::new(-50.0, 50.0),
        ];
        c.fill_polygon(&square, ShapeColor::LIGHT_BLUE);
        let img = c.into_image().unwrap();

        assert_eq!(img.get_pixel(100, 100).0, [173, 216, 230, 255]);
        assert_eq!(img.get_pixel(5, 5).0, [255, 255, 255, 255]);
    }

    #[test]
    fn test_degenerate_polygon_is_ignored() {
        let mut c = canvas();
        let line = [Point2::new(0.0, 0.0), Point2::new(10.0, 10.0)];
        c.fill_polygon(&line, ShapeColor::BLACK);
        let img = c.into_image().unwrap();
        assert!(img.pixels().all(|p| p.0 == [255, 255, 255, 255]));
    }

    #[test]
    fn test_draw_segment_marks_pixels_on_line() {
        let mut c = canvas();
        let (a, b) = (Point2::new(-80.0, 0.5), Point2::new(80.0, 0.5));
        c.draw_segment(a, b, ShapeColor::BLACK);
        let img = c.into_image().unwrap();

        // y = 0.5 world maps to pixel row 99.5, the center of row 99
        let p = img.get_pixel(100, 99).0;
        assert!(p[0] < 64, "expected a dark pixel, got {p:?}");
        assert_eq!(img.get_pixel(100, 150).0, [255, 255, 255, 255]);
    }
}
